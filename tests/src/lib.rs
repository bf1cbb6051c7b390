/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Builders for synthetic Paintstorm documents shared by the tests

#![allow(unused_imports, unused)]

use xxhash_rust::xxh3::xxh3_128;
use zune_pss::constants::{PSS_HEADER_SIZE, PSS_SIGNATURE};

mod pss;

/// RLE encode one row, returning the number of bytes written
pub fn encode_row(row: &[u8], out: &mut Vec<u8>) -> u16 {
    let start = out.len();
    let mut i = 0;

    while i < row.len() {
        let value = row[i];
        let mut run = 1;

        while i + run < row.len() && row[i + run] == value && run < 128 {
            run += 1;
        }
        let control = if run == 1 { 0 } else { (1 - run as i16) as i8 };

        out.extend_from_slice(&[control as u8, value]);
        i += run;
    }
    (out.len() - start) as u16
}

/// Build a complete document from three planar channels
pub fn encode_document(width: usize, height: usize, planes: [&[u8]; 3]) -> Vec<u8> {
    let mut header = vec![0; PSS_HEADER_SIZE];
    header[..4].copy_from_slice(&PSS_SIGNATURE);
    header[8..10].copy_from_slice(&(width as u16).to_be_bytes());
    header[12..14].copy_from_slice(&(height as u16).to_be_bytes());

    let mut table = Vec::new();
    let mut payload = Vec::new();

    for plane in planes {
        for row in plane.chunks(width.max(1)).take(height) {
            let size = encode_row(row, &mut payload);
            table.extend_from_slice(&size.to_be_bytes());
        }
    }
    header.extend_from_slice(&table);
    header.extend_from_slice(&payload);
    header
}

/// Interleave planar channels into RGB triples
pub fn interleave(planes: [&[u8]; 3]) -> Vec<u8> {
    planes[0]
        .iter()
        .zip(planes[1])
        .zip(planes[2])
        .flat_map(|((r, g), b)| [*r, *g, *b])
        .collect()
}

pub fn hash(contents: &[u8]) -> u128 {
    xxh3_128(contents)
}

#[test]
fn encoder_emits_longest_runs() {
    let mut out = Vec::new();
    let row = [5_u8; 130];

    assert_eq!(encode_row(&row, &mut out), 4);
    // 128 copies then 2 copies
    assert_eq!(out, [0x81, 5, 0xff, 5]);

    out.clear();
    assert_eq!(encode_row(&[1, 2, 2], &mut out), 4);
    assert_eq!(out, [0x00, 1, 0xff, 2]);
}
