/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};
use zune_core::bytestream::ZCursor;
use zune_pss::errors::PssDecodeErrors;
use zune_pss::rle::decode_channel;
use zune_pss::{PpmFormat, PssDecoder};

use crate::{encode_document, encode_row, hash, interleave};

/// Random image with few distinct values so the encoder produces real runs
fn random_planes(rng: &mut WyRand, size: usize) -> [Vec<u8>; 3] {
    [0, 1, 2].map(|_| {
        let mut plane = vec![0_u8; size];
        rng.fill(&mut plane);

        let mask = [0xff, 0xf0, 0xc0][rng.generate_range(0_usize..3)];
        plane.iter_mut().for_each(|x| *x &= mask);
        plane
    })
}

#[test]
fn random_images_round_trip() {
    let mut rng = WyRand::new_seed(0x0050_5353);

    for (width, height) in [(1, 1), (7, 3), (64, 64), (300, 2), (2, 300), (129, 5)] {
        let [r, g, b] = random_planes(&mut rng, width * height);
        let planes = [&r[..], &g[..], &b[..]];

        let document = encode_document(width, height, planes);

        let mut decoder = PssDecoder::new(ZCursor::new(&document));
        let pixels = decoder.decode_raw().unwrap();

        let expected = interleave(planes);
        assert_eq!(
            hash(&pixels),
            hash(&expected),
            "hash mismatch for {width}x{height} image"
        );
        assert_eq!(pixels, expected);
    }
}

#[test]
fn produced_counts_match_row_sums() {
    let mut rng = WyRand::new_seed(7);
    let width = 97;
    let height = 11;

    let planes = random_planes(&mut rng, width * height);

    for plane in &planes {
        let mut stream = Vec::new();
        let mut row_sum = 0_usize;

        for row in plane.chunks(width) {
            row_sum += usize::from(encode_row(row, &mut stream));
        }
        assert_eq!(row_sum, stream.len());

        let (buffer, produced) = decode_channel(&stream).unwrap();
        assert_eq!(produced, width * height);
        assert_eq!(buffer.as_slice(), &plane[..]);
    }
}

#[test]
fn solid_image_uses_long_runs() {
    let width = 1000;
    let height = 3;
    let r = vec![255_u8; width * height];
    let g = vec![0_u8; width * height];
    let b = vec![128_u8; width * height];

    let document = encode_document(width, height, [&r, &g, &b]);

    // 1000 samples is 7 runs of 128 plus one of 104, per row
    let payload_size = 3 * height * 8 * 2;
    assert_eq!(document.len(), 40 + 3 * height * 2 + payload_size);

    let image = PssDecoder::new(ZCursor::new(&document)).decode().unwrap();

    for i in [0, 999, 1000, 2999] {
        assert_eq!(image.pixel(i).unwrap(), [255, 0, 128]);
    }
}

#[test]
fn plain_pixmap_has_one_line_per_pixel() {
    let mut rng = WyRand::new_seed(99);
    let (width, height) = (13, 9);
    let [r, g, b] = random_planes(&mut rng, width * height);

    let document = encode_document(width, height, [&r, &g, &b]);
    let image = PssDecoder::new(ZCursor::new(&document)).decode().unwrap();

    let mut out = Vec::new();
    image.write_ppm(&mut out, PpmFormat::P3).unwrap();
    let text = String::from_utf8(out).unwrap();

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("P3"));
    assert_eq!(lines.next(), Some("13 9"));
    assert_eq!(lines.next(), Some("255"));

    let pixels: Vec<&str> = lines.collect();
    assert_eq!(pixels.len(), width * height);

    for (i, line) in pixels.iter().enumerate() {
        let samples: Vec<u8> = line.split(' ').map(|x| x.parse().unwrap()).collect();
        assert_eq!(samples, [r[i], g[i], b[i]]);
    }
}

#[test]
fn binary_pixmap_matches_raw_decode() {
    let mut rng = WyRand::new_seed(1234);
    let (width, height) = (31, 17);
    let [r, g, b] = random_planes(&mut rng, width * height);
    let document = encode_document(width, height, [&r, &g, &b]);

    let raw = PssDecoder::new(ZCursor::new(&document)).decode_raw().unwrap();
    let image = PssDecoder::new(ZCursor::new(&document)).decode().unwrap();

    let mut out = Vec::new();
    image.write_ppm(&mut out, PpmFormat::P6).unwrap();

    let header = b"P6\n31 17\n255\n";
    assert_eq!(&out[..header.len()], header);
    assert_eq!(hash(&out[header.len()..]), hash(&raw));
}

#[test]
fn empty_image() {
    let document = encode_document(0, 0, [&[], &[], &[]]);
    let image = PssDecoder::new(ZCursor::new(&document)).decode().unwrap();

    let mut out = Vec::new();
    image.write_ppm(&mut out, PpmFormat::P3).unwrap();
    assert_eq!(out, b"P3\n0 0\n255\n");
}

#[test]
fn corrupt_control_byte_fails_whole_document() {
    let (width, height) = (4, 1);
    let plane = [1_u8, 2, 3, 4];
    let mut document = encode_document(width, height, [&plane, &plane, &plane]);

    // last channel's final control byte, turned into a forbidden positive value
    let position = document.len() - 2;
    assert_eq!(document[position], 0x00);
    document[position] = 0x7f;

    assert!(matches!(
        PssDecoder::new(ZCursor::new(&document)).decode(),
        Err(PssDecodeErrors::InvalidControlByte {
            control:  127,
            position: 6
        })
    ));
}

#[test]
fn random_corruption_never_panics() {
    let mut rng = WyRand::new_seed(0xdead_beef);
    let (width, height) = (24, 6);
    let [r, g, b] = random_planes(&mut rng, width * height);
    let document = encode_document(width, height, [&r, &g, &b]);

    for _ in 0..500 {
        let mut corrupt = document.clone();

        for _ in 0..rng.generate_range(1_usize..=4) {
            let position = rng.generate_range(0..corrupt.len());
            corrupt[position] = rng.generate();
        }
        if rng.generate_range(0_u8..4) == 0 {
            let keep = rng.generate_range(0..corrupt.len());
            corrupt.truncate(keep);
        }

        if let Ok(image) = PssDecoder::new(ZCursor::new(&corrupt)).decode() {
            let (w, h) = image.dimensions();
            let mut out = Vec::new();
            image.write_ppm(&mut out, PpmFormat::P3).unwrap();
            assert_eq!(out.iter().filter(|x| **x == b'\n').count(), 3 + w * h);
        }
    }
}
