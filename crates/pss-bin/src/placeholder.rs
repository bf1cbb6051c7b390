/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image written in place of the composite when a document can't be decoded
use std::io::Write;

use zune_pss::errors::PssDecodeErrors;
use zune_pss::{DecodedImage, PpmFormat};

pub const PLACEHOLDER_WIDTH: usize = 16;
pub const PLACEHOLDER_HEIGHT: usize = 16;

/// Grayscale crossed out box
#[rustfmt::skip]
pub static PLACEHOLDER: [u8; PLACEHOLDER_WIDTH * PLACEHOLDER_HEIGHT] = [
    0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40,
    0x40, 0x60, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x60, 0x40,
    0x40, 0xc0, 0x60, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x60, 0xc0, 0x40,
    0x40, 0xc0, 0xc0, 0x60, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x60, 0xc0, 0xc0, 0x40,
    0x40, 0xc0, 0xc0, 0xc0, 0x60, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x60, 0xc0, 0xc0, 0xc0, 0x40,
    0x40, 0xc0, 0xc0, 0xc0, 0xc0, 0x60, 0xc0, 0xc0, 0xc0, 0xc0, 0x60, 0xc0, 0xc0, 0xc0, 0xc0, 0x40,
    0x40, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x60, 0xc0, 0xc0, 0x60, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x40,
    0x40, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x60, 0x60, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x40,
    0x40, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x60, 0x60, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x40,
    0x40, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x60, 0xc0, 0xc0, 0x60, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x40,
    0x40, 0xc0, 0xc0, 0xc0, 0xc0, 0x60, 0xc0, 0xc0, 0xc0, 0xc0, 0x60, 0xc0, 0xc0, 0xc0, 0xc0, 0x40,
    0x40, 0xc0, 0xc0, 0xc0, 0x60, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x60, 0xc0, 0xc0, 0xc0, 0x40,
    0x40, 0xc0, 0xc0, 0x60, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x60, 0xc0, 0xc0, 0x40,
    0x40, 0xc0, 0x60, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x60, 0xc0, 0x40,
    0x40, 0x60, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x60, 0x40,
    0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40,
];

/// Write the placeholder as a plain text pixmap
pub fn write_placeholder<W: Write>(writer: &mut W) -> Result<(), PssDecodeErrors> {
    let image = DecodedImage::from_luma(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, &PLACEHOLDER)?;

    image.write_ppm(writer, PpmFormat::P3)
}
