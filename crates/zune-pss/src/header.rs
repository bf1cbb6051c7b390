/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use zune_core::bytestream::{ZByteReaderTrait, ZReader};

use crate::constants::{HEIGHT_OFFSET, PSS_HEADER_SIZE, PSS_SIGNATURE, WIDTH_OFFSET};
use crate::errors::PssDecodeErrors;

/// Image information carried in the fixed 40 byte document header
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PssHeader {
    pub width:  usize,
    pub height: usize
}

impl PssHeader {
    /// Read and validate the header from the start of `stream`
    ///
    /// Dimensions larger than `max_width` or `max_height` are rejected
    /// here, before anything dependent on them gets allocated.
    pub fn read<T: ZByteReaderTrait>(
        stream: &mut ZReader<T>, max_width: usize, max_height: usize
    ) -> Result<PssHeader, PssDecodeErrors> {
        let bytes = stream.read_fixed_bytes_or_error::<PSS_HEADER_SIZE>()?;

        PssHeader::parse(&bytes, max_width, max_height)
    }

    /// Validate an already read header
    pub fn parse(
        bytes: &[u8; PSS_HEADER_SIZE], max_width: usize, max_height: usize
    ) -> Result<PssHeader, PssDecodeErrors> {
        let signature = [bytes[0], bytes[1], bytes[2], bytes[3]];

        if signature != PSS_SIGNATURE {
            return Err(PssDecodeErrors::WrongMagicBytes(signature));
        }
        let width = usize::from(read_u16_be(bytes, WIDTH_OFFSET));
        let height = usize::from(read_u16_be(bytes, HEIGHT_OFFSET));

        if width > max_width {
            return Err(PssDecodeErrors::LargeDimensions(max_width, width));
        }
        if height > max_height {
            return Err(PssDecodeErrors::LargeDimensions(max_height, height));
        }

        Ok(PssHeader { width, height })
    }

    /// Number of pixels each channel must decode to
    pub const fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

/// Compose a big endian u16 from two bytes at `offset`
#[inline]
pub(crate) fn read_u16_be(bytes: &[u8], offset: usize) -> u16 {
    (u16::from(bytes[offset]) << 8) | u16::from(bytes[offset + 1])
}
