/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reassembly of decoded channels into a portable pixmap
use alloc::vec::Vec;
use core::fmt::{Display, Formatter};
use std::io::Write;

use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;

use crate::channel::ChannelBuffer;
use crate::constants::{CHANNEL_COUNT, MAX_SAMPLE_VALUE};
use crate::errors::PssDecodeErrors;
use crate::rle::verify_channel_lengths;

/// Pixmap flavours the assembler can write
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum PpmFormat {
    /// Plain text pixmap, one pixel per line
    #[default]
    P3,
    /// Binary pixmap
    P6
}

impl Display for PpmFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::P3 => write!(f, "P3"),
            Self::P6 => write!(f, "P6")
        }
    }
}

/// A fully decoded composite image, stored planar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width:    usize,
    height:   usize,
    channels: [ChannelBuffer; CHANNEL_COUNT]
}

impl DecodedImage {
    /// Bundle decoded channels with their dimensions.
    ///
    /// # Errors
    /// - [`ChannelLengthMismatch`](PssDecodeErrors::ChannelLengthMismatch) if channels differ in length
    /// - [`PixelCountMismatch`](PssDecodeErrors::PixelCountMismatch) if channels don't hold `width*height` samples
    pub fn new(
        width: usize, height: usize, channels: [ChannelBuffer; CHANNEL_COUNT]
    ) -> Result<DecodedImage, PssDecodeErrors> {
        let length = verify_channel_lengths([
            channels[0].len(),
            channels[1].len(),
            channels[2].len()
        ])?;

        let expected = width
            .checked_mul(height)
            .ok_or(PssDecodeErrors::Generic("Image dimensions overflow"))?;

        if expected != length {
            return Err(PssDecodeErrors::PixelCountMismatch(expected, length));
        }

        Ok(DecodedImage {
            width,
            height,
            channels
        })
    }

    /// Build an RGB image from a grayscale plane by copying it into every channel
    pub fn from_luma(
        width: usize, height: usize, luma: &[u8]
    ) -> Result<DecodedImage, PssDecodeErrors> {
        let mut plane = ChannelBuffer::new()?;
        plane.extend_from_slice(luma)?;

        DecodedImage::new(width, height, [plane.clone(), plane.clone(), plane])
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn colorspace(&self) -> ColorSpace {
        ColorSpace::RGB
    }

    pub const fn bit_depth(&self) -> BitDepth {
        BitDepth::Eight
    }

    /// Decoded samples of a single channel
    pub fn channel(&self, channel: usize) -> Option<&ChannelBuffer> {
        self.channels.get(channel)
    }

    /// Return the RGB triple at raster position `index`
    pub fn pixel(&self, index: usize) -> Result<[u8; 3], PssDecodeErrors> {
        Ok([
            self.channels[0].get(index)?,
            self.channels[1].get(index)?,
            self.channels[2].get(index)?
        ])
    }

    /// Interleave the channels into `RGBRGB...` order
    pub fn to_interleaved(&self) -> Result<Vec<u8>, PssDecodeErrors> {
        let size = self.width * self.height * CHANNEL_COUNT;
        let mut out = Vec::new();
        out.try_reserve_exact(size)
            .map_err(|_| PssDecodeErrors::OutOfMemory(size))?;

        for ((r, g), b) in self.samples() {
            out.extend_from_slice(&[*r, *g, *b]);
        }
        Ok(out)
    }

    /// Write the image as a portable pixmap.
    ///
    /// `writer` should be buffered, `P3` output issues one write per pixel.
    pub fn write_ppm<W: Write>(
        &self, writer: &mut W, format: PpmFormat
    ) -> Result<(), PssDecodeErrors> {
        write!(
            writer,
            "{format}\n{} {}\n{}\n",
            self.width, self.height, MAX_SAMPLE_VALUE
        )?;

        match format {
            PpmFormat::P3 => {
                for ((r, g), b) in self.samples() {
                    writeln!(writer, "{r} {g} {b}")?;
                }
            }
            PpmFormat::P6 => {
                for ((r, g), b) in self.samples() {
                    writer.write_all(&[*r, *g, *b])?;
                }
            }
        }
        writer.flush()?;

        Ok(())
    }

    fn samples(&self) -> impl Iterator<Item = ((&u8, &u8), &u8)> {
        let [r, g, b] = &self.channels;

        r.as_slice()
            .iter()
            .zip(g.as_slice())
            .zip(b.as_slice())
    }
}
