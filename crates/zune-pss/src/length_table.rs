/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use zune_core::bytestream::{ZByteReaderTrait, ZReader};
use zune_core::log::trace;

use crate::constants::CHANNEL_COUNT;
use crate::errors::PssDecodeErrors;

/// Per row encoded byte counts for each channel.
///
/// The table sits right after the header, one block per channel,
/// each block holding a big endian `u16` per image row.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LengthTable {
    rows:          [Vec<u16>; CHANNEL_COUNT],
    channel_sizes: [usize; CHANNEL_COUNT]
}

impl LengthTable {
    /// Read `height` entries for every channel from `stream`
    pub fn read<T: ZByteReaderTrait>(
        stream: &mut ZReader<T>, height: usize
    ) -> Result<LengthTable, PssDecodeErrors> {
        let mut rows: [Vec<u16>; CHANNEL_COUNT] = Default::default();
        let mut channel_sizes = [0_usize; CHANNEL_COUNT];

        for (entries, size) in rows.iter_mut().zip(channel_sizes.iter_mut()) {
            entries
                .try_reserve_exact(height)
                .map_err(|_| PssDecodeErrors::OutOfMemory(height * 2))?;

            for _ in 0..height {
                let count = stream.get_u16_be_err()?;
                *size += usize::from(count);
                entries.push(count);
            }
        }
        trace!(
            "RLE channel sizes r: {} g: {} b: {} (bytes)",
            channel_sizes[0],
            channel_sizes[1],
            channel_sizes[2]
        );

        Ok(LengthTable {
            rows,
            channel_sizes
        })
    }

    /// Build a table from already known row counts
    pub fn from_rows(rows: [Vec<u16>; CHANNEL_COUNT]) -> LengthTable {
        let mut channel_sizes = [0; CHANNEL_COUNT];

        for (entries, size) in rows.iter().zip(channel_sizes.iter_mut()) {
            *size = entries.iter().map(|x| usize::from(*x)).sum();
        }
        LengthTable {
            rows,
            channel_sizes
        }
    }

    /// Encoded row byte counts of `channel`
    pub fn rows(&self, channel: usize) -> &[u16] {
        &self.rows[channel]
    }

    /// Compressed size of `channel` in bytes
    pub const fn channel_size(&self, channel: usize) -> usize {
        self.channel_sizes[channel]
    }

    pub const fn channel_sizes(&self) -> [usize; CHANNEL_COUNT] {
        self.channel_sizes
    }

    /// Reject channels whose declared size cannot belong to an
    /// image of `pixels` samples.
    ///
    /// Each pair yields at least one sample, so a valid stream is at most
    /// two bytes per pixel.
    pub fn verify_channel_sizes(&self, pixels: usize) -> Result<(), PssDecodeErrors> {
        let limit = pixels.saturating_mul(2);

        for (channel, size) in self.channel_sizes.iter().enumerate() {
            if *size > limit {
                return Err(PssDecodeErrors::StreamTooLarge {
                    channel,
                    size: *size,
                    limit
                });
            }
        }
        Ok(())
    }

    /// Size of the whole compressed payload
    pub fn total_encoded_size(&self) -> usize {
        self.channel_sizes.iter().sum()
    }

    /// Size the table itself occupies in the document
    pub fn table_size(&self) -> usize {
        self.rows.iter().map(|x| x.len() * 2).sum()
    }
}
