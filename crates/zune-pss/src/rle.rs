/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Byte pair run length decoding of channel streams.
//!
//! Every channel is stored as a sequence of `(control, value)` byte pairs
//! where `control` is a signed byte:
//!
//! - `0` emits `value` once
//! - `-127..=-1` emits `value` `-control + 1` times (2 to 128 copies)
//! - anything else never occurs in a well formed file and aborts decoding
//!
//! Unlike PackBits there are no literal spans, every pair stands alone.
use zune_core::log::{error, trace};

use crate::channel::ChannelBuffer;
use crate::constants::{CHANNEL_COUNT, MAX_DIMENSION};
use crate::errors::PssDecodeErrors;
use crate::length_table::LengthTable;

/// Number of samples a control byte expands to or `None`
/// if the control byte is invalid
#[inline]
pub const fn run_length(control: i8) -> Option<usize> {
    match control {
        0 => Some(1),
        -127..=-1 => Some(control.unsigned_abs() as usize + 1),
        _ => None
    }
}

/// Decode a single channel stream.
///
/// Returns the decoded samples and how many were produced.
/// Output is capped at the largest image the decoder accepts,
/// see [`decode_channel_with_limit`] for a tighter cap.
pub fn decode_channel(bytes: &[u8]) -> Result<(ChannelBuffer, usize), PssDecodeErrors> {
    decode_channel_with_limit(bytes, MAX_DIMENSION * MAX_DIMENSION)
}

/// Decode a single channel stream producing at most `limit` samples
///
/// # Errors
/// - [`InvalidControlByte`](PssDecodeErrors::InvalidControlByte) for a control byte in `1..=127` or `-128`
/// - [`IncompleteRunPair`](PssDecodeErrors::IncompleteRunPair) if the stream has an odd length
/// - [`TooManyPixels`](PssDecodeErrors::TooManyPixels) if the stream expands past `limit`
pub fn decode_channel_with_limit(
    bytes: &[u8], limit: usize
) -> Result<(ChannelBuffer, usize), PssDecodeErrors> {
    let mut buffer = ChannelBuffer::new()?;
    let mut produced = 0_usize;

    let mut pairs = bytes.chunks_exact(2);

    for (i, pair) in pairs.by_ref().enumerate() {
        let control = pair[0] as i8;
        let value = pair[1];

        let count = match run_length(control) {
            Some(count) => count,
            None => {
                error!("RLE unpacking: this value ({}) should not be used", control);
                return Err(PssDecodeErrors::InvalidControlByte {
                    control,
                    position: i * 2
                });
            }
        };
        produced += count;

        if produced > limit {
            return Err(PssDecodeErrors::TooManyPixels(limit));
        }
        if count == 1 {
            buffer.push(value)?;
        } else {
            buffer.push_run(value, count)?;
        }
    }
    if !pairs.remainder().is_empty() {
        return Err(PssDecodeErrors::IncompleteRunPair(bytes.len()));
    }

    Ok((buffer, produced))
}

/// Split the compressed payload into per channel streams using
/// sizes from the length table
pub fn split_payload<'a>(
    payload: &'a [u8], table: &LengthTable
) -> Result<[&'a [u8]; CHANNEL_COUNT], PssDecodeErrors> {
    let mut streams: [&[u8]; CHANNEL_COUNT] = [&[]; CHANNEL_COUNT];
    let mut offset = 0;

    for (channel, stream) in streams.iter_mut().enumerate() {
        let end = offset + table.channel_size(channel);

        *stream = payload
            .get(offset..end)
            .ok_or(PssDecodeErrors::Generic("Compressed payload shorter than length table"))?;
        offset = end;
    }
    Ok(streams)
}

/// Decode all channels and confirm they produced the same number of samples.
///
/// Each channel is decoded on its own, with no state shared between them.
pub fn decode_channels(
    streams: [&[u8]; CHANNEL_COUNT], limit: usize
) -> Result<[ChannelBuffer; CHANNEL_COUNT], PssDecodeErrors> {
    let (r, r_len) = decode_channel_with_limit(streams[0], limit)?;
    let (g, g_len) = decode_channel_with_limit(streams[1], limit)?;
    let (b, b_len) = decode_channel_with_limit(streams[2], limit)?;

    trace!("Decoded channel lengths r: {} g: {} b: {}", r_len, g_len, b_len);

    verify_channel_lengths([r_len, g_len, b_len])?;

    Ok([r, g, b])
}

/// Ensure every channel decoded to the same length, returning that length
pub fn verify_channel_lengths(lengths: [usize; CHANNEL_COUNT]) -> Result<usize, PssDecodeErrors> {
    if lengths.iter().any(|x| *x != lengths[0]) {
        return Err(PssDecodeErrors::ChannelLengthMismatch(lengths));
    }
    Ok(lengths[0])
}
