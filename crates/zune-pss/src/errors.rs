/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use zune_core::bytestream::ZByteIoError;

use crate::constants::PSS_SIGNATURE;

/// Errors that can occur while decoding a Paintstorm document
pub enum PssDecodeErrors {
    /// The first four bytes are not the Paintstorm signature.
    ///
    /// Contains the bytes actually found
    WrongMagicBytes([u8; 4]),
    /// Width or height exceed the decoder limit
    ///
    /// # Arguments
    /// - 1st argument is the limit
    /// - 2nd argument is the value found in the header
    LargeDimensions(usize, usize),
    /// A run control byte outside `0` and `-127..=-1`
    InvalidControlByte {
        /// The offending control byte
        control:  i8,
        /// Byte offset of the control byte inside its channel stream
        position: usize
    },
    /// The channel stream ended between a control byte and its value.
    ///
    /// Contains the length of the stream
    IncompleteRunPair(usize),
    /// A channel expanded past the number of pixels the image can hold
    ///
    /// Contains the limit that was exceeded
    TooManyPixels(usize),
    /// The length table declares more compressed bytes for a channel
    /// than an image of this size can use
    StreamTooLarge {
        /// Channel index, 0 for red
        channel: usize,
        /// Declared compressed size in bytes
        size:    usize,
        /// Largest size a valid stream can have
        limit:   usize
    },
    /// The three channels decoded to different lengths
    ChannelLengthMismatch([usize; 3]),
    /// Pixel count derived from the header doesn't match the decoded channels
    ///
    /// # Arguments
    /// - 1st argument is `width * height`
    /// - 2nd argument is the decoded channel length
    PixelCountMismatch(usize, usize),
    /// Read past the end of a channel buffer
    ///
    /// # Arguments
    /// - 1st argument is the requested index
    /// - 2nd argument is the buffer length
    OutOfBounds(usize, usize),
    /// An allocation of the given number of bytes failed
    OutOfMemory(usize),
    /// Truncated input or another error from the byte reader
    IoErrors(ZByteIoError),
    /// Error from the output sink
    Io(std::io::Error),
    Generic(&'static str)
}

impl PssDecodeErrors {
    /// Whether the error should stop the process outright.
    ///
    /// Only allocation failures are fatal, every other error
    /// can be recovered from by the caller.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, PssDecodeErrors::OutOfMemory(_))
    }
}

impl Debug for PssDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PssDecodeErrors::WrongMagicBytes(found) => {
                writeln!(
                    f,
                    "File signature mismatch, expected {:02x?} but found {:02x?}",
                    PSS_SIGNATURE, found
                )
            }
            PssDecodeErrors::LargeDimensions(supported, found) => {
                writeln!(
                    f,
                    "Too large dimensions, supported {supported} but found {found}"
                )
            }
            PssDecodeErrors::InvalidControlByte { control, position } => {
                writeln!(
                    f,
                    "RLE unpacking: unexpected control value {control} at offset {position}"
                )
            }
            PssDecodeErrors::IncompleteRunPair(length) => {
                writeln!(
                    f,
                    "RLE unpacking: channel stream of {length} bytes ends in the middle of a run"
                )
            }
            PssDecodeErrors::TooManyPixels(limit) => {
                writeln!(f, "RLE unpacking: channel expands past {limit} pixels")
            }
            PssDecodeErrors::StreamTooLarge {
                channel,
                size,
                limit
            } => {
                writeln!(
                    f,
                    "Channel {channel} declares {size} compressed bytes, at most {limit} can be valid"
                )
            }
            PssDecodeErrors::ChannelLengthMismatch([r, g, b]) => {
                writeln!(
                    f,
                    "Decoded channel lengths diverge, r: {r} g: {g} b: {b}"
                )
            }
            PssDecodeErrors::PixelCountMismatch(expected, found) => {
                writeln!(
                    f,
                    "Image has {expected} pixels but channels decoded to {found}"
                )
            }
            PssDecodeErrors::OutOfBounds(index, len) => {
                writeln!(f, "Index {index} is out of bounds for length {len}")
            }
            PssDecodeErrors::OutOfMemory(size) => {
                writeln!(f, "Out of memory, could not allocate {size} bytes")
            }
            PssDecodeErrors::IoErrors(e) => {
                writeln!(f, "I/O error :{:?}", e)
            }
            PssDecodeErrors::Io(e) => {
                writeln!(f, "I/O error :{}", e)
            }
            PssDecodeErrors::Generic(reason) => {
                writeln!(f, "{reason}")
            }
        }
    }
}

impl Display for PssDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for PssDecodeErrors {}

impl From<&'static str> for PssDecodeErrors {
    fn from(r: &'static str) -> Self {
        Self::Generic(r)
    }
}

impl From<ZByteIoError> for PssDecodeErrors {
    fn from(r: ZByteIoError) -> Self {
        Self::IoErrors(r)
    }
}

impl From<std::io::Error> for PssDecodeErrors {
    fn from(r: std::io::Error) -> Self {
        Self::Io(r)
    }
}
