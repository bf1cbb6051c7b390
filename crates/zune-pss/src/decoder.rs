/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Paintstorm Studio document reader.
//!
//! A document starts with a 40 byte header, followed by a table holding the
//! RLE encoded size of every row of every channel, followed by the encoded
//! channels themselves, red then green then blue.
//!
//! Only the flattened composite is extracted, layers and brushes
//! stored further in the file are ignored.
use alloc::vec::Vec;

use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::{ZByteReaderTrait, ZReader};
use zune_core::colorspace::ColorSpace;
use zune_core::log::{trace, warn};
use zune_core::options::DecoderOptions;

use crate::channel::ChannelBuffer;
use crate::constants::{CHANNEL_COUNT, MAX_DIMENSION, PAYLOAD_CHUNK_SIZE, PSS_HEADER_SIZE};
use crate::errors::PssDecodeErrors;
use crate::header::PssHeader;
use crate::image::DecodedImage;
use crate::length_table::LengthTable;
use crate::rle::{decode_channels, split_payload};

/// A Paintstorm Studio document decoder.
///
/// # Example
/// ```no_run
/// use zune_core::bytestream::ZCursor;
/// use zune_pss::PssDecoder;
///
/// let data = std::fs::read("drawing.pss").unwrap();
/// let mut decoder = PssDecoder::new(ZCursor::new(&data));
///
/// let image = decoder.decode().unwrap();
/// let (width, height) = image.dimensions();
/// ```
///
/// A decoder reads its stream once. After any error the stream position
/// is unknown and further calls fail instead of reading from the middle
/// of the document.
pub struct PssDecoder<T>
where
    T: ZByteReaderTrait
{
    width:          usize,
    height:         usize,
    decoded_header: bool,
    failed:         bool,
    stream:         ZReader<T>,
    options:        DecoderOptions,
    length_table:   Option<LengthTable>
}

impl<T> PssDecoder<T>
where
    T: ZByteReaderTrait
{
    /// Create a new decoder that reads a Paintstorm document from `data`
    pub fn new(data: T) -> PssDecoder<T> {
        Self::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new decoder with custom options.
    ///
    /// `max_width` and `max_height` from `options` can only lower the
    /// built in limit of [`MAX_DIMENSION`], never raise it.
    pub fn new_with_options(data: T, options: DecoderOptions) -> PssDecoder<T> {
        PssDecoder {
            width: 0,
            height: 0,
            decoded_header: false,
            failed: false,
            stream: ZReader::new(data),
            options,
            length_table: None
        }
    }

    /// Decode the document header and the RLE length table
    ///
    /// After this succeeds [`dimensions`](Self::dimensions) and
    /// [`length_table`](Self::length_table) return values.
    pub fn decode_headers(&mut self) -> Result<(), PssDecodeErrors> {
        if self.decoded_header {
            return Ok(());
        }
        self.check_not_failed()?;

        let result = self.read_headers();
        self.failed = result.is_err();
        result
    }

    fn read_headers(&mut self) -> Result<(), PssDecodeErrors> {
        let max_width = self.options.max_width().min(MAX_DIMENSION);
        let max_height = self.options.max_height().min(MAX_DIMENSION);

        let header = PssHeader::read(&mut self.stream, max_width, max_height)?;

        trace!("Image width: {}", header.width);
        trace!("Image height: {}", header.height);
        trace!("RLE information block size: {} bytes", header.height * 2 * CHANNEL_COUNT);

        let table = LengthTable::read(&mut self.stream, header.height)?;

        trace!("Size of encoded data: {}", table.total_encoded_size());
        trace!(
            "RLE data starts at {} bytes",
            PSS_HEADER_SIZE + table.table_size()
        );

        self.width = header.width;
        self.height = header.height;
        self.length_table = Some(table);
        self.decoded_header = true;

        Ok(())
    }

    /// Decode the three colour channels without interleaving them
    ///
    /// The channels are guaranteed to be of equal length, each at most
    /// `width * height` samples.
    pub fn decode_channels(&mut self) -> Result<[ChannelBuffer; CHANNEL_COUNT], PssDecodeErrors> {
        self.decode_headers()?;
        self.check_not_failed()?;

        let result = self.read_channels();
        self.failed = result.is_err();
        result
    }

    fn read_channels(&mut self) -> Result<[ChannelBuffer; CHANNEL_COUNT], PssDecodeErrors> {
        let pixels = self.width * self.height;

        let total = {
            let table = self.decoded_table()?;
            table.verify_channel_sizes(pixels)?;
            table.total_encoded_size()
        };
        let payload = self.read_payload(total)?;

        if !self.stream.eof()? {
            warn!("Extra data after the compressed composite, ignoring");
        }
        let streams = split_payload(&payload, self.decoded_table()?)?;

        decode_channels(streams, pixels)
    }

    /// Read `size` payload bytes, growing the buffer only as input arrives
    ///
    /// A table claiming more data than the document holds fails with
    /// a read error long before the claimed size is allocated.
    fn read_payload(&mut self, size: usize) -> Result<Vec<u8>, PssDecodeErrors> {
        let mut payload = Vec::new();
        let mut chunk = [0_u8; PAYLOAD_CHUNK_SIZE];
        let mut remaining = size;

        while remaining > 0 {
            let take = remaining.min(PAYLOAD_CHUNK_SIZE);

            self.stream.read_exact_bytes(&mut chunk[..take])?;

            payload
                .try_reserve(take)
                .map_err(|_| PssDecodeErrors::OutOfMemory(payload.len() + take))?;
            payload.extend_from_slice(&chunk[..take]);

            remaining -= take;
        }
        Ok(payload)
    }

    fn decoded_table(&self) -> Result<&LengthTable, PssDecodeErrors> {
        self.length_table
            .as_ref()
            .ok_or(PssDecodeErrors::Generic("Length table not decoded"))
    }

    fn check_not_failed(&self) -> Result<(), PssDecodeErrors> {
        if self.failed {
            return Err(PssDecodeErrors::Generic(
                "Decoder already failed, stream position is lost"
            ));
        }
        Ok(())
    }

    /// Decode the composite image
    ///
    /// # Errors
    /// Any error encountered in the header, the length table or
    /// the compressed channels. No partial image is ever returned.
    pub fn decode(&mut self) -> Result<DecodedImage, PssDecodeErrors> {
        let channels = self.decode_channels()?;

        DecodedImage::new(self.width, self.height, channels)
    }

    /// Decode the composite into interleaved RGB bytes
    pub fn decode_raw(&mut self) -> Result<Vec<u8>, PssDecodeErrors> {
        self.decode()?.to_interleaved()
    }

    /// Get image width and height respectively or None if the
    /// headers haven't been decoded
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_header {
            return Some((self.width, self.height));
        }
        None
    }

    /// Row sizes of the compressed channels or None if the headers
    /// haven't been decoded
    pub fn length_table(&self) -> Option<&LengthTable> {
        self.length_table.as_ref()
    }

    /// Get image colorspace or None if the headers haven't been decoded
    pub fn colorspace(&self) -> Option<ColorSpace> {
        if self.decoded_header {
            return Some(ColorSpace::RGB);
        }
        None
    }

    /// Get image bit depth or None if the headers haven't been decoded
    pub const fn bit_depth(&self) -> Option<BitDepth> {
        if self.decoded_header {
            return Some(BitDepth::Eight);
        }
        None
    }
}
