/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A Paintstorm Studio document reader
//!
//! This crate extracts the flattened composite stored in Paintstorm Studio
//! `.pss` documents and converts it to a portable pixmap.
//!
//! The composite is stored as three 8 bit channels, each compressed with a
//! byte pair run length scheme and preceded by a table with the compressed
//! size of every row. Layers, brushes and other editor state are ignored.
//!
//! # Example
//! - Converting a document to a plain text pixmap
//! ```no_run
//! use std::io::BufWriter;
//!
//! use zune_core::bytestream::ZCursor;
//! use zune_pss::errors::PssDecodeErrors;
//! use zune_pss::{PpmFormat, PssDecoder};
//!
//! fn main() -> Result<(), PssDecodeErrors> {
//!     let data = std::fs::read("drawing.pss")?;
//!     let mut decoder = PssDecoder::new(ZCursor::new(&data));
//!
//!     let image = decoder.decode()?;
//!
//!     let mut out = BufWriter::new(std::io::stdout().lock());
//!     image.write_ppm(&mut out, PpmFormat::P3)?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]
extern crate alloc;
pub extern crate zune_core;

pub use channel::ChannelBuffer;
pub use decoder::PssDecoder;
pub use header::PssHeader;
pub use image::{DecodedImage, PpmFormat};
pub use length_table::LengthTable;

pub mod channel;
pub mod constants;
pub mod decoder;
pub mod errors;
mod header;
pub mod image;
mod length_table;
pub mod rle;
