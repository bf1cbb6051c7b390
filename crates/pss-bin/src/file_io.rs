/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use zune_core::bytestream::ZCursor;
use zune_core::options::DecoderOptions;
use zune_pss::errors::PssDecodeErrors;
use zune_pss::{DecodedImage, PssDecoder};

pub struct PssFile {
    file_path: PathBuf,
    options:   DecoderOptions
}

impl PssFile {
    pub fn new(file_path: PathBuf, options: DecoderOptions) -> PssFile {
        PssFile { file_path, options }
    }

    /// Read the whole document and decode its composite
    pub fn decode(self) -> Result<DecodedImage, PssDecodeErrors> {
        let data = std::fs::read(&self.file_path)?;

        info!("Opened {:?} ({} bytes)", self.file_path, data.len());

        let mut decoder = PssDecoder::new_with_options(ZCursor::new(data), self.options);
        let image = decoder.decode()?;

        debug!("Decoded {:?} composite", image.dimensions());

        Ok(image)
    }
}

/// Open where the pixmap goes, standard output unless a path is given
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, PssDecodeErrors> {
    match path {
        Some(path) => {
            info!("Writing to {:?}", path);
            Ok(Box::new(BufWriter::new(File::create(path)?)))
        }
        None => Ok(Box::new(BufWriter::new(stdout().lock())))
    }
}
