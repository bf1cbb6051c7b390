/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;
use std::path::Path;

use log::{error, info};
use zune_pss::errors::PssDecodeErrors;
use zune_pss::{DecodedImage, PpmFormat};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::file_io::{open_output, PssFile};
use crate::placeholder::write_placeholder;

/// How a conversion ended
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// The composite was written
    Converted,
    /// Decoding or writing failed, the placeholder was written if possible
    Failed,
    /// Resources ran out, nothing more was written
    Fatal
}

impl Outcome {
    pub const fn exit_code(self) -> i32 {
        match self {
            Outcome::Converted => 0,
            Outcome::Failed => 1,
            Outcome::Fatal => 2
        }
    }
}

/// Decode `input` and write it where `options` asks
pub fn run(input: &Path, options: &CmdOptions) -> Outcome {
    info!("Converting {:?}", input);

    let mut writer = match open_output(options.output.as_deref()) {
        Ok(writer) => writer,
        Err(e) => {
            error!("Could not open output, reason {:?}", e);
            return Outcome::Failed;
        }
    };

    let decoded = PssFile::new(input.to_path_buf(), options.decoder_options).decode();

    convert(decoded, options.format, &mut writer)
}

/// Write a decode result to `writer`.
///
/// Recoverable errors are replaced by the placeholder image,
/// fatal ones write nothing.
pub fn convert<W: Write>(
    decoded: Result<DecodedImage, PssDecodeErrors>, format: PpmFormat, writer: &mut W
) -> Outcome {
    match decoded {
        Ok(image) => match image.write_ppm(writer, format) {
            Ok(()) => Outcome::Converted,
            Err(e) => {
                error!("Could not write image, reason {:?}", e);
                Outcome::Failed
            }
        },
        Err(e) if e.is_fatal() => {
            error!("Aborting, reason {:?}", e);
            Outcome::Fatal
        }
        Err(e) => {
            error!("Could not decode document, reason {:?}", e);

            if let Err(e) = write_placeholder(writer) {
                error!("Could not write placeholder, reason {:?}", e);
            }
            Outcome::Failed
        }
    }
}
