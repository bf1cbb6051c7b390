/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::ArgMatches;
use log::{info, Level};
use zune_core::options::DecoderOptions;
use zune_pss::PpmFormat;

use crate::cmd_parsers::get_decoder_options;

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub input:           Option<PathBuf>,
    pub output:          Option<PathBuf>,
    pub format:          PpmFormat,
    pub decoder_options: DecoderOptions
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let format = if options.get_flag("binary") {
        info!("Writing binary pixmap");
        PpmFormat::P6
    } else {
        PpmFormat::P3
    };

    CmdOptions {
        input: options.get_one::<PathBuf>("in").cloned(),
        output: options.get_one::<PathBuf>("out").cloned(),
        format,
        decoder_options: get_decoder_options(options)
    }
}

/// Map the logging flags to a level, warnings and errors only by default
pub fn log_level(options: &ArgMatches) -> Level {
    if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = log_level(options);

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {e}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use log::Level;
    use zune_pss::PpmFormat;

    use super::{log_level, parse_options};
    use crate::cmd_args::create_cmd_args;

    #[test]
    fn defaults() {
        let matches = create_cmd_args()
            .try_get_matches_from(["pssthumb", "a.pss"])
            .unwrap();
        let options = parse_options(&matches);

        assert_eq!(options.input, Some(PathBuf::from("a.pss")));
        assert_eq!(options.output, None);
        assert_eq!(options.format, PpmFormat::P3);
        assert_eq!(options.decoder_options.max_width(), 10000);
        assert_eq!(log_level(&matches), Level::Warn);
    }

    #[test]
    fn flags_change_format_and_level() {
        let matches = create_cmd_args()
            .try_get_matches_from(["pssthumb", "a.pss", "--binary", "--debug", "--max-height", "5"])
            .unwrap();
        let options = parse_options(&matches);

        assert_eq!(options.format, PpmFormat::P6);
        assert_eq!(options.decoder_options.max_height(), 5);
        assert_eq!(log_level(&matches), Level::Debug);
    }
}
