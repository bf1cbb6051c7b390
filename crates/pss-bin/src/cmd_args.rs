/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

pub mod help_strings;

use help_strings::{ABOUT, AFTER_HELP, LONG_ABOUT, MAX_DIMENSION_HELP};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("pssthumb")
        .about(ABOUT)
        .long_about(LONG_ABOUT)
        .after_help(AFTER_HELP)
        .arg(Arg::new("in")
            .help("Paintstorm document to read")
            .value_parser(value_parser!(PathBuf))
            .required(false))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Write the image to a file instead of standard output")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("binary")
            .long("binary")
            .action(ArgAction::SetTrue)
            .help("Write a binary (P6) pixmap instead of a plain text (P3) one"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum image width to accept")
            .long_help(MAX_DIMENSION_HELP)
            .value_parser(value_parser!(usize))
            .default_value("10000"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum image height to accept")
            .long_help(MAX_DIMENSION_HELP)
            .value_parser(value_parser!(usize))
            .default_value("10000"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::create_cmd_args;

    #[test]
    fn command_is_well_formed() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn input_is_optional() {
        let matches = create_cmd_args().try_get_matches_from(["pssthumb"]).unwrap();

        assert!(matches.get_one::<PathBuf>("in").is_none());
        assert_eq!(*matches.get_one::<usize>("max-width").unwrap(), 10000);
        assert!(!*matches.get_one::<bool>("binary").unwrap());
    }

    #[test]
    fn parses_all_options() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "pssthumb",
                "drawing.pss",
                "-o",
                "out.ppm",
                "--binary",
                "--max-width",
                "512",
                "--trace"
            ])
            .unwrap();

        assert_eq!(
            matches.get_one::<PathBuf>("in"),
            Some(&PathBuf::from("drawing.pss"))
        );
        assert_eq!(
            matches.get_one::<PathBuf>("out"),
            Some(&PathBuf::from("out.ppm"))
        );
        assert!(*matches.get_one::<bool>("binary").unwrap());
        assert!(*matches.get_one::<bool>("trace").unwrap());
        assert_eq!(*matches.get_one::<usize>("max-width").unwrap(), 512);
        assert_eq!(*matches.get_one::<usize>("max-height").unwrap(), 10000);
    }
}
