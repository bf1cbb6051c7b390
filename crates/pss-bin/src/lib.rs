/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use log::info;

use crate::workflow::run;

mod cmd_args;
mod cmd_parsers;
mod file_io;
mod placeholder;
mod workflow;

pub fn main() {
    let mut cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches_mut();

    cmd_parsers::global_options::setup_logger(&options);

    let parsed_opts = cmd_parsers::global_options::parse_options(&options);

    let Some(input) = parsed_opts.input.as_deref() else {
        // no document, explain ourselves and leave
        eprintln!("{}", cmd.render_long_help());
        exit(0);
    };

    let outcome = run(input, &parsed_opts);

    info!("Finished with {:?}", outcome);

    exit(outcome.exit_code());
}
