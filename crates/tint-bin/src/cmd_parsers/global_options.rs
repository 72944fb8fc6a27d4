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
use tint_core::options::DecoderOptions;

use crate::cmd_parsers::get_decoder_options;

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub input:            PathBuf,
    pub probe:            bool,
    pub json:             bool,
    pub divisions:        usize,
    pub sections:         usize,
    pub subsection_start: i64,
    /// `None` means a tenth of the image width
    pub subsection_end:   Option<i64>,
    pub decoder_options:  DecoderOptions
}

impl CmdOptions {
    pub fn new(input: PathBuf) -> CmdOptions {
        CmdOptions {
            input,
            probe: false,
            json: false,
            divisions: 3,
            sections: 12,
            subsection_start: 28,
            subsection_end: None,
            decoder_options: DecoderOptions::new_cmd()
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let input = options.get_one::<PathBuf>("in").cloned().unwrap_or_default();

    let mut cmd_options = CmdOptions::new(input);

    cmd_options.probe = options.get_flag("probe");
    cmd_options.json = options.get_flag("json");

    if let Some(divisions) = options.get_one::<usize>("divisions") {
        cmd_options.divisions = *divisions;
    }
    if let Some(sections) = options.get_one::<usize>("sections") {
        cmd_options.sections = *sections;
    }
    if let Some(start) = options.get_one::<i64>("subsection-start") {
        cmd_options.subsection_start = *start;
    }
    cmd_options.subsection_end = options.get_one::<i64>("subsection-end").copied();
    cmd_options.decoder_options = get_decoder_options(options);

    info!("Decoder options: {:?}", cmd_options.decoder_options);
    info!(
        "Regions: {} divisions, {} sections",
        cmd_options.divisions, cmd_options.sections
    );
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
