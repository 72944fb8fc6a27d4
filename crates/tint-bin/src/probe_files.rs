/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::{BufRead, BufReader};

use log::info;
use tint_bmp::{probe_bmp, BmpDecoder};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CmdErrors;
use crate::serde::ProbeMetadata;

/// Read the headers of the input file and print them to standard output
///
/// Pixels are never decoded, so truncated pixel data is not reported here.
pub fn probe_input_file(options: &CmdOptions) -> Result<(), CmdErrors> {
    let file = File::open(&options.input)?;
    let file_size = file.metadata()?.len();

    let mut reader = BufReader::new(file);

    if !probe_bmp(reader.fill_buf()?) {
        return Err(CmdErrors::NotBmp(options.input.display().to_string()));
    }
    info!("{:?} looks like a BMP file", options.input);

    let mut decoder = BmpDecoder::new_with_options(reader, options.decoder_options);
    decoder.decode_headers()?;

    let (width, height) = decoder.dimensions().unwrap_or_default();

    let metadata = ProbeMetadata {
        file: options.input.clone().into_os_string(),
        file_size,
        width,
        height,
        bits_per_pixel: decoder.bits_per_pixel().unwrap_or_default()
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
    } else {
        println!("File: {}", options.input.display());
        println!("File size: {} bytes", metadata.file_size);
        println!("Image Width: {}", metadata.width);
        println!("Image Height: {}", metadata.height);
        println!("Bits per pixel: {}", metadata.bits_per_pixel);
    }
    Ok(())
}
