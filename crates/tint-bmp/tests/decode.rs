/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;
use std::path::{Path, PathBuf};

use tint_bmp::{decode_file, BmpDecoder, BmpDecoderErrors};
use tint_core::bytestream::{ZByteIoError, ZCursor};
use tint_core::options::DecoderOptions;
use tint_core::pixel::Pixel;

fn bmp_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test-images")
        .join(name)
}

fn decode(name: &str) -> Result<tint_core::image::Image, BmpDecoderErrors> {
    decode_file(bmp_path(name), DecoderOptions::default())
}

#[test]
fn decode_2x2_in_file_row_order() {
    let image = decode("rgb24_2x2.bmp").unwrap();

    assert_eq!(image.dimensions(), (2, 2));
    // row 0 is the first stored scanline, the bottom of the picture
    assert_eq!(
        image.row(0).unwrap(),
        &[Pixel::new(255, 0, 0), Pixel::new(0, 255, 0)]
    );
    assert_eq!(
        image.row(1).unwrap(),
        &[Pixel::new(0, 0, 255), Pixel::new(255, 255, 255)]
    );
}

#[test]
fn padding_bytes_are_skipped() {
    let image = decode("rgb24_3x2_padded.bmp").unwrap();

    assert_eq!(image.dimensions(), (3, 2));
    let expected: Vec<Pixel> = (0..6_u8)
        .map(|i| Pixel::new(3 * i + 1, 3 * i + 2, 3 * i + 3))
        .collect();
    assert_eq!(image.pixels(), expected.as_slice());
}

#[test]
fn decoding_twice_gives_identical_images() {
    let first = decode("rgb24_3x2_padded.bmp").unwrap();
    let second = decode("rgb24_3x2_padded.bmp").unwrap();

    assert_eq!(first, second);
}

#[test]
fn file_and_memory_sources_agree() {
    let path = bmp_path("rgb24_3x2_padded.bmp");
    let from_memory = BmpDecoder::new(ZCursor::new(read(&path).unwrap()))
        .decode()
        .unwrap();
    let from_cursor = BmpDecoder::new(std::io::Cursor::new(read(&path).unwrap()))
        .decode()
        .unwrap();

    assert_eq!(from_memory, decode("rgb24_3x2_padded.bmp").unwrap());
    assert_eq!(from_memory, from_cursor);
}

#[test]
fn depth_32_is_unsupported() {
    let err = decode("rgb32_1x1.bmp").unwrap_err();

    assert!(matches!(err, BmpDecoderErrors::UnsupportedFormat(ref m) if m.contains("bit depth 32")));
}

#[test]
fn compressed_is_unsupported() {
    let err = decode("rle8_compressed.bmp").unwrap_err();

    assert!(matches!(err, BmpDecoderErrors::UnsupportedFormat(ref m) if m.contains("compression")));
}

#[test]
fn truncated_pixels_is_io_error() {
    let err = decode("truncated_pixels.bmp").unwrap_err();

    assert!(matches!(err, BmpDecoderErrors::IoErrors(_)));
}

#[test]
fn truncated_padding_is_io_error() {
    let err = decode("truncated_padding.bmp").unwrap_err();

    assert!(matches!(err, BmpDecoderErrors::IoErrors(_)));
}

#[test]
fn truncated_header_is_io_error() {
    let err = decode("truncated_header.bmp").unwrap_err();
    assert!(matches!(err, BmpDecoderErrors::IoErrors(_)));

    let contents = read(bmp_path("truncated_header.bmp")).unwrap();
    let err = BmpDecoder::new(ZCursor::new(contents)).decode().unwrap_err();
    assert!(matches!(
        err,
        BmpDecoderErrors::IoErrors(ZByteIoError::NotEnoughBytes(54, 40))
    ));
}

#[test]
fn missing_file_is_io_error() {
    let err = decode("does-not-exist.bmp").unwrap_err();

    assert!(matches!(
        err,
        BmpDecoderErrors::IoErrors(ZByteIoError::StdIoError(_))
    ));
}
