/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

// BMP is a format that has been extended multiple times, this decoder only
// understands the most common layout, WinBMPv3:
//
// - A 14 byte file header that includes: the magic number ("BM"),
//   file size, and offset to the pixel data.
// - A 40 byte info header which includes: the info header size,
//   width, height, number of color planes, bits-per-pixel and a compression type.
// - The pixel data, stored bottom-up, three bytes per pixel in BGR order,
//   with every scanline padded to a multiple of 4 bytes.
//
// Pixel data is read immediately after the 54 byte header.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tint_core::bytestream::{ZByteReaderTrait, ZCursor, ZReader};
use tint_core::image::Image;
use tint_core::log::{trace, warn};
use tint_core::options::DecoderOptions;
use tint_core::pixel::Pixel;

use crate::common::{
    row_padding, BmpCompression, COMPRESSION_OFFSET, DATA_OFFSET, DEPTH_OFFSET, HEADER_SIZE,
    HEIGHT_OFFSET, INFO_HEADER_SIZE, PLANES_OFFSET, SCANLINE_CHUNK, SUPPORTED_DEPTH, WIDTH_OFFSET
};
use crate::BmpDecoderErrors;

/// Probe some bytes to see
/// if they consist of a BMP image
pub fn probe_bmp(bytes: &[u8]) -> bool {
    if let Some(magic_bytes) = bytes.get(0..2) {
        if magic_bytes == b"BM" {
            // skip file_size   -> 4
            // skip reserved    -> 4
            // skip data offset -> 4
            // read sz
            if let Some(sz) = bytes.get(INFO_HEADER_SIZE) {
                let sz = *sz;

                return sz == 12
                    || sz == 16 /*os-v2*/
                    || sz == 40
                    || sz == 52
                    || sz == 56
                    || sz == 64 /*os-v2*/
                    || sz == 108
                    || sz == 124;
            }
        }
    }
    false
}

/// Open the file at `path` and decode it
///
/// # Errors
/// - [`BmpDecoderErrors::IoErrors`] if the file cannot be opened or is truncated
/// - [`BmpDecoderErrors::UnsupportedFormat`] if it isn't an uncompressed 24 bit BMP
///   with positive dimensions
pub fn decode_file<P: AsRef<Path>>(
    path: P, options: DecoderOptions
) -> Result<Image, BmpDecoderErrors> {
    trace!("Opening {:?}", path.as_ref());

    let file = BufReader::new(File::open(path)?);

    BmpDecoder::new_with_options(file, options).decode()
}

/// A BMP decoder.
///
/// # Usage
/// The decoder can be used to read image information and or get the pixels out of a valid bmp
/// image.
///
/// ## Extracting image metadata
/// - use `decode_headers` + utility functions to get information
/// ```no_run
/// use tint_bmp::BmpDecoder;
/// use tint_core::bytestream::ZCursor;
///
/// fn main()->Result<(),tint_bmp::BmpDecoderErrors>{
///
///     let source = ZCursor::new(b"BMP");
///     let mut decoder = BmpDecoder::new(source);
///     decoder.decode_headers()?;
///     // after decoding headers, we can safely access the image metadata
///     let (w,h) = decoder.dimensions().unwrap();
///     println!("Image width: {}\t Image height: {}",w,h);
///
///     Ok(())
/// }
/// ```
///
/// ## Just getting the pixels
///
/// ```no_run
/// use tint_bmp::BmpDecoder;
/// use tint_core::bytestream::ZCursor;
///
/// fn main()->Result<(),tint_bmp::BmpDecoderErrors>{
///
///     let source = ZCursor::new(b"BMP");
///     let mut decoder = BmpDecoder::new(source);
///     let image = decoder.decode()?;
///     println!("Rows: {}", image.rows().len());
///     Ok(())
/// }
/// ```
pub struct BmpDecoder<T>
where
    T: ZByteReaderTrait
{
    bytes:           ZReader<T>,
    options:         DecoderOptions,
    width:           usize,
    height:          usize,
    depth:           u16,
    comp:            BmpCompression,
    decoded_headers: bool
}

impl<T> BmpDecoder<T>
where
    T: ZByteReaderTrait
{
    /// Create a new bmp decoder that reads data from
    /// `data`
    ///
    /// # Arguments
    /// - `data`: The source from which we will read bytes from
    ///
    /// # Returns
    /// - A BMP decoder instance
    pub fn new(data: T) -> BmpDecoder<T> {
        BmpDecoder::new_with_options(data, DecoderOptions::default())
    }
    /// Create a new decoder instance with specified options
    ///
    /// # Arguments
    ///
    /// * `data`: The source from which we will read data from
    /// * `options`:  Specialized options for this decoder
    ///
    /// returns: A BMP Decoder instance
    ///
    pub fn new_with_options(data: T, options: DecoderOptions) -> BmpDecoder<T> {
        BmpDecoder {
            bytes: ZReader::new(data),
            options,
            width: 0,
            height: 0,
            depth: 0,
            comp: BmpCompression::Unknown(u32::MAX),
            decoded_headers: false
        }
    }

    /// Decode headers stored in the bmp file and store
    /// information in the decode context
    ///
    /// After calling this, the dimension fields will be filled,
    /// and the source will point at the first byte of pixel data
    ///
    /// # Returns
    /// - Ok(()) Indicates everything was okay during header parsing
    /// - Err: Error that occurred when decoding headers
    pub fn decode_headers(&mut self) -> Result<(), BmpDecoderErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let header = self.bytes.read_fixed_bytes_or_error::<HEADER_SIZE>()?;
        // every field is read from its fixed offset
        let mut fields = ZReader::new(ZCursor::new(header));

        if fields.read_fixed_bytes_or_error::<2>()? != *b"BM" {
            if self.options.strict_mode() {
                return Err(BmpDecoderErrors::InvalidMagicBytes);
            }
            warn!("File does not start with BM, continuing");
        }

        fields.set_position(DATA_OFFSET)?;
        let data_offset = fields.get_u32_le_err()?;

        if data_offset as usize != HEADER_SIZE {
            warn!(
                "Pixel data offset is {}, pixels are read right after the {} byte header",
                data_offset, HEADER_SIZE
            );
        }

        fields.set_position(INFO_HEADER_SIZE)?;
        let ihsize = fields.get_u32_le_err()?;

        if ihsize != 40 {
            if self.options.strict_mode() {
                let message = format!("info header size {ihsize}, expected 40");
                return Err(BmpDecoderErrors::UnsupportedFormat(message));
            }
            warn!("Info header size is {}, reading it as a 40 byte header", ihsize);
        }

        fields.set_position(WIDTH_OFFSET)?;
        let width = fields.get_i32_le_err()?;

        fields.set_position(HEIGHT_OFFSET)?;
        let height = fields.get_i32_le_err()?;

        if width <= 0 {
            let message = format!("width {width}, width must be positive");
            return Err(BmpDecoderErrors::UnsupportedFormat(message));
        }
        if height <= 0 {
            // negative heights describe top-down images
            let message = format!("height {height}, only positive (bottom-up) heights are supported");
            return Err(BmpDecoderErrors::UnsupportedFormat(message));
        }
        let (width, height) = (width.unsigned_abs() as usize, height.unsigned_abs() as usize);

        if width > self.options.max_width() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "width",
                self.options.max_width(),
                width
            ));
        }
        if height > self.options.max_height() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "height",
                self.options.max_height(),
                height
            ));
        }

        trace!("Width: {}", width);
        trace!("Height: {}", height);

        fields.set_position(PLANES_OFFSET)?;
        let planes = fields.get_u16_le_err()?;

        if planes != 1 {
            if self.options.strict_mode() {
                let message = format!("{planes} color planes, expected 1");
                return Err(BmpDecoderErrors::UnsupportedFormat(message));
            }
            warn!("Number of planes is {}, expected 1", planes);
        }

        fields.set_position(DEPTH_OFFSET)?;
        let depth = fields.get_u16_le_err()?;

        if depth != SUPPORTED_DEPTH {
            let message = format!("bit depth {depth}, only {SUPPORTED_DEPTH} bits per pixel is supported");
            return Err(BmpDecoderErrors::UnsupportedFormat(message));
        }

        fields.set_position(COMPRESSION_OFFSET)?;
        let compression = BmpCompression::from_u32(fields.get_u32_le_err()?);

        if compression != BmpCompression::RGB {
            let message = format!("compression {compression:?}, only uncompressed images are supported");
            return Err(BmpDecoderErrors::UnsupportedFormat(message));
        }

        trace!("Compression  : {:?}", compression);
        trace!("Bit depth: {:?}", depth);
        trace!("Row padding: {}", row_padding(width));

        self.width = width;
        self.height = height;
        self.depth = depth;
        self.comp = compression;
        self.decoded_headers = true;

        Ok(())
    }

    /// Return the number of pixels the decoded image will hold
    ///
    /// Returns `None` if headers haven't been decoded or if calculation overflows
    pub fn output_buf_size(&self) -> Option<usize> {
        if !self.decoded_headers {
            return None;
        }
        self.width.checked_mul(self.height)
    }

    /// Get dimensions of the image
    ///
    /// This is a tuple of width,height
    ///
    /// # Returns
    /// - `Some((width,height))`  - The image dimensions
    /// - `None`: Indicates that the image headers weren't decoded
    ///    or an error occurred during decoding the headers
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        if !self.decoded_headers {
            return None;
        }
        Some((self.width, self.height))
    }

    /// Return the number of bits per pixel or `None` if headers weren't decoded
    pub fn bits_per_pixel(&self) -> Option<u16> {
        if !self.decoded_headers {
            return None;
        }
        Some(self.depth)
    }

    /// Return true if the pixel data is uncompressed
    ///
    /// Always true after a successful [`decode_headers`](Self::decode_headers)
    pub fn is_uncompressed(&self) -> bool {
        self.decoded_headers && self.comp == BmpCompression::RGB
    }

    /// Decode an image returning the pixels as an [`Image`]
    /// or an error if decoding could not be completed
    ///
    /// Scanlines are appended in file order, the first row of the
    /// image is the first scanline stored in the file, which is the bottom
    /// of the displayed picture.
    ///
    /// No partial image is returned, a short read of pixel data or of row
    /// padding fails the whole decode.
    pub fn decode(&mut self) -> Result<Image, BmpDecoderErrors> {
        self.decode_headers()?;

        let size = self
            .output_buf_size()
            .ok_or(BmpDecoderErrors::OverFlowOccurred)?;

        let pixel_bytes = self
            .width
            .checked_mul(3)
            .ok_or(BmpDecoderErrors::OverFlowOccurred)?;

        let padding = row_padding(self.width);

        // header sizes are untrusted, the buffers only grow with bytes actually read
        let mut chunk = [0_u8; SCANLINE_CHUNK];
        let mut padding_bytes = [0_u8; 3];

        let mut pixels = Vec::new();

        for _ in 0..self.height {
            let mut remaining = pixel_bytes;

            while remaining > 0 {
                let piece = &mut chunk[..remaining.min(SCANLINE_CHUNK)];
                self.bytes.read_exact_bytes(piece)?;

                pixels.extend(
                    piece
                        .chunks_exact(3)
                        .map(|bgr| Pixel::from_bgr([bgr[0], bgr[1], bgr[2]]))
                );
                remaining -= piece.len();
            }
            self.bytes.read_exact_bytes(&mut padding_bytes[..padding])?;
        }
        debug_assert_eq!(pixels.len(), size);

        trace!("Decoded {} pixels from {}", pixels.len(), self.bytes.source_name());

        Ok(Image::new(self.width, self.height, pixels)?)
    }
}
