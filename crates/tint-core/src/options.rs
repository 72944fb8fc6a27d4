/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Global Decoder options

/// Decoder options
///
/// Options are set with builder style setters, e.g
/// ```
/// use tint_core::options::DecoderOptions;
///
/// let options = DecoderOptions::default()
///     .set_max_width(4096)
///     .set_strict_mode(true);
///
/// assert_eq!(options.max_width(), 4096);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    max_width:   usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    max_height:  usize,
    /// Whether header fields the decoder does not otherwise
    /// need (magic bytes, planes) are validated
    ///
    /// - Default value: false
    strict_mode: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:   1 << 14,
            max_height:  1 << 14,
            strict_mode: false
        }
    }
}

/// Initializers
impl DecoderOptions {
    /// Create options that reject anything not conforming
    /// to the format
    pub fn new_strict() -> DecoderOptions {
        DecoderOptions::default().set_strict_mode(true)
    }

    /// Create options suited for command line use, where images
    /// can be as large as the machine can hold
    pub fn new_cmd() -> DecoderOptions {
        DecoderOptions::default()
            .set_max_width(usize::MAX)
            .set_max_height(usize::MAX)
    }
}

impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Return true whether the decoder should be in strict mode
    /// And reject most errors
    pub const fn strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    #[must_use]
    pub const fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    #[must_use]
    pub const fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the decoder should be in strict mode.
    ///
    /// In strict mode the `BM` magic bytes and the planes field
    /// are validated, otherwise mismatches are only logged
    #[must_use]
    pub const fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }
}
