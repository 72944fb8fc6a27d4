/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for reading images in tint
//!
//! This exposes the trait and implementations for readers
//! used by the decoders.

use crate::bytestream::reader::{ZByteIoError, ZSeekFrom};

/// The de-facto Input trait implemented for readers.
///
/// This provides the basic functions needed for quick and sometimes
/// heap free I/O for the decoders, with easy support for extending it
/// to multiple implementations.
///
/// # Considerations
///
/// If you have an in memory buffer, prefer [`ZCursor`](crate::bytestream::ZCursor) over [`Cursor`](std::io::Cursor),
/// files should be wrapped in a [`BufReader`](std::io::BufReader).
pub trait ZByteReaderTrait {
    /// Read exact bytes required to fill `buf` or return an error if that isn't possible
    ///
    /// ## Arguments
    ///  - `buf`: Buffer to fill with bytes from the underlying reader
    ///  ## Errors
    /// In case of an error, the implementation should not increment the internal position
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError>;

    /// Read exact bytes required to fill `buf` or return an error if that isn't possible
    ///
    /// This is the same as [`read_exact_bytes`](Self::read_exact_bytes) but implemented as a separate
    /// method to allow some implementations to optimize it to cost fewer instructions
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ZByteIoError> {
        self.read_exact_bytes(buf)
    }

    /// Seek into a new position from the buffer
    ///
    /// This is similar to the [seek](std::io::Seek::seek) function in the [Seek](std::io::Seek) trait
    /// but implemented to work for in-memory buffers too
    ///
    /// ## Returns
    /// - `Ok(u64)`: The new position after the seek operation has completed.
    fn z_seek(&mut self, from: ZSeekFrom) -> Result<u64, ZByteIoError>;

    /// Name of the source, used in diagnostics
    fn name(&self) -> &'static str;
}
