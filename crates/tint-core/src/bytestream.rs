/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//! with endian aware reads.
//!
//! The reader works over anything implementing [`ZByteReaderTrait`],
//! which is implemented for in-memory buffers via [`ZCursor`]
//! and for files via [`BufReader`](std::io::BufReader).

pub use reader::{ZByteIoError, ZReader, ZSeekFrom};
pub use traits::ZByteReaderTrait;
pub use zcursor::ZCursor;

mod reader;
mod traits;
mod zcursor;
