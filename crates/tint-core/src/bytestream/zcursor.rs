/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ZByteIoError, ZByteReaderTrait, ZSeekFrom};

/// A cursor over an in-memory buffer
///
/// This is the preferred source when the whole file is already in memory,
/// e.g in tests or when the caller read the file themselves
pub struct ZCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ZCursor<T> {
    pub fn new(buffer: T) -> ZCursor<T> {
        ZCursor {
            stream:   buffer,
            position: 0
        }
    }
    fn remaining(&self) -> usize {
        self.stream.as_ref().len().saturating_sub(self.position)
    }
}

impl<T: AsRef<[u8]>> ZByteReaderTrait for ZCursor<T> {
    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        let available = self.remaining();

        if available < buf.len() {
            // not all bytes can be read, position stays where it is
            return Err(ZByteIoError::NotEnoughBytes(buf.len(), available));
        }
        let end = self.position + buf.len();
        buf.copy_from_slice(&self.stream.as_ref()[self.position..end]);
        self.position = end;

        Ok(())
    }

    #[inline(always)]
    fn z_seek(&mut self, from: ZSeekFrom) -> Result<u64, ZByteIoError> {
        let new_position = match from {
            ZSeekFrom::Start(position) => i64::try_from(position)?,
            ZSeekFrom::End(position) => {
                i64::try_from(self.stream.as_ref().len())?.saturating_add(position)
            }
            ZSeekFrom::Current(position) => {
                i64::try_from(self.position)?.saturating_add(position)
            }
        };
        if new_position < 0 {
            return Err(ZByteIoError::SeekError("Cannot seek before byte 0"));
        }
        self.position = usize::try_from(new_position)?;

        Ok(self.position as u64)
    }

    fn name(&self) -> &'static str {
        "ZCursor<T>"
    }
}
