/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Display, Formatter};

mod std_readers;

use crate::bytestream::ZByteReaderTrait;

/// Enumeration of possible methods to seek within an I/O object.
///
/// It is analogous to the [SeekFrom](std::io::SeekFrom) in the std library but
/// it's here so that in-memory cursors do not need `std::io`
#[derive(Copy, PartialEq, Eq, Clone, Debug)]
pub enum ZSeekFrom {
    /// Sets the offset to the provided number of bytes.
    Start(u64),

    /// Sets the offset to the size of this object plus the specified number of
    /// bytes.
    End(i64),

    /// Sets the offset to the current position plus the specified number of
    /// bytes.
    ///
    /// It is an error to seek before byte 0.
    Current(i64)
}

impl ZSeekFrom {
    pub(crate) fn to_std_seek(self) -> std::io::SeekFrom {
        match self {
            ZSeekFrom::Start(pos) => std::io::SeekFrom::Start(pos),
            ZSeekFrom::End(pos) => std::io::SeekFrom::End(pos),
            ZSeekFrom::Current(pos) => std::io::SeekFrom::Current(pos)
        }
    }
}

/// Errors from the underlying byte source
pub enum ZByteIoError {
    StdIoError(std::io::Error),
    TryFromIntError(core::num::TryFromIntError),
    // requested, read
    NotEnoughBytes(usize, usize),
    SeekError(&'static str)
}

impl core::fmt::Debug for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ZByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            ZByteIoError::TryFromIntError(err) => {
                writeln!(f, "Cannot convert to int {}", err)
            }
            ZByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ZByteIoError::SeekError(err) => {
                writeln!(f, "Seek error: {err}")
            }
        }
    }
}

impl Display for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ZByteIoError {}

impl From<std::io::Error> for ZByteIoError {
    fn from(value: std::io::Error) -> Self {
        ZByteIoError::StdIoError(value)
    }
}

impl From<core::num::TryFromIntError> for ZByteIoError {
    fn from(value: core::num::TryFromIntError) -> Self {
        ZByteIoError::TryFromIntError(value)
    }
}

/// A little endian reader over a byte source
pub struct ZReader<T: ZByteReaderTrait> {
    inner: T
}

impl<T: ZByteReaderTrait> ZReader<T> {
    pub fn new(source: T) -> ZReader<T> {
        ZReader { inner: source }
    }

    #[inline(always)]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ZByteIoError> {
        let mut byte_store: [u8; N] = [0; N];
        self.inner.read_const_bytes(&mut byte_store)?;
        Ok(byte_store)
    }

    /// Move to `position` bytes from the start of the source
    #[inline]
    pub fn set_position(&mut self, position: usize) -> Result<(), ZByteIoError> {
        self.inner.z_seek(ZSeekFrom::Start(u64::try_from(position)?))?;

        Ok(())
    }

    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        self.inner.read_exact_bytes(buf)
    }

    pub fn source_name(&self) -> &'static str {
        self.inner.name()
    }
}

macro_rules! get_single_type {
    ($name_le:tt,$int_type:tt) => {
        impl<T: ZByteReaderTrait> ZReader<T> {
            #[doc=concat!("Read ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name_le(&mut self) -> Result<$int_type, ZByteIoError> {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let mut space = [0; SIZE_OF_VAL];
                self.inner.read_const_bytes(&mut space)?;

                Ok($int_type::from_le_bytes(space))
            }
        }
    };
}

get_single_type!(get_u16_le_err, u16);
get_single_type!(get_u32_le_err, u32);
get_single_type!(get_i32_le_err, i32);

#[cfg(test)]
mod tests {
    use crate::bytestream::{ZByteIoError, ZCursor, ZReader};

    #[test]
    fn reads_little_endian() {
        let mut reader = ZReader::new(ZCursor::new([0x01_u8, 0x02, 0x03, 0x04, 0x05, 0x06, 0xff, 0xff, 0xff, 0xff]));

        assert_eq!(reader.get_u16_le_err().unwrap(), 0x0201);
        assert_eq!(reader.get_u32_le_err().unwrap(), 0x0605_0403);
        assert_eq!(reader.get_i32_le_err().unwrap(), -1);
    }

    #[test]
    fn short_read_does_not_advance() {
        let mut reader = ZReader::new(ZCursor::new([0x01_u8, 0x02, 0x03]));

        let err = reader.get_u32_le_err().unwrap_err();
        assert!(matches!(err, ZByteIoError::NotEnoughBytes(4, 3)));
        assert_eq!(reader.read_fixed_bytes_or_error::<3>().unwrap(), [1, 2, 3]);
    }

    #[test]
    fn set_position_reads_fixed_offsets() {
        let mut reader = ZReader::new(ZCursor::new(vec![0_u8, 1, 2, 3, 4, 5]));

        reader.set_position(4).unwrap();
        assert_eq!(reader.read_fixed_bytes_or_error::<2>().unwrap(), [4, 5]);
        reader.set_position(1).unwrap();
        assert_eq!(reader.get_u16_le_err().unwrap(), 0x0201);
        assert_eq!(reader.source_name(), "ZCursor<T>");
    }
}
