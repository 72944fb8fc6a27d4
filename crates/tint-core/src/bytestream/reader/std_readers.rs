use std::io;
use std::io::{BufReader, Read, Seek};

use crate::bytestream::reader::{ZByteIoError, ZSeekFrom};
use crate::bytestream::ZByteReaderTrait;

impl<T> ZByteReaderTrait for std::io::Cursor<T>
where
    T: AsRef<[u8]>
{
    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        let start = self.position();
        self.read_exact(buf).map_err(|e| {
            // keep the position unchanged on a short read
            self.set_position(start);
            ZByteIoError::from(e)
        })
    }

    #[inline(always)]
    fn z_seek(&mut self, from: ZSeekFrom) -> Result<u64, ZByteIoError> {
        self.seek(from.to_std_seek()).map_err(ZByteIoError::from)
    }

    fn name(&self) -> &'static str {
        "Cursor<T>"
    }
}

impl<T: io::Read + io::Seek> ZByteReaderTrait for BufReader<T> {
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        self.read_exact(buf).map_err(ZByteIoError::from)
    }

    fn z_seek(&mut self, from: ZSeekFrom) -> Result<u64, ZByteIoError> {
        self.seek(from.to_std_seek()).map_err(ZByteIoError::from)
    }

    fn name(&self) -> &'static str {
        "BufReader<T>"
    }
}
