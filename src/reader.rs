//! The pull-style adapter handed to an engine during deserialization.

use crate::buffer::ReadBuffer;
use crate::error::Result;
use crate::traits::StreamRead;

/// A reader adapter binding one [`ReadBuffer`] for a read session.
///
/// The read-path counterpart of [`StreamWriter`](crate::StreamWriter):
/// single-byte and bulk reads over a fixed, borrowed byte range. Growth
/// never happens here; any read past the available bytes fails with
/// [`Error::Overflow`](crate::Error::Overflow) and aborts the in-progress
/// deserialization, with no partial object surfaced.
pub struct StreamReader<'a> {
    buffer: ReadBuffer<'a>,
}

impl<'a> StreamReader<'a> {
    /// Creates a reader over the given read-session buffer.
    pub fn new(buffer: ReadBuffer<'a>) -> Self {
        Self { buffer }
    }

    /// Bytes not yet consumed by the engine.
    pub fn remaining(&self) -> usize {
        self.buffer.remaining()
    }

    /// Whether the engine has consumed every byte of the session.
    pub fn is_exhausted(&self) -> bool {
        self.buffer.is_exhausted()
    }
}

impl StreamRead for StreamReader<'_> {
    fn read_byte(&mut self) -> Result<u8> {
        self.buffer.read_byte()
    }

    fn read_bytes(&mut self, dst: &mut [u8]) -> Result<()> {
        let bytes = self.buffer.read_bytes(dst.len())?;
        dst.copy_from_slice(bytes);
        Ok(())
    }
}
