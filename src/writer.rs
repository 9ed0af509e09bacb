//! The push-style adapter handed to an engine during serialization.

use crate::buffer::WriteBuffer;
use crate::error::Result;
use crate::traits::StreamWrite;

/// A writer adapter binding one [`WriteBuffer`] for a write session.
///
/// This is the only surface a serialization engine sees on the write path:
/// single-byte and bulk writes, each delegating straight to the underlying
/// buffer's capacity-expanding primitives. The adapter holds no state of
/// its own and never exposes the buffer's capacity or raw storage.
pub struct StreamWriter<'a> {
    buffer: &'a mut WriteBuffer,
}

impl<'a> StreamWriter<'a> {
    /// Creates a writer over the given buffer.
    pub fn new(buffer: &'a mut WriteBuffer) -> Self {
        Self { buffer }
    }

    /// Bytes written through this adapter so far.
    pub fn bytes_written(&self) -> usize {
        self.buffer.position()
    }
}

impl StreamWrite for StreamWriter<'_> {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.buffer.write_byte(byte)
    }

    fn write_bytes(&mut self, src: &[u8]) -> Result<()> {
        self.buffer.write_bytes(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_delegate_to_buffer() {
        let mut buffer = WriteBuffer::with_capacity(8).unwrap();
        {
            let mut writer = StreamWriter::new(&mut buffer);
            writer.write_byte(0x01).unwrap();
            writer.write_bytes(&[0x02, 0x03]).unwrap();
            assert_eq!(writer.bytes_written(), 3);
        }
        assert_eq!(buffer.finalize(), vec![0x01, 0x02, 0x03]);
    }

    #[test]
    fn writer_grows_buffer_transparently() {
        let mut buffer = WriteBuffer::with_capacity(2).unwrap();
        {
            let mut writer = StreamWriter::new(&mut buffer);
            writer.write_bytes(&[0xFF; 64]).unwrap();
        }
        assert_eq!(buffer.position(), 64);
        assert!(buffer.capacity() >= 64);
    }

    #[test]
    fn empty_bulk_write_is_noop() {
        let mut buffer = WriteBuffer::with_capacity(4).unwrap();
        let mut writer = StreamWriter::new(&mut buffer);
        writer.write_bytes(&[]).unwrap();
        assert_eq!(writer.bytes_written(), 0);
    }
}
