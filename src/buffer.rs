//! Byte buffers backing one pack or unpack session.
//!
//! `WriteBuffer` owns growable storage for the write path; `ReadBuffer`
//! borrows a fixed byte range for the read path. Both pair storage with a
//! position cursor and enforce `0 <= position <= capacity` on every
//! operation.

use crate::error::{Error, Result};

/// The largest capacity a buffer may grow to. Rust allocations are capped
/// at `isize::MAX` bytes, so growth past this point can never succeed.
pub const MAX_CAPACITY: usize = isize::MAX as usize;

/// An owned, growable byte buffer for one write session.
///
/// Capacity is tracked explicitly and only ever grows by doubling, so the
/// growth sequence is observable through [`capacity`](Self::capacity).
/// Storage length always equals the write position; bytes past the cursor
/// are never materialized and cannot leak to callers.
pub struct WriteBuffer {
    storage: Vec<u8>,
    capacity: usize,
}

impl WriteBuffer {
    /// Creates a buffer with `initial` bytes of capacity and position 0.
    ///
    /// Fails with [`Error::Allocation`] if the storage cannot be obtained.
    pub fn with_capacity(initial: usize) -> Result<Self> {
        let mut storage = Vec::new();
        storage.try_reserve_exact(initial)?;
        Ok(Self {
            storage,
            capacity: initial,
        })
    }

    /// The next write offset; also the number of valid bytes written so far.
    pub fn position(&self) -> usize {
        self.storage.len()
    }

    /// Total storage currently reserved.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Grows capacity (doubling) until `additional` more bytes fit.
    ///
    /// Growth is proactive: this runs before a write, never as a retry of a
    /// failed one, so a write itself cannot partially fail. Fails with
    /// [`Error::CapacityExceeded`] when the required capacity cannot be
    /// represented below [`MAX_CAPACITY`], or [`Error::Allocation`] when the
    /// reservation itself fails; either way the buffer must not be reused.
    pub fn ensure_capacity(&mut self, additional: usize) -> Result<()> {
        let required = self
            .storage
            .len()
            .checked_add(additional)
            .ok_or_else(|| Error::capacity_exceeded(self.storage.len().saturating_add(additional)))?;
        if required <= self.capacity {
            return Ok(());
        }
        if required > MAX_CAPACITY {
            return Err(Error::capacity_exceeded(required));
        }

        let mut target = self.capacity.max(1);
        while target < required {
            target = target
                .checked_mul(2)
                .ok_or_else(|| Error::capacity_exceeded(required))?;
            if target > MAX_CAPACITY {
                return Err(Error::capacity_exceeded(target));
            }
        }

        self.storage.try_reserve_exact(target - self.storage.len())?;
        self.capacity = target;
        Ok(())
    }

    /// Appends a single byte, growing storage if needed.
    pub fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.ensure_capacity(1)?;
        self.storage.push(byte);
        Ok(())
    }

    /// Appends a slice of bytes, growing storage if needed.
    pub fn write_bytes(&mut self, src: &[u8]) -> Result<()> {
        self.ensure_capacity(src.len())?;
        self.storage.extend_from_slice(src);
        Ok(())
    }

    /// Consumes the buffer, yielding exactly the bytes written.
    ///
    /// The result length equals the final position; capacity slack is never
    /// observable. Consuming `self` makes the finalized state terminal.
    pub fn finalize(self) -> Vec<u8> {
        self.storage
    }
}

/// A fixed-size buffer borrowing caller-supplied bytes for one read session.
///
/// Zero-copy: the source bytes are never copied wholesale, mutated, or
/// freed. Capacity is fixed at creation and reads past it fail with
/// [`Error::Overflow`].
pub struct ReadBuffer<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ReadBuffer<'a> {
    /// Wraps `data` as a read-session buffer with position 0.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Total bytes available in the session, fixed at creation.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// The next read offset.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Whether every byte has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.position == self.data.len()
    }

    /// Returns the byte at the cursor and advances past it.
    pub fn read_byte(&mut self) -> Result<u8> {
        match self.data.get(self.position) {
            Some(&byte) => {
                self.position += 1;
                Ok(byte)
            }
            None => Err(Error::overflow(1, 0)),
        }
    }

    /// Returns a view of the next `count` bytes and advances past them.
    ///
    /// Fails whole with [`Error::Overflow`] when fewer than `count` bytes
    /// remain; the cursor does not move and no out-of-bounds access occurs.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        let end = self
            .position
            .checked_add(count)
            .ok_or_else(|| Error::overflow(count, self.remaining()))?;
        if end > self.data.len() {
            return Err(Error::overflow(count, self.remaining()));
        }
        let bytes = &self.data[self.position..end];
        self.position = end;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_buffer_starts_empty() {
        let buf = WriteBuffer::with_capacity(64).unwrap();
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.capacity(), 64);
    }

    #[test]
    fn write_within_capacity_does_not_grow() {
        let mut buf = WriteBuffer::with_capacity(16).unwrap();
        buf.write_bytes(&[0u8; 16]).unwrap();
        assert_eq!(buf.position(), 16);
        assert_eq!(buf.capacity(), 16);
    }

    #[test]
    fn growth_doubles_capacity() {
        let mut buf = WriteBuffer::with_capacity(8).unwrap();
        buf.write_bytes(&[0u8; 9]).unwrap();
        assert_eq!(buf.capacity(), 16);
        assert_eq!(buf.position(), 9);
    }

    #[test]
    fn growth_doubles_repeatedly_for_large_writes() {
        let mut buf = WriteBuffer::with_capacity(4).unwrap();
        buf.write_bytes(&[0xAB; 100]).unwrap();
        // 4 -> 8 -> 16 -> 32 -> 64 -> 128
        assert_eq!(buf.capacity(), 128);
        assert_eq!(buf.position(), 100);
    }

    #[test]
    fn capacity_never_below_position() {
        let mut buf = WriteBuffer::with_capacity(1).unwrap();
        for i in 0..1000u32 {
            buf.write_byte(i as u8).unwrap();
            assert!(buf.capacity() >= buf.position());
        }
    }

    #[test]
    fn zero_capacity_buffer_can_grow() {
        let mut buf = WriteBuffer::with_capacity(0).unwrap();
        buf.write_byte(0x7F).unwrap();
        assert_eq!(buf.position(), 1);
        assert!(buf.capacity() >= 1);
        assert_eq!(buf.finalize(), vec![0x7F]);
    }

    #[test]
    fn ensure_capacity_rejects_impossible_request() {
        let mut buf = WriteBuffer::with_capacity(16).unwrap();
        match buf.ensure_capacity(MAX_CAPACITY) {
            Err(Error::CapacityExceeded { .. }) => {}
            other => panic!("expected CapacityExceeded, got {other:?}"),
        }
    }

    #[test]
    fn ensure_capacity_rejects_overflowing_request() {
        let mut buf = WriteBuffer::with_capacity(16).unwrap();
        buf.write_bytes(&[0u8; 8]).unwrap();
        match buf.ensure_capacity(usize::MAX) {
            // The request saturates rather than wrapping, so the reported
            // value reflects the full position + additional claim.
            Err(Error::CapacityExceeded {
                requested: usize::MAX,
            }) => {}
            other => panic!("expected CapacityExceeded, got {other:?}"),
        }
    }

    #[test]
    fn finalize_is_exact_length() {
        let mut buf = WriteBuffer::with_capacity(16384).unwrap();
        buf.write_bytes(b"tiny").unwrap();
        let out = buf.finalize();
        assert_eq!(out, b"tiny");
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn read_buffer_reads_in_order() {
        let data = [1u8, 2, 3, 4, 5];
        let mut buf = ReadBuffer::new(&data);
        assert_eq!(buf.read_byte().unwrap(), 1);
        assert_eq!(buf.read_bytes(3).unwrap(), &[2, 3, 4]);
        assert_eq!(buf.read_byte().unwrap(), 5);
        assert!(buf.is_exhausted());
    }

    #[test]
    fn read_past_end_is_overflow() {
        let data = [0u8; 4];
        let mut buf = ReadBuffer::new(&data);
        match buf.read_bytes(5) {
            Err(Error::Overflow {
                requested: 5,
                remaining: 4,
            }) => {}
            other => panic!("expected Overflow, got {other:?}"),
        }
        // A failed read leaves the cursor in place.
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.read_bytes(4).unwrap(), &[0u8; 4]);
    }

    #[test]
    fn read_byte_at_exhaustion_is_overflow() {
        let data = [9u8];
        let mut buf = ReadBuffer::new(&data);
        buf.read_byte().unwrap();
        match buf.read_byte() {
            Err(Error::Overflow { .. }) => {}
            other => panic!("expected Overflow, got {other:?}"),
        }
    }

    #[test]
    fn empty_read_from_empty_buffer_is_ok() {
        let mut buf = ReadBuffer::new(&[]);
        assert_eq!(buf.read_bytes(0).unwrap(), &[] as &[u8]);
        assert!(buf.is_exhausted());
    }
}
