//! Core traits for the packstream library.
//!
//! Two pairs of traits form the seam between the buffer layer and the
//! serialization engine. `StreamWrite`/`StreamRead` are the capability
//! interfaces an engine is handed during a session: exactly single-byte and
//! bulk transfer, nothing that exposes buffer internals. `StreamSerialize`/
//! `StreamDeserialize` are the contract the host's engine implements to
//! move an object through those capabilities.

use crate::config::PackConfig;
use crate::error::{Error, Result};

/// Push-style byte sink handed to an engine during serialization.
///
/// Implementations bind one write-session buffer and grow it on demand;
/// the engine sees only these two entry points.
pub trait StreamWrite {
    /// Writes a single byte at the cursor.
    fn write_byte(&mut self, byte: u8) -> Result<()>;

    /// Writes `src` in full at the cursor.
    fn write_bytes(&mut self, src: &[u8]) -> Result<()>;
}

/// Pull-style byte source handed to an engine during deserialization.
///
/// Implementations bind one fixed read-session buffer. Reads past the
/// available bytes fail with [`Error::Overflow`] and abort the session;
/// no partial read ever occurs.
///
/// [`Error::Overflow`]: crate::Error::Overflow
pub trait StreamRead {
    /// Reads the byte at the cursor.
    fn read_byte(&mut self) -> Result<u8>;

    /// Fills `dst` exactly from the cursor, or fails whole.
    fn read_bytes(&mut self, dst: &mut [u8]) -> Result<()>;
}

/// A trait for types a serialization engine can push into a byte stream.
///
/// Implementing this trait supplies the encoding logic; [`pack`] handles
/// buffer management, growth, and finalization. `config` arrives verbatim
/// from the `pack` caller.
///
/// [`pack`]: crate::pack
pub trait StreamSerialize {
    /// Serializes the object through the provided writer capability.
    fn serialize<W: StreamWrite>(&self, writer: &mut W, config: &PackConfig) -> Result<()>;
}

/// A trait for types an engine can reconstruct from a byte stream.
///
/// Implementations pull bytes through the reader capability; [`unpack`]
/// handles the borrowed buffer and bounds enforcement. Content-level
/// failures should surface as [`Error::InvalidData`].
///
/// [`unpack`]: crate::unpack
/// [`Error::InvalidData`]: crate::Error::InvalidData
pub trait StreamDeserialize: Sized {
    /// Reconstructs a value by pulling bytes from the reader capability.
    fn deserialize<R: StreamRead>(reader: &mut R) -> Result<Self>;
}

// Reference implementations for a handful of simple types, so the crate is
// testable and demonstrable without an external engine. Hosts with a real
// engine implement the traits on their own object model instead.

impl StreamSerialize for u8 {
    fn serialize<W: StreamWrite>(&self, writer: &mut W, _config: &PackConfig) -> Result<()> {
        writer.write_byte(*self)
    }
}

impl StreamDeserialize for u8 {
    fn deserialize<R: StreamRead>(reader: &mut R) -> Result<Self> {
        reader.read_byte()
    }
}

impl StreamSerialize for i32 {
    fn serialize<W: StreamWrite>(&self, writer: &mut W, _config: &PackConfig) -> Result<()> {
        writer.write_bytes(&self.to_le_bytes())
    }
}

impl StreamDeserialize for i32 {
    fn deserialize<R: StreamRead>(reader: &mut R) -> Result<Self> {
        let mut bytes = [0u8; 4];
        reader.read_bytes(&mut bytes)?;
        Ok(i32::from_le_bytes(bytes))
    }
}

impl StreamSerialize for i64 {
    fn serialize<W: StreamWrite>(&self, writer: &mut W, _config: &PackConfig) -> Result<()> {
        writer.write_bytes(&self.to_le_bytes())
    }
}

impl StreamDeserialize for i64 {
    fn deserialize<R: StreamRead>(reader: &mut R) -> Result<Self> {
        let mut bytes = [0u8; 8];
        reader.read_bytes(&mut bytes)?;
        Ok(i64::from_le_bytes(bytes))
    }
}

fn write_len_prefix<W: StreamWrite>(writer: &mut W, len: usize) -> Result<()> {
    // 32-bit length prefix; reject anything that would truncate on cast.
    let len: u32 = len
        .try_into()
        .map_err(|_| Error::invalid_data("sequence length exceeds 32-bit prefix"))?;
    writer.write_bytes(&len.to_le_bytes())
}

fn read_len_prefix<R: StreamRead>(reader: &mut R) -> Result<usize> {
    let mut bytes = [0u8; 4];
    reader.read_bytes(&mut bytes)?;
    Ok(u32::from_le_bytes(bytes) as usize)
}

impl StreamSerialize for &str {
    fn serialize<W: StreamWrite>(&self, writer: &mut W, _config: &PackConfig) -> Result<()> {
        write_len_prefix(writer, self.len())?;
        writer.write_bytes(self.as_bytes())
    }
}

impl StreamSerialize for String {
    fn serialize<W: StreamWrite>(&self, writer: &mut W, config: &PackConfig) -> Result<()> {
        self.as_str().serialize(writer, config)
    }
}

// Upper bound on any single read issued while draining a length prefix.
// Keeps the allocation for an overstated prefix proportional to the bytes
// actually present, not the declared length.
const PREFIX_READ_CHUNK: usize = 8 * 1024;

impl StreamDeserialize for String {
    fn deserialize<R: StreamRead>(reader: &mut R) -> Result<Self> {
        let len = read_len_prefix(reader)?;
        // The declared length could be a lie; read in bounded chunks so an
        // overstated prefix hits the bounds check at the first short chunk
        // instead of pre-allocating the full claim.
        let mut bytes = Vec::new();
        let mut chunk = [0u8; PREFIX_READ_CHUNK];
        let mut remaining = len;
        while remaining > 0 {
            let take = remaining.min(PREFIX_READ_CHUNK);
            reader.read_bytes(&mut chunk[..take])?;
            bytes.extend_from_slice(&chunk[..take]);
            remaining -= take;
        }
        String::from_utf8(bytes).map_err(|e| Error::invalid_data(e.to_string()))
    }
}

impl<T: StreamSerialize> StreamSerialize for Vec<T> {
    fn serialize<W: StreamWrite>(&self, writer: &mut W, config: &PackConfig) -> Result<()> {
        write_len_prefix(writer, self.len())?;
        for item in self {
            item.serialize(writer, config)?;
        }
        Ok(())
    }
}

impl<T: StreamDeserialize> StreamDeserialize for Vec<T> {
    fn deserialize<R: StreamRead>(reader: &mut R) -> Result<Self> {
        let len = read_len_prefix(reader)?;
        // The declared length could be a lie; let element reads hit the
        // bounds check rather than pre-reserving a huge vector.
        let mut items = Vec::new();
        for _ in 0..len {
            items.push(T::deserialize(reader)?);
        }
        Ok(items)
    }
}
