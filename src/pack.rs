//! Pack and unpack orchestration.
//!
//! One call, one session: `pack` spins up an owned growable buffer, hands
//! the engine a writer adapter, and finalizes to an exact-length vector;
//! `unpack` wraps the caller's bytes zero-copy and hands the engine a
//! reader adapter. Calls share nothing, so concurrent sessions on separate
//! threads need no locking.

use crate::buffer::{ReadBuffer, WriteBuffer};
use crate::config::PackConfig;
use crate::error::Result;
use crate::reader::StreamReader;
use crate::traits::{StreamDeserialize, StreamSerialize};
use crate::writer::StreamWriter;

/// Initial write-session capacity, sized so typical payloads serialize
/// without a single reallocation.
pub const DEFAULT_CAPACITY: usize = 16384;

/// Serializes `value` into an exact-length byte vector.
///
/// `config` is forwarded verbatim to the engine. Any failure during
/// serialization propagates unchanged and the working buffer is torn down;
/// no partial result is ever returned.
pub fn pack<T: StreamSerialize>(value: &T, config: &PackConfig) -> Result<Vec<u8>> {
    pack_with_capacity(value, config, DEFAULT_CAPACITY)
}

/// Like [`pack`], but with a caller-chosen initial capacity.
///
/// Useful when the serialized size is roughly known ahead of time and the
/// doubling reallocations of a too-small start are worth avoiding.
pub fn pack_with_capacity<T: StreamSerialize>(
    value: &T,
    config: &PackConfig,
    initial_capacity: usize,
) -> Result<Vec<u8>> {
    let mut buffer = WriteBuffer::with_capacity(initial_capacity)?;
    let mut writer = StreamWriter::new(&mut buffer);
    value.serialize(&mut writer, config)?;
    Ok(buffer.finalize())
}

/// Reconstructs a value from serialized bytes.
///
/// `bytes` is borrowed zero-copy for the duration of the call and is never
/// mutated. A read past the end of `bytes` fails with
/// [`Error::Overflow`](crate::Error::Overflow) and no partial object is
/// surfaced.
pub fn unpack<T: StreamDeserialize>(bytes: &[u8]) -> Result<T> {
    let mut reader = StreamReader::new(ReadBuffer::new(bytes));
    T::deserialize(&mut reader)
}
