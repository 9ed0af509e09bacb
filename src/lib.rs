//! # packstream
//!
//! A lightweight in-memory byte stream bridging an object-serialization
//! engine to a growable buffer.
//!
//! ## Overview
//!
//! `packstream` owns the buffer mechanics of serialization (growth,
//! bounds enforcement, and exact-length finalization) while leaving the
//! encoding of values entirely to an engine the host supplies through two
//! traits. The write path captures bytes the engine pushes, doubling
//! storage on demand; the read path hands the engine bytes pulled from a
//! fixed, borrowed range with strict bounds checks and no copying of the
//! source.
//!
//! ## Quick start
//!
//! ```rust
//! use packstream::*;
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl StreamSerialize for Point {
//!     fn serialize<W: StreamWrite>(&self, writer: &mut W, config: &PackConfig) -> Result<()> {
//!         self.x.serialize(writer, config)?;
//!         self.y.serialize(writer, config)
//!     }
//! }
//!
//! impl StreamDeserialize for Point {
//!     fn deserialize<R: StreamRead>(reader: &mut R) -> Result<Self> {
//!         Ok(Point {
//!             x: i32::deserialize(reader)?,
//!             y: i32::deserialize(reader)?,
//!         })
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     let bytes = pack(&Point { x: 3, y: -4 }, &PackConfig::default())?;
//!     let point: Point = unpack(&bytes)?;
//!     assert_eq!((point.x, point.y), (3, -4));
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! * **`WriteBuffer` / `ReadBuffer`**: the storage layer, an owned
//!   doubling buffer for write sessions and a borrowed, fixed one for read
//!   sessions.
//! * **`StreamWriter` / `StreamReader`**: adapters binding one buffer each,
//!   exposing only the byte-transfer capabilities an engine needs.
//! * **`StreamSerialize` / `StreamDeserialize`**: the engine contract;
//!   implement these on your object model to plug in any encoding.
//! * **`pack` / `unpack`**: the orchestration that ties a session together.

pub mod buffer;
pub mod config;
pub mod error;
pub mod pack;
pub mod reader;
pub mod traits;
pub mod writer;

// Re-export the main public API for user convenience.
pub use buffer::{ReadBuffer, WriteBuffer, MAX_CAPACITY};
pub use config::{Format, PackConfig};
pub use error::{Error, Result};
pub use pack::{pack, pack_with_capacity, unpack, DEFAULT_CAPACITY};
pub use reader::StreamReader;
pub use traits::{StreamDeserialize, StreamRead, StreamSerialize, StreamWrite};
pub use writer::StreamWriter;
