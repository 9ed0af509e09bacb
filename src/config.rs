//! Engine configuration forwarded through the pack orchestration.

/// Serialized representation requested from the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Compact binary encoding.
    Binary,
    /// Human-readable text encoding.
    Text,
}

/// Options handed verbatim to [`StreamSerialize::serialize`].
///
/// The pack orchestration assigns no meaning to these values; they exist so
/// callers can steer an engine (format selection, format version) without
/// the buffer layer knowing anything about the encoding.
///
/// [`StreamSerialize::serialize`]: crate::StreamSerialize::serialize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackConfig {
    pub format: Format,
    pub version: u32,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            format: Format::Binary,
            version: 3,
        }
    }
}
