use std::collections::TryReserveError;
use thiserror::Error;

/// Custom error types for the packstream library.
#[derive(Error, Debug)]
pub enum Error {
    /// Buffer storage could not be obtained or grown.
    #[error("allocation failure: {0}")]
    Allocation(#[from] TryReserveError),

    /// A capacity request exceeded the platform's maximum representable
    /// buffer size.
    #[error("requested capacity {requested} exceeds maximum buffer size")]
    CapacityExceeded { requested: usize },

    /// A read request exceeded the bytes available in a read-session buffer.
    #[error("read overflow: requested {requested} bytes, {remaining} remaining")]
    Overflow { requested: usize, remaining: usize },

    /// Malformed serialized content reported by a deserializer.
    #[error("invalid serialized data: {message}")]
    InvalidData { message: String },
}

impl Error {
    /// Create a new `CapacityExceeded` error for the given request.
    pub fn capacity_exceeded(requested: usize) -> Self {
        Self::CapacityExceeded { requested }
    }

    /// Create a new `Overflow` error with the requested and remaining byte counts.
    pub fn overflow(requested: usize, remaining: usize) -> Self {
        Self::Overflow {
            requested,
            remaining,
        }
    }

    /// Create a new `InvalidData` error with a descriptive message.
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }
}

/// Result type alias for the library operations.
pub type Result<T> = std::result::Result<T, Error>;
