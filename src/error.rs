//! Error types and handling for downstream pipelines
//!
//! Every failure the engine itself detects is a [`StreamError`]. Errors raised
//! inside caller-supplied closures are not wrapped: a panicking predicate or
//! mapper unwinds straight through the stage that invoked it.

use thiserror::Error;

/// Main error type for pipeline operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// An operation was invoked on a pipeline that a terminal operation already closed
    #[error("Stream has already been consumed (rejected `{operation}`)")]
    AlreadyConsumed { operation: &'static str },
    /// `to_map` met the same key twice and no merge function was supplied
    #[error("Cannot map: duplicate entry found for ({key}) and no merge function defined")]
    DuplicateKey { key: String },
    /// A value was required from an empty `Optional`
    #[error("No value present")]
    NoValuePresent,
    /// An eager operation would have buffered more elements than configured
    #[error("Buffer limit of {limit} elements exceeded")]
    BufferLimitExceeded { limit: usize },
    /// A numeric reduction produced a value outside the element type's range
    #[error("Arithmetic overflow in `{operation}`")]
    ArithmeticOverflow { operation: &'static str },
    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for StreamError {
    fn from(err: serde_json::Error) -> Self {
        StreamError::Config(err.to_string())
    }
}

/// Result type for downstream operations
pub type StreamResult<T> = Result<T, StreamError>;
