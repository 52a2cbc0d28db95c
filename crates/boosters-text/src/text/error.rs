//! Error types for the text codec.

use thiserror::Error;

/// The input stream does not follow the text model grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInput {
    /// The stream ended before a required token.
    #[error("unexpected end of input while reading {context}")]
    UnexpectedEnd { context: &'static str },

    /// A token could not be parsed as the expected type.
    #[error("invalid value for {field}: {token:?} ({message})")]
    InvalidValue {
        field: &'static str,
        token: String,
        message: String,
    },

    /// A declared element count exceeds the configured limit.
    #[error("{field} count {count} exceeds limit {limit}")]
    CountTooLarge {
        field: &'static str,
        count: u64,
        limit: usize,
    },

    /// A token is longer than the configured limit.
    #[error("token for {context} exceeds {limit} bytes")]
    TokenTooLong { context: &'static str, limit: usize },

    /// Non-whitespace data follows a complete entity.
    #[error("trailing data after end of model: {token:?}")]
    TrailingData { token: String },
}

/// Errors that can occur while decoding.
#[derive(Debug, Error)]
pub enum ReadError {
    /// I/O error from the underlying reader.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream content is malformed.
    #[error("malformed input: {0}")]
    Malformed(#[from] MalformedInput),
}

impl ReadError {
    /// Whether this error describes bad stream content rather than an I/O failure.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }

    /// The malformed-input detail, if any.
    pub fn as_malformed(&self) -> Option<&MalformedInput> {
        match self {
            Self::Malformed(m) => Some(m),
            Self::Io(_) => None,
        }
    }
}

/// Errors that can occur while encoding.
///
/// Encoding only fails when the underlying writer does; non-finite values are
/// reported as warnings instead.
#[derive(Debug, Error)]
pub enum WriteError {
    /// I/O error from the underlying writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A non-finite floating-point value was written.
///
/// The value's token is still emitted; strict readers may not be able to load
/// the resulting stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonFiniteValue {
    /// Sequence the value belongs to.
    pub field: &'static str,
    /// Position within that sequence.
    pub position: usize,
    /// The offending value, widened to `f64`.
    pub value: f64,
}
