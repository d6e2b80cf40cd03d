//! Error types for the wire codec.

use thiserror::Error;

/// Errors that can occur while decoding responses or encoding commands.
///
/// Every variant except [`Error::Io`] is tied to the response or command unit
/// being processed. After a decode error the [`DecodeContext`] that was in use
/// must be discarded.
///
/// [`DecodeContext`]: crate::DecodeContext
#[derive(Debug, Error)]
pub enum Error {
    /// A literal announcement did not have the form `{digits}` / `{digits+}`,
    /// or was not followed directly by CRLF.
    #[error("Malformed literal count at position {position}")]
    MalformedLiteralCount {
        /// Byte position within the line where the error occurred.
        position: usize,
    },

    /// A quoted string reached the end of the line without its closing quote.
    #[error("Unterminated quoted string at position {position}")]
    UnterminatedQuotedString {
        /// Byte position of the opening quote.
        position: usize,
    },

    /// A `)` without matching `(`, or a line ended while a list was open.
    #[error("Unbalanced list parentheses at position {position}")]
    UnbalancedList {
        /// Byte position within the line where the error occurred.
        position: usize,
    },

    /// An atom opened a `[` section that was never closed on the same line.
    #[error("Unclosed section bracket at position {position}")]
    UnclosedSection {
        /// Byte position of the opening bracket.
        position: usize,
    },

    /// The peer announced a literal larger than the configured maximum.
    #[error("Literal too large: {size} bytes (max {max})")]
    LiteralTooLarge {
        /// Announced size. Saturates at `u64::MAX` if the count overflowed.
        size: u64,
        /// Configured maximum.
        max: u64,
    },

    /// A decimal text value does not fit into a `u64`.
    #[error("Integer overflow converting text to number")]
    IntegerOverflow,

    /// A text value that was expected to be a number contains non-digits.
    #[error("Text is not a decimal number")]
    InvalidNumber,

    /// The transport was closed while a line or literal was still pending.
    #[error("Unexpected end of channel")]
    UnexpectedEndOfChannel,

    /// A line exceeded the configured maximum length without a CRLF.
    #[error("Line too long (max {max} bytes)")]
    LineTooLong {
        /// Configured maximum line length.
        max: usize,
    },

    /// A stream-backed literal produced a different number of bytes than announced.
    #[error("Literal source length mismatch: announced {expected}, read {actual}")]
    LiteralLengthMismatch {
        /// Announced length.
        expected: u64,
        /// Bytes actually read from the source.
        actual: u64,
    },

    /// The peer answered a synchronizing literal with something other than a
    /// continuation request.
    #[error("Server rejected literal: {0}")]
    ContinuationRejected(String),

    /// I/O error from the transport or a literal source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
