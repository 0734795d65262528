use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur when collecting items from range list text.
///
/// Collection is all-or-nothing: if any part of the input is rejected, no items are returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A single item or a range endpoint could not be parsed as an integer.
    #[error("invalid range list syntax: '{invalid_value}' is not a valid integer: {source}")]
    MalformedNumber {
        /// The trimmed token or range endpoint that failed to parse.
        invalid_value: String,

        /// The underlying integer parsing error.
        source: ParseIntError,
    },

    /// A token containing `-` did not describe a valid range.
    #[error("invalid range list syntax: '{invalid_value}' is not a valid range: {problem}")]
    MalformedRange {
        /// The trimmed token that was rejected.
        invalid_value: String,

        /// A human-readable description of the problem.
        problem: String,
    },
}

/// A specialized `Result` type for range list operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
