//! The error returned when text cannot be parsed into a tree.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors from parsing a [`Tree`][crate::Tree] out of text.
#[derive(Debug, Error)]
pub enum ParseTreeError {
    /// A token between separators was not an integer key.
    #[error("invalid key {token:?}")]
    InvalidKey {
        /// The offending token.
        token: String,
        /// Why it didn't parse.
        #[source]
        source: ParseIntError,
    },
}
