//! Error types for text splitting
//!
//! Every failure is raised before the target subtree is touched, so a
//! failed split leaves the tree exactly as it was.

use thiserror::Error;

/// Result alias used throughout the splitting core
pub type SplitTextResult<T> = Result<T, SplitTextError>;

/// Validation failure for a split request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitTextError {
    /// Selector matched nothing, or a null element reference was supplied
    #[error("The target element was not found.")]
    TargetNotFound,

    #[error("The type option must be an array.")]
    TypeNotArray,

    #[error("The type option must not be empty.")]
    TypeEmpty,

    #[error("The type option must not contain more than 2 values.")]
    TypeTooLong,

    #[error("The type option must contain at least one of the following values: \"chars\", \"words\" or both like [\"chars\", \"words\"].")]
    TypeUnrecognized,

    #[error("The tag option must be a string.")]
    TagNotString,

    #[error("The tag option must be either \"div\" or \"span\".")]
    TagUnrecognized,

    #[error("The wordDelimiter option must be a string.")]
    DelimiterNotString,

    /// Options value could not be read as an options object at all
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

impl SplitTextError {
    /// Human-readable message, identical to the `Display` output
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<serde_json::Error> for SplitTextError {
    fn from(err: serde_json::Error) -> Self {
        SplitTextError::InvalidOptions(err.to_string())
    }
}
