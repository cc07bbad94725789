//! Error types for parsing option, case style and conversion names.
//!
//! Tokenizing and joining never fail; these errors only come from turning
//! user-supplied names (CLI flags, config files) into typed values.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A word option name that matches none of the known flags
    #[error("Unknown word option: {0}")]
    UnknownOption(String),

    /// A case style name that matches none of the known styles
    #[error("Unknown case style: {0}")]
    UnknownCaseStyle(String),

    /// A conversion name that matches none of the known conversions
    #[error("Unknown conversion: {0} (expected words, acronym, dash, upper-camel, lower-camel or snake)")]
    UnknownConversion(String),
}

/// Result type alias for name parsing.
pub type Result<T> = std::result::Result<T, Error>;
