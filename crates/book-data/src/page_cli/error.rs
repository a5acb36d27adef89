//! Error types for the page CLI.

use thiserror::Error;

use crate::error::{OutputError, QueryError};

/// Errors surfaced while parsing flags or producing a page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },
    /// A numeric value failed to parse.
    #[error("invalid number for {flag}: '{value}' ({message})")]
    InvalidNumber {
        /// Flag associated with the invalid number.
        flag: &'static str,
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// The parsed flags do not form a valid query.
    #[error("{source}")]
    InvalidQuery {
        /// Validation failure.
        #[from]
        source: QueryError,
    },
    /// The page could not be serialised or written.
    #[error("{source}")]
    Output {
        /// Underlying output failure.
        #[from]
        source: OutputError,
    },
}
