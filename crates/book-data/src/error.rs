//! Error types for the book-data crate.
//!
//! Generation itself is infallible. These enums cover the fallible edges:
//! parsing locale tags and ISBN strings, and validating a [`BookQuery`]
//! before it reaches the generator.
//!
//! [`BookQuery`]: crate::BookQuery

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised when a locale tag cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The tag is not one of the supported locales.
    #[error("unsupported locale '{tag}'")]
    Unsupported {
        /// The tag that failed to resolve.
        tag: String,
    },
}

/// Errors raised when parsing an ISBN-13 string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IsbnError {
    /// The input does not contain exactly 13 digits once hyphens are removed.
    #[error("ISBN-13 must contain 13 digits, found {found}")]
    WrongLength {
        /// Number of characters left after stripping hyphens.
        found: usize,
    },
    /// The input contains a character other than a digit or hyphen.
    #[error("ISBN-13 contains invalid character '{character}'")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
    /// The final digit does not match the checksum of the payload.
    #[error("ISBN-13 check digit mismatch: expected {expected}, found {actual}")]
    CheckDigitMismatch {
        /// Check digit computed from the payload digits.
        expected: u8,
        /// Check digit present in the input.
        actual: u8,
    },
}

/// Validation failures for a book query.
///
/// The display strings are the messages returned to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The locale tag is not supported.
    #[error("Invalid locale. Must be one of: en-US, de-DE, fr-FR, ja-JP")]
    InvalidLocale {
        /// The rejected tag.
        tag: String,
    },
    /// The page is below one or the count is outside `1..=100`.
    #[error("Invalid page or count parameters")]
    InvalidPageOrCount {
        /// Requested page.
        page: i64,
        /// Requested page size.
        count: i64,
    },
    /// Average likes is outside `0..=10`.
    #[error("Average likes must be between 0 and 10")]
    InvalidAverageLikes,
    /// Average reviews is outside `0..=10`.
    #[error("Average reviews must be between 0 and 10")]
    InvalidAverageReviews,
}

impl From<LocaleError> for QueryError {
    fn from(value: LocaleError) -> Self {
        match value {
            LocaleError::Unsupported { tag } => Self::InvalidLocale { tag },
        }
    }
}

/// Errors raised while writing a generated page to disk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputError {
    /// The page could not be serialised to JSON.
    #[error("failed to serialise page: {message}")]
    Serialize {
        /// Description of the serialisation failure.
        message: String,
    },
    /// The output file could not be written.
    #[error("failed to write output file at '{path}': {message}")]
    Write {
        /// Path that could not be written.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}
