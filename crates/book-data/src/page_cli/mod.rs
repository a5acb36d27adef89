//! CLI support for dumping a generated page as JSON.
//!
//! The `book-page` binary delegates to these functions so flag handling and
//! output can be exercised in tests without spawning a process.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::info;

use crate::atomic_io::write_atomic;
use crate::error::OutputError;
use crate::generator::generate_books;
use crate::query::{BookParams, BookQuery, default_reference_date};

mod error;

pub use error::CliError;

/// Parsed options for the page CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    params: BookParams,
    output: Option<Utf8PathBuf>,
}

impl Options {
    /// Returns the raw generation parameters.
    #[must_use]
    pub const fn params(&self) -> &BookParams {
        &self.params
    }

    /// Returns the output path, or `None` when the page goes to stdout.
    ///
    /// # Example
    ///
    /// ```
    /// use book_data::page_cli::{ParseOutcome, parse_args};
    ///
    /// let args = vec!["--output".to_owned(), "page.json".to_owned()];
    /// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
    ///     panic!("expected options");
    /// };
    ///
    /// assert_eq!(options.output().map(|p| p.as_str()), Some("page.json"));
    /// ```
    #[must_use]
    pub fn output(&self) -> Option<&Utf8Path> {
        self.output.as_deref()
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Where a rendered page ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The caller should print this JSON to stdout.
    Stdout(String),
    /// The JSON was written to a file.
    File {
        /// Destination path.
        path: Utf8PathBuf,
        /// Number of books in the page.
        books: usize,
    },
}

/// Parses CLI arguments. Flags that are not supplied take the query defaults.
///
/// # Errors
///
/// Returns [`CliError`] for unknown flags, missing values, or numbers that
/// fail to parse.
///
/// # Example
///
/// ```
/// use book_data::page_cli::{ParseOutcome, parse_args};
///
/// let args = vec![
///     "--seed".to_owned(),
///     "7".to_owned(),
///     "--locale".to_owned(),
///     "de-DE".to_owned(),
/// ];
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
///
/// assert_eq!(options.params().seed, 7);
/// assert_eq!(options.params().locale, "de-DE");
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut params = BookParams::default();
    let mut output: Option<Utf8PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--seed" => params.seed = parse_number(&next_value(&mut args, "--seed")?, "--seed")?,
            "--locale" => params.locale = next_value(&mut args, "--locale")?,
            "--page" => params.page = parse_number(&next_value(&mut args, "--page")?, "--page")?,
            "--count" => {
                params.count = parse_number(&next_value(&mut args, "--count")?, "--count")?;
            }
            "--avg-likes" => {
                let value = next_value(&mut args, "--avg-likes")?;
                params.avg_likes = parse_number(&value, "--avg-likes")?;
            }
            "--avg-reviews" => {
                let value = next_value(&mut args, "--avg-reviews")?;
                params.avg_reviews = parse_number(&value, "--avg-reviews")?;
            }
            "--output" => {
                output = Some(Utf8PathBuf::from(next_value(&mut args, "--output")?));
            }
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    Ok(ParseOutcome::Options(Options { params, output }))
}

/// Validates the options into a query anchored at the default reference date.
///
/// # Errors
///
/// Returns [`CliError::InvalidQuery`] when any parameter is out of range.
pub fn build_query(options: &Options) -> Result<BookQuery, CliError> {
    Ok(BookQuery::try_from_params(
        options.params.clone(),
        default_reference_date(),
    )?)
}

/// Generates the page as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`CliError::Output`] if serialisation fails.
pub fn render_page(query: &BookQuery) -> Result<String, CliError> {
    let books = generate_books(query);
    serde_json::to_string_pretty(&books)
        .map_err(|err| OutputError::Serialize {
            message: err.to_string(),
        })
        .map_err(CliError::from)
}

/// Validates, generates, and delivers a page.
///
/// With `--output` the JSON is written atomically and a [`Delivery::File`]
/// summary is returned; otherwise the JSON itself is returned for printing.
///
/// # Errors
///
/// Returns [`CliError`] when validation, serialisation, or writing fails.
pub fn execute(options: &Options) -> Result<Delivery, CliError> {
    let query = build_query(options)?;
    let json = render_page(&query)?;

    let Some(path) = options.output.clone() else {
        return Ok(Delivery::Stdout(json));
    };
    write_atomic(&path, &json)?;
    let books = usize::try_from(query.count).unwrap_or(usize::MAX);
    info!(path = %path, books, seed = query.seed, page = query.page, "page written");
    Ok(Delivery::File { path, books })
}

/// Formats the confirmation printed after a file write.
///
/// # Example
///
/// ```
/// use book_data::page_cli::success_message;
/// use camino::Utf8Path;
///
/// assert_eq!(
///     success_message(Utf8Path::new("page.json"), 20),
///     "Wrote 20 books to page.json"
/// );
/// ```
#[must_use]
pub fn success_message(path: &Utf8Path, books: usize) -> String {
    format!("Wrote {books} books to {path}")
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

fn parse_number<T>(value: &str, flag: &'static str) -> Result<T, CliError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| CliError::InvalidNumber {
        flag,
        value: value.to_owned(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests;
