//! Deterministic synthetic book catalogue generation.
//!
//! Given a seed, a locale, and average likes and reviews rates, this crate
//! reproducibly generates the same page of fictional books for the same
//! inputs. It has no I/O of its own apart from the [`page_cli`] helpers used
//! by the `book-page` binary.
//!
//! # Overview
//!
//! - [`BookQuery`] describes one page; [`BookQuery::try_from_params`]
//!   validates loosely-typed input into it
//! - [`generate_books`] turns a query into a page of [`Book`] records
//! - [`Isbn13`] builds and checks ISBN-13 identifiers
//! - [`StarRating`] breaks a mean rating into display stars
//!
//! # Example
//!
//! ```
//! use book_data::{BookQuery, Locale, generate_books};
//!
//! let query = BookQuery {
//!     seed: 123,
//!     locale: Locale::FrFr,
//!     ..BookQuery::default()
//! };
//! let books = generate_books(&query);
//!
//! assert_eq!(books.len(), 20);
//! assert_eq!(books, generate_books(&query));
//! assert!(books.iter().all(|book| book.has_consistent_rating()));
//! ```

mod atomic_io;
mod book;
mod error;
mod generator;
mod isbn;
mod locale;
pub mod page_cli;
mod query;
mod sampling;
mod text;
mod title;
mod words;

pub use book::{Book, Genre, Review};
pub use error::{IsbnError, LocaleError, OutputError, QueryError};
pub use generator::generate_books;
pub use isbn::{Isbn13, check_digit as isbn13_check_digit};
pub use locale::Locale;
pub use query::{
    BookParams, BookQuery, DEFAULT_AVG_LIKES, DEFAULT_AVG_REVIEWS, DEFAULT_COUNT, DEFAULT_PAGE,
    DEFAULT_SEED, MAX_AVERAGE, MAX_COUNT, default_reference_date,
};
pub use sampling::{StarRating, mean_rating};
