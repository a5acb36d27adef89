//! Deterministic page generation.
//!
//! Every call builds its own stream from [`BookQuery::stream_seed`] and
//! consumes it in a fixed per-book order, so the same query always yields the
//! same page.

use chrono::{DateTime, TimeDelta, Utc};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;
use uuid::Uuid;

use crate::book::{Book, Genre, Review};
use crate::isbn::Isbn13;
use crate::locale::Locale;
use crate::query::BookQuery;
use crate::sampling::{mean_rating, sample_count};
use crate::text;
use crate::title::draw_title;

/// Multiplier applied to the book index before the ISBN draw is added.
const ISBN_INDEX_STRIDE: u64 = 1_000;
/// Largest value of the per-book ISBN draw.
const ISBN_DRAW_MAX: u64 = 999;
/// Cover image identifiers are drawn from `1..=COVER_ID_MAX`.
const COVER_ID_MAX: u32 = 1_000;
const COVER_URL_PREFIX: &str = "https://picsum.photos/300/400?random=";
const MIN_PAGES: u16 = 150;
const MAX_PAGES: u16 = 800;
const MIN_REVIEW_RATING: u8 = 1;
const MAX_REVIEW_RATING: u8 = 5;
/// Publication dates fall within this many seconds before the reference.
const PUBLICATION_WINDOW_SECS: i64 = 10 * 365 * 24 * 60 * 60;
/// Review dates fall within this many seconds before the reference.
const REVIEW_WINDOW_SECS: i64 = 365 * 24 * 60 * 60;

/// Generates one page of books.
///
/// The page always contains exactly `query.count` books with contiguous
/// indices starting at [`BookQuery::first_index`]. The function performs no
/// validation; out-of-range rates are clamped by the sampler instead of
/// rejected.
///
/// # Example
///
/// ```
/// use book_data::{BookQuery, Locale, generate_books};
///
/// let query = BookQuery {
///     locale: Locale::DeDe,
///     page: 2,
///     count: 5,
///     ..BookQuery::default()
/// };
/// let books = generate_books(&query);
///
/// assert_eq!(books.len(), 5);
/// assert_eq!(books.first().map(|b| b.index), Some(6));
/// assert_eq!(books, generate_books(&query));
/// ```
#[must_use]
pub fn generate_books(query: &BookQuery) -> Vec<Book> {
    let mut rng = ChaCha8Rng::seed_from_u64(query.stream_seed());
    let first_index = query.first_index();

    debug!(
        seed = query.seed,
        locale = query.locale.tag(),
        page = query.page,
        count = query.count,
        "generating book page"
    );

    (0..u64::from(query.count))
        .map(|offset| generate_book(&mut rng, query, first_index.saturating_add(offset)))
        .collect()
}

fn generate_book(rng: &mut ChaCha8Rng, query: &BookQuery, index: u64) -> Book {
    let locale = query.locale;
    let title = draw_title(rng, locale);
    let author = text::full_name(rng, locale);
    let publisher = text::company_name(rng, locale);

    let isbn_draw = rng.random_range(0..=ISBN_DRAW_MAX);
    let isbn = Isbn13::from_payload(
        index
            .saturating_mul(ISBN_INDEX_STRIDE)
            .saturating_add(isbn_draw),
    );

    let likes = sample_count(rng, query.avg_likes);
    let reviews = generate_reviews(rng, query);
    let cover_url = format!(
        "{COVER_URL_PREFIX}{}",
        rng.random_range(1..=COVER_ID_MAX)
    );

    let publication_date = date_before(rng, query.reference_date, PUBLICATION_WINDOW_SECS);
    let pages = rng.random_range(MIN_PAGES..=MAX_PAGES);
    let genre = Genre::ALL.choose(rng).copied().unwrap_or(Genre::Fiction);
    let description = text::description(rng, locale);
    let id = draw_uuid(rng);

    let ratings: Vec<u8> = reviews.iter().map(|review| review.rating).collect();
    let rating = mean_rating(&ratings);

    Book {
        id,
        index,
        isbn,
        title,
        author,
        publisher,
        publication_date,
        pages,
        genre,
        description,
        cover_url,
        likes,
        reviews,
        rating,
    }
}

fn generate_reviews(rng: &mut ChaCha8Rng, query: &BookQuery) -> Vec<Review> {
    let count = sample_count(rng, query.avg_reviews);
    (0..count)
        .map(|_| generate_review(rng, query.locale, query.reference_date))
        .collect()
}

fn generate_review(rng: &mut ChaCha8Rng, locale: Locale, reference: DateTime<Utc>) -> Review {
    let rating = rng.random_range(MIN_REVIEW_RATING..=MAX_REVIEW_RATING);
    let author = text::full_name(rng, locale);
    let text = text::review_text(rng, locale);
    let date = date_before(rng, reference, REVIEW_WINDOW_SECS);
    let id = draw_uuid(rng);
    Review {
        id,
        author,
        rating,
        text,
        date,
    }
}

/// Draws an instant in `[reference - window, reference]`, at second
/// granularity.
fn date_before(rng: &mut ChaCha8Rng, reference: DateTime<Utc>, window_secs: i64) -> DateTime<Utc> {
    let offset = rng.random_range(0..=window_secs);
    TimeDelta::try_seconds(offset)
        .and_then(|delta| reference.checked_sub_signed(delta))
        .unwrap_or(reference)
}

/// Builds a version 4 UUID from sixteen stream bytes.
fn draw_uuid(rng: &mut ChaCha8Rng) -> Uuid {
    uuid::Builder::from_random_bytes(rng.random()).into_uuid()
}
