//! Generation queries, their defaults, and boundary validation.
//!
//! [`BookParams`] carries loosely-typed values as received from a caller
//! (HTTP query string, CLI flags). [`BookQuery::try_from_params`] resolves the
//! locale tag and applies the range checks, producing the typed query the
//! generator consumes. The generator itself never re-validates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::locale::Locale;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: i64 = 42;
/// Page used when the caller does not supply one.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when the caller does not supply one.
pub const DEFAULT_COUNT: u32 = 20;
/// Average likes used when the caller does not supply a rate.
pub const DEFAULT_AVG_LIKES: f64 = 5.0;
/// Average reviews used when the caller does not supply a rate.
pub const DEFAULT_AVG_REVIEWS: f64 = 3.0;
/// Largest page size accepted at the boundary.
pub const MAX_COUNT: u32 = 100;
/// Largest average likes or reviews rate accepted at the boundary.
pub const MAX_AVERAGE: f64 = 10.0;

/// Unix timestamp of the default reference date, `2025-01-01T00:00:00Z`.
const DEFAULT_REFERENCE_TIMESTAMP: i64 = 1_735_689_600;

/// Returns the fixed instant generated dates are anchored to by default.
///
/// Anchoring to a constant keeps output identical across days; callers that
/// want dates relative to "now" pass their own reference.
#[must_use]
pub fn default_reference_date() -> DateTime<Utc> {
    DateTime::from_timestamp(DEFAULT_REFERENCE_TIMESTAMP, 0).unwrap_or(DateTime::UNIX_EPOCH)
}

/// Raw generation parameters before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookParams {
    /// Stream seed.
    pub seed: i64,
    /// Locale tag, e.g. `"de-DE"`.
    pub locale: String,
    /// 1-based page number.
    pub page: i64,
    /// Page size.
    pub count: i64,
    /// Average likes per book.
    pub avg_likes: f64,
    /// Average reviews per book.
    pub avg_reviews: f64,
}

impl Default for BookParams {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            locale: Locale::default().tag().to_owned(),
            page: i64::from(DEFAULT_PAGE),
            count: i64::from(DEFAULT_COUNT),
            avg_likes: DEFAULT_AVG_LIKES,
            avg_reviews: DEFAULT_AVG_REVIEWS,
        }
    }
}

/// A validated request for one page of books.
///
/// # Example
///
/// ```
/// use book_data::{BookParams, BookQuery, Locale, default_reference_date};
///
/// let params = BookParams {
///     locale: "ja-JP".to_owned(),
///     page: 3,
///     ..BookParams::default()
/// };
/// let query = BookQuery::try_from_params(params, default_reference_date()).expect("valid");
///
/// assert_eq!(query.locale, Locale::JaJp);
/// assert_eq!(query.first_index(), 41);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BookQuery {
    /// Stream seed.
    pub seed: i64,
    /// Catalogue locale.
    pub locale: Locale,
    /// 1-based page number.
    pub page: u32,
    /// Page size.
    pub count: u32,
    /// Average likes per book.
    pub avg_likes: f64,
    /// Average reviews per book.
    pub avg_reviews: f64,
    /// Instant generated dates count back from.
    pub reference_date: DateTime<Utc>,
}

impl Default for BookQuery {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            locale: Locale::default(),
            page: DEFAULT_PAGE,
            count: DEFAULT_COUNT,
            avg_likes: DEFAULT_AVG_LIKES,
            avg_reviews: DEFAULT_AVG_REVIEWS,
            reference_date: default_reference_date(),
        }
    }
}

impl BookQuery {
    /// The fixed sample page: seed 123, `fr-FR`, first page of twenty.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            seed: 123,
            locale: Locale::FrFr,
            ..Self::default()
        }
    }

    /// Resolves and validates raw parameters.
    ///
    /// Checks run in a fixed order: locale, page and count, average likes,
    /// average reviews. The first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] describing the first rejected parameter.
    pub fn try_from_params(
        params: BookParams,
        reference_date: DateTime<Utc>,
    ) -> Result<Self, QueryError> {
        let BookParams {
            seed,
            locale,
            page,
            count,
            avg_likes,
            avg_reviews,
        } = params;

        let resolved_locale: Locale = locale.parse()?;
        let invalid_page_or_count = || QueryError::InvalidPageOrCount { page, count };
        let typed_page = u32::try_from(page).map_err(|_| invalid_page_or_count())?;
        let typed_count = u32::try_from(count).map_err(|_| invalid_page_or_count())?;

        let query = Self {
            seed,
            locale: resolved_locale,
            page: typed_page,
            count: typed_count,
            avg_likes,
            avg_reviews,
            reference_date,
        };
        query.validate()?;
        Ok(query)
    }

    /// Applies the boundary range checks to an already-typed query.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] when the page is zero, the count is outside
    /// `1..=100`, or either rate is outside `0..=10`.
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.page < 1 || !(1..=MAX_COUNT).contains(&self.count) {
            return Err(QueryError::InvalidPageOrCount {
                page: i64::from(self.page),
                count: i64::from(self.count),
            });
        }
        if !is_valid_average(self.avg_likes) {
            return Err(QueryError::InvalidAverageLikes);
        }
        if !is_valid_average(self.avg_reviews) {
            return Err(QueryError::InvalidAverageReviews);
        }
        Ok(())
    }

    /// Returns the seed the page's stream is initialised with.
    ///
    /// This is `seed + page` with wrapping addition, so distinct pairs such
    /// as `(5, 2)` and `(6, 1)` share a stream and produce identical pages.
    #[must_use]
    #[expect(
        clippy::cast_sign_loss,
        reason = "the combined seed is reinterpreted bit-for-bit as an RNG seed"
    )]
    pub const fn stream_seed(&self) -> u64 {
        self.seed.wrapping_add(self.page as i64) as u64
    }

    /// Returns the global index of the first book on this page.
    ///
    /// A page of zero is treated as the first page.
    #[must_use]
    pub fn first_index(&self) -> u64 {
        u64::from(self.page.saturating_sub(1))
            .saturating_mul(u64::from(self.count))
            .saturating_add(1)
    }
}

fn is_valid_average(value: f64) -> bool {
    (0.0..=MAX_AVERAGE).contains(&value)
}
