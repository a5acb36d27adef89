//! Book catalogue endpoints.
//!
//! `GET /api/books` resolves the query string into a [`BookQuery`], rejects
//! out-of-range values with `400`, and otherwise returns one generated page
//! with pagination metadata. Parameters that are absent, empty or do not parse
//! fall back to their defaults instead of failing the request.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, get, options, web};
use book_data::{
    Book, BookParams, BookQuery, DEFAULT_AVG_LIKES, DEFAULT_AVG_REVIEWS, DEFAULT_COUNT,
    DEFAULT_PAGE, DEFAULT_SEED, Locale, default_reference_date, generate_books,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, error, info};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{ApiResult, Error};
use crate::inbound::http::schemas::{BookSchema, ErrorSchema};

/// Shared state for the book handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BooksState {
    reference_date: DateTime<Utc>,
}

impl BooksState {
    /// Anchor generated dates to `reference_date`.
    pub fn new(reference_date: DateTime<Utc>) -> Self {
        Self { reference_date }
    }

    /// Instant that publication and review dates count back from.
    pub fn reference_date(&self) -> DateTime<Utc> {
        self.reference_date
    }
}

impl Default for BooksState {
    fn default() -> Self {
        Self::new(default_reference_date())
    }
}

/// Query string accepted by `GET /api/books`.
///
/// Every value is taken as text so malformed numbers can fall back to their
/// defaults rather than failing extraction. A repeated key keeps its first
/// value.
#[derive(Debug, Default, Clone, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct BooksQueryParams {
    /// Stream seed, default 42.
    #[param(example = "42")]
    pub seed: Option<String>,
    /// One of `en-US`, `de-DE`, `fr-FR`, `ja-JP`; default `en-US`.
    #[param(example = "de-DE")]
    pub locale: Option<String>,
    /// 1-based page number, default 1.
    #[param(example = "1")]
    pub page: Option<String>,
    /// Books per page in `1..=100`, default 20.
    #[param(example = "20")]
    pub count: Option<String>,
    /// Average likes per book in `0..=10`, default 5.
    #[param(example = "5")]
    pub avg_likes: Option<String>,
    /// Average reviews per book in `0..=10`, default 3.
    #[param(example = "3")]
    pub avg_reviews: Option<String>,
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.is_empty())
}

fn integer_or(raw: Option<&str>, default: i64) -> i64 {
    non_empty(raw)
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn rate_or(raw: Option<&str>, default: f64) -> f64 {
    non_empty(raw)
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| !value.is_nan())
        .unwrap_or(default)
}

impl BooksQueryParams {
    /// Collect the known keys from decoded query pairs.
    ///
    /// Unknown keys are ignored and only the first value of a repeated key
    /// is kept.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "seed" => &mut params.seed,
                "locale" => &mut params.locale,
                "page" => &mut params.page,
                "count" => &mut params.count,
                "avgLikes" => &mut params.avg_likes,
                "avgReviews" => &mut params.avg_reviews,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Decode a raw query string.
    ///
    /// # Errors
    /// Returns an invalid-request [`Error`] when the string cannot be decoded
    /// into key/value pairs.
    ///
    /// # Examples
    /// ```
    /// use backend::inbound::http::books::BooksQueryParams;
    ///
    /// let params = BooksQueryParams::from_query_string("count=5&count=6").expect("decodes");
    /// assert_eq!(params.count.as_deref(), Some("5"));
    /// ```
    pub fn from_query_string(query: &str) -> ApiResult<Self> {
        web::Query::<Vec<(String, String)>>::from_query(query)
            .map(|pairs| Self::from_pairs(pairs.into_inner()))
            .map_err(|err| {
                debug!(error = %err, "undecodable book query string");
                Error::invalid_request("Malformed query string")
                    .with_details(json!({ "field": "query" }))
            })
    }

    /// Apply defaults to missing or unparseable values.
    ///
    /// Numbers are trimmed before parsing. The locale is taken verbatim and
    /// only an absent or empty tag falls back to `en-US`. Range checks are left to [`BookQuery::try_from_params`].
    ///
    /// # Examples
    /// ```
    /// use backend::inbound::http::books::BooksQueryParams;
    ///
    /// let params = BooksQueryParams {
    ///     count: Some("abc".to_owned()),
    ///     avg_likes: Some("NaN".to_owned()),
    ///     ..BooksQueryParams::default()
    /// };
    /// let resolved = params.resolve();
    /// assert_eq!(resolved.count, 20);
    /// assert_eq!(resolved.avg_likes, 5.0);
    /// ```
    pub fn resolve(&self) -> BookParams {
        BookParams {
            seed: integer_or(self.seed.as_deref(), DEFAULT_SEED),
            locale: present(self.locale.as_deref())
                .map_or_else(|| Locale::default().tag().to_owned(), str::to_owned),
            page: integer_or(self.page.as_deref(), i64::from(DEFAULT_PAGE)),
            count: integer_or(self.count.as_deref(), i64::from(DEFAULT_COUNT)),
            avg_likes: rate_or(self.avg_likes.as_deref(), DEFAULT_AVG_LIKES),
            avg_reviews: rate_or(self.avg_reviews.as_deref(), DEFAULT_AVG_REVIEWS),
        }
    }
}

/// Pagination metadata for a generated page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Requested page.
    pub page: u32,
    /// Requested page size.
    pub count: u32,
    /// True when the page came back full; there is no real end.
    pub has_more: bool,
    /// Books generated up to and including this page.
    pub total_generated: u64,
}

impl Pagination {
    fn for_page(query: &BookQuery, returned: usize) -> Self {
        let returned = u64::try_from(returned).unwrap_or(u64::MAX);
        let preceding =
            u64::from(query.page.saturating_sub(1)).saturating_mul(u64::from(query.count));
        Self {
            page: query.page,
            count: query.count,
            has_more: returned == u64::from(query.count),
            total_generated: preceding.saturating_add(returned),
        }
    }
}

/// Parameters the page was generated with, after defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppliedParameters {
    /// Stream seed.
    pub seed: i64,
    /// Locale tag.
    #[schema(value_type = String, example = "en-US")]
    pub locale: Locale,
    /// Average likes per book.
    pub avg_likes: f64,
    /// Average reviews per book.
    pub avg_reviews: f64,
}

/// Response body for `GET /api/books`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BooksPage {
    /// Generated books in index order.
    #[schema(value_type = Vec<BookSchema>)]
    pub books: Vec<Book>,
    /// Pagination metadata.
    pub pagination: Pagination,
    /// Parameters after defaults.
    pub parameters: AppliedParameters,
}

impl BooksPage {
    fn new(query: &BookQuery, books: Vec<Book>) -> Self {
        Self {
            pagination: Pagination::for_page(query, books.len()),
            parameters: AppliedParameters {
                seed: query.seed,
                locale: query.locale,
                avg_likes: query.avg_likes,
                avg_reviews: query.avg_reviews,
            },
            books,
        }
    }
}

async fn generate_off_thread(query: BookQuery) -> ApiResult<Vec<Book>> {
    web::block(move || generate_books(&query))
        .await
        .map_err(|err| {
            error!(error = %err, "book generation failed on the blocking pool");
            Error::internal("book generation failed")
        })
}

/// Generate one page of books.
#[utoipa::path(
    get,
    path = "/api/books",
    description = "Return a deterministic page of generated books. Example request: GET /api/books?seed=42&locale=de-DE&page=2&count=10",
    params(BooksQueryParams),
    responses(
        (status = 200, description = "Generated page", body = BooksPage),
        (status = 400, description = "Invalid query parameters", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "listBooks"
)]
#[get("/api/books")]
pub async fn list_books(
    state: web::Data<BooksState>,
    req: HttpRequest,
) -> ApiResult<web::Json<BooksPage>> {
    let params = BooksQueryParams::from_query_string(req.query_string())?;
    let query = BookQuery::try_from_params(params.resolve(), state.reference_date())
        .map_err(|err| {
            debug!(error = %err, "rejected book query");
            Error::from(err)
        })?;

    info!(
        seed = query.seed,
        page = query.page,
        count = query.count,
        locale = %query.locale,
        avg_likes = query.avg_likes,
        avg_reviews = query.avg_reviews,
        "generating books"
    );
    let books = generate_off_thread(query.clone()).await?;
    Ok(web::Json(BooksPage::new(&query, books)))
}

/// CORS preflight for the books endpoint.
#[utoipa::path(
    options,
    path = "/api/books",
    responses(
        (
            status = 200,
            description = "Preflight accepted",
            headers(
                ("Access-Control-Allow-Origin" = String),
                ("Access-Control-Allow-Methods" = String),
                ("Access-Control-Allow-Headers" = String)
            )
        )
    ),
    tags = ["books"],
    operation_id = "booksPreflight"
)]
#[options("/api/books")]
pub async fn books_preflight() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
        .finish()
}

/// Fixed sample page: seed 123, `fr-FR`, twenty books.
#[utoipa::path(
    get,
    path = "/api/books/sample",
    responses(
        (status = 200, description = "Sample books", body = Vec<BookSchema>),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "sampleBooks"
)]
#[get("/api/books/sample")]
pub async fn sample_books(state: web::Data<BooksState>) -> ApiResult<web::Json<Vec<Book>>> {
    let query = BookQuery {
        reference_date: state.reference_date(),
        ..BookQuery::sample()
    };
    debug!(seed = query.seed, locale = %query.locale, "generating sample books");
    generate_off_thread(query).await.map(web::Json)
}

/// Register the book endpoints.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_books)
        .service(books_preflight)
        .service(sample_books);
}

#[cfg(test)]
#[path = "books_tests.rs"]
mod tests;
