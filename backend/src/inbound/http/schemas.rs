//! OpenAPI schema definitions for types owned outside the HTTP adapter.
//!
//! The domain error and the generated book records do not derive `ToSchema`;
//! the wrappers below mirror their serialised shape and register it under the
//! original type names.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// A query parameter failed validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Human-readable message returned to clients.
    #[schema(example = "Invalid page or count parameters")]
    error: String,
    /// Stable machine-readable error code.
    code: ErrorCodeSchema,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "6f1d1e8a-0b7a-4c55-9a43-2c1f0d3b9e10")]
    trace_id: Option<String>,
    /// Which parameter was rejected, when known.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`book_data::Review`].
#[derive(ToSchema)]
#[schema(as = book_data::Review)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ReviewSchema {
    #[schema(value_type = String, format = Uuid)]
    id: String,
    #[schema(example = "Camille Lefèvre")]
    author: String,
    /// Whole-star rating.
    #[schema(minimum = 1, maximum = 5)]
    rating: u8,
    text: String,
    /// Within the year before the reference date.
    #[schema(value_type = String, format = DateTime)]
    date: String,
}

/// OpenAPI schema for [`book_data::Book`].
#[derive(ToSchema)]
#[schema(as = book_data::Book, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BookSchema {
    #[schema(value_type = String, format = Uuid)]
    id: String,
    /// 1-based position across all pages of the same query.
    #[schema(minimum = 1, example = 21)]
    index: u64,
    #[schema(example = "000-0-00021-417-9")]
    isbn: String,
    title: String,
    author: String,
    publisher: String,
    #[schema(value_type = String, format = DateTime)]
    publication_date: String,
    #[schema(minimum = 150, maximum = 800)]
    pages: u16,
    #[schema(example = "Science Fiction")]
    genre: String,
    description: String,
    #[schema(example = "https://picsum.photos/300/400?random=512")]
    cover_url: String,
    likes: u32,
    reviews: Vec<ReviewSchema>,
    /// Mean review rating, `0` without reviews.
    #[schema(example = 3.5)]
    rating: f64,
}
