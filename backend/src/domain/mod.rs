//! Domain primitives shared by the inbound adapters.
//!
//! Public surface:
//! - Error / ErrorCode: client-facing error payload and its category.
//! - TraceId: request correlation identifier held in task-local storage.

pub mod error;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;

/// Convenient handler result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::invalid_request("Invalid page or count parameters"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
