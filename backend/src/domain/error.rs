//! Transport-agnostic error payload.
//!
//! Handlers return [`Error`] and the HTTP adapter maps it onto a status code
//! and JSON body. The payload captures the request's trace identifier when
//! one is in scope so clients can quote it in bug reports.

use book_data::QueryError;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::TraceId;

/// Header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request parameters failed validation.
    InvalidRequest,
    /// An unexpected failure occurred while serving the request.
    InternalError,
}

/// Error payload returned to API clients.
///
/// Serialises as `{"error": ..., "code": ..., "traceId": ...}`; the trace
/// identifier and details are omitted when absent.
///
/// # Examples
/// ```
/// use backend::domain::{Error, ErrorCode};
///
/// let err = Error::invalid_request("Invalid page or count parameters");
/// assert_eq!(err.code(), ErrorCode::InvalidRequest);
/// assert_eq!(err.message(), "Invalid page or count parameters");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    #[serde(rename = "error")]
    message: String,
    code: ErrorCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Create an error, capturing the current trace identifier if one is in
    /// scope.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code,
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Correlation identifier, if captured.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary structured details.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach a trace identifier explicitly.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach structured details.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("bad").with_details(json!({ "field": "count" }));
    /// assert!(err.details().is_some());
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Copy of this error safe to show clients.
    ///
    /// Internal errors lose their message and details; the trace identifier
    /// is kept so the failure can still be correlated with logs.
    pub fn redacted(&self) -> Self {
        match self.code {
            ErrorCode::InternalError => Self {
                message: "Internal server error".to_owned(),
                code: ErrorCode::InternalError,
                trace_id: self.trace_id.clone(),
                details: None,
            },
            ErrorCode::InvalidRequest => self.clone(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

impl From<QueryError> for Error {
    fn from(err: QueryError) -> Self {
        let details = match &err {
            QueryError::InvalidLocale { tag } => json!({ "field": "locale", "value": tag }),
            QueryError::InvalidPageOrCount { page, count } => {
                json!({ "field": "pageOrCount", "page": page, "count": count })
            }
            QueryError::InvalidAverageLikes => json!({ "field": "avgLikes" }),
            QueryError::InvalidAverageReviews => json!({ "field": "avgReviews" }),
        };
        Self::invalid_request(err.to_string()).with_details(details)
    }
}
