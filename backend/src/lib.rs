//! Book catalogue HTTP service.
//!
//! The handlers live in [`inbound::http`]; the generator itself is the
//! `book-data` crate.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
