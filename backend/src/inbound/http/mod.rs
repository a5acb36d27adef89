//! HTTP inbound adapter exposing the REST endpoints.

pub mod books;
pub mod error;
pub mod health;
pub mod schemas;

pub use error::ApiResult;
