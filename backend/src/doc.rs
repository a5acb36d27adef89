//! OpenAPI documentation.
//!
//! [`ApiDoc`] registers the book and health endpoints together with the
//! schema wrappers from [`crate::inbound::http::schemas`]. Swagger UI serves it
//! in debug builds and `cargo run --bin openapi-dump` prints it.

use utoipa::OpenApi;

use crate::inbound::http::books::{AppliedParameters, BooksPage, Pagination};
use crate::inbound::http::schemas::{BookSchema, ErrorCodeSchema, ErrorSchema, ReviewSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Book catalogue API",
        description = "Deterministic pages of generated books, plus health probes.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::books::list_books,
        crate::inbound::http::books::books_preflight,
        crate::inbound::http::books::sample_books,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        BooksPage,
        Pagination,
        AppliedParameters,
        BookSchema,
        ReviewSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "books", description = "Generated book catalogue"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
