use axum::http::{header::CONTENT_TYPE, HeaderName};

/// The API documentation page. Compiled into the binary so every call returns the same bytes.
///
/// NOTE: the page advertises a `429` rate limit response that no route enforces.
pub const API_DOCUMENTATION: &str = include_str!("../../../../assets/api_docs.html");

#[tracing::instrument(name = "Serving API documentation")]
pub async fn docs() -> ([(HeaderName, &'static str); 1], &'static str) {
    ([(CONTENT_TYPE, "text/html")], API_DOCUMENTATION)
}
