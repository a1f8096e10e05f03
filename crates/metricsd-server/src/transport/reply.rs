//! Error -> HTTP response mapping.
//!
//! Client mistakes (400) and lookup misses (404) are ordinary outcomes and
//! only logged at debug level.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use metricsd_core::error::{ClientCode, MetricsError};
use metricsd_core::protocol::json::ErrorBody;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

pub fn status_of(e: &MetricsError) -> StatusCode {
    match e.client_code() {
        ClientCode::BadRequest => StatusCode::BAD_REQUEST,
        ClientCode::NotFound => StatusCode::NOT_FOUND,
        ClientCode::Transport | ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn log_rejection(e: &MetricsError) {
    match e.client_code() {
        ClientCode::BadRequest | ClientCode::NotFound => {
            tracing::debug!(code = e.client_code().as_str(), reason = e.reason(), "request rejected");
        }
        ClientCode::Transport | ClientCode::Internal => {
            tracing::error!(error = %e, "request failed");
        }
    }
}

/// Plain-text success body.
pub fn text(body: String) -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, TEXT_PLAIN)], body).into_response()
}

/// Plain-text error for the path surface.
pub fn text_error(e: MetricsError) -> Response {
    log_rejection(&e);
    (
        status_of(&e),
        [(header::CONTENT_TYPE, TEXT_PLAIN)],
        e.reason().to_string(),
    )
        .into_response()
}

/// `{"error": ...}` for the JSON surface.
pub fn json_error(e: MetricsError) -> Response {
    log_rejection(&e);
    (status_of(&e), Json(ErrorBody::new(e.reason()))).into_response()
}

/// Fallback for unknown routes, including path updates with missing segments.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, [(header::CONTENT_TYPE, TEXT_PLAIN)], "not found").into_response()
}
