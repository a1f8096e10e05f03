//! Path-encoded update/read handlers.

use axum::{
    extract::{Path, State},
    response::Response,
};

use metricsd_core::error::MetricsError;
use metricsd_core::protocol::path::{parse_lookup, parse_update};

use crate::app_state::AppState;
use crate::transport::reply;

/// `POST /update/{kind}/{name}/{value}`
pub async fn update(
    State(app): State<AppState>,
    Path((kind, name, value)): Path<(String, String, String)>,
) -> Response {
    let update = match parse_update(&kind, &name, &value) {
        Ok(u) => u,
        Err(e) => return reply::text_error(e),
    };
    app.store().apply(&update);
    tracing::debug!(kind = %update.kind(), name = %update.name, value = %update.value, "metric updated");
    reply::text("OK".to_string())
}

/// `GET /value/{kind}/{name}`
pub async fn value(
    State(app): State<AppState>,
    Path((kind, name)): Path<(String, String)>,
) -> Response {
    let (kind, name) = match parse_lookup(&kind, &name) {
        Ok(k) => k,
        Err(e) => return reply::text_error(e),
    };
    match app.store().get(kind, &name) {
        Some(v) => reply::text(v.to_string()),
        None => reply::text_error(MetricsError::NotFound(format!("metric not found: {kind}/{name}"))),
    }
}
