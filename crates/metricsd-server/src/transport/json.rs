//! JSON-bodied update/read handlers.
//!
//! Bodies are taken as raw bytes and decoded here so malformed JSON gets the
//! same `{"error": ...}` payload as every other rejection.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;

use metricsd_core::error::MetricsError;
use metricsd_core::protocol::json::Metrics;

use crate::app_state::AppState;
use crate::transport::reply;

/// `POST /update/`: apply the record and echo it back.
pub async fn update(State(app): State<AppState>, body: Bytes) -> Response {
    let record = match Metrics::decode(&body) {
        Ok(r) => r,
        Err(e) => return reply::json_error(e),
    };
    let update = match record.to_update() {
        Ok(u) => u,
        Err(e) => return reply::json_error(e),
    };
    app.store().apply(&update);
    tracing::debug!(kind = %update.kind(), name = %update.name, value = %update.value, "metric updated");
    Json(Metrics::from_update(&update)).into_response()
}

/// `POST /value/`: look the record up by `id` + `type`.
pub async fn value(State(app): State<AppState>, body: Bytes) -> Response {
    let record = match Metrics::decode(&body) {
        Ok(r) => r,
        Err(e) => return reply::json_error(e),
    };
    let (kind, id) = match record.lookup_key() {
        Ok(k) => k,
        Err(e) => return reply::json_error(e),
    };
    match app.store().get(kind, id) {
        Some(v) => Json(Metrics::with_value(id, v)).into_response(),
        None => reply::json_error(MetricsError::NotFound(format!("metric not found: {kind}/{id}"))),
    }
}
