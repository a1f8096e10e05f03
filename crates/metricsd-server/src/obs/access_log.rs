use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Log one line per request. Server errors are logged at `warn`, everything
/// else (including 4xx client mistakes) at `info`.
pub async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let start = Instant::now();
    let response = next.run(req).await;
    let micros = start.elapsed().as_micros() as u64;

    let status = response.status().as_u16();
    if response.status().is_server_error() {
        tracing::warn!(%method, %path, status, micros, "request failed");
    } else {
        tracing::info!(%method, %path, status, micros, "request");
    }

    response
}
