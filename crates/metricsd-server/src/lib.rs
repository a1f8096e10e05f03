//! metricsd aggregator library entry.
//!
//! Wires the metric store, the path/JSON HTTP surfaces and request logging
//! into one axum app. Consumed by the binary (`main.rs`) and by integration
//! tests, which drive the router directly or serve it on an ephemeral port.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod router;
pub mod store;
pub mod transport;

use metricsd_core::error::{MetricsError, Result};
use tokio::net::TcpListener;

/// Serve the aggregator on an already-bound listener until the future is
/// dropped or the server fails.
pub async fn serve(listener: TcpListener, state: app_state::AppState) -> Result<()> {
    let app = router::build_router(state);
    axum::serve(listener, app)
        .await
        .map_err(|e| MetricsError::Internal(format!("server failed: {e}")))
}
