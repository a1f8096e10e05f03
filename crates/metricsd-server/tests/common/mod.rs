#![allow(dead_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use tower::util::ServiceExt;

use metricsd_server::app_state::AppState;
use metricsd_server::config::ServerConfig;
use metricsd_server::router::build_router;
use metricsd_server::store::MetricStore;

pub struct TestContext {
    pub store: Arc<MetricStore>,
    pub app: axum::Router,
}

pub fn build_test_context() -> TestContext {
    let store = Arc::new(MetricStore::new());
    let state = AppState::with_store(ServerConfig::default(), Arc::clone(&store));
    TestContext {
        store,
        app: build_router(state),
    }
}

pub async fn request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("Content-Type", "application/json");
    }
    let req = builder
        .body(Body::from(body.unwrap_or_default().to_string()))
        .expect("request should build");

    let resp = app
        .clone()
        .oneshot(req)
        .await
        .expect("router should respond");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should read");
    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

pub async fn request_json(
    app: &axum::Router,
    uri: &str,
    body: &str,
) -> (StatusCode, serde_json::Value) {
    let (status, text) = request(app, "POST", uri, Some(body)).await;
    let value = serde_json::from_str(&text).expect("json body");
    (status, value)
}
