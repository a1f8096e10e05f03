//! Axum router wiring.
//!
//! - `POST /update/{kind}/{name}/{value}` and `GET /value/{kind}/{name}`: path surface
//! - `POST /update/` and `POST /value/`: JSON surface
//! - `GET /`: HTML listing of every stored metric

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, obs, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(transport::listing::index))
        .route("/update/:kind/:name/:value", post(transport::path::update))
        .route("/value/:kind/:name", get(transport::path::value))
        .route("/update", post(transport::json::update))
        .route("/update/", post(transport::json::update))
        .route("/value", post(transport::json::value))
        .route("/value/", post(transport::json::value))
        .fallback(transport::reply::not_found)
        .with_state(state)
        .layer(middleware::from_fn(obs::access_log::access_log))
}
