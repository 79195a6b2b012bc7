#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;

use rust_atelier::api::create_api_router;
use rust_atelier::entities::seed;
use rust_atelier::store::{MemStorage, SharedStore};

/// Builds the full router over a freshly seeded in-memory store.
pub fn app() -> Router {
    let store: SharedStore = Arc::new(MemStorage::new());
    seed(store.as_ref());
    create_api_router(store)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read response body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("response body was not valid JSON")
}

pub fn ids(value: &serde_json::Value) -> Vec<i64> {
    value
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|entry| entry["id"].as_i64().expect("expected a numeric id"))
        .collect()
}
