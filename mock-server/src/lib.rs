use std::collections::BTreeMap;

use axum::{
    extract::Path,
    http::{HeaderMap, Method, StatusCode},
    response::Html,
    routing::{any, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::debug;

/// What `/echo` saw of the incoming request.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Echo {
    pub method: String,
    /// Lower-cased header names; repeated headers keep the last value.
    pub headers: BTreeMap<String, String>,
    /// The request body parsed as JSON, `None` when empty or not JSON.
    pub body: Option<Value>,
}

pub fn app() -> Router {
    Router::new()
        .route("/json", get(json_body))
        .route("/text", get(text_body))
        .route("/no-content", any(no_content))
        .route("/status/{code}", any(status))
        .route("/echo", any(echo))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn json_body() -> Json<Value> {
    Json(json!({ "test": "true" }))
}

async fn text_body() -> &'static str {
    "test"
}

async fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn status(Path(code): Path<u16>) -> Result<(StatusCode, Html<String>), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    debug!(code, "serving canned status");
    Ok((status, Html(format!("<!DOCTYPE html><title>{code}</title>"))))
}

async fn echo(method: Method, headers: HeaderMap, body: String) -> Json<Echo> {
    let headers = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect();
    let body = serde_json::from_str(&body).ok();
    debug!(%method, "echoing request");
    Json(Echo {
        method: method.to_string(),
        headers,
        body,
    })
}
