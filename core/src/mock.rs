//! Canned responses and an in-memory transport for tests.
//!
//! `create_response` and `create_json_response` build `HttpResponse` values
//! the way a server would have sent them; `MockTransport` serves them back in
//! order and records the requests it saw.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde::Serialize;

use crate::error::TransportError;
use crate::headers::find_header;
use crate::http::{Body, HttpRequest, HttpResponse};
use crate::transport::Transport;

const TEXT_CONTENT_TYPE: &str = "text/plain;charset=UTF-8";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Status line and headers for a mock response.
#[derive(Debug, Clone)]
pub struct ResponseInit {
    pub status: u16,
    /// Falls back to the canonical reason phrase for `status`.
    pub status_text: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl Default for ResponseInit {
    fn default() -> Self {
        Self::with_status(200)
    }
}

impl ResponseInit {
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            status_text: None,
            headers: Vec::new(),
        }
    }

    pub fn status_text(mut self, text: impl Into<String>) -> Self {
        self.status_text = Some(text.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

fn canonical_reason(status: u16) -> &'static str {
    http::StatusCode::from_u16(status)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or_default()
}

fn build(body: Option<String>, init: ResponseInit, content_type: &str) -> HttpResponse {
    let ResponseInit {
        status,
        status_text,
        mut headers,
    } = init;
    if body.is_some() && find_header(&headers, "content-type").is_none() {
        headers.push(("content-type".to_string(), content_type.to_string()));
    }
    HttpResponse {
        status,
        status_text: status_text.unwrap_or_else(|| canonical_reason(status).to_string()),
        headers,
        body: body.map(Body::from).unwrap_or_default(),
    }
}

/// A response with a plain-text body. `None` gives an empty body and no
/// content type.
pub fn create_response(body: Option<&str>, init: ResponseInit) -> HttpResponse {
    build(body.map(str::to_string), init, TEXT_CONTENT_TYPE)
}

/// A response whose body is `value` serialized as JSON.
pub fn create_json_response<T: Serialize + ?Sized>(
    value: &T,
    init: ResponseInit,
) -> Result<HttpResponse, serde_json::Error> {
    let body = serde_json::to_string(value)?;
    Ok(build(Some(body), init, JSON_CONTENT_TYPE))
}

/// `Transport` that replays queued responses first-in first-out.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `response` behind any already queued.
    pub fn respond_with(&self, response: HttpResponse) -> &Self {
        lock(&self.responses).push_back(response);
        self
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    pub fn pending(&self) -> usize {
        lock(&self.responses).len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        lock(&self.requests).push(request);
        let response = lock(&self.responses).pop_front();
        response.ok_or_else(|| TransportError::Other("no mock response queued".to_string()))
    }
}
