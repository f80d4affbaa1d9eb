//! JSON request helpers, one per HTTP verb.
//!
//! # Design
//! Each verb is split into a pure `build_*` function that produces an
//! `HttpRequest` and a shared classification step (`check_status` then
//! `parse_json`) that consumes the `HttpResponse`. The async helpers glue the
//! two together around a `Transport`; hosts that do their own I/O can call
//! the pure halves directly.
//!
//! Classification:
//! - status outside `200..300` fails with `HttpError`, body unread;
//! - `204 No Content` resolves to `None` without touching the body;
//! - any other success is decoded as JSON, and a decoder failure is returned
//!   as `FetchError::Parse` rather than folded into `HttpError`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{FetchError, HttpError};
use crate::headers::{merge_headers, JSON_HEADERS};
use crate::http::{Credentials, HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;

const NO_CONTENT: u16 = 204;

fn build(
    method: HttpMethod,
    url: &str,
    body: Option<String>,
    headers: &[(&str, &str)],
) -> HttpRequest {
    HttpRequest {
        method,
        url: url.to_string(),
        headers: merge_headers(JSON_HEADERS, headers),
        body,
        credentials: Credentials::SameOrigin,
    }
}

fn serialize<B: Serialize + ?Sized>(body: &B) -> Result<String, FetchError> {
    serde_json::to_string(body).map_err(FetchError::Serialize)
}

pub fn build_get(url: &str, headers: &[(&str, &str)]) -> HttpRequest {
    build(HttpMethod::Get, url, None, headers)
}

pub fn build_post<B: Serialize + ?Sized>(
    url: &str,
    body: &B,
    headers: &[(&str, &str)],
) -> Result<HttpRequest, FetchError> {
    Ok(build(HttpMethod::Post, url, Some(serialize(body)?), headers))
}

pub fn build_put<B: Serialize + ?Sized>(
    url: &str,
    body: &B,
    headers: &[(&str, &str)],
) -> Result<HttpRequest, FetchError> {
    Ok(build(HttpMethod::Put, url, Some(serialize(body)?), headers))
}

pub fn build_delete(url: &str, headers: &[(&str, &str)]) -> HttpRequest {
    build(HttpMethod::Delete, url, None, headers)
}

/// Pass a `200..300` response through; anything else becomes an `HttpError`.
pub fn check_status(response: HttpResponse) -> Result<HttpResponse, HttpError> {
    if response.is_success() {
        return Ok(response);
    }
    debug!(
        status = response.status,
        status_text = %response.status_text,
        "non-success status"
    );
    Err(HttpError::new(response))
}

/// Decode a success response. `204` yields `None` and leaves the body alone.
pub fn parse_json<R: DeserializeOwned>(
    mut response: HttpResponse,
) -> Result<Option<R>, FetchError> {
    if response.status == NO_CONTENT {
        trace!("no content, skipping body");
        return Ok(None);
    }
    response.json().map(Some)
}

/// `check_status` followed by `parse_json`.
pub fn handle_response<R: DeserializeOwned>(
    response: HttpResponse,
) -> Result<Option<R>, FetchError> {
    parse_json(check_status(response)?)
}

async fn execute<T, R>(transport: &T, request: HttpRequest) -> Result<Option<R>, FetchError>
where
    T: Transport + ?Sized,
    R: DeserializeOwned,
{
    debug!(method = request.method.as_str(), url = %request.url, "sending request");
    let response = transport.send(request).await?;
    trace!(status = response.status, "received response");
    handle_response(response)
}

/// GET `url` and decode the JSON response.
pub async fn get<T, R>(
    transport: &T,
    url: &str,
    headers: &[(&str, &str)],
) -> Result<Option<R>, FetchError>
where
    T: Transport + ?Sized,
    R: DeserializeOwned,
{
    execute(transport, build_get(url, headers)).await
}

/// POST `body` as JSON to `url` and decode the JSON response.
pub async fn post<T, B, R>(
    transport: &T,
    url: &str,
    body: &B,
    headers: &[(&str, &str)],
) -> Result<Option<R>, FetchError>
where
    T: Transport + ?Sized,
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let request = build_post(url, body, headers)?;
    execute(transport, request).await
}

/// PUT `body` as JSON to `url` and decode the JSON response.
pub async fn put<T, B, R>(
    transport: &T,
    url: &str,
    body: &B,
    headers: &[(&str, &str)],
) -> Result<Option<R>, FetchError>
where
    T: Transport + ?Sized,
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let request = build_put(url, body, headers)?;
    execute(transport, request).await
}

/// DELETE `url` and decode the JSON response, if any.
pub async fn delete<T, R>(
    transport: &T,
    url: &str,
    headers: &[(&str, &str)],
) -> Result<Option<R>, FetchError>
where
    T: Transport + ?Sized,
    R: DeserializeOwned,
{
    execute(transport, build_delete(url, headers)).await
}

/// The verb helpers bound to one transport.
///
/// Holds no state besides the transport; every call builds its own request
/// and owns its own response.
#[derive(Debug, Clone, Default)]
pub struct JsonClient<T> {
    transport: T,
}

impl<T: Transport> JsonClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn get<R: DeserializeOwned>(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<Option<R>, FetchError> {
        get(&self.transport, url, headers).await
    }

    pub async fn post<B, R>(
        &self,
        url: &str,
        body: &B,
        headers: &[(&str, &str)],
    ) -> Result<Option<R>, FetchError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        post(&self.transport, url, body, headers).await
    }

    pub async fn put<B, R>(
        &self,
        url: &str,
        body: &B,
        headers: &[(&str, &str)],
    ) -> Result<Option<R>, FetchError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        put(&self.transport, url, body, headers).await
    }

    pub async fn delete<R: DeserializeOwned>(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<Option<R>, FetchError> {
        delete(&self.transport, url, headers).await
    }
}
