//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The client
//! module builds `HttpRequest` values and classifies `HttpResponse` values; a
//! `Transport` (or the host itself) is responsible for the actual I/O.
//!
//! A response body can be read exactly once, through any one of `bytes`,
//! `text`, or `json`. Later reads fail with `BodyError::AlreadyUsed`. For this
//! reason `HttpResponse` is not `Clone`.

use serde::de::DeserializeOwned;

use crate::error::{BodyError, FetchError};
use crate::headers::find_header;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for http::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => http::Method::GET,
            HttpMethod::Post => http::Method::POST,
            HttpMethod::Put => http::Method::PUT,
            HttpMethod::Delete => http::Method::DELETE,
        }
    }
}

/// When a request may carry credentials (cookies, authorization).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Credentials {
    /// Never send credentials.
    Omit,
    /// Send credentials only to the origin the caller runs on.
    #[default]
    SameOrigin,
    /// Always send credentials, including cross-origin.
    Include,
}

impl Credentials {
    pub fn as_str(&self) -> &'static str {
        match self {
            Credentials::Omit => "omit",
            Credentials::SameOrigin => "same-origin",
            Credentials::Include => "include",
        }
    }

    /// Whether a header named `name` may be sent under this policy.
    ///
    /// Native transports have no notion of a page origin, so only `Omit`
    /// filters anything: it drops `Cookie` and `Authorization`.
    pub fn allows_header(&self, name: &str) -> bool {
        match self {
            Credentials::Omit => {
                !name.eq_ignore_ascii_case("cookie") && !name.eq_ignore_ascii_case("authorization")
            }
            Credentials::SameOrigin | Credentials::Include => true,
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built fresh for every call by the `build_*` functions and handed to a
/// `Transport`, or executed by the host directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub credentials: Credentials,
}

impl HttpRequest {
    /// Look up a header value, ignoring ASCII case in the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// A response body that can be consumed at most once.
#[derive(Debug)]
pub struct Body {
    content: Option<Vec<u8>>,
}

impl Default for Body {
    fn default() -> Self {
        Self::empty()
    }
}

impl Body {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            content: Some(bytes.into()),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// True once any accessor has taken the content.
    pub fn is_used(&self) -> bool {
        self.content.is_none()
    }

    pub fn bytes(&mut self) -> Result<Vec<u8>, BodyError> {
        self.content.take().ok_or(BodyError::AlreadyUsed)
    }

    pub fn text(&mut self) -> Result<String, BodyError> {
        Ok(String::from_utf8(self.bytes()?)?)
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Self::new(text.into_bytes())
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport` (or the host) and passed to `check_status` /
/// `parse_json` for classification.
#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub body: Body,
}

impl HttpResponse {
    /// `200..300`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    pub fn body_used(&self) -> bool {
        self.body.is_used()
    }

    pub fn bytes(&mut self) -> Result<Vec<u8>, BodyError> {
        self.body.bytes()
    }

    pub fn text(&mut self) -> Result<String, BodyError> {
        self.body.text()
    }

    /// Consume the body and decode it as JSON.
    ///
    /// Decoder failures come back as `FetchError::Parse` carrying the
    /// `serde_json::Error` unchanged.
    pub fn json<T: DeserializeOwned>(&mut self) -> Result<T, FetchError> {
        let bytes = self.body.bytes()?;
        serde_json::from_slice(&bytes).map_err(FetchError::Parse)
    }
}
