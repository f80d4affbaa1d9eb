//! Error types for the JSON fetch helpers.
//!
//! # Design
//! A non-2xx status and a malformed body on a 2xx are different failures and
//! stay different: the first is an `HttpError` that owns the response, the
//! second is the `serde_json::Error` exactly as the decoder produced it.

use thiserror::Error;

use crate::http::HttpResponse;

/// A response whose status fell outside `200..300`.
///
/// Displays as the response's status text. The response itself, body still
/// unread, is kept for callers that need the status code or headers.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpError {
    pub message: String,
    pub response: HttpResponse,
}

impl HttpError {
    pub fn new(response: HttpResponse) -> Self {
        Self {
            message: response.status_text.clone(),
            response,
        }
    }

    pub fn status(&self) -> u16 {
        self.response.status
    }

    pub fn into_response(self) -> HttpResponse {
        self.response
    }
}

/// Failures reading a response body.
#[derive(Debug, Error)]
pub enum BodyError {
    /// The body was already consumed by an earlier accessor.
    #[error("body already used")]
    AlreadyUsed,
    #[error("body is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Failures below HTTP: the request never produced a response.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Request timeout")]
    Timeout,
    #[error("Client build error: {0}")]
    Build(String),
    #[error("{0}")]
    Other(String),
}

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_builder() {
            TransportError::Build(err.to_string())
        } else if err.is_connect() {
            TransportError::Connection(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

/// Everything a verb helper can fail with.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The success-range body was not valid JSON for the requested type.
    #[error(transparent)]
    Parse(serde_json::Error),

    /// The request body could not be serialized; nothing was sent.
    #[error("serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Body(#[from] BodyError),
}
