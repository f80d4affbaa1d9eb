//! JSON-over-HTTP request helpers.
//!
//! # Overview
//! `get`, `post`, `put` and `delete` send a JSON request through a
//! `Transport` and decode the JSON answer. Responses outside `200..300` fail
//! with `HttpError`; `204 No Content` resolves to `None`; a malformed body on
//! a success status surfaces the decoder's own error.
//!
//! # Design
//! - Requests and responses are plain data (`http` module). The pure
//!   `build_*` / `check_status` / `parse_json` functions let a host do the
//!   I/O itself; the async helpers run them around a `Transport`.
//! - Every request carries `Accept` and `Content-Type: application/json`,
//!   caller headers layered on top, and the `same-origin` credentials policy.
//! - `ReqwestTransport` (default `reqwest` feature) is the bundled transport;
//!   `mock::MockTransport` replays canned responses in tests.
//!
//! ```no_run
//! use jsonfetch::{JsonClient, ReqwestTransport};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Status {
//!     healthy: bool,
//! }
//!
//! async fn healthy() -> Result<bool, jsonfetch::FetchError> {
//!     let client = JsonClient::new(ReqwestTransport::new());
//!     let status: Option<Status> = client.get("http://localhost:3000/status", &[]).await?;
//!     Ok(status.is_some_and(|s| s.healthy))
//! }
//! ```

pub mod client;
pub mod error;
pub mod headers;
pub mod http;
pub mod mock;
pub mod transport;

pub use client::{
    build_delete, build_get, build_post, build_put, check_status, delete, get, handle_response,
    parse_json, post, put, JsonClient,
};
pub use error::{BodyError, FetchError, HttpError, TransportError};
pub use headers::{merge_headers, JSON_HEADERS};
pub use self::http::{Body, Credentials, HttpMethod, HttpRequest, HttpResponse};
pub use transport::Transport;
#[cfg(feature = "reqwest")]
pub use transport::{ReqwestTransport, ReqwestTransportBuilder};
