//! The I/O seam between the JSON helpers and an HTTP library.
//!
//! `Transport` takes a fully built `HttpRequest` and returns whatever the
//! server answered. It must not interpret the status code: 4xx and 5xx are
//! ordinary responses here and are classified by the client.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one HTTP round-trip.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<'a, T: Transport + ?Sized> Transport for &'a T {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

#[cfg(feature = "reqwest")]
pub use self::reqwest_backend::{ReqwestTransport, ReqwestTransportBuilder};

#[cfg(feature = "reqwest")]
mod reqwest_backend {
    use std::time::Duration;

    use async_trait::async_trait;
    use tracing::trace;

    use super::Transport;
    use crate::error::TransportError;
    use crate::http::{Body, HttpRequest, HttpResponse};

    /// `Transport` backed by a `reqwest::Client`.
    #[derive(Debug, Clone, Default)]
    pub struct ReqwestTransport {
        inner: reqwest::Client,
    }

    impl ReqwestTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn builder() -> ReqwestTransportBuilder {
            ReqwestTransportBuilder::default()
        }

        pub fn from_client(client: reqwest::Client) -> Self {
            Self { inner: client }
        }
    }

    /// Transport settings. Anything left unset uses reqwest's default.
    #[derive(Debug, Default)]
    pub struct ReqwestTransportBuilder {
        timeout: Option<Duration>,
        user_agent: Option<String>,
    }

    impl ReqwestTransportBuilder {
        /// Total time allowed for a request, including reading the body.
        pub fn timeout(mut self, timeout: Duration) -> Self {
            self.timeout = Some(timeout);
            self
        }

        pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
            self.user_agent = Some(user_agent.into());
            self
        }

        pub fn build(self) -> Result<ReqwestTransport, TransportError> {
            let mut builder = reqwest::Client::builder();
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(user_agent) = self.user_agent {
                builder = builder.user_agent(user_agent);
            }
            Ok(ReqwestTransport {
                inner: builder.build()?,
            })
        }
    }

    #[async_trait]
    impl Transport for ReqwestTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            let mut builder = self
                .inner
                .request(request.method.into(), request.url.as_str());
            for (name, value) in &request.headers {
                if request.credentials.allows_header(name) {
                    builder = builder.header(name.as_str(), value.as_str());
                } else {
                    trace!(
                        header = %name,
                        credentials = request.credentials.as_str(),
                        "dropping header"
                    );
                }
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await?;
            let status = response.status();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|value| (name.as_str().to_string(), value.to_string()))
                })
                .collect();
            let bytes = response.bytes().await?;

            Ok(HttpResponse {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                headers,
                body: Body::new(bytes.to_vec()),
            })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn builder_accepts_settings() {
            let transport = ReqwestTransport::builder()
                .timeout(Duration::from_secs(5))
                .user_agent("jsonfetch-test")
                .build();
            assert!(transport.is_ok());
        }

        #[test]
        fn invalid_user_agent_is_a_build_error() {
            let err = ReqwestTransport::builder()
                .user_agent("bad\nagent")
                .build()
                .unwrap_err();
            assert!(matches!(err, TransportError::Build(_)));
        }

        #[tokio::test]
        async fn unreachable_host_is_a_transport_error() {
            let transport = ReqwestTransport::new();
            let request = crate::client::build_get("http://127.0.0.1:9/unreachable", &[]);
            let err = transport.send(request).await.unwrap_err();
            assert!(matches!(
                err,
                TransportError::Connection(_) | TransportError::Other(_)
            ));
        }
    }
}
