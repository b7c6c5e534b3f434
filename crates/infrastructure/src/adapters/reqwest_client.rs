//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! It handles all HTTP communication for the application.

use std::error::Error as _;
use std::time::Instant;

use drivetest_application::ports::{HttpClient, HttpClientError, HttpFuture};
use drivetest_domain::{ClientConfig, request::RequestSpec, response::ResponseSpec};
use reqwest::Client;
use tracing::trace;

/// Maximum number of redirects followed per request.
const MAX_REDIRECTS: usize = 10;

/// HTTP client implementation using reqwest.
///
/// Wraps a single `reqwest::Client`, so connections are pooled and reused
/// across calls. Cheap to share behind an `Arc`.
pub struct ReqwestHttpClient {
    client: Client,
    timeout_ms: u64,
}

impl ReqwestHttpClient {
    /// Creates a client configured from `config`.
    ///
    /// - Timeout: `config.timeout_ms`, none if unset
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled unless `config.accept_invalid_certs`
    /// - User-Agent: `config.user_agent`
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, HttpClientError> {
        let mut builder = Client::builder()
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .danger_accept_invalid_certs(config.accept_invalid_certs);

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self {
            client,
            timeout_ms: config.timeout_ms.unwrap_or(0),
        })
    }

    /// Maps reqwest errors to the port's `HttpClientError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout { timeout_ms };
        }

        let host = || {
            error
                .url()
                .and_then(|u| u.host_str())
                .unwrap_or("unknown")
                .to_string()
        };
        let message = error_chain(error);
        let lowered = message.to_lowercase();

        if error.is_connect() {
            if lowered.contains("dns") || lowered.contains("resolve") {
                return HttpClientError::DnsError {
                    host: host(),
                    message,
                };
            }
            if lowered.contains("refused") {
                return HttpClientError::ConnectionRefused {
                    host: host(),
                    port: error
                        .url()
                        .and_then(reqwest::Url::port_or_known_default)
                        .unwrap_or(80),
                };
            }
            if lowered.contains("certificate") || lowered.contains("tls") {
                return HttpClientError::Tls(message);
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::Other(format!("more than {MAX_REDIRECTS} redirects"));
        }

        if error.is_body() || error.is_decode() {
            return HttpClientError::Body(message);
        }

        HttpClientError::Other(message)
    }
}

/// Joins an error and all its sources; reqwest keeps the useful part in the sources.
fn error_chain(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl HttpClient for ReqwestHttpClient {
    fn execute(&self, request: &RequestSpec) -> HttpFuture<'_> {
        let url = request.full_url();
        let timeout_ms = self.timeout_ms;

        Box::pin(async move {
            let url = url.map_err(|e| HttpClientError::InvalidUrl(e.to_string()))?;

            let start = Instant::now();

            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?;

            let status = response.status().as_u16();

            let body = response
                .bytes()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?
                .to_vec();

            let duration = start.elapsed();
            trace!(status, bytes = body.len(), ?duration, "response body read");

            Ok(ResponseSpec::new(status, body, duration))
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use drivetest_domain::request::QueryParams;

    #[test]
    fn test_client_creation() {
        let client = ReqwestHttpClient::new(&ClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_without_timeout() {
        let config = ClientConfig::default()
            .with_timeout_ms(None)
            .with_accept_invalid_certs(true);
        let client = ReqwestHttpClient::new(&config).unwrap();
        assert_eq!(client.timeout_ms, 0);
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Bind then drop to get a port nothing listens on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let config = ClientConfig::new(format!("http://127.0.0.1:{port}"));
        let client = ReqwestHttpClient::new(&config).unwrap();
        let request = RequestSpec {
            url: config
                .endpoint(drivetest_domain::request::Endpoint::Test)
                .unwrap(),
            query: QueryParams::new(),
        };

        let result = client.execute(&request).await;

        match result {
            Err(HttpClientError::ConnectionRefused { host, port: refused }) => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(refused, port);
            }
            other => panic!("expected ConnectionRefused, got {other:?}"),
        }
    }
}
