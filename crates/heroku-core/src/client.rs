//! HTTP transport seam.
//!
//! The dispatcher never talks to the network directly: it hands a fully
//! built [`reqwest::Request`] to a [`Transport`] and reads whatever
//! response comes back. [`reqwest::Client`] is the standard transport.

use crate::config::ServiceConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, ClientBuilder, Request, Response};
use secrecy::ExposeSecret;
use std::time::Duration;
use tracing::debug;

/// Connect timeout used by the default transport.
pub const DEFAULT_CONNECT_TIMEOUT: u64 = 10;

/// Executes HTTP requests on behalf of the dispatcher.
///
/// Implementations are shared by every call made through a
/// [`Service`](crate::Service), possibly from several tasks at once, so they
/// must be safe for concurrent use. Timeouts, credentials and connection
/// reuse are the transport's business.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and return the response with its body unread.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained.
    async fn execute(&self, request: Request) -> Result<Response>;
}

#[async_trait]
impl Transport for Client {
    async fn execute(&self, request: Request) -> Result<Response> {
        Client::execute(self, request).await.map_err(Error::from)
    }
}

/// Build the standard transport from a configuration.
///
/// The configured timeout is applied to the whole round trip and, when a
/// token is present, it is attached as a sensitive `Authorization` header.
///
/// # Errors
///
/// Returns [`Error::Config`] if the token is not a valid header value or the
/// underlying client cannot be built.
pub fn default_transport(config: &ServiceConfig) -> Result<Client> {
    let mut builder = ClientBuilder::new()
        .timeout(config.timeout())
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT));

    if let Some(token) = &config.api_token {
        debug!("attaching bearer token to default transport");
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|err| Error::Config(format!("Invalid API token: {err}")))?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        builder = builder.default_headers(headers);
    }

    builder
        .build()
        .map_err(|err| Error::Config(format!("Failed to build HTTP client: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_default_transport_builds() {
        let config = ServiceConfig::default();
        assert!(default_transport(&config).is_ok());
    }

    #[test]
    fn test_default_transport_rejects_bad_token() {
        let config = ServiceConfig::default().with_api_token("line\nbreak");
        let err = default_transport(&config).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[tokio::test]
    async fn test_default_transport_attaches_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/account"))
            .and(header("authorization", "Bearer hrku-abc"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let config = ServiceConfig::new(server.uri())
            .unwrap()
            .with_api_token("hrku-abc");
        let client = default_transport(&config).unwrap();
        let url = format!("{}/account", server.uri()).parse().unwrap();
        let request = Request::new(reqwest::Method::GET, url);

        let response = Transport::execute(&client, request).await.unwrap();
        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Bind then drop to get a port with no listener.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = default_transport(&ServiceConfig::default()).unwrap();
        let url = format!("http://{addr}/apps").parse().unwrap();
        let err = Transport::execute(&client, Request::new(reqwest::Method::GET, url))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }
}
