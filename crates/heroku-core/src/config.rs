//! Configuration for the request dispatcher.
//!
//! A [`ServiceConfig`] is resolved once when a [`Service`](crate::Service)
//! is built and never changes afterwards.

use crate::Error;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Version segment of the platform API this client speaks.
pub const API_VERSION: &str = "v3";

/// Production origin of the platform API.
pub const DEFAULT_API_URL: &str = "https://api.heroku.com";

/// Default request timeout applied to the default transport, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client identification sent with every request.
///
/// Formatted as `heroku/<version> (<os>; <arch>)`.
#[must_use]
pub fn default_user_agent() -> String {
    format!(
        "heroku/{API_VERSION} ({}; {})",
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// How the dispatcher treats the HTTP status of a response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusPolicy {
    /// Decode every response body into the caller's target, whatever the
    /// status. Callers inspect error payloads themselves.
    #[default]
    Passthrough,
    /// Turn non-success responses into [`Error::Api`].
    Strict,
}

impl StatusPolicy {
    /// Returns true when non-success responses become errors.
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

/// Configuration for a [`Service`](crate::Service) instance.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServiceConfig {
    /// Base origin every request path is appended to
    #[validate(url)]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value of the `User-Agent` header
    #[validate(length(min = 1))]
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds, applied when the default transport is built
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Status handling for responses
    #[serde(default)]
    pub status_policy: StatusPolicy,

    /// Optional API token attached by the default transport
    #[serde(default, skip_serializing)]
    pub api_token: Option<SecretString>,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ServiceConfig {
    /// Create a configuration pointing at the given origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            base_url: base_url.into(),
            ..Self::default()
        };

        config
            .validate()
            .map_err(|e| Error::Config(format!("Invalid configuration: {e}")))?;

        Ok(config)
    }

    /// Set the `User-Agent` value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }

    /// Set the status policy.
    #[must_use]
    pub const fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }

    /// Set the API token sent as a bearer credential by the default transport.
    #[must_use]
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(SecretString::from(token.into()));
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parse the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_base_url(&self) -> Result<Url, Error> {
        Url::parse(&self.base_url).map_err(|e| Error::Config(format!("Invalid base URL: {e}")))
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            status_policy: StatusPolicy::default(),
            api_token: None,
        }
    }
}
