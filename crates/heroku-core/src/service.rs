//! Request dispatcher.
//!
//! [`Service`] turns a verb, a path and a [`Body`] into an HTTP request,
//! sends it through its [`Transport`] and hands the response body to a
//! [`Decode`] target. Every resource method in the API crate is a thin
//! call into [`Service::dispatch`] or one of its verb shims.

use crate::body::{Body, JSON_CONTENT_TYPE};
use crate::client::{default_transport, Transport};
use crate::config::{ServiceConfig, StatusPolicy};
use crate::decode::Decode;
use crate::range::ListRange;
use crate::{Error, Result};
use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, Request};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};
use url::Url;

/// Builder for [`Service`].
pub struct ServiceBuilder {
    config: ServiceConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl ServiceBuilder {
    /// Create a builder from a configuration.
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            transport: None,
        }
    }

    /// Use a custom transport instead of the default client.
    #[must_use]
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Use a shared transport instead of the default client.
    #[must_use]
    pub fn with_shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use a preconfigured `reqwest` client.
    ///
    /// Credentials, proxies and timeouts set on the client apply to every call.
    #[must_use]
    pub fn with_http_client(self, client: reqwest::Client) -> Self {
        self.with_transport(client)
    }

    /// Build the service.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid or the
    /// default transport cannot be built.
    pub fn build(self) -> Result<Service> {
        validator::Validate::validate(&self.config)?;
        let base_url = self.config.parse_base_url()?;

        let user_agent = HeaderValue::from_str(&self.config.user_agent)
            .map_err(|err| Error::Config(format!("Invalid user agent: {err}")))?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(default_transport(&self.config)?) as Arc<dyn Transport>,
        };

        Ok(Service {
            transport,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            user_agent,
            status_policy: self.config.status_policy,
        })
    }
}

/// Dispatcher for Heroku Platform API calls.
///
/// Holds no mutable state; clones share the same transport and concurrent
/// calls are independent of each other.
#[derive(Clone)]
pub struct Service {
    transport: Arc<dyn Transport>,
    base_url: String,
    user_agent: HeaderValue,
    status_policy: StatusPolicy,
}

impl fmt::Debug for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Service")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("status_policy", &self.status_policy)
            .finish_non_exhaustive()
    }
}

impl Service {
    /// Create a service for the production API with the default transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the default transport cannot be built.
    pub fn new() -> Result<Self> {
        Self::builder(ServiceConfig::default()).build()
    }

    /// Create a service for the production API using the given transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the default configuration is rejected.
    pub fn with_transport(transport: impl Transport + 'static) -> Result<Self> {
        Self::builder(ServiceConfig::default())
            .with_transport(transport)
            .build()
    }

    /// Start a builder from a configuration.
    #[must_use]
    pub fn builder(config: ServiceConfig) -> ServiceBuilder {
        ServiceBuilder::new(config)
    }

    /// Origin every request path is appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Status handling in effect.
    #[must_use]
    pub const fn status_policy(&self) -> StatusPolicy {
        self.status_policy
    }

    /// Build a request without sending it.
    ///
    /// Sets `Accept` and `User-Agent` on every request, and `Content-Type`
    /// only for JSON bodies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if base URL and path do not form a
    /// valid URL, or [`Error::Encode`] if the body cannot be serialized.
    pub fn new_request(&self, method: Method, path: &str, body: Body) -> Result<Request> {
        let url = Url::parse(&format!("{}{path}", self.base_url))
            .map_err(|err| Error::InvalidRequest(format!("Invalid path `{path}`: {err}")))?;
        let payload = body.into_payload()?;

        let mut request = Request::new(method, url);
        let content_type = payload.and_then(|(payload, content_type)| {
            *request.body_mut() = Some(payload);
            content_type
        });

        let headers = request.headers_mut();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(USER_AGENT, self.user_agent.clone());
        if let Some(content_type) = content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }

        Ok(request)
    }

    /// Send one request and hand the response body to `decode`.
    ///
    /// Under [`StatusPolicy::Passthrough`] the status code is not inspected:
    /// an error payload is decoded into the target like any other body.
    ///
    /// # Errors
    ///
    /// Returns request construction and encoding errors before anything is
    /// sent, transport errors as reported by the transport, and decode errors
    /// after the body has been read to the end.
    pub async fn dispatch(
        &self,
        decode: Decode<'_>,
        method: Method,
        path: &str,
        body: Body,
        range: Option<&ListRange>,
    ) -> Result<()> {
        debug!(method = %method, path, "dispatching request");

        let mut request = self.new_request(method, path, body)?;
        if let Some(range) = range {
            range.apply(&mut request)?;
            trace!(range = %range, "range header set");
        }

        let response = self.transport.execute(request).await?;
        let status = response.status();
        debug!(status = status.as_u16(), path, "response received");

        if self.status_policy.is_strict() && !status.is_success() {
            let raw = response.bytes().await?;
            return Err(Error::from_api_body(status.as_u16(), &raw));
        }

        decode.apply(response).await
    }

    /// `GET` a path.
    ///
    /// # Errors
    ///
    /// See [`Service::dispatch`].
    pub async fn get(
        &self,
        decode: Decode<'_>,
        path: &str,
        range: Option<&ListRange>,
    ) -> Result<()> {
        self.dispatch(decode, Method::GET, path, Body::Absent, range)
            .await
    }

    /// `PATCH` a path.
    ///
    /// # Errors
    ///
    /// See [`Service::dispatch`].
    pub async fn patch(&self, decode: Decode<'_>, path: &str, body: Body) -> Result<()> {
        self.dispatch(decode, Method::PATCH, path, body, None).await
    }

    /// `POST` to a path.
    ///
    /// # Errors
    ///
    /// See [`Service::dispatch`].
    pub async fn post(&self, decode: Decode<'_>, path: &str, body: Body) -> Result<()> {
        self.dispatch(decode, Method::POST, path, body, None).await
    }

    /// `PUT` to a path.
    ///
    /// # Errors
    ///
    /// See [`Service::dispatch`].
    pub async fn put(&self, decode: Decode<'_>, path: &str, body: Body) -> Result<()> {
        self.dispatch(decode, Method::PUT, path, body, None).await
    }

    /// `DELETE` a path, sending no body and discarding the response.
    ///
    /// # Errors
    ///
    /// See [`Service::dispatch`].
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.dispatch(Decode::Discard, Method::DELETE, path, Body::Absent, None)
            .await
    }

    /// `GET` a path and decode the response into a fresh `T`.
    ///
    /// # Errors
    ///
    /// See [`Service::dispatch`].
    pub async fn get_json<T>(&self, path: &str, range: Option<&ListRange>) -> Result<T>
    where
        T: DeserializeOwned + Default + Send,
    {
        let mut value = T::default();
        self.get(Decode::Json(&mut value), path, range).await?;
        Ok(value)
    }

    /// `PATCH` a JSON body and decode the response into a fresh `T`.
    ///
    /// # Errors
    ///
    /// See [`Service::dispatch`].
    pub async fn patch_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Default + Send,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::PATCH, path, body).await
    }

    /// `POST` a JSON body and decode the response into a fresh `T`.
    ///
    /// # Errors
    ///
    /// See [`Service::dispatch`].
    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Default + Send,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::POST, path, body).await
    }

    /// `PUT` a JSON body and decode the response into a fresh `T`.
    ///
    /// # Errors
    ///
    /// See [`Service::dispatch`].
    pub async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Default + Send,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::PUT, path, body).await
    }

    async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Default + Send,
        B: Serialize + ?Sized,
    {
        let body = Body::json(body)?;
        let mut value = T::default();
        self.dispatch(Decode::Json(&mut value), method, path, body, None)
            .await?;
        Ok(value)
    }
}
