//! HTTP transport for the DigitalOcean API.
//!
//! A thin wrapper over [`reqwest`] that joins relative paths onto the API
//! base URL, attaches the bearer token, and decides once — at this boundary —
//! whether a response is a payload or the provider's `{id, message}` error
//! envelope. Resource operations never re-detect errors ad hoc.

use crate::config::Settings;
use crate::error::{Error, Result};
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("fulla/", env!("CARGO_PKG_VERSION"));

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT: u64 = 30;

/// The provider's error envelope, returned in place of a payload on failure.
#[derive(Debug, Clone, Deserialize)]
struct ApiErrorEnvelope {
    id: String,
    message: String,
}

/// Builder for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ApiClientBuilder {
    base_url: String,
    token: Option<SecretString>,
    timeout: Duration,
}

impl ApiClientBuilder {
    /// Create a builder for the specified base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT),
        }
    }

    /// Configure the bearer token.
    #[must_use]
    pub fn with_token(mut self, token: SecretString) -> Self {
        self.token = Some(token);
        self
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] if the base URL does not parse and
    /// [`Error::Transport`] if the underlying HTTP client cannot be built.
    pub fn build(self) -> Result<ApiClient> {
        let base_url = Url::parse(&self.base_url)?;
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .build()
            .map_err(|err| Error::Transport(err.to_string()))?;

        Ok(ApiClient {
            http,
            base_url,
            token: self.token,
        })
    }
}

/// Asynchronous DigitalOcean API transport.
///
/// One request in flight per call; the inner [`reqwest::Client`] reuses
/// connections across calls within a process.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<SecretString>,
}

impl ApiClient {
    /// Construct a client from loaded [`Settings`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingToken`] when the settings hold no token.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let token = settings.bearer_token()?.clone();
        ApiClientBuilder::new(settings.api_base_url())
            .with_token(token)
            .build()
    }

    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue a GET and parse the JSON response body.
    pub async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.join(path)?;
        tracing::debug!(%url, "GET");

        let response = self.authorized(self.http.get(url)).send().await?;
        Self::decode(response).await
    }

    /// Issue a POST with a JSON body and parse the JSON response body.
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.join(path)?;
        tracing::debug!(%url, "POST");

        let response = self
            .authorized(self.http.post(url))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Issue a DELETE. Success responses carry no payload worth inspecting.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = self.join(path)?;
        tracing::debug!(%url, "DELETE");

        let response = self.authorized(self.http.delete(url)).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        Err(error_from_response(status, response.text().await?))
    }

    fn join(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(Error::from)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    async fn decode<T>(response: reqwest::Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(error_from_response(status, body));
        }

        serde_json::from_str(&body)
            .map_err(|err| Error::Decode(format!("invalid JSON body: {err}")))
    }
}

/// Map a non-success response onto the error taxonomy.
///
/// DigitalOcean reports failures as `{"id": ..., "message": ...}`; anything
/// that does not match that shape becomes a transport error.
fn error_from_response(status: StatusCode, body: String) -> Error {
    match serde_json::from_str::<ApiErrorEnvelope>(&body) {
        Ok(envelope) => {
            tracing::warn!(id = %envelope.id, message = %envelope.message, "API error");
            Error::Api {
                id: envelope.id,
                message: envelope.message,
            }
        }
        Err(_) => Error::Transport(format!("HTTP {status}: {body}")),
    }
}
