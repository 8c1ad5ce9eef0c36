//! HTTP transport for the Blinko API.
//!
//! One authenticated client per invocation. Requests are JSON in, JSON out;
//! any non-success status becomes [`BlinkoError::Api`] with the best message
//! we can pull out of the body. There are no retries.

use std::time::Duration;

use reqwest::{Client, ClientBuilder, Method, StatusCode, Url, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{BlinkoError, Result};
use crate::storage::config::Config;

/// Default timeout for HTTP requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Prefix every endpoint path is mounted under.
const API_PREFIX: &str = "/api";

/// Build a configured HTTP client.
///
/// # Errors
///
/// Returns error if client construction fails.
pub fn build_client(timeout: Duration) -> Result<Client> {
    ClientBuilder::new()
        .timeout(timeout)
        .user_agent(format!("blinko-cli/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| BlinkoError::Network(e.to_string()))
}

/// Authenticated client bound to one Blinko server.
#[derive(Debug, Clone)]
pub struct BlinkoClient {
    http: Client,
    base_url: String,
    token: String,
    timeout: Duration,
}

impl BlinkoClient {
    /// Create a client for `server_url`, authenticating with `token`.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be built.
    pub fn new(server_url: &str, token: &str, timeout: Duration) -> Result<Self> {
        let base_url = format!("{}{API_PREFIX}", server_url.trim_end_matches('/'));
        Url::parse(&base_url).map_err(|e| BlinkoError::ConfigInvalid {
            key: "server_url".to_string(),
            value: server_url.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            http: build_client(timeout)?,
            base_url,
            token: token.to_string(),
            timeout,
        })
    }

    /// Create a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.server_url, &config.token, config.timeout)
    }

    /// Full URL for an endpoint path such as `/v1/note/list`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let mut url =
            Url::parse(&self.url(path)).map_err(|e| BlinkoError::Network(e.to_string()))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Send a request and return the decoded JSON body.
    ///
    /// An empty body decodes to `Value::Null`; a body that is not JSON is
    /// returned as `Value::String`. Query pairs are appended in order.
    ///
    /// # Errors
    ///
    /// Returns [`BlinkoError::Api`] for non-success statuses,
    /// [`BlinkoError::Timeout`] or [`BlinkoError::Network`] for transport
    /// failures.
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: &[(&str, String)],
    ) -> Result<Value> {
        let url = self.endpoint(path, query)?;
        tracing::debug!(%method, %url, has_body = body.is_some(), "Sending request");

        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| self.transport_error(&e))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.transport_error(&e))?;
        tracing::debug!(%method, %url, status = status.as_u16(), bytes = text.len(), "Response received");

        let payload = decode_body(&text);
        if !status.is_success() {
            return Err(api_error(status, &payload));
        }
        Ok(payload)
    }

    /// Send a request and deserialize the body into `T`.
    ///
    /// # Errors
    ///
    /// As [`Self::send`], plus [`BlinkoError::ParseResponse`] when the body
    /// does not match `T`.
    pub async fn send_as<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: &[(&str, String)],
    ) -> Result<T> {
        let payload = self.send(method, path, body, query).await?;
        serde_json::from_value(payload).map_err(|e| BlinkoError::ParseResponse(e.to_string()))
    }

    fn transport_error(&self, err: &reqwest::Error) -> BlinkoError {
        if err.is_timeout() {
            BlinkoError::Timeout(self.timeout.as_secs())
        } else {
            BlinkoError::Network(err.to_string())
        }
    }
}

/// Decode a response body: empty is null, invalid JSON is kept as text.
fn decode_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Best-effort message from an error body.
fn error_message(payload: &Value) -> String {
    match payload {
        Value::String(s) => s.clone(),
        Value::Object(map) => match map.get("message") {
            Some(Value::String(msg)) if !msg.is_empty() => msg.clone(),
            _ => payload.to_string(),
        },
        other => other.to_string(),
    }
}

fn api_error(status: StatusCode, payload: &Value) -> BlinkoError {
    BlinkoError::Api {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("").to_string(),
        message: error_message(payload),
    }
}
