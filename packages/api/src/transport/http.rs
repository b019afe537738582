use serde_json::Value;

use super::{ApiRequest, Method, Transport};
use crate::config::ApiConfig;
use crate::error::ClientError;

/// [`Transport`] over a shared [`reqwest::Client`].
///
/// Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a client that applies the configured request timeout.
    ///
    /// Browsers do not support a client-side timeout through `fetch`, so on
    /// WASM the timeout is left to the browser.
    pub fn new(config: &ApiConfig) -> Self {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout);
        #[cfg(target_arch = "wasm32")]
        let _ = config;

        let client = builder.build().unwrap_or_else(|e| {
            tracing::warn!("Failed to build HTTP client, using defaults: {e}");
            reqwest::Client::new()
        });
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ClientError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };
        tracing::debug!("{method} {}", request.url);

        let mut builder = self.client.request(method, &request.url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}
