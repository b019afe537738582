//! # Transport: how a request reaches a remote API
//!
//! Clients describe every call as an [`ApiRequest`] and hand it to a
//! [`Transport`]. The response body comes back as raw JSON; decoding into
//! DTOs is the client's job.
//!
//! | Implementation | Used by |
//! |----------------|---------|
//! | [`HttpTransport`] | every platform, over [`reqwest`] |
//! | [`MemoryTransport`] | tests: an in-memory fake of both APIs that records every request |

use std::future::Future;

use serde_json::Value;

use crate::error::ClientError;

mod http;
pub use http::HttpTransport;

mod memory;
pub use memory::MemoryTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// One JSON-over-HTTP call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute URL without query string.
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            ..Self::get(url)
        }
    }

    pub fn send_json(method: Method, url: impl Into<String>, body: Value) -> Self {
        Self {
            method,
            body: Some(body),
            ..Self::get(url)
        }
    }

    /// Builder method to append a query parameter.
    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Look up a query parameter by name.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Async interface for sending requests.
///
/// Returns the decoded JSON body on a 2xx response, `Value::Null` for an
/// empty body.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<Value, ClientError>>;
}
