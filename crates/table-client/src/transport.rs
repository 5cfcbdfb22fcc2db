//! Request Transport
//!
//! The seam between task operations and the network. `HttpTransport`
//! talks to the real service; tests plug in a recording transport.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde_json::Value;

use crate::config::TableConfig;
use crate::error::{ClientError, ClientResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
    Patch,
    Delete,
}

impl Method {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One call against the table, path relative to the configured base URL
#[derive(Debug, Clone, PartialEq)]
pub struct TableRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl TableRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Sends a request and returns the decoded JSON body.
///
/// An empty success body yields `Value::Null`. Futures are not `Send`,
/// they run on the browser event loop.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: TableRequest) -> ClientResult<Value>;
}

/// reqwest-backed transport. JSON content type, no retries, no timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    config: TableConfig,
}

impl HttpTransport {
    pub fn new(config: TableConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: TableRequest) -> ClientResult<Value> {
        let url = self.config.url(&request.path);
        let mut builder = self
            .http
            .request(request.method.as_reqwest(), &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        decode_response(status, text)
    }
}

/// Map a finished response onto the envelope value.
///
/// Non-success status is a server error carrying the body; an empty
/// success body is `Null`.
pub(crate) fn decode_response(status: StatusCode, text: String) -> ClientResult<Value> {
    if !status.is_success() {
        return Err(ClientError::Server {
            status: status.as_u16(),
            body: text,
        });
    }
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text)?)
}
