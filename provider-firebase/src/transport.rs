//! HTTP transport seam
//!
//! A minimal request/response abstraction so the connector can be exercised
//! in tests without a network. Production code uses [`ReqwestTransport`].

use crate::error::{FirebaseStorageError, Result};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// HTTP method subset the connector needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Patch,
}

/// A single outgoing request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Bytes>,
}

/// The response as the connector sees it.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport the connector issues requests through.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute one request and return the response, however the server
    /// answered. Only transport-level failures (connect, timeout) are errors.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Reqwest-backed production transport with connection pooling and a
/// 30-second request timeout.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(30))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("metasync/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FirebaseStorageError::NetworkError(e.to_string()))?;

        Ok(Self { client })
    }

    fn convert_method(method: HttpMethod) -> reqwest::Method {
        match method {
            HttpMethod::Patch => reqwest::Method::PATCH,
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut req = self
            .client
            .request(Self::convert_method(request.method), &request.url);

        for (key, value) in request.headers {
            req = req.header(key, value);
        }

        if let Some(body) = request.body {
            req = req.body(body);
        }

        let response = req
            .send()
            .await
            .map_err(|e| FirebaseStorageError::NetworkError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| FirebaseStorageError::NetworkError(e.to_string()))?;

        debug!(status, "HTTP request completed");
        Ok(HttpResponse { status, body })
    }
}
