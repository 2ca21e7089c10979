//! HTTP transport
//!
//! The client talks to the API through [`HttpTransport`] so that tests and proxies can
//! replace the network layer. [`ReqwestTransport`] is the production implementation.
//!
//! # design principles
//! - **The transport knows nothing about XML** - it only moves a form body and returns status + text
//! - **No retries here** - retrying is the job of the client's retry coordinator
//! - **Request bodies are never logged** - they carry the API key

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::error::{ClientError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// 默认连接超时（秒）
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Raw HTTP answer: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends a form-encoded POST and returns the raw answer.
///
/// Implementations map connection problems to [`ClientError::Network`] and
/// timeouts to [`ClientError::Timeout`]. Any HTTP status is a successful transport
/// result; status interpretation belongs to the caller.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_form(&self, url: &str, body: String) -> Result<TransportResponse>;
}

/// [`HttpTransport`] backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with the default 10s connect / 30s request timeouts.
    pub fn new() -> Result<Self> {
        Self::with_timeouts(
            Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    pub fn with_timeouts(connect_timeout: Duration, request_timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| ClientError::Network {
                detail: format!("Failed to create HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }

    /// Wraps an already configured client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_form(&self, url: &str, body: String) -> Result<TransportResponse> {
        log::debug!("[namecheap] POST {url}");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status().as_u16();
        log::debug!("[namecheap] Response Status: {status}");

        let text = response.text().await.map_err(|e| ClientError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!("[namecheap] Response Body: {}", truncate_for_log(&text));

        Ok(TransportResponse { status, body: text })
    }
}

fn map_send_error(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout {
            detail: e.to_string(),
        }
    } else {
        ClientError::Network {
            detail: e.to_string(),
        }
    }
}
