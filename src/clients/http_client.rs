//! HTTP transport adapter for Airtable API communication.
//!
//! This module provides the [`HttpClient`] type: the single place in the SDK
//! that performs network round trips. It buffers and parses each response
//! into an [`HttpResponse`] envelope without interpreting the status code;
//! that is the validator's job (see [`HttpResponse::validate`]).

use std::time::Duration;

use serde_json::Value;

use crate::clients::errors::RequestError;
use crate::clients::http_response::HttpResponse;
use crate::config::AirtableConfig;

/// Fixed per-request timeout (300 seconds).
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP methods used by the Airtable record endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and list queries.
    Post,
    /// HTTP PUT method for full-overwrite updates.
    Put,
    /// HTTP PATCH method for partial-field updates.
    Patch,
    /// HTTP DELETE method for removing records.
    Delete,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Patch => write!(f, "PATCH"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// HTTP transport adapter for the Airtable API.
///
/// The client handles:
/// - Bearer-token authorization and JSON content-type headers
/// - A User-Agent header identifying the SDK and Rust version
/// - JSON body serialization
/// - A fixed 300-second request timeout
/// - Buffering and parsing the full response body
///
/// Non-2xx statuses are **not** errors at this layer: every received
/// response becomes an [`HttpResponse`] envelope. Only transport failures
/// (DNS, refused connection, timeout) and unparseable bodies fail.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// API endpoint (e.g. `https://api.airtable.com/v0`), no trailing slash.
    api_url: String,
    /// Bearer credential forwarded on every request.
    api_key: String,
    /// User-Agent header value sent with every request.
    user_agent: String,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new transport adapter from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &AirtableConfig) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        // Build User-Agent header
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("Airtable API Library v{SDK_VERSION} | Rust {rust_version}");

        Self {
            client,
            api_url: config.api_url().to_string(),
            api_key: config.api_key().as_ref().to_string(),
            user_agent,
        }
    }

    /// Returns the API endpoint URL for this client.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the User-Agent header value sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Performs exactly one network round trip.
    ///
    /// Sets `Content-Type: application/json`, the SDK `User-Agent`, and
    /// `Authorization: Bearer …`,
    /// serializes `body` as JSON when present, then buffers the full
    /// response body and parses it as JSON. The status code is returned
    /// inside the envelope even for non-2xx responses.
    ///
    /// # Errors
    ///
    /// - [`RequestError::Network`] if the request never produced a response
    ///   (DNS failure, refused connection, timeout)
    /// - [`RequestError::MalformedResponse`] if a body was received but is
    ///   not valid JSON; the raw body is kept for diagnostics
    pub async fn send(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<&Value>,
    ) -> Result<HttpResponse, RequestError> {
        tracing::debug!(%method, url, "sending request");

        let mut req_builder = match method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
            HttpMethod::Patch => self.client.patch(url),
            HttpMethod::Delete => self.client.delete(url),
        };

        req_builder = req_builder
            .header("Content-Type", "application/json")
            .header("User-Agent", &self.user_agent)
            .header("Authorization", format!("Bearer {}", self.api_key));

        if let Some(body) = body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let status_text = res
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string();
        let raw = res.text().await?;

        let body = serde_json::from_str(&raw)
            .map_err(|_| RequestError::MalformedResponse { raw })?;

        Ok(HttpResponse::new(code, status_text, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AirtableConfig, ApiKey, BaseId, TableId};

    fn create_test_config() -> AirtableConfig {
        AirtableConfig::builder()
            .api_key(ApiKey::new("pat-token").unwrap())
            .base_id(BaseId::new("app123").unwrap())
            .table_id(TableId::new("tbl456").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_uses_config_api_url() {
        let client = HttpClient::new(&create_test_config());
        assert_eq!(client.api_url(), "https://api.airtable.com/v0");
    }

    #[test]
    fn test_http_method_display_matches_wire_verbs() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_user_agent_identifies_sdk_and_rust_version() {
        let client = HttpClient::new(&create_test_config());
        let user_agent = client.user_agent();
        assert!(user_agent.contains("Airtable API Library v"));
        assert!(user_agent.contains(SDK_VERSION));
        assert!(user_agent.contains("Rust "));
    }

    #[test]
    fn test_request_timeout_is_300_seconds() {
        assert_eq!(REQUEST_TIMEOUT, Duration::from_secs(300));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        let config = AirtableConfig::builder()
            .api_key(ApiKey::new("pat-token").unwrap())
            .base_id(BaseId::new("app123").unwrap())
            .table_id(TableId::new("tbl456").unwrap())
            // Port 1 on loopback: nothing listens there.
            .api_url("http://127.0.0.1:1/v0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        let result = client
            .send(HttpMethod::Get, "http://127.0.0.1:1/v0/app123/tbl456/rec1", None)
            .await;

        assert!(matches!(result, Err(RequestError::Network(_))));
    }
}
