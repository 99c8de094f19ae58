//! Configuration types for the Airtable API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK and address a specific base and table.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`AirtableConfig`]: The main configuration struct holding all SDK settings
//! - [`AirtableConfigBuilder`]: A builder for constructing [`AirtableConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`BaseId`]: A validated base ID newtype
//! - [`TableId`]: A validated table ID or name newtype
//!
//! # Example
//!
//! ```rust
//! use airtable_api::{AirtableConfig, ApiKey, BaseId, TableId};
//!
//! let config = AirtableConfig::builder()
//!     .api_key(ApiKey::new("pat-my-token").unwrap())
//!     .base_id(BaseId::new("app1234567890").unwrap())
//!     .table_id(TableId::new("tbl1234567890").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_url(), "https://api.airtable.com/v0");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseId, TableId};

use std::time::Duration;

use crate::clients::RetryPolicy;
use crate::error::ConfigError;

/// Default Airtable REST endpoint.
pub const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";

/// Default pause between consecutive batch or page requests.
///
/// Airtable enforces a per-base rate limit of 5 requests per second; a
/// 500 ms pause between the requests of a single bulk operation keeps one
/// logical call comfortably under it.
pub const DEFAULT_REQUEST_INTERVAL: Duration = Duration::from_millis(500);

/// Configuration for the Airtable API SDK.
///
/// This struct holds all configuration needed for SDK operations: the API
/// credential, the base/table coordinates every request targets, the API
/// endpoint, and the pacing/retry behavior for bulk operations.
///
/// # Thread Safety
///
/// `AirtableConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use airtable_api::{AirtableConfig, ApiKey, BaseId, TableId};
///
/// let config = AirtableConfig::builder()
///     .api_key(ApiKey::new("pat-my-token").unwrap())
///     .base_id(BaseId::new("app1234567890").unwrap())
///     .table_id(TableId::new("Projects").unwrap())
///     .request_interval(Duration::from_millis(250))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct AirtableConfig {
    api_key: ApiKey,
    base_id: BaseId,
    table_id: TableId,
    api_url: String,
    request_interval: Duration,
    retry: RetryPolicy,
}

impl AirtableConfig {
    /// Creates a new builder for constructing an `AirtableConfig`.
    #[must_use]
    pub fn builder() -> AirtableConfigBuilder {
        AirtableConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the base ID.
    #[must_use]
    pub const fn base_id(&self) -> &BaseId {
        &self.base_id
    }

    /// Returns the table ID or name.
    #[must_use]
    pub const fn table_id(&self) -> &TableId {
        &self.table_id
    }

    /// Returns the API endpoint URL (without a trailing slash).
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the pause inserted between consecutive batch or page requests.
    #[must_use]
    pub const fn request_interval(&self) -> Duration {
        self.request_interval
    }

    /// Returns the retry policy applied to batch requests.
    #[must_use]
    pub const fn retry(&self) -> &RetryPolicy {
        &self.retry
    }
}

/// Builder for constructing [`AirtableConfig`] instances.
///
/// Required fields are `api_key`, `base_id`, and `table_id`; [`build`](Self::build)
/// fails with [`ConfigError::MissingRequiredField`] when any is unset.
#[derive(Debug, Default)]
pub struct AirtableConfigBuilder {
    api_key: Option<ApiKey>,
    base_id: Option<BaseId>,
    table_id: Option<TableId>,
    api_url: Option<String>,
    request_interval: Option<Duration>,
    retry: Option<RetryPolicy>,
}

impl AirtableConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets the base ID (required).
    #[must_use]
    pub fn base_id(mut self, base_id: BaseId) -> Self {
        self.base_id = Some(base_id);
        self
    }

    /// Sets the table ID or name (required).
    #[must_use]
    pub fn table_id(mut self, table_id: TableId) -> Self {
        self.table_id = Some(table_id);
        self
    }

    /// Overrides the API endpoint URL.
    ///
    /// Defaults to [`DEFAULT_API_URL`]. A trailing slash is trimmed so the
    /// request path can always be appended as `/{baseId}/{tableId}`.
    #[must_use]
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Overrides the pause between consecutive batch or page requests.
    ///
    /// Defaults to [`DEFAULT_REQUEST_INTERVAL`].
    #[must_use]
    pub const fn request_interval(mut self, interval: Duration) -> Self {
        self.request_interval = Some(interval);
        self
    }

    /// Overrides the retry policy applied to batch requests.
    ///
    /// Defaults to [`RetryPolicy::default`], which retries a failed batch
    /// request once after a 20-second backoff when the failure was a
    /// network-level error. Use [`RetryPolicy::none`] to disable retries.
    #[must_use]
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Builds the [`AirtableConfig`], validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key`, `base_id`,
    /// or `table_id` was not set, or [`ConfigError::InvalidApiUrl`] if the
    /// endpoint override has no scheme.
    pub fn build(self) -> Result<AirtableConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let base_id = self
            .base_id
            .ok_or(ConfigError::MissingRequiredField { field: "base_id" })?;
        let table_id = self
            .table_id
            .ok_or(ConfigError::MissingRequiredField { field: "table_id" })?;

        let api_url = match self.api_url {
            Some(url) => {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(ConfigError::InvalidApiUrl { url });
                }
                url.trim_end_matches('/').to_string()
            }
            None => DEFAULT_API_URL.to_string(),
        };

        Ok(AirtableConfig {
            api_key,
            base_id,
            table_id,
            api_url,
            request_interval: self.request_interval.unwrap_or(DEFAULT_REQUEST_INTERVAL),
            retry: self.retry.unwrap_or_default(),
        })
    }
}

// Verify AirtableConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AirtableConfig>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn builder_with_required() -> AirtableConfigBuilder {
        AirtableConfig::builder()
            .api_key(ApiKey::new("pat-token").unwrap())
            .base_id(BaseId::new("app123").unwrap())
            .table_id(TableId::new("tbl456").unwrap())
    }

    #[test]
    fn test_build_with_defaults() {
        let config = builder_with_required().build().unwrap();

        assert_eq!(config.api_url(), DEFAULT_API_URL);
        assert_eq!(config.request_interval(), DEFAULT_REQUEST_INTERVAL);
        assert_eq!(config.api_key().as_ref(), "pat-token");
        assert_eq!(config.base_id().as_ref(), "app123");
        assert_eq!(config.table_id().as_ref(), "tbl456");
    }

    #[test]
    fn test_build_requires_api_key() {
        let result = AirtableConfig::builder()
            .base_id(BaseId::new("app123").unwrap())
            .table_id(TableId::new("tbl456").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_build_requires_base_id() {
        let result = AirtableConfig::builder()
            .api_key(ApiKey::new("pat-token").unwrap())
            .table_id(TableId::new("tbl456").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "base_id" })
        ));
    }

    #[test]
    fn test_build_requires_table_id() {
        let result = AirtableConfig::builder()
            .api_key(ApiKey::new("pat-token").unwrap())
            .base_id(BaseId::new("app123").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "table_id" })
        ));
    }

    #[test]
    fn test_api_url_trailing_slash_is_trimmed() {
        let config = builder_with_required()
            .api_url("https://example.com/v0/")
            .build()
            .unwrap();

        assert_eq!(config.api_url(), "https://example.com/v0");
    }

    #[test]
    fn test_api_url_without_scheme_is_rejected() {
        let result = builder_with_required().api_url("api.airtable.com").build();

        assert!(matches!(result, Err(ConfigError::InvalidApiUrl { .. })));
    }

    #[test]
    fn test_request_interval_override() {
        let config = builder_with_required()
            .request_interval(Duration::from_millis(10))
            .build()
            .unwrap();

        assert_eq!(config.request_interval(), Duration::from_millis(10));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AirtableConfig>();
    }
}
