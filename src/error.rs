//! Error types for SDK configuration.
//!
//! This module contains the error type returned by configuration
//! constructors and the [`crate::AirtableConfig`] builder.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use airtable_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key is not set. Please provide a valid Airtable API key.")]
    EmptyApiKey,

    /// Base ID cannot be empty.
    #[error("Base ID is not set. Please provide a valid Airtable base ID.")]
    EmptyBaseId,

    /// Table ID or name cannot be empty.
    #[error("Table ID/Name is not set. Please provide a valid Airtable table ID or name.")]
    EmptyTableId,

    /// API URL is invalid.
    #[error("Invalid API URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.airtable.com/v0').")]
    InvalidApiUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
