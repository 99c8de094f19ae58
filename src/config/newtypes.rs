//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Airtable API key (personal access token).
///
/// This newtype ensures the key is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `ApiKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use airtable_api::ApiKey;
///
/// let key = ApiKey::new("pat-my-token").unwrap();
/// assert_eq!(key.as_ref(), "pat-my-token");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated Airtable base ID.
///
/// Bases are addressed by an opaque ID (e.g. `appXXXXXXXXXXXXXX`). The SDK
/// never interprets the value; it only requires it to be non-empty.
///
/// # Example
///
/// ```rust
/// use airtable_api::BaseId;
///
/// let base = BaseId::new("app1234567890").unwrap();
/// assert_eq!(base.as_ref(), "app1234567890");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseId(String);

impl BaseId {
    /// Creates a new validated base ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBaseId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyBaseId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for BaseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated Airtable table ID or name.
///
/// Tables can be addressed either by their opaque ID (`tblXXXXXXXXXXXXXX`)
/// or by their display name. Both are forwarded verbatim in request paths.
///
/// # Example
///
/// ```rust
/// use airtable_api::TableId;
///
/// let by_id = TableId::new("tbl1234567890").unwrap();
/// let by_name = TableId::new("Projects").unwrap();
/// assert_eq!(by_name.as_ref(), "Projects");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableId(String);

impl TableId {
    /// Creates a new validated table ID or name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyTableId`] if the value is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyTableId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for TableId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_accepts_non_empty_value() {
        let key = ApiKey::new("pat-token").unwrap();
        assert_eq!(key.as_ref(), "pat-token");
    }

    #[test]
    fn test_api_key_rejects_empty_value() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_debug_output_is_masked() {
        let key = ApiKey::new("super-secret-token").unwrap();
        let debug = format!("{key:?}");
        assert_eq!(debug, "ApiKey(*****)");
        assert!(!debug.contains("super-secret-token"));
    }

    #[test]
    fn test_base_id_accepts_non_empty_value() {
        let base = BaseId::new("appABC").unwrap();
        assert_eq!(base.as_ref(), "appABC");
        assert_eq!(base.to_string(), "appABC");
    }

    #[test]
    fn test_base_id_rejects_empty_value() {
        assert!(matches!(BaseId::new(""), Err(ConfigError::EmptyBaseId)));
    }

    #[test]
    fn test_table_id_accepts_id_or_name() {
        assert_eq!(TableId::new("tblABC").unwrap().as_ref(), "tblABC");
        assert_eq!(TableId::new("My Table").unwrap().as_ref(), "My Table");
    }

    #[test]
    fn test_table_id_rejects_empty_value() {
        assert!(matches!(TableId::new(""), Err(ConfigError::EmptyTableId)));
    }
}
