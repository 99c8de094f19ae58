//! Request error types for the Airtable API SDK.
//!
//! This module contains error types for the transport and orchestration
//! layers, distinguishing failures that never reached the server from
//! failures the server reported.
//!
//! # Error Handling
//!
//! The SDK uses specific error types for different failure scenarios:
//!
//! - [`RequestError::Network`]: Transport-level failures (DNS, refused
//!   connection, timeout) where the request never produced a response
//! - [`RequestError::MalformedResponse`]: A response arrived but its body
//!   was not valid JSON
//! - [`RequestError::Api`]: The server answered with a non-200 status
//! - [`RequestError::InvalidRequest`]: Validation failed before any
//!   network call was made
//!
//! # Example
//!
//! ```rust,ignore
//! use airtable_api::RequestError;
//!
//! match client.get_record::<AnyFields>("rec123").await {
//!     Ok(record) => println!("Got {}", record.id),
//!     Err(RequestError::Api { status, message }) => {
//!         println!("API error {status}: {message}");
//!     }
//!     Err(RequestError::Network(e)) => {
//!         println!("Never reached the server: {e}");
//!     }
//!     Err(other) => println!("{other}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request fails validation before being sent.
///
/// These errors are raised synchronously, before any network side effect,
/// so a caller seeing one can be certain the remote state is untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// A bulk mutation was called with an empty or missing record list.
    #[error("The records array is empty or not provided. Please provide a non-empty array of records.")]
    EmptyRecords,

    /// A delete was called with an empty or missing record-id list.
    #[error("The record ids array is empty or not provided. Please provide a non-empty array of record ids to delete the records.")]
    EmptyRecordIds,

    /// An upsert was called without any merge fields.
    #[error("fieldsToMergeOn must be a non-empty array of field names.")]
    MissingFieldsToMergeOn,

    /// `cellFormat: "string"` requires both `timeZone` and `userLocale`.
    #[error("The timeZone and userLocale parameters are required when using string as the cellFormat.")]
    MissingCellFormatParameters,

    /// Type generation was requested for a table the base schema does not contain.
    #[error("Table with name or ID \"{table}\" not found.")]
    UnknownTable {
        /// The table name or ID that was requested.
        table: String,
    },
}

/// Unified error type for all request failures.
///
/// The variants keep "never reached the server" ([`Network`](Self::Network)),
/// "server answered garbage" ([`MalformedResponse`](Self::MalformedResponse)),
/// and "server rejected the request" ([`Api`](Self::Api)) distinct so callers
/// can decide whether a retry is safe.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Network or connection error: the request never produced a response.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A response body was received but could not be parsed as JSON.
    #[error("Failed to parse response as JSON: {raw}")]
    MalformedResponse {
        /// The raw response body, kept for diagnostics.
        raw: String,
    },

    /// The server answered with a non-200 status.
    ///
    /// `message` is either the server-supplied diagnostic (when the error
    /// payload carries one) or the fixed text for the status code.
    #[error("{message}")]
    Api {
        /// The HTTP status code of the response.
        status: u16,
        /// Human-readable description of the failure.
        message: String,
    },

    /// A validated response body did not match the expected shape.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Request validation failed before any network call.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),
}

impl RequestError {
    /// Returns `true` if this error is a transport-level network failure.
    ///
    /// Used by the default [`crate::RetryPolicy`] to decide whether a batch
    /// request is worth retrying.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_records_message() {
        let error = InvalidRequestError::EmptyRecords;
        let message = error.to_string();
        assert!(message.contains("records array is empty"));
        assert!(message.contains("non-empty array"));
    }

    #[test]
    fn test_empty_record_ids_message() {
        let error = InvalidRequestError::EmptyRecordIds;
        assert!(error.to_string().contains("record ids array is empty"));
    }

    #[test]
    fn test_missing_fields_to_merge_on_message() {
        let error = InvalidRequestError::MissingFieldsToMergeOn;
        assert_eq!(
            error.to_string(),
            "fieldsToMergeOn must be a non-empty array of field names."
        );
    }

    #[test]
    fn test_missing_cell_format_parameters_message() {
        let error = InvalidRequestError::MissingCellFormatParameters;
        assert_eq!(
            error.to_string(),
            "The timeZone and userLocale parameters are required when using string as the cellFormat."
        );
    }

    #[test]
    fn test_unknown_table_message() {
        let error = InvalidRequestError::UnknownTable {
            table: "Missing".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Table with name or ID \"Missing\" not found."
        );
    }

    #[test]
    fn test_api_error_displays_message_only() {
        let error = RequestError::Api {
            status: 404,
            message: "Table or record not found.".to_string(),
        };
        assert_eq!(error.to_string(), "Table or record not found.");
    }

    #[test]
    fn test_malformed_response_keeps_raw_body() {
        let error = RequestError::MalformedResponse {
            raw: "<html>gateway</html>".to_string(),
        };
        assert!(error.to_string().contains("<html>gateway</html>"));
    }

    #[test]
    fn test_invalid_request_is_not_network() {
        let error = RequestError::from(InvalidRequestError::EmptyRecords);
        assert!(!error.is_network());
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let invalid: &dyn std::error::Error = &InvalidRequestError::EmptyRecords;
        let _ = invalid;

        let request: &dyn std::error::Error = &RequestError::Api {
            status: 500,
            message: "Airtable server error.".to_string(),
        };
        let _ = request;
    }
}
