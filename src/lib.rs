//! # Airtable API Rust SDK
//!
//! A Rust SDK for the Airtable Web API, providing type-safe configuration,
//! record CRUD with transparent batching and pagination, and schema
//! introspection for Airtable bases.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`AirtableConfig`] and [`AirtableConfigBuilder`]
//! - Validated newtypes for the API credential and base/table coordinates
//! - Record CRUD: fetch, list/query, create, update (partial), replace
//!   (full overwrite), upsert-by-field-match, and delete via [`AirtableClient`]
//! - Transparent chunking of bulk mutations into the API's ten-records-per-request
//!   batches, with rate-limit pacing between batches
//! - Transparent pagination of list/query reads until the server stops
//!   returning a continuation cursor
//! - A pluggable [`RetryPolicy`] for batch requests
//! - Base schema introspection and TypeScript type-declaration generation
//!
//! ## Quick Start
//!
//! ```rust
//! use airtable_api::{AirtableConfig, ApiKey, BaseId, TableId};
//!
//! // Create configuration using the builder pattern
//! let config = AirtableConfig::builder()
//!     .api_key(ApiKey::new("pat-your-token").unwrap())
//!     .base_id(BaseId::new("app1234567890").unwrap())
//!     .table_id(TableId::new("Projects").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Reading Records
//!
//! ```rust,ignore
//! use airtable_api::{AirtableClient, AnyFields, ListRecordsOptions};
//!
//! let client = AirtableClient::new(&config);
//!
//! // One record by ID
//! let record = client.get_record::<AnyFields>("rec1234567890").await?;
//!
//! // Every matching record, across however many pages the server returns
//! let options = ListRecordsOptions {
//!     filter_by_formula: Some("{Done} = 0".to_string()),
//!     max_records: Some(500),
//!     ..ListRecordsOptions::default()
//! };
//! let records = client.get_records::<AnyFields>(Some(&options)).await?;
//! ```
//!
//! ## Writing Records
//!
//! Bulk mutations accept any number of records; the client splits them into
//! batches of at most ten, pauses between batches to respect the API's rate
//! limit, and concatenates the per-batch results:
//!
//! ```rust,ignore
//! use airtable_api::{NewRecord, RecordPatch, UpsertPatch, WriteOptions};
//!
//! // Create
//! let created = client.create_records(&new_records, None).await?;
//!
//! // Partial update (PATCH); set `overwrite_fields_not_specified` for PUT
//! let updated = client.update_records(&patches, None).await?;
//!
//! // Upsert keyed on field values instead of record IDs
//! let outcome = client
//!     .update_records_upsert(&upserts, &["Email".to_string()], None)
//!     .await?;
//! println!("created {} updated {}", outcome.created_records.len(),
//!     outcome.updated_records.len());
//!
//! // Delete
//! let deleted = client.delete_records(&["rec1", "rec2"], None).await?;
//! ```
//!
//! ## Failure Semantics
//!
//! Validation failures (empty record lists, missing upsert merge fields,
//! missing time zone/locale for string cell rendering) are raised before
//! any network call. Transport failures ([`RequestError::Network`]) stay
//! distinct from API rejections ([`RequestError::Api`]), so callers can
//! tell "never reached the server" from "server refused". A failed batch
//! aborts the remaining batches without rolling back completed ones; there
//! is no cross-batch transaction.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Pass-through data**: Records are never cached past one request/response

pub mod clients;
pub mod config;
pub mod error;
pub mod records;
pub mod schema;

// Re-export public types at crate root for convenience
pub use config::{
    AirtableConfig, AirtableConfigBuilder, ApiKey, BaseId, TableId, DEFAULT_API_URL,
    DEFAULT_REQUEST_INTERVAL,
};
pub use error::ConfigError;

// Re-export transport and error types
pub use clients::{
    HttpClient, HttpMethod, HttpResponse, InvalidRequestError, RequestError, RetryPolicy,
    REQUEST_TIMEOUT, RETRY_BACKOFF, SDK_VERSION,
};

// Re-export record operation types
pub use records::bulk::MAX_RECORDS_PER_REQUEST;
pub use records::{
    AirtableClient, AnyFields, CellFormat, DeletedRecord, ListPage, ListRecordsOptions, NewRecord,
    Record, RecordMetadata, RecordPatch, SortClause, SortDirection, UpsertOutcome, UpsertPatch,
    WriteOptions,
};

// Re-export schema introspection types
pub use schema::{render_table_types, BaseSchema, FieldSchema, TableSchema};
