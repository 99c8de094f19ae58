//! Record operations against a single base/table.
//!
//! This module provides [`AirtableClient`], the caller-facing client for
//! record CRUD. Each endpoint operation is a thin composition: build an
//! endpoint suffix and body, send through the transport adapter, validate
//! the envelope, deserialize the result.
//!
//! Operations over arbitrary-length inputs (`create_records`,
//! `update_records`, `replace_records`, `update_records_upsert`,
//! `delete_records`) live in the bulk coordinator (`bulk.rs`), which chunks
//! the input into batches of at most [`MAX_RECORDS_PER_REQUEST`](bulk::MAX_RECORDS_PER_REQUEST)
//! and paces consecutive requests. The exhaustive read (`get_records`)
//! lives in the pagination driver (`pagination.rs`).
//!
//! # Example
//!
//! ```rust,ignore
//! use airtable_api::{AirtableClient, AirtableConfig, AnyFields, ApiKey, BaseId, TableId};
//!
//! let config = AirtableConfig::builder()
//!     .api_key(ApiKey::new("pat-my-token")?)
//!     .base_id(BaseId::new("app1234567890")?)
//!     .table_id(TableId::new("Projects")?)
//!     .build()?;
//!
//! let client = AirtableClient::new(&config);
//! let record = client.get_record::<AnyFields>("rec1234567890").await?;
//! println!("{}: {:?}", record.id, record.fields);
//! ```

pub mod bulk;
mod pagination;
mod types;

pub use types::{
    AnyFields, CellFormat, DeletedRecord, ListPage, ListRecordsOptions, NewRecord, Record,
    RecordMetadata, RecordPatch, SortClause, SortDirection, UpsertOutcome, UpsertPatch,
    WriteOptions,
};

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::clients::{HttpClient, HttpMethod, RequestError, RetryPolicy};
use crate::config::{AirtableConfig, BaseId, TableId};

/// Client for record operations against one Airtable base/table.
///
/// The client is a thin orchestration layer over the transport adapter:
/// every method constructs fresh request state, so separate calls share no
/// mutable state and may run concurrently from the caller's perspective.
/// Within a single bulk or paginated call, requests are strictly
/// sequential and paced by the configured request interval.
///
/// # Thread Safety
///
/// `AirtableClient` is `Send + Sync`, making it safe to share across async
/// tasks.
#[derive(Debug)]
pub struct AirtableClient {
    /// The transport adapter performing network round trips.
    http: HttpClient,
    /// The base every request targets.
    base_id: BaseId,
    /// The table every request targets.
    table_id: TableId,
    /// Pause between consecutive batch or page requests.
    request_interval: Duration,
    /// Retry policy applied to batch requests.
    retry: RetryPolicy,
}

// Verify AirtableClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AirtableClient>();
};

impl AirtableClient {
    /// Creates a new client for the base/table named by `config`.
    #[must_use]
    pub fn new(config: &AirtableConfig) -> Self {
        Self {
            http: HttpClient::new(config),
            base_id: config.base_id().clone(),
            table_id: config.table_id().clone(),
            request_interval: config.request_interval(),
            retry: *config.retry(),
        }
    }

    /// Returns the base ID this client targets.
    #[must_use]
    pub const fn base_id(&self) -> &BaseId {
        &self.base_id
    }

    /// Returns the table ID or name this client targets.
    #[must_use]
    pub const fn table_id(&self) -> &TableId {
        &self.table_id
    }

    /// Returns the pause between consecutive batch or page requests.
    #[must_use]
    pub const fn request_interval(&self) -> Duration {
        self.request_interval
    }

    /// Returns the retry policy applied to batch requests.
    #[must_use]
    pub const fn retry(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Returns the transport adapter.
    pub(crate) const fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Builds the full URL for a record-endpoint suffix.
    pub(crate) fn record_url(&self, suffix: &str) -> String {
        format!(
            "{}/{}/{}{suffix}",
            self.http.api_url(),
            self.base_id,
            self.table_id
        )
    }

    /// Sends one request to a record endpoint and validates the envelope.
    pub(crate) async fn request(
        &self,
        method: HttpMethod,
        suffix: &str,
        body: Option<&Value>,
    ) -> Result<Value, RequestError> {
        let url = self.record_url(suffix);
        let response = self.http.send(method, &url, body).await?;
        response.validate()
    }

    /// Fetches one record by ID.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Api`] with `Table or record not found.` when
    /// the server reports 404, or any transport-level failure.
    pub async fn get_record<F>(&self, record_id: &str) -> Result<Record<F>, RequestError>
    where
        F: DeserializeOwned,
    {
        let body = self
            .request(HttpMethod::Get, &format!("/{record_id}"), None)
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Creates one record from its field values.
    ///
    /// Returns the created record including the server-assigned `id` and
    /// `created_time`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] on transport failure or API rejection.
    pub async fn create_record<F>(
        &self,
        fields: &F,
        options: Option<&WriteOptions>,
    ) -> Result<Record<F>, RequestError>
    where
        F: Serialize + DeserializeOwned,
    {
        let opts = options.cloned().unwrap_or_default();
        let body = json!({
            "fields": serde_json::to_value(fields)?,
            "typecast": opts.typecast,
            "returnFieldsByFieldId": opts.return_fields_by_field_id,
        });
        let value = self.request(HttpMethod::Post, "/", Some(&body)).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Updates one record's fields.
    ///
    /// Sends PATCH (partial-field merge) by default, or PUT (full overwrite:
    /// unspecified fields are cleared) when
    /// [`WriteOptions::overwrite_fields_not_specified`] is set.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] on transport failure or API rejection.
    pub async fn update_record<F>(
        &self,
        record_id: &str,
        fields: &F,
        options: Option<&WriteOptions>,
    ) -> Result<Record<F>, RequestError>
    where
        F: Serialize + DeserializeOwned,
    {
        let opts = options.cloned().unwrap_or_default();
        let method = if opts.overwrite_fields_not_specified {
            HttpMethod::Put
        } else {
            HttpMethod::Patch
        };
        let body = json!({
            "fields": serde_json::to_value(fields)?,
            "typecast": opts.typecast,
            "returnFieldsByFieldId": opts.return_fields_by_field_id,
        });
        let value = self
            .request(method, &format!("/{record_id}"), Some(&body))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Replaces one record: a full overwrite where unspecified fields are
    /// cleared.
    ///
    /// Equivalent to [`update_record`](Self::update_record) with
    /// [`WriteOptions::overwrite_fields_not_specified`] set.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] on transport failure or API rejection.
    pub async fn replace_record<F>(
        &self,
        record_id: &str,
        fields: &F,
        options: Option<&WriteOptions>,
    ) -> Result<Record<F>, RequestError>
    where
        F: Serialize + DeserializeOwned,
    {
        let mut opts = options.cloned().unwrap_or_default();
        opts.overwrite_fields_not_specified = true;
        self.update_record(record_id, fields, Some(&opts)).await
    }
}
