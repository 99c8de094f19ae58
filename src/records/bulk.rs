//! Bulk coordinator: chunking, pacing, and retry for list mutations.
//!
//! The Airtable record endpoints accept at most ten records per request.
//! The methods here make large bulk mutations behave as a single logical
//! call: the input is partitioned into contiguous batches of at most
//! [`MAX_RECORDS_PER_REQUEST`] preserving order, one request is issued per
//! batch, and per-batch results are concatenated in submission order.
//!
//! Between consecutive batches (not after the last) the coordinator sleeps
//! the configured request interval to stay under the API's rate limit. A
//! failed batch aborts the remaining batches; batches already completed are
//! NOT rolled back. The aggregate operation has no transactional guarantee
//! across batches, only whatever atomicity the remote API provides within
//! one batch.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::clients::{HttpMethod, InvalidRequestError, RequestError};
use crate::records::types::{
    DeletedRecord, NewRecord, Record, RecordPatch, UpsertOutcome, UpsertPatch, WriteOptions,
};
use crate::records::AirtableClient;

/// Hard per-request record cap imposed by the Airtable record endpoints.
pub const MAX_RECORDS_PER_REQUEST: usize = 10;

/// Partitions `items` into contiguous batches of at most
/// [`MAX_RECORDS_PER_REQUEST`], preserving order.
///
/// Concatenating the batches reproduces `items` exactly; no batch is empty
/// unless `items` is.
pub(crate) fn batches<T>(items: &[T]) -> std::slice::Chunks<'_, T> {
    items.chunks(MAX_RECORDS_PER_REQUEST)
}

/// The `{"records": [...]}` envelope wrapping batch mutation responses.
#[derive(Debug, Deserialize)]
struct RecordsEnvelope<F> {
    records: Vec<Record<F>>,
}

#[derive(Debug, Deserialize)]
struct DeletionsEnvelope {
    records: Vec<DeletedRecord>,
}

impl AirtableClient {
    /// Sends one batch request under the configured retry policy.
    ///
    /// Attempts the request up to `retry.max_attempts` times, sleeping
    /// `retry.backoff` before each retry, for failures the policy's
    /// predicate accepts. All other failures propagate immediately.
    pub(crate) async fn request_batch(
        &self,
        method: HttpMethod,
        suffix: &str,
        body: Option<&Value>,
    ) -> Result<Value, RequestError> {
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            match self.request(method, suffix, body).await {
                Ok(value) => return Ok(value),
                Err(error) if self.retry().should_retry(&error, attempt) => {
                    tracing::warn!(
                        %error,
                        attempt,
                        backoff_secs = self.retry().backoff.as_secs_f64(),
                        "batch request failed, retrying after backoff"
                    );
                    tokio::time::sleep(self.retry().backoff).await;
                }
                Err(error) => return Err(error),
            }
        }
    }

    /// Sleeps the request interval between consecutive batches.
    async fn pause_between_batches(&self, options: Option<&WriteOptions>) {
        let interval = options
            .and_then(|opts| opts.request_interval)
            .unwrap_or_else(|| self.request_interval());
        tokio::time::sleep(interval).await;
    }

    /// Creates many records, chunking the input into batches of at most ten.
    ///
    /// Returns the created records, including server-assigned IDs and
    /// timestamps, in submission order.
    ///
    /// # Errors
    ///
    /// Fails fast with [`InvalidRequestError::EmptyRecords`] (no network
    /// side effect) when `records` is empty. A failed batch aborts the
    /// remainder; earlier batches stay applied on the remote side.
    pub async fn create_records<F>(
        &self,
        records: &[NewRecord<F>],
        options: Option<&WriteOptions>,
    ) -> Result<Vec<Record<F>>, RequestError>
    where
        F: Serialize + DeserializeOwned,
    {
        if records.is_empty() {
            return Err(InvalidRequestError::EmptyRecords.into());
        }

        let opts = options.cloned().unwrap_or_default();
        let mut combined = Vec::with_capacity(records.len());
        let chunks = batches(records);
        let last = chunks.len() - 1;

        for (index, chunk) in chunks.enumerate() {
            tracing::debug!(batch = index, size = chunk.len(), "creating record batch");
            let body = json!({
                "records": serde_json::to_value(chunk)?,
                "typecast": opts.typecast,
                "returnFieldsByFieldId": opts.return_fields_by_field_id,
            });
            let value = self
                .request_batch(HttpMethod::Post, "/", Some(&body))
                .await?;
            let envelope: RecordsEnvelope<F> = serde_json::from_value(value)?;
            combined.extend(envelope.records);

            if index < last {
                self.pause_between_batches(options).await;
            }
        }

        Ok(combined)
    }

    /// Updates many records, chunking the input into batches of at most ten.
    ///
    /// Sends PATCH (partial-field merge) by default, or PUT (full overwrite)
    /// when [`WriteOptions::overwrite_fields_not_specified`] is set. Returns
    /// the updated records in submission order.
    ///
    /// # Errors
    ///
    /// Fails fast with [`InvalidRequestError::EmptyRecords`] when `records`
    /// is empty; per-batch failures abort the remainder.
    pub async fn update_records<F>(
        &self,
        records: &[RecordPatch<F>],
        options: Option<&WriteOptions>,
    ) -> Result<Vec<Record<F>>, RequestError>
    where
        F: Serialize + DeserializeOwned,
    {
        if records.is_empty() {
            return Err(InvalidRequestError::EmptyRecords.into());
        }

        let opts = options.cloned().unwrap_or_default();
        let method = if opts.overwrite_fields_not_specified {
            HttpMethod::Put
        } else {
            HttpMethod::Patch
        };
        let mut combined = Vec::with_capacity(records.len());
        let chunks = batches(records);
        let last = chunks.len() - 1;

        for (index, chunk) in chunks.enumerate() {
            tracing::debug!(batch = index, size = chunk.len(), "updating record batch");
            let body = json!({
                "records": serde_json::to_value(chunk)?,
                "typecast": opts.typecast,
                "returnFieldsByFieldId": opts.return_fields_by_field_id,
            });
            let value = self.request_batch(method, "/", Some(&body)).await?;
            let envelope: RecordsEnvelope<F> = serde_json::from_value(value)?;
            combined.extend(envelope.records);

            if index < last {
                self.pause_between_batches(options).await;
            }
        }

        Ok(combined)
    }

    /// Replaces many records: full overwrites where unspecified fields are
    /// cleared.
    ///
    /// Equivalent to [`update_records`](Self::update_records) with
    /// [`WriteOptions::overwrite_fields_not_specified`] set.
    ///
    /// # Errors
    ///
    /// Same as [`update_records`](Self::update_records).
    pub async fn replace_records<F>(
        &self,
        records: &[RecordPatch<F>],
        options: Option<&WriteOptions>,
    ) -> Result<Vec<Record<F>>, RequestError>
    where
        F: Serialize + DeserializeOwned,
    {
        let mut opts = options.cloned().unwrap_or_default();
        opts.overwrite_fields_not_specified = true;
        self.update_records(records, Some(&opts)).await
    }

    /// Upserts many records, matching on the given merge fields.
    ///
    /// Entries without an `id` are matched on `fields_to_merge_on`; a record
    /// is created when no match exists. The server reports, per batch, which
    /// IDs were newly created and which were updated; the outcome
    /// concatenates both lists plus all affected records in submission
    /// order.
    ///
    /// # Errors
    ///
    /// Fails fast with [`InvalidRequestError::EmptyRecords`] when `records`
    /// is empty and with [`InvalidRequestError::MissingFieldsToMergeOn`]
    /// when `fields_to_merge_on` is empty, in both cases before any network
    /// call.
    pub async fn update_records_upsert<F>(
        &self,
        records: &[UpsertPatch<F>],
        fields_to_merge_on: &[String],
        options: Option<&WriteOptions>,
    ) -> Result<UpsertOutcome<F>, RequestError>
    where
        F: Serialize + DeserializeOwned,
    {
        if records.is_empty() {
            return Err(InvalidRequestError::EmptyRecords.into());
        }
        if fields_to_merge_on.is_empty() {
            return Err(InvalidRequestError::MissingFieldsToMergeOn.into());
        }

        let opts = options.cloned().unwrap_or_default();
        let method = if opts.overwrite_fields_not_specified {
            HttpMethod::Put
        } else {
            HttpMethod::Patch
        };
        let mut outcome = UpsertOutcome::default();
        let chunks = batches(records);
        let last = chunks.len() - 1;

        for (index, chunk) in chunks.enumerate() {
            tracing::debug!(batch = index, size = chunk.len(), "upserting record batch");
            let body = json!({
                "records": serde_json::to_value(chunk)?,
                "typecast": opts.typecast,
                "returnFieldsByFieldId": opts.return_fields_by_field_id,
                "performUpsert": { "fieldsToMergeOn": fields_to_merge_on },
            });
            let value = self.request_batch(method, "/", Some(&body)).await?;
            let batch_outcome: UpsertOutcome<F> = serde_json::from_value(value)?;
            outcome.created_records.extend(batch_outcome.created_records);
            outcome.updated_records.extend(batch_outcome.updated_records);
            outcome.records.extend(batch_outcome.records);

            if index < last {
                self.pause_between_batches(options).await;
            }
        }

        Ok(outcome)
    }

    /// Deletes many records by ID, chunking into batches of at most ten.
    ///
    /// A batch of exactly one ID is sent as `DELETE /{recordId}`; larger
    /// batches use the query-string form `?records[]=…&records[]=…` with
    /// percent-encoded IDs. Returns one `{id, deleted}` confirmation per
    /// input ID, in submission order.
    ///
    /// Only [`WriteOptions::request_interval`] applies to deletions; the
    /// field-level options are ignored.
    ///
    /// # Errors
    ///
    /// Fails fast with [`InvalidRequestError::EmptyRecordIds`] when
    /// `record_ids` is empty; per-batch failures abort the remainder.
    pub async fn delete_records<S>(
        &self,
        record_ids: &[S],
        options: Option<&WriteOptions>,
    ) -> Result<Vec<DeletedRecord>, RequestError>
    where
        S: AsRef<str>,
    {
        if record_ids.is_empty() {
            return Err(InvalidRequestError::EmptyRecordIds.into());
        }

        let mut combined = Vec::with_capacity(record_ids.len());
        let chunks = batches(record_ids);
        let last = chunks.len() - 1;

        for (index, chunk) in chunks.enumerate() {
            tracing::debug!(batch = index, size = chunk.len(), "deleting record batch");
            if let [only] = chunk {
                let suffix = format!("/{}", only.as_ref());
                let value = self
                    .request_batch(HttpMethod::Delete, &suffix, None)
                    .await?;
                let deleted: DeletedRecord = serde_json::from_value(value)?;
                combined.push(deleted);
            } else {
                let query = chunk
                    .iter()
                    .map(|id| format!("records[]={}", urlencoding::encode(id.as_ref())))
                    .collect::<Vec<_>>()
                    .join("&");
                let value = self
                    .request_batch(HttpMethod::Delete, &format!("?{query}"), None)
                    .await?;
                let envelope: DeletionsEnvelope = serde_json::from_value(value)?;
                combined.extend(envelope.records);
            }

            if index < last {
                self.pause_between_batches(options).await;
            }
        }

        Ok(combined)
    }
}
