//! Pagination driver: exhaustive list/query reads.
//!
//! The list endpoint returns at most one page of records (server page size
//! 100) together with an opaque `offset` cursor when more pages exist. The
//! driver here presents a logical read as one exhaustive result list: it
//! reissues the query with each returned cursor until a response carries
//! none, pausing the request interval between any two page fetches.
//!
//! Termination is guaranteed because each page either returns fewer records
//! than the page size (implying no cursor) or the server eventually stops
//! returning a cursor; the loop has no independent iteration cap and trusts
//! server-side pagination semantics.

use serde::de::DeserializeOwned;

use crate::clients::{HttpMethod, InvalidRequestError, RequestError};
use crate::records::types::{CellFormat, ListPage, ListRecordsOptions, Record};
use crate::records::AirtableClient;

/// Record cap applied when the caller leaves `max_records` unset.
pub const DEFAULT_MAX_RECORDS: u32 = 100;

/// Checks the list-option preconditions that must fail before any network
/// call.
fn validate_list_options(options: &ListRecordsOptions) -> Result<(), InvalidRequestError> {
    if options.cell_format == Some(CellFormat::String)
        && (options.time_zone.is_none() || options.user_locale.is_none())
    {
        return Err(InvalidRequestError::MissingCellFormatParameters);
    }
    Ok(())
}

impl AirtableClient {
    /// Lists records, transparently fetching every page.
    ///
    /// Issues POST `/listRecords` with the caller's options (and no cursor),
    /// then, while the server returns an `offset` cursor, pauses the request
    /// interval and reissues with the cursor merged into the body, replacing
    /// any previous one. Page contents are concatenated in page order.
    ///
    /// `max_records` defaults to [`DEFAULT_MAX_RECORDS`] when unset, so an
    /// optionless call returns at most one server page.
    ///
    /// # Errors
    ///
    /// Fails fast with [`InvalidRequestError::MissingCellFormatParameters`]
    /// (before any network call) when `cell_format` is
    /// [`CellFormat::String`] without both `time_zone` and `user_locale`.
    /// Any page failure, including the first, aborts the read and
    /// propagates.
    pub async fn get_records<F>(
        &self,
        options: Option<&ListRecordsOptions>,
    ) -> Result<Vec<Record<F>>, RequestError>
    where
        F: DeserializeOwned,
    {
        let mut opts = options.cloned().unwrap_or_default();
        validate_list_options(&opts)?;
        if opts.max_records.is_none() {
            opts.max_records = Some(DEFAULT_MAX_RECORDS);
        }

        let mut records = Vec::new();
        let mut page_index: u32 = 0;
        loop {
            let body = serde_json::to_value(&opts)?;
            let value = self
                .request(HttpMethod::Post, "/listRecords", Some(&body))
                .await?;
            let page: ListPage<F> = serde_json::from_value(value)?;
            tracing::debug!(
                page = page_index,
                count = page.records.len(),
                more = page.offset.is_some(),
                "fetched record page"
            );
            records.extend(page.records);

            match page.offset {
                Some(cursor) => {
                    // Forwarded verbatim; only the server interprets it.
                    opts.offset = Some(cursor);
                    page_index += 1;
                    tokio::time::sleep(self.request_interval()).await;
                }
                None => break,
            }
        }

        Ok(records)
    }
}
