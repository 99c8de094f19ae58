//! Record data types and request options.
//!
//! Records are pure pass-through data carriers: the SDK never caches them
//! past the lifetime of one request/response. The `fields` map is generic so
//! callers can supply their own schema type; the default is an open JSON map.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The default open fields map: arbitrary field names to arbitrary values.
pub type AnyFields = serde_json::Map<String, serde_json::Value>;

/// One row in a table.
///
/// `id` and `created_time` are server-assigned and immutable after creation;
/// `fields` is caller- and server-mutated.
///
/// # Typed fields
///
/// `F` defaults to [`AnyFields`]. Callers with a known schema can substitute
/// their own serde type:
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use airtable_api::Record;
///
/// #[derive(Debug, Serialize, Deserialize)]
/// struct TaskFields {
///     #[serde(rename = "Name")]
///     name: Option<String>,
///     #[serde(rename = "Done")]
///     done: Option<bool>,
/// }
///
/// fn takes_typed(record: Record<TaskFields>) -> Option<String> {
///     record.fields.name
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record<F = AnyFields> {
    /// Server-assigned record ID (e.g. `recXXXXXXXXXXXXXX`).
    pub id: String,
    /// Server-assigned creation timestamp.
    #[serde(rename = "createdTime")]
    pub created_time: DateTime<Utc>,
    /// The record's field values.
    pub fields: F,
}

/// Field values for a record that does not exist yet.
///
/// Used by [`crate::AirtableClient::create_records`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewRecord<F = AnyFields> {
    /// The field values to create the record with.
    pub fields: F,
}

/// An update to one existing record, addressed by ID.
///
/// Used by [`crate::AirtableClient::update_records`] and
/// [`crate::AirtableClient::replace_records`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordPatch<F = AnyFields> {
    /// The ID of the record to update.
    pub id: String,
    /// The field values to write.
    pub fields: F,
}

/// An upsert entry: an optional record ID plus field values.
///
/// When `id` is absent the server matches on the configured merge fields and
/// creates a record if no match exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpsertPatch<F = AnyFields> {
    /// The ID of the record to update, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The field values to write.
    pub fields: F,
}

/// Per-record deletion confirmation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedRecord {
    /// The ID of the deleted record.
    pub id: String,
    /// Always `true` in server responses.
    pub deleted: bool,
}

/// One page of a list/query response.
///
/// `offset` is an opaque continuation cursor: its presence signals more
/// pages exist, its absence signals the final page. The client forwards it
/// verbatim and never interprets its contents.
#[derive(Clone, Debug, Deserialize)]
pub struct ListPage<F = AnyFields> {
    /// The records in this page.
    pub records: Vec<Record<F>>,
    /// Continuation cursor for the next page, if any.
    #[serde(default)]
    pub offset: Option<String>,
}

/// Aggregate result of an upsert across all batches.
///
/// The server reports, per batch, which record IDs were newly created and
/// which were updated; the bulk coordinator concatenates them in submission
/// order.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertOutcome<F = AnyFields> {
    /// IDs of records the upsert created.
    pub created_records: Vec<String>,
    /// IDs of records the upsert updated.
    pub updated_records: Vec<String>,
    /// All affected records.
    pub records: Vec<Record<F>>,
}

// Manual impl: a derived Default would needlessly require `F: Default`.
impl<F> Default for UpsertOutcome<F> {
    fn default() -> Self {
        Self {
            created_records: Vec::new(),
            updated_records: Vec::new(),
            records: Vec::new(),
        }
    }
}

/// Sort direction for a [`SortClause`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

/// One sort criterion for a list/query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortClause {
    /// The field name to sort by.
    pub field: String,
    /// The direction to sort in; the server defaults to ascending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
}

/// Cell value rendering mode for a list/query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellFormat {
    /// Cell values as JSON (the default).
    Json,
    /// Cell values rendered as user-facing strings; requires `timeZone`
    /// and `userLocale` to be set.
    String,
}

/// Record metadata the server may attach to list/query results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordMetadata {
    /// Attach each record's comment count.
    CommentCount,
}

/// Options for list/query operations.
///
/// All fields are optional; unset fields are omitted from the request body.
/// Field names serialize in the API's camelCase form.
///
/// # Example
///
/// ```rust
/// use airtable_api::{ListRecordsOptions, SortClause, SortDirection};
///
/// let options = ListRecordsOptions {
///     view: Some("Grid view".to_string()),
///     sort: Some(vec![SortClause {
///         field: "Name".to_string(),
///         direction: Some(SortDirection::Asc),
///     }]),
///     max_records: Some(250),
///     ..ListRecordsOptions::default()
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRecordsOptions {
    /// Time zone used when rendering string cell values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    /// User locale used when rendering string cell values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_locale: Option<String>,
    /// Records per page (server maximum 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u16>,
    /// Total record cap across all pages; defaults to 100 when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<u32>,
    /// Opaque continuation cursor from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
    /// Restrict results to a named view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
    /// Sort criteria, applied in order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<SortClause>>,
    /// Airtable formula filtering the results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_by_formula: Option<String>,
    /// Cell value rendering mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_format: Option<CellFormat>,
    /// Projection: only these fields are returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    /// Key returned fields by field ID instead of name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_fields_by_field_id: Option<bool>,
    /// Metadata to attach to each record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_metadata: Option<Vec<RecordMetadata>>,
}

/// Options for mutation operations (create, update, replace, upsert, delete).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Permit server-side coercion of submitted values into the field's
    /// configured type.
    pub typecast: bool,
    /// Key returned fields by field ID instead of name.
    pub return_fields_by_field_id: bool,
    /// Use PUT (full overwrite: unspecified fields are cleared) instead of
    /// PATCH (partial-field merge).
    pub overwrite_fields_not_specified: bool,
    /// Per-call override of the pause between consecutive batches.
    pub request_interval: Option<Duration>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_wire_names() {
        let record: Record = serde_json::from_value(json!({
            "id": "rec1",
            "createdTime": "2024-01-01T00:00:00Z",
            "fields": {"Name": "x"}
        }))
        .unwrap();

        assert_eq!(record.id, "rec1");
        assert_eq!(record.fields.get("Name"), Some(&json!("x")));

        let round = serde_json::to_value(&record).unwrap();
        assert_eq!(round["createdTime"], "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_list_options_serialize_camel_case_and_skip_unset() {
        let options = ListRecordsOptions {
            filter_by_formula: Some("{Done} = 0".to_string()),
            page_size: Some(50),
            ..ListRecordsOptions::default()
        };

        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(
            value,
            json!({"filterByFormula": "{Done} = 0", "pageSize": 50})
        );
    }

    #[test]
    fn test_sort_clause_serialization() {
        let sort = vec![
            SortClause {
                field: "Name".to_string(),
                direction: Some(SortDirection::Desc),
            },
            SortClause {
                field: "Created".to_string(),
                direction: None,
            },
        ];

        let value = serde_json::to_value(&sort).unwrap();
        assert_eq!(
            value,
            json!([
                {"field": "Name", "direction": "desc"},
                {"field": "Created"}
            ])
        );
    }

    #[test]
    fn test_cell_format_and_metadata_wire_names() {
        assert_eq!(serde_json::to_value(CellFormat::Json).unwrap(), json!("json"));
        assert_eq!(
            serde_json::to_value(CellFormat::String).unwrap(),
            json!("string")
        );
        assert_eq!(
            serde_json::to_value(RecordMetadata::CommentCount).unwrap(),
            json!("commentCount")
        );
    }

    #[test]
    fn test_upsert_patch_omits_absent_id() {
        let mut fields = AnyFields::new();
        fields.insert("Name".to_string(), json!("x"));

        let without_id = UpsertPatch { id: None, fields: fields.clone() };
        let value = serde_json::to_value(&without_id).unwrap();
        assert_eq!(value, json!({"fields": {"Name": "x"}}));

        let with_id = UpsertPatch {
            id: Some("rec1".to_string()),
            fields,
        };
        let value = serde_json::to_value(&with_id).unwrap();
        assert_eq!(value["id"], "rec1");
    }

    #[test]
    fn test_upsert_outcome_deserializes_camel_case() {
        let outcome: UpsertOutcome = serde_json::from_value(json!({
            "createdRecords": ["rec1"],
            "updatedRecords": ["rec2"],
            "records": [
                {"id": "rec1", "createdTime": "2024-01-01T00:00:00Z", "fields": {}},
                {"id": "rec2", "createdTime": "2024-01-01T00:00:00Z", "fields": {}}
            ]
        }))
        .unwrap();

        assert_eq!(outcome.created_records, vec!["rec1"]);
        assert_eq!(outcome.updated_records, vec!["rec2"]);
        assert_eq!(outcome.records.len(), 2);
    }

    #[test]
    fn test_list_page_offset_is_optional() {
        let page: ListPage = serde_json::from_value(json!({
            "records": []
        }))
        .unwrap();
        assert!(page.offset.is_none());

        let page: ListPage = serde_json::from_value(json!({
            "records": [],
            "offset": "itrABC/recDEF"
        }))
        .unwrap();
        assert_eq!(page.offset.as_deref(), Some("itrABC/recDEF"));
    }

    #[test]
    fn test_write_options_default() {
        let options = WriteOptions::default();
        assert!(!options.typecast);
        assert!(!options.return_fields_by_field_id);
        assert!(!options.overwrite_fields_not_specified);
        assert!(options.request_interval.is_none());
    }
}
