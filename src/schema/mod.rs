//! Base schema introspection.
//!
//! A separate metadata endpoint (`/meta/bases/{baseId}/tables`) describes
//! every table in a base together with its typed field schema. The SDK
//! treats this as an external data source: the schema feeds the
//! TypeScript type-generation helper in [`typegen`] and is otherwise
//! passed through untouched.

mod typegen;

pub use typegen::render_table_types;

use serde::Deserialize;
use serde_json::Value;

use crate::clients::{HttpMethod, RequestError};
use crate::records::AirtableClient;

/// The schema of one base: its tables and their fields.
#[derive(Clone, Debug, Deserialize)]
pub struct BaseSchema {
    /// The tables in the base.
    pub tables: Vec<TableSchema>,
}

/// The schema of one table.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSchema {
    /// The table's opaque ID.
    pub id: String,
    /// The table's display name.
    pub name: String,
    /// The ID of the table's primary field, when reported.
    #[serde(default)]
    pub primary_field_id: Option<String>,
    /// The table's fields, in schema order.
    pub fields: Vec<FieldSchema>,
}

/// The schema of one field.
#[derive(Clone, Debug, Deserialize)]
pub struct FieldSchema {
    /// The field's opaque ID, when reported.
    #[serde(default)]
    pub id: Option<String>,
    /// The field's display name.
    pub name: String,
    /// The Airtable field type (e.g. `singleLineText`, `multipleSelects`).
    #[serde(rename = "type")]
    pub field_type: String,
    /// Type-specific options (select choices, number precision, ...),
    /// passed through uninterpreted.
    #[serde(default)]
    pub options: Option<Value>,
}

impl BaseSchema {
    /// Finds a table by its ID or display name.
    #[must_use]
    pub fn find_table(&self, table_name_or_id: &str) -> Option<&TableSchema> {
        self.tables
            .iter()
            .find(|table| table.id == table_name_or_id || table.name == table_name_or_id)
    }
}

impl AirtableClient {
    /// Fetches the schema of the base this client targets.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] on transport failure or API rejection;
    /// schema access requires the token to have the `schema.bases:read`
    /// scope.
    pub async fn base_schema(&self) -> Result<BaseSchema, RequestError> {
        let url = format!(
            "{}/meta/bases/{}/tables",
            self.http().api_url(),
            self.base_id()
        );
        let response = self.http().send(HttpMethod::Get, &url, None).await?;
        let body = response.validate()?;
        Ok(serde_json::from_value(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> BaseSchema {
        serde_json::from_value(json!({
            "tables": [
                {
                    "id": "tbl1",
                    "name": "Projects",
                    "primaryFieldId": "fld1",
                    "fields": [
                        {"id": "fld1", "name": "Name", "type": "singleLineText"},
                        {"id": "fld2", "name": "Done", "type": "checkbox",
                         "options": {"icon": "check", "color": "greenBright"}}
                    ]
                },
                {
                    "id": "tbl2",
                    "name": "Tasks",
                    "fields": [
                        {"name": "Title", "type": "singleLineText"}
                    ]
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_schema_deserializes_wire_shape() {
        let schema = schema();
        assert_eq!(schema.tables.len(), 2);
        assert_eq!(schema.tables[0].primary_field_id.as_deref(), Some("fld1"));
        assert_eq!(schema.tables[0].fields[1].field_type, "checkbox");
        assert!(schema.tables[0].fields[1].options.is_some());
        assert!(schema.tables[1].primary_field_id.is_none());
        assert!(schema.tables[1].fields[0].id.is_none());
    }

    #[test]
    fn test_find_table_by_id_or_name() {
        let schema = schema();
        assert_eq!(schema.find_table("tbl2").unwrap().name, "Tasks");
        assert_eq!(schema.find_table("Projects").unwrap().id, "tbl1");
        assert!(schema.find_table("Missing").is_none());
    }
}
