//! TypeScript type-declaration generation from a table schema.
//!
//! Emits a `type <Name>Fields = { ... }` declaration describing a table's
//! field shapes, mapping each Airtable field type to the TypeScript type a
//! caller would see in record payloads. Computed field kinds (formulas,
//! rollups, created/modified stamps) are marked `readonly`.

use crate::clients::{InvalidRequestError, RequestError};
use crate::records::AirtableClient;
use crate::schema::TableSchema;

const COLLABORATOR_TYPE: &str = "{ id: string; email?: string; name?: string; permissionLevel?: \"none\" | \"read\" | \"comment\" | \"edit\" | \"create\"; profilePicUrl?: string; }";

const ATTACHMENT_TYPE: &str = "{ readonly id: string; url: string; filename: string; type: string; size: number; width?: number; height?: number; thumbnails?: { small?: { url: string; width: number; height: number; }; large?: { url: string; width: number; height: number; }; full?: { url: string; width: number; height: number; }; }; }[]";

/// The TypeScript rendering of one Airtable field type.
struct TsFieldType {
    ts: String,
    readonly: bool,
}

fn map_field_type(airtable_type: &str) -> TsFieldType {
    let (ts, readonly) = match airtable_type {
        "aiText" | "singleLineText" | "multilineText" | "richText" | "email" | "url"
        | "phoneNumber" | "singleSelect" | "button" | "barcode" | "date" | "dateTime"
        | "syncSource" => ("string", false),
        "createdTime" | "lastModifiedTime" => ("string", true),
        "number" | "currency" | "percent" | "rating" | "duration" | "autoNumber" | "count" => {
            ("number", false)
        }
        "checkbox" => ("boolean", false),
        "multipleSelects" | "linkToAnotherRecord" | "multipleRecordLinks" => ("string[]", false),
        "attachment" | "multipleAttachments" => (ATTACHMENT_TYPE, false),
        "singleCollaborator" => (COLLABORATOR_TYPE, false),
        "multipleCollaborators" => return TsFieldType {
            ts: format!("{COLLABORATOR_TYPE}[]"),
            readonly: false,
        },
        "lookup" => ("any", false),
        "rollup" => ("string | number | boolean", true),
        "formula" => ("string | number | boolean | (string | number)[]", true),
        "createdBy" | "lastModifiedBy" => (COLLABORATOR_TYPE, true),
        _ => ("any", false),
    };
    TsFieldType {
        ts: ts.to_string(),
        readonly,
    }
}

/// Quotes a field name for use as a TypeScript property key.
///
/// Prefers double quotes, falling back to single quotes and then backticks
/// when the name itself contains quote characters; a name containing all
/// three is emitted bare.
fn quote_field_name(name: &str) -> String {
    if name.contains('"') {
        if name.contains('\'') {
            if name.contains('`') {
                name.to_string()
            } else {
                format!("`{name}`")
            }
        } else {
            format!("'{name}'")
        }
    } else {
        format!("\"{name}\"")
    }
}

/// Renders the `type <Name>Fields = { ... }` declaration for one table.
#[must_use]
pub fn render_table_types(table: &TableSchema) -> String {
    let mut definitions = format!("type {}Fields = {{\n", table.name);

    for field in &table.fields {
        let type_info = map_field_type(&field.field_type);
        let rendered = if type_info.readonly {
            format!("readonly {}", type_info.ts)
        } else {
            type_info.ts
        };
        definitions.push_str(&format!(
            "  {}?: {rendered};\n",
            quote_field_name(&field.name)
        ));
    }

    definitions.push_str("};\n");
    definitions
}

impl AirtableClient {
    /// Generates TypeScript type declarations for a table's field shapes.
    ///
    /// Fetches the base schema, finds the table by ID or display name, and
    /// renders its declaration.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::UnknownTable`] when the base schema
    /// contains no table with the given name or ID, or any failure from the
    /// schema fetch itself.
    pub async fn generate_type_definitions(
        &self,
        table_name_or_id: &str,
    ) -> Result<String, RequestError> {
        let schema = self.base_schema().await?;

        let table = schema.find_table(table_name_or_id).ok_or_else(|| {
            InvalidRequestError::UnknownTable {
                table: table_name_or_id.to_string(),
            }
        })?;

        Ok(render_table_types(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table(fields: serde_json::Value) -> TableSchema {
        serde_json::from_value(json!({
            "id": "tbl1",
            "name": "Projects",
            "fields": fields
        }))
        .unwrap()
    }

    #[test]
    fn test_text_and_number_field_mapping() {
        let table = table(json!([
            {"name": "Name", "type": "singleLineText"},
            {"name": "Budget", "type": "currency"},
            {"name": "Done", "type": "checkbox"},
            {"name": "Tags", "type": "multipleSelects"}
        ]));

        let rendered = render_table_types(&table);
        assert!(rendered.starts_with("type ProjectsFields = {\n"));
        assert!(rendered.contains("  \"Name\"?: string;\n"));
        assert!(rendered.contains("  \"Budget\"?: number;\n"));
        assert!(rendered.contains("  \"Done\"?: boolean;\n"));
        assert!(rendered.contains("  \"Tags\"?: string[];\n"));
        assert!(rendered.ends_with("};\n"));
    }

    #[test]
    fn test_computed_fields_are_readonly() {
        let table = table(json!([
            {"name": "Created", "type": "createdTime"},
            {"name": "Total", "type": "rollup"},
            {"name": "Summary", "type": "formula"}
        ]));

        let rendered = render_table_types(&table);
        assert!(rendered.contains("\"Created\"?: readonly string;"));
        assert!(rendered.contains("\"Total\"?: readonly string | number | boolean;"));
        assert!(rendered
            .contains("\"Summary\"?: readonly string | number | boolean | (string | number)[];"));
    }

    #[test]
    fn test_collaborator_and_attachment_mapping() {
        let table = table(json!([
            {"name": "Owner", "type": "singleCollaborator"},
            {"name": "Reviewers", "type": "multipleCollaborators"},
            {"name": "Files", "type": "multipleAttachments"}
        ]));

        let rendered = render_table_types(&table);
        assert!(rendered.contains("\"Owner\"?: { id: string; email?: string;"));
        assert!(rendered.contains("profilePicUrl?: string; }[];"));
        assert!(rendered.contains("\"Files\"?: { readonly id: string; url: string;"));
    }

    #[test]
    fn test_unknown_field_type_maps_to_any() {
        let table = table(json!([
            {"name": "Mystery", "type": "somethingNew"}
        ]));

        let rendered = render_table_types(&table);
        assert!(rendered.contains("\"Mystery\"?: any;"));
    }

    #[test]
    fn test_field_name_quoting() {
        assert_eq!(quote_field_name("Name"), "\"Name\"");
        assert_eq!(quote_field_name("Say \"hi\""), "'Say \"hi\"'");
        assert_eq!(quote_field_name("It's \"fine\""), "`It's \"fine\"`");
        assert_eq!(quote_field_name("`It's` \"odd\""), "`It's` \"odd\"");
    }
}
