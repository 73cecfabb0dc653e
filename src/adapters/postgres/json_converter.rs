//! Maps the JSON column of a row to and from [`JsonDocument`].

use serde_json::Value;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::Row;

use crate::domain::document::JsonDocument;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Name of the JSON column in every document table.
pub const JSON_COLUMN: &str = "data";

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonColumnConverter;

impl JsonColumnConverter {
    pub fn new() -> Self {
        Self
    }

    pub fn column_name(&self) -> &'static str {
        JSON_COLUMN
    }

    /// Reads the JSON column of `row`.
    pub fn convert_column(&self, row: &PgRow) -> Result<JsonDocument, DomainError> {
        let Json(value): Json<Value> = row.try_get(self.column_name()).map_err(|e| {
            DomainError::new(
                ErrorCode::SerializationError,
                format!("Failed to get {}: {}", self.column_name(), e),
            )
        })?;

        self.convert_value(value)
    }

    /// Stored values must be objects; anything else means the row was not
    /// written through this store.
    pub fn convert_value(&self, value: Value) -> Result<JsonDocument, DomainError> {
        JsonDocument::from_value(value).map_err(|e| {
            DomainError::new(
                ErrorCode::SerializationError,
                format!("Unexpected {} column content: {}", self.column_name(), e),
            )
        })
    }

    /// Bind value for writing `document` into the JSON column.
    pub fn to_column<'a>(&self, document: &'a JsonDocument) -> Json<&'a JsonDocument> {
        Json(document)
    }
}
