//! JSON documents and their id stamping rules.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::{DocumentId, ValidationError};

/// Key inside the document that mirrors the row's `id` column.
pub const ID_FIELD: &str = "id";

/// A JSON object stored in a table's data column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonDocument(Map<String, Value>);

impl JsonDocument {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Accepts only JSON objects.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ValidationError::invalid_format(
                "document",
                format!("expected a JSON object, got {}", json_kind(&other)),
            )),
        }
    }

    /// Writes `id` into the document, replacing whatever was there.
    pub fn stamp_id(&mut self, id: &DocumentId) {
        self.0
            .insert(ID_FIELD.to_string(), Value::String(id.to_string()));
    }

    pub fn with_id(mut self, id: &DocumentId) -> Self {
        self.stamp_id(id);
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.0.get(ID_FIELD).and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for JsonDocument {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for JsonDocument {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

/// Outcome of making sure a table exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    /// The table was already there.
    Existing,
    /// The table was created by this call.
    Created,
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
