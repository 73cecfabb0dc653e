//! Validated table identifier.
//!
//! Table names end up verbatim inside SQL text (the `to_regclass` lookup
//! and the `CREATE TABLE` statement), so the accepted alphabet is kept to
//! what Postgres would fold an unquoted identifier to: lowercase ASCII
//! letters, digits and underscores, not starting with a digit, at most
//! 63 bytes (`NAMEDATALEN - 1`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Longest identifier Postgres keeps without truncation.
pub const MAX_TABLE_NAME_LEN: usize = 63;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TableName(String);

impl TableName {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.is_empty() {
            return Err(ValidationError::empty_field("table"));
        }
        if name.len() > MAX_TABLE_NAME_LEN {
            return Err(ValidationError::too_long("table", MAX_TABLE_NAME_LEN, name.len()));
        }

        let mut chars = name.chars();
        let first_ok = chars
            .next()
            .map(|c| c.is_ascii_lowercase() || c == '_')
            .unwrap_or(false);
        if !first_ok {
            return Err(ValidationError::invalid_format(
                "table",
                "must start with a lowercase letter or underscore",
            ));
        }
        if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
            return Err(ValidationError::invalid_format(
                "table",
                "only lowercase letters, digits and underscores are allowed",
            ));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TableName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TableName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TableName> for String {
    fn from(name: TableName) -> Self {
        name.0
    }
}

impl AsRef<str> for TableName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
