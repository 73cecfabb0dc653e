//! SQL text for document tables.
//!
//! Table names are interpolated directly; callers only hold a
//! [`TableName`], which has already rejected anything outside
//! `[a-z_][a-z0-9_]*`. Values always travel as bind parameters.

use crate::domain::foundation::TableName;

/// Existence check. Yields one row whose `to_regclass` column is NULL when
/// the table is missing.
pub fn exists_table(table: &TableName) -> String {
    format!("SELECT to_regclass('public.{}')::text;", table)
}

pub fn create_table(table: &TableName) -> String {
    format!(
        "CREATE TABLE \"{}\" (\"id\" uuid NOT NULL,\"data\" json NOT NULL);",
        table
    )
}

pub fn select_all(table: &TableName, column: &str) -> String {
    format!("SELECT \"{}\" FROM \"{}\"", column, table)
}

/// `$1` = id
pub fn select_by_id(table: &TableName, column: &str) -> String {
    format!("SELECT \"{}\" FROM \"{}\" WHERE \"id\" = $1", column, table)
}

/// `$1` = id, `$2` = document
pub fn insert(table: &TableName, column: &str) -> String {
    format!(
        "INSERT INTO \"{table}\" (\"id\", \"{column}\") VALUES ($1, $2::json) RETURNING \"{column}\"",
        table = table,
        column = column
    )
}

/// `$1` = document, `$2` = id
pub fn update_by_id(table: &TableName, column: &str) -> String {
    format!(
        "UPDATE \"{}\" SET \"{}\" = $1::json WHERE \"id\" = $2",
        table, column
    )
}
