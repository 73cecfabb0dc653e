//! Document store port.
//!
//! Defines the contract for keeping JSON documents in named tables, one
//! document per row. Implementations own the SQL (or whatever storage they
//! wrap); callers only ever pass validated table names and ids.
//!
//! # Design
//!
//! - **Table per collection**: every table has an `id` uuid column and a
//!   JSON `data` column
//! - **Id mirrored in the document**: `save` writes the generated id into
//!   `data.id`
//! - **No implicit creation**: only `create_table_if_necessary` creates tables

use crate::domain::document::{JsonDocument, TableStatus};
use crate::domain::foundation::{DocumentId, DomainError, TableName};
use async_trait::async_trait;

/// Port for JSON-document persistence.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns every document in `table`.
    ///
    /// # Errors
    ///
    /// - `TableNotFound` if the table does not exist
    /// - `DatabaseError` on persistence failure
    async fn find_all(&self, table: &TableName) -> Result<Vec<JsonDocument>, DomainError>;

    /// Inserts `document` under a freshly generated id.
    ///
    /// The id is written into `document["id"]` before the insert,
    /// replacing any existing value. Returns the stored document.
    ///
    /// # Errors
    ///
    /// - `TableNotFound` if the table does not exist
    /// - `DatabaseError` on persistence failure
    async fn save(&self, table: &TableName, document: JsonDocument)
        -> Result<JsonDocument, DomainError>;

    /// Creates `table` unless it already exists.
    async fn create_table_if_necessary(&self, table: &TableName)
        -> Result<TableStatus, DomainError>;

    /// Finds a document by id.
    ///
    /// Returns `None` if no row matches.
    async fn find_by_id(
        &self,
        table: &TableName,
        id: &DocumentId,
    ) -> Result<Option<JsonDocument>, DomainError>;

    /// Replaces the document stored under `id`.
    ///
    /// Returns the number of rows updated, zero when none matched.
    async fn update(
        &self,
        table: &TableName,
        id: &DocumentId,
        document: JsonDocument,
    ) -> Result<u64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn DocumentStore) {}
    }
}
