//! In-memory document store.
//!
//! Mirrors the Postgres executor's observable behavior (missing tables,
//! id stamping, `force_id_in_update`) without a database, for tests and
//! local experiments.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::document::{JsonDocument, TableStatus};
use crate::domain::foundation::{DocumentId, DomainError, TableName};
use crate::ports::DocumentStore;

type Rows = Vec<(DocumentId, JsonDocument)>;

/// Tables held in a map, rows kept in insertion order.
///
/// # Example
///
/// ```ignore
/// let store = InMemoryDocumentStore::new();
/// store.create_table_if_necessary(&table).await?;
/// let saved = store.save(&table, document).await?;
/// assert_eq!(store.row_count(&table).await, Some(1));
/// ```
#[derive(Default)]
pub struct InMemoryDocumentStore {
    tables: RwLock<HashMap<TableName, Rows>>,
    force_id_in_update: bool,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_force_id_in_update(mut self, force: bool) -> Self {
        self.force_id_in_update = force;
        self
    }

    // === Test Helpers ===

    /// Number of rows in `table`, `None` if the table does not exist.
    pub async fn row_count(&self, table: &TableName) -> Option<usize> {
        self.tables.read().await.get(table).map(Vec::len)
    }

    pub async fn has_table(&self, table: &TableName) -> bool {
        self.tables.read().await.contains_key(table)
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn find_all(&self, table: &TableName) -> Result<Vec<JsonDocument>, DomainError> {
        let tables = self.tables.read().await;
        let rows = tables
            .get(table)
            .ok_or_else(|| DomainError::table_not_found(table.as_str()))?;

        Ok(rows.iter().map(|(_, doc)| doc.clone()).collect())
    }

    async fn save(
        &self,
        table: &TableName,
        document: JsonDocument,
    ) -> Result<JsonDocument, DomainError> {
        let mut tables = self.tables.write().await;
        let rows = tables
            .get_mut(table)
            .ok_or_else(|| DomainError::table_not_found(table.as_str()))?;

        let id = DocumentId::new();
        let document = document.with_id(&id);
        rows.push((id, document.clone()));
        Ok(document)
    }

    async fn create_table_if_necessary(
        &self,
        table: &TableName,
    ) -> Result<TableStatus, DomainError> {
        let mut tables = self.tables.write().await;
        if tables.contains_key(table) {
            return Ok(TableStatus::Existing);
        }
        tables.insert(table.clone(), Vec::new());
        Ok(TableStatus::Created)
    }

    async fn find_by_id(
        &self,
        table: &TableName,
        id: &DocumentId,
    ) -> Result<Option<JsonDocument>, DomainError> {
        let tables = self.tables.read().await;
        let rows = tables
            .get(table)
            .ok_or_else(|| DomainError::table_not_found(table.as_str()))?;

        Ok(rows
            .iter()
            .find(|(row_id, _)| row_id == id)
            .map(|(_, doc)| doc.clone()))
    }

    async fn update(
        &self,
        table: &TableName,
        id: &DocumentId,
        document: JsonDocument,
    ) -> Result<u64, DomainError> {
        let document = if self.force_id_in_update {
            document.with_id(id)
        } else {
            document
        };

        let mut tables = self.tables.write().await;
        let rows = tables
            .get_mut(table)
            .ok_or_else(|| DomainError::table_not_found(table.as_str()))?;

        let mut updated = 0;
        for (_, stored) in rows.iter_mut().filter(|(row_id, _)| row_id == id) {
            *stored = document.clone();
            updated += 1;
        }
        Ok(updated)
    }
}
