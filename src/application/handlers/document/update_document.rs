//! UpdateDocumentHandler - Command handler for replacing a document.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::document::{DocumentError, JsonDocument};
use crate::domain::foundation::{DocumentId, TableName};
use crate::ports::DocumentStore;

/// Command to replace the document stored under `id`.
#[derive(Debug, Clone)]
pub struct UpdateDocumentCommand {
    pub table: String,
    pub id: String,
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDocumentResult {
    pub table: TableName,
    pub id: DocumentId,
    pub rows_updated: u64,
}

pub struct UpdateDocumentHandler {
    store: Arc<dyn DocumentStore>,
}

impl UpdateDocumentHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Zero rows updated is not an error here; callers decide what it means.
    pub async fn handle(
        &self,
        cmd: UpdateDocumentCommand,
    ) -> Result<UpdateDocumentResult, DocumentError> {
        let table = TableName::new(cmd.table).map_err(DocumentError::InvalidTable)?;
        let id: DocumentId = cmd.id.parse().map_err(DocumentError::InvalidId)?;
        let document = JsonDocument::from_value(cmd.data).map_err(DocumentError::InvalidDocument)?;

        let rows_updated = self.store.update(&table, &id, document).await?;

        Ok(UpdateDocumentResult {
            table,
            id,
            rows_updated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryDocumentStore;
    use serde_json::json;

    async fn seeded(store: &InMemoryDocumentStore) -> DocumentId {
        let table = TableName::new("people").unwrap();
        store.create_table_if_necessary(&table).await.unwrap();
        let saved = store.save(&table, JsonDocument::new()).await.unwrap();
        saved.id().unwrap().parse().unwrap()
    }

    fn command(id: &str, data: Value) -> UpdateDocumentCommand {
        UpdateDocumentCommand {
            table: "people".to_string(),
            id: id.to_string(),
            data,
        }
    }

    #[tokio::test]
    async fn replaces_the_whole_document() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let id = seeded(&store).await;
        let handler = UpdateDocumentHandler::new(store.clone());

        let result = handler
            .handle(command(&id.to_string(), json!({"name": "Grace"})))
            .await
            .unwrap();
        assert_eq!(result.rows_updated, 1);

        let table = TableName::new("people").unwrap();
        let stored = store.find_by_id(&table, &id).await.unwrap().unwrap();
        assert_eq!(stored.get("name"), Some(&json!("Grace")));
        assert_eq!(stored.id(), None);
    }

    #[tokio::test]
    async fn forced_id_survives_replacement() {
        let store = Arc::new(InMemoryDocumentStore::new().with_force_id_in_update(true));
        let id = seeded(&store).await;
        let handler = UpdateDocumentHandler::new(store.clone());

        handler
            .handle(command(&id.to_string(), json!({"name": "Grace"})))
            .await
            .unwrap();

        let table = TableName::new("people").unwrap();
        let stored = store.find_by_id(&table, &id).await.unwrap().unwrap();
        assert_eq!(stored.id(), Some(id.to_string().as_str()));
    }

    #[tokio::test]
    async fn unknown_id_reports_zero_rows() {
        let store = Arc::new(InMemoryDocumentStore::new());
        seeded(&store).await;
        let handler = UpdateDocumentHandler::new(store);

        let result = handler
            .handle(command(&DocumentId::new().to_string(), json!({})))
            .await
            .unwrap();
        assert_eq!(result.rows_updated, 0);
    }

    #[tokio::test]
    async fn malformed_id_is_invalid() {
        let handler = UpdateDocumentHandler::new(Arc::new(InMemoryDocumentStore::new()));
        let err = handler.handle(command("abc", json!({}))).await.unwrap_err();
        assert!(matches!(err, DocumentError::InvalidId(_)));
    }
}
