//! GetDocumentHandler - Query handler for a single document.

use std::sync::Arc;

use crate::domain::document::{DocumentError, JsonDocument};
use crate::domain::foundation::{DocumentId, TableName};
use crate::ports::DocumentStore;

/// Query to get a document by id.
#[derive(Debug, Clone)]
pub struct GetDocumentQuery {
    pub table: String,
    pub id: String,
}

pub struct GetDocumentHandler {
    store: Arc<dyn DocumentStore>,
}

impl GetDocumentHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetDocumentQuery) -> Result<JsonDocument, DocumentError> {
        let table = TableName::new(query.table).map_err(DocumentError::InvalidTable)?;
        let id: DocumentId = query.id.parse().map_err(DocumentError::InvalidId)?;

        self.store
            .find_by_id(&table, &id)
            .await?
            .ok_or_else(|| DocumentError::not_found(table, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryDocumentStore;
    use serde_json::json;

    async fn seeded() -> (Arc<InMemoryDocumentStore>, String) {
        let store = Arc::new(InMemoryDocumentStore::new());
        let table = TableName::new("people").unwrap();
        store.create_table_if_necessary(&table).await.unwrap();
        let saved = store
            .save(&table, JsonDocument::from_value(json!({"name": "Ada"})).unwrap())
            .await
            .unwrap();
        let id = saved.id().unwrap().to_string();
        (store, id)
    }

    fn query(table: &str, id: &str) -> GetDocumentQuery {
        GetDocumentQuery {
            table: table.to_string(),
            id: id.to_string(),
        }
    }

    #[tokio::test]
    async fn returns_the_stored_document() {
        let (store, id) = seeded().await;
        let handler = GetDocumentHandler::new(store);

        let doc = handler.handle(query("people", &id)).await.unwrap();
        assert_eq!(doc.get("name"), Some(&json!("Ada")));
        assert_eq!(doc.id(), Some(id.as_str()));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let (store, _) = seeded().await;
        let handler = GetDocumentHandler::new(store);
        let missing = DocumentId::new();

        let err = handler
            .handle(query("people", &missing.to_string()))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DocumentError::not_found(TableName::new("people").unwrap(), missing)
        );
    }

    #[tokio::test]
    async fn malformed_id_is_invalid() {
        let (store, _) = seeded().await;
        let handler = GetDocumentHandler::new(store);

        let err = handler.handle(query("people", "42")).await.unwrap_err();
        assert!(matches!(err, DocumentError::InvalidId(_)));
    }

    #[tokio::test]
    async fn missing_table_is_reported() {
        let handler = GetDocumentHandler::new(Arc::new(InMemoryDocumentStore::new()));
        let err = handler
            .handle(query("ghosts", &DocumentId::new().to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, DocumentError::TableNotFound(_)));
    }
}
