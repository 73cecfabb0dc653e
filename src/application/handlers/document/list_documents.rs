//! ListDocumentsHandler - Query handler for every document in a table.

use std::sync::Arc;

use crate::domain::document::{DocumentError, JsonDocument};
use crate::domain::foundation::TableName;
use crate::ports::DocumentStore;

#[derive(Debug, Clone)]
pub struct ListDocumentsQuery {
    pub table: String,
}

pub struct ListDocumentsHandler {
    store: Arc<dyn DocumentStore>,
}

impl ListDocumentsHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: ListDocumentsQuery,
    ) -> Result<Vec<JsonDocument>, DocumentError> {
        let table = TableName::new(query.table).map_err(DocumentError::InvalidTable)?;
        Ok(self.store.find_all(&table).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::TableStatus;
    use crate::domain::foundation::{DocumentId, DomainError, ErrorCode};
    use async_trait::async_trait;

    struct FailingStore;

    #[async_trait]
    impl DocumentStore for FailingStore {
        async fn find_all(&self, table: &TableName) -> Result<Vec<JsonDocument>, DomainError> {
            Err(DomainError::database(table.as_str(), "Simulated fetch failure"))
        }

        async fn save(
            &self,
            _table: &TableName,
            document: JsonDocument,
        ) -> Result<JsonDocument, DomainError> {
            Ok(document)
        }

        async fn create_table_if_necessary(
            &self,
            _table: &TableName,
        ) -> Result<TableStatus, DomainError> {
            Ok(TableStatus::Existing)
        }

        async fn find_by_id(
            &self,
            _table: &TableName,
            _id: &DocumentId,
        ) -> Result<Option<JsonDocument>, DomainError> {
            Ok(None)
        }

        async fn update(
            &self,
            _table: &TableName,
            _id: &DocumentId,
            _document: JsonDocument,
        ) -> Result<u64, DomainError> {
            Ok(0)
        }
    }

    fn query(table: &str) -> ListDocumentsQuery {
        ListDocumentsQuery {
            table: table.to_string(),
        }
    }

    #[tokio::test]
    async fn empty_table_lists_nothing() {
        let store = Arc::new(crate::adapters::memory::InMemoryDocumentStore::new());
        store
            .create_table_if_necessary(&TableName::new("people").unwrap())
            .await
            .unwrap();

        let docs = ListDocumentsHandler::new(store).handle(query("people")).await.unwrap();
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn store_failures_become_infrastructure_errors() {
        let handler = ListDocumentsHandler::new(Arc::new(FailingStore));
        let err = handler.handle(query("people")).await.unwrap_err();

        assert!(matches!(err, DocumentError::Infrastructure(ref m) if m.contains("Simulated")));
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }

    #[tokio::test]
    async fn invalid_table_is_rejected() {
        let handler = ListDocumentsHandler::new(Arc::new(FailingStore));
        let err = handler.handle(query("")).await.unwrap_err();
        assert!(matches!(err, DocumentError::InvalidTable(_)));
    }
}
