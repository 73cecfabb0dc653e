//! CreateDocumentHandler - Command handler for inserting documents.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::domain::document::{DocumentError, JsonDocument, TableStatus};
use crate::domain::foundation::TableName;
use crate::ports::DocumentStore;

/// Command to insert a JSON object into a table.
#[derive(Debug, Clone)]
pub struct CreateDocumentCommand {
    pub table: String,
    pub data: Value,
}

/// Result of a successful insert.
#[derive(Debug, Clone)]
pub struct CreateDocumentResult {
    pub document: JsonDocument,
    pub table_created: bool,
}

/// Handler for inserting documents.
pub struct CreateDocumentHandler {
    store: Arc<dyn DocumentStore>,
    create_tables: bool,
}

impl CreateDocumentHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            create_tables: true,
        }
    }

    /// Whether a missing table is created before the insert.
    pub fn with_table_creation(mut self, enabled: bool) -> Self {
        self.create_tables = enabled;
        self
    }

    pub async fn handle(
        &self,
        cmd: CreateDocumentCommand,
    ) -> Result<CreateDocumentResult, DocumentError> {
        let table = TableName::new(cmd.table).map_err(DocumentError::InvalidTable)?;
        let document = JsonDocument::from_value(cmd.data).map_err(DocumentError::InvalidDocument)?;

        let mut table_created = false;
        if self.create_tables {
            let status = self.store.create_table_if_necessary(&table).await?;
            if status == TableStatus::Created {
                info!(table = %table, "table created on first write");
                table_created = true;
            }
        }

        let document = self.store.save(&table, document).await?;

        Ok(CreateDocumentResult {
            document,
            table_created,
        })
    }
}
