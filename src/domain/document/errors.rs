//! Document-specific error types.

use crate::domain::foundation::{DocumentId, DomainError, ErrorCode, TableName, ValidationError};

/// Errors surfaced by the document use cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// Table name failed validation.
    InvalidTable(ValidationError),
    /// Document id is not a UUID.
    InvalidId(ValidationError),
    /// Payload is not a JSON object.
    InvalidDocument(ValidationError),
    /// Table does not exist.
    TableNotFound(TableName),
    /// No row with this id.
    NotFound { table: TableName, id: DocumentId },
    /// Infrastructure error.
    Infrastructure(String),
}

impl DocumentError {
    pub fn not_found(table: TableName, id: DocumentId) -> Self {
        DocumentError::NotFound { table, id }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        DocumentError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DocumentError::InvalidTable(_) => ErrorCode::InvalidTableName,
            DocumentError::InvalidId(_) => ErrorCode::InvalidDocumentId,
            DocumentError::InvalidDocument(_) => ErrorCode::InvalidDocument,
            DocumentError::TableNotFound(_) => ErrorCode::TableNotFound,
            DocumentError::NotFound { .. } => ErrorCode::DocumentNotFound,
            DocumentError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            DocumentError::InvalidTable(e) => format!("Invalid table name: {}", e),
            DocumentError::InvalidId(e) => format!("Invalid document id: {}", e),
            DocumentError::InvalidDocument(e) => format!("Invalid document: {}", e),
            DocumentError::TableNotFound(table) => format!("Table not found: {}", table),
            DocumentError::NotFound { table, id } => {
                format!("Document not found: {}/{}", table, id)
            }
            DocumentError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DocumentError {}

impl From<DomainError> for DocumentError {
    fn from(err: DomainError) -> Self {
        let table = err
            .details
            .get("table")
            .and_then(|t| TableName::new(t.as_str()).ok());

        match (err.code, table) {
            (ErrorCode::TableNotFound, Some(table)) => DocumentError::TableNotFound(table),
            _ => DocumentError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> TableName {
        TableName::new("people").unwrap()
    }

    #[test]
    fn table_not_found_domain_error_keeps_table() {
        let err: DocumentError = DomainError::table_not_found("people").into();
        assert_eq!(err, DocumentError::TableNotFound(people()));
        assert_eq!(err.code(), ErrorCode::TableNotFound);
    }

    #[test]
    fn other_domain_errors_become_infrastructure() {
        let err: DocumentError = DomainError::database("people", "connection reset").into();
        assert!(matches!(err, DocumentError::Infrastructure(ref m) if m.contains("connection reset")));
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }

    #[test]
    fn not_found_message_names_table_and_id() {
        let id = DocumentId::new();
        let err = DocumentError::not_found(people(), id);
        assert_eq!(err.message(), format!("Document not found: people/{}", id));
        assert_eq!(err.code(), ErrorCode::DocumentNotFound);
    }
}
