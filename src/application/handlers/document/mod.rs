//! Document command and query handlers.

mod create_document;
mod get_document;
mod list_documents;
mod update_document;

pub use create_document::{CreateDocumentCommand, CreateDocumentHandler, CreateDocumentResult};
pub use get_document::{GetDocumentHandler, GetDocumentQuery};
pub use list_documents::{ListDocumentsHandler, ListDocumentsQuery};
pub use update_document::{UpdateDocumentCommand, UpdateDocumentHandler, UpdateDocumentResult};
