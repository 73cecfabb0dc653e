//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer validates raw input into domain types and coordinates calls
//! to the document store. Following CQRS, command handlers (write) and
//! query handlers (read) are kept apart.

pub mod handlers;

pub use handlers::{
    CreateDocumentCommand, CreateDocumentHandler, CreateDocumentResult, GetDocumentHandler,
    GetDocumentQuery, ListDocumentsHandler, ListDocumentsQuery, UpdateDocumentCommand,
    UpdateDocumentHandler, UpdateDocumentResult,
};
