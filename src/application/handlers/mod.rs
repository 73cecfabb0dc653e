//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod document;

pub use document::{
    CreateDocumentCommand, CreateDocumentHandler, CreateDocumentResult, GetDocumentHandler,
    GetDocumentQuery, ListDocumentsHandler, ListDocumentsQuery, UpdateDocumentCommand,
    UpdateDocumentHandler, UpdateDocumentResult,
};
