//! HTTP adapter for document endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, UpdateDocumentResponse};
pub use handlers::{health, DocumentHandlers};
pub use routes::document_routes;
