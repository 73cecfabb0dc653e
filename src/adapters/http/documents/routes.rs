//! HTTP routes for document endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_document, get_document, list_documents, update_document, DocumentHandlers,
};

/// Creates the document router, meant to be nested under `/api`.
///
/// # Routes
///
/// - `GET /:table` - List every document
/// - `POST /:table` - Insert a document
/// - `GET /:table/:id` - Fetch one document
/// - `PUT /:table/:id` - Replace one document
pub fn document_routes(handlers: DocumentHandlers) -> Router {
    Router::new()
        .route("/:table", get(list_documents).post(create_document))
        .route("/:table/:id", get(get_document).put(update_document))
        .with_state(handlers)
}
