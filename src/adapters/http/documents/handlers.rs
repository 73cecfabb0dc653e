//! HTTP handlers for document endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::application::{
    CreateDocumentCommand, CreateDocumentHandler, GetDocumentHandler, GetDocumentQuery,
    ListDocumentsHandler, ListDocumentsQuery, UpdateDocumentCommand, UpdateDocumentHandler,
};
use crate::config::StoreConfig;
use crate::domain::document::DocumentError;
use crate::domain::foundation::ValidationError;
use crate::ports::DocumentStore;

use super::dto::{ErrorResponse, UpdateDocumentResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct DocumentHandlers {
    create_handler: Arc<CreateDocumentHandler>,
    get_handler: Arc<GetDocumentHandler>,
    list_handler: Arc<ListDocumentsHandler>,
    update_handler: Arc<UpdateDocumentHandler>,
}

impl DocumentHandlers {
    pub fn new(
        create_handler: Arc<CreateDocumentHandler>,
        get_handler: Arc<GetDocumentHandler>,
        list_handler: Arc<ListDocumentsHandler>,
        update_handler: Arc<UpdateDocumentHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            list_handler,
            update_handler,
        }
    }

    /// Wires every handler to one store.
    pub fn from_store(store: Arc<dyn DocumentStore>, config: &StoreConfig) -> Self {
        Self::new(
            Arc::new(
                CreateDocumentHandler::new(store.clone())
                    .with_table_creation(config.create_tables_on_write),
            ),
            Arc::new(GetDocumentHandler::new(store.clone())),
            Arc::new(ListDocumentsHandler::new(store.clone())),
            Arc::new(UpdateDocumentHandler::new(store)),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/:table - List every document
pub async fn list_documents(
    State(handlers): State<DocumentHandlers>,
    Path(table): Path<String>,
) -> Response {
    match handlers.list_handler.handle(ListDocumentsQuery { table }).await {
        Ok(documents) => (StatusCode::OK, Json(documents)).into_response(),
        Err(e) => handle_document_error(e),
    }
}

/// POST /api/:table - Insert a document, creating the table if needed
pub async fn create_document(
    State(handlers): State<DocumentHandlers>,
    Path(table): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let data = match json_body(body) {
        Ok(data) => data,
        Err(e) => return handle_document_error(e),
    };
    let cmd = CreateDocumentCommand {
        table: table.clone(),
        data,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(result) => {
            let location = result
                .document
                .id()
                .map(|id| format!("/api/{}/{}", table, id));
            match location {
                Some(location) => (
                    StatusCode::CREATED,
                    [(header::LOCATION, location)],
                    Json(result.document),
                )
                    .into_response(),
                None => (StatusCode::CREATED, Json(result.document)).into_response(),
            }
        }
        Err(e) => handle_document_error(e),
    }
}

/// GET /api/:table/:id - Get one document
pub async fn get_document(
    State(handlers): State<DocumentHandlers>,
    Path((table, id)): Path<(String, String)>,
) -> Response {
    match handlers.get_handler.handle(GetDocumentQuery { table, id }).await {
        Ok(document) => (StatusCode::OK, Json(document)).into_response(),
        Err(e) => handle_document_error(e),
    }
}

/// PUT /api/:table/:id - Replace one document
pub async fn update_document(
    State(handlers): State<DocumentHandlers>,
    Path((table, id)): Path<(String, String)>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let data = match json_body(body) {
        Ok(data) => data,
        Err(e) => return handle_document_error(e),
    };
    let cmd = UpdateDocumentCommand {
        table,
        id,
        data,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(result) if result.rows_updated == 0 => {
            handle_document_error(DocumentError::not_found(result.table, result.id))
        }
        Ok(result) => {
            let response: UpdateDocumentResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_document_error(e),
    }
}

/// GET /health - Liveness check
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Malformed JSON and a missing content type both count as an invalid document.
fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, DocumentError> {
    body.map(|Json(data)| data).map_err(|rejection| {
        DocumentError::InvalidDocument(ValidationError::invalid_format(
            "document",
            rejection.body_text(),
        ))
    })
}

fn handle_document_error(error: DocumentError) -> Response {
    let status = match &error {
        DocumentError::InvalidTable(_)
        | DocumentError::InvalidId(_)
        | DocumentError::InvalidDocument(_) => StatusCode::BAD_REQUEST,
        DocumentError::TableNotFound(_) | DocumentError::NotFound { .. } => StatusCode::NOT_FOUND,
        DocumentError::Infrastructure(msg) => {
            tracing::error!("Document store failure: {}", msg);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Document store unavailable")),
            )
                .into_response();
        }
    };

    (status, Json(ErrorResponse::from(&error))).into_response()
}
