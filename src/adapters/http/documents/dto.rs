//! HTTP DTOs for document endpoints.
//!
//! Documents themselves go over the wire as the bare JSON object; only
//! command acknowledgements and errors get dedicated shapes.

use serde::Serialize;

use crate::application::UpdateDocumentResult;
use crate::domain::document::DocumentError;

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for a successful update.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateDocumentResponse {
    pub id: String,
    pub rows_updated: u64,
}

impl From<UpdateDocumentResult> for UpdateDocumentResponse {
    fn from(result: UpdateDocumentResult) -> Self {
        Self {
            id: result.id.to_string(),
            rows_updated: result.rows_updated,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&DocumentError> for ErrorResponse {
    fn from(error: &DocumentError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.message(),
            details: None,
        }
    }
}
