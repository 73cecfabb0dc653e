//! Document module - JSON objects stored one per row.

mod json_document;
mod errors;

pub use json_document::{JsonDocument, TableStatus, ID_FIELD};
pub use errors::DocumentError;
