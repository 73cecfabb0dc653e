//! Foundation module - Shared domain primitives.
//!
//! Identifiers, the validated table name, and the error types every
//! layer speaks.

mod errors;
mod ids;
mod table_name;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::DocumentId;
pub use table_name::{TableName, MAX_TABLE_NAME_LEN};
