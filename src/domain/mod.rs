//! Domain layer containing the document types and their rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (table name, ids, errors)
//! - `document` - JSON documents, id stamping, use-case errors

pub mod document;
pub mod foundation;
