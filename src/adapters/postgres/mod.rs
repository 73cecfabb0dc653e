//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresQueryExecutor` - `DocumentStore` over dynamic per-table SQL
//! - `JsonColumnConverter` - JSON column to/from `JsonDocument`

mod json_converter;
mod query_executor;
pub mod sql;

pub use json_converter::{JsonColumnConverter, JSON_COLUMN};
pub use query_executor::PostgresQueryExecutor;
