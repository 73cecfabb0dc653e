//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - `DocumentStore` over a sqlx Postgres pool
//! - `memory` - `DocumentStore` held in process memory
//! - `http` - axum REST surface over the application handlers

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemoryDocumentStore;
pub use postgres::{JsonColumnConverter, PostgresQueryExecutor};
