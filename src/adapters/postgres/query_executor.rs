//! PostgreSQL implementation of DocumentStore.
//!
//! Every statement is built per call from the table name; see
//! [`super::sql`] for the text.

use async_trait::async_trait;
use futures::{future, TryStreamExt};
use sqlx::{PgPool, Row};
use tracing::{debug, info, warn};

use super::json_converter::JsonColumnConverter;
use super::sql;
use crate::domain::document::{JsonDocument, TableStatus};
use crate::domain::foundation::{DocumentId, DomainError, TableName};
use crate::ports::DocumentStore;

/// SQLSTATE `undefined_table`
const UNDEFINED_TABLE: &str = "42P01";
/// SQLSTATE `duplicate_table`
const DUPLICATE_TABLE: &str = "42P07";
/// SQLSTATE `unique_violation`
const UNIQUE_VIOLATION: &str = "23505";

/// Executes document queries against a Postgres pool.
#[derive(Clone)]
pub struct PostgresQueryExecutor {
    pool: PgPool,
    converter: JsonColumnConverter,
    force_id_in_update: bool,
}

impl PostgresQueryExecutor {
    pub fn new(pool: PgPool, converter: JsonColumnConverter) -> Self {
        Self {
            pool,
            converter,
            force_id_in_update: false,
        }
    }

    /// When set, `update` rewrites `data.id` to the row id before writing.
    pub fn with_force_id_in_update(mut self, force: bool) -> Self {
        self.force_id_in_update = force;
        self
    }

    pub fn force_id_in_update(&self) -> bool {
        self.force_id_in_update
    }

    async fn create_table(&self, table: &TableName) -> Result<TableStatus, DomainError> {
        let statement = sql::create_table(table);
        debug!(table = %table, "creating table");

        match sqlx::query(&statement).execute(&self.pool).await {
            Ok(_) => {
                info!(table = %table, "created document table");
                Ok(TableStatus::Created)
            }
            Err(e) if lost_create_race(&e) => {
                debug!(table = %table, "table created concurrently");
                Ok(TableStatus::Existing)
            }
            Err(e) => Err(map_sqlx_error(table, "create table", e)),
        }
    }
}

#[async_trait]
impl DocumentStore for PostgresQueryExecutor {
    async fn find_all(&self, table: &TableName) -> Result<Vec<JsonDocument>, DomainError> {
        let statement = sql::select_all(table, self.converter.column_name());
        debug!(table = %table, "fetching all documents");

        sqlx::query(&statement)
            .fetch(&self.pool)
            .map_err(|e| map_sqlx_error(table, "fetch documents", e))
            .and_then(|row| future::ready(self.converter.convert_column(&row)))
            .try_collect()
            .await
    }

    async fn save(
        &self,
        table: &TableName,
        document: JsonDocument,
    ) -> Result<JsonDocument, DomainError> {
        let id = DocumentId::new();
        let document = document.with_id(&id);
        let statement = sql::insert(table, self.converter.column_name());
        debug!(table = %table, id = %id, "inserting document");

        let row = sqlx::query(&statement)
            .bind(id.as_uuid())
            .bind(self.converter.to_column(&document))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(table, "insert document", e))?;

        self.converter.convert_column(&row)
    }

    async fn create_table_if_necessary(
        &self,
        table: &TableName,
    ) -> Result<TableStatus, DomainError> {
        let statement = sql::exists_table(table);

        let row = sqlx::query(&statement)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(table, "check table existence", e))?;

        let existing: Option<String> = row.try_get("to_regclass").map_err(|e| {
            DomainError::database(table.as_str(), format!("Failed to get to_regclass: {}", e))
        })?;

        match existing {
            Some(_) => Ok(TableStatus::Existing),
            None => self.create_table(table).await,
        }
    }

    async fn find_by_id(
        &self,
        table: &TableName,
        id: &DocumentId,
    ) -> Result<Option<JsonDocument>, DomainError> {
        let statement = sql::select_by_id(table, self.converter.column_name());
        debug!(table = %table, id = %id, "fetching document");

        let row = sqlx::query(&statement)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(table, "fetch document", e))?;

        row.map(|row| self.converter.convert_column(&row)).transpose()
    }

    async fn update(
        &self,
        table: &TableName,
        id: &DocumentId,
        document: JsonDocument,
    ) -> Result<u64, DomainError> {
        let document = if self.force_id_in_update {
            document.with_id(id)
        } else {
            document
        };
        let statement = sql::update_by_id(table, self.converter.column_name());
        debug!(table = %table, id = %id, "updating document");

        let result = sqlx::query(&statement)
            .bind(self.converter.to_column(&document))
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(table, "update document", e))?;

        Ok(result.rows_affected())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn sqlstate(error: &sqlx::Error) -> Option<String> {
    error
        .as_database_error()
        .and_then(|db| db.code())
        .map(|code| code.into_owned())
}

/// A concurrent `CREATE TABLE` of the same name fails with `42P07`, or with
/// `23505` on the `pg_type` catalog index when both passed the name check
/// before either committed.
fn lost_create_race(error: &sqlx::Error) -> bool {
    match sqlstate(error).as_deref() {
        Some(DUPLICATE_TABLE) => true,
        Some(UNIQUE_VIOLATION) => error
            .as_database_error()
            .and_then(|db| db.constraint())
            .is_some_and(|constraint| constraint.starts_with("pg_type_")),
        _ => false,
    }
}

fn map_sqlx_error(table: &TableName, action: &str, error: sqlx::Error) -> DomainError {
    if sqlstate(&error).as_deref() == Some(UNDEFINED_TABLE) {
        return DomainError::table_not_found(table.as_str());
    }

    warn!(table = %table, error = %error, "failed to {}", action);
    DomainError::database(table.as_str(), format!("Failed to {}: {}", action, error))
}
