//! Document store behavior switches

use serde::Deserialize;

/// Flags that change how documents are written.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Overwrite `data.id` with the path id on every update
    #[serde(default)]
    pub force_id_in_update: bool,

    /// Create the target table on first insert
    #[serde(default = "default_create_tables_on_write")]
    pub create_tables_on_write: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            force_id_in_update: false,
            create_tables_on_write: default_create_tables_on_write(),
        }
    }
}

fn default_create_tables_on_write() -> bool {
    true
}
