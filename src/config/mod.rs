//! Application configuration module
//!
//! Configuration is read from environment variables with the `TABLEREST`
//! prefix, using the `config` and `dotenvy` crates. Nested values use a
//! double underscore as separator.
//!
//! # Example
//!
//! ```no_run
//! use tablerest::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod database;
mod error;
mod server;
mod store;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use store::StoreConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Listener, logging and timeouts
    #[serde(default)]
    pub server: ServerConfig,

    /// PostgreSQL connection
    pub database: DatabaseConfig,

    /// Document write behavior
    #[serde(default)]
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file is read first when present. Variables look like:
    ///
    /// - `TABLEREST__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TABLEREST__DATABASE__URL=...` -> `database.url = ...`
    /// - `TABLEREST__STORE__FORCE_ID_IN_UPDATE=true` -> `store.force_id_in_update = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or a value
    /// cannot be parsed into its field type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TABLEREST")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation of every section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "TABLEREST__DATABASE__URL",
        "TABLEREST__SERVER__PORT",
        "TABLEREST__SERVER__ENVIRONMENT",
        "TABLEREST__STORE__FORCE_ID_IN_UPDATE",
        "TABLEREST__STORE__CREATE_TABLES_ON_WRITE",
    ];

    fn set_minimal_env() {
        env::set_var("TABLEREST__DATABASE__URL", "postgresql://test@localhost/test");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(extra: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        set_minimal_env();
        for (key, value) in extra {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn loads_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[]).expect("config should load");

        assert_eq!(config.database.url, "postgresql://test@localhost/test");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn server_and_store_sections_default() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[]).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.store, StoreConfig::default());
    }

    #[test]
    fn missing_database_url_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        assert!(matches!(AppConfig::load(), Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn load_parses_and_validate_checks_semantics() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("TABLEREST__SERVER__PORT", "0")]).expect("port 0 parses");
        assert!(matches!(config.validate(), Err(ValidationError::InvalidPort)));
    }

    #[test]
    fn production_environment_is_detected() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("TABLEREST__SERVER__ENVIRONMENT", "production")]).unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("TABLEREST__SERVER__PORT", "3000")]).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn store_flags_are_read() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("TABLEREST__STORE__FORCE_ID_IN_UPDATE", "true"),
            ("TABLEREST__STORE__CREATE_TABLES_ON_WRITE", "false"),
        ])
        .unwrap();

        assert!(config.store.force_id_in_update);
        assert!(!config.store.create_tables_on_write);
    }
}
