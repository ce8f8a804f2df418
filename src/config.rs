//! Configuration management for Library Desk

use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;
use validator::Validate;

use crate::error::AppResult;
use crate::models::LoanPolicy;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
    /// Write logs to a file in this directory instead of stderr
    pub directory: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    /// Register the demo member and book at startup
    pub seed_demo_data: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub loans: LoanPolicy,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> AppResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // LIBRARY_DESK__LOANS__DURATION_DAYS=21
            .add_source(
                Environment::with_prefix("LIBRARY_DESK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("logging.level", env::var("LOG_LEVEL").ok())?
            .build()?;

        Self::from_config(config)
    }

    /// Deserialize a built configuration and reject loan periods the
    /// calendar arithmetic cannot handle.
    pub fn from_config(config: Config) -> AppResult<Self> {
        let app: Self = config.try_deserialize()?;
        app.loans.validate()?;
        Ok(app)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            directory: None,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
        }
    }
}
