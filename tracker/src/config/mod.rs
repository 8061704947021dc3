//! Configuration management for the tracker
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: SFT__)

use serde::{Deserialize, Serialize};
use std::env;

/// Tracker configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    pub fasting: FastingConfig,
    pub logging: LoggingConfig,
}

/// Fasting configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastingConfig {
    /// Eating window used when the user has not saved any settings yet
    pub default_eating_window_hours: i32,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, overridden by `RUST_LOG`
    pub filter: String,
    /// Emit JSON lines instead of the pretty format
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        if TrackerConfig::is_production() {
            Self {
                filter: "sleepfast_tracker=info,sleepfast_engine=info".to_string(),
                json: true,
            }
        } else {
            Self {
                filter: "sleepfast_tracker=debug,sleepfast_engine=debug".to_string(),
                json: false,
            }
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            fasting: FastingConfig {
                default_eating_window_hours: 8,
            },
            logging: LoggingConfig::default(),
        }
    }
}

impl TrackerConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with SFT__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&TrackerConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g. SFT__FASTING__DEFAULT_EATING_WINDOW_HOURS=6
            .add_source(config::Environment::with_prefix("SFT").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
