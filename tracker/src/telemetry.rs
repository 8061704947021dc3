//! Logging setup
//!
//! The engine only emits `tracing` events. Applications install a global
//! subscriber once with [`init_tracing`]; tests and embedders can scope one
//! with `tracing::subscriber::with_default` instead.

use crate::config::LoggingConfig;
use crate::error::TrackerResult;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber
///
/// `RUST_LOG` wins over the configured filter. JSON output is meant for log
/// aggregation, the pretty format for development.
pub fn init_tracing(logging: &LoggingConfig) -> TrackerResult<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if logging.json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .map_err(anyhow::Error::from)?;
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()
            .map_err(anyhow::Error::from)?;
    }

    Ok(())
}
