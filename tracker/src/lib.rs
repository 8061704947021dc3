//! Sleep Fast Tracker
//!
//! Caller-side wiring around the engine: storage traits, an in-memory store,
//! configuration, logging setup and the services that load history, run the
//! engine and persist what it returns.

pub mod config;
pub mod error;
pub mod repositories;
pub mod services;
pub mod telemetry;

pub use error::{TrackerError, TrackerResult};
