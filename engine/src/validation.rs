//! Input validation functions
//!
//! The engine only rejects numbers that can never be meaningful: negative
//! values and NaN/infinity. Everything else in a record history is absorbed
//! by the algorithms themselves.

use crate::errors::{EngineError, EngineResult};

/// Validate eating window (hours per day)
///
/// Windows of 24 hours or more are a configuration problem the caller must
/// prevent; they are not rejected here.
pub fn validate_eating_window_hours(hours: i32) -> EngineResult<()> {
    if hours < 0 {
        return Err(EngineError::InvalidInput(format!(
            "Eating window cannot be negative (got {} hours)",
            hours
        )));
    }
    Ok(())
}

/// Validate a metric value fed to achievement matching
pub fn validate_metric_value(value: f64) -> EngineResult<()> {
    if value.is_nan() || value.is_infinite() {
        return Err(EngineError::InvalidInput(
            "Metric value must be a valid number".to_string(),
        ));
    }
    if value < 0.0 {
        return Err(EngineError::InvalidInput(format!(
            "Metric value cannot be negative (got {})",
            value
        )));
    }
    Ok(())
}

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> EngineResult<()> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err(EngineError::InvalidInput(
            "Height must be a valid number".to_string(),
        ));
    }
    if height_cm < 0.0 {
        return Err(EngineError::InvalidInput("Height cannot be negative".to_string()));
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> EngineResult<()> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err(EngineError::InvalidInput(
            "Weight must be a valid number".to_string(),
        ));
    }
    if weight_kg < 0.0 {
        return Err(EngineError::InvalidInput("Weight cannot be negative".to_string()));
    }
    Ok(())
}
