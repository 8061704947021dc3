//! Sleep Fast Tracker Engine
//!
//! Pure, deterministic computations that turn timestamped fasting, sleep and
//! weight records into streak counts and achievement state. Nothing in this
//! crate performs I/O: callers load the history, invoke the engine and persist
//! whatever it hands back.

pub mod achievements;
pub mod analytics;
pub mod backfill;
pub mod errors;
pub mod health_metrics;
pub mod models;
pub mod pairing;
pub mod progress;
pub mod streaks;
pub mod transitions;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::*;

pub use achievements::{
    assess_catalog, check_and_unlock, default_catalog, ensure_catalog, generate_weight_goals,
    replace_weight_goals, total_points, CatalogStatus,
};
pub use analytics::{
    bmi_series, fasting_completion_rate, sleep_adherence, weight_deltas, weight_difference_kg,
    SleepAdherence, SleepTrend, WeightDelta,
};
pub use backfill::{backfill_delta_minutes, BackfillOutcome};
pub use health_metrics::{
    calculate_bmi, current_weight_loss_kg, max_weight_loss_kg, perfect_weight_kg,
};
pub use progress::{evaluate_progress, overall_score, BestStreaks, ProgressInputs, ProgressSnapshot};
pub use streaks::{
    calculate_bedtime_streak, calculate_bedtime_streak_on, calculate_fasting_streak,
    calculate_fasting_streak_with_delta, has_answered_bedtime_on, target_fasting_minutes,
};
pub use transitions::{begin_fast, end_fast, validate_fast_end};
