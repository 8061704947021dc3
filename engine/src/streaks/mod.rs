//! Streak calculators
//!
//! - [`bedtime`]: consecutive on-time bedtimes ending today
//! - [`fasting`]: legacy duration-threshold fasting streak
//! - [`delta`]: delta-compensated fasting streak (the primary one)
//! - [`multi_day`]: virtual days for fasts spanning several fasting windows

pub mod bedtime;
pub mod delta;
pub mod fasting;
pub mod multi_day;

pub use bedtime::{calculate_bedtime_streak, calculate_bedtime_streak_on, has_answered_bedtime_on};
pub use delta::{build_day_buckets, calculate_fasting_streak_with_delta};
pub use fasting::calculate_fasting_streak;
pub use multi_day::synthesize_multi_day_fasts;

/// Minutes in a day
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Target fasting window in minutes: 24 hours minus the eating window
///
/// Floored at zero so an eating window of 24 hours or more yields an empty
/// target rather than a negative one.
pub fn target_fasting_minutes(eating_window_hours: i32) -> i64 {
    (MINUTES_PER_DAY - i64::from(eating_window_hours) * 60).max(0)
}
