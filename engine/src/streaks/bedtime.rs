//! Bedtime streak
//!
//! The streak is tied to calendar days, not to the number of answers: an
//! on-time answer followed by days of silence keeps counting up to today as
//! long as no "not on time" answer comes in between.

use crate::models::SleepEvent;
use chrono::{Local, NaiveDate};
use tracing::debug;

/// Bedtime streak as of the local calendar date
pub fn calculate_bedtime_streak(events: &[SleepEvent]) -> u32 {
    calculate_bedtime_streak_on(events, Local::now().date_naive())
}

/// Bedtime streak as of `today`
///
/// 0 when there are no answers or the latest one is not on time. Otherwise 1
/// for the latest answer plus the number of calendar days between the oldest
/// answer of the unbroken on-time run and `today`.
pub fn calculate_bedtime_streak_on(events: &[SleepEvent], today: NaiveDate) -> u32 {
    let mut newest_first: Vec<&SleepEvent> = events.iter().collect();
    newest_first.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let Some(latest) = newest_first.first() else {
        return 0;
    };
    if !latest.on_time {
        return 0;
    }

    let oldest_in_run = newest_first
        .iter()
        .take_while(|e| e.on_time)
        .last()
        .map(|e| e.timestamp.date())
        .unwrap_or_else(|| latest.timestamp.date());

    // Answers dated after `today` (clock changes) must not shrink the streak below 1
    let additional_days = (today - oldest_in_run).num_days().max(0);

    debug!(
        oldest = %oldest_in_run,
        %today,
        additional_days,
        "Bedtime streak run"
    );

    1 + u32::try_from(additional_days).unwrap_or(u32::MAX - 1)
}

/// Whether the bedtime question has already been answered on `date`
pub fn has_answered_bedtime_on(events: &[SleepEvent], date: NaiveDate) -> bool {
    events.iter().any(|e| e.timestamp.date() == date)
}
