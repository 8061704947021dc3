//! Legacy duration-threshold fasting streak
//!
//! A completed fast counts when it lasted at least
//! `24h - eating window - 30 minutes`. Pairs are walked newest first and the
//! first fast that falls short ends the count.

use crate::errors::EngineResult;
use crate::models::FastingEvent;
use crate::pairing::completed_fasts_newest_first;
use crate::validation::validate_eating_window_hours;
use tracing::debug;

/// Grace period subtracted from the target before a fast counts as failed
const GRACE_MINUTES: f64 = 30.0;

/// Minimum length of a successful fast in whole minutes
pub fn min_successful_fast_minutes(eating_window_hours: i32) -> i64 {
    let hours = 24.0 - f64::from(eating_window_hours) - GRACE_MINUTES / 60.0;
    (hours * 60.0) as i64
}

/// Count consecutive successful fasts going back from the newest record
///
/// If the newest record is a fast start (currently fasting) it neither breaks
/// nor extends the streak. Two records with the same state in a row are
/// stepped over.
pub fn calculate_fasting_streak(
    events: &[FastingEvent],
    eating_window_hours: i32,
) -> EngineResult<u32> {
    validate_eating_window_hours(eating_window_hours)?;

    let min_minutes = min_successful_fast_minutes(eating_window_hours);
    let fasts = completed_fasts_newest_first(events);
    let streak = fasts.iter().take_while(|&&minutes| minutes >= min_minutes).count();

    if let Some(short) = fasts.get(streak) {
        debug!(duration = *short, min_minutes, "Fast too short, streak ends");
    }

    Ok(u32::try_from(streak).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EngineError;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn fast(start: NaiveDateTime, end: NaiveDateTime) -> Vec<FastingEvent> {
        vec![FastingEvent::fast_start(start), FastingEvent::fast_end(end)]
    }

    #[test]
    fn test_min_successful_fast_minutes() {
        assert_eq!(min_successful_fast_minutes(6), 1050);
        assert_eq!(min_successful_fast_minutes(8), 930);
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(calculate_fasting_streak(&[], 6), Ok(0));
    }

    #[test]
    fn test_consecutive_successful_fasts() {
        let mut events = fast(at(1, 20, 0), at(2, 14, 0));
        events.extend(fast(at(2, 20, 0), at(3, 14, 0)));
        events.extend(fast(at(3, 20, 0), at(4, 14, 0)));
        assert_eq!(calculate_fasting_streak(&events, 6), Ok(3));
    }

    #[test]
    fn test_grace_period_allows_slightly_short_fast() {
        // 17h30 against an 18h target
        let events = fast(at(1, 20, 0), at(2, 13, 30));
        assert_eq!(calculate_fasting_streak(&events, 6), Ok(1));

        let events = fast(at(1, 20, 0), at(2, 13, 29));
        assert_eq!(calculate_fasting_streak(&events, 6), Ok(0));
    }

    #[test]
    fn test_short_fast_breaks_older_streak() {
        let mut events = fast(at(1, 20, 0), at(2, 14, 0));
        events.extend(fast(at(2, 20, 0), at(3, 8, 0)));
        events.extend(fast(at(3, 20, 0), at(4, 14, 0)));
        assert_eq!(calculate_fasting_streak(&events, 6), Ok(1));
    }

    #[test]
    fn test_current_fast_does_not_break_streak() {
        let mut events = fast(at(1, 20, 0), at(2, 14, 0));
        events.push(FastingEvent::fast_start(at(2, 20, 0)));
        assert_eq!(calculate_fasting_streak(&events, 6), Ok(1));
    }

    #[test]
    fn test_duplicate_end_is_skipped() {
        let mut events = fast(at(1, 20, 0), at(2, 14, 0));
        events.push(FastingEvent::fast_end(at(2, 15, 0)));
        assert_eq!(calculate_fasting_streak(&events, 6), Ok(1));
    }

    #[test]
    fn test_negative_window_rejected() {
        assert!(matches!(
            calculate_fasting_streak(&[], -1),
            Err(EngineError::InvalidInput(_))
        ));
    }
}
