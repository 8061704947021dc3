//! Fasting state transitions
//!
//! Builds the events a caller persists when the user toggles between
//! fasting and eating. Ending a fast is subject to the "one completed fast per
//! calendar day" rule, with an exception for fasts that started before
//! yesterday. This rule is separate from the delta streak, which still sums
//! every fast-end it finds on a date.

use crate::errors::{EngineResult, FastEndRejection};
use crate::models::FastingEvent;
use crate::pairing::minutes_between;
use crate::streaks::target_fasting_minutes;
use crate::validation::validate_eating_window_hours;
use chrono::{Days, NaiveDateTime};
use tracing::debug;

/// Start a fast at `now`
pub fn begin_fast(now: NaiveDateTime) -> FastingEvent {
    FastingEvent::fast_start(now)
}

/// Check whether a fast may be ended at `now`
pub fn validate_fast_end(
    history: &[FastingEvent],
    now: NaiveDateTime,
) -> Result<(), FastEndRejection> {
    let latest = history
        .iter()
        .max_by_key(|e| e.timestamp)
        .filter(|e| e.is_fast_start)
        .ok_or(FastEndRejection::NotFasting)?;

    let today = now.date();
    let is_multi_day = today
        .checked_sub_days(Days::new(1))
        .is_some_and(|yesterday| latest.date() < yesterday);

    if is_multi_day {
        debug!(started = %latest.timestamp, "Multi-day fast detected, allowing end record");
        return Ok(());
    }

    if history.iter().any(|e| e.is_fast_end() && e.date() == today) {
        return Err(FastEndRejection::AlreadyEndedToday);
    }

    Ok(())
}

/// End the current fast at `now`
///
/// The returned event carries the delta against the target window and the
/// eating window in effect, ready to persist.
pub fn end_fast(
    history: &[FastingEvent],
    now: NaiveDateTime,
    eating_window_hours: i32,
) -> EngineResult<FastingEvent> {
    validate_eating_window_hours(eating_window_hours)?;
    validate_fast_end(history, now)?;

    let mut event = FastingEvent::fast_end(now);

    if let Some(start) = history.iter().max_by_key(|e| e.timestamp) {
        let actual = minutes_between(start, &event);
        let target = target_fasting_minutes(eating_window_hours);
        let delta = (actual - target).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        event = event.with_delta(delta, eating_window_hours.saturating_mul(60));
    }

    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EngineError;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_cannot_end_without_fasting() {
        assert_eq!(validate_fast_end(&[], at(2, 12, 0)), Err(FastEndRejection::NotFasting));

        let history = vec![
            FastingEvent::fast_start(at(1, 20, 0)),
            FastingEvent::fast_end(at(2, 12, 0)),
        ];
        assert_eq!(
            validate_fast_end(&history, at(2, 18, 0)),
            Err(FastEndRejection::NotFasting)
        );
    }

    #[test]
    fn test_second_fast_end_same_day_rejected() {
        let history = vec![
            FastingEvent::fast_start(at(1, 20, 0)),
            FastingEvent::fast_end(at(2, 8, 0)),
            FastingEvent::fast_start(at(2, 9, 0)),
        ];
        assert_eq!(
            validate_fast_end(&history, at(2, 21, 0)),
            Err(FastEndRejection::AlreadyEndedToday)
        );
    }

    #[test]
    fn test_multi_day_fast_is_exempt() {
        let history = vec![
            FastingEvent::fast_start(at(1, 7, 0)),
            FastingEvent::fast_end(at(1, 12, 0)),
            FastingEvent::fast_start(at(1, 20, 0)),
        ];
        assert_eq!(validate_fast_end(&history, at(4, 14, 0)), Ok(()));

        let event = end_fast(&history, at(4, 14, 0), 6).unwrap();
        assert_eq!(event.delta_minutes, Some(66 * 60 - 1080));
    }

    #[test]
    fn test_end_fast_computes_delta() {
        let history = vec![FastingEvent::fast_start(at(1, 20, 0))];
        let event = end_fast(&history, at(2, 14, 30), 6).unwrap();

        assert!(event.is_fast_end());
        assert_eq!(event.delta_minutes, Some(30));
        assert_eq!(event.eating_window_minutes, Some(360));
    }

    #[test]
    fn test_end_fast_reports_rejection() {
        let err = end_fast(&[], at(2, 14, 30), 6).unwrap_err();
        assert_eq!(err, EngineError::FastEndRejected(FastEndRejection::NotFasting));
    }

    #[test]
    fn test_begin_fast() {
        let event = begin_fast(at(3, 20, 0));
        assert!(event.is_fast_start);
        assert_eq!(event.delta_minutes, None);
    }
}
