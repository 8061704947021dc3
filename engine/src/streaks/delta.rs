//! Delta-compensated fasting streak
//!
//! Each fast-end event carries `delta_minutes`, the signed difference between
//! the actual fast and the target window. Deltas are summed per calendar day
//! and walked oldest first with a running balance:
//!
//! - a day counts while the balance stays non-negative, so banked surplus can
//!   cover a later short fast;
//! - a day with no record at all is charged the full target window;
//! - as soon as the balance goes negative both streak and balance reset.
//!
//! The streak reported is the one standing after the most recent day.

use crate::errors::EngineResult;
use crate::models::{BucketOrigin, DayBucket, FastingEvent};
use crate::streaks::multi_day::synthesize_multi_day_fasts;
use crate::streaks::target_fasting_minutes;
use crate::validation::validate_eating_window_hours;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

/// Per-day buckets, oldest first
///
/// Real buckets sum the deltas of every fast-end on that date (missing deltas
/// count as 0); virtual buckets fill the days inside multi-day fasts.
pub fn build_day_buckets(events: &[FastingEvent], target_fasting_minutes: i64) -> Vec<DayBucket> {
    let mut buckets: BTreeMap<NaiveDate, DayBucket> = BTreeMap::new();

    for event in events.iter().filter(|e| e.is_fast_end()) {
        let date = event.date();
        let delta = i64::from(event.delta_minutes.unwrap_or(0));
        buckets
            .entry(date)
            .and_modify(|b| b.net_delta_minutes += delta)
            .or_insert(DayBucket {
                date,
                net_delta_minutes: delta,
                origin: BucketOrigin::Recorded,
            });
    }

    let synthesized = synthesize_multi_day_fasts(events, target_fasting_minutes, &buckets);
    buckets.extend(synthesized);

    buckets.into_values().collect()
}

/// Running balance walk over day buckets
fn walk_buckets(buckets: &[DayBucket], target_fasting_minutes: i64) -> u32 {
    let mut streak: u32 = 0;
    let mut cumulative_delta: i64 = 0;
    let mut previous: Option<NaiveDate> = None;

    for bucket in buckets {
        if let Some(prev) = previous.filter(|_| streak > 0) {
            let missing_days = (bucket.date - prev).num_days() - 1;
            if missing_days > 0 {
                let penalty = missing_days * target_fasting_minutes;
                cumulative_delta -= penalty;
                debug!(
                    missing_days,
                    penalty,
                    cumulative_delta,
                    date = %bucket.date,
                    "Missing days penalized"
                );

                if cumulative_delta < 0 {
                    debug!(date = %bucket.date, "Streak broken by missing days");
                    streak = 0;
                    cumulative_delta = 0;
                }
            }
        }

        cumulative_delta += bucket.net_delta_minutes;

        if cumulative_delta >= 0 {
            streak += 1;
        } else {
            streak = 0;
            cumulative_delta = 0;
        }

        debug!(
            date = %bucket.date,
            delta = bucket.net_delta_minutes,
            origin = ?bucket.origin,
            cumulative_delta,
            streak,
            "Day processed"
        );

        previous = Some(bucket.date);
    }

    streak
}

/// Fasting streak with delta compensation
pub fn calculate_fasting_streak_with_delta(
    events: &[FastingEvent],
    eating_window_hours: i32,
) -> EngineResult<u32> {
    validate_eating_window_hours(eating_window_hours)?;

    if events.is_empty() {
        return Ok(0);
    }

    let target = target_fasting_minutes(eating_window_hours);
    let buckets = build_day_buckets(events, target);

    Ok(walk_buckets(&buckets, target))
}
