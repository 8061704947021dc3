//! Multi-day fast synthesis
//!
//! A fast that lasts at least two full fasting windows covers days that have
//! no fast-end of their own. Those days are filled with zero-delta buckets so
//! the delta streak treats them as exactly on target instead of missed.
//!
//! Example with an 18 hour target: Jan 1 20:00 to Jan 4 14:00 is 66 hours,
//! three full windows. Jan 4 carries the real delta from its fast-end event;
//! Jan 3 and Jan 2 get virtual buckets.

use crate::models::{BucketOrigin, DayBucket, FastingEvent};
use crate::pairing::{sort_chronologically, spanning_intervals};
use chrono::{Days, NaiveDate};
use std::collections::BTreeMap;
use tracing::debug;

/// Virtual buckets for days inside multi-day fasts
///
/// Dates already present in `recorded` are left alone. Returns only the new
/// synthesized buckets.
///
/// Virtual dates are counted back from the fast-end's date, one per full
/// window after the first. With a small target window this reaches past the
/// fast's own start date.
pub fn synthesize_multi_day_fasts(
    events: &[FastingEvent],
    target_fasting_minutes: i64,
    recorded: &BTreeMap<NaiveDate, DayBucket>,
) -> BTreeMap<NaiveDate, DayBucket> {
    let mut synthesized = BTreeMap::new();

    if target_fasting_minutes <= 0 {
        debug!("No fasting window configured, skipping multi-day synthesis");
        return synthesized;
    }

    let sorted = sort_chronologically(events);

    for interval in spanning_intervals(&sorted) {
        let full_windows = interval.minutes / target_fasting_minutes;
        if full_windows < 2 {
            continue;
        }

        let start = sorted[interval.start_index].timestamp;
        let end = sorted[interval.end_index].timestamp;
        debug!(%start, %end, full_windows, "Multi-day fast");

        let end_date = end.date();
        for day in 1..full_windows {
            let Some(virtual_date) = end_date.checked_sub_days(Days::new(day as u64)) else {
                break;
            };
            if recorded.contains_key(&virtual_date) || synthesized.contains_key(&virtual_date) {
                continue;
            }
            synthesized.insert(
                virtual_date,
                DayBucket {
                    date: virtual_date,
                    net_delta_minutes: 0,
                    origin: BucketOrigin::Synthesized,
                },
            );
        }
    }

    synthesized
}
