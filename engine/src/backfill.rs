//! Delta backfill
//!
//! Fast-end events recorded before the delta scheme existed have no
//! `delta_minutes` or eating window snapshot. The backfill walks adjacent
//! start/end pairs and fills in whatever is missing. Events that already
//! carry both values are left untouched, so running it again is a no-op.

use crate::errors::EngineResult;
use crate::models::FastingEvent;
use crate::pairing::adjacent_intervals;
use crate::streaks::MINUTES_PER_DAY;
use crate::validation::validate_eating_window_hours;
use tracing::{debug, info};
use uuid::Uuid;

/// Result of a backfill run
#[derive(Debug, Clone, PartialEq)]
pub struct BackfillOutcome {
    /// Full history, oldest first, with missing values filled in
    pub events: Vec<FastingEvent>,
    /// Ids of the events that changed, in chronological order
    pub updated_ids: Vec<Uuid>,
}

impl BackfillOutcome {
    pub fn updated_count(&self) -> usize {
        self.updated_ids.len()
    }

    /// Only the events the caller needs to persist
    pub fn updated_events(&self) -> impl Iterator<Item = &FastingEvent> {
        self.events
            .iter()
            .filter(move |e| self.updated_ids.contains(&e.id))
    }
}

/// Populate delta and eating window snapshot on every fast-end that lacks them
///
/// A fast-end that already has a snapshot keeps it and its delta is computed
/// against that snapshot; otherwise the current `eating_window_hours` applies.
pub fn backfill_delta_minutes(
    events: &[FastingEvent],
    eating_window_hours: i32,
) -> EngineResult<BackfillOutcome> {
    validate_eating_window_hours(eating_window_hours)?;

    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.timestamp);

    let intervals = {
        let refs: Vec<&FastingEvent> = sorted.iter().collect();
        adjacent_intervals(&refs)
    };

    let current_window_minutes = eating_window_hours.saturating_mul(60);
    let mut updated_ids = Vec::new();

    for interval in intervals {
        let end = &mut sorted[interval.end_index];
        if end.delta_minutes.is_some() && end.eating_window_minutes.is_some() {
            continue;
        }

        let window_minutes = end.eating_window_minutes.unwrap_or(current_window_minutes);
        let target = (MINUTES_PER_DAY - i64::from(window_minutes)).max(0);
        let delta = (interval.minutes - target).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;

        debug!(
            id = %end.id,
            fast_minutes = interval.minutes,
            target,
            delta,
            "Backfilling fast end"
        );

        end.delta_minutes.get_or_insert(delta);
        end.eating_window_minutes.get_or_insert(window_minutes);
        updated_ids.push(end.id);
    }

    info!(
        updated = updated_ids.len(),
        "Updated fasting records with delta_minutes and eating_window_minutes values"
    );

    Ok(BackfillOutcome {
        events: sorted,
        updated_ids,
    })
}
