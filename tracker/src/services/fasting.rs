//! Fasting toggle

use crate::config::TrackerConfig;
use crate::error::TrackerResult;
use crate::repositories::{FastingStore, SettingsStore};
use crate::services::effective_settings;
use chrono::NaiveDateTime;
use sleepfast_engine::{begin_fast, end_fast, FastingEvent};
use tracing::{info, warn};

fn currently_fasting(history: &[FastingEvent]) -> bool {
    history
        .iter()
        .max_by_key(|e| e.timestamp)
        .is_some_and(|e| e.is_fast_start)
}

pub struct FastingService;

impl FastingService {
    /// Whether the most recent event is a fast-start
    pub async fn is_fasting<S>(store: &S) -> TrackerResult<bool>
    where
        S: FastingStore + ?Sized,
    {
        let events = store.all_fasting_events().await?;
        Ok(currently_fasting(&events))
    }

    /// Start a fast, or end the current one, at `now`
    ///
    /// Ending a fast is rejected with `FastEndRejected` when another fast
    /// already ended today, unless the current fast is a multi-day one.
    pub async fn toggle<S>(
        store: &S,
        config: &TrackerConfig,
        now: NaiveDateTime,
    ) -> TrackerResult<FastingEvent>
    where
        S: FastingStore + SettingsStore + ?Sized,
    {
        let history = store.all_fasting_events().await?;
        let event = if currently_fasting(&history) {
            let settings = effective_settings(store, config).await?;
            end_fast(&history, now, settings.eating_window_hours).map_err(|e| {
                warn!(error = %e, "Fast end rejected");
                e
            })?
        } else {
            begin_fast(now)
        };

        store.insert_fasting_event(event.clone()).await?;
        info!(
            id = %event.id,
            is_fast_start = event.is_fast_start,
            delta_minutes = ?event.delta_minutes,
            "Fasting state changed"
        );

        Ok(event)
    }
}
