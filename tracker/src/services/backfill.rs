//! Delta backfill over stored fasting history

use crate::config::TrackerConfig;
use crate::error::TrackerResult;
use crate::repositories::{FastingStore, SettingsStore};
use crate::services::effective_settings;
use sleepfast_engine::{backfill_delta_minutes, FastingEvent};
use tracing::info;

pub struct BackfillService;

impl BackfillService {
    /// Fill in missing deltas and persist only the events that changed
    ///
    /// Returns the number of updated events.
    pub async fn run<S>(store: &S, config: &TrackerConfig) -> TrackerResult<usize>
    where
        S: FastingStore + SettingsStore + ?Sized,
    {
        let settings = effective_settings(store, config).await?;
        let events = store.all_fasting_events().await?;

        let outcome = backfill_delta_minutes(&events, settings.eating_window_hours)?;
        if outcome.updated_count() == 0 {
            info!("No fasting records need a delta backfill");
            return Ok(0);
        }

        let updated: Vec<FastingEvent> = outcome.updated_events().cloned().collect();
        store.update_fasting_events(&updated).await?;

        Ok(outcome.updated_count())
    }
}
