//! Services
//!
//! Each service loads what it needs from the stores, hands it to the engine
//! and persists only what the engine reports as changed.

pub mod achievements;
pub mod backfill;
pub mod fasting;
pub mod sleep;
pub mod streaks;

pub use achievements::AchievementService;
pub use backfill::BackfillService;
pub use fasting::FastingService;
pub use sleep::SleepService;
pub use streaks::StreakService;

use crate::config::TrackerConfig;
use crate::error::TrackerResult;
use crate::repositories::SettingsStore;
use sleepfast_engine::UserSettings;
use tracing::debug;

/// Saved settings, or defaults with the configured eating window
pub(crate) async fn effective_settings<S>(
    store: &S,
    config: &TrackerConfig,
) -> TrackerResult<UserSettings>
where
    S: SettingsStore + ?Sized,
{
    match store.settings().await? {
        Some(settings) => Ok(settings),
        None => {
            debug!(
                eating_window_hours = config.fasting.default_eating_window_hours,
                "No saved settings, using defaults"
            );
            Ok(UserSettings {
                eating_window_hours: config.fasting.default_eating_window_hours,
                ..UserSettings::default()
            })
        }
    }
}
