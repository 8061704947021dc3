//! Streak refresh

use crate::config::TrackerConfig;
use crate::error::TrackerResult;
use crate::repositories::{
    AchievementStore, FastingStore, ProgressStore, SettingsStore, SleepStore, WeightStore,
};
use crate::services::{effective_settings, AchievementService};
use chrono::NaiveDate;
use sleepfast_engine::{evaluate_progress, ProgressInputs, ProgressSnapshot};
use tracing::info;

pub struct StreakService;

impl StreakService {
    /// Recompute streaks and unlock achievements as of `today`
    ///
    /// Persists the newly unlocked achievements and the best streaks when they
    /// changed.
    pub async fn refresh<S>(
        store: &S,
        config: &TrackerConfig,
        today: NaiveDate,
    ) -> TrackerResult<ProgressSnapshot>
    where
        S: FastingStore
            + SleepStore
            + WeightStore
            + SettingsStore
            + AchievementStore
            + ProgressStore
            + ?Sized,
    {
        let settings = effective_settings(store, config).await?;
        let mut catalog = AchievementService::ensure_catalog(store).await?;
        let fasting = store.all_fasting_events().await?;
        let sleep = store.all_sleep_events().await?;
        let weights = store.all_weight_events().await?;
        let best = store.best_streaks().await?;

        let inputs = ProgressInputs {
            fasting: &fasting,
            sleep: &sleep,
            weights: &weights,
            settings: &settings,
            today,
            best,
        };
        let snapshot = evaluate_progress(&inputs, &mut catalog)?;

        if !snapshot.newly_unlocked.is_empty() {
            store.update_achievements(&snapshot.newly_unlocked).await?;
        }
        if snapshot.best != best {
            store.save_best_streaks(snapshot.best).await?;
        }

        info!(
            %today,
            bedtime_streak = snapshot.bedtime_streak,
            fasting_streak = snapshot.fasting_streak,
            overall_score = snapshot.overall_score,
            "Streaks refreshed"
        );

        Ok(snapshot)
    }
}
