//! In-memory store
//!
//! Implements every storage trait behind `tokio::sync::RwLock`. Used by tests
//! and by embedders that keep history elsewhere and only need the services.

use crate::error::{TrackerError, TrackerResult};
use crate::repositories::{
    AchievementStore, FastingStore, ProgressStore, SettingsStore, SleepStore, WeightStore,
};
use async_trait::async_trait;
use sleepfast_engine::{
    AchievementDefinition, BestStreaks, FastingEvent, SleepEvent, UserSettings, WeightEvent,
};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    fasting: RwLock<Vec<FastingEvent>>,
    sleep: RwLock<Vec<SleepEvent>>,
    weights: RwLock<Vec<WeightEvent>>,
    settings: RwLock<Option<UserSettings>>,
    achievements: RwLock<Vec<AchievementDefinition>>,
    best: RwLock<BestStreaks>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with saved settings
    pub fn with_settings(settings: UserSettings) -> Self {
        Self {
            settings: RwLock::new(Some(settings)),
            ..Self::default()
        }
    }
}

/// Overwrite each stored record whose id matches one in `updates`
fn overwrite_by_id<T: Clone>(
    stored: &mut [T],
    updates: &[T],
    id_of: impl Fn(&T) -> Uuid,
    kind: &str,
) -> TrackerResult<()> {
    for update in updates {
        let id = id_of(update);
        let slot = stored
            .iter_mut()
            .find(|s| id_of(&**s) == id)
            .ok_or_else(|| TrackerError::Store(format!("{} {} not found", kind, id)))?;
        *slot = update.clone();
    }
    Ok(())
}

#[async_trait]
impl FastingStore for InMemoryStore {
    async fn all_fasting_events(&self) -> TrackerResult<Vec<FastingEvent>> {
        Ok(self.fasting.read().await.clone())
    }

    async fn insert_fasting_event(&self, event: FastingEvent) -> TrackerResult<()> {
        debug!(id = %event.id, is_fast_start = event.is_fast_start, "Inserting fasting event");
        self.fasting.write().await.push(event);
        Ok(())
    }

    async fn update_fasting_events(&self, events: &[FastingEvent]) -> TrackerResult<()> {
        let mut stored = self.fasting.write().await;
        overwrite_by_id(stored.as_mut_slice(), events, |e| e.id, "Fasting event")
    }
}

#[async_trait]
impl SleepStore for InMemoryStore {
    async fn all_sleep_events(&self) -> TrackerResult<Vec<SleepEvent>> {
        Ok(self.sleep.read().await.clone())
    }

    async fn insert_sleep_event(&self, event: SleepEvent) -> TrackerResult<()> {
        self.sleep.write().await.push(event);
        Ok(())
    }
}

#[async_trait]
impl WeightStore for InMemoryStore {
    async fn all_weight_events(&self) -> TrackerResult<Vec<WeightEvent>> {
        Ok(self.weights.read().await.clone())
    }

    async fn insert_weight_event(&self, event: WeightEvent) -> TrackerResult<()> {
        self.weights.write().await.push(event);
        Ok(())
    }
}

#[async_trait]
impl SettingsStore for InMemoryStore {
    async fn settings(&self) -> TrackerResult<Option<UserSettings>> {
        Ok(self.settings.read().await.clone())
    }

    async fn save_settings(&self, settings: UserSettings) -> TrackerResult<()> {
        *self.settings.write().await = Some(settings);
        Ok(())
    }
}

#[async_trait]
impl AchievementStore for InMemoryStore {
    async fn achievements(&self) -> TrackerResult<Vec<AchievementDefinition>> {
        Ok(self.achievements.read().await.clone())
    }

    async fn replace_achievements(&self, catalog: Vec<AchievementDefinition>) -> TrackerResult<()> {
        *self.achievements.write().await = catalog;
        Ok(())
    }

    async fn update_achievements(&self, achievements: &[AchievementDefinition]) -> TrackerResult<()> {
        let mut stored = self.achievements.write().await;
        overwrite_by_id(stored.as_mut_slice(), achievements, |a| a.id, "Achievement")
    }
}

#[async_trait]
impl ProgressStore for InMemoryStore {
    async fn best_streaks(&self) -> TrackerResult<BestStreaks> {
        Ok(*self.best.read().await)
    }

    async fn save_best_streaks(&self, best: BestStreaks) -> TrackerResult<()> {
        *self.best.write().await = best;
        Ok(())
    }
}
