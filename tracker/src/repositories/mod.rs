//! Storage interfaces
//!
//! The services only see these traits. Each one covers a single record kind so
//! a backend can implement exactly what it persists.

pub mod memory;

use crate::error::TrackerResult;
use async_trait::async_trait;
use sleepfast_engine::{
    AchievementDefinition, BestStreaks, FastingEvent, SleepEvent, UserSettings, WeightEvent,
};

pub use memory::InMemoryStore;

#[async_trait]
pub trait FastingStore: Send + Sync {
    /// Every fasting event, in any order
    async fn all_fasting_events(&self) -> TrackerResult<Vec<FastingEvent>>;

    async fn insert_fasting_event(&self, event: FastingEvent) -> TrackerResult<()>;

    /// Overwrite existing events matched by id
    async fn update_fasting_events(&self, events: &[FastingEvent]) -> TrackerResult<()>;
}

#[async_trait]
pub trait SleepStore: Send + Sync {
    async fn all_sleep_events(&self) -> TrackerResult<Vec<SleepEvent>>;

    async fn insert_sleep_event(&self, event: SleepEvent) -> TrackerResult<()>;
}

#[async_trait]
pub trait WeightStore: Send + Sync {
    async fn all_weight_events(&self) -> TrackerResult<Vec<WeightEvent>>;

    async fn insert_weight_event(&self, event: WeightEvent) -> TrackerResult<()>;
}

#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// `None` until the user has saved settings once
    async fn settings(&self) -> TrackerResult<Option<UserSettings>>;

    async fn save_settings(&self, settings: UserSettings) -> TrackerResult<()>;
}

#[async_trait]
pub trait AchievementStore: Send + Sync {
    async fn achievements(&self) -> TrackerResult<Vec<AchievementDefinition>>;

    /// Drop every stored definition and store `catalog` instead
    async fn replace_achievements(&self, catalog: Vec<AchievementDefinition>) -> TrackerResult<()>;

    /// Overwrite existing definitions matched by id
    async fn update_achievements(&self, achievements: &[AchievementDefinition]) -> TrackerResult<()>;
}

#[async_trait]
pub trait ProgressStore: Send + Sync {
    async fn best_streaks(&self) -> TrackerResult<BestStreaks>;

    async fn save_best_streaks(&self, best: BestStreaks) -> TrackerResult<()>;
}
