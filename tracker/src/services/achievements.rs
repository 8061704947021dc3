//! Achievement catalog maintenance

use crate::error::TrackerResult;
use crate::repositories::AchievementStore;
use sleepfast_engine::{
    ensure_catalog, generate_weight_goals, replace_weight_goals, AchievementDefinition,
};
use tracing::info;

pub struct AchievementService;

impl AchievementService {
    /// Stored catalog, reinitialized first when it is duplicated or incomplete
    pub async fn ensure_catalog<S>(store: &S) -> TrackerResult<Vec<AchievementDefinition>>
    where
        S: AchievementStore + ?Sized,
    {
        let stored = store.achievements().await?;
        match ensure_catalog(&stored) {
            Some(replacement) => {
                store.replace_achievements(replacement.clone()).await?;
                info!(count = replacement.len(), "Achievement catalog initialized");
                Ok(replacement)
            }
            None => Ok(stored),
        }
    }

    /// Replace the weight achievements with goals derived from height and start weight
    ///
    /// Sleep and fasting achievements keep their state. Returns the new goals.
    pub async fn regenerate_weight_goals<S>(
        store: &S,
        height_cm: f64,
        start_weight_kg: f64,
    ) -> TrackerResult<Vec<AchievementDefinition>>
    where
        S: AchievementStore + ?Sized,
    {
        info!(height_cm, start_weight_kg, "Recalculating weight achievements");

        let goals = generate_weight_goals(height_cm, start_weight_kg)?;
        let catalog = Self::ensure_catalog(store).await?;
        store
            .replace_achievements(replace_weight_goals(&catalog, goals.clone()))
            .await?;

        Ok(goals)
    }
}
