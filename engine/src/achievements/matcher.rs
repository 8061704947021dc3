//! Threshold matching

use crate::errors::EngineResult;
use crate::models::{AchievementCategory, AchievementDefinition};
use crate::validation::validate_metric_value;
use tracing::{debug, info};

/// Unlock every definition in `category` whose threshold `metric_value` reaches
///
/// Returns the newly unlocked definitions, lowest threshold first. Already
/// achieved definitions are never touched, so repeating a call with the same
/// or a lower value unlocks nothing.
pub fn check_and_unlock(
    category: AchievementCategory,
    metric_value: f64,
    catalog: &mut [AchievementDefinition],
) -> EngineResult<Vec<AchievementDefinition>> {
    validate_metric_value(metric_value)?;

    let mut unlocked: Vec<AchievementDefinition> = catalog
        .iter_mut()
        .filter(|a| a.category == category && !a.achieved && a.threshold <= metric_value)
        .map(|a| {
            a.achieved = true;
            info!(
                name = %a.name,
                %category,
                threshold = a.threshold,
                unit = category.threshold_unit(),
                metric_value,
                "Unlocking achievement"
            );
            a.clone()
        })
        .collect();

    unlocked.sort_by(|a, b| a.threshold.total_cmp(&b.threshold));

    debug!(
        %category,
        metric_value,
        unlocked = unlocked.len(),
        "Achievement check complete"
    );

    Ok(unlocked)
}
