//! Default achievement catalog
//!
//! 10 sleep, 10 fasting and 10 weight definitions. Thresholds are days for
//! the streak categories and kilograms lost for weight.

use crate::models::{AchievementCategory, AchievementDefinition};
use tracing::{info, warn};

/// More definitions than this means the stored catalog was duplicated
pub const MAX_CATALOG_SIZE: usize = 32;

/// Fewer definitions than this means the stored catalog is incomplete
pub const MIN_CATALOG_SIZE: usize = 30;

/// `(name, points, description, emoticon, threshold)`
type Entry = (&'static str, u32, &'static str, &'static str, f64);

const SLEEP: [Entry; 10] = [
    ("Starting Sleeper", 1, "Slept consistently for 1 day.", "😴", 1.0),
    ("Steady Sleeper", 5, "Slept consistently for 5 days.", "😊", 5.0),
    ("Solid Sleeper", 10, "Slept consistently for 10 days.", "😃", 10.0),
    ("Sleeping Beauty", 25, "Slept consistently for 25 days.", "😄", 25.0),
    ("Dream Chaser", 50, "Slept consistently for 50 days.", "😁", 50.0),
    ("Rhythm Master", 100, "Slept consistently for 100 days.", "😎", 100.0),
    ("Sleep Sage", 200, "Slept consistently for 200 days.", "🌟", 200.0),
    ("Slumber Legend", 365, "Slept consistently for 1 year.", "👑", 365.0),
    ("Sleep Immortal", 500, "Slept consistently for 500 days.", "⚜️", 500.0),
    ("Sleep Grand Master", 730, "Slept consistently for 2 years.", "🌠", 730.0),
];

const FASTING: [Entry; 10] = [
    ("Fast Starter", 1, "Fasted consistently for 1 day.", "😊", 1.0),
    ("Fast Explorer", 5, "Fasted consistently for 5 days.", "😃", 5.0),
    ("Fast Tracker", 10, "Fasted consistently for 10 days.", "😄", 10.0),
    ("Hunger Tamer", 25, "Fasted consistently for 25 days.", "😁", 25.0),
    ("Fasting Warrior", 50, "Fasted consistently for 50 days.", "😎", 50.0),
    ("Metabolic Master", 100, "Fasted consistently for 100 days.", "🤩", 100.0),
    ("Fast Legend", 200, "Fasted consistently for 200 days.", "🌟", 200.0),
    ("Fasting Champion", 365, "Fasted consistently for 1 year.", "👑", 365.0),
    ("Fasting Immortal", 500, "Fasted consistently for 500 days.", "⚜️", 500.0),
    ("Fasting Grand Master", 730, "Fasted consistently for 2 years.", "🌠", 730.0),
];

/// Names and emoticons of the weight milestones, lightest goal first
pub const WEIGHT_MILESTONES: [(&str, &str); 10] = [
    ("Light Starter", "😊"),
    ("On a Roll", "😃"),
    ("Momentum Maker", "😄"),
    ("Scale Shaker", "🌱"),
    ("Milestone Maker", "😎"),
    ("Halfway Hero", "💪"),
    ("Titan Tamer", "🌟"),
    ("Weight Warrior", "👑"),
    ("Weight Conqueror", "🏆"),
    ("Transformation Master", "⚜️"),
];

/// Fixed weight-loss thresholds used when no personal goals can be derived
const DEFAULT_WEIGHT_THRESHOLDS: [f64; 10] = [1.0, 2.0, 5.0, 7.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0];

/// Points per kilogram for the fixed weight goals
const DEFAULT_WEIGHT_POINTS_PER_KG: f64 = 15.0;

fn build(category: AchievementCategory, entries: &[Entry]) -> Vec<AchievementDefinition> {
    entries
        .iter()
        .map(|&(name, points, description, emoticon, threshold)| {
            AchievementDefinition::new(name, category, threshold, points, description, emoticon)
        })
        .collect()
}

/// Weight-loss description, e.g. "Lost 2.5 kg total."
pub(crate) fn weight_description(kg: f64) -> String {
    format!("Lost {} kg total.", kg)
}

/// The fixed set of ten weight achievements
pub fn default_weight_goals() -> Vec<AchievementDefinition> {
    WEIGHT_MILESTONES
        .iter()
        .zip(DEFAULT_WEIGHT_THRESHOLDS)
        .map(|(&(name, emoticon), kg)| {
            AchievementDefinition::new(
                name,
                AchievementCategory::Weight,
                kg,
                (kg * DEFAULT_WEIGHT_POINTS_PER_KG) as u32,
                &weight_description(kg),
                emoticon,
            )
        })
        .collect()
}

/// Full default catalog, nothing achieved
pub fn default_catalog() -> Vec<AchievementDefinition> {
    let mut catalog = build(AchievementCategory::Sleep, &SLEEP);
    catalog.extend(build(AchievementCategory::Fasting, &FASTING));
    catalog.extend(default_weight_goals());
    catalog
}

/// State of a stored catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogStatus {
    Healthy,
    Duplicated,
    Incomplete,
}

/// Classify a stored catalog by size
pub fn assess_catalog(catalog: &[AchievementDefinition]) -> CatalogStatus {
    match catalog.len() {
        n if n > MAX_CATALOG_SIZE => CatalogStatus::Duplicated,
        n if n < MIN_CATALOG_SIZE => CatalogStatus::Incomplete,
        _ => CatalogStatus::Healthy,
    }
}

/// Replacement catalog when the stored one is not healthy
///
/// `None` means the stored catalog can stay as is.
pub fn ensure_catalog(catalog: &[AchievementDefinition]) -> Option<Vec<AchievementDefinition>> {
    match assess_catalog(catalog) {
        CatalogStatus::Healthy => None,
        status => {
            warn!(
                count = catalog.len(),
                ?status,
                "Achievement catalog has the wrong size, reinitializing"
            );
            Some(default_catalog())
        }
    }
}

/// Swap the weight category for `goals`, keeping sleep and fasting as they are
pub fn replace_weight_goals(
    catalog: &[AchievementDefinition],
    goals: Vec<AchievementDefinition>,
) -> Vec<AchievementDefinition> {
    let mut replaced: Vec<AchievementDefinition> = catalog
        .iter()
        .filter(|a| a.category != AchievementCategory::Weight)
        .cloned()
        .collect();
    info!(goals = goals.len(), "Replacing weight achievements");
    replaced.extend(goals);
    replaced
}

/// Sum of points of every achieved definition
pub fn total_points(catalog: &[AchievementDefinition]) -> u32 {
    catalog.iter().filter(|a| a.achieved).map(|a| a.points).sum()
}
