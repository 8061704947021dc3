//! Progress evaluation
//!
//! One pass over a user's full history: current streaks, best streaks, weight
//! lost, achievement unlocks and the overall score.

use crate::achievements::{check_and_unlock, total_points};
use crate::errors::EngineResult;
use crate::health_metrics::{current_weight_loss_kg, max_weight_loss_kg};
use crate::models::{
    AchievementCategory, AchievementDefinition, FastingEvent, SleepEvent, UserSettings, WeightEvent,
};
use crate::streaks::{calculate_bedtime_streak_on, calculate_fasting_streak_with_delta};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Points per streak day in the overall score
const STREAK_SCORE_WEIGHT: i64 = 5;

/// Points per kilogram lost in the overall score
const WEIGHT_SCORE_WEIGHT: f64 = 10.0;

/// Highest streaks ever observed
///
/// Streak achievements are matched against these, so a broken streak never
/// takes an achievement away and never re-unlocks one either.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestStreaks {
    pub bedtime: u32,
    pub fasting: u32,
}

impl BestStreaks {
    pub fn observe(self, bedtime: u32, fasting: u32) -> Self {
        Self {
            bedtime: self.bedtime.max(bedtime),
            fasting: self.fasting.max(fasting),
        }
    }
}

/// Everything `evaluate_progress` reads
#[derive(Debug, Clone)]
pub struct ProgressInputs<'a> {
    pub fasting: &'a [FastingEvent],
    pub sleep: &'a [SleepEvent],
    pub weights: &'a [WeightEvent],
    pub settings: &'a UserSettings,
    pub today: NaiveDate,
    pub best: BestStreaks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub bedtime_streak: u32,
    pub fasting_streak: u32,
    pub best: BestStreaks,
    /// Largest loss from the first record to any later one
    pub weight_lost_kg: f64,
    /// Loss from the first record to the latest one, never negative
    pub current_weight_loss_kg: f64,
    /// Unlocked by this evaluation, sleep first, then fasting, then weight
    pub newly_unlocked: Vec<AchievementDefinition>,
    pub total_points: u32,
    pub overall_score: i64,
}

/// `(bedtime + fasting) * 5 + trunc(weight_lost * 10) + points`
pub fn overall_score(bedtime_streak: u32, fasting_streak: u32, weight_lost_kg: f64, points: u32) -> i64 {
    let streaks = (i64::from(bedtime_streak) + i64::from(fasting_streak)) * STREAK_SCORE_WEIGHT;
    let weight = (weight_lost_kg * WEIGHT_SCORE_WEIGHT).trunc() as i64;
    streaks + weight + i64::from(points)
}

/// Evaluate a user's progress and unlock whatever the history has earned
///
/// `catalog` is updated in place; the caller persists the definitions listed
/// in `newly_unlocked` along with the returned best streaks.
pub fn evaluate_progress(
    inputs: &ProgressInputs<'_>,
    catalog: &mut [AchievementDefinition],
) -> EngineResult<ProgressSnapshot> {
    let bedtime_streak = calculate_bedtime_streak_on(inputs.sleep, inputs.today);
    let fasting_streak =
        calculate_fasting_streak_with_delta(inputs.fasting, inputs.settings.eating_window_hours)?;
    let best = inputs.best.observe(bedtime_streak, fasting_streak);
    let weight_lost_kg = max_weight_loss_kg(inputs.weights);
    let current_loss_kg = current_weight_loss_kg(inputs.weights);

    let mut newly_unlocked =
        check_and_unlock(AchievementCategory::Sleep, f64::from(best.bedtime), catalog)?;
    newly_unlocked.extend(check_and_unlock(
        AchievementCategory::Fasting,
        f64::from(best.fasting),
        catalog,
    )?);
    newly_unlocked.extend(check_and_unlock(
        AchievementCategory::Weight,
        weight_lost_kg,
        catalog,
    )?);

    let points = total_points(catalog);
    let score = overall_score(bedtime_streak, fasting_streak, weight_lost_kg, points);

    info!(
        bedtime_streak,
        fasting_streak,
        best_bedtime = best.bedtime,
        best_fasting = best.fasting,
        weight_lost_kg,
        current_loss_kg,
        unlocked = newly_unlocked.len(),
        score,
        "Progress evaluated"
    );

    Ok(ProgressSnapshot {
        bedtime_streak,
        fasting_streak,
        best,
        weight_lost_kg,
        current_weight_loss_kg: current_loss_kg,
        newly_unlocked,
        total_points: points,
        overall_score: score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::default_catalog;
    use chrono::NaiveDateTime;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 3).unwrap()
    }

    #[test]
    fn test_overall_score() {
        assert_eq!(overall_score(0, 0, 0.0, 0), 0);
        // (3 + 2) * 5 + trunc(45.9) + 16
        assert_eq!(overall_score(3, 2, 4.59, 16), 25 + 45 + 16);
    }

    #[test]
    fn test_best_streaks_only_grow() {
        let best = BestStreaks { bedtime: 4, fasting: 1 }.observe(2, 3);
        assert_eq!(best, BestStreaks { bedtime: 4, fasting: 3 });
    }

    #[test]
    fn test_empty_history() {
        let settings = UserSettings::default();
        let inputs = ProgressInputs {
            fasting: &[],
            sleep: &[],
            weights: &[],
            settings: &settings,
            today: today(),
            best: BestStreaks::default(),
        };
        let mut catalog = default_catalog();

        let snapshot = evaluate_progress(&inputs, &mut catalog).unwrap();

        assert_eq!(snapshot.bedtime_streak, 0);
        assert_eq!(snapshot.fasting_streak, 0);
        assert!(snapshot.newly_unlocked.is_empty());
        assert_eq!(snapshot.overall_score, 0);
        assert_eq!(snapshot.current_weight_loss_kg, 0.0);
    }

    #[test]
    fn test_unlocks_across_categories() {
        let settings = UserSettings::default();
        let sleep = vec![
            SleepEvent::new(true, at(1, 22, 0)),
            SleepEvent::new(true, at(2, 22, 0)),
            SleepEvent::new(true, at(3, 22, 0)),
        ];
        let fasting = vec![
            FastingEvent::fast_start(at(1, 20, 0)),
            FastingEvent::fast_end(at(2, 14, 0)).with_delta(0, 360),
        ];
        let weights = vec![
            WeightEvent::new(90.0, at(1, 7, 0)),
            WeightEvent::new(88.5, at(3, 7, 0)),
        ];
        let inputs = ProgressInputs {
            fasting: &fasting,
            sleep: &sleep,
            weights: &weights,
            settings: &settings,
            today: today(),
            best: BestStreaks::default(),
        };
        let mut catalog = default_catalog();

        let snapshot = evaluate_progress(&inputs, &mut catalog).unwrap();

        assert_eq!(snapshot.bedtime_streak, 3);
        assert_eq!(snapshot.fasting_streak, 1);
        let names: Vec<&str> = snapshot.newly_unlocked.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Starting Sleeper", "Fast Starter", "Light Starter"]);
        assert!((snapshot.current_weight_loss_kg - 1.5).abs() < 1e-9);
        // 1 + 1 + 15
        assert_eq!(snapshot.total_points, 17);
        assert_eq!(snapshot.overall_score, (3 + 1) * 5 + 15 + 17);
    }

    #[test]
    fn test_current_loss_tracks_regain() {
        let settings = UserSettings::default();
        let weights = vec![
            WeightEvent::new(90.0, at(1, 7, 0)),
            WeightEvent::new(86.0, at(2, 7, 0)),
            WeightEvent::new(89.0, at(3, 7, 0)),
        ];
        let inputs = ProgressInputs {
            fasting: &[],
            sleep: &[],
            weights: &weights,
            settings: &settings,
            today: today(),
            best: BestStreaks::default(),
        };
        let mut catalog = default_catalog();

        let snapshot = evaluate_progress(&inputs, &mut catalog).unwrap();

        assert!((snapshot.weight_lost_kg - 4.0).abs() < 1e-9);
        assert!((snapshot.current_weight_loss_kg - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_best_streak_drives_unlocks() {
        let settings = UserSettings::default();
        let inputs = ProgressInputs {
            fasting: &[],
            sleep: &[],
            weights: &[],
            settings: &settings,
            today: today(),
            best: BestStreaks { bedtime: 5, fasting: 0 },
        };
        let mut catalog = default_catalog();

        let snapshot = evaluate_progress(&inputs, &mut catalog).unwrap();

        assert_eq!(snapshot.bedtime_streak, 0);
        assert_eq!(snapshot.best.bedtime, 5);
        assert_eq!(snapshot.newly_unlocked.len(), 2);

        let again = evaluate_progress(&inputs, &mut catalog).unwrap();
        assert!(again.newly_unlocked.is_empty());
        assert_eq!(again.total_points, 6);
    }
}
