//! Personalized weight-loss goals
//!
//! Ten goals spaced evenly between the start weight and the BMI-20 weight,
//! rounded up to half kilograms. When rounding makes two goals collide the
//! later one is re-rounded to a quarter kilogram, and if that still collides
//! it is pushed a quarter kilogram past its predecessor.

use crate::achievements::catalog::{default_weight_goals, weight_description, WEIGHT_MILESTONES};
use crate::errors::EngineResult;
use crate::health_metrics::{calculate_bmi, perfect_weight_kg};
use crate::models::{AchievementCategory, AchievementDefinition};
use crate::validation::{validate_height_cm, validate_weight_kg};
use tracing::{debug, info};

/// Number of generated goals
pub const GOAL_COUNT: usize = 10;

/// Points for the first goal; goal `n` is worth `n` times this
const BASE_POINTS: u32 = 15;

/// Smallest step between two goals
const MIN_STEP_KG: f64 = 0.25;

fn round_up_to_half(value: f64) -> f64 {
    (value * 2.0).ceil() / 2.0
}

fn round_up_to_quarter(value: f64) -> f64 {
    (value * 4.0).ceil() / 4.0
}

/// Weight-loss thresholds in kg, strictly increasing
pub fn weight_loss_thresholds(total_to_lose: f64) -> Vec<f64> {
    let raw: Vec<f64> = (1..=GOAL_COUNT)
        .map(|i| total_to_lose * i as f64 / GOAL_COUNT as f64)
        .collect();

    let mut goals: Vec<f64> = raw.iter().map(|&g| round_up_to_half(g)).collect();

    for i in 1..goals.len() {
        if goals[i] <= goals[i - 1] {
            goals[i] = round_up_to_quarter(raw[i]);
            if goals[i] <= goals[i - 1] {
                goals[i] = goals[i - 1] + MIN_STEP_KG;
            }
        }
    }

    goals
}

/// Ten weight achievements for the given height (cm) and start weight (kg)
///
/// Falls back to the fixed default goals when the start weight is already at
/// or below the BMI-20 weight.
pub fn generate_weight_goals(
    height_cm: f64,
    start_weight_kg: f64,
) -> EngineResult<Vec<AchievementDefinition>> {
    validate_height_cm(height_cm)?;
    validate_weight_kg(start_weight_kg)?;

    let perfect_weight = perfect_weight_kg(height_cm);
    if perfect_weight >= start_weight_kg {
        info!(
            perfect_weight,
            start_weight_kg, "Perfect weight >= start weight, using fixed weight loss goals"
        );
        return Ok(default_weight_goals());
    }

    let total_to_lose = start_weight_kg - perfect_weight;
    debug!(
        start_bmi = calculate_bmi(start_weight_kg, height_cm),
        perfect_weight,
        total_to_lose,
        "Calculating weight loss goals"
    );

    let goals = weight_loss_thresholds(total_to_lose);
    debug!(?goals, "Calculated weight loss goals");

    Ok(goals
        .iter()
        .zip(WEIGHT_MILESTONES)
        .enumerate()
        .map(|(i, (&kg, (name, emoticon)))| {
            AchievementDefinition::new(
                name,
                AchievementCategory::Weight,
                kg,
                BASE_POINTS * (i as u32 + 1),
                &weight_description(kg),
                emoticon,
            )
        })
        .collect())
}
