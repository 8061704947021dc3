//! Body metrics used by weight achievements
//!
//! Provides BMI, the BMI-20 "perfect weight" that weight goals are spaced
//! towards, and the weight-loss figure weight achievements are matched on.

use crate::models::WeightEvent;

/// BMI the weight goals aim for
pub const TARGET_BMI: f64 = 20.0;

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Weight in kg at which the given height has a BMI of 20
pub fn perfect_weight_kg(height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    TARGET_BMI * height_m * height_m
}

fn oldest_first(weights: &[WeightEvent]) -> Vec<&WeightEvent> {
    let mut sorted: Vec<&WeightEvent> = weights.iter().collect();
    sorted.sort_by_key(|w| w.timestamp);
    sorted
}

/// Largest drop below the first recorded weight seen at any point
///
/// Needs at least two records; a later regain does not reduce it.
pub fn max_weight_loss_kg(weights: &[WeightEvent]) -> f64 {
    if weights.len() < 2 {
        return 0.0;
    }

    let sorted = oldest_first(weights);
    let start = sorted[0].weight_kg;
    let lowest = sorted[1..]
        .iter()
        .map(|w| w.weight_kg)
        .fold(start, f64::min);

    (start - lowest).max(0.0)
}

/// Loss between the first and the latest record, never negative
pub fn current_weight_loss_kg(weights: &[WeightEvent]) -> f64 {
    let sorted = oldest_first(weights);
    match (sorted.first(), sorted.last()) {
        (Some(first), Some(last)) if sorted.len() > 1 => (first.weight_kg - last.weight_kg).max(0.0),
        _ => 0.0,
    }
}
