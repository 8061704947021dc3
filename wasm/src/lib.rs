//! Sleep Fast Tracker WASM Module
//!
//! Browser bindings for the streak engine. Records cross the boundary as JSON
//! strings in the engine's serde format; timestamps are ISO-8601 without an
//! offset, e.g. `2024-01-01T20:00:00`.

use chrono::NaiveDate;
use sleepfast_engine::{FastingEvent, SleepEvent};
use wasm_bindgen::prelude::*;

fn parse<T: serde::de::DeserializeOwned>(json: &str, what: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {} JSON: {}", what, e))
}

fn fasting_streak(events_json: &str, eating_window_hours: i32) -> Result<u32, String> {
    let events: Vec<FastingEvent> = parse(events_json, "fasting events")?;
    sleepfast_engine::calculate_fasting_streak_with_delta(&events, eating_window_hours)
        .map_err(|e| e.to_string())
}

fn simple_fasting_streak(events_json: &str, eating_window_hours: i32) -> Result<u32, String> {
    let events: Vec<FastingEvent> = parse(events_json, "fasting events")?;
    sleepfast_engine::calculate_fasting_streak(&events, eating_window_hours)
        .map_err(|e| e.to_string())
}

fn bedtime_streak(events_json: &str, today: &str) -> Result<u32, String> {
    let events: Vec<SleepEvent> = parse(events_json, "sleep events")?;
    let today: NaiveDate = today
        .parse()
        .map_err(|e| format!("Invalid date '{}': {}", today, e))?;
    Ok(sleepfast_engine::calculate_bedtime_streak_on(&events, today))
}

fn completion_rate(events_json: &str, eating_window_hours: i32) -> Result<u32, String> {
    let events: Vec<FastingEvent> = parse(events_json, "fasting events")?;
    sleepfast_engine::fasting_completion_rate(&events, eating_window_hours)
        .map_err(|e| e.to_string())
}

fn sleep_adherence(events_json: &str) -> Result<String, String> {
    let events: Vec<SleepEvent> = parse(events_json, "sleep events")?;
    serde_json::to_string(&sleepfast_engine::sleep_adherence(&events)).map_err(|e| e.to_string())
}

fn weight_goals(height_cm: f64, start_weight_kg: f64) -> Result<String, String> {
    let goals = sleepfast_engine::generate_weight_goals(height_cm, start_weight_kg)
        .map_err(|e| e.to_string())?;
    serde_json::to_string(&goals).map_err(|e| e.to_string())
}

fn backfill(events_json: &str, eating_window_hours: i32) -> Result<String, String> {
    let events: Vec<FastingEvent> = parse(events_json, "fasting events")?;
    let outcome = sleepfast_engine::backfill_delta_minutes(&events, eating_window_hours)
        .map_err(|e| e.to_string())?;
    serde_json::to_string(&outcome.events).map_err(|e| e.to_string())
}

/// Delta-compensated fasting streak
#[wasm_bindgen(js_name = fastingStreak)]
pub fn js_fasting_streak(events_json: &str, eating_window_hours: i32) -> Result<u32, JsError> {
    fasting_streak(events_json, eating_window_hours).map_err(|e| JsError::new(&e))
}

/// Fasting streak counting one successful fast per day, no compensation
#[wasm_bindgen(js_name = simpleFastingStreak)]
pub fn js_simple_fasting_streak(events_json: &str, eating_window_hours: i32) -> Result<u32, JsError> {
    simple_fasting_streak(events_json, eating_window_hours).map_err(|e| JsError::new(&e))
}

/// Bedtime streak as of `today` (`YYYY-MM-DD`)
#[wasm_bindgen(js_name = bedtimeStreak)]
pub fn js_bedtime_streak(events_json: &str, today: &str) -> Result<u32, JsError> {
    bedtime_streak(events_json, today).map_err(|e| JsError::new(&e))
}

/// Percentage of completed fasts that reached the target
#[wasm_bindgen(js_name = fastingCompletionRate)]
pub fn js_fasting_completion_rate(events_json: &str, eating_window_hours: i32) -> Result<u32, JsError> {
    completion_rate(events_json, eating_window_hours).map_err(|e| JsError::new(&e))
}

/// Latest-week bedtime adherence and trend as JSON
#[wasm_bindgen(js_name = sleepAdherence)]
pub fn js_sleep_adherence(events_json: &str) -> Result<String, JsError> {
    sleep_adherence(events_json).map_err(|e| JsError::new(&e))
}

/// Ten personalized weight achievements as JSON
#[wasm_bindgen(js_name = weightGoals)]
pub fn js_weight_goals(height_cm: f64, start_weight_kg: f64) -> Result<String, JsError> {
    weight_goals(height_cm, start_weight_kg).map_err(|e| JsError::new(&e))
}

/// Fasting history with missing deltas filled in, as JSON
#[wasm_bindgen(js_name = backfillDeltas)]
pub fn js_backfill(events_json: &str, eating_window_hours: i32) -> Result<String, JsError> {
    backfill(events_json, eating_window_hours).map_err(|e| JsError::new(&e))
}

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen(js_name = calculateBmi)]
pub fn js_calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    sleepfast_engine::calculate_bmi(weight_kg, height_cm)
}
