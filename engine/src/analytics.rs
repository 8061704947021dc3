//! Progress-screen figures
//!
//! Fasting completion rate, weekly bedtime adherence with its trend, the BMI
//! series and weight changes between check-ins. All percentages are whole
//! numbers truncated toward zero.

use crate::errors::EngineResult;
use crate::health_metrics::calculate_bmi;
use crate::models::{FastingEvent, SleepEvent, WeightEvent};
use crate::pairing::completed_fasts_newest_first;
use crate::streaks::fasting::min_successful_fast_minutes;
use crate::validation::{validate_eating_window_hours, validate_height_cm};
use chrono::{Days, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Records in one adherence week
pub const ADHERENCE_WEEK: usize = 7;

/// Percentage points the latest week must move by to count as a trend
const TREND_THRESHOLD: f64 = 5.0;

// ============================================================================
// Fasting
// ============================================================================

/// Share of completed fasts that reached the target minus the grace period
///
/// Uses the same backwards walk as the legacy streak: a fast in progress is
/// skipped and malformed pairs are stepped over. 0 when no fast completed.
pub fn fasting_completion_rate(
    events: &[FastingEvent],
    eating_window_hours: i32,
) -> EngineResult<u32> {
    validate_eating_window_hours(eating_window_hours)?;

    let min_minutes = min_successful_fast_minutes(eating_window_hours);
    let fasts = completed_fasts_newest_first(events);
    let successful = fasts.iter().filter(|&&minutes| minutes >= min_minutes).count();

    debug!(successful, total = fasts.len(), "Fasting completion");

    if fasts.is_empty() {
        return Ok(0);
    }
    Ok(u32::try_from(successful * 100 / fasts.len()).unwrap_or(100))
}

// ============================================================================
// Sleep
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepTrend {
    Improving,
    #[default]
    Stable,
    Declining,
}

/// Bedtime adherence over the latest week of answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SleepAdherence {
    /// On-time percentage of the latest seven answers
    pub latest_week_percent: i32,
    /// Latest week minus the first week, in percentage points
    pub improvement: i32,
    /// Latest week against the seven answers before it
    pub trend: SleepTrend,
    /// At least a week of answers exists
    pub has_enough_data: bool,
}

fn on_time_percent(week: &[&SleepEvent]) -> f64 {
    let on_time = week.iter().filter(|e| e.on_time).count();
    on_time as f64 / week.len() as f64 * 100.0
}

/// Weekly adherence figures
///
/// Fewer than seven answers gives all zeros and a stable trend. The trend
/// needs fourteen answers; with fewer it is stable.
pub fn sleep_adherence(events: &[SleepEvent]) -> SleepAdherence {
    if events.len() < ADHERENCE_WEEK {
        return SleepAdherence::default();
    }

    let mut oldest_first: Vec<&SleepEvent> = events.iter().collect();
    oldest_first.sort_by_key(|e| e.timestamp);

    let n = oldest_first.len();
    let first_week = on_time_percent(&oldest_first[..ADHERENCE_WEEK]);
    let latest_week = on_time_percent(&oldest_first[n - ADHERENCE_WEEK..]);

    let trend = if n >= 2 * ADHERENCE_WEEK {
        let previous_week =
            on_time_percent(&oldest_first[n - 2 * ADHERENCE_WEEK..n - ADHERENCE_WEEK]);
        if latest_week > previous_week + TREND_THRESHOLD {
            SleepTrend::Improving
        } else if latest_week < previous_week - TREND_THRESHOLD {
            SleepTrend::Declining
        } else {
            SleepTrend::Stable
        }
    } else {
        SleepTrend::Stable
    };

    SleepAdherence {
        latest_week_percent: latest_week as i32,
        improvement: latest_week as i32 - first_week as i32,
        trend,
        has_enough_data: true,
    }
}

// ============================================================================
// Weight
// ============================================================================

/// BMI at each weight record, oldest first
///
/// A single record is paired with a copy one day earlier so a chart has a
/// line to draw. A height of zero yields no points.
pub fn bmi_series(
    weights: &[WeightEvent],
    height_cm: f64,
) -> EngineResult<Vec<(NaiveDateTime, f64)>> {
    validate_height_cm(height_cm)?;
    if height_cm == 0.0 {
        return Ok(Vec::new());
    }

    let mut oldest_first: Vec<&WeightEvent> = weights.iter().collect();
    oldest_first.sort_by_key(|w| w.timestamp);

    let mut series: Vec<(NaiveDateTime, f64)> = oldest_first
        .iter()
        .map(|w| (w.timestamp, calculate_bmi(w.weight_kg, height_cm)))
        .collect();

    if series.len() == 1 {
        let (timestamp, bmi) = series[0];
        if let Some(day_before) = timestamp.checked_sub_days(Days::new(1)) {
            series.insert(0, (day_before, bmi));
        }
    }

    Ok(series)
}

/// Latest minus first recorded weight; negative means weight lost
pub fn weight_difference_kg(weights: &[WeightEvent]) -> f64 {
    let first = weights.iter().min_by_key(|w| w.timestamp);
    let last = weights.iter().max_by_key(|w| w.timestamp);
    match (first, last) {
        (Some(first), Some(last)) => last.weight_kg - first.weight_kg,
        _ => 0.0,
    }
}

/// Change from one weight record to the next newer one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightDelta {
    /// The older record of the pair
    pub id: Uuid,
    /// Newer minus older weight
    pub delta_kg: f64,
}

/// One delta per record that has a newer record, newest first
///
/// The newest record has no delta.
pub fn weight_deltas(weights: &[WeightEvent]) -> Vec<WeightDelta> {
    let mut newest_first: Vec<&WeightEvent> = weights.iter().collect();
    newest_first.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    newest_first
        .windows(2)
        .map(|pair| WeightDelta {
            id: pair[1].id,
            delta_kg: pair[0].weight_kg - pair[1].weight_kg,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EngineError;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn fast(day: u32, end_hour: u32, end_minute: u32) -> Vec<FastingEvent> {
        vec![
            FastingEvent::fast_start(at(day, 20, 0)),
            FastingEvent::fast_end(at(day + 1, end_hour, end_minute)),
        ]
    }

    /// One answer per evening, oldest first
    fn answers(on_time: &[bool]) -> Vec<SleepEvent> {
        on_time
            .iter()
            .enumerate()
            .map(|(i, &ok)| SleepEvent::new(ok, at(i as u32 + 1, 22, 0)))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Fasting completion
    // ------------------------------------------------------------------------

    #[test]
    fn test_completion_rate_empty() {
        assert_eq!(fasting_completion_rate(&[], 6), Ok(0));
        let open = vec![FastingEvent::fast_start(at(1, 20, 0))];
        assert_eq!(fasting_completion_rate(&open, 6), Ok(0));
    }

    #[test]
    fn test_completion_rate_counts_short_fasts_without_stopping() {
        let mut events = fast(1, 14, 0); // 18h
        events.extend(fast(2, 8, 0)); // 12h, short
        events.extend(fast(3, 13, 30)); // 17h30, within grace
        assert_eq!(fasting_completion_rate(&events, 6), Ok(66));
    }

    #[test]
    fn test_completion_rate_skips_current_fast() {
        let mut events = fast(1, 14, 0);
        events.push(FastingEvent::fast_start(at(2, 20, 0)));
        assert_eq!(fasting_completion_rate(&events, 6), Ok(100));
    }

    #[test]
    fn test_completion_rate_steps_over_duplicate_end() {
        let mut events = fast(1, 8, 0); // short
        events.push(FastingEvent::fast_end(at(2, 9, 0)));
        assert_eq!(fasting_completion_rate(&events, 6), Ok(0));
    }

    #[test]
    fn test_completion_rate_negative_window_rejected() {
        assert!(matches!(
            fasting_completion_rate(&[], -3),
            Err(EngineError::InvalidInput(_))
        ));
    }

    // ------------------------------------------------------------------------
    // Sleep adherence
    // ------------------------------------------------------------------------

    #[test]
    fn test_adherence_needs_a_week() {
        let adherence = sleep_adherence(&answers(&[true; 6]));
        assert_eq!(adherence, SleepAdherence::default());
        assert!(!adherence.has_enough_data);
    }

    #[test]
    fn test_adherence_single_week() {
        let adherence = sleep_adherence(&answers(&[true, true, false, true, true, true, false]));
        // 5/7 = 71.4%
        assert_eq!(adherence.latest_week_percent, 71);
        assert_eq!(adherence.improvement, 0);
        assert_eq!(adherence.trend, SleepTrend::Stable);
        assert!(adherence.has_enough_data);
    }

    #[test]
    fn test_adherence_improvement_over_first_week() {
        let mut pattern = vec![false; 7];
        pattern.extend([true; 3]);
        pattern.extend([true, true, true, true, false, false, false]);
        // 13 answers: first week 0%, latest week (answers 7..13) 6/7
        pattern.truncate(13);
        let adherence = sleep_adherence(&answers(&pattern));

        assert_eq!(adherence.latest_week_percent, 85);
        assert_eq!(adherence.improvement, 85);
        assert_eq!(adherence.trend, SleepTrend::Stable);
    }

    #[rstest]
    #[case::improving(&[false; 7], &[true; 7], SleepTrend::Improving)]
    #[case::declining(&[true; 7], &[true, true, true, true, true, true, false], SleepTrend::Declining)]
    #[case::stable(&[true, false, true, false, true, false, true], &[false, true, false, true, false, true, true], SleepTrend::Stable)]
    fn test_adherence_trend(
        #[case] previous: &[bool],
        #[case] latest: &[bool],
        #[case] expected: SleepTrend,
    ) {
        let pattern: Vec<bool> = previous.iter().chain(latest).copied().collect();
        assert_eq!(sleep_adherence(&answers(&pattern)).trend, expected);
    }

    #[test]
    fn test_adherence_orders_by_time() {
        let mut events = answers(&[false, false, false, false, false, false, false, true]);
        events.reverse();
        // latest week is answers 2..8: one on time
        assert_eq!(sleep_adherence(&events).latest_week_percent, 14);
    }

    // ------------------------------------------------------------------------
    // Weight
    // ------------------------------------------------------------------------

    #[test]
    fn test_bmi_series_single_record_duplicated() {
        let weights = vec![WeightEvent::new(81.0, at(10, 7, 0))];
        let series = bmi_series(&weights, 180.0).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].0, at(9, 7, 0));
        assert_eq!(series[0].1, series[1].1);
        assert!((series[1].1 - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_bmi_series_sorted_and_guarded() {
        let weights = vec![
            WeightEvent::new(80.0, at(3, 7, 0)),
            WeightEvent::new(82.0, at(1, 7, 0)),
        ];
        let series = bmi_series(&weights, 180.0).unwrap();
        assert_eq!(series[0].0, at(1, 7, 0));
        assert!(series[0].1 > series[1].1);

        assert!(bmi_series(&weights, 0.0).unwrap().is_empty());
        assert!(bmi_series(&[], 180.0).unwrap().is_empty());
        assert!(bmi_series(&weights, -1.0).is_err());
    }

    #[test]
    fn test_weight_difference() {
        assert_eq!(weight_difference_kg(&[]), 0.0);
        assert_eq!(weight_difference_kg(&[WeightEvent::new(80.0, at(1, 7, 0))]), 0.0);

        let weights = vec![
            WeightEvent::new(78.5, at(5, 7, 0)),
            WeightEvent::new(80.0, at(1, 7, 0)),
            WeightEvent::new(77.0, at(3, 7, 0)),
        ];
        assert!((weight_difference_kg(&weights) + 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_weight_deltas_against_next_newer() {
        let oldest = WeightEvent::new(80.0, at(1, 7, 0));
        let middle = WeightEvent::new(79.0, at(2, 7, 0));
        let newest = WeightEvent::new(79.5, at(3, 7, 0));
        let weights = vec![middle.clone(), newest.clone(), oldest.clone()];

        let deltas = weight_deltas(&weights);

        assert_eq!(deltas.len(), 2);
        assert_eq!(deltas[0].id, middle.id);
        assert!((deltas[0].delta_kg - 0.5).abs() < 1e-9);
        assert_eq!(deltas[1].id, oldest.id);
        assert!((deltas[1].delta_kg + 1.0).abs() < 1e-9);
        assert!(deltas.iter().all(|d| d.id != newest.id));
        assert!(weight_deltas(&weights[..1]).is_empty());
    }
}
