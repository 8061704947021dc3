//! Data models for the streak and achievement engine
//!
//! Timestamps are wall-clock local times (`NaiveDateTime`); the calendar day
//! an event belongs to is simply `timestamp.date()`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Records
// ============================================================================

/// A fasting state transition
///
/// `is_fast_start = true` marks the moment a fast began, `false` the moment it
/// ended (eating began). The delta fields are only ever present on fast-end
/// events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastingEvent {
    pub id: Uuid,
    pub is_fast_start: bool,
    pub timestamp: NaiveDateTime,
    /// Minutes over (positive) or under (negative) the target fasting window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta_minutes: Option<i32>,
    /// Snapshot of the eating window setting when the fast ended
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eating_window_minutes: Option<i32>,
}

impl FastingEvent {
    pub fn fast_start(timestamp: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            is_fast_start: true,
            timestamp,
            delta_minutes: None,
            eating_window_minutes: None,
        }
    }

    pub fn fast_end(timestamp: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            is_fast_start: false,
            timestamp,
            delta_minutes: None,
            eating_window_minutes: None,
        }
    }

    /// Attach delta values to a fast-end event
    pub fn with_delta(mut self, delta_minutes: i32, eating_window_minutes: i32) -> Self {
        self.delta_minutes = Some(delta_minutes);
        self.eating_window_minutes = Some(eating_window_minutes);
        self
    }

    #[inline]
    pub fn is_fast_end(&self) -> bool {
        !self.is_fast_start
    }

    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// Answer to the nightly "did you go to bed on time?" check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepEvent {
    pub id: Uuid,
    pub on_time: bool,
    pub timestamp: NaiveDateTime,
}

impl SleepEvent {
    pub fn new(on_time: bool, timestamp: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            on_time,
            timestamp,
        }
    }
}

/// Weight measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEvent {
    pub id: Uuid,
    pub weight_kg: f64,
    pub timestamp: NaiveDateTime,
}

impl WeightEvent {
    pub fn new(weight_kg: f64, timestamp: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            weight_kg,
            timestamp,
        }
    }
}

// ============================================================================
// Achievements
// ============================================================================

/// Achievement category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Sleep,
    Fasting,
    Weight,
}

impl AchievementCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementCategory::Sleep => "sleep",
            AchievementCategory::Fasting => "fasting",
            AchievementCategory::Weight => "weight",
        }
    }

    /// Unit the threshold is expressed in
    pub fn threshold_unit(&self) -> &'static str {
        match self {
            AchievementCategory::Sleep | AchievementCategory::Fasting => "days",
            AchievementCategory::Weight => "kg",
        }
    }
}

impl fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AchievementCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sleep" => Ok(AchievementCategory::Sleep),
            "fasting" => Ok(AchievementCategory::Fasting),
            "weight" => Ok(AchievementCategory::Weight),
            _ => Err(format!("Unknown achievement category: {}", s)),
        }
    }
}

/// Achievement definition
///
/// `achieved` is the only field that changes over the lifetime of a
/// definition, and it only ever goes from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementDefinition {
    pub id: Uuid,
    pub name: String,
    pub category: AchievementCategory,
    /// Days for sleep/fasting, kilograms for weight
    pub threshold: f64,
    pub points: u32,
    #[serde(default)]
    pub achieved: bool,
    pub description: String,
    pub emoticon: String,
}

impl AchievementDefinition {
    pub fn new(
        name: &str,
        category: AchievementCategory,
        threshold: f64,
        points: u32,
        description: &str,
        emoticon: &str,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category,
            threshold,
            points,
            achieved: false,
            description: description.to_string(),
            emoticon: emoticon.to_string(),
        }
    }
}

// ============================================================================
// Settings
// ============================================================================

/// User settings the engine reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub name: String,
    pub age: u32,
    /// Height in centimeters
    pub height_cm: f64,
    pub eating_start_time: NaiveTime,
    pub eating_window_hours: i32,
    pub bed_time: NaiveTime,
    pub wake_up_time: NaiveTime,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 0,
            height_cm: 0.0,
            eating_start_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap_or_default(),
            eating_window_hours: 6,
            bed_time: NaiveTime::from_hms_opt(22, 30, 0).unwrap_or_default(),
            wake_up_time: NaiveTime::from_hms_opt(6, 30, 0).unwrap_or_default(),
        }
    }
}

// ============================================================================
// Derived
// ============================================================================

/// Where a day bucket came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketOrigin {
    /// Summed from fast-end events on that date
    Recorded,
    /// Zero-delta placeholder for a day inside a multi-day fast
    Synthesized,
}

/// Per-day aggregate the delta streak walks over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub net_delta_minutes: i64,
    pub origin: BucketOrigin,
}
