//! Public API surface: the value objects returned by the service operations.
//!
//! All types derive Serialize/Deserialize for JSON serialization by the
//! consuming HTTP layer. Every value is computed fresh per call and never
//! persisted by this crate.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::MoonPhase;

/// Per-phase practice recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    /// Tarot-practice suggestion tied to the phase's symbolic meaning.
    pub tarot: String,
    /// General life-advice strings for the phase.
    pub general: Vec<String>,
}

/// Full computed state of the Moon for one query date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoonPhaseResult {
    /// The query timestamp (UTC).
    pub date: DateTime<Utc>,
    /// Normalized position in the synodic cycle, `[0, 1)`.
    pub phase_value: f64,
    /// Named phase, serialized as its canonical name string.
    pub phase_name: MoonPhase,
    /// Moon's age in days: `phase_value * SYNODIC_MONTH_DAYS`.
    pub age_days: f64,
    /// Illuminated fraction of the disk, percent `[0, 100]`.
    pub illumination: f64,
    pub emoji: String,
    pub description: String,
    pub energy: String,
    pub recommendations: Recommendations,
}

/// One day of a month calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Day of month, 1-based.
    pub day: u32,
    pub date: NaiveDate,
    pub phase_name: MoonPhase,
    pub emoji: String,
    pub illumination: f64,
    /// True when a new or full moon instant falls on this UTC day.
    pub is_special: bool,
}

/// Month calendar: one entry per calendar day, evaluated at 12:00 UTC.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthCalendar {
    pub year: i32,
    /// 1-based month (1 = January).
    pub month: u32,
    pub month_name: String,
    pub days: Vec<CalendarDay>,
}

/// Next occurrence of a target phase point (new or full moon).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextOccurrence {
    pub date: DateTime<Utc>,
    /// Display form, e.g. "26 January 2024".
    pub date_formatted: String,
    /// Days from the query instant, always `[0, SYNODIC_MONTH_DAYS)`.
    pub days_until: f64,
}

/// Verdict on whether the current phase favors a tarot reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavorabilityVerdict {
    pub is_favorable: bool,
    pub reason: String,
    pub recommendation: String,
}
