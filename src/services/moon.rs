//! Phase computation service.
//!
//! Computes the Moon's full phase state for a query date: cycle position,
//! named phase, illumination, and the static per-phase content.

use chrono::{DateTime, Utc};

use crate::api::{MoonPhaseResult, Recommendations};
use crate::content;
use crate::error::Result;
use crate::models::{illumination, parse_timestamp, phase_value, MoonPhase, SYNODIC_MONTH_DAYS};

/// Compute the Moon's phase state for a given UTC timestamp.
///
/// Pure and deterministic: the same date always yields the identical result,
/// across calls and process restarts.
///
/// # Arguments
///
/// * `date` - Query timestamp (UTC)
///
/// # Returns
///
/// The computed [`MoonPhaseResult`], allocated fresh on every call.
pub fn compute_phase(date: DateTime<Utc>) -> MoonPhaseResult {
    let pv = phase_value(date);
    let phase = MoonPhase::from_phase_value(pv);
    let profile = content::profile(phase);

    MoonPhaseResult {
        date,
        phase_value: pv,
        phase_name: phase,
        age_days: pv * SYNODIC_MONTH_DAYS,
        illumination: illumination(pv),
        emoji: profile.emoji.to_string(),
        description: profile.description.to_string(),
        energy: profile.energy.to_string(),
        recommendations: recommendations_of(phase),
    }
}

/// Compute the phase state for the current system time.
pub fn compute_phase_now() -> MoonPhaseResult {
    compute_phase(Utc::now())
}

/// Compute the phase state for an optional caller-supplied timestamp string,
/// defaulting to the current system time.
///
/// This is the entry point an HTTP layer binds: `Err(InvalidDate)` when the
/// argument cannot be parsed.
pub fn compute_phase_str(input: Option<&str>) -> Result<MoonPhaseResult> {
    match input {
        Some(raw) => Ok(compute_phase(parse_timestamp(raw)?)),
        None => Ok(compute_phase_now()),
    }
}

/// Recommendations for a phase given by its canonical name.
///
/// Standalone lookup so callers can re-derive advice without recomputing the
/// astronomical state. `Err(UnknownPhase)` for non-canonical names.
pub fn recommendations_for(name: &str) -> Result<Recommendations> {
    Ok(recommendations_of(name.parse::<MoonPhase>()?))
}

fn recommendations_of(phase: MoonPhase) -> Recommendations {
    let profile = content::profile(phase);
    Recommendations {
        tarot: profile.tarot.to_string(),
        general: profile.general.iter().map(|s| s.to_string()).collect(),
    }
}
