//! Reading favorability: maps the current phase to a verdict on tarot
//! practice via the fixed table in [`crate::content`]. Pure lookup after
//! phase classification, no extra numerical work.

use chrono::{DateTime, Utc};

use crate::api::FavorabilityVerdict;
use crate::content;
use crate::models::{phase_value, MoonPhase};

/// Favorability verdict for a reading at the given UTC timestamp.
pub fn reading_favorability(date: DateTime<Utc>) -> FavorabilityVerdict {
    let phase = MoonPhase::from_phase_value(phase_value(date));
    let entry = content::favorability(phase);

    FavorabilityVerdict {
        is_favorable: entry.is_favorable,
        reason: entry.reason.to_string(),
        recommendation: entry.recommendation.to_string(),
    }
}

/// Favorability verdict for the current system time.
pub fn reading_favorability_now() -> FavorabilityVerdict {
    reading_favorability(Utc::now())
}
