//! Core astronomical model: synodic constants, the [`MoonPhase`] enumeration,
//! and the phase-value / illumination math.
//!
//! The model is the classic mean-cycle approximation: the Moon's age is the
//! elapsed time since a reference new moon, reduced modulo the mean synodic
//! month. Accuracy against true lunations is a few hours to under a day in
//! the years around the reference epoch, which is sufficient for phase
//! classification and calendars.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// Reference new moon: 2024-01-11 11:57:00 UTC (NASA), as a unix timestamp.
///
/// A current-era lunation is used as the zero point rather than the
/// traditional 2000-01-06 epoch: under a mean cycle the 2000 epoch has
/// drifted ~0.85 days against true lunations by the mid-2020s.
pub const REFERENCE_NEW_MOON_UNIX: i64 = 1_704_974_220;

/// Mean length of the synodic month (new moon to new moon) in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_67;

/// The reference new moon as a chrono timestamp.
pub fn reference_new_moon() -> DateTime<Utc> {
    DateTime::from_timestamp(REFERENCE_NEW_MOON_UNIX, 0).unwrap_or(DateTime::UNIX_EPOCH)
}

/// The eight named phases, in cycle order starting from the new moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// All phases in cycle order.
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::NewMoon,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::FullMoon,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    /// Canonical human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }

    /// Look up a phase by its canonical name.
    pub fn from_name(name: &str) -> Result<MoonPhase, Error> {
        MoonPhase::ALL
            .into_iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| Error::UnknownPhase(name.to_string()))
    }

    /// Classify a phase value in `[0, 1)` into its named phase.
    ///
    /// The eight buckets are equal-width (1/8 of the cycle) and *centered*
    /// on the canonical phase points, lower edge inclusive: New Moon spans
    /// `[15/16, 1) ∪ [0, 1/16)`, Full Moon `[7/16, 9/16)`, and so on.
    /// Centering keeps real new/full moon instants inside their named bucket
    /// despite mean-cycle drift.
    pub fn from_phase_value(phase_value: f64) -> MoonPhase {
        let shifted = (phase_value + 1.0 / 16.0).rem_euclid(1.0);
        let index = ((shifted * 8.0) as usize).min(7);
        MoonPhase::ALL[index]
    }

    /// True for the waxing half of the cycle (new moon through full moon).
    pub fn is_waxing(self) -> bool {
        matches!(
            self,
            MoonPhase::NewMoon
                | MoonPhase::WaxingCrescent
                | MoonPhase::FirstQuarter
                | MoonPhase::WaxingGibbous
        )
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MoonPhase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoonPhase::from_name(s)
    }
}

// Serialized as the canonical name string so the JSON surface carries
// "Full Moon" rather than a variant identifier.
impl Serialize for MoonPhase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for MoonPhase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        MoonPhase::from_name(&raw).map_err(de::Error::custom)
    }
}

/// Normalized position within the synodic cycle, in `[0, 1)`.
///
/// 0 is the new moon, 0.5 the full moon. Dates before the reference epoch
/// are wrapped forward by whole cycles, so the result is always
/// non-negative. The Moon's age in days is `phase_value * SYNODIC_MONTH_DAYS`.
pub fn phase_value(date: DateTime<Utc>) -> f64 {
    let elapsed_secs = date.timestamp() as f64 + date.timestamp_subsec_nanos() as f64 / 1e9
        - REFERENCE_NEW_MOON_UNIX as f64;
    let elapsed_days = elapsed_secs / 86_400.0;
    let value = elapsed_days.rem_euclid(SYNODIC_MONTH_DAYS) / SYNODIC_MONTH_DAYS;
    // A tiny negative elapsed time can round up to a full cycle.
    if value >= 1.0 {
        0.0
    } else {
        value
    }
}

/// Illuminated fraction of the Moon's disk, in percent `[0, 100]`.
///
/// Standard cosine approximation `50·(1 − cos(2π·pv))`, rounded to the
/// nearest integer: 0 at the new moon, 100 at the full moon.
pub fn illumination(phase_value: f64) -> f64 {
    (50.0 * (1.0 - (std::f64::consts::TAU * phase_value).cos())).round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_reference_epoch_is_a_new_moon() {
        let epoch = reference_new_moon();
        assert_eq!(phase_value(epoch), 0.0);
        assert_eq!(illumination(phase_value(epoch)), 0.0);
        assert_eq!(MoonPhase::from_phase_value(0.0), MoonPhase::NewMoon);
    }

    #[test]
    fn test_phase_value_range_over_date_spread() {
        // Mixed dates after and well before the epoch
        let dates = [
            Utc.with_ymd_and_hms(1969, 7, 20, 20, 17, 0).unwrap(),
            Utc.with_ymd_and_hms(1995, 3, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2030, 12, 31, 23, 59, 59).unwrap(),
        ];
        for date in dates {
            let pv = phase_value(date);
            assert!((0.0..1.0).contains(&pv), "pv {pv} out of range for {date}");
            let illum = illumination(pv);
            assert!((0.0..=100.0).contains(&illum));
        }
    }

    #[test]
    fn test_phase_value_deterministic() {
        let date = Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap();
        assert_eq!(phase_value(date), phase_value(date));
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let date = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let one_cycle = chrono::Duration::milliseconds((SYNODIC_MONTH_DAYS * 86_400_000.0) as i64);
        let pv0 = phase_value(date);
        let pv1 = phase_value(date + one_cycle);
        assert!((pv0 - pv1).abs() < 1e-6, "pv0 {pv0} vs pv1 {pv1}");
    }

    #[test]
    fn test_illumination_extremes() {
        assert_eq!(illumination(0.0), 0.0);
        assert_eq!(illumination(0.5), 100.0);
        assert_eq!(illumination(0.25), 50.0);
        assert_eq!(illumination(0.75), 50.0);
    }

    #[test]
    fn test_bucket_centering() {
        // Lower edge of each centered bucket is inclusive
        assert_eq!(MoonPhase::from_phase_value(15.0 / 16.0), MoonPhase::NewMoon);
        assert_eq!(
            MoonPhase::from_phase_value(1.0 / 16.0),
            MoonPhase::WaxingCrescent
        );
        assert_eq!(MoonPhase::from_phase_value(0.24), MoonPhase::FirstQuarter);
        assert_eq!(MoonPhase::from_phase_value(7.0 / 16.0), MoonPhase::FullMoon);
        assert_eq!(MoonPhase::from_phase_value(0.56), MoonPhase::FullMoon);
        assert_eq!(
            MoonPhase::from_phase_value(9.0 / 16.0),
            MoonPhase::WaningGibbous
        );
        assert_eq!(MoonPhase::from_phase_value(0.74), MoonPhase::LastQuarter);
        assert_eq!(
            MoonPhase::from_phase_value(0.93),
            MoonPhase::WaningCrescent
        );
    }

    #[test]
    fn test_canonical_names_round_trip() {
        for phase in MoonPhase::ALL {
            assert_eq!(MoonPhase::from_name(phase.name()).unwrap(), phase);
            assert_eq!(phase.name().parse::<MoonPhase>().unwrap(), phase);
        }
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        let err = MoonPhase::from_name("Blue Moon").unwrap_err();
        assert_eq!(err, Error::UnknownPhase("Blue Moon".to_string()));
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        let json = serde_json::to_string(&MoonPhase::FullMoon).unwrap();
        assert_eq!(json, "\"Full Moon\"");
        let parsed: MoonPhase = serde_json::from_str("\"Waning Crescent\"").unwrap();
        assert_eq!(parsed, MoonPhase::WaningCrescent);
        assert!(serde_json::from_str::<MoonPhase>("\"FullMoon\"").is_err());
    }

    #[test]
    fn test_is_waxing() {
        assert!(MoonPhase::WaxingGibbous.is_waxing());
        assert!(!MoonPhase::WaningGibbous.is_waxing());
    }

    #[test]
    fn test_pre_epoch_dates_wrap_forward() {
        // Well before the reference epoch
        let date = Utc.with_ymd_and_hms(1990, 5, 4, 0, 0, 0).unwrap();
        let pv = phase_value(date);
        assert!((0.0..1.0).contains(&pv));
    }
}
