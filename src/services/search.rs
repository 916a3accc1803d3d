//! Next-occurrence search for new and full moons.
//!
//! Solved in closed form on the phase value rather than by day iteration:
//! the next crossing of a target cycle point lies exactly
//! `((target − pv) mod 1) · SYNODIC_MONTH_DAYS` days ahead.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::api::NextOccurrence;
use crate::models::{phase_value, SYNODIC_MONTH_DAYS};

/// Cycle point of the full moon.
const FULL_MOON_POINT: f64 = 0.5;
/// Cycle point of the new moon.
const NEW_MOON_POINT: f64 = 0.0;

/// Next full moon at or after `from`.
///
/// `days_until` is always in `[0, SYNODIC_MONTH_DAYS)`; an instant exactly
/// at the full moon reports zero days.
pub fn next_full_moon(from: DateTime<Utc>) -> NextOccurrence {
    next_crossing(from, FULL_MOON_POINT)
}

/// Next new moon at or after `from`.
pub fn next_new_moon(from: DateTime<Utc>) -> NextOccurrence {
    next_crossing(from, NEW_MOON_POINT)
}

/// Next full moon from the current system time.
pub fn next_full_moon_now() -> NextOccurrence {
    next_full_moon(Utc::now())
}

/// Next new moon from the current system time.
pub fn next_new_moon_now() -> NextOccurrence {
    next_new_moon(Utc::now())
}

fn next_crossing(from: DateTime<Utc>, point: f64) -> NextOccurrence {
    let days_until = (point - phase_value(from)).rem_euclid(1.0) * SYNODIC_MONTH_DAYS;
    let date = from + Duration::milliseconds((days_until * 86_400_000.0).round() as i64);
    debug!(point, days_until, "next phase crossing");

    NextOccurrence {
        date,
        date_formatted: date.format("%-d %B %Y").to_string(),
        days_until,
    }
}

/// All crossings of `point` within `[window_start, window_end)`, in order.
///
/// Used by the calendar to flag new/full moon days; a window of one calendar
/// month yields zero, one, or two crossings.
pub(crate) fn crossings_in_window(
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    point: f64,
) -> Vec<DateTime<Utc>> {
    let first_ahead = (point - phase_value(window_start)).rem_euclid(1.0) * SYNODIC_MONTH_DAYS;

    let mut crossings = Vec::new();
    let mut days_ahead = first_ahead;
    loop {
        let instant = window_start + Duration::milliseconds((days_ahead * 86_400_000.0).round() as i64);
        if instant >= window_end {
            break;
        }
        crossings.push(instant);
        days_ahead += SYNODIC_MONTH_DAYS;
    }
    crossings
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};

    #[test]
    fn test_next_new_moon_hits_reference_lunation() {
        // NASA: new moon 2024-01-11 11:57 UTC
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let occurrence = next_new_moon(from);
        assert_eq!(occurrence.date.year(), 2024);
        assert_eq!(occurrence.date.month(), 1);
        assert_eq!(occurrence.date.day(), 11);
        assert!((occurrence.days_until - 10.497_9).abs() < 0.01);
        assert_eq!(occurrence.date_formatted, "11 January 2024");
    }

    #[test]
    fn test_next_full_moon_near_nasa_date() {
        // NASA: full moon 2024-01-25 17:54 UTC; the mean cycle lands within
        // a day of it
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let occurrence = next_full_moon(from);
        let nasa = Utc.with_ymd_and_hms(2024, 1, 25, 17, 54, 0).unwrap();
        let off_days = (occurrence.date - nasa).num_seconds().abs() as f64 / 86_400.0;
        assert!(off_days < 1.0, "off by {off_days:.2} days");
    }

    #[test]
    fn test_days_until_bounds() {
        let from = Utc.with_ymd_and_hms(2025, 6, 3, 7, 45, 0).unwrap();
        for occurrence in [next_full_moon(from), next_new_moon(from)] {
            assert!(occurrence.days_until >= 0.0);
            assert!(occurrence.days_until < SYNODIC_MONTH_DAYS);
            assert!(occurrence.date >= from);
        }
    }

    #[test]
    fn test_crossing_at_query_instant_is_zero_days() {
        let epoch = crate::models::reference_new_moon();
        let occurrence = next_new_moon(epoch);
        assert_eq!(occurrence.days_until, 0.0);
        assert_eq!(occurrence.date, epoch);
    }

    #[test]
    fn test_consecutive_crossings_one_cycle_apart() {
        let from = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let first = next_full_moon(from);
        let second = next_full_moon(first.date + Duration::seconds(1));
        let gap_days = (second.date - first.date).num_seconds() as f64 / 86_400.0;
        assert!((gap_days - SYNODIC_MONTH_DAYS).abs() < 0.001);
    }

    #[test]
    fn test_crossings_in_window_counts() {
        // August 2023 contains two mean-cycle full moons
        let start = Utc.with_ymd_and_hms(2023, 8, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2023, 9, 1, 0, 0, 0).unwrap();
        let fulls = crossings_in_window(start, end, FULL_MOON_POINT);
        assert_eq!(fulls.len(), 2);
        assert_eq!(fulls[0].day(), 2);
        assert_eq!(fulls[1].day(), 31);

        // A one-week window holds at most one crossing
        let week_end = Utc.with_ymd_and_hms(2023, 8, 8, 0, 0, 0).unwrap();
        assert!(crossings_in_window(start, week_end, NEW_MOON_POINT).len() <= 1);
    }
}
