//! Month calendar generation.
//!
//! Enumerates every day of a calendar month, evaluating the phase at a fixed
//! 12:00 UTC, and flags the days on which a new or full moon instant falls.
//! Flagging works on the exact crossing instants (closed form, see
//! [`super::search`]) rather than bucket membership, so a multi-day bucket
//! never marks more than its event day and a month correctly carries zero,
//! one, or two events of each kind.

use std::collections::HashSet;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use tracing::debug;

use crate::api::{CalendarDay, MonthCalendar};
use crate::content;
use crate::error::{Error, Result};
use crate::models::{illumination, phase_value, MoonPhase};
use crate::services::search;

/// Build the phase calendar for one month.
///
/// `month` is 1-based (1 = January). Leap years are handled by chrono, so
/// February 2024 yields 29 days. Invalid (year, month) pairs are rejected
/// with [`Error::InvalidDate`].
pub fn month_calendar(year: i32, month: u32) -> Result<MonthCalendar> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| Error::InvalidDate(format!("{year}-{month:02} is not a calendar month")))?;
    let next_first = first_of_next_month(year, month)?;
    let day_count = next_first.signed_duration_since(first).num_days() as u32;

    let window_start = first.and_time(NaiveTime::MIN).and_utc();
    let window_end = next_first.and_time(NaiveTime::MIN).and_utc();
    let special_days = special_days(window_start, window_end);
    debug!(year, month, day_count, specials = special_days.len(), "generating month calendar");

    let days = (1..=day_count)
        .map(|day| {
            let at_noon = window_start + Duration::days(i64::from(day) - 1) + Duration::hours(12);
            let date = at_noon.date_naive();
            let pv = phase_value(at_noon);
            let phase = MoonPhase::from_phase_value(pv);

            CalendarDay {
                day,
                date,
                phase_name: phase,
                emoji: content::profile(phase).emoji.to_string(),
                illumination: illumination(pv),
                is_special: special_days.contains(&date),
            }
        })
        .collect();

    Ok(MonthCalendar {
        year,
        month,
        month_name: first.format("%B").to_string(),
        days,
    })
}

/// UTC dates in the window on which a new or full moon instant falls.
fn special_days(window_start: DateTime<Utc>, window_end: DateTime<Utc>) -> HashSet<NaiveDate> {
    let mut days = HashSet::new();
    for point in [0.0, 0.5] {
        for instant in search::crossings_in_window(window_start, window_end, point) {
            days.insert(instant.date_naive());
        }
    }
    days
}

fn first_of_next_month(year: i32, month: u32) -> Result<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .ok_or_else(|| Error::InvalidDate(format!("{year}-{month:02} is not a calendar month")))
}
