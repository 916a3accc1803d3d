//! Service layer: the public operations of the crate.
//!
//! Each operation is a pure function of its input date plus the fixed
//! constants and static tables in [`crate::models`] and [`crate::content`].
//! The `_now` variants are the only places the system clock is read.

pub mod calendar;
pub mod favorability;
pub mod moon;
pub mod search;

pub use calendar::month_calendar;
pub use favorability::{reading_favorability, reading_favorability_now};
pub use moon::{compute_phase, compute_phase_now, compute_phase_str, recommendations_for};
pub use search::{next_full_moon, next_full_moon_now, next_new_moon, next_new_moon_now};
