//! # Lunaria
//!
//! Lunar phase computation engine.
//!
//! This crate computes the Moon's position within its synodic cycle and
//! everything a reading service derives from it: the eight named phases,
//! illuminated fraction, per-phase guidance, month calendars with new/full
//! moon days marked, next-occurrence lookups, and a favorability verdict for
//! tarot practice.
//!
//! Every operation is a pure, synchronous function of its input date plus two
//! fixed astronomical constants and static content tables. There is no I/O,
//! no shared state, and no ambient clock read outside the explicit `_now`
//! conveniences, so concurrent callers need no coordination and tests can
//! inject fixed dates.
//!
//! ## Architecture
//!
//! - [`models`]: the astronomical model — constants, [`models::MoonPhase`],
//!   phase-value and illumination math, timestamp parsing
//! - [`content`]: static per-phase profiles and the favorability table
//! - [`api`]: serde-serializable value objects returned by the operations
//! - [`services`]: the public operations (phase, calendar, search,
//!   favorability)
//! - [`error`]: the error taxonomy

pub mod api;
pub mod content;
pub mod error;
pub mod models;
pub mod services;

pub use error::{Error, Result};
pub use models::MoonPhase;
