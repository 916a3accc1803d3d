pub mod phase;
pub mod time;

pub use phase::{
    illumination, phase_value, reference_new_moon, MoonPhase, REFERENCE_NEW_MOON_UNIX,
    SYNODIC_MONTH_DAYS,
};
pub use time::parse_timestamp;
