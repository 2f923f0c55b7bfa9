//! Time-zone offset and classification engine.
//!
//! Converts absolute instants into per-city wall-clock facts:
//!
//! - [`local_time`]: zoned wall-clock time via the IANA database (`chrono-tz`)
//! - [`offset`]: shortest signed whole-hour difference between two zones
//! - [`classify`]: business / extended / off hour classes and the daylight
//!   heuristic used for card iconography
//!
//! The daylight heuristic is a fixed local-hour window and is deliberately
//! independent of the astronomical terminator in [`crate::solar`]. The two can
//! disagree around dawn and dusk and at high latitudes; see
//! [`crate::dashboard::ClockCard::heuristic_disagrees`].

pub mod classify;
pub mod local_time;
pub mod offset;

use chrono_tz::Tz;
use thiserror::Error;

use crate::constants::FALLBACK_TIMEZONE;

pub use classify::{TimeSlot, classify_slot, is_daylight};
pub use local_time::{
    LocalTimeResult, zoned_local_time, zoned_local_time_in, zoned_local_time_or_utc,
};
pub use offset::{
    ZoneOffsetResult, format_offset_label, hour_offset, hour_offset_between,
    normalize_hour_difference, zone_offset,
};

pub type ZoneResult<T> = Result<T, ZoneError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneError {
    #[error("Invalid time zone identifier: '{id}'")]
    InvalidTimeZone { id: String },
}

impl ZoneError {
    pub fn invalid_time_zone(id: impl Into<String>) -> Self {
        Self::InvalidTimeZone { id: id.into() }
    }
}

/// Parse an IANA identifier such as `"Europe/Madrid"`.
///
/// Surrounding whitespace is ignored; anything the tz database does not know,
/// including the empty string, is an [`ZoneError::InvalidTimeZone`].
pub fn parse_time_zone(id: &str) -> ZoneResult<Tz> {
    id.trim()
        .parse::<Tz>()
        .map_err(|_| ZoneError::invalid_time_zone(id))
}

/// Parse an identifier, substituting UTC when it is not recognized.
///
/// City data often comes from unvalidated search results, so rendering keeps
/// going with a warning instead of failing.
pub fn resolve_or_utc(id: &str) -> Tz {
    match parse_time_zone(id) {
        Ok(tz) => tz,
        Err(e) => {
            log_warning!("{e}, falling back to {FALLBACK_TIMEZONE}");
            Tz::UTC
        }
    }
}
