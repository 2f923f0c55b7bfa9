//! Wall-clock time in a given zone.

use chrono::{DateTime, Datelike, NaiveDate, Offset, Timelike};
use chrono_tz::Tz;

use super::classify::is_daylight;
use super::{ZoneResult, parse_time_zone, resolve_or_utc};
use crate::solar::Instant;

/// An instant as observed in one time zone.
///
/// DST is already applied: `local` carries the offset in force at that
/// instant, not the zone's standard offset.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalTimeResult {
    pub timezone: Tz,
    pub local: DateTime<Tz>,
}

impl LocalTimeResult {
    pub fn hour(&self) -> u32 {
        self.local.hour()
    }

    pub fn minute(&self) -> u32 {
        self.local.minute()
    }

    pub fn second(&self) -> u32 {
        self.local.second()
    }

    pub fn date(&self) -> NaiveDate {
        self.local.date_naive()
    }

    pub fn weekday(&self) -> chrono::Weekday {
        self.local.weekday()
    }

    /// Offset from UTC in seconds, east positive.
    pub fn utc_offset_seconds(&self) -> i32 {
        self.local.offset().fix().local_minus_utc()
    }

    /// Zone abbreviation in force, e.g. `CEST` or `+0530`.
    pub fn abbreviation(&self) -> String {
        self.local.format("%Z").to_string()
    }

    /// Local-hour daylight heuristic (6:00 to 18:00).
    pub fn is_day(&self) -> bool {
        is_daylight(self.hour())
    }
}

/// Convert `instant` to wall-clock time in an already parsed zone.
pub fn zoned_local_time_in(instant: Instant, timezone: Tz) -> LocalTimeResult {
    LocalTimeResult {
        timezone,
        local: instant.with_timezone(&timezone),
    }
}

/// Convert `instant` to wall-clock time in the zone named `timezone_id`.
///
/// Fails with `InvalidTimeZone` when the identifier is not in the tz database.
pub fn zoned_local_time(instant: Instant, timezone_id: &str) -> ZoneResult<LocalTimeResult> {
    let timezone = parse_time_zone(timezone_id)?;
    Ok(zoned_local_time_in(instant, timezone))
}

/// Like [`zoned_local_time`], but renders in UTC when the zone is unknown.
pub fn zoned_local_time_or_utc(instant: Instant, timezone_id: &str) -> LocalTimeResult {
    zoned_local_time_in(instant, resolve_or_utc(timezone_id))
}
