//! Relative offsets between zones.
//!
//! The whole-hour offset compares local hours, not UTC offsets, so a zone
//! half an hour ahead is reported by whichever hour its clock currently
//! shows. The exact difference is carried separately in
//! [`ZoneOffsetResult::utc_offset_difference_hours`].

use chrono_tz::Tz;

use super::local_time::{LocalTimeResult, zoned_local_time_in};
use super::{ZoneResult, parse_time_zone};
use crate::solar::Instant;

/// Per-city facts relative to a reference zone.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneOffsetResult {
    pub local: LocalTimeResult,
    /// Shortest signed hour difference, in `(-12, 12]`.
    pub hour_offset: i32,
    /// Exact UTC-offset difference in hours (fractional for :30 / :45 zones).
    pub utc_offset_difference_hours: f64,
    /// Local-hour daylight heuristic.
    pub is_day: bool,
}

/// Fold a raw difference of local hours into `(-12, 12]`.
///
/// A difference of exactly +12 stays +12 and exactly -12 becomes +12, so
/// antipodal zones always read as "+12h".
pub fn normalize_hour_difference(raw: i32) -> i32 {
    if raw > 12 {
        raw - 24
    } else if raw <= -12 {
        raw + 24
    } else {
        raw
    }
}

/// Hour offset between two parsed zones at `instant`.
pub fn hour_offset_between(instant: Instant, reference: Tz, target: Tz) -> i32 {
    let reference_hour = zoned_local_time_in(instant, reference).hour() as i32;
    let target_hour = zoned_local_time_in(instant, target).hour() as i32;
    normalize_hour_difference(target_hour - reference_hour)
}

/// Signed whole hours `target` is ahead of `reference` at `instant`.
pub fn hour_offset(instant: Instant, reference_id: &str, target_id: &str) -> ZoneResult<i32> {
    let reference = parse_time_zone(reference_id)?;
    let target = parse_time_zone(target_id)?;
    Ok(hour_offset_between(instant, reference, target))
}

/// Full offset record for `target` relative to `reference`.
pub fn zone_offset(
    instant: Instant,
    reference_id: &str,
    target_id: &str,
) -> ZoneResult<ZoneOffsetResult> {
    let reference = parse_time_zone(reference_id)?;
    let target = parse_time_zone(target_id)?;
    Ok(zone_offset_between(instant, reference, target))
}

pub(crate) fn zone_offset_between(instant: Instant, reference: Tz, target: Tz) -> ZoneOffsetResult {
    let reference_local = zoned_local_time_in(instant, reference);
    let local = zoned_local_time_in(instant, target);

    let difference_seconds = local.utc_offset_seconds() - reference_local.utc_offset_seconds();
    let hour_offset = normalize_hour_difference(local.hour() as i32 - reference_local.hour() as i32);
    let is_day = local.is_day();

    ZoneOffsetResult {
        local,
        hour_offset,
        utc_offset_difference_hours: f64::from(difference_seconds) / 3600.0,
        is_day,
    }
}

/// Card label for an hour offset: `"Local"`, `"+3h"`, `"-5h"`.
pub fn format_offset_label(hours: i32) -> String {
    match hours {
        0 => "Local".to_string(),
        h if h > 0 => format!("+{h}h"),
        h => format!("{h}h"),
    }
}
