//! Instant production: real clock, time travel, or a pinned instant.
//!
//! Every render asks the global source for a fresh [`Instant`]. The shifted
//! source adds a user-chosen offset to the real clock, which is how the time
//! travel control previews the dashboard hours ahead or behind. The fixed
//! source pins a single instant for reproducible output and tests.

use anyhow::Context;
use chrono::{Duration as ChronoDuration, NaiveDateTime, TimeZone, Utc};
use once_cell::sync::OnceCell;
use std::sync::Arc;

use crate::constants::{MAXIMUM_SHIFT_MINUTES, SHIFT_STEP_MINUTES};
use crate::solar::Instant;

/// Global time source instance, defaults to RealTimeSource
static TIME_SOURCE: OnceCell<Arc<dyn TimeSource>> = OnceCell::new();

/// Trait for abstracting where instants come from.
pub trait TimeSource: Send + Sync {
    /// The instant to display now.
    fn now(&self) -> Instant;

    /// Whether displayed time differs from the real clock.
    fn is_shifted(&self) -> bool;
}

/// The system clock.
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now(&self) -> Instant {
        Utc::now()
    }

    fn is_shifted(&self) -> bool {
        false
    }
}

/// The system clock moved by a fixed number of minutes.
pub struct ShiftedTimeSource {
    shift_minutes: i64,
}

impl ShiftedTimeSource {
    /// The shift is snapped to the allowed range and step, see [`snap_shift`].
    pub fn new(shift_minutes: i64) -> Self {
        Self {
            shift_minutes: snap_shift(shift_minutes),
        }
    }

    pub fn shift_minutes(&self) -> i64 {
        self.shift_minutes
    }
}

impl TimeSource for ShiftedTimeSource {
    fn now(&self) -> Instant {
        let now = Utc::now();
        apply_shift(now, self.shift_minutes).unwrap_or(now)
    }

    fn is_shifted(&self) -> bool {
        self.shift_minutes != 0
    }
}

/// A pinned instant, optionally shifted. Never advances.
pub struct FixedTimeSource {
    instant: Instant,
}

impl FixedTimeSource {
    pub fn new(instant: Instant) -> Self {
        Self { instant }
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> Instant {
        self.instant
    }

    fn is_shifted(&self) -> bool {
        true
    }
}

/// Clamp a shift to ±12 hours and round it to the nearest quarter hour.
pub fn snap_shift(minutes: i64) -> i64 {
    let clamped = minutes.clamp(-MAXIMUM_SHIFT_MINUTES, MAXIMUM_SHIFT_MINUTES);
    let steps = (clamped as f64 / SHIFT_STEP_MINUTES as f64).round() as i64;
    steps * SHIFT_STEP_MINUTES
}

/// Add a shift in minutes to an instant. Produces a new instant, or `None`
/// past the end of the calendar.
pub fn apply_shift(instant: Instant, minutes: i64) -> Option<Instant> {
    instant.checked_add_signed(ChronoDuration::minutes(minutes))
}

/// Whether every zone's wall clock at `instant` is a representable date.
///
/// UTC offsets stay within a day, so a day of headroom on both sides is enough.
pub fn is_renderable(instant: Instant) -> bool {
    instant.checked_sub_signed(ChronoDuration::days(1)).is_some()
        && instant.checked_add_signed(ChronoDuration::days(1)).is_some()
}

/// Human label for a shift: `"Now"`, `"+2h 30m"`, `"-1h"`.
pub fn format_shift(minutes: i64) -> String {
    if minutes == 0 {
        return "Now".to_string();
    }
    let sign = if minutes > 0 { '+' } else { '-' };
    let hours = minutes.abs() / 60;
    let rest = minutes.abs() % 60;
    if rest > 0 {
        format!("{sign}{hours}h {rest}m")
    } else {
        format!("{sign}{hours}h")
    }
}

/// Initialize the global time source (call once at startup)
pub fn init_time_source(source: Arc<dyn TimeSource>) {
    TIME_SOURCE.set(source).ok();
}

/// Check if the time source has been initialized
pub fn is_initialized() -> bool {
    TIME_SOURCE.get().is_some()
}

/// Get the current instant from the global time source
pub fn now() -> Instant {
    TIME_SOURCE.get_or_init(|| Arc::new(RealTimeSource)).now()
}

/// Check if displayed time differs from the real clock
pub fn is_shifted() -> bool {
    TIME_SOURCE
        .get_or_init(|| Arc::new(RealTimeSource))
        .is_shifted()
}

/// Parse a UTC datetime in the format "YYYY-MM-DD HH:MM:SS"
pub fn parse_utc_datetime(s: &str) -> Result<Instant, String> {
    NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M:%S")
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|e| format!("Invalid datetime format: {e}. Use YYYY-MM-DD HH:MM:SS"))
}

/// The instant for `--at`, moved by an already snapped shift.
pub fn pinned_instant(at: &str, shift_minutes: i64) -> anyhow::Result<Instant> {
    let pinned = parse_utc_datetime(at).map_err(anyhow::Error::msg)?;
    apply_shift(pinned, shift_minutes)
        .filter(|&instant| is_renderable(instant))
        .with_context(|| format!("--at {at} shifted by {} is out of range", format_shift(shift_minutes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_shift() {
        assert_eq!(snap_shift(0), 0);
        assert_eq!(snap_shift(15), 15);
        assert_eq!(snap_shift(22), 15);
        assert_eq!(snap_shift(23), 30);
        assert_eq!(snap_shift(-37), -30);
        assert_eq!(snap_shift(5000), 720);
        assert_eq!(snap_shift(-5000), -720);
    }

    #[test]
    fn test_format_shift() {
        assert_eq!(format_shift(0), "Now");
        assert_eq!(format_shift(150), "+2h 30m");
        assert_eq!(format_shift(-60), "-1h");
        assert_eq!(format_shift(-15), "-0h 15m");
    }

    #[test]
    fn test_apply_shift_produces_new_instant() {
        let base = parse_utc_datetime("2024-06-21 12:00:00").unwrap();
        let shifted = apply_shift(base, -90);
        assert_eq!(shifted, Some(parse_utc_datetime("2024-06-21 10:30:00").unwrap()));
        assert_eq!(base, parse_utc_datetime("2024-06-21 12:00:00").unwrap());
    }

    #[test]
    fn test_apply_shift_past_calendar_end() {
        let last = chrono::DateTime::<Utc>::MAX_UTC - ChronoDuration::minutes(60);
        assert_eq!(apply_shift(last, 720), None);
        assert!(apply_shift(last, 30).is_some());
        assert_eq!(apply_shift(chrono::DateTime::<Utc>::MIN_UTC, -15), None);
    }

    #[test]
    fn test_pinned_instant() {
        assert_eq!(
            pinned_instant("2024-06-21 12:00:00", 90).unwrap(),
            parse_utc_datetime("2024-06-21 13:30:00").unwrap()
        );
        assert!(pinned_instant("tomorrow", 0).is_err());

        let err = pinned_instant("+262142-12-31 20:00:00", 720).unwrap_err();
        assert!(err.to_string().contains("out of range"));
        assert!(pinned_instant("+262142-12-31 20:00:00", 0).is_err());
        assert!(pinned_instant("+262000-01-01 00:00:00", -720).is_ok());
    }

    #[test]
    fn test_is_renderable_needs_a_day_of_headroom() {
        assert!(is_renderable(parse_utc_datetime("2024-06-21 12:00:00").unwrap()));
        assert!(!is_renderable(chrono::DateTime::<Utc>::MAX_UTC - ChronoDuration::hours(12)));
        assert!(is_renderable(chrono::DateTime::<Utc>::MAX_UTC - ChronoDuration::days(2)));
        assert!(!is_renderable(chrono::DateTime::<Utc>::MIN_UTC));
    }

    #[test]
    fn test_shifted_source_snaps_and_reports() {
        let source = ShiftedTimeSource::new(100);
        assert_eq!(source.shift_minutes(), 105);
        assert!(source.is_shifted());
        assert!(!ShiftedTimeSource::new(3).is_shifted());
    }

    #[test]
    fn test_fixed_source_does_not_advance() {
        let instant = parse_utc_datetime("2024-01-15 08:00:00").unwrap();
        let source = FixedTimeSource::new(instant);
        assert_eq!(source.now(), instant);
        assert_eq!(source.now(), instant);
        assert!(source.is_shifted());
    }

    #[test]
    fn test_parse_utc_datetime_rejects_garbage() {
        assert!(parse_utc_datetime("2024-13-01 00:00:00").is_err());
        assert!(parse_utc_datetime("yesterday").is_err());
    }
}
