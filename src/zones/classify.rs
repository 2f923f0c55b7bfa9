//! Local-hour classification.

use serde::Serialize;

use crate::constants::*;

/// Coarse suitability of a local hour for a meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    /// 09:00 to 17:00.
    Business,
    /// 07:00 to 09:00 and 17:00 to 20:00.
    Extended,
    Off,
}

impl TimeSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Business => "business",
            TimeSlot::Extended => "extended",
            TimeSlot::Off => "off",
        }
    }

    /// Single-character cell used by the terminal planner grid.
    pub fn glyph(&self) -> char {
        match self {
            TimeSlot::Business => '█',
            TimeSlot::Extended => '▒',
            TimeSlot::Off => '·',
        }
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a local hour (0-23). Upper bounds are exclusive.
pub fn classify_slot(hour: u32) -> TimeSlot {
    if (BUSINESS_START_HOUR..BUSINESS_END_HOUR).contains(&hour) {
        TimeSlot::Business
    } else if (EXTENDED_MORNING_START_HOUR..BUSINESS_START_HOUR).contains(&hour)
        || (BUSINESS_END_HOUR..EXTENDED_EVENING_END_HOUR).contains(&hour)
    {
        TimeSlot::Extended
    } else {
        TimeSlot::Off
    }
}

/// Daylight heuristic for card iconography: 06:00 up to, not including, 18:00.
pub fn is_daylight(hour: u32) -> bool {
    (DAYLIGHT_START_HOUR..DAYLIGHT_END_HOUR).contains(&hour)
}
