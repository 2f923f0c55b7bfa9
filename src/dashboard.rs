//! Clock-card facts for each city, composed from both engines.
//!
//! Every card in a snapshot is built from the same instant so the card's
//! day/night state and the map's night shadow describe the same moment.

use chrono_tz::Tz;
use serde::Serialize;

use crate::city::City;
use crate::solar::{GeoPoint, Instant, NightRegion, compute_night_region};
use crate::zones::offset::zone_offset_between;
use crate::zones::{TimeSlot, classify_slot, format_offset_label};

/// Display toggles taken from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub use_24_hour: bool,
    pub show_seconds: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            use_24_hour: crate::constants::DEFAULT_USE_24_HOUR,
            show_seconds: crate::constants::DEFAULT_SHOW_SECONDS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockCard {
    pub name: String,
    pub country: String,
    /// Zone actually used, after any fallback.
    pub timezone: String,
    /// `14:05`, or `2:05 PM` in 12-hour mode.
    pub time: String,
    pub seconds: Option<String>,
    /// `Mon, 3 Jun`.
    pub date: String,
    pub offset_label: String,
    pub hour_offset: i32,
    pub slot: TimeSlot,
    /// Local-hour heuristic.
    pub is_day: bool,
    /// Astronomical night at the city's coordinates, when known.
    pub in_night_region: Option<bool>,
}

impl ClockCard {
    pub fn build(city: &City, instant: Instant, reference: Tz, options: &DisplayOptions) -> Self {
        let region = compute_night_region(instant);
        Self::build_with_region(city, instant, reference, options, &region)
    }

    fn build_with_region(
        city: &City,
        instant: Instant,
        reference: Tz,
        options: &DisplayOptions,
        region: &NightRegion,
    ) -> Self {
        let timezone = city.resolve_timezone();
        let offset = zone_offset_between(instant, reference, timezone);
        let local = &offset.local.local;

        let time = if options.use_24_hour {
            local.format("%H:%M").to_string()
        } else {
            local.format("%-I:%M %p").to_string()
        };

        Self {
            name: city.name.clone(),
            country: city.country.clone(),
            timezone: timezone.name().to_string(),
            time,
            seconds: options
                .show_seconds
                .then(|| local.format("%S").to_string()),
            date: local.format("%a, %-d %b").to_string(),
            offset_label: format_offset_label(offset.hour_offset),
            hour_offset: offset.hour_offset,
            slot: classify_slot(offset.local.hour()),
            is_day: offset.is_day,
            in_night_region: city
                .location()
                .filter(GeoPoint::is_finite)
                .map(|point| region.contains(point)),
        }
    }

    /// True when the hour heuristic and the terminator disagree, which is
    /// expected around dawn and dusk and at high latitudes.
    pub fn heuristic_disagrees(&self) -> bool {
        self.in_night_region
            .is_some_and(|night| night == self.is_day)
    }

    pub fn icon(&self) -> &'static str {
        if self.is_day { "☀" } else { "☾" }
    }
}

/// Build cards for all cities against one instant.
pub fn snapshot(cities: &[City], instant: Instant, reference: Tz, options: &DisplayOptions) -> Vec<ClockCard> {
    let region = compute_night_region(instant);
    cities
        .iter()
        .map(|city| ClockCard::build_with_region(city, instant, reference, options, &region))
        .collect()
}
