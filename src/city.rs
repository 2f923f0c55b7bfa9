//! City entities shown on the dashboard.

use chrono_tz::Tz;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tzf_rs::DefaultFinder;

use crate::constants::FALLBACK_TIMEZONE;
use crate::solar::GeoPoint;
use crate::zones::parse_time_zone;

// Building the polygon index is expensive, do it once on first use
static FINDER: Lazy<DefaultFinder> = Lazy::new(DefaultFinder::new);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub country: String,
    /// IANA identifier. May be empty or malformed when the city came from an
    /// external search result.
    #[serde(default)]
    pub timezone: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub country_code: Option<String>,
}

impl City {
    pub fn new(
        id: &str,
        name: &str,
        country: &str,
        timezone: &str,
        lat: f64,
        lng: f64,
        country_code: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            country: country.to_string(),
            timezone: timezone.to_string(),
            lat: Some(lat),
            lng: Some(lng),
            country_code: Some(country_code.to_string()),
        }
    }

    pub fn location(&self) -> Option<GeoPoint> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)),
            _ => None,
        }
    }

    /// The zone to render this city in. Never fails.
    ///
    /// Order of preference: the configured identifier, the zone containing the
    /// city's coordinates, UTC.
    pub fn resolve_timezone(&self) -> Tz {
        if let Ok(tz) = parse_time_zone(&self.timezone) {
            return tz;
        }

        if let Some(point) = self.location()
            && let Some(tz) = timezone_from_coordinates(point)
        {
            log_warning!(
                "City '{}' has invalid time zone '{}', using {} from its coordinates",
                self.name,
                self.timezone,
                tz
            );
            return tz;
        }

        log_warning!(
            "City '{}' has invalid time zone '{}', falling back to {}",
            self.name,
            self.timezone,
            FALLBACK_TIMEZONE
        );
        Tz::UTC
    }

    /// Single character used to mark the city on the terminal map.
    pub fn marker_symbol(&self) -> char {
        self.name
            .chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

/// Zone containing a coordinate, if the tz boundary data knows one.
pub fn timezone_from_coordinates(point: GeoPoint) -> Option<Tz> {
    if !point.is_finite() {
        return None;
    }
    FINDER
        .get_tz_name(point.longitude, point.latitude)
        .parse::<Tz>()
        .ok()
}

/// Cities shown before the user configures any.
pub fn default_cities() -> Vec<City> {
    vec![
        City::new("1", "Madrid", "Spain", "Europe/Madrid", 40.4165, -3.7026, "ES"),
        City::new("2", "New York", "United States", "America/New_York", 40.7143, -74.006, "US"),
        City::new("3", "Tokyo", "Japan", "Asia/Tokyo", 35.6895, 139.6917, "JP"),
        City::new("4", "Sydney", "Australia", "Australia/Sydney", -33.8678, 151.2073, "AU"),
    ]
}
