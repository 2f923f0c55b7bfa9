//! Subsolar point from a simplified solar model.
//!
//! Declination is a single sinusoid of the day of year and the equation of
//! time a three-term harmonic. Both are good to a few degrees, which is the
//! precision a map overlay needs; this is not an ephemeris. Expect roughly:
//!
//! - declination within ~2° of the true value (worst near the equinoxes),
//! - longitude within ~1° (the equation of time is off by under 4 minutes).

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::Serialize;

use crate::constants::*;

/// An absolute point in time. All engine inputs are UTC-based.
pub type Instant = DateTime<Utc>;

/// Geographic coordinates in degrees.
///
/// Longitude produced by this crate is always normalized to `[-180, 180)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The diametrically opposite point on the globe.
    pub fn antipode(&self) -> Self {
        Self::new(-self.latitude, normalize_longitude(self.longitude + 180.0))
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// Wrap a longitude into `[-180, 180)`.
pub fn normalize_longitude(longitude: f64) -> f64 {
    let wrapped = (longitude + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Angle `B` of the model, in degrees: `360/365 · (day − 81)`.
fn seasonal_angle(day_of_year: u32) -> f64 {
    (360.0 / DAYS_PER_YEAR) * (f64::from(day_of_year) - EQUINOX_DAY_OFFSET)
}

/// Solar declination in degrees for a 1-based UTC day of year.
pub fn solar_declination(day_of_year: u32) -> f64 {
    AXIAL_TILT_DEGREES * seasonal_angle(day_of_year).to_radians().sin()
}

/// Equation of time in minutes for a 1-based UTC day of year.
pub fn equation_of_time(day_of_year: u32) -> f64 {
    let b = seasonal_angle(day_of_year).to_radians();
    EOT_SIN_2B * (2.0 * b).sin() - EOT_COS_B * b.cos() - EOT_SIN_B * b.sin()
}

/// Fractional UTC hour of day, to the second.
fn fractional_utc_hour(instant: &Instant) -> f64 {
    f64::from(instant.hour())
        + f64::from(instant.minute()) / 60.0
        + f64::from(instant.second()) / 3600.0
}

/// The point on Earth where the sun is at zenith at `instant`.
///
/// The day of year comes from the UTC calendar date; the time of day only
/// moves the longitude.
pub fn compute_subsolar_point(instant: Instant) -> GeoPoint {
    let day_of_year = instant.ordinal();
    let hours = fractional_utc_hour(&instant);

    let declination = solar_declination(day_of_year);
    let eot = equation_of_time(day_of_year);
    let longitude = -(hours - 12.0 + eot / 60.0) * DEGREES_PER_HOUR;

    GeoPoint::new(declination, normalize_longitude(longitude))
}
