//! Command-line command handlers for offset.
//!
//! Each command renders from a single instant handed in by the caller, so
//! every number printed by one run describes the same moment.

pub mod clocks;
pub mod help;
pub mod map;
pub mod plan;
pub mod sun;

use crate::solar::GeoPoint;

/// `40.42°N 3.70°W` style coordinates.
pub(crate) fn format_point(point: GeoPoint) -> String {
    let ns = if point.latitude < 0.0 { 'S' } else { 'N' };
    let ew = if point.longitude < 0.0 { 'W' } else { 'E' };
    format!(
        "{:.2}°{} {:.2}°{}",
        point.latitude.abs(),
        ns,
        point.longitude.abs(),
        ew
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_point_hemispheres() {
        assert_eq!(format_point(GeoPoint::new(40.4165, -3.7026)), "40.42°N 3.70°W");
        assert_eq!(format_point(GeoPoint::new(-33.8678, 151.2073)), "33.87°S 151.21°E");
        assert_eq!(format_point(GeoPoint::new(0.0, 0.0)), "0.00°N 0.00°E");
    }
}
