//! Equirectangular terminal rendering of the day/night split.
//!
//! The projection matches an equirectangular projection fitted to the whole
//! sphere: longitude maps linearly to x across the full width, latitude to y
//! with north at the top.

use super::subsolar::{GeoPoint, Instant};
use super::terminator::{NightRegion, compute_night_region};

const NIGHT_CELL: char = '#';
const DAY_CELL: char = '.';
const SUN_CELL: char = '*';

/// Project a point into a `width × height` frame. Returns `(x, y)` in frame
/// units, origin top-left.
pub fn project_equirectangular(point: GeoPoint, width: f64, height: f64) -> (f64, f64) {
    let x = (point.longitude + 180.0) / 360.0 * width;
    let y = (90.0 - point.latitude) / 180.0 * height;
    (x, y)
}

/// Inverse of [`project_equirectangular`].
pub fn unproject_equirectangular(x: f64, y: f64, width: f64, height: f64) -> GeoPoint {
    GeoPoint::new(90.0 - y / height * 180.0, x / width * 360.0 - 180.0)
}

/// A labelled point drawn on top of the map.
#[derive(Debug, Clone, Copy)]
pub struct Marker {
    pub symbol: char,
    pub location: GeoPoint,
}

/// Cell index a point falls into, clamped to the grid.
fn cell_of(point: GeoPoint, width: usize, height: usize) -> (usize, usize) {
    let (x, y) = project_equirectangular(point, width as f64, height as f64);
    let col = (x.floor().max(0.0) as usize).min(width - 1);
    let row = (y.floor().max(0.0) as usize).min(height - 1);
    (col, row)
}

/// Rasterize `region` onto a character grid, one string per row.
///
/// Each cell is classified by its center. The subsolar point is drawn as `*`
/// and markers are drawn last so they stay visible.
pub fn render_region(
    region: &NightRegion,
    width: usize,
    height: usize,
    markers: &[Marker],
) -> Vec<String> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let mut grid: Vec<Vec<char>> = (0..height)
        .map(|row| {
            (0..width)
                .map(|col| {
                    let center = unproject_equirectangular(
                        col as f64 + 0.5,
                        row as f64 + 0.5,
                        width as f64,
                        height as f64,
                    );
                    if region.contains(center) {
                        NIGHT_CELL
                    } else {
                        DAY_CELL
                    }
                })
                .collect()
        })
        .collect();

    if !region.is_empty() {
        let (col, row) = cell_of(region.center.antipode(), width, height);
        grid[row][col] = SUN_CELL;
    }

    for marker in markers {
        if marker.location.is_finite() {
            let (col, row) = cell_of(marker.location, width, height);
            grid[row][col] = marker.symbol;
        }
    }

    grid.into_iter().map(|row| row.into_iter().collect()).collect()
}

/// Render the night shadow for `instant`.
pub fn render_ascii(instant: Instant, width: usize, height: usize, markers: &[Marker]) -> Vec<String> {
    render_region(&compute_night_region(instant), width, height, markers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_projection_corners() {
        assert_eq!(project_equirectangular(GeoPoint::new(90.0, -180.0), 360.0, 180.0), (0.0, 0.0));
        assert_eq!(
            project_equirectangular(GeoPoint::new(-90.0, 180.0), 360.0, 180.0),
            (360.0, 180.0)
        );
        assert_eq!(project_equirectangular(GeoPoint::new(0.0, 0.0), 200.0, 100.0), (100.0, 50.0));
    }

    #[test]
    fn test_unproject_inverts_project() {
        let p = GeoPoint::new(35.6895, 139.6917);
        let (x, y) = project_equirectangular(p, 72.0, 24.0);
        let back = unproject_equirectangular(x, y, 72.0, 24.0);
        assert!((back.latitude - p.latitude).abs() < 1e-9);
        assert!((back.longitude - p.longitude).abs() < 1e-9);
    }

    #[test]
    fn test_render_has_requested_shape_and_both_sides() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        let rows = render_ascii(instant, 72, 24, &[]);

        assert_eq!(rows.len(), 24);
        assert!(rows.iter().all(|r| r.chars().count() == 72));

        let all: String = rows.concat();
        assert!(all.contains(NIGHT_CELL));
        assert!(all.contains(DAY_CELL));
        assert!(all.contains(SUN_CELL));
    }

    #[test]
    fn test_noon_utc_lights_greenwich_and_darkens_pacific() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        let rows = render_ascii(instant, 72, 24, &[]);
        let equator: Vec<char> = rows[12].chars().collect();

        // Column 0 sits at the antimeridian, column 36 near Greenwich
        assert_eq!(equator[0], NIGHT_CELL);
        assert_ne!(equator[38], NIGHT_CELL);
    }

    #[test]
    fn test_markers_are_drawn_over_the_map() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap();
        let markers = [Marker {
            symbol: 'M',
            location: GeoPoint::new(40.4165, -3.7026),
        }];
        let rows = render_ascii(instant, 72, 24, &markers);
        assert!(rows.concat().contains('M'));
    }

    #[test]
    fn test_empty_region_renders_all_day() {
        let rows = render_region(&NightRegion::empty(), 10, 5, &[]);
        assert!(rows.iter().all(|r| r.chars().all(|c| c == DAY_CELL)));
    }
}
