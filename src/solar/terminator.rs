//! Night hemisphere geometry.
//!
//! The night side is modelled as a spherical cap of exactly 90° around the
//! antipode of the subsolar point: the great circle where the sun sits on the
//! horizon. Refraction and the solar disc radius are ignored, so the
//! boundary is a single circle and never a partial or multi-part polygon.

use serde_json::{Value, json};

use super::subsolar::{GeoPoint, Instant, compute_subsolar_point, normalize_longitude};
use crate::constants::*;

/// Closed ring approximating the night cap.
///
/// `ring` holds boundary points in order, first point repeated at the end.
/// An empty region has no ring at all.
#[derive(Debug, Clone, PartialEq)]
pub struct NightRegion {
    /// Midnight point: antipode of the subsolar point.
    pub center: GeoPoint,
    /// Angular radius in degrees.
    pub radius: f64,
    pub ring: Vec<GeoPoint>,
}

impl NightRegion {
    /// A no-op region for degenerate inputs.
    pub fn empty() -> Self {
        Self {
            center: GeoPoint::new(0.0, 0.0),
            radius: 0.0,
            ring: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Whether `point` lies on the night side.
    ///
    /// Points exactly on the terminator count as lit. An empty region
    /// contains nothing.
    pub fn contains(&self, point: GeoPoint) -> bool {
        !self.is_empty() && great_circle_distance(self.center, point) < self.radius
    }

    /// GeoJSON `Polygon` geometry with `[longitude, latitude]` positions.
    ///
    /// The ring starts due north of the midnight point and runs clockwise by
    /// bearing around it. Edges are great-circle arcs and the ring is not
    /// split where it crosses the antimeridian, so it suits spherical
    /// renderers such as d3-geo. Planar RFC 7946 consumers expect
    /// counterclockwise exterior rings cut at ±180° and will draw this one
    /// wrong.
    pub fn to_geojson(&self) -> Value {
        let coordinates: Vec<Value> = if self.is_empty() {
            Vec::new()
        } else {
            vec![Value::Array(
                self.ring
                    .iter()
                    .map(|p| json!([p.longitude, p.latitude]))
                    .collect(),
            )]
        };

        json!({
            "type": "Polygon",
            "coordinates": coordinates,
        })
    }
}

/// Great-circle distance between two points in degrees (haversine).
pub fn great_circle_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let d_phi = phi2 - phi1;
    let d_lambda = (b.longitude - a.longitude).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * h.sqrt().min(1.0).asin().to_degrees()
}

/// Point reached from `origin` after `distance` degrees along `bearing`
/// (degrees clockwise from north).
fn destination(origin: GeoPoint, bearing: f64, distance: f64) -> GeoPoint {
    let phi1 = origin.latitude.to_radians();
    let lambda1 = origin.longitude.to_radians();
    let theta = bearing.to_radians();
    let delta = distance.to_radians();

    let sin_phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).clamp(-1.0, 1.0);
    let phi2 = sin_phi2.asin();
    let lambda2 = lambda1
        + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * sin_phi2);

    GeoPoint::new(phi2.to_degrees(), normalize_longitude(lambda2.to_degrees()))
}

/// Sample a spherical circle as a closed ring of `segments + 1` points.
pub fn spherical_circle(center: GeoPoint, radius: f64, segments: u32) -> Vec<GeoPoint> {
    let segments = segments.max(3);
    let step = 360.0 / f64::from(segments);

    let mut ring: Vec<GeoPoint> = (0..segments)
        .map(|i| destination(center, f64::from(i) * step, radius))
        .collect();
    ring.push(ring[0]);
    ring
}

/// Night region for `instant` at the default resolution.
pub fn compute_night_region(instant: Instant) -> NightRegion {
    compute_night_region_with(instant, DEFAULT_CIRCLE_SEGMENTS)
}

/// Night region sampled with `segments` boundary points.
///
/// A non-finite subsolar point yields [`NightRegion::empty`] instead of
/// propagating NaN into rendering.
pub fn compute_night_region_with(instant: Instant, segments: u32) -> NightRegion {
    let subsolar = compute_subsolar_point(instant);
    night_region_around(subsolar, segments)
}

/// Night region opposite an already computed subsolar point.
pub fn night_region_around(subsolar: GeoPoint, segments: u32) -> NightRegion {
    if !subsolar.is_finite() {
        return NightRegion::empty();
    }

    let center = subsolar.antipode();
    NightRegion {
        center,
        radius: NIGHT_RADIUS_DEGREES,
        ring: spherical_circle(center, NIGHT_RADIUS_DEGREES, segments),
    }
}
