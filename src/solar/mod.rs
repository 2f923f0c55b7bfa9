//! Solar terminator engine.
//!
//! Pure functions of an [`Instant`]:
//!
//! - [`subsolar`]: where the sun is overhead, from a simplified declination and
//!   equation-of-time model
//! - [`terminator`]: the night hemisphere as a 90° spherical cap around the
//!   antipode of the subsolar point, sampled as a closed ring
//! - [`map`]: equirectangular projection and a terminal rendering of the split
//!
//! Nothing here is cached. Callers recompute on every tick so the geometry
//! always matches the instant being displayed.

pub mod map;
pub mod subsolar;
pub mod terminator;

pub use subsolar::{
    GeoPoint, Instant, compute_subsolar_point, equation_of_time, normalize_longitude,
    solar_declination,
};
pub use terminator::{
    NightRegion, compute_night_region, compute_night_region_with, great_circle_distance,
    night_region_around, spherical_circle,
};

#[cfg(test)]
mod tests;
