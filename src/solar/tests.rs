#[cfg(test)]
mod subsolar_tests {
    use crate::constants::test_constants::*;
    use crate::solar::*;
    use chrono::{TimeZone, Utc};

    fn solstice_noon() -> Instant {
        let (y, m, d, h) = SOLSTICE_NOON_UTC;
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    /// June solstice at UTC noon: sun over the Tropic of Cancer near Greenwich.
    #[test]
    fn test_june_solstice_noon() {
        let p = compute_subsolar_point(solstice_noon());
        assert!((p.latitude - 23.4).abs() < 0.5, "latitude was {}", p.latitude);
        assert!(p.longitude.abs() < 3.0, "longitude was {}", p.longitude);
    }

    #[test]
    fn test_december_solstice_is_southern() {
        let p = compute_subsolar_point(Utc.with_ymd_and_hms(2024, 12, 21, 12, 0, 0).unwrap());
        assert!(p.latitude < -23.0, "latitude was {}", p.latitude);
    }

    #[test]
    fn test_equinox_declination_near_zero() {
        // Day 81 is the zero crossing of the model
        assert_eq!(solar_declination(81), 0.0);
        let p = compute_subsolar_point(Utc.with_ymd_and_hms(2023, 3, 22, 12, 0, 0).unwrap());
        assert!(p.latitude.abs() < 0.5);
    }

    #[test]
    fn test_longitude_moves_west_fifteen_degrees_per_hour() {
        let noon = compute_subsolar_point(solstice_noon());
        let one_pm = compute_subsolar_point(Utc.with_ymd_and_hms(2024, 6, 21, 13, 0, 0).unwrap());
        assert!((noon.longitude - one_pm.longitude - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_longitude_is_normalized_around_midnight() {
        let p = compute_subsolar_point(Utc.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap());
        assert!((-180.0..180.0).contains(&p.longitude));
        // UTC midnight puts the sun near the antimeridian
        assert!(p.longitude.abs() > 175.0);
    }

    #[test]
    fn test_seconds_contribute_to_longitude() {
        let a = compute_subsolar_point(Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap());
        let b = compute_subsolar_point(Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 36).unwrap());
        // 36 s = 0.01 h = 0.15°
        assert!((a.longitude - b.longitude - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_equation_of_time_bounds() {
        for day in 1..=366 {
            let eot = equation_of_time(day);
            assert!(eot.abs() < 17.0, "day {day}: eot {eot}");
        }
    }

    #[test]
    fn test_normalize_longitude() {
        assert_eq!(normalize_longitude(0.0), 0.0);
        assert_eq!(normalize_longitude(180.0), -180.0);
        assert_eq!(normalize_longitude(-180.0), -180.0);
        assert_eq!(normalize_longitude(190.0), -170.0);
        assert_eq!(normalize_longitude(-190.0), 170.0);
        assert_eq!(normalize_longitude(540.0), -180.0);
        assert!(normalize_longitude(f64::NAN).is_nan());
    }

    #[test]
    fn test_antipode() {
        let p = GeoPoint::new(23.4, 10.0).antipode();
        assert_eq!(p.latitude, -23.4);
        assert_eq!(p.longitude, -170.0);
    }
}

#[cfg(test)]
mod terminator_tests {
    use crate::solar::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_region_center_is_antipode_of_subsolar() {
        let instant = Utc.with_ymd_and_hms(2024, 9, 1, 7, 30, 0).unwrap();
        let sun = compute_subsolar_point(instant);
        let region = compute_night_region(instant);

        assert!((region.center.latitude + sun.latitude).abs() < 1e-12);
        assert!(great_circle_distance(region.center, sun) > 179.999);
        assert_eq!(region.radius, 90.0);
    }

    #[test]
    fn test_ring_is_closed_with_requested_resolution() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let region = compute_night_region_with(instant, 64);

        assert_eq!(region.ring.len(), 65);
        assert_eq!(region.ring.first(), region.ring.last());
    }

    #[test]
    fn test_every_boundary_point_is_ninety_degrees_out() {
        let instant = Utc.with_ymd_and_hms(2024, 11, 5, 18, 45, 12).unwrap();
        let region = compute_night_region(instant);

        for p in &region.ring {
            let d = great_circle_distance(region.center, *p);
            assert!((d - 90.0).abs() < 1e-6, "boundary point {p:?} at {d}°");
            assert!((-90.0..=90.0).contains(&p.latitude));
            assert!((-180.0..180.0).contains(&p.longitude));
        }
    }

    #[test]
    fn test_contains_classifies_day_and_night() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let region = compute_night_region(instant);

        // Madrid at UTC noon is lit, Tokyo at 21:00 local is dark
        assert!(!region.contains(GeoPoint::new(40.4165, -3.7026)));
        assert!(region.contains(GeoPoint::new(35.6895, 139.6917)));
        // The sun itself is never inside
        assert!(!region.contains(compute_subsolar_point(instant)));
        assert!(region.contains(region.center));
    }

    #[test]
    fn test_polar_day_in_june() {
        let region = compute_night_region(Utc.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap());
        // North pole stays lit all day around the June solstice
        assert!(!region.contains(GeoPoint::new(89.0, 0.0)));
        assert!(region.contains(GeoPoint::new(-89.0, 0.0)));
    }

    #[test]
    fn test_non_finite_subsolar_degenerates_to_empty() {
        let region = night_region_around(GeoPoint::new(f64::NAN, 0.0), 128);
        assert!(region.is_empty());
        assert!(!region.contains(GeoPoint::new(0.0, 0.0)));

        let geojson = region.to_geojson();
        assert_eq!(geojson["type"], "Polygon");
        assert_eq!(geojson["coordinates"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_geojson_uses_lng_lat_order() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let region = compute_night_region_with(instant, 64);
        let geojson = region.to_geojson();

        let ring = geojson["coordinates"][0].as_array().unwrap();
        assert_eq!(ring.len(), 65);
        assert_eq!(ring[0][0].as_f64().unwrap(), region.ring[0].longitude);
        assert_eq!(ring[0][1].as_f64().unwrap(), region.ring[0].latitude);
    }

    #[test]
    fn test_geojson_ring_is_clockwise_and_unsplit() {
        // Midnight point sits just east of the antimeridian at this instant
        let instant = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let region = compute_night_region_with(instant, 64);
        let center = region.center;

        // Bearing 0 first, bearing 90 a quarter of the way round
        assert!((region.ring[0].longitude - center.longitude).abs() < 1e-9);
        assert!(region.ring[0].latitude > center.latitude);
        let east = normalize_longitude(region.ring[16].longitude - center.longitude);
        assert!(east > 0.0 && east < 180.0, "quarter point {east}° from center");

        let geojson = region.to_geojson();
        let rings = geojson["coordinates"].as_array().unwrap();
        assert_eq!(rings.len(), 1);
        let longitudes: Vec<f64> = rings[0]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p[0].as_f64().unwrap())
            .collect();
        assert!(longitudes.windows(2).any(|w| (w[1] - w[0]).abs() > 180.0));
    }

    #[test]
    fn test_great_circle_distance_basics() {
        let origin = GeoPoint::new(0.0, 0.0);
        assert!(great_circle_distance(origin, origin).abs() < 1e-12);
        assert!((great_circle_distance(origin, GeoPoint::new(0.0, 90.0)) - 90.0).abs() < 1e-9);
        assert!((great_circle_distance(origin, GeoPoint::new(90.0, 0.0)) - 90.0).abs() < 1e-9);
        assert!((great_circle_distance(origin, GeoPoint::new(0.0, -180.0)) - 180.0).abs() < 1e-9);
    }
}
