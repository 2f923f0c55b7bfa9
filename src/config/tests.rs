use super::builder::default_config_content;
use super::validation::validate_config;
use super::*;
use crate::logger::Log;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

fn city(id: &str, name: &str, timezone: &str, lat: f64, lng: f64) -> City {
    City::new(id, name, "", timezone, lat, lng, "")
}

#[test]
fn test_empty_config_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
    assert!(validate_config(&config).is_ok());

    let options = config.display_options();
    assert!(options.use_24_hour);
    assert!(options.show_seconds);
    assert_eq!(config.circle_segments(), DEFAULT_CIRCLE_SEGMENTS);
    assert_eq!(config.map_size(), (72, 24));
    assert_eq!(config.cities().len(), 4);
}

#[test]
fn test_explicit_empty_city_list_stays_empty() {
    let config: Config = toml::from_str("cities = []").unwrap();
    assert!(config.cities().is_empty());
}

#[test]
fn test_reference_timezone_from_config() {
    let config = Config {
        reference_timezone: Some("Asia/Tokyo".to_string()),
        ..Default::default()
    };
    assert_eq!(config.reference_timezone(), chrono_tz::Asia::Tokyo);
}

#[test]
#[serial]
fn test_reference_timezone_from_env() {
    let original = std::env::var("TZ").ok();
    unsafe {
        std::env::set_var("TZ", ":America/New_York");
    }
    assert_eq!(Config::default().reference_timezone(), chrono_tz::America::New_York);

    unsafe {
        std::env::set_var("TZ", "garbage");
    }
    assert_eq!(Config::default().reference_timezone(), Tz::UTC);

    unsafe {
        match original {
            Some(tz) => std::env::set_var("TZ", tz),
            None => std::env::remove_var("TZ"),
        }
    }
}

#[test]
fn test_validation_rejects_bad_reference_zone() {
    let config = Config {
        reference_timezone: Some("Not/AZone".to_string()),
        ..Default::default()
    };
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("Not/AZone"));
}

#[test]
fn test_validation_ranges() {
    let mut config = Config {
        circle_segments: Some(MINIMUM_CIRCLE_SEGMENTS),
        map_width: Some(MAXIMUM_MAP_WIDTH),
        map_height: Some(MINIMUM_MAP_HEIGHT),
        ..Default::default()
    };
    assert!(validate_config(&config).is_ok());

    config.circle_segments = Some(MINIMUM_CIRCLE_SEGMENTS - 1);
    assert!(validate_config(&config).is_err());

    config.circle_segments = None;
    config.map_width = Some(MAXIMUM_MAP_WIDTH + 1);
    assert!(validate_config(&config).is_err());

    config.map_width = None;
    config.map_height = Some(0);
    assert!(validate_config(&config).is_err());
}

#[test]
fn test_validation_of_cities() {
    Log::set_enabled(false);

    let ok = Config {
        cities: Some(vec![city("1", "Madrid", "Europe/Madrid", 40.4, -3.7)]),
        ..Default::default()
    };
    assert!(validate_config(&ok).is_ok());

    let bad_lat = Config {
        cities: Some(vec![city("1", "Nowhere", "UTC", 91.0, 0.0)]),
        ..Default::default()
    };
    assert!(validate_config(&bad_lat).is_err());

    let bad_lng = Config {
        cities: Some(vec![city("1", "Nowhere", "UTC", 0.0, -180.5)]),
        ..Default::default()
    };
    assert!(validate_config(&bad_lng).is_err());

    let duplicate = Config {
        cities: Some(vec![
            city("1", "Madrid", "Europe/Madrid", 40.4, -3.7),
            city("1", "Tokyo", "Asia/Tokyo", 35.7, 139.7),
        ]),
        ..Default::default()
    };
    assert!(validate_config(&duplicate).is_err());

    let unnamed = Config {
        cities: Some(vec![city("1", "  ", "UTC", 0.0, 0.0)]),
        ..Default::default()
    };
    assert!(validate_config(&unnamed).is_err());
}

#[test]
fn test_unknown_city_zone_is_only_a_warning() {
    Log::set_enabled(false);
    let config = Config {
        cities: Some(vec![city("1", "Somewhere", "Not/AZone", 10.0, 10.0)]),
        ..Default::default()
    };
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_default_content_round_trips() {
    let content = default_config_content("Europe/Madrid", &crate::city::default_cities());
    let config: Config = toml::from_str(&content).unwrap();

    assert!(validate_config(&config).is_ok());
    assert_eq!(config.reference_timezone.as_deref(), Some("Europe/Madrid"));
    assert_eq!(config.circle_segments, Some(DEFAULT_CIRCLE_SEGMENTS));
    assert_eq!(config.cities, Some(crate::city::default_cities()));
}

#[test]
fn test_default_content_aligns_comments() {
    let content = default_config_content("UTC", &[]);
    let columns: Vec<usize> = content
        .lines()
        .filter(|l| !l.starts_with('#') && l.contains(" # "))
        .map(|l| l.find('#').unwrap())
        .collect();
    assert!(!columns.is_empty());
    assert!(columns.iter().all(|c| *c == columns[0]));
}

#[test]
fn test_load_from_path_reports_parse_errors() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("offset.toml");
    fs::write(&path, "use_24_hour = \"sometimes\"").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse"));
}

#[test]
fn test_load_from_path_missing_file() {
    let temp_dir = tempdir().unwrap();
    assert!(load_from_path(&temp_dir.path().join("missing.toml")).is_err());
}

#[test]
#[serial]
fn test_load_creates_default_under_xdg_config_home() {
    Log::set_enabled(false);
    let temp_dir = tempdir().unwrap();

    let original = std::env::var("XDG_CONFIG_HOME").ok();
    unsafe {
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
    }

    let result = load();
    let expected_path = temp_dir.path().join("offset").join("offset.toml");
    let exists = expected_path.exists();

    unsafe {
        match original {
            Some(dir) => std::env::set_var("XDG_CONFIG_HOME", dir),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    let config = result.unwrap();
    assert!(exists);
    assert_eq!(config.cities().len(), 4);
}
