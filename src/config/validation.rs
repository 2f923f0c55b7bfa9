//! Configuration validation.
//!
//! Rejects values that would make output meaningless. City time zones are
//! only warned about; they fall back to UTC at render time.

use anyhow::Result;
use std::collections::HashSet;

use super::Config;
use crate::constants::*;
use crate::zones::parse_time_zone;

pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(id) = config.reference_timezone.as_deref()
        && parse_time_zone(id).is_err()
    {
        anyhow::bail!("reference_timezone '{}' is not a known IANA time zone", id);
    }

    if let Some(segments) = config.circle_segments
        && !(MINIMUM_CIRCLE_SEGMENTS..=MAXIMUM_CIRCLE_SEGMENTS).contains(&segments)
    {
        anyhow::bail!(
            "circle_segments ({}) must be between {} and {}",
            segments,
            MINIMUM_CIRCLE_SEGMENTS,
            MAXIMUM_CIRCLE_SEGMENTS
        );
    }

    if let Some(width) = config.map_width
        && !(MINIMUM_MAP_WIDTH..=MAXIMUM_MAP_WIDTH).contains(&width)
    {
        anyhow::bail!(
            "map_width ({}) must be between {} and {}",
            width,
            MINIMUM_MAP_WIDTH,
            MAXIMUM_MAP_WIDTH
        );
    }

    if let Some(height) = config.map_height
        && !(MINIMUM_MAP_HEIGHT..=MAXIMUM_MAP_HEIGHT).contains(&height)
    {
        anyhow::bail!(
            "map_height ({}) must be between {} and {}",
            height,
            MINIMUM_MAP_HEIGHT,
            MAXIMUM_MAP_HEIGHT
        );
    }

    if let Some(cities) = &config.cities {
        validate_cities(cities)?;
    }

    Ok(())
}

fn validate_cities(cities: &[crate::city::City]) -> Result<()> {
    let mut seen_ids = HashSet::new();

    for city in cities {
        if city.name.trim().is_empty() {
            anyhow::bail!("City '{}' has an empty name", city.id);
        }

        if !seen_ids.insert(city.id.as_str()) {
            anyhow::bail!("Duplicate city id '{}'", city.id);
        }

        if let Some(lat) = city.lat
            && !(-90.0..=90.0).contains(&lat)
        {
            anyhow::bail!(
                "City '{}': latitude must be between -90 and 90 degrees (got {})",
                city.name,
                lat
            );
        }

        if let Some(lng) = city.lng
            && !(-180.0..=180.0).contains(&lng)
        {
            anyhow::bail!(
                "City '{}': longitude must be between -180 and 180 degrees (got {})",
                city.name,
                lng
            );
        }

        if parse_time_zone(&city.timezone).is_err() {
            log_warning!(
                "City '{}' has unknown time zone '{}', falling back to its coordinates or {}",
                city.name,
                city.timezone,
                FALLBACK_TIMEZONE
            );
        }
    }

    Ok(())
}
