//! Night shadow output: a terminal world map, or GeoJSON for other tools.

use anyhow::{Context, Result};
use serde_json::{Value, json};

use crate::city::City;
use crate::config::Config;
use crate::solar::map::{Marker, render_region};
use crate::solar::{GeoPoint, Instant, NightRegion, compute_night_region_with, compute_subsolar_point};

pub fn handle_map_command(config: &Config, instant: Instant, json: bool) -> Result<()> {
    let region = compute_night_region_with(instant, config.circle_segments());
    let cities = config.cities();

    if json {
        let document = geojson_document(instant, &region, &cities);
        let text = serde_json::to_string_pretty(&document)
            .context("Failed to serialize night region")?;
        println!("{text}");
        return Ok(());
    }

    let (width, height) = config.map_size();
    let placed: Vec<(&City, Marker)> = cities
        .iter()
        .filter_map(|city| {
            city.location().map(|location| {
                let marker = Marker {
                    symbol: city.marker_symbol(),
                    location,
                };
                (city, marker)
            })
        })
        .collect();
    let markers: Vec<Marker> = placed.iter().map(|(_, marker)| *marker).collect();

    log_block_start!("Night shadow at {} UTC", instant.format("%Y-%m-%d %H:%M"));
    for row in render_region(&region, width, height, &markers) {
        log_indented!("{row}");
    }
    log_pipe!();
    log_indented!("# night   . day   * sun overhead");
    for (city, marker) in &placed {
        log_indented!("{} {}", marker.symbol, city.name);
    }
    log_end!();
    Ok(())
}

fn point_feature(kind: &str, name: &str, point: GeoPoint) -> Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [point.longitude, point.latitude],
        },
        "properties": { "kind": kind, "name": name },
    })
}

/// FeatureCollection with the night polygon, the subsolar point and every
/// city that has coordinates. City features carry an `in_night` flag.
pub fn geojson_document(instant: Instant, region: &NightRegion, cities: &[City]) -> Value {
    let mut features = vec![json!({
        "type": "Feature",
        "geometry": region.to_geojson(),
        "properties": {
            "kind": "night",
            "instant": instant.to_rfc3339(),
        },
    })];

    let subsolar = compute_subsolar_point(instant);
    if subsolar.is_finite() {
        features.push(point_feature("sun", "subsolar point", subsolar));
    }

    for city in cities {
        if let Some(point) = city.location().filter(|p| p.is_finite()) {
            let mut feature = point_feature("city", &city.name, point);
            feature["properties"]["in_night"] = Value::Bool(region.contains(point));
            features.push(feature);
        }
    }

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

/// Display detailed help for the map command (help subcommand)
pub fn display_help() {
    log_version!();
    log_block_start!("map - Night shadow on a world map");
    log_block_start!("Usage: offset [OPTIONS] map [--json]");
    log_block_start!("Options:");
    log_indented!("-j, --json  Print a GeoJSON FeatureCollection instead of the map");
    log_block_start!("Description:");
    log_indented!("Draws the night hemisphere on an equirectangular grid sized by");
    log_indented!("map_width and map_height. Cities with coordinates are marked by");
    log_indented!("their initial. The GeoJSON polygon uses circle_segments points.");
    log_block_start!("Examples:");
    log_indented!("offset map");
    log_indented!("offset map --json > night.geojson");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::default_cities;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_geojson_document_features() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let region = compute_night_region_with(instant, 64);
        let document = geojson_document(instant, &region, &default_cities());

        assert_eq!(document["type"], "FeatureCollection");
        let features = document["features"].as_array().unwrap();
        // night + sun + four cities
        assert_eq!(features.len(), 6);

        assert_eq!(features[0]["geometry"]["type"], "Polygon");
        assert_eq!(
            features[0]["geometry"]["coordinates"][0].as_array().unwrap().len(),
            65
        );
        assert_eq!(features[1]["properties"]["kind"], "sun");

        let tokyo = features
            .iter()
            .find(|f| f["properties"]["name"] == "Tokyo")
            .unwrap();
        // 21:00 in Tokyo in January
        assert_eq!(tokyo["properties"]["in_night"], true);

        let madrid = features
            .iter()
            .find(|f| f["properties"]["name"] == "Madrid")
            .unwrap();
        assert_eq!(madrid["properties"]["in_night"], false);
    }
}
