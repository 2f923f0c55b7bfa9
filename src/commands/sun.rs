//! Where the sun is overhead, and which cities are in its shadow.

use anyhow::Result;
use chrono::Datelike;

use super::format_point;
use crate::config::Config;
use crate::solar::{
    Instant, compute_night_region_with, compute_subsolar_point, equation_of_time,
    great_circle_distance, solar_declination,
};

pub fn handle_sun_command(config: &Config, instant: Instant) -> Result<()> {
    let subsolar = compute_subsolar_point(instant);
    let region = compute_night_region_with(instant, config.circle_segments());
    let day_of_year = instant.ordinal();

    log_block_start!("Sun at {} UTC", instant.format("%Y-%m-%d %H:%M:%S"));
    log_indented!("Subsolar point:   {}", format_point(subsolar));
    log_indented!("Midnight point:   {}", format_point(subsolar.antipode()));
    log_indented!("Declination:      {:+.2}°", solar_declination(day_of_year));
    log_indented!("Equation of time: {:+.2} min", equation_of_time(day_of_year));
    log_debug!(
        "Night region: {} ring points, radius {}°",
        region.ring.len(),
        region.radius
    );

    let cities = config.cities();
    if !cities.is_empty() {
        let width = cities
            .iter()
            .map(|c| c.name.chars().count())
            .max()
            .unwrap_or(0);

        log_block_start!("Cities:");
        for city in &cities {
            match city.location().filter(|p| p.is_finite()) {
                Some(point) => log_indented!(
                    "{:<width$}  {:<5}  {:>5.1}° from the subsolar point",
                    city.name,
                    if region.contains(point) { "night" } else { "day" },
                    great_circle_distance(subsolar, point)
                ),
                None => log_indented!("{:<width$}  no coordinates", city.name),
            }
        }
    }

    log_end!();
    Ok(())
}

/// Display detailed help for the sun command (help subcommand)
pub fn display_help() {
    log_version!();
    log_block_start!("sun - Subsolar and midnight points");
    log_block_start!("Usage: offset [OPTIONS] sun");
    log_block_start!("Description:");
    log_indented!("Prints the point where the sun is directly overhead, its");
    log_indented!("antipode, and the declination and equation of time used.");
    log_indented!("Cities are listed as day or night by their distance from the");
    log_indented!("subsolar point: beyond 90° is night.");
    log_block_start!("Examples:");
    log_indented!("offset sun");
    log_indented!("offset --at \"2024-06-21 12:00:00\" sun");
    log_end!();
}
