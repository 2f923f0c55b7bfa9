//! Configuration for offset.
//!
//! Settings live in `offset.toml`, looked up in:
//! 1. the directory given with `--config`, if any
//! 2. `$XDG_CONFIG_HOME/offset/offset.toml` (via `dirs::config_dir()`)
//!
//! A commented default file is created on first run.
//!
//! ```toml
//! #[Clocks]
//! reference_timezone = "Europe/Madrid" # Zone that offsets are relative to
//! use_24_hour = true                   # Show 14:00 instead of 2:00 PM
//! show_seconds = true                  # Show seconds on clock cards
//!
//! #[World map]
//! circle_segments = 128                # Night region polygon resolution (64-4096)
//! map_width = 72                       # Terminal map columns (20-400)
//! map_height = 24                      # Terminal map rows (10-200)
//!
//! [[cities]]
//! id = "1"
//! name = "Madrid"
//! country = "Spain"
//! timezone = "Europe/Madrid"
//! lat = 40.4165
//! lng = -3.7026
//! country_code = "ES"
//! ```
//!
//! Every field is optional. Numeric ranges, the reference zone and city
//! coordinates are validated on load. City time zones are not: an unknown
//! zone falls back at render time so one bad entry cannot take the whole
//! dashboard down.

pub mod builder;
pub mod loading;
pub mod validation;

use anyhow::Result;
use chrono_tz::Tz;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::city::{City, default_cities};
use crate::constants::*;
use crate::dashboard::DisplayOptions;
use crate::zones::parse_time_zone;

pub use builder::create_default_config;
pub use loading::{get_config_path, get_custom_config_dir, load, load_from_path, set_config_dir};

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// IANA zone the hour offsets are computed against.
    ///
    /// Defaults to `$TZ` when set to a known zone, UTC otherwise.
    pub reference_timezone: Option<String>,
    pub use_24_hour: Option<bool>,
    pub show_seconds: Option<bool>,
    /// Boundary points of the night-region ring.
    pub circle_segments: Option<u32>,
    pub map_width: Option<u32>,
    pub map_height: Option<u32>,
    pub cities: Option<Vec<City>>,
}

/// Reference zone when none is configured: `$TZ` if it names a known zone.
pub fn detect_reference_timezone() -> Tz {
    std::env::var("TZ")
        .ok()
        .and_then(|tz| parse_time_zone(tz.trim_start_matches(':')).ok())
        .unwrap_or(Tz::UTC)
}

impl Config {
    pub fn load() -> Result<Self> {
        loading::load()
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        loading::load_from_path(path)
    }

    pub fn get_config_path() -> Result<PathBuf> {
        loading::get_config_path()
    }

    pub fn reference_timezone(&self) -> Tz {
        self.reference_timezone
            .as_deref()
            .and_then(|id| parse_time_zone(id).ok())
            .unwrap_or_else(detect_reference_timezone)
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            use_24_hour: self.use_24_hour.unwrap_or(DEFAULT_USE_24_HOUR),
            show_seconds: self.show_seconds.unwrap_or(DEFAULT_SHOW_SECONDS),
        }
    }

    pub fn circle_segments(&self) -> u32 {
        self.circle_segments.unwrap_or(DEFAULT_CIRCLE_SEGMENTS)
    }

    pub fn map_size(&self) -> (usize, usize) {
        (
            self.map_width.unwrap_or(DEFAULT_MAP_WIDTH) as usize,
            self.map_height.unwrap_or(DEFAULT_MAP_HEIGHT) as usize,
        )
    }

    /// Configured cities, or the built-in defaults when the list is absent.
    ///
    /// An explicitly empty list stays empty.
    pub fn cities(&self) -> Vec<City> {
        self.cities.clone().unwrap_or_else(default_cities)
    }

    /// Log the effective settings as an indented block.
    pub fn log_config(&self, source: &Path) {
        log_block_start!("Loaded configuration");
        log_indented!("Source: {}", source.display());
        log_indented!("Reference zone: {}", self.reference_timezone());

        let options = self.display_options();
        log_indented!(
            "Clock format: {}{}",
            if options.use_24_hour { "24-hour" } else { "12-hour" },
            if options.show_seconds { " with seconds" } else { "" }
        );
        log_indented!("Night region segments: {}", self.circle_segments());

        let cities = self.cities();
        if cities.is_empty() {
            log_indented!("Cities: none");
        } else {
            let names: Vec<&str> = cities.iter().map(|c| c.name.as_str()).collect();
            log_indented!("Cities: {}", names.join(", "));
        }
    }
}

#[cfg(test)]
mod tests;
