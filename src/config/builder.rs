//! Default configuration file generation.
//!
//! The generated file is aligned TOML with a trailing comment on every
//! setting, followed by one `[[cities]]` table per default city.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::detect_reference_timezone;
use crate::city::{City, default_cities};
use crate::constants::*;

/// Write a default config file at `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    let reference = detect_reference_timezone();
    let content = default_config_content(reference.name(), &default_cities());

    fs::write(path, content)
        .with_context(|| format!("Failed to write default config to {}", path.display()))?;

    log_block_start!("Created default configuration");
    log_indented!("{}", path.display());
    Ok(())
}

/// Render the default configuration text.
pub(crate) fn default_config_content(reference_timezone: &str, cities: &[City]) -> String {
    let mut content = ConfigBuilder::new()
        .add_section("Clocks")
        .add_setting(
            "reference_timezone",
            &format!("\"{reference_timezone}\""),
            "Zone that offsets are relative to (IANA identifier)",
        )
        .add_setting(
            "use_24_hour",
            &DEFAULT_USE_24_HOUR.to_string(),
            "Show 14:00 instead of 2:00 PM",
        )
        .add_setting(
            "show_seconds",
            &DEFAULT_SHOW_SECONDS.to_string(),
            "Show seconds on clock cards",
        )
        .add_section("World map")
        .add_setting(
            "circle_segments",
            &DEFAULT_CIRCLE_SEGMENTS.to_string(),
            &format!(
                "Night region polygon resolution ({MINIMUM_CIRCLE_SEGMENTS}-{MAXIMUM_CIRCLE_SEGMENTS})"
            ),
        )
        .add_setting(
            "map_width",
            &DEFAULT_MAP_WIDTH.to_string(),
            &format!("Terminal map columns ({MINIMUM_MAP_WIDTH}-{MAXIMUM_MAP_WIDTH})"),
        )
        .add_setting(
            "map_height",
            &DEFAULT_MAP_HEIGHT.to_string(),
            &format!("Terminal map rows ({MINIMUM_MAP_HEIGHT}-{MAXIMUM_MAP_HEIGHT})"),
        )
        .build();

    content.push_str("\n\n#[Cities]\n");
    for city in cities {
        content.push_str(&city_table(city));
    }
    content
}

fn city_table(city: &City) -> String {
    let mut table = String::from("\n[[cities]]\n");
    table.push_str(&format!("id = {:?}\n", city.id));
    table.push_str(&format!("name = {:?}\n", city.name));
    table.push_str(&format!("country = {:?}\n", city.country));
    table.push_str(&format!("timezone = {:?}\n", city.timezone));
    if let Some(lat) = city.lat {
        table.push_str(&format!("lat = {lat}\n"));
    }
    if let Some(lng) = city.lng {
        table.push_str(&format!("lng = {lng}\n"));
    }
    if let Some(code) = &city.country_code {
        table.push_str(&format!("country_code = {code:?}\n"));
    }
    table
}

struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

enum ConfigEntry {
    Section(String),
    Setting { line: String, comment: String },
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(ConfigEntry::Section(format!("#[{title}]")));
        self
    }

    fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        self.entries.push(ConfigEntry::Setting {
            line: format!("{key} = {value}"),
            comment: format!("# {comment}"),
        });
        self
    }

    /// Join entries, aligning all comments one space past the longest setting.
    fn build(self) -> String {
        let max_width = self
            .entries
            .iter()
            .filter_map(|entry| match entry {
                ConfigEntry::Setting { line, .. } => Some(line.len()),
                ConfigEntry::Section(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        let mut result = Vec::new();
        for entry in self.entries {
            match entry {
                ConfigEntry::Section(title) => {
                    if !result.is_empty() {
                        result.push(String::new());
                    }
                    result.push(title);
                }
                ConfigEntry::Setting { line, comment } => {
                    let padding = " ".repeat(max_width - line.len());
                    result.push(format!("{line}{padding}{comment}"));
                }
            }
        }

        result.join("\n")
    }
}
