//! # Offset Library
//!
//! Internal library for the offset binary application
//!
//! This library exists to enable testing of the engines and provide clean separation
//! between CLI dispatch (main.rs) and application logic.
//!
//! ## Architecture
//!
//! The library is organized into several layers:
//!
//! - **Engines**: `solar` (subsolar point, night terminator, map projection) and `zones`
//!   (zoned local time, hour offsets, slot classification). Both are pure functions of an
//!   instant.
//! - **Composition**: `dashboard` builds per-city clock cards from both engines, `planner`
//!   lays out a day of hourly meeting slots
//! - **Time**: `time_source` supplies the instant to render (real, shifted or pinned)
//! - **Configuration**: `config` module for TOML-based settings and the city list
//! - **Commands**: `commands` module for CLI subcommands (clocks, sun, map, plan, help)
//! - **Infrastructure**: argument parsing, constants and logging

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

// Public API modules
pub mod args;
pub mod city;
pub mod commands;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod planner;
pub mod solar;
pub mod time_source;
pub mod zones;
