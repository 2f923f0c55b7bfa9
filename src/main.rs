//! Main application entry point and high-level flow coordination.
//!
//! This module orchestrates a single run after command-line argument parsing
//! is complete:
//!
//! 1. Argument parsing and early exit for help/version
//! 2. Optional file logging and custom configuration directory
//! 3. Time source selection (real clock, `--shift`, `--at`)
//! 4. Configuration loading and validation
//! 5. Rendering the chosen command from one instant
//!
//! Failures are reported through the logger and turn into a non-zero exit
//! code.

use anyhow::{Context, Result};
use std::sync::Arc;

use offset::args::{self, CliAction, Command, GlobalOptions, ParsedArgs};
use offset::commands;
use offset::config::{self, Config};
use offset::constants::EXIT_FAILURE;
use offset::logger::Log;
use offset::time_source::{
    self, FixedTimeSource, RealTimeSource, ShiftedTimeSource, TimeSource, format_shift,
    pinned_instant, snap_shift,
};
use offset::{log_block_start, log_debug, log_error_exit, log_pipe, log_version, log_warning_standalone};

fn main() {
    let parsed_args = ParsedArgs::from_env();

    let result = match parsed_args.action {
        CliAction::ShowVersion => {
            args::display_version_info();
            Ok(())
        }
        CliAction::ShowHelp => {
            args::display_help();
            Ok(())
        }
        CliAction::ShowHelpDueToError { reason } => {
            log_warning_standalone!("{}", reason);
            args::display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::HelpCommand { command } => commands::help::run_help_command(command.as_deref()),
        CliAction::Run { command, options } => run(command, options),
    };

    if let Err(e) = result {
        report_error(&e);
        std::process::exit(EXIT_FAILURE);
    }
}

fn report_error(e: &anyhow::Error) {
    Log::set_enabled(true);
    log_error_exit!("{:#}", e);
}

/// Pick the instant source for this run.
///
/// `--at` pins the instant and `--shift` moves it; without `--at` the shift
/// applies to the real clock.
fn init_time(options: &GlobalOptions) -> Result<()> {
    let shift = snap_shift(options.shift_minutes.unwrap_or(0));

    let source: Arc<dyn TimeSource> = match options.at.as_deref() {
        Some(at) => {
            Arc::new(FixedTimeSource::new(pinned_instant(at, shift)?))
        }
        None if shift != 0 => Arc::new(ShiftedTimeSource::new(shift)),
        None => Arc::new(RealTimeSource),
    };
    time_source::init_time_source(source);
    Ok(())
}

fn run(command: Command, options: GlobalOptions) -> Result<()> {
    Log::set_debug(options.debug_enabled);

    // GeoJSON goes to stdout untouched
    let json = matches!(command, Command::Map { json: true });
    if json {
        Log::set_enabled(false);
    }

    let log_guard = match options.log_file.clone() {
        Some(path) => Some(
            Log::start_file_logging(path.clone())
                .with_context(|| format!("Failed to start logging to {path}"))?,
        ),
        None => None,
    };

    let result = execute(command, &options);
    if let Err(e) = &result {
        report_error(e);
    }

    // Flush the log file before exiting
    drop(log_guard);
    if result.is_err() {
        std::process::exit(EXIT_FAILURE);
    }
    Ok(())
}

fn execute(command: Command, options: &GlobalOptions) -> Result<()> {
    let json = matches!(command, Command::Map { json: true });

    config::set_config_dir(options.config_dir.clone())?;
    init_time(options)?;

    if !json {
        log_version!();
    }

    let config = Config::load()?;
    if options.debug_enabled {
        config.log_config(&Config::get_config_path()?);
    }

    let instant = time_source::now();
    if options.at.is_some() {
        log_block_start!("Pinned to {} UTC", instant.format("%Y-%m-%d %H:%M:%S"));
    } else if time_source::is_shifted() {
        log_block_start!(
            "Time travel: {} ({} UTC)",
            format_shift(snap_shift(options.shift_minutes.unwrap_or(0))),
            instant.format("%Y-%m-%d %H:%M:%S")
        );
    }
    if options.debug_enabled {
        log_pipe!();
        log_debug!("Rendering instant {}", instant.to_rfc3339());
    }

    match command {
        Command::Clocks => commands::clocks::handle_clocks_command(&config, instant),
        Command::Sun => commands::sun::handle_sun_command(&config, instant),
        Command::Map { json } => commands::map::handle_map_command(&config, instant, json),
        Command::Plan { date, slot } => {
            commands::plan::handle_plan_command(&config, instant, date.as_deref(), slot)
        }
    }
}
