//! Help command implementation for offset.
//!
//! This module provides a dispatcher for the help command that shows
//! command-specific help or general help based on the arguments provided.

use anyhow::Result;

/// Run the help command (dispatcher)
///
/// # Arguments
/// * `command` - Optional command name to get help for (None = general help)
pub fn run_help_command(command: Option<&str>) -> Result<()> {
    match command {
        None => display_general_help(),
        Some("clocks") | Some("c") => super::clocks::display_help(),
        Some("help") | Some("h") => display_help_help(),
        Some("map") | Some("m") => super::map::display_help(),
        Some("plan") | Some("p") => super::plan::display_help(),
        Some("sun") | Some("S") => super::sun::display_help(),
        Some(unknown) => {
            log_warning_standalone!("Unknown command: {}", unknown);
            display_general_help();
        }
    }
    Ok(())
}

/// Display general help focused on commands (for the help command)
fn display_general_help() {
    log_version!();
    log_block_start!("Available Commands:");
    log_indented!("clocks, c               Local time in every configured city");
    log_indented!("help, h [COMMAND]       Show detailed help for a command");
    log_indented!("map, m [--json]         Night shadow as a terminal map or GeoJSON");
    log_indented!("plan, p [DATE]          Meeting planner for a date");
    log_indented!("sun, S                  Subsolar and midnight points");
    log_pipe!();
    log_info!("Use 'offset help <command>' to see detailed help for a specific command.");
    log_indented!("Use 'offset --help' to see all options and general usage.");
    log_end!();
}

/// Display help for the help command itself
fn display_help_help() {
    log_version!();
    log_block_start!("help - Display help information");
    log_block_start!("Usage: offset help [COMMAND]");
    log_block_start!("Arguments:");
    log_indented!("COMMAND  Optional command to get help for");
    log_indented!("         If omitted, shows general help");
    log_block_start!("Examples:");
    log_indented!("# Show general help");
    log_indented!("offset help");
    log_pipe!();
    log_indented!("# Show help for specific commands");
    log_indented!("offset help plan");
    log_indented!("offset help map");
    log_end!();
}
