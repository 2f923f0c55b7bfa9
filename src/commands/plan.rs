//! Meeting planner grid for one day in the reference zone.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::config::Config;
use crate::constants::PLANNER_COLUMNS;
use crate::planner::MeetingPlanner;
use crate::solar::Instant;
use crate::zones::TimeSlot;

/// Parse `YYYY-MM-DD`, or take today's date in the reference zone.
pub fn resolve_date(date: Option<&str>, instant: Instant, reference: chrono_tz::Tz) -> Result<NaiveDate> {
    match date {
        Some(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{text}', expected YYYY-MM-DD")),
        None => Ok(instant.with_timezone(&reference).date_naive()),
    }
}

pub fn handle_plan_command(
    config: &Config,
    instant: Instant,
    date: Option<&str>,
    slot: Option<usize>,
) -> Result<()> {
    if let Some(column) = slot
        && column >= PLANNER_COLUMNS
    {
        anyhow::bail!("--slot must be between 0 and {}", PLANNER_COLUMNS - 1);
    }

    let reference = config.reference_timezone();
    let base_date = resolve_date(date, instant, reference)?;
    let planner = MeetingPlanner::new(base_date, reference, &config.cities())
        .with_context(|| format!("Date {base_date} is out of range"))?;

    log_block_start!(
        "Meeting planner for {} ({})",
        base_date.format("%a, %-d %b %Y"),
        reference
    );

    if planner.rows.is_empty() {
        log_pipe!();
        log_warning!("No cities configured");
        log_end!();
        return Ok(());
    }

    for line in format_grid(&planner) {
        log_indented!("{line}");
    }
    log_pipe!();
    log_indented!(
        "{} business   {} extended   {} off",
        TimeSlot::Business.glyph(),
        TimeSlot::Extended.glyph(),
        TimeSlot::Off.glyph()
    );

    log_block_start!("Suggested hours ({reference}):");
    log_indented!("All in business hours: {}", describe_columns(&planner, &planner.best_slots()));
    log_indented!("Nobody off hours:      {}", describe_columns(&planner, &planner.workable_slots()));

    if let Some(column) = slot
        && let Some(summary) = planner.summary(column)
    {
        log_block_start!("Share:");
        for line in summary.lines() {
            log_indented!("{line}");
        }
    }

    log_end!();
    Ok(())
}

fn describe_columns(planner: &MeetingPlanner, columns: &[usize]) -> String {
    if columns.is_empty() {
        return "none".to_string();
    }
    columns
        .iter()
        .filter_map(|&c| planner.column_label(c))
        .map(|label| format!("{label}:00"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Header plus one line per city. Every column is three characters wide:
/// the city's local hour followed by its slot glyph.
pub fn format_grid(planner: &MeetingPlanner) -> Vec<String> {
    let width = planner
        .rows
        .iter()
        .map(|row| row.city.name.chars().count())
        .max()
        .unwrap_or(0);

    let header: String = (0..planner.columns.len())
        .filter_map(|c| planner.column_label(c))
        .map(|label| format!("{label} "))
        .collect();

    let mut lines = vec![format!("{:<width$}  {}", "", header.trim_end())];
    for row in &planner.rows {
        let cells: String = row
            .cells
            .iter()
            .map(|cell| format!("{:02}{}", cell.hour, cell.slot.glyph()))
            .collect();
        lines.push(format!("{:<width$}  {}", row.city.name, cells));
    }
    lines
}

/// Display detailed help for the plan command (help subcommand)
pub fn display_help() {
    log_version!();
    log_block_start!("plan - Find a meeting hour across cities");
    log_block_start!("Usage: offset [OPTIONS] plan [DATE] [--slot HOUR]");
    log_block_start!("Arguments:");
    log_indented!("DATE         Day in the reference zone, YYYY-MM-DD (default today)");
    log_block_start!("Options:");
    log_indented!("--slot HOUR  Print a shareable summary for that column (0-23)");
    log_block_start!("Description:");
    log_indented!("Lays out 24 hourly columns starting at midnight in the reference");
    log_indented!("zone. Each city shows its local hour and a glyph for business");
    log_indented!("(09-17), extended (07-09, 17-20) or off hours.");
    log_block_start!("Examples:");
    log_indented!("offset plan");
    log_indented!("offset plan 2024-03-01 --slot 15");
    log_end!();
}
