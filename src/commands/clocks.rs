//! Clock cards: local time, offset and day state for every configured city.

use anyhow::Result;

use crate::config::Config;
use crate::dashboard::{ClockCard, snapshot};
use crate::solar::Instant;

/// Render one card per city against `instant`.
pub fn handle_clocks_command(config: &Config, instant: Instant) -> Result<()> {
    let reference = config.reference_timezone();
    let cities = config.cities();

    log_block_start!(
        "World clock at {} ({})",
        instant.with_timezone(&reference).format("%H:%M %Z"),
        reference
    );

    if cities.is_empty() {
        log_pipe!();
        log_warning!("No cities configured");
        log_indented!("Add [[cities]] tables to offset.toml");
        log_end!();
        return Ok(());
    }

    let cards = snapshot(&cities, instant, reference, &config.display_options());
    let width = time_width(&cards);

    for card in &cards {
        log_block_start!("{}", card_title(card));
        log_indented!("{}", card_line(card, width));

        if card.heuristic_disagrees() {
            log_debug!(
                "{}: local hour says {} but the sun says {}",
                card.name,
                if card.is_day { "day" } else { "night" },
                if card.is_day { "night" } else { "day" }
            );
        }
    }

    log_end!();
    Ok(())
}

fn time_width(cards: &[ClockCard]) -> usize {
    cards
        .iter()
        .map(|c| c.time.chars().count() + c.seconds.as_ref().map_or(0, |s| s.len() + 1))
        .max()
        .unwrap_or(0)
}

/// `☀ Madrid, Spain`
pub fn card_title(card: &ClockCard) -> String {
    if card.country.is_empty() {
        format!("{} {}", card.icon(), card.name)
    } else {
        format!("{} {}, {}", card.icon(), card.name, card.country)
    }
}

/// `14:05:09  Mon, 15 Jan  Local  business  Europe/Madrid`
///
/// The time column is padded to `time_width` so cards line up.
pub fn card_line(card: &ClockCard, time_width: usize) -> String {
    let time = match &card.seconds {
        Some(seconds) if card.time.ends_with('M') => {
            // 12-hour: seconds go before the AM/PM marker
            let (clock, meridiem) = card.time.split_at(card.time.len() - 3);
            format!("{clock}:{seconds}{meridiem}")
        }
        Some(seconds) => format!("{}:{}", card.time, seconds),
        None => card.time.clone(),
    };

    format!(
        "{:<time_width$}  {:<11}  {:<5}  {:<8}  {}",
        time,
        card.date,
        card.offset_label,
        card.slot.as_str(),
        card.timezone
    )
}

/// Display detailed help for the clocks command (help subcommand)
pub fn display_help() {
    log_version!();
    log_block_start!("clocks - Local time in every configured city");
    log_block_start!("Usage: offset [OPTIONS] clocks");
    log_block_start!("Description:");
    log_indented!("Shows one card per city with its local time, date, whole-hour");
    log_indented!("offset from the reference zone and meeting suitability.");
    log_indented!("The icon follows the local hour (day is 06:00 to 18:00).");
    log_indented!("With --debug, cities where the sun disagrees are reported.");
    log_block_start!("Examples:");
    log_indented!("# Now");
    log_indented!("offset");
    log_pipe!();
    log_indented!("# Three hours from now");
    log_indented!("offset --shift 180 clocks");
    log_end!();
}
