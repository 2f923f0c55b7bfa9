//! Meeting planner: one day of hourly slots across all cities.
//!
//! Columns are absolute instants one hour apart, starting at local midnight of
//! the chosen date in the reference zone. Each city row shows what its clock
//! reads at those instants and how suitable that hour is for a meeting.

use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use chrono_tz::Tz;

use crate::city::City;
use crate::constants::PLANNER_COLUMNS;
use crate::solar::Instant;
use crate::time_source::is_renderable;
use crate::zones::{TimeSlot, classify_slot, zoned_local_time_in};

/// One city at one column.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerCell {
    pub instant: Instant,
    pub local: DateTime<Tz>,
    pub hour: u32,
    pub slot: TimeSlot,
    /// Local midnight: the city's date rolls over in this column.
    pub new_day: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerRow {
    pub city: City,
    pub timezone: Tz,
    pub cells: Vec<PlannerCell>,
}

#[derive(Debug, Clone)]
pub struct MeetingPlanner {
    pub base_date: NaiveDate,
    pub reference: Tz,
    pub columns: Vec<Instant>,
    pub rows: Vec<PlannerRow>,
}

/// First instant of `date` in `tz`.
///
/// Where DST skips midnight, the earliest valid local time after it is used.
/// `None` at the edges of the calendar.
pub fn start_of_day(date: NaiveDate, tz: Tz) -> Option<Instant> {
    let midnight = date.and_hms_opt(0, 0, 0)?;
    let mut candidate = midnight;
    // Gaps are at most a few hours; step forward in quarter hours until valid
    for _ in 0..(4 * 24) {
        if let Some(dt) = tz.from_local_datetime(&candidate).earliest() {
            return Some(dt.with_timezone(&chrono::Utc));
        }
        candidate = candidate.checked_add_signed(Duration::minutes(15))?;
    }
    Some(chrono::Utc.from_utc_datetime(&midnight))
}

impl MeetingPlanner {
    /// Lay out `base_date` in `reference`.
    ///
    /// `None` when the day sits so close to the end of the calendar that some
    /// city's clock could not be shown.
    pub fn new(base_date: NaiveDate, reference: Tz, cities: &[City]) -> Option<Self> {
        let start = start_of_day(base_date, reference)?;
        let columns = (0..PLANNER_COLUMNS)
            .map(|i| start.checked_add_signed(Duration::hours(i as i64)))
            .collect::<Option<Vec<Instant>>>()?;
        if !columns.iter().all(|&instant| is_renderable(instant)) {
            return None;
        }

        let rows = cities
            .iter()
            .map(|city| {
                let timezone = city.resolve_timezone();
                let cells = columns
                    .iter()
                    .map(|&instant| {
                        let local = zoned_local_time_in(instant, timezone);
                        let hour = local.hour();
                        PlannerCell {
                            instant,
                            local: local.local,
                            hour,
                            slot: classify_slot(hour),
                            new_day: hour == 0,
                        }
                    })
                    .collect();
                PlannerRow {
                    city: city.clone(),
                    timezone,
                    cells,
                }
            })
            .collect();

        Some(Self {
            base_date,
            reference,
            columns,
            rows,
        })
    }

    fn column_slots(&self, column: usize) -> impl Iterator<Item = TimeSlot> + '_ {
        self.rows.iter().map(move |row| row.cells[column].slot)
    }

    /// Columns where every city is in business hours.
    pub fn best_slots(&self) -> Vec<usize> {
        (0..self.columns.len())
            .filter(|&c| !self.rows.is_empty() && self.column_slots(c).all(|s| s == TimeSlot::Business))
            .collect()
    }

    /// Columns where no city is off hours.
    pub fn workable_slots(&self) -> Vec<usize> {
        (0..self.columns.len())
            .filter(|&c| !self.rows.is_empty() && self.column_slots(c).all(|s| s != TimeSlot::Off))
            .collect()
    }

    /// Reference-zone local time of a column header.
    pub fn column_label(&self, column: usize) -> Option<String> {
        self.columns
            .get(column)
            .map(|instant| instant.with_timezone(&self.reference).format("%H").to_string())
    }

    /// Shareable text describing a meeting at `column`.
    pub fn summary(&self, column: usize) -> Option<String> {
        let instant = self.columns.get(column)?;
        let date = instant.with_timezone(&self.reference).format("%d/%m/%Y");

        let mut text = format!("Proposed meeting: {date}\n\n");
        for row in &self.rows {
            let local = row.cells[column].local;
            text.push_str(&format!("- {}: {}\n", row.city.name, local.format("%H:%M")));
        }
        Some(text)
    }
}
