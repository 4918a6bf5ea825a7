//! Month grid generation.
//!
//! Builds the flat, row-major sequence of cells a month view renders: leading
//! fillers up to the first weekday (Sunday first), one cell per day, then
//! trailing fillers so the last row is a full week.

pub mod screen;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

use crate::models::calendar_cell::CalendarCell;
use crate::utils::date::{
    days_in_month, first_of_month, first_weekday, is_same_day, month_year_label,
};

/// Columns in a month grid.
pub const DAYS_PER_WEEK: usize = 7;

/// Build the cells for the month containing `reference_month`.
///
/// Only the year and month of `reference_month` are used. `selected_date` and
/// `now` are compared by calendar day, so time-of-day never matters.
pub fn build_month_grid(
    reference_month: NaiveDate,
    selected_date: NaiveDate,
    now: NaiveDate,
) -> Vec<CalendarCell> {
    let first = first_of_month(reference_month);
    let leading = first_weekday(first) as usize;
    let day_count = days_in_month(first);

    let mut cells = Vec::with_capacity(6 * DAYS_PER_WEEK);
    cells.extend((0..leading).map(|_| CalendarCell::filler()));

    for date in first.iter_days().take(day_count as usize) {
        cells.push(CalendarCell::day(
            date,
            is_same_day(date, now),
            is_same_day(date, selected_date),
        ));
    }

    let trailing = (DAYS_PER_WEEK - cells.len() % DAYS_PER_WEEK) % DAYS_PER_WEEK;
    cells.extend((0..trailing).map(|_| CalendarCell::filler()));

    log::debug!(
        "Built grid for {}-{:02}: {} leading, {} days, {} trailing",
        first.year(),
        first.month(),
        leading,
        day_count,
        trailing
    );

    cells
}

/// Same as [`build_month_grid`] for zoned instants, each reduced to its own
/// calendar day.
pub fn build_month_grid_at<Tz: TimeZone>(
    reference_month: &DateTime<Tz>,
    selected_date: &DateTime<Tz>,
    now: &DateTime<Tz>,
) -> Vec<CalendarCell> {
    build_month_grid(
        reference_month.date_naive(),
        selected_date.date_naive(),
        now.date_naive(),
    )
}

/// A built month grid together with the month it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: NaiveDate,
    cells: Vec<CalendarCell>,
}

impl MonthGrid {
    pub fn build(reference_month: NaiveDate, selected_date: NaiveDate, now: NaiveDate) -> Self {
        Self {
            month: first_of_month(reference_month),
            cells: build_month_grid(reference_month, selected_date, now),
        }
    }

    /// First day of the displayed month.
    pub fn month(&self) -> NaiveDate {
        self.month
    }

    /// Heading such as "April 2025".
    pub fn title(&self) -> String {
        month_year_label(self.month)
    }

    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    /// Rows of exactly seven cells, Sunday to Saturday.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn week_count(&self) -> usize {
        self.cells.len() / DAYS_PER_WEEK
    }

    pub fn selected_cell(&self) -> Option<&CalendarCell> {
        self.cells.iter().find(|c| c.is_selected)
    }

    pub fn today_cell(&self) -> Option<&CalendarCell> {
        self.cells.iter().find(|c| c.is_today)
    }

    /// Day cells only, in date order.
    pub fn days(&self) -> impl Iterator<Item = &CalendarCell> {
        self.cells.iter().filter(|c| !c.is_filler)
    }
}
