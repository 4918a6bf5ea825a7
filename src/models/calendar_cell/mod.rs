//! Calendar cell model.
//!
//! A month grid is a flat sequence of cells, seven per row. Day cells carry a
//! date and the today/selected flags; filler cells only pad the first and
//! last week so every row is complete.

use chrono::{Datelike, NaiveDate};

/// One position in a month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    /// Day number as display text, empty for filler cells
    pub label: String,
    /// The calendar day this cell shows, `None` for filler cells
    pub date: Option<NaiveDate>,
    /// Whether `date` is the device's current local day
    pub is_today: bool,
    /// Whether `date` is the currently selected day
    pub is_selected: bool,
    /// Whether the cell exists only to align the grid
    pub is_filler: bool,
}

impl CalendarCell {
    /// An empty alignment cell. Never today, never selected.
    pub fn filler() -> Self {
        Self {
            label: String::new(),
            date: None,
            is_today: false,
            is_selected: false,
            is_filler: true,
        }
    }

    /// A cell for a real day of the displayed month.
    pub fn day(date: NaiveDate, is_today: bool, is_selected: bool) -> Self {
        Self {
            label: date.day().to_string(),
            date: Some(date),
            is_today,
            is_selected,
            is_filler: false,
        }
    }

    /// Day of month for day cells.
    pub fn day_number(&self) -> Option<u32> {
        self.date.map(|d| d.day())
    }
}

impl Default for CalendarCell {
    fn default() -> Self {
        Self::filler()
    }
}
