use std::collections::BTreeSet;
use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::calendar_cell::CalendarCell;
use crate::services::calendar::MonthGrid;
use crate::utils::date::WEEKDAY_HEADERS;

/// Width of one day column.
const CELL_WIDTH: usize = 4;

/// Month grid as text: a centered title, the Sun..Sat header, one line per
/// week. Selected days render as `[20]`, today as `(20)`, and days with a
/// logged session get a trailing `*` when no other marker is showing.
pub struct MonthView;

impl MonthView {
    pub fn render(grid: &MonthGrid, session_days: &BTreeSet<NaiveDate>) -> String {
        let line_width = CELL_WIDTH * 7 + 6;
        let mut out = String::new();

        let title = format!("{:^width$}", grid.title(), width = line_width);
        let _ = writeln!(out, "{}", title.trim_end());

        let header: Vec<String> = WEEKDAY_HEADERS
            .iter()
            .map(|d| format!("{:>width$}", d, width = CELL_WIDTH))
            .collect();
        let _ = writeln!(out, "{}", header.join(" "));

        for week in grid.weeks() {
            let row: Vec<String> = week
                .iter()
                .map(|cell| Self::render_cell(cell, session_days))
                .collect();
            let _ = writeln!(out, "{}", row.join(" ").trim_end());
        }

        out
    }

    fn render_cell(cell: &CalendarCell, session_days: &BTreeSet<NaiveDate>) -> String {
        let Some(date) = cell.date else {
            return " ".repeat(CELL_WIDTH);
        };

        let (open, close) = if cell.is_selected {
            ('[', ']')
        } else if cell.is_today {
            ('(', ')')
        } else if session_days.contains(&date) {
            (' ', '*')
        } else {
            (' ', ' ')
        };

        format!("{}{:>2}{}", open, cell.label, close)
    }
}
