use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::session::LoggedSession;

/// Shown when nothing was logged on the selected day.
pub const EMPTY_STATE: &str = "No climbs logged for this day";

/// The selected day's session, or the empty state.
pub struct DayView;

impl DayView {
    pub fn render(date: NaiveDate, session: Option<&LoggedSession>, date_format: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Climbs for {}", date.format(date_format));

        let Some(session) = session else {
            let _ = writeln!(out, "{}", EMPTY_STATE);
            return out;
        };

        let _ = writeln!(
            out,
            "{} {} - {}/{} sent",
            session.mood.emoji(),
            session.mood.label(),
            session.sends(),
            session.routes.len()
        );
        for route in &session.routes {
            let mark = if route.sent { "✓" } else { "✗" };
            let _ = writeln!(out, "  {} {}", mark, route.name);
        }
        if let Some(notes) = &session.notes {
            let _ = writeln!(out, "Notes: {}", notes);
        }

        out
    }
}
