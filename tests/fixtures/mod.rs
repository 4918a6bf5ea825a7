// Test fixtures - reusable test data
// Provides consistent dates and sessions across all test files

#![allow(dead_code)]

use chrono::NaiveDate;
use climb_calendar::models::session::{LoggedSession, Mood};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Apr 20, 2025 (a Sunday in a month that starts on Tuesday)
    pub fn april_20_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 20).unwrap()
    }

    /// Apr 19, 2025, the day before
    pub fn april_19_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 19).unwrap()
    }

    /// Jan 15, 2025, for wrapping back into the previous year
    pub fn mid_jan_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    /// Dec 31, 2025, for wrapping forward into the next year
    pub fn new_years_eve_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Sample sessions for testing
pub mod sessions {
    use super::*;

    /// A good day on the Mezzanine
    pub fn april_20_session() -> LoggedSession {
        LoggedSession::new(dates::april_20_2025(), Mood::Great)
            .with_route("White V4", true)
            .with_route("Blue V5", false)
    }

    /// A tired day with one send
    pub fn april_22_session() -> LoggedSession {
        LoggedSession::new(NaiveDate::from_ymd_opt(2025, 4, 22).unwrap(), Mood::Tired)
            .with_route("Pink V2", true)
    }

    /// Seed file contents as they would sit on disk
    pub fn seed_json() -> &'static str {
        r#"[
            {"date": "2025-04-20", "mood": "great", "routes": [{"name": "White V4", "sent": true}]},
            {"date": "2025-04-20", "mood": "rough", "routes": [{"name": "Blue V5", "sent": false}]},
            {"date": "2025-04-22", "mood": "tired", "routes": [{"name": "Pink V2", "sent": true}], "notes": "Short session"}
        ]"#
    }
}
