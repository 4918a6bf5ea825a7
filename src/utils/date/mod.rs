// Date utility functions
// Calendar-day arithmetic shared by the month grid, navigation and session keys

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone};

/// Weekday header labels, Sunday first to line up with `first_weekday`.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Format used for session keys and CLI date arguments.
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Two dates are the same calendar day when year, month and day all match.
pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// Calendar-day equality for zoned instants, ignoring time-of-day.
///
/// Both instants are read in their own offset; no conversion happens.
pub fn is_same_local_day<Tz: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz>) -> bool {
    is_same_day(a.date_naive(), b.date_naive())
}

/// Build a date from raw components, `None` if they don't name a real day.
pub fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Day of week of the first of the month, 0 = Sunday ... 6 = Saturday.
pub fn first_weekday(date: NaiveDate) -> u32 {
    first_of_month(date).weekday().num_days_from_sunday()
}

/// Number of days in the month containing `date`.
///
/// Computed as "day 0 of next month": the day before the first of the
/// following month. Leap years fall out of this without a lookup table.
pub fn days_in_month(date: NaiveDate) -> u32 {
    match shift_month(date, 1) {
        Some(next_first) => (next_first - Days::new(1)).day(),
        // Only reachable in December of chrono's last representable year.
        None => 31,
    }
}

/// Move `date` by `delta` calendar months, landing on the first of the month.
///
/// Year boundaries wrap in both directions. Returns `None` only when the
/// result falls outside chrono's representable range.
pub fn shift_month(date: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let total = i64::from(date.year()) * 12 + i64::from(date.month0()) + i64::from(delta);
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month0 = total.rem_euclid(12) as u32;
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
}

/// First of the previous month; stays put at the edge of the calendar.
pub fn previous_month(date: NaiveDate) -> NaiveDate {
    shift_month(date, -1).unwrap_or_else(|| first_of_month(date))
}

/// First of the next month; stays put at the edge of the calendar.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    shift_month(date, 1).unwrap_or_else(|| first_of_month(date))
}

/// True when both dates fall in the same month of the same year.
pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// `YYYY-MM-DD` representation used to key sessions by day.
pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` day key.
pub fn parse_day_key(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), DAY_KEY_FORMAT)
}

/// Parse a `YYYY-MM` month argument into the first of that month.
pub fn parse_month(value: &str) -> Option<NaiveDate> {
    let (year, month) = value.trim().split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    ymd(year, month, 1)
}

/// Month and year heading such as "April 2025".
pub fn month_year_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
