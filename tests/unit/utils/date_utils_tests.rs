// Unit tests for the date utilities behind the month grid
// Parameterized with test-case over month lengths and navigation edges

use chrono::NaiveDate;
use test_case::test_case;

use climb_calendar::utils::date::{
    days_in_month, first_weekday, is_same_day, next_month, previous_month, shift_month,
    WEEKDAY_HEADERS,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test_case(2025, 1, 31; "january")]
#[test_case(2025, 2, 28; "february common year")]
#[test_case(2024, 2, 29; "february leap year")]
#[test_case(2100, 2, 28; "february century non leap")]
#[test_case(2000, 2, 29; "february quad century leap")]
#[test_case(2025, 4, 30; "april")]
#[test_case(2025, 9, 30; "september")]
#[test_case(2025, 12, 31; "december")]
fn test_days_in_month(year: i32, month: u32, expected: u32) {
    assert_eq!(days_in_month(date(year, month, 1)), expected);
}

#[test_case(2025, 4, 2; "april 2025 starts tuesday")]
#[test_case(2025, 6, 0; "june 2025 starts sunday")]
#[test_case(2025, 11, 6; "november 2025 starts saturday")]
#[test_case(2024, 2, 4; "february 2024 starts thursday")]
fn test_first_weekday(year: i32, month: u32, expected: u32) {
    assert_eq!(first_weekday(date(year, month, 17)), expected);
}

#[test_case(date(2025, 1, 15), date(2024, 12, 1); "january back to december")]
#[test_case(date(2025, 3, 31), date(2025, 2, 1); "end of march back to february")]
#[test_case(date(2024, 3, 1), date(2024, 2, 1); "into leap february")]
fn test_previous_month(from: NaiveDate, expected: NaiveDate) {
    assert_eq!(previous_month(from), expected);
}

#[test_case(date(2025, 12, 31), date(2026, 1, 1); "december forward to january")]
#[test_case(date(2025, 1, 31), date(2025, 2, 1); "end of january forward")]
fn test_next_month(from: NaiveDate, expected: NaiveDate) {
    assert_eq!(next_month(from), expected);
}

#[test]
fn test_shift_month_large_deltas() {
    assert_eq!(shift_month(date(2025, 4, 20), 24), Some(date(2027, 4, 1)));
    assert_eq!(shift_month(date(2025, 4, 20), -28), Some(date(2022, 12, 1)));
}

#[test]
fn test_is_same_day() {
    assert!(is_same_day(date(2025, 4, 20), date(2025, 4, 20)));
    assert!(!is_same_day(date(2025, 4, 20), date(2024, 4, 20)));
    assert!(!is_same_day(date(2025, 4, 20), date(2025, 5, 20)));
}

#[test]
fn test_weekday_headers_start_on_sunday() {
    assert_eq!(WEEKDAY_HEADERS[0], "Sun");
    assert_eq!(WEEKDAY_HEADERS[6], "Sat");
}
