// Property-based tests for month grid generation and month navigation
// Random months, selections and "now" values across several centuries

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use climb_calendar::services::calendar::build_month_grid;
use climb_calendar::utils::date::{next_month, previous_month};

/// Any real calendar day between 1900 and 2200.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1900..2200i32, 1..=12u32, 1..=31u32).prop_map(|(y, m, d)| {
        // Clamp the day into the month by stepping back until it is valid
        (1..=d)
            .rev()
            .find_map(|day| NaiveDate::from_ymd_opt(y, m, day))
            .unwrap()
    })
}

/// Month length from a standard-rules reference, independent of chrono.
fn reference_month_length(year: i32, month: u32) -> usize {
    let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
    match month {
        2 if leap => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

proptest! {
    /// Property: the grid is always made of complete weeks
    #[test]
    fn prop_length_is_multiple_of_seven(
        reference in any_date(),
        selected in any_date(),
        now in any_date(),
    ) {
        let cells = build_month_grid(reference, selected, now);
        prop_assert_eq!(cells.len() % 7, 0);
        prop_assert!(cells.len() >= 28 && cells.len() <= 42);
    }

    /// Property: one day cell per day of the month, in order
    #[test]
    fn prop_day_cells_match_month_length(reference in any_date()) {
        let cells = build_month_grid(reference, reference, reference);
        let days: Vec<_> = cells.iter().filter_map(|c| c.date).collect();

        prop_assert_eq!(days.len(), reference_month_length(reference.year(), reference.month()));
        for (i, day) in days.iter().enumerate() {
            prop_assert_eq!(day.day() as usize, i + 1);
            prop_assert_eq!(day.month(), reference.month());
            prop_assert_eq!(day.year(), reference.year());
        }
    }

    /// Property: leading fillers equal chrono's Sunday-based weekday of the 1st
    #[test]
    fn prop_first_day_sits_under_its_weekday(reference in any_date()) {
        let cells = build_month_grid(reference, reference, reference);
        let leading = cells.iter().take_while(|c| c.is_filler).count();
        let first = NaiveDate::from_ymd_opt(reference.year(), reference.month(), 1).unwrap();

        prop_assert_eq!(leading as u32, first.weekday().num_days_from_sunday());
        prop_assert!(leading < 7);
    }

    /// Property: fillers never carry a date or a flag
    #[test]
    fn prop_fillers_are_blank(
        reference in any_date(),
        selected in any_date(),
        now in any_date(),
    ) {
        let cells = build_month_grid(reference, selected, now);
        for cell in cells.iter().filter(|c| c.is_filler) {
            prop_assert!(cell.date.is_none());
            prop_assert!(cell.label.is_empty());
            prop_assert!(!cell.is_today && !cell.is_selected);
        }
    }

    /// Property: exactly one selected cell iff the selection is in the month
    #[test]
    fn prop_selected_count(reference in any_date(), selected in any_date(), now in any_date()) {
        let cells = build_month_grid(reference, selected, now);
        let count = cells.iter().filter(|c| c.is_selected).count();
        let in_month = selected.year() == reference.year() && selected.month() == reference.month();

        prop_assert_eq!(count, usize::from(in_month));
    }

    /// Property: exactly one today cell iff the month is the current month
    #[test]
    fn prop_today_count(reference in any_date(), now in any_date()) {
        let cells = build_month_grid(reference, reference, now);
        let count = cells.iter().filter(|c| c.is_today).count();
        let current = now.year() == reference.year() && now.month() == reference.month();

        prop_assert_eq!(count, usize::from(current));
    }

    /// Property: forward then back returns to the same month, and vice versa
    #[test]
    fn prop_navigation_round_trips(start in any_date()) {
        let there_and_back = previous_month(next_month(start));
        prop_assert_eq!((there_and_back.year(), there_and_back.month()), (start.year(), start.month()));

        let back_and_forth = next_month(previous_month(start));
        prop_assert_eq!((back_and_forth.year(), back_and_forth.month()), (start.year(), start.month()));
    }

    /// Property: January wraps back to December of the previous year
    #[test]
    fn prop_january_wraps_back(year in 1900..2200i32, day in 1..=31u32) {
        let january = NaiveDate::from_ymd_opt(year, 1, day).unwrap();
        let previous = previous_month(january);
        prop_assert_eq!((previous.year(), previous.month(), previous.day()), (year - 1, 12, 1));
    }

    /// Property: December wraps forward to January of the next year
    #[test]
    fn prop_december_wraps_forward(year in 1900..2200i32, day in 1..=31u32) {
        let december = NaiveDate::from_ymd_opt(year, 12, day).unwrap();
        let next = next_month(december);
        prop_assert_eq!((next.year(), next.month(), next.day()), (year + 1, 1, 1));
    }
}

#[cfg(test)]
mod additional_tests {
    use super::*;

    #[test]
    fn test_reference_month_length_matches_known_values() {
        assert_eq!(reference_month_length(2024, 2), 29);
        assert_eq!(reference_month_length(1900, 2), 28);
        assert_eq!(reference_month_length(2025, 11), 30);
    }
}
