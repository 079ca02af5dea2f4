//! Calendar arithmetic between a birth date and a reference date.
//!
//! Chrono does not provide a built-in year/month/day diff, so the
//! calendar-aware borrowing rules are implemented manually. The same
//! borrow arithmetic drives both the elapsed-age breakdown and the
//! months/days countdown to the next anniversary.
//!
//! This logic correctly handles:
//!   - month underflow (borrowing from years)
//!   - day underflow (borrowing from preceding months)
//!   - leap years and varying month lengths

use chrono::{Datelike, NaiveDate};
use log::debug;
use shared::{AgeDetails, NextBirthday};
use thiserror::Error;

/// Errors surfaced to the user by the age tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AgeError {
    /// The birth date lies after the reference date.
    #[error("You haven't been born yet!")]
    NotYetBorn,
}

/// Service handling all age-related calendar computations
#[derive(Clone, Default)]
pub struct AgeService;

impl AgeService {
    /// Create a new AgeService instance
    pub fn new() -> Self {
        Self
    }

    /// Elapsed age in whole years, months and days between `birth` and
    /// `today`.
    pub fn elapsed(&self, birth: NaiveDate, today: NaiveDate) -> Result<AgeDetails, AgeError> {
        if birth > today {
            return Err(AgeError::NotYetBorn);
        }

        let (years, months, days) = calendar_diff(birth, today);
        debug!("Elapsed age for {}: {}y {}m {}d", birth, years, months, days);

        Ok(AgeDetails {
            years,
            months,
            days,
        })
    }

    /// Offset from `today` to the next anniversary of `birth`, plus the
    /// weekday that anniversary falls on.
    ///
    /// The candidate anniversary is built in `today`'s year and moves to
    /// the following year only when it has already passed; a candidate
    /// equal to `today` stays put, so a birthday today yields a zero
    /// offset. Feb 29 birth dates resolve to Mar 1 in non-leap years.
    pub fn next_anniversary(&self, birth: NaiveDate, today: NaiveDate) -> NextBirthday {
        let mut candidate = anniversary_in_year(birth, today.year());
        if candidate < today {
            candidate = anniversary_in_year(birth, today.year() + 1);
        }

        let (_, months, days) = calendar_diff(today, candidate);
        debug!(
            "Next anniversary of {} after {}: {} ({}m {}d away)",
            birth, today, candidate, months, days
        );

        NextBirthday {
            months,
            days,
            weekday: candidate.format("%A").to_string(),
        }
    }
}

/// Anniversary of `birth` within `year`. Feb 29 normalizes to Mar 1 when
/// `year` is not a leap year.
fn anniversary_in_year(birth: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day()).unwrap_or_else(|| {
        // Only Feb 29 can fail to exist in another year
        NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year")
    })
}

/// Component-wise difference `to - from` as (years, months, days).
///
/// Day underflow borrows from the month immediately preceding `to`,
/// walking further back while the day count stays negative (a 31st
/// measured against a date early in March needs two borrows because
/// February is short). Month underflow borrows 12 months from the year
/// count. Requires `from <= to`.
fn calendar_diff(from: NaiveDate, to: NaiveDate) -> (i32, u32, u32) {
    let mut years = to.year() - from.year();
    let mut months = to.month() as i32 - from.month() as i32;
    let mut days = to.day() as i32 - from.day() as i32;

    let (mut borrow_year, mut borrow_month) = (to.year(), to.month());
    while days < 0 {
        months -= 1;
        let (prev_year, prev_month) = previous_month(borrow_year, borrow_month);
        days += days_in_month(prev_year, prev_month) as i32;
        borrow_year = prev_year;
        borrow_month = prev_month;
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    (years, months as u32, days as u32)
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Returns number of days in a given year/month (handles leap years)
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps the function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 -> leap year
///   - except divisible by 100 -> not leap year
///   - except divisible by 400 -> leap year
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31); // January
        assert_eq!(days_in_month(2025, 4), 30); // April
        assert_eq!(days_in_month(2025, 2), 28); // February (non-leap)
        assert_eq!(days_in_month(2024, 2), 29); // February (leap year)
    }

    #[test]
    fn test_is_leap_year() {
        assert!(!is_leap_year(2025)); // Regular year
        assert!(is_leap_year(2024)); // Divisible by 4
        assert!(!is_leap_year(1900)); // Divisible by 100 but not 400
        assert!(is_leap_year(2000)); // Divisible by 400
    }

    #[test]
    fn test_elapsed_simple() {
        let service = AgeService::new();

        let age = service
            .elapsed(date(2000, 1, 1), date(2024, 6, 15))
            .unwrap();
        assert_eq!(age.years, 24);
        assert_eq!(age.months, 5);
        assert_eq!(age.days, 14);
    }

    #[test]
    fn test_elapsed_exact_anniversary() {
        let service = AgeService::new();

        let age = service
            .elapsed(date(2023, 3, 1), date(2024, 3, 1))
            .unwrap();
        assert_eq!(age.years, 1);
        assert_eq!(age.months, 0);
        assert_eq!(age.days, 0);
    }

    #[test]
    fn test_elapsed_same_day() {
        let service = AgeService::new();

        let age = service
            .elapsed(date(2024, 6, 15), date(2024, 6, 15))
            .unwrap();
        assert_eq!((age.years, age.months, age.days), (0, 0, 0));
    }

    #[test]
    fn test_elapsed_day_borrow_uses_reference_calendar() {
        let service = AgeService::new();

        // Borrow crosses February of a leap year: 29 days, not 28
        let age = service
            .elapsed(date(2024, 1, 20), date(2024, 3, 10))
            .unwrap();
        assert_eq!((age.years, age.months, age.days), (0, 1, 19));
    }

    #[test]
    fn test_elapsed_double_borrow() {
        let service = AgeService::new();

        // Jan 31 -> Mar 1: a single 29-day borrow would leave -1 days
        let age = service
            .elapsed(date(2024, 1, 31), date(2024, 3, 1))
            .unwrap();
        assert_eq!((age.years, age.months, age.days), (0, 0, 30));
    }

    #[test]
    fn test_elapsed_month_borrow_across_year() {
        let service = AgeService::new();

        let age = service
            .elapsed(date(2023, 11, 15), date(2024, 2, 10))
            .unwrap();
        assert_eq!((age.years, age.months, age.days), (0, 2, 26));
    }

    #[test]
    fn test_elapsed_rejects_future_birth_date() {
        let service = AgeService::new();

        let result = service.elapsed(date(2030, 1, 1), date(2024, 6, 15));
        assert_eq!(result, Err(AgeError::NotYetBorn));
    }

    #[test]
    fn test_next_anniversary_today_is_birthday() {
        let service = AgeService::new();

        // Candidate equal to today is not advanced: zero offset
        let next = service.next_anniversary(date(2023, 3, 1), date(2024, 3, 1));
        assert_eq!(next.months, 0);
        assert_eq!(next.days, 0);
        assert_eq!(next.weekday, "Friday");
    }

    #[test]
    fn test_next_anniversary_upcoming() {
        let service = AgeService::new();

        // Jun 15 + 6 months = Dec 15, + 17 days = Jan 1
        let next = service.next_anniversary(date(2000, 1, 1), date(2024, 6, 15));
        assert_eq!(next.months, 6);
        assert_eq!(next.days, 17);
        assert_eq!(next.weekday, "Wednesday"); // 2025-01-01
    }

    #[test]
    fn test_next_anniversary_already_passed_this_year() {
        let service = AgeService::new();

        let next = service.next_anniversary(date(1990, 5, 1), date(2024, 6, 15));
        assert_eq!(next.months, 10);
        assert_eq!(next.days, 16);
        assert_eq!(next.weekday, "Thursday"); // 2025-05-01
    }

    #[test]
    fn test_next_anniversary_double_borrow() {
        let service = AgeService::new();

        // Jan 31 against a Mar 1 anniversary crosses short February
        let next = service.next_anniversary(date(1999, 3, 1), date(2025, 1, 31));
        assert_eq!(next.months, 0);
        assert_eq!(next.days, 29);
        assert_eq!(next.weekday, "Saturday"); // 2025-03-01
    }

    #[test]
    fn test_next_anniversary_leap_day_in_non_leap_year() {
        let service = AgeService::new();

        // Feb 29 birth date resolves to Mar 1 in non-leap years
        let next = service.next_anniversary(date(2020, 2, 29), date(2025, 1, 15));
        assert_eq!(next.months, 1);
        assert_eq!(next.days, 14);
        assert_eq!(next.weekday, "Saturday"); // 2025-03-01
    }

    #[test]
    fn test_next_anniversary_leap_day_in_leap_year() {
        let service = AgeService::new();

        let next = service.next_anniversary(date(2020, 2, 29), date(2024, 1, 15));
        assert_eq!(next.months, 1);
        assert_eq!(next.days, 14);
        assert_eq!(next.weekday, "Thursday"); // 2024-02-29
    }

    #[test]
    fn test_next_anniversary_always_within_a_year() {
        let service = AgeService::new();

        let birth = date(1988, 7, 23);
        let mut today = date(2024, 1, 1);
        for _ in 0..366 {
            let next = service.next_anniversary(birth, today);
            assert!(next.months <= 11, "months out of range on {}", today);
            assert!(next.days <= 30, "days out of range on {}", today);
            today = today.succ_opt().unwrap();
        }
    }
}
