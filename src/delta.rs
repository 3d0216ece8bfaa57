//! Elapsed days, months and years between two serials.

use crate::date_serial::serial_to_date;
use crate::math::floor_to_int;

/// Number of days between two serials, ignoring the time of day.
///
/// Negative when `end` is before `start`.
pub fn days_between(start: f64, end: f64) -> i64 {
    floor_to_int(end) - floor_to_int(start)
}

/// Number of full months between two serials.
///
/// A month only counts once the day of month has been reached, so
/// January 31 to February 28 is zero full months.
pub fn months_between(start: f64, end: f64) -> i64 {
    let (start_year, start_month, start_day) = serial_to_date(floor_to_int(start));
    let (end_year, end_month, end_day) = serial_to_date(floor_to_int(end));
    let mut months = (end_year - start_year) * 12 + end_month - start_month;
    if start_day > end_day {
        months -= 1;
    }
    months
}

/// Number of full years between two serials.
///
/// The same truncation rule as [`months_between`], applied to the
/// (month, day) pair.
pub fn years_between(start: f64, end: f64) -> i64 {
    let (start_year, start_month, start_day) = serial_to_date(floor_to_int(start));
    let (end_year, end_month, end_day) = serial_to_date(floor_to_int(end));
    let mut years = end_year - start_year;
    if start_month > end_month || (start_month == end_month && start_day > end_day) {
        years -= 1;
    }
    years
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_serial::date_to_serial;

    fn serial(year: i64, month: i64, day: i64) -> f64 {
        date_to_serial(year, month, day) as f64
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between(serial(2024, 1, 1), serial(2024, 3, 1)), 60);
        assert_eq!(days_between(serial(2023, 1, 1), serial(2023, 3, 1)), 59);
        assert_eq!(days_between(serial(2024, 3, 1), serial(2024, 1, 1)), -60);
        // The time of day never contributes.
        assert_eq!(days_between(0.75, 1.25), 1);
    }

    #[test]
    fn test_months_between_truncates_on_day() {
        assert_eq!(months_between(serial(2024, 1, 1), serial(2024, 3, 1)), 2);
        assert_eq!(months_between(serial(2024, 1, 31), serial(2024, 2, 28)), 0);
        assert_eq!(months_between(serial(2024, 1, 31), serial(2024, 3, 31)), 2);
        assert_eq!(months_between(serial(2023, 11, 15), serial(2024, 2, 15)), 3);
        assert_eq!(months_between(serial(2023, 3, 15), serial(2023, 3, 14)), -1);
    }

    #[test]
    fn test_years_between_truncates_on_month_day() {
        assert_eq!(years_between(serial(2000, 2, 29), serial(2001, 2, 28)), 0);
        assert_eq!(years_between(serial(2000, 2, 29), serial(2004, 2, 29)), 4);
        assert_eq!(years_between(serial(2000, 6, 1), serial(2024, 5, 31)), 23);
        assert_eq!(years_between(serial(2000, 6, 1), serial(2024, 6, 1)), 24);
    }
}
