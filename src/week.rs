//! Week-of-year computation.

use crate::convention::{WeekConvention, WeekdayConvention};
use crate::date_serial::{date_to_serial, serial_to_date};
use crate::math::floor_to_int;
use crate::weekday::weekday_of_serial;

const DAYS_IN_WEEK: i64 = 7;

/// Week number of the date at `value` under the given convention.
///
/// For the simple conventions, week 1 is the week containing January 1 of
/// the date's calendar year. For [`WeekConvention::Iso`] see
/// [`iso_week_of`].
///
/// ```
/// # use xlserial::{date_to_serial, serial_to_week, WeekConvention};
/// let jan1 = date_to_serial(2024, 1, 1) as f64;
/// assert_eq!(serial_to_week(jan1, WeekConvention::SundayFirst), 1);
/// ```
pub fn serial_to_week(value: f64, convention: WeekConvention) -> i64 {
    let serial = floor_to_int(value);
    match convention.weekday_equivalent() {
        Some(weekday_convention) => simple_week(serial, weekday_convention),
        None => iso_week(serial),
    }
}

/// ISO 8601 week number of the date at `value` (week 1 contains the
/// year's first Thursday).
///
/// A date in the last days of December can belong to week 1 of the next
/// year, and a date in early January to the last week of the previous
/// year; the result is always at least 1, never 0 or a 54th week.
///
/// ```
/// # use xlserial::{date_to_serial, iso_week_of};
/// assert_eq!(iso_week_of(date_to_serial(2024, 1, 1) as f64), 1);
/// assert_eq!(iso_week_of(date_to_serial(2021, 1, 1) as f64), 53);
/// ```
pub fn iso_week_of(value: f64) -> i64 {
    iso_week(floor_to_int(value))
}

/// Week 1 anchored on the first occurrence of the convention's start day
/// on or before January 1.
fn simple_week(serial: i64, convention: WeekdayConvention) -> i64 {
    let (year, _, _) = serial_to_date(serial);
    let jan1 = date_to_serial(year, 1, 1);
    let anchor = jan1 - (weekday_of_serial(jan1, convention) - 1);
    (serial - anchor) / DAYS_IN_WEEK + 1
}

/// Monday of ISO week 1 of `year`: the Monday of the week containing
/// January 1, unless January 1 falls on Friday, Saturday or Sunday, in
/// which case that week's Thursday is still in the previous year and week
/// 1 starts the following Monday.
fn iso_week_one_monday(year: i64) -> i64 {
    let jan1 = date_to_serial(year, 1, 1);
    let weekday = weekday_of_serial(jan1, WeekdayConvention::MondayFirst);
    if weekday <= 4 {
        jan1 - (weekday - 1)
    } else {
        jan1 + DAYS_IN_WEEK - weekday + 1
    }
}

fn iso_week(serial: i64) -> i64 {
    let (year, _, _) = serial_to_date(serial);
    let mut anchor = iso_week_one_monday(year);
    if serial < anchor {
        // Early January before this year's anchor belongs to the previous
        // year's numbering.
        anchor = iso_week_one_monday(year - 1);
    } else {
        // The Sunday closing this year's final ISO week. Later dates are
        // already week 1 of the next year.
        let mut last = date_to_serial(year, 12, 31);
        let weekday = weekday_of_serial(last, WeekdayConvention::SundayFirst);
        if weekday <= 4 {
            last -= weekday - 1;
        } else {
            last += DAYS_IN_WEEK - weekday + 1;
        }
        if serial > last {
            return 1;
        }
    }
    (serial - anchor) / DAYS_IN_WEEK + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serial(year: i64, month: i64, day: i64) -> i64 {
        date_to_serial(year, month, day)
    }

    #[test]
    fn test_simple_week_sunday_first() {
        // 2024-01-01 is a Monday; the Sunday-first anchor is 2023-12-31.
        assert_eq!(simple_week(serial(2024, 1, 1), WeekdayConvention::SundayFirst), 1);
        assert_eq!(simple_week(serial(2024, 1, 6), WeekdayConvention::SundayFirst), 1);
        assert_eq!(simple_week(serial(2024, 1, 7), WeekdayConvention::SundayFirst), 2);
        assert_eq!(simple_week(serial(2024, 12, 31), WeekdayConvention::SundayFirst), 53);
    }

    #[test]
    fn test_iso_anchor_shifts_forward() {
        // 2021-01-01 is a Friday, so ISO week 1 of 2021 starts Jan 4.
        assert_eq!(iso_week_one_monday(2021), serial(2021, 1, 4));
        // 2024-01-01 is a Monday and is its own anchor.
        assert_eq!(iso_week_one_monday(2024), serial(2024, 1, 1));
        // 2015-01-01 is a Thursday; the anchor backs up to Dec 29, 2014.
        assert_eq!(iso_week_one_monday(2015), serial(2014, 12, 29));
    }
}
