//! Date serial number conversion.
//!
//! Dates are serial numbers counting days, with serial 1 = December 31,
//! 1899. This makes the numbers identical to those produced by Excel's
//! 1900 date system for every date from 1900-03-01 onward. Earlier dates
//! disagree by one day: Excel inherited Lotus 1-2-3's phantom February 29,
//! 1900, while this crate stays on the real proleptic Gregorian calendar.
//! The disagreement is intentional and must not be "fixed"; consumers rely
//! on exact agreement with Excel in the post-bug range.
//!
//! Internally the calendar is anchored at 1601-01-01. 1601 is the first
//! year of a 400-year leap cycle (like 2001), which lets the conversions
//! peel whole 400/100/4/1-year chunks off a day count: a 4-year cycle has
//! 1461 days, a 100-year cycle loses the centurial leap day (36524), and a
//! 400-year cycle gains it back (146097).

const BASE_YEAR: i64 = 1601;

const DAYS_IN_YEAR: i64 = 365;
const DAYS_IN_4_YEARS: i64 = 1_461;
const DAYS_IN_100_YEARS: i64 = 36_524;
const DAYS_IN_400_YEARS: i64 = 146_097;

const MONTHS_IN_YEAR: i64 = 12;

/// Days between 1601-01-01 (internal day 1) and 1899-12-31 (serial 1).
/// Equal to `days_before_year(1900) - 1`.
pub(crate) const BASE_OFFSET: i64 = 109_206;

/// Cumulative days before the 1st of each month in a non-leap year,
/// 1-indexed by month (entry 12 closes the year at 365).
const DAYS_BEFORE_MONTH: [i64; 13] = [
    0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365,
];

/// Returns true under the 4/100/400 rule of the Gregorian calendar.
pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in the given month (1-12) of `year`.
pub fn days_in_month(year: i64, month: i64) -> i64 {
    debug_assert!((1..=MONTHS_IN_YEAR).contains(&month));
    let days = DAYS_BEFORE_MONTH[month as usize] - DAYS_BEFORE_MONTH[(month - 1) as usize];
    if month == 2 && is_leap_year(year) {
        days + 1
    } else {
        days
    }
}

/// Signed day count from 1601-01-01 to the 1st of January of `year`.
/// Negative for years before the base year.
fn days_before_year(year: i64) -> i64 {
    let years = year - BASE_YEAR;
    // Whole 400-year cycles are peeled off first (Euclidean, so years
    // below the base year work), leaving a year count in 0..400 for the
    // leap corrections.
    let cycles = years.div_euclid(400);
    let rest = years.rem_euclid(400);
    cycles * DAYS_IN_400_YEARS + rest * DAYS_IN_YEAR + rest / 4 - rest / 100
}

/// Days from January 1 to the 1st of `month` within `year`.
/// The month must already be normalized into 1..=12.
fn year_days_before_month(year: i64, month: i64) -> i64 {
    debug_assert!((1..=MONTHS_IN_YEAR).contains(&month));
    let days = DAYS_BEFORE_MONTH[(month - 1) as usize];
    if month > 2 && is_leap_year(year) {
        days + 1
    } else {
        days
    }
}

/// Convert a calendar date to its serial number.
///
/// The month may be any integer: whole-year multiples are carried into the
/// year by Euclidean division, so month 13 of 2024 is January 2025 and
/// month 0 of 2024 is December 2023. The day is not validated either;
/// out-of-range days roll over arithmetically, which makes
/// `date_to_serial(y, m, 0)` the last day of the previous month.
///
/// ```
/// # use xlserial::date_serial::date_to_serial;
/// assert_eq!(date_to_serial(1899, 12, 31), 1);
/// assert_eq!(date_to_serial(1900, 3, 1), 61); // Excel-identical from here on
/// assert_eq!(date_to_serial(2024, 13, 1), date_to_serial(2025, 1, 1));
/// ```
pub fn date_to_serial(year: i64, month: i64, day: i64) -> i64 {
    let year = year + (month - 1).div_euclid(MONTHS_IN_YEAR);
    let month = (month - 1).rem_euclid(MONTHS_IN_YEAR) + 1;
    day + year_days_before_month(year, month) + days_before_year(year) - BASE_OFFSET
}

/// Convert a serial number to `(year, month, day)`.
///
/// Exact inverse of [`date_to_serial`] for every `i64` serial. The serial
/// is rebased to the 1601 epoch and whole 400/100/4/1-year chunks are
/// peeled off. Only the 400-year step can see a negative day count, so it
/// alone uses Euclidean division; the 100-year and 1-year quotients are
/// clamped to 3 because the final year of each cycle is one day longer
/// than the plain division accounts for.
///
/// ```
/// # use xlserial::date_serial::serial_to_date;
/// assert_eq!(serial_to_date(1), (1899, 12, 31));
/// assert_eq!(serial_to_date(61), (1900, 3, 1));
/// assert_eq!(serial_to_date(-109_205), (1601, 1, 1));
/// ```
pub fn serial_to_date(serial: i64) -> (i64, i64, i64) {
    // Day count since 1601-01-01 (day 0).
    let mut days = serial + BASE_OFFSET - 1;
    let mut year = BASE_YEAR;

    let n = days.div_euclid(DAYS_IN_400_YEARS);
    year += n * 400;
    days -= n * DAYS_IN_400_YEARS;

    let n = (days / DAYS_IN_100_YEARS).min(3);
    year += n * 100;
    days -= n * DAYS_IN_100_YEARS;

    let n = days / DAYS_IN_4_YEARS;
    year += n * 4;
    days -= n * DAYS_IN_4_YEARS;

    let n = (days / DAYS_IN_YEAR).min(3);
    year += n;
    days -= n * DAYS_IN_YEAR;

    // Coarse month estimate. Dividing by 31 can land one month low near a
    // month boundary, so advance once when the estimate undershoots.
    let mut month = 1 + days / 31;
    if month < MONTHS_IN_YEAR && days >= year_days_before_month(year, month + 1) {
        month += 1;
    }
    let day = days - year_days_before_month(year, month) + 1;
    (year, month, day)
}

/// Year of the date at `value`, using the floor of the serial.
pub fn year_of(value: f64) -> i64 {
    serial_to_date(crate::math::floor_to_int(value)).0
}

/// Month (1-12) of the date at `value`.
pub fn month_of(value: f64) -> i64 {
    serial_to_date(crate::math::floor_to_int(value)).1
}

/// Day of month (1-31) of the date at `value`.
pub fn day_of(value: f64) -> i64 {
    serial_to_date(crate::math::floor_to_int(value)).2
}
