//! Weekday computation.

use crate::convention::WeekdayConvention;
use crate::date_serial::BASE_OFFSET;
use crate::math::floor_to_int;

const DAYS_IN_WEEK: i64 = 7;

/// The serial of 1601-01-01, which is a Monday.
///
/// 2001-01-01 was a Monday, and both 1601 and 2001 open a 400-year leap
/// cycle, so they fall on the same weekday.
const MONDAY_REFERENCE: i64 = 1 - BASE_OFFSET;

/// Weekday of an integer serial; shared with the week and weekend engines
/// so they avoid a float round trip.
pub(crate) fn weekday_of_serial(serial: i64, convention: WeekdayConvention) -> i64 {
    let reference = MONDAY_REFERENCE + convention.reference_shift();
    let days = (serial - reference).rem_euclid(DAYS_IN_WEEK);
    if convention.zero_based() {
        days
    } else {
        days + 1
    }
}

/// Weekday number of the date at `value` under the given convention.
///
/// ```
/// # use xlserial::{serial_to_weekday, WeekdayConvention};
/// // 1900-01-01 (serial 2) was a Monday.
/// assert_eq!(serial_to_weekday(2.0, WeekdayConvention::MondayFirst), 1);
/// assert_eq!(serial_to_weekday(2.0, WeekdayConvention::SundayFirst), 2);
/// ```
pub fn serial_to_weekday(value: f64, convention: WeekdayConvention) -> i64 {
    weekday_of_serial(floor_to_int(value), convention)
}
