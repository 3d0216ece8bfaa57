//! Time-of-day conversion.
//!
//! The time of day is the fractional part of a serial number, as a
//! fraction of the 86400 seconds in a day: 0.5 is noon, 0.75 is 18:00.

use crate::math::round_half_even;

const SECONDS_IN_MINUTE: i64 = 60;
const SECONDS_IN_HOUR: i64 = 3_600;
const SECONDS_IN_DAY: i64 = 86_400;

/// Convert a time of day to the fractional part of a serial number.
///
/// Out-of-range components are folded into total seconds and wrapped
/// modulo 86400, so `time_to_serial(25, 0, 0)` is 1 AM and negative
/// inputs wrap backwards from midnight rather than failing.
///
/// ```
/// # use xlserial::time_serial::time_to_serial;
/// assert_eq!(time_to_serial(12, 0, 0), 0.5);
/// assert_eq!(time_to_serial(25, 0, 0), time_to_serial(1, 0, 0));
/// ```
pub fn time_to_serial(hour: i64, minute: i64, second: i64) -> f64 {
    let total = second + minute * SECONDS_IN_MINUTE + hour * SECONDS_IN_HOUR;
    total.rem_euclid(SECONDS_IN_DAY) as f64 / SECONDS_IN_DAY as f64
}

/// Total seconds in the fractional part of `value`, rounded half-to-even.
///
/// `value - floor(value)` keeps the fraction in [0, 1) for negative
/// serials too, so times attached to pre-epoch dates behave like any
/// other time of day.
fn serial_seconds(value: f64) -> i64 {
    round_half_even((value - value.floor()) * SECONDS_IN_DAY as f64)
}

/// Convert the fractional part of a serial to `(hour, minute, second)`.
///
/// Seconds are rounded half-to-even, not truncated, so a fraction half a
/// second short of noon already reads 12:00:00.
pub fn serial_to_time(value: f64) -> (i64, i64, i64) {
    let seconds = serial_seconds(value);
    (
        seconds / SECONDS_IN_HOUR,
        (seconds % SECONDS_IN_HOUR) / SECONDS_IN_MINUTE,
        seconds % SECONDS_IN_MINUTE,
    )
}

/// Hour (0-23) of the time at `value`.
pub fn hour_of(value: f64) -> i64 {
    serial_seconds(value) / SECONDS_IN_HOUR
}

/// Minute (0-59) of the time at `value`.
pub fn minute_of(value: f64) -> i64 {
    (serial_seconds(value) % SECONDS_IN_HOUR) / SECONDS_IN_MINUTE
}

/// Second (0-59) of the time at `value`.
pub fn second_of(value: f64) -> i64 {
    serial_seconds(value) % SECONDS_IN_MINUTE
}
