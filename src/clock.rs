//! System-clock access for `now` and `today`.
//!
//! The conversions never read the clock themselves; callers inject a
//! [`Clock`] so the arithmetic stays pure and testable. The default
//! implementation, [`SystemClock`], reads local time through `chrono` and
//! is available under the crate's default `chrono` feature.

use crate::date_serial::date_to_serial;
use crate::time_serial::time_to_serial;

/// A local calendar timestamp as reported by a clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTime {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
}

/// Source of the current local date and time.
pub trait Clock {
    fn local_time(&self) -> LocalTime;
}

/// Reads the operating system clock in the local time zone.
#[cfg(feature = "chrono")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "chrono")]
impl Clock for SystemClock {
    fn local_time(&self) -> LocalTime {
        use chrono::{Datelike, Timelike};
        let now = chrono::Local::now();
        LocalTime {
            year: now.year() as i64,
            month: now.month() as i64,
            day: now.day() as i64,
            hour: now.hour() as i64,
            minute: now.minute() as i64,
            second: now.second() as i64,
        }
    }
}

/// Serial number for the clock's current local date and time.
pub fn now(clock: &impl Clock) -> f64 {
    let t = clock.local_time();
    date_to_serial(t.year, t.month, t.day) as f64 + time_to_serial(t.hour, t.minute, t.second)
}

/// Serial number for the clock's current local date, without the time of
/// day.
pub fn today(clock: &impl Clock) -> i64 {
    let t = clock.local_time();
    date_to_serial(t.year, t.month, t.day)
}
