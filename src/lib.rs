//! xlserial - Excel-compatible serial date and time arithmetic
//!
//! This crate converts between serial numbers and calendar fields,
//! matching Excel's actual behavior including inherited quirks. A serial
//! number counts days since the epoch (serial 1 = December 31, 1899) in
//! its integer part and carries the time of day as a fraction of 86400
//! seconds in its fractional part.
//!
//! Serials agree with Excel's 1900 date system for every date from
//! 1900-03-01 onward. Earlier dates are one day off because of the Lotus
//! 1-2-3 leap year bug that Excel preserves; this crate keeps the real
//! calendar and the compatible epoch instead of modeling the phantom
//! February 29, 1900.
//!
//! Out-of-range inputs are folded, not rejected: month 13 rolls into the
//! next year, day 0 is the last day of the previous month, hour 25 wraps
//! past midnight, and negative serials address dates before the epoch.
//! The only errors are unknown convention tags and malformed weekend
//! specifiers.

pub mod clock;
pub mod convention;
pub mod date_serial;
pub mod delta;
pub mod error;
pub mod math;
pub mod time_serial;
pub mod week;
pub mod weekday;
pub mod weekend;

#[cfg(feature = "chrono")]
pub use clock::SystemClock;
pub use clock::{now, today, Clock, LocalTime};
pub use convention::{WeekConvention, WeekdayConvention};
pub use date_serial::{
    date_to_serial, day_of, days_in_month, is_leap_year, month_of, serial_to_date, year_of,
};
pub use delta::{days_between, months_between, years_between};
pub use error::{ConventionError, WeekendSpecError};
pub use time_serial::{hour_of, minute_of, second_of, serial_to_time, time_to_serial};
pub use week::{iso_week_of, serial_to_week};
pub use weekday::serial_to_weekday;
pub use weekend::{is_weekend, Weekend};
