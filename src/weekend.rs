//! Weekend classification.

use crate::convention::WeekdayConvention;
use crate::error::{ConventionError, WeekendSpecError};
use crate::math::floor_to_int;
use crate::weekday::weekday_of_serial;

/// Which days of the week count as the weekend.
///
/// The numeric tags are Excel's WORKDAY.INTL weekend codes: 1-7 for the
/// two-day weekends and 11-17 for the one-day weekends.
/// [`Weekend::Custom`] holds an arbitrary mask, usually parsed from a
/// seven-character `0`/`1` string indexed Monday through Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weekend {
    /// Saturday and Sunday (tag 1, the default).
    #[default]
    SaturdaySunday,
    /// Sunday and Monday (tag 2).
    SundayMonday,
    /// Monday and Tuesday (tag 3).
    MondayTuesday,
    /// Tuesday and Wednesday (tag 4).
    TuesdayWednesday,
    /// Wednesday and Thursday (tag 5).
    WednesdayThursday,
    /// Thursday and Friday (tag 6).
    ThursdayFriday,
    /// Friday and Saturday (tag 7).
    FridaySaturday,
    /// Sunday only (tag 11).
    SundayOnly,
    /// Monday only (tag 12).
    MondayOnly,
    /// Tuesday only (tag 13).
    TuesdayOnly,
    /// Wednesday only (tag 14).
    WednesdayOnly,
    /// Thursday only (tag 15).
    ThursdayOnly,
    /// Friday only (tag 16).
    FridayOnly,
    /// Saturday only (tag 17).
    SaturdayOnly,
    /// Arbitrary weekend days, indexed Monday through Sunday.
    Custom([bool; 7]),
}

impl Weekend {
    /// Resolve a numeric WORKDAY.INTL weekend code.
    pub fn from_tag(tag: i64) -> Result<Self, ConventionError> {
        Ok(match tag {
            1 => Weekend::SaturdaySunday,
            2 => Weekend::SundayMonday,
            3 => Weekend::MondayTuesday,
            4 => Weekend::TuesdayWednesday,
            5 => Weekend::WednesdayThursday,
            6 => Weekend::ThursdayFriday,
            7 => Weekend::FridaySaturday,
            11 => Weekend::SundayOnly,
            12 => Weekend::MondayOnly,
            13 => Weekend::TuesdayOnly,
            14 => Weekend::WednesdayOnly,
            15 => Weekend::ThursdayOnly,
            16 => Weekend::FridayOnly,
            17 => Weekend::SaturdayOnly,
            _ => return Err(ConventionError::UnknownWeekendTag { tag }),
        })
    }

    /// Parse a seven-character `0`/`1` bitstring, indexed Monday through
    /// Sunday, into a custom weekend mask.
    ///
    /// ```
    /// # use xlserial::Weekend;
    /// // Friday and Saturday off.
    /// assert_eq!(
    ///     Weekend::parse("0000110"),
    ///     Ok(Weekend::Custom([false, false, false, false, true, true, false]))
    /// );
    /// assert!(Weekend::parse("00001").is_err());
    /// ```
    pub fn parse(spec: &str) -> Result<Self, WeekendSpecError> {
        let length = spec.chars().count();
        if length != 7 {
            return Err(WeekendSpecError::WrongLength { length });
        }
        let mut mask = [false; 7];
        for (position, found) in spec.chars().enumerate() {
            match found {
                '0' => {}
                '1' => mask[position] = true,
                _ => return Err(WeekendSpecError::InvalidCharacter { position, found }),
            }
        }
        Ok(Weekend::Custom(mask))
    }

    /// The shifted weekday convention under which this weekend's days land
    /// at the end of the week (7, or 6 and 7 for the two-day weekends).
    fn shifted_convention(self) -> WeekdayConvention {
        match self {
            Weekend::SaturdaySunday | Weekend::SundayOnly => WeekdayConvention::StartMonday,
            Weekend::SundayMonday | Weekend::MondayOnly => WeekdayConvention::StartTuesday,
            Weekend::MondayTuesday | Weekend::TuesdayOnly => WeekdayConvention::StartWednesday,
            Weekend::TuesdayWednesday | Weekend::WednesdayOnly => WeekdayConvention::StartThursday,
            Weekend::WednesdayThursday | Weekend::ThursdayOnly => WeekdayConvention::StartFriday,
            Weekend::ThursdayFriday | Weekend::FridayOnly => WeekdayConvention::StartSaturday,
            Weekend::FridaySaturday | Weekend::SaturdayOnly => WeekdayConvention::StartSunday,
            Weekend::Custom(_) => unreachable!("custom masks are tested directly"),
        }
    }

    fn is_two_day(self) -> bool {
        matches!(
            self,
            Weekend::SaturdaySunday
                | Weekend::SundayMonday
                | Weekend::MondayTuesday
                | Weekend::TuesdayWednesday
                | Weekend::WednesdayThursday
                | Weekend::ThursdayFriday
                | Weekend::FridaySaturday
        )
    }
}

/// Returns true when the date at `value` falls on the given weekend.
///
/// ```
/// # use xlserial::{date_to_serial, is_weekend, Weekend};
/// let saturday = date_to_serial(2024, 1, 6) as f64;
/// assert!(is_weekend(saturday, Weekend::SaturdaySunday));
/// assert!(!is_weekend(saturday, Weekend::SundayOnly));
/// ```
pub fn is_weekend(value: f64, weekend: Weekend) -> bool {
    let serial = floor_to_int(value);
    if let Weekend::Custom(mask) = weekend {
        let day = weekday_of_serial(serial, WeekdayConvention::MondayFirstZeroBased);
        return mask[day as usize];
    }
    let day = weekday_of_serial(serial, weekend.shifted_convention());
    if weekend.is_two_day() {
        day >= 6
    } else {
        day == 7
    }
}
