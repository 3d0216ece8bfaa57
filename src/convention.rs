//! Weekday and week numbering conventions.
//!
//! Every convention carries a stable numeric tag, identical to the
//! return-type codes accepted by Excel's WEEKDAY and WEEKNUM functions.
//! The tags are the interchange format for host bindings; within the
//! crate the closed enums are the API, so the arithmetic itself can never
//! see an unknown convention.

use crate::error::ConventionError;

/// Numbering convention for [`serial_to_weekday`](crate::serial_to_weekday).
///
/// Tags 2 and 11 produce the same numbers; they are distinct conventions
/// for compatibility with the spreadsheet's own duplicated codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekdayConvention {
    /// Sunday=1 through Saturday=7 (tag 1, the spreadsheet default).
    #[default]
    SundayFirst,
    /// Monday=1 through Sunday=7 (tag 2).
    MondayFirst,
    /// Monday=0 through Sunday=6 (tag 3).
    MondayFirstZeroBased,
    /// Week starts Monday, Monday=1 (tag 11).
    StartMonday,
    /// Week starts Tuesday, Tuesday=1 (tag 12).
    StartTuesday,
    /// Week starts Wednesday, Wednesday=1 (tag 13).
    StartWednesday,
    /// Week starts Thursday, Thursday=1 (tag 14).
    StartThursday,
    /// Week starts Friday, Friday=1 (tag 15).
    StartFriday,
    /// Week starts Saturday, Saturday=1 (tag 16).
    StartSaturday,
    /// Week starts Sunday, Sunday=1 (tag 17).
    StartSunday,
}

impl WeekdayConvention {
    /// All ten conventions, in tag order.
    pub const ALL: [WeekdayConvention; 10] = [
        WeekdayConvention::SundayFirst,
        WeekdayConvention::MondayFirst,
        WeekdayConvention::MondayFirstZeroBased,
        WeekdayConvention::StartMonday,
        WeekdayConvention::StartTuesday,
        WeekdayConvention::StartWednesday,
        WeekdayConvention::StartThursday,
        WeekdayConvention::StartFriday,
        WeekdayConvention::StartSaturday,
        WeekdayConvention::StartSunday,
    ];

    /// Resolve a numeric tag.
    pub fn from_tag(tag: i64) -> Result<Self, ConventionError> {
        Ok(match tag {
            1 => WeekdayConvention::SundayFirst,
            2 => WeekdayConvention::MondayFirst,
            3 => WeekdayConvention::MondayFirstZeroBased,
            11 => WeekdayConvention::StartMonday,
            12 => WeekdayConvention::StartTuesday,
            13 => WeekdayConvention::StartWednesday,
            14 => WeekdayConvention::StartThursday,
            15 => WeekdayConvention::StartFriday,
            16 => WeekdayConvention::StartSaturday,
            17 => WeekdayConvention::StartSunday,
            _ => return Err(ConventionError::UnknownWeekdayTag { tag }),
        })
    }

    /// The stable numeric tag of this convention.
    pub fn tag(self) -> i64 {
        match self {
            WeekdayConvention::SundayFirst => 1,
            WeekdayConvention::MondayFirst => 2,
            WeekdayConvention::MondayFirstZeroBased => 3,
            WeekdayConvention::StartMonday => 11,
            WeekdayConvention::StartTuesday => 12,
            WeekdayConvention::StartWednesday => 13,
            WeekdayConvention::StartThursday => 14,
            WeekdayConvention::StartFriday => 15,
            WeekdayConvention::StartSaturday => 16,
            WeekdayConvention::StartSunday => 17,
        }
    }

    /// How far the Monday reference serial is shifted for this convention.
    ///
    /// Shifting the reference forward makes every weekday number smaller,
    /// which is how "week starts on day X" is expressed: the start day
    /// lands on number 1 (or 0 for the zero-based convention).
    pub(crate) fn reference_shift(self) -> i64 {
        match self {
            WeekdayConvention::SundayFirst => -1,
            WeekdayConvention::MondayFirst | WeekdayConvention::MondayFirstZeroBased => 0,
            WeekdayConvention::StartMonday => 0,
            WeekdayConvention::StartTuesday => 1,
            WeekdayConvention::StartWednesday => 2,
            WeekdayConvention::StartThursday => 3,
            WeekdayConvention::StartFriday => 4,
            WeekdayConvention::StartSaturday => 5,
            WeekdayConvention::StartSunday => 6,
        }
    }

    pub(crate) fn zero_based(self) -> bool {
        matches!(self, WeekdayConvention::MondayFirstZeroBased)
    }
}

/// Numbering convention for [`serial_to_week`](crate::serial_to_week).
///
/// The simple conventions number weeks from the week containing January 1;
/// [`Iso`](WeekConvention::Iso) numbers them from the week containing the
/// year's first Thursday (ISO 8601). The zero-based weekday convention
/// (tag 3) has no week counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekConvention {
    /// Weeks start on Sunday (tag 1, the spreadsheet default).
    #[default]
    SundayFirst,
    /// Weeks start on Monday (tag 2).
    MondayFirst,
    /// Weeks start on Monday (tag 11).
    StartMonday,
    /// Weeks start on Tuesday (tag 12).
    StartTuesday,
    /// Weeks start on Wednesday (tag 13).
    StartWednesday,
    /// Weeks start on Thursday (tag 14).
    StartThursday,
    /// Weeks start on Friday (tag 15).
    StartFriday,
    /// Weeks start on Saturday (tag 16).
    StartSaturday,
    /// Weeks start on Sunday (tag 17).
    StartSunday,
    /// ISO 8601 week numbering (tag 21).
    Iso,
}

impl WeekConvention {
    /// All ten conventions, in tag order.
    pub const ALL: [WeekConvention; 10] = [
        WeekConvention::SundayFirst,
        WeekConvention::MondayFirst,
        WeekConvention::StartMonday,
        WeekConvention::StartTuesday,
        WeekConvention::StartWednesday,
        WeekConvention::StartThursday,
        WeekConvention::StartFriday,
        WeekConvention::StartSaturday,
        WeekConvention::StartSunday,
        WeekConvention::Iso,
    ];

    /// Resolve a numeric tag.
    pub fn from_tag(tag: i64) -> Result<Self, ConventionError> {
        Ok(match tag {
            1 => WeekConvention::SundayFirst,
            2 => WeekConvention::MondayFirst,
            11 => WeekConvention::StartMonday,
            12 => WeekConvention::StartTuesday,
            13 => WeekConvention::StartWednesday,
            14 => WeekConvention::StartThursday,
            15 => WeekConvention::StartFriday,
            16 => WeekConvention::StartSaturday,
            17 => WeekConvention::StartSunday,
            21 => WeekConvention::Iso,
            _ => return Err(ConventionError::UnknownWeekTag { tag }),
        })
    }

    /// The stable numeric tag of this convention.
    pub fn tag(self) -> i64 {
        match self {
            WeekConvention::SundayFirst => 1,
            WeekConvention::MondayFirst => 2,
            WeekConvention::StartMonday => 11,
            WeekConvention::StartTuesday => 12,
            WeekConvention::StartWednesday => 13,
            WeekConvention::StartThursday => 14,
            WeekConvention::StartFriday => 15,
            WeekConvention::StartSaturday => 16,
            WeekConvention::StartSunday => 17,
            WeekConvention::Iso => 21,
        }
    }

    /// The weekday convention the simple family anchors on, or `None` for
    /// ISO numbering.
    pub(crate) fn weekday_equivalent(self) -> Option<WeekdayConvention> {
        Some(match self {
            WeekConvention::SundayFirst => WeekdayConvention::SundayFirst,
            WeekConvention::MondayFirst => WeekdayConvention::MondayFirst,
            WeekConvention::StartMonday => WeekdayConvention::StartMonday,
            WeekConvention::StartTuesday => WeekdayConvention::StartTuesday,
            WeekConvention::StartWednesday => WeekdayConvention::StartWednesday,
            WeekConvention::StartThursday => WeekdayConvention::StartThursday,
            WeekConvention::StartFriday => WeekdayConvention::StartFriday,
            WeekConvention::StartSaturday => WeekdayConvention::StartSaturday,
            WeekConvention::StartSunday => WeekdayConvention::StartSunday,
            WeekConvention::Iso => return None,
        })
    }
}
