use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Day of the week, in the order used for rotation offsets.
///
/// The discriminant is the index that `dayInRotation % 7` yields, so
/// SUNDAY is 0 and SATURDAY is 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL.get(index).copied().ok_or(Error::DayIndex(index))
    }

    /// Weekday a rotation offset falls on.
    pub fn of_rotation_day(day_in_rotation: u32) -> Self {
        Self::ALL[(day_in_rotation % 7) as usize]
    }

    /// Single letter shown on the toggle.
    pub fn title(self) -> char {
        match self {
            Weekday::Sunday | Weekday::Saturday => 'S',
            Weekday::Monday => 'M',
            Weekday::Tuesday | Weekday::Thursday => 'T',
            Weekday::Wednesday => 'W',
            Weekday::Friday => 'F',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "SUNDAY",
            Weekday::Monday => "MONDAY",
            Weekday::Tuesday => "TUESDAY",
            Weekday::Wednesday => "WEDNESDAY",
            Weekday::Thursday => "THURSDAY",
            Weekday::Friday => "FRIDAY",
            Weekday::Saturday => "SATURDAY",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownWeekday(s.to_string()))
    }
}
