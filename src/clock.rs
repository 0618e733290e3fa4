// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0>.
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Wall-clock rendering of minute-of-day values.

use core::fmt;

use crate::SunError;

/// Minutes in one day
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// A local wall-clock time with minute resolution, `00:00` to `23:59`
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub struct ClockTime {
    minute_of_day: u16,
}

impl ClockTime {
    /// Builds a clock time from a minute-of-day.
    ///
    /// Event minutes are not clamped by the engine, so a sunset after local
    /// midnight (e.g. with a mismatched UTC offset) yields 1440 or more. Such
    /// values return `Err(MinuteOutOfRange)` instead of wrapping.
    pub fn from_minute(minute_of_day: i32) -> Result<Self, SunError> {
        if (0..MINUTES_PER_DAY).contains(&minute_of_day) {
            Ok(Self {
                minute_of_day: minute_of_day as u16,
            })
        } else {
            Err(SunError::MinuteOutOfRange(minute_of_day))
        }
    }

    pub fn hour(&self) -> u8 {
        (self.minute_of_day / 60) as u8
    }

    pub fn minute(&self) -> u8 {
        (self.minute_of_day % 60) as u8
    }

    pub fn minute_of_day(&self) -> i32 {
        i32::from(self.minute_of_day)
    }
}

impl TryFrom<i32> for ClockTime {
    type Error = SunError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_minute(value)
    }
}

/// Zero-padded `HH:MM`
impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

#[cfg(any(feature = "chrono", test))]
impl From<ClockTime> for chrono::NaiveTime {
    fn from(value: ClockTime) -> Self {
        // always in range, from_minute guarantees hour < 24
        chrono::NaiveTime::from_num_seconds_from_midnight_opt(
            u32::from(value.minute_of_day) * 60,
            0,
        )
        .unwrap_or(chrono::NaiveTime::MIN)
    }
}
