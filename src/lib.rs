// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0>.
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Sunrise and sunset as local minute-of-day
//!
//! A compact astronomical approximation meant for embedded hosts that switch
//! a relay or drive a display at dawn and dusk: no almanac, no network, no
//! timezone database. The caller supplies a fixed UTC offset and says whether
//! daylight-saving time applies on the date in question.
//!
//! The library supports `std` and `no_std` build targets. The following
//! example uses the built-in implementation `StdFloatOps` for `std` build targets.
//!
//! ```rust
//! use duskdawn::{Location, SolarEvent, StdFloatOps};
//!
//! // Toronto, UTC-5, daylight-saving time in effect
//! let toronto = Location::new(43.65, -79.38, -5);
//!
//! let sunrise = toronto.sunrise_minute::<StdFloatOps>(2024, 6, 21, true);
//! assert_eq!(sunrise, SolarEvent::Occurs(336));
//! assert_eq!(sunrise.clock_time().unwrap().to_string(), "05:36");
//!
//! // Longyearbyen, midnight sun
//! let svalbard = Location::new(78.22, 15.65, 1);
//! let sunset = svalbard.sunset_minute::<StdFloatOps>(2024, 6, 21, false);
//! assert_eq!(sunset, SolarEvent::PolarDay);
//! ```
//!
//! All arithmetic is done in `f64`. Results agree with published almanac
//! tables to within a minute or two between the polar circles.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod clock;
pub mod solar;

pub use clock::{ClockTime, MINUTES_PER_DAY};

use solar::{
    century_fraction, declination, equation_of_time, hour_angle_cosine, hour_angle_sunrise,
    julian_day,
};

/// platform specific floating operations
///
/// For `std` targets, you can use the provided [`StdFloatOps`]
pub trait FloatOps {
    fn sin(x: f64) -> f64;
    fn cos(x: f64) -> f64;
    fn tan(x: f64) -> f64;

    fn asin(x: f64) -> f64;
    fn acos(x: f64) -> f64;

    fn floor(x: f64) -> f64;
    fn round(x: f64) -> f64;
}

/// FloatOps for the std environment, mapping directly onto f64 operations
#[cfg(any(feature = "std", test))]
pub enum StdFloatOps {}
#[cfg(any(feature = "std", test))]
impl FloatOps for StdFloatOps {
    fn sin(x: f64) -> f64 {
        x.sin()
    }
    fn cos(x: f64) -> f64 {
        x.cos()
    }
    fn tan(x: f64) -> f64 {
        x.tan()
    }
    fn asin(x: f64) -> f64 {
        x.asin()
    }
    fn acos(x: f64) -> f64 {
        x.acos()
    }
    fn floor(x: f64) -> f64 {
        x.floor()
    }
    fn round(x: f64) -> f64 {
        x.round()
    }
}

/// Outcome of a sunrise or sunset query
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    /// The event happens at this local minute-of-day.
    ///
    /// Usually within 0..1440, but not clamped: a UTC offset far from the
    /// longitude's natural zone can push it past either end of the day.
    /// Minutes beyond the `i32` range, from absurd offsets or longitudes on an
    /// unchecked [`Location`], saturate at `i32::MIN` / `i32::MAX`.
    Occurs(i32),
    /// The sun stays above the horizon for the whole day. This occurs only
    /// inside the polar circles.
    PolarDay,
    /// The sun stays below the horizon for the whole day. This occurs only
    /// inside the polar circles.
    PolarNight,
}

impl SolarEvent {
    /// The local minute-of-day, or `None` during polar day or night
    pub fn minute(&self) -> Option<i32> {
        match *self {
            SolarEvent::Occurs(minute) => Some(minute),
            SolarEvent::PolarDay | SolarEvent::PolarNight => None,
        }
    }

    /// The event as a wall-clock time, `None` for polar conditions and for
    /// minutes falling outside the local day
    pub fn clock_time(&self) -> Option<ClockTime> {
        self.minute().and_then(|m| ClockTime::from_minute(m).ok())
    }

    pub fn is_polar(&self) -> bool {
        self.minute().is_none()
    }
}

/// The error conditions
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(any(feature = "std", test), derive(thiserror::Error))]
pub enum SunError {
    #[cfg_attr(
        any(feature = "std", test),
        error("Latitude or longitude are not within valid ranges.")
    )]
    BadParam,
    #[cfg_attr(
        any(feature = "std", test),
        error("UTC offset {0} is not within -12..=14 hours.")
    )]
    BadTimezone(i32),
    #[cfg_attr(
        any(feature = "std", test),
        error("Minute {0} is not within a day (0..1440).")
    )]
    MinuteOutOfRange(i32),
}

/// Displaying SunError, enabling error message on console
#[cfg(not(any(feature = "std", test)))]
impl core::fmt::Display for SunError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            SunError::BadParam => write!(f, "Latitude or longitude are not within valid ranges."),
            SunError::BadTimezone(tz) => write!(f, "UTC offset {} is not within -12..=14 hours.", tz),
            SunError::MinuteOutOfRange(m) => {
                write!(f, "Minute {} is not within a day (0..1440).", m)
            }
        }
    }
}

/// A fixed observer: geographic position plus standard-time UTC offset
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Location {
    latitude: f64,
    longitude: f64,
    timezone: i32,
}

impl Location {
    /// Creates a location without any range checks.
    ///
    /// # Arguments
    ///
    /// * `latitude` - degrees, north positive
    /// * `longitude` - degrees, east positive
    /// * `timezone` - standard-time UTC offset in whole hours, e.g. `-5` for New York
    ///
    /// Out-of-range coordinates are accepted and give well-defined but
    /// meaningless results. A NaN latitude or longitude reports every event
    /// as [`SolarEvent::PolarNight`]. Use [`Location::try_new`] to reject both.
    pub const fn new(latitude: f64, longitude: f64, timezone: i32) -> Self {
        Self {
            latitude,
            longitude,
            timezone,
        }
    }

    /// Creates a location, rejecting latitudes outside -90.0..=90.0,
    /// longitudes outside -180.0..=180.0 (including NaN) with
    /// `Err(BadParam)`, and UTC offsets outside -12..=14 with `Err(BadTimezone)`.
    pub fn try_new(latitude: f64, longitude: f64, timezone: i32) -> Result<Self, SunError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(SunError::BadParam);
        }
        if !(-12..=14).contains(&timezone) {
            return Err(SunError::BadTimezone(timezone));
        }
        Ok(Self::new(latitude, longitude, timezone))
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn timezone(&self) -> i32 {
        self.timezone
    }

    /// Local sunrise on the given Gregorian date.
    ///
    /// `month` is 1..=12 and `day` 1..=31; neither is validated. `is_dst` adds
    /// one hour to the configured UTC offset.
    pub fn sunrise_minute<F: FloatOps>(
        &self,
        year: i32,
        month: i32,
        day: i32,
        is_dst: bool,
    ) -> SolarEvent {
        self.sunrise_set::<F>(true, year, month, day, is_dst)
    }

    /// Local sunset on the given Gregorian date, see [`Location::sunrise_minute`]
    pub fn sunset_minute<F: FloatOps>(
        &self,
        year: i32,
        month: i32,
        day: i32,
        is_dst: bool,
    ) -> SolarEvent {
        self.sunrise_set::<F>(false, year, month, day, is_dst)
    }

    /// Sunrise and sunset on the same date
    pub fn sunrise_and_set<F: FloatOps>(
        &self,
        year: i32,
        month: i32,
        day: i32,
        is_dst: bool,
    ) -> (SolarEvent, SolarEvent) {
        (
            self.sunrise_minute::<F>(year, month, day, is_dst),
            self.sunset_minute::<F>(year, month, day, is_dst),
        )
    }

    /// Local sunrise on `date`
    #[cfg(any(feature = "chrono", test))]
    pub fn sunrise_on<F: FloatOps>(&self, date: chrono::NaiveDate, is_dst: bool) -> SolarEvent {
        use chrono::Datelike;
        self.sunrise_minute::<F>(date.year(), date.month() as i32, date.day() as i32, is_dst)
    }

    /// Local sunset on `date`
    #[cfg(any(feature = "chrono", test))]
    pub fn sunset_on<F: FloatOps>(&self, date: chrono::NaiveDate, is_dst: bool) -> SolarEvent {
        use chrono::Datelike;
        self.sunset_minute::<F>(date.year(), date.month() as i32, date.day() as i32, is_dst)
    }

    fn sunrise_set<F: FloatOps>(
        &self,
        is_rise: bool,
        year: i32,
        month: i32,
        day: i32,
        is_dst: bool,
    ) -> SolarEvent {
        match self.refined_utc::<F>(is_rise, julian_day::<F>(year, month, day)) {
            Ok(time_utc) => {
                let dst = if is_dst { 60.0 } else { 0.0 };
                let time_local = time_utc + f64::from(self.timezone) * 60.0 + dst;
                SolarEvent::Occurs(F::round(time_local) as i32)
            }
            Err(polar) => {
                log::debug!(
                    "no {} at {}/{} on {}-{:02}-{:02}: {:?}",
                    if is_rise { "sunrise" } else { "sunset" },
                    self.latitude,
                    self.longitude,
                    year,
                    month,
                    day,
                    polar
                );
                polar
            }
        }
    }

    /// Two passes: the first estimates the event for midnight UTC, the second
    /// recomputes the sun's position at that estimated instant.
    fn refined_utc<F: FloatOps>(&self, is_rise: bool, jd: f64) -> Result<f64, SolarEvent> {
        let coarse = self.event_utc::<F>(is_rise, jd)?;
        let refined_jd = jd + coarse / f64::from(MINUTES_PER_DAY);
        self.event_utc::<F>(is_rise, refined_jd)
    }

    /// UTC minute of the event with the sun's position taken at `jd`
    fn event_utc<F: FloatOps>(&self, is_rise: bool, jd: f64) -> Result<f64, SolarEvent> {
        let t = century_fraction(jd);
        let eq_time = equation_of_time::<F>(t);
        let solar_dec = declination::<F>(t);

        let hour_angle = hour_angle_sunrise::<F>(self.latitude, solar_dec);
        if hour_angle.is_nan() {
            // also reached for NaN coordinates, which report as polar night
            return Err(if hour_angle_cosine::<F>(self.latitude, solar_dec) < -1.0 {
                SolarEvent::PolarDay
            } else {
                SolarEvent::PolarNight
            });
        }

        let hour_angle = if is_rise { hour_angle } else { -hour_angle };
        let delta = self.longitude + hour_angle.to_degrees();
        let time_utc = 720.0 - 4.0 * delta - eq_time;
        log::trace!("jd {jd}: t {t}, declination {solar_dec}, utc minute {time_utc}");
        Ok(time_utc)
    }
}
