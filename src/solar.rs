// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0>.
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Solar geometry stages used by the sunrise/sunset engine.
//!
//! Every function is a pure function of its arguments. Angles are in degrees
//! unless stated otherwise; conversion to radians happens right before each
//! call into [`FloatOps`] and results are converted back immediately.
//!
//! Formulas follow the NOAA solar calculator, which in turn is based on
//! Jean Meeus, *Astronomical Algorithms*.

use crate::FloatOps;

/// Julian day starting at noon UTC on 1 January 2000
pub const JD2000: f64 = 2451545.0;

/// Days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36525.0;

/// Zenith angle of the sun's centre at apparent sunrise/sunset: 90 degrees plus
/// 50 arc-minutes for solar radius and standard refraction.
pub const SUNRISE_ZENITH: f64 = 90.833;

/// Converts a proleptic Gregorian calendar date to the Julian day at its
/// preceding midnight UTC.
///
/// The day-of-month is not checked against the length of the month: day 32 of
/// January is the same Julian day as 1 February.
pub fn julian_day<F: FloatOps>(year: i32, month: i32, day: i32) -> f64 {
    // f64 throughout, any i32 date maps to a finite day number
    let (year, month) = if month <= 2 {
        (f64::from(year) - 1.0, f64::from(month) + 12.0)
    } else {
        (f64::from(year), f64::from(month))
    };

    // floored, so the leap-year correction stays right for negative years
    let a = F::floor(year / 100.0);
    let b = 2.0 - a + F::floor(a / 4.0);

    F::floor(365.25 * (year + 4716.0)) + F::floor(30.6001 * (month + 1.0)) + f64::from(day) + b
        - 1524.5
}

/// Julian centuries elapsed since [`JD2000`]
pub fn century_fraction(jd: f64) -> f64 {
    (jd - JD2000) / DAYS_PER_CENTURY
}

/// Geometric mean longitude of the sun, normalized to [0, 360)
pub fn geom_mean_longitude(t: f64) -> f64 {
    let l0 = (280.46646 + t * (36000.76983 + t * 0.0003032)) % 360.0;
    if l0 < 0.0 {
        l0 + 360.0
    } else {
        l0
    }
}

/// Geometric mean anomaly of the sun, not normalized
pub fn geom_mean_anomaly(t: f64) -> f64 {
    357.52911 + t * (35999.05029 - 0.0001537 * t)
}

/// Eccentricity of earth's orbit (unitless)
pub fn eccentricity_earth_orbit(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + 0.0000001267 * t)
}

/// Equation of center of the sun
pub fn equation_of_center<F: FloatOps>(t: f64) -> f64 {
    let m = geom_mean_anomaly(t).to_radians();

    F::sin(m) * (1.914602 - t * (0.004817 + 0.000014 * t))
        + F::sin(2.0 * m) * (0.019993 - 0.000101 * t)
        + F::sin(3.0 * m) * 0.000289
}

/// True longitude of the sun
pub fn true_longitude<F: FloatOps>(t: f64) -> f64 {
    geom_mean_longitude(t) + equation_of_center::<F>(t)
}

/// Longitude of the ascending node of the moon's orbit, driving nutation
fn omega(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

/// Apparent longitude of the sun, corrected for nutation and aberration
pub fn apparent_longitude<F: FloatOps>(t: f64) -> f64 {
    true_longitude::<F>(t) - 0.00569 - 0.00478 * F::sin(omega(t).to_radians())
}

/// Mean obliquity of the ecliptic
///
/// The polynomial yields arc-seconds on top of 23°26'.
pub fn mean_obliquity_of_ecliptic(t: f64) -> f64 {
    let seconds = 21.448 - t * (46.8150 + t * (0.00059 - t * 0.001813));
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

/// Obliquity of the ecliptic corrected for nutation
pub fn obliquity_correction<F: FloatOps>(t: f64) -> f64 {
    mean_obliquity_of_ecliptic(t) + 0.00256 * F::cos(omega(t).to_radians())
}

/// Declination of the sun
pub fn declination<F: FloatOps>(t: f64) -> f64 {
    let epsilon = obliquity_correction::<F>(t).to_radians();
    let lambda = apparent_longitude::<F>(t).to_radians();

    F::asin(F::sin(epsilon) * F::sin(lambda)).to_degrees()
}

/// Equation of time in minutes: apparent solar time minus mean solar time.
///
/// Positive when a sundial runs ahead of the clock (early November),
/// negative when it lags (mid February).
pub fn equation_of_time<F: FloatOps>(t: f64) -> f64 {
    let epsilon = obliquity_correction::<F>(t).to_radians();
    let l0 = geom_mean_longitude(t).to_radians();
    let e = eccentricity_earth_orbit(t);
    let m = geom_mean_anomaly(t).to_radians();

    let y = F::tan(epsilon / 2.0);
    let y = y * y;

    let sin2l0 = F::sin(2.0 * l0);
    let cos2l0 = F::cos(2.0 * l0);
    let sin4l0 = F::sin(4.0 * l0);
    let sinm = F::sin(m);
    let sin2m = F::sin(2.0 * m);

    let e_time = y * sin2l0 - 2.0 * e * sinm + 4.0 * e * y * sinm * cos2l0
        - 0.5 * y * y * sin4l0
        - 1.25 * e * e * sin2m;

    // four minutes of time per degree of rotation
    e_time.to_degrees() * 4.0
}

/// Cosine of the sunrise hour angle, outside [-1, 1] when the sun never
/// crosses the horizon.
pub(crate) fn hour_angle_cosine<F: FloatOps>(lat: f64, declination: f64) -> f64 {
    let lat = lat.to_radians();
    let declination = declination.to_radians();

    F::cos(SUNRISE_ZENITH.to_radians()) / (F::cos(lat) * F::cos(declination))
        - F::tan(lat) * F::tan(declination)
}

/// Hour angle of sunrise in radians; negate it for sunset.
///
/// # Arguments
///
/// * `lat` - latitude in degrees
/// * `declination` - solar declination in degrees
///
/// Returns NaN during polar day or polar night, when the sun does not cross
/// the horizon at all.
pub fn hour_angle_sunrise<F: FloatOps>(lat: f64, declination: f64) -> f64 {
    F::acos(hour_angle_cosine::<F>(lat, declination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StdFloatOps;

    const EPS: f64 = 1e-9;

    fn t_2024_06_21() -> f64 {
        century_fraction(julian_day::<StdFloatOps>(2024, 6, 21))
    }

    #[test]
    fn test_julian_day() {
        assert_eq!(julian_day::<StdFloatOps>(2000, 1, 1), 2451544.5);
        assert_eq!(julian_day::<StdFloatOps>(2024, 6, 21), 2460482.5);
        // start of the Gregorian calendar
        assert_eq!(julian_day::<StdFloatOps>(1582, 10, 15), 2299160.5);
    }

    #[test]
    fn test_julian_day_leap_years() {
        let feb_span = |y| julian_day::<StdFloatOps>(y, 3, 1) - julian_day::<StdFloatOps>(y, 2, 28);
        assert_eq!(feb_span(2024), 2.0);
        assert_eq!(feb_span(2023), 1.0);
        assert_eq!(feb_span(1900), 1.0);
        assert_eq!(feb_span(1600), 2.0);
        assert_eq!(feb_span(0), 2.0);
        assert_eq!(feb_span(-1), 1.0);
    }

    #[test]
    fn test_julian_day_year_boundary() {
        assert_eq!(
            julian_day::<StdFloatOps>(2024, 1, 1) - julian_day::<StdFloatOps>(2023, 12, 31),
            1.0
        );
        assert_eq!(
            julian_day::<StdFloatOps>(1, 1, 1) - julian_day::<StdFloatOps>(0, 12, 31),
            1.0
        );
    }

    #[test]
    fn test_julian_day_day_overflow() {
        assert_eq!(
            julian_day::<StdFloatOps>(2023, 1, 32),
            julian_day::<StdFloatOps>(2023, 2, 1)
        );
    }

    #[test]
    fn test_julian_day_extreme_inputs() {
        for (y, m, d) in [
            (i32::MAX, 6, 1),
            (i32::MIN, 1, 1),
            (2024, i32::MAX, 1),
            (2024, i32::MIN, 1),
            (2024, 6, i32::MAX),
            (i32::MIN, i32::MIN, i32::MIN),
        ] {
            let jd = julian_day::<StdFloatOps>(y, m, d);
            assert!(jd.is_finite(), "{y}-{m}-{d}: {jd}");
        }
        assert!(julian_day::<StdFloatOps>(i32::MAX, 6, 1) > julian_day::<StdFloatOps>(2024, 6, 1));
    }

    #[test]
    fn test_century_fraction() {
        assert_eq!(century_fraction(JD2000), 0.0);
        assert_eq!(century_fraction(JD2000 + DAYS_PER_CENTURY), 1.0);
        assert!((t_2024_06_21() - 0.24469541409993156).abs() < EPS);
    }

    #[test]
    fn test_epoch_constants() {
        assert_eq!(geom_mean_longitude(0.0), 280.46646);
        assert_eq!(geom_mean_anomaly(0.0), 357.52911);
        assert_eq!(eccentricity_earth_orbit(0.0), 0.016708634);
        assert!((mean_obliquity_of_ecliptic(0.0) - 23.43929111111111).abs() < EPS);
    }

    #[test]
    fn test_geom_mean_longitude_normalized() {
        for i in -40..40 {
            let l0 = geom_mean_longitude(f64::from(i) * 0.05);
            assert!((0.0..360.0).contains(&l0), "{l0} out of range");
        }
        assert!((geom_mean_longitude(t_2024_06_21()) - 89.68975962252807).abs() < 1e-7);
    }

    #[test]
    fn test_geometry_at_june_solstice() {
        let t = t_2024_06_21();
        assert!((geom_mean_anomaly(t) - 9166.331618712893).abs() < 1e-7);
        assert!((eccentricity_earth_orbit(t) - 0.01669834015260783).abs() < EPS);
        assert!((equation_of_center::<StdFloatOps>(t) - 0.4431652705801028).abs() < 1e-7);
        assert!((apparent_longitude::<StdFloatOps>(t) - 90.12626019582478).abs() < 1e-7);
        assert!((mean_obliquity_of_ecliptic(t) - 23.436109048729183).abs() < EPS);
        assert!((obliquity_correction::<StdFloatOps>(t) - 23.43861526136845).abs() < EPS);
        assert!((declination::<StdFloatOps>(t) - 23.4385549487431).abs() < 1e-7);
    }

    #[test]
    fn test_equation_of_time() {
        let eot = |y, m, d| {
            equation_of_time::<StdFloatOps>(century_fraction(julian_day::<StdFloatOps>(y, m, d)))
        };
        assert!((eot(2024, 6, 21) - -1.8162165525671223).abs() < 1e-6);
        // yearly extremes
        assert!((eot(2024, 2, 11) - -14.225406090707319).abs() < 1e-6);
        assert!((eot(2024, 11, 3) - 16.490990692411604).abs() < 1e-6);
    }

    #[test]
    fn test_hour_angle_sunrise() {
        // equator at equinox: a quarter turn plus the horizon correction
        let ha = hour_angle_sunrise::<StdFloatOps>(0.0, 0.0);
        assert!((ha.to_degrees() - SUNRISE_ZENITH).abs() < EPS);

        let ha = hour_angle_sunrise::<StdFloatOps>(43.65, 23.4385549487431);
        assert!((ha - 2.0213606508338415).abs() < 1e-7);
    }

    #[test]
    fn test_hour_angle_sunrise_polar() {
        assert!(hour_angle_sunrise::<StdFloatOps>(78.22, 23.44).is_nan());
        assert!(hour_angle_sunrise::<StdFloatOps>(78.22, -23.44).is_nan());
        assert!(hour_angle_cosine::<StdFloatOps>(78.22, 23.44) < -1.0);
        assert!(hour_angle_cosine::<StdFloatOps>(78.22, -23.44) > 1.0);
    }
}
