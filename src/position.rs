//! Solar position and day-window calculations.
//!
//! The position algorithm follows Grena, 'Five new algorithms for the
//! computation of sun position from 2010 to 2110', Solar Energy 86 (2012)
//! pp. 1323-1337 (algorithm no. 3, maximum error 0.01° within that range).
//! The day window uses the NOAA declination / equation-of-time formulation.
//!
//! Both functions are pure in (coordinate, instant): no hidden state and no
//! caching. Callers decide the polling cadence and own any per-day caching of
//! the window.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::math::{degrees_to_radians, normalize_degrees_0_to_360, radians_to_degrees};
use crate::{DayWindow, Error, GeoCoordinate, Result, SolarPosition};
use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc};
use core::f64::consts::PI;

/// ΔT in seconds (difference between TT and UT1), fixed at a contemporary
/// value. The resulting position error is far below the 1-minute granularity
/// of the threshold scan.
const DELTA_T_SECONDS: f64 = 69.0;

/// Sun elevation at sunrise/sunset in degrees, accounting for atmospheric
/// refraction and the sun's apparent radius.
const SUNRISE_SUNSET_ELEVATION: f64 = -0.83337;

/// Calculate the sun's altitude and azimuth for a coordinate and instant.
///
/// Angles are returned in degrees: altitude in [-90°, +90°] (0° = horizon),
/// azimuth normalized to [0°, 360°) with 0° = North, increasing clockwise.
/// Radian intermediates never appear in the result.
///
/// # Errors
/// Returns `ComputationError` if the computed angles are not finite.
///
/// # Example
/// ```
/// use sun_window::{position, GeoCoordinate};
/// use chrono::{DateTime, FixedOffset};
///
/// let coordinate = GeoCoordinate::new(52.09, 5.12).unwrap();
/// let datetime = "2026-06-21T13:40:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let position = position::solar_position(&datetime, coordinate).unwrap();
///
/// assert!(position.altitude() > 55.0); // near local solar noon at midsummer
/// ```
pub fn solar_position<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    coordinate: GeoCoordinate,
) -> Result<SolarPosition> {
    // Days since 2000-01-01 12:00:00 TT
    let t = days_since_epoch(datetime);
    let t_e = t + 1.1574e-5 * DELTA_T_SECONDS;
    let omega_at_e = 0.0172019715 * t_e;

    // Apparent ecliptic longitude of the sun (lambda)
    let lambda = -1.388803
        + 1.720279216e-2 * t_e
        + 3.3366e-2 * (omega_at_e - 0.06172).sin()
        + 3.53e-4 * (2.0 * omega_at_e - 0.1163).sin();

    // Obliquity of the ecliptic (epsilon)
    let epsilon = 4.089567e-1 - 6.19e-9 * t_e;

    let s_lambda = lambda.sin();
    let c_lambda = lambda.cos();
    let s_epsilon = epsilon.sin();
    let c_epsilon = (1.0 - s_epsilon * s_epsilon).sqrt();

    // Right ascension (alpha), shifted into [0, 2*pi)
    let mut alpha = (s_lambda * c_epsilon).atan2(c_lambda);
    if alpha < 0.0 {
        alpha += 2.0 * PI;
    }

    // Declination (delta)
    let delta = (s_lambda * s_epsilon).asin();

    // Hour angle (h), wrapped into [-pi, pi)
    let mut h = 1.7528311 + 6.300388099 * t + degrees_to_radians(coordinate.longitude()) - alpha;
    h = ((h + PI) % (2.0 * PI)) - PI;
    if h < -PI {
        h += 2.0 * PI;
    }

    // Topocentric altitude and azimuth
    let s_phi = degrees_to_radians(coordinate.latitude()).sin();
    let c_phi = (1.0 - s_phi * s_phi).sqrt();
    let s_delta = delta.sin();
    let c_delta = (1.0 - s_delta * s_delta).sqrt();
    let s_h = h.sin();
    let c_h = h.cos();

    let s_elevation = s_phi * s_delta + c_phi * c_delta * c_h;
    let elevation = s_elevation.asin() - 4.26e-5 * (1.0 - s_elevation * s_elevation).sqrt();
    let gamma = s_h.atan2(c_h * s_phi - s_delta * c_phi / c_delta);

    let altitude = radians_to_degrees(elevation);
    let azimuth = normalize_degrees_0_to_360(radians_to_degrees(gamma + PI));

    SolarPosition::new(altitude, azimuth)
}

/// Calculate the sunrise-to-sunset window for the UTC calendar day of the
/// given instant.
///
/// The returned times carry the same timezone as the input. At latitudes where
/// the sun never crosses the horizon that day, the result is an explicit
/// [`DayWindow::PolarDay`] or [`DayWindow::PolarNight`] variant, never an
/// invalid instant. A `Regular` window always satisfies sunrise < sunset.
///
/// # Errors
/// Returns `InvalidDateTime` if the calendar day cannot be represented.
///
/// # Example
/// ```
/// use sun_window::{position, DayWindow, GeoCoordinate};
/// use chrono::{DateTime, Utc};
///
/// let coordinate = GeoCoordinate::new(52.09, 5.12).unwrap();
/// let datetime = "2026-06-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
///
/// match position::day_window(&datetime, coordinate).unwrap() {
///     DayWindow::Regular { sunrise, sunset } => assert!(sunrise < sunset),
///     _ => panic!("midsummer in the Netherlands is a regular day"),
/// }
/// ```
pub fn day_window<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    coordinate: GeoCoordinate,
) -> Result<DayWindow<DateTime<Tz>>> {
    let utc = datetime.with_timezone(&Utc);
    let date = utc.date_naive();

    // Fractional year in radians, from the day of year
    let gamma = 2.0 * PI / 365.0 * f64::from(date.ordinal() - 1);

    // Equation of time in minutes and solar declination in radians (NOAA)
    let equation_of_time = 229.18
        * (0.000075 + 0.001868 * gamma.cos()
            - 0.032077 * gamma.sin()
            - 0.014615 * (2.0 * gamma).cos()
            - 0.040849 * (2.0 * gamma).sin());
    let declination = 0.006918 - 0.399912 * gamma.cos() + 0.070257 * gamma.sin()
        - 0.006758 * (2.0 * gamma).cos()
        + 0.000907 * (2.0 * gamma).sin()
        - 0.002697 * (3.0 * gamma).cos()
        + 0.00148 * (3.0 * gamma).sin();

    // Hour angle of the sunrise/sunset elevation
    let zenith = degrees_to_radians(90.0 - SUNRISE_SUNSET_ELEVATION);
    let latitude = degrees_to_radians(coordinate.latitude());
    let cos_hour_angle = zenith.cos() / (latitude.cos() * declination.cos())
        - latitude.tan() * declination.tan();

    if cos_hour_angle >= 1.0 {
        return Ok(DayWindow::PolarNight);
    }
    if cos_hour_angle <= -1.0 {
        return Ok(DayWindow::PolarDay);
    }

    let hour_angle = radians_to_degrees(cos_hour_angle.acos());

    // Minutes past midnight UTC; 4 minutes per degree
    let solar_noon = 720.0 - 4.0 * coordinate.longitude() - equation_of_time;
    let sunrise_minutes = solar_noon - 4.0 * hour_angle;
    let sunset_minutes = solar_noon + 4.0 * hour_angle;

    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| Error::invalid_datetime("calendar day has no midnight"))?
        .and_utc();

    let sunrise = midnight + Duration::seconds((sunrise_minutes * 60.0).round() as i64);
    let sunset = midnight + Duration::seconds((sunset_minutes * 60.0).round() as i64);

    Ok(DayWindow::Regular {
        sunrise: sunrise.with_timezone(&datetime.timezone()),
        sunset: sunset.with_timezone(&datetime.timezone()),
    })
}

/// Days since 2000-01-01 12:00:00 TT, per the Grena time parameter.
fn days_since_epoch<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    let utc = datetime.with_timezone(&Utc);
    let mut m = i32::try_from(utc.month()).expect("month should fit in i32");
    let mut y = utc.year();
    let d = i32::try_from(utc.day()).expect("day should fit in i32");
    let h = f64::from(utc.hour()) + f64::from(utc.minute()) / 60.0 + f64::from(utc.second()) / 3600.0;

    if m <= 2 {
        m += 12;
        y -= 1;
    }

    f64::from((365.25 * f64::from(y - 2000)) as i32)
        + f64::from((30.6001 * f64::from(m + 1)) as i32)
        - f64::from((0.01 * f64::from(y)) as i32)
        + f64::from(d)
        + 0.0416667 * h
        - 21958.0
}
