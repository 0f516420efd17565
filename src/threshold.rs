//! Altitude-threshold search and countdown formatting.
//!
//! The threshold search is the "Vitamin D window" calculation: the first
//! instant of the day at which the sun's altitude reaches a configured
//! threshold. Solar altitude rises and falls once per ordinary day, so a
//! forward scan from sunrise stops at the first crossing without needing to
//! look past the daily peak.
//!
//! The search is deterministic and idempotent; callers cache one
//! [`ThresholdCrossing`] per day and only re-render the countdown string each
//! tick with [`format_remaining`].

use crate::error::check_threshold;
use crate::position::solar_position;
use crate::{DayWindow, GeoCoordinate, Result, ThresholdCrossing};
use chrono::{DateTime, Duration, TimeZone};
use core::fmt::Write;

/// Default altitude threshold in degrees above which the skin synthesizes
/// Vitamin D (UV-B reaches the ground at solar altitudes above roughly 45°).
pub const VITAMIN_D_THRESHOLD: f64 = 45.0;

/// Scan step of the threshold search, in minutes.
const SCAN_STEP_MINUTES: i64 = 1;

/// Finds the first instant in the day window at which the sun's altitude
/// reaches the threshold.
///
/// Scans forward from sunrise to sunset in 1-minute steps, evaluating
/// [`solar_position`] at each step, and stops at the first instant with
/// altitude ≥ threshold (the comparison is inclusive: exactly meeting the
/// threshold counts as a crossing). Distinguishes two no-crossing outcomes:
/// [`ThresholdCrossing::NoDaylight`] for degenerate (polar) windows, returned
/// without scanning, and [`ThresholdCrossing::NeverReached`] when the scan
/// completes with the sun below the threshold all day.
///
/// # Errors
/// Returns `InvalidThreshold` if the threshold is outside ±90°, or a
/// computation error from the underlying position calculation.
///
/// # Example
/// ```
/// use sun_window::{position, threshold, GeoCoordinate, ThresholdCrossing};
/// use chrono::{DateTime, Utc};
///
/// let coordinate = GeoCoordinate::new(52.09, 5.12).unwrap();
/// let noon = "2026-06-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let window = position::day_window(&noon, coordinate).unwrap();
///
/// let crossing =
///     threshold::find_threshold_crossing(coordinate, &window, threshold::VITAMIN_D_THRESHOLD)
///         .unwrap();
/// assert!(crossing.is_reached());
/// ```
pub fn find_threshold_crossing<Tz: TimeZone>(
    coordinate: GeoCoordinate,
    window: &DayWindow<DateTime<Tz>>,
    threshold_degrees: f64,
) -> Result<ThresholdCrossing<DateTime<Tz>>> {
    check_threshold(threshold_degrees)?;

    let DayWindow::Regular { sunrise, sunset } = window else {
        return Ok(ThresholdCrossing::NoDaylight);
    };

    let mut cursor = sunrise.clone();
    while cursor <= *sunset {
        let position = solar_position(&cursor, coordinate)?;
        if position.altitude() >= threshold_degrees {
            return Ok(ThresholdCrossing::Reached { instant: cursor });
        }
        cursor += Duration::minutes(SCAN_STEP_MINUTES);
    }

    Ok(ThresholdCrossing::NeverReached)
}

/// Formats the time remaining until a threshold crossing.
///
/// - No crossing today (`NeverReached` or `NoDaylight`): `"not reached
///   today"`. This is deliberately distinct from the elapsed sentinel; a day
///   on which the window never opens is not a window that has closed.
/// - Crossing at or before `now`: `"0 seconds"`.
/// - Otherwise `H hour(s) M minute(s) S second(s)`, omitting the hour
///   component under one hour and the minute component under one minute,
///   with singular/plural suffixes per component.
///
/// # Example
/// ```
/// use sun_window::{threshold, ThresholdCrossing};
/// use chrono::{DateTime, Duration, Utc};
///
/// let now = "2026-06-21T08:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let crossing = ThresholdCrossing::Reached { instant: now + Duration::seconds(3600) };
///
/// assert_eq!(
///     threshold::format_remaining(&crossing, &now),
///     "1 hour 0 minutes 0 seconds"
/// );
/// ```
#[must_use]
pub fn format_remaining<Tz: TimeZone>(
    crossing: &ThresholdCrossing<DateTime<Tz>>,
    now: &DateTime<Tz>,
) -> String {
    let Some(target) = crossing.instant() else {
        return "not reached today".to_string();
    };

    let total_seconds = target.clone().signed_duration_since(now.clone()).num_seconds();
    if total_seconds <= 0 {
        return "0 seconds".to_string();
    }

    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut formatted = String::new();
    if total_seconds >= 3600 {
        write_component(&mut formatted, hours, "hour");
    }
    if total_seconds >= 60 {
        write_component(&mut formatted, minutes, "minute");
    }
    write_component(&mut formatted, seconds, "second");
    formatted
}

fn write_component(out: &mut String, value: i64, unit: &str) {
    if !out.is_empty() {
        out.push(' ');
    }
    let suffix = if value == 1 { "" } else { "s" };
    // Writing to a String cannot fail
    let _ = write!(out, "{value} {unit}{suffix}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn reached_in(now: &DateTime<Utc>, seconds: i64) -> ThresholdCrossing<DateTime<Utc>> {
        ThresholdCrossing::Reached {
            instant: *now + Duration::seconds(seconds),
        }
    }

    #[test]
    fn test_format_exact_hour() {
        let now = "2026-06-21T08:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(
            format_remaining(&reached_in(&now, 3600), &now),
            "1 hour 0 minutes 0 seconds"
        );
    }

    #[test]
    fn test_format_exact_half_hour() {
        let now = "2026-06-21T08:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(
            format_remaining(&reached_in(&now, 1800), &now),
            "30 minutes 0 seconds"
        );
    }

    #[test]
    fn test_format_pluralization() {
        let now = "2026-06-21T08:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(
            format_remaining(&reached_in(&now, 2 * 3600 + 2 * 60 + 5), &now),
            "2 hours 2 minutes 5 seconds"
        );
        assert_eq!(
            format_remaining(&reached_in(&now, 3661), &now),
            "1 hour 1 minute 1 second"
        );
        assert_eq!(format_remaining(&reached_in(&now, 59), &now), "59 seconds");
        assert_eq!(format_remaining(&reached_in(&now, 1), &now), "1 second");
    }

    #[test]
    fn test_format_elapsed_sentinel() {
        let now = "2026-06-21T14:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(format_remaining(&reached_in(&now, 0), &now), "0 seconds");
        assert_eq!(format_remaining(&reached_in(&now, -600), &now), "0 seconds");
    }

    #[test]
    fn test_format_no_crossing_is_not_zero_seconds() {
        let now = "2026-12-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap();

        let never: ThresholdCrossing<DateTime<Utc>> = ThresholdCrossing::NeverReached;
        assert_eq!(format_remaining(&never, &now), "not reached today");

        let no_daylight: ThresholdCrossing<DateTime<Utc>> = ThresholdCrossing::NoDaylight;
        assert_eq!(format_remaining(&no_daylight, &now), "not reached today");
    }

    #[test]
    fn test_invalid_threshold_is_rejected() {
        let coordinate = GeoCoordinate::new(52.09, 5.12).unwrap();
        let window: DayWindow<DateTime<Utc>> = DayWindow::PolarNight;

        assert!(find_threshold_crossing(coordinate, &window, 95.0).is_err());
        assert!(find_threshold_crossing(coordinate, &window, f64::NAN).is_err());
    }

    #[test]
    fn test_degenerate_window_skips_scan() {
        let coordinate = GeoCoordinate::new(78.0, 15.0).unwrap();
        let window: DayWindow<DateTime<Utc>> = DayWindow::PolarNight;

        let crossing = find_threshold_crossing(coordinate, &window, VITAMIN_D_THRESHOLD).unwrap();
        assert_eq!(crossing, ThresholdCrossing::NoDaylight);
    }
}
