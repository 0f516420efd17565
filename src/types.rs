//! Core data types for sun-window calculations.

use crate::error::{check_altitude, check_azimuth, check_coordinates};
use crate::Result;

/// A geographic coordinate pair in decimal degrees.
///
/// Validated at construction: latitude must be within ±90°, longitude within
/// ±180°. All calculation entry points take a `GeoCoordinate`, so out-of-range
/// values are rejected once at the boundary and the math below stays total.
///
/// # Example
/// ```
/// # use sun_window::GeoCoordinate;
/// let utrecht = GeoCoordinate::new(52.09, 5.12).unwrap();
/// assert_eq!(utrecht.latitude(), 52.09);
///
/// assert!(GeoCoordinate::new(95.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    /// Latitude in degrees, positive north
    latitude: f64,
    /// Longitude in degrees, positive east
    longitude: f64,
}

impl GeoCoordinate {
    /// Creates a new coordinate from latitude and longitude in degrees.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Gets the latitude in degrees (-90 to +90, positive north).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees (-180 to +180, positive east).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Solar position in horizontal coordinates, degrees only.
///
/// - Altitude: 0° = horizon, 90° = zenith, negative below the horizon
/// - Azimuth: 0° = North, measured clockwise, normalized to [0°, 360°)
///
/// The public contract is degrees everywhere; radian intermediates never leak
/// out of the position algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Altitude angle in degrees (-90 to +90)
    altitude: f64,
    /// Azimuth angle in degrees (0 to 360, 0° = North, increasing clockwise)
    azimuth: f64,
}

impl SolarPosition {
    /// Creates a new solar position from altitude and azimuth in degrees.
    ///
    /// The azimuth is normalized into [0°, 360°).
    ///
    /// # Errors
    /// Returns error if the altitude is outside ±90° or either angle is not finite.
    ///
    /// # Example
    /// ```
    /// # use sun_window::SolarPosition;
    /// let position = SolarPosition::new(45.0, -90.0).unwrap();
    /// assert_eq!(position.altitude(), 45.0);
    /// assert_eq!(position.azimuth(), 270.0);
    /// ```
    pub fn new(altitude: f64, azimuth: f64) -> Result<Self> {
        let validated_altitude = check_altitude(altitude)?;
        let normalized_azimuth = check_azimuth(azimuth)?;

        Ok(Self {
            altitude: validated_altitude,
            azimuth: normalized_azimuth,
        })
    }

    /// Gets the altitude angle in degrees (-90 to +90, 0° = horizon).
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Gets the azimuth angle in degrees (0 to 360, 0° = North, increasing clockwise).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Checks if the sun is above the horizon (altitude > 0°).
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.altitude > 0.0
    }
}

/// The sunrise-to-sunset interval for a coordinate on a given calendar day.
///
/// At extreme latitudes there may be no sunrise/sunset at all; those days are
/// explicit variants rather than sentinel instants, so callers must branch on
/// them and can never feed an invalid time into downstream math.
///
/// Invariant: a `Regular` window always satisfies sunrise < sunset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayWindow<T> {
    /// Regular day with distinct sunrise and sunset times
    Regular {
        /// Time of sunrise
        sunrise: T,
        /// Time of sunset
        sunset: T,
    },
    /// Polar day - the sun remains above the horizon all day
    PolarDay,
    /// Polar night - the sun remains below the horizon all day
    PolarNight,
}

impl<T> DayWindow<T> {
    /// Checks if this is a regular day with sunrise and sunset.
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::Regular { .. })
    }

    /// Checks if this is a polar day (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::PolarDay)
    }

    /// Checks if this is a polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::PolarNight)
    }

    /// Gets the sunrise time if this is a regular day.
    pub const fn sunrise(&self) -> Option<&T> {
        if let Self::Regular { sunrise, .. } = self {
            Some(sunrise)
        } else {
            None
        }
    }

    /// Gets the sunset time if this is a regular day.
    pub const fn sunset(&self) -> Option<&T> {
        if let Self::Regular { sunset, .. } = self {
            Some(sunset)
        } else {
            None
        }
    }
}

/// Result of searching a day window for the first altitude-threshold crossing.
///
/// Distinguishes "there was no daylight window to search" from "the scan
/// completed but the sun stayed below the threshold all day"; the two call
/// for different messaging and must never be conflated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThresholdCrossing<T> {
    /// The sun reaches the threshold altitude at this instant.
    Reached {
        /// First scanned instant at or above the threshold
        instant: T,
    },
    /// The scan completed without the altitude reaching the threshold.
    NeverReached,
    /// The day window was degenerate (polar day or night); nothing was scanned.
    NoDaylight,
}

impl<T> ThresholdCrossing<T> {
    /// Checks if the threshold is reached during the day window.
    pub const fn is_reached(&self) -> bool {
        matches!(self, Self::Reached { .. })
    }

    /// Gets the crossing instant if the threshold is reached.
    pub const fn instant(&self) -> Option<&T> {
        if let Self::Reached { instant } = self {
            Some(instant)
        } else {
            None
        }
    }
}

/// A projected marker position in device pixel space.
///
/// Derived and transient; recomputed each render tick by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// Horizontal position in pixels, 0 at the left edge
    x: f64,
    /// Vertical position in pixels, 0 at the top edge
    y: f64,
}

impl ScreenPoint {
    /// Creates a screen point from pixel coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Gets the horizontal position in pixels.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Gets the vertical position in pixels.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_creation() {
        let coord = GeoCoordinate::new(52.0, 5.0).unwrap();
        assert_eq!(coord.latitude(), 52.0);
        assert_eq!(coord.longitude(), 5.0);

        assert!(GeoCoordinate::new(90.0, 180.0).is_ok());
        assert!(GeoCoordinate::new(-90.0, -180.0).is_ok());

        assert!(GeoCoordinate::new(90.5, 0.0).is_err());
        assert!(GeoCoordinate::new(0.0, -180.5).is_err());
        assert!(GeoCoordinate::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_solar_position_creation() {
        let pos = SolarPosition::new(45.0, 180.0).unwrap();
        assert_eq!(pos.altitude(), 45.0);
        assert_eq!(pos.azimuth(), 180.0);
        assert!(pos.is_sun_up());

        // Azimuth normalization
        let pos = SolarPosition::new(0.0, -90.0).unwrap();
        assert_eq!(pos.azimuth(), 270.0);
        assert!(!pos.is_sun_up());

        // Validation
        assert!(SolarPosition::new(91.0, 0.0).is_err());
        assert!(SolarPosition::new(-90.5, 0.0).is_err());
        assert!(SolarPosition::new(f64::NAN, 0.0).is_err());
        assert!(SolarPosition::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_day_window_regular() {
        use chrono::{DateTime, Utc};

        let sunrise = "2026-06-21T03:20:00Z".parse::<DateTime<Utc>>().unwrap();
        let sunset = "2026-06-21T20:03:00Z".parse::<DateTime<Utc>>().unwrap();

        let window = DayWindow::Regular { sunrise, sunset };

        assert!(window.is_regular_day());
        assert!(!window.is_polar_day());
        assert!(!window.is_polar_night());
        assert_eq!(window.sunrise(), Some(&sunrise));
        assert_eq!(window.sunset(), Some(&sunset));
    }

    #[test]
    fn test_day_window_polar() {
        let polar_day: DayWindow<i64> = DayWindow::PolarDay;
        assert!(polar_day.is_polar_day());
        assert!(polar_day.sunrise().is_none());
        assert!(polar_day.sunset().is_none());

        let polar_night: DayWindow<i64> = DayWindow::PolarNight;
        assert!(polar_night.is_polar_night());
        assert!(!polar_night.is_regular_day());
    }

    #[test]
    fn test_threshold_crossing_accessors() {
        let reached = ThresholdCrossing::Reached { instant: 42_i64 };
        assert!(reached.is_reached());
        assert_eq!(reached.instant(), Some(&42));

        let never: ThresholdCrossing<i64> = ThresholdCrossing::NeverReached;
        assert!(!never.is_reached());
        assert!(never.instant().is_none());

        let no_daylight: ThresholdCrossing<i64> = ThresholdCrossing::NoDaylight;
        assert!(!no_daylight.is_reached());
        assert!(no_daylight.instant().is_none());

        assert_ne!(never, no_daylight);
    }

    #[test]
    fn test_screen_point() {
        let point = ScreenPoint::new(120.5, 300.0);
        assert_eq!(point.x(), 120.5);
        assert_eq!(point.y(), 300.0);
    }
}
