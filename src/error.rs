//! Error types for sun-window calculations.

use crate::math::normalize_degrees_0_to_360;
use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during sun-window calculations.
///
/// All variants represent rejected inputs or numerical failures. Expected
/// astronomical conditions (polar day/night, threshold never reached) are not
/// errors; they are variants of [`crate::DayWindow`] and
/// [`crate::ThresholdCrossing`] that callers branch on explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid altitude threshold for the production-window search.
    InvalidThreshold {
        /// The invalid threshold value provided.
        value: f64,
    },
    /// Invalid screen dimension for projection calculations.
    InvalidScreenDimension {
        /// The invalid dimension value provided.
        value: f64,
    },
    /// Invalid date/time for the calculation.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
    /// Numerical computation error (e.g., non-finite intermediate value).
    ComputationError {
        /// Description of the computation error.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidThreshold { value } => {
                write!(
                    f,
                    "invalid altitude threshold {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidScreenDimension { value } => {
                write!(
                    f,
                    "invalid screen dimension {value} (must be finite and positive)"
                )
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
            Self::ComputationError { message } => {
                write!(f, "computation error: {message}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid threshold error.
    #[must_use]
    pub const fn invalid_threshold(value: f64) -> Self {
        Self::InvalidThreshold { value }
    }

    /// Creates an invalid screen dimension error.
    #[must_use]
    pub const fn invalid_screen_dimension(value: f64) -> Self {
        Self::InvalidScreenDimension { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates a computation error.
    #[must_use]
    pub const fn computation_error(message: &'static str) -> Self {
        Self::ComputationError { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// Out-of-range coordinates are rejected here, never silently clamped.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates an altitude threshold for the production-window search.
///
/// # Errors
/// Returns `InvalidThreshold` if the threshold is outside -90 to +90 degrees.
pub fn check_threshold(threshold: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&threshold) {
        return Err(Error::invalid_threshold(threshold));
    }
    Ok(())
}

/// Validates a screen dimension (width or height) in pixels.
///
/// # Errors
/// Returns `InvalidScreenDimension` if the dimension is not finite and positive.
pub fn check_screen_dimension(dimension: f64) -> Result<()> {
    if !dimension.is_finite() || dimension <= 0.0 {
        return Err(Error::invalid_screen_dimension(dimension));
    }
    Ok(())
}

/// Validates and normalizes an azimuth angle to the range [0, 360) degrees.
///
/// # Errors
/// Returns `ComputationError` if azimuth is not finite.
pub fn check_azimuth(azimuth: f64) -> Result<f64> {
    if !azimuth.is_finite() {
        return Err(Error::computation_error("azimuth is not finite"));
    }
    Ok(normalize_degrees_0_to_360(azimuth))
}

/// Validates an altitude angle to be within the range [-90, 90] degrees.
///
/// # Errors
/// Returns `ComputationError` if altitude is not finite or outside valid range.
pub fn check_altitude(altitude: f64) -> Result<f64> {
    if !altitude.is_finite() {
        return Err(Error::computation_error("altitude is not finite"));
    }
    if !(-90.0..=90.0).contains(&altitude) {
        return Err(Error::computation_error(
            "altitude must be between -90° and +90°",
        ));
    }
    Ok(altitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(52.0).is_ok());

        assert!(check_latitude(91.0).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(0.0).is_ok());
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());
        assert!(check_longitude(5.0).is_ok());

        assert!(check_longitude(181.0).is_err());
        assert!(check_longitude(-181.0).is_err());
        assert!(check_longitude(f64::NAN).is_err());
        assert!(check_longitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_threshold_validation() {
        assert!(check_threshold(45.0).is_ok());
        assert!(check_threshold(0.0).is_ok());
        assert!(check_threshold(-6.0).is_ok());
        assert!(check_threshold(90.0).is_ok());

        assert!(check_threshold(90.1).is_err());
        assert!(check_threshold(-90.1).is_err());
        assert!(check_threshold(f64::NAN).is_err());
    }

    #[test]
    fn test_screen_dimension_validation() {
        assert!(check_screen_dimension(375.0).is_ok());
        assert!(check_screen_dimension(1.0).is_ok());

        assert!(check_screen_dimension(0.0).is_err());
        assert!(check_screen_dimension(-100.0).is_err());
        assert!(check_screen_dimension(f64::NAN).is_err());
        assert!(check_screen_dimension(f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = Error::invalid_latitude(95.0);
        assert_eq!(
            err.to_string(),
            "invalid latitude 95° (must be between -90° and +90°)"
        );

        let err = Error::invalid_threshold(120.0);
        assert_eq!(
            err.to_string(),
            "invalid altitude threshold 120° (must be between -90° and +90°)"
        );

        let err = Error::computation_error("altitude is not finite");
        assert_eq!(err.to_string(), "computation error: altitude is not finite");
    }

    #[test]
    fn test_check_azimuth() {
        assert!(check_azimuth(0.0).is_ok());
        assert!(check_azimuth(180.0).is_ok());

        // Check normalization
        assert_eq!(check_azimuth(-90.0).unwrap(), 270.0);
        assert_eq!(check_azimuth(450.0).unwrap(), 90.0);

        assert!(check_azimuth(f64::NAN).is_err());
        assert!(check_azimuth(f64::INFINITY).is_err());
    }

    #[test]
    fn test_check_altitude() {
        assert!(check_altitude(0.0).is_ok());
        assert!(check_altitude(90.0).is_ok());
        assert!(check_altitude(-90.0).is_ok());

        assert!(check_altitude(90.5).is_err());
        assert!(check_altitude(-91.0).is_err());
        assert!(check_altitude(f64::NAN).is_err());
    }
}
