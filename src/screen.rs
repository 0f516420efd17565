//! Projection of solar angles onto normalized screen coordinates.
//!
//! One projection convention, applied consistently: the horizontal axis is
//! the time fraction of the sunrise-to-sunset window and the vertical axis is
//! the altitude fraction of [0°, 90°]. Degenerate windows (polar day/night)
//! are distinct [`DayWindow`] variants, so the horizontal projection never
//! divides by a zero-length interval; it reports `None` instead and the
//! caller decides how to render a day without a window.
//!
//! All outputs are clamped into the screen bounds; a sun below the horizon or
//! an instant outside the window pins the marker to the edge rather than
//! drifting off-screen.

use crate::error::check_screen_dimension;
use crate::{DayWindow, Result, ScreenPoint};
use chrono::{DateTime, TimeZone, Timelike};

/// Validated screen dimensions in device pixels.
///
/// # Example
/// ```
/// # use sun_window::ScreenBounds;
/// let bounds = ScreenBounds::new(375.0, 667.0).unwrap();
/// assert_eq!(bounds.width(), 375.0);
///
/// assert!(ScreenBounds::new(0.0, 667.0).is_err());
/// assert!(ScreenBounds::new(375.0, f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenBounds {
    /// Width in pixels
    width: f64,
    /// Height in pixels
    height: f64,
}

impl ScreenBounds {
    /// Creates screen bounds from a width and height in pixels.
    ///
    /// # Errors
    /// Returns `InvalidScreenDimension` if either dimension is not finite and positive.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        check_screen_dimension(width)?;
        check_screen_dimension(height)?;
        Ok(Self { width, height })
    }

    /// Gets the width in pixels.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Gets the height in pixels.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }
}

/// Projects an instant onto the horizontal axis of the day window.
///
/// Linear interpolation between sunrise (x = 0) and sunset (x = width),
/// clamped to [0, width]. Returns `None` for polar windows, which have no
/// sunrise/sunset pair to interpolate between.
#[must_use]
pub fn project_x<Tz: TimeZone>(
    window: &DayWindow<DateTime<Tz>>,
    instant: &DateTime<Tz>,
    bounds: ScreenBounds,
) -> Option<f64> {
    let DayWindow::Regular { sunrise, sunset } = window else {
        return None;
    };

    let day_length = sunset.clone().signed_duration_since(sunrise.clone());
    let elapsed = instant.clone().signed_duration_since(sunrise.clone());

    // Regular windows guarantee sunrise < sunset, but guard the division anyway
    let day_ms = day_length.num_milliseconds();
    if day_ms <= 0 {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let fraction = (elapsed.num_milliseconds() as f64 / day_ms as f64).clamp(0.0, 1.0);
    Some(bounds.width() * fraction)
}

/// Projects a solar altitude onto the vertical axis.
///
/// Linear map of [0°, 90°] onto [height, 0]: higher altitude means higher on
/// screen (smaller y). Altitudes outside [0°, 90°] clamp to the screen edges
/// rather than extrapolating.
///
/// # Example
/// ```
/// # use sun_window::{screen, ScreenBounds};
/// let bounds = ScreenBounds::new(375.0, 600.0).unwrap();
/// assert_eq!(screen::project_y(0.0, bounds), 600.0);
/// assert_eq!(screen::project_y(90.0, bounds), 0.0);
/// assert_eq!(screen::project_y(-12.0, bounds), 600.0); // below horizon clamps
/// ```
#[must_use]
pub fn project_y(altitude_degrees: f64, bounds: ScreenBounds) -> f64 {
    let clamped = if altitude_degrees.is_nan() {
        0.0
    } else {
        altitude_degrees.clamp(0.0, 90.0)
    };
    bounds.height() * (1.0 - clamped / 90.0)
}

/// Projects the sun marker position for an instant and altitude.
///
/// Combines [`project_x`] and [`project_y`]; `None` when the day window is
/// degenerate and there is no horizontal position to compute.
#[must_use]
pub fn sun_point<Tz: TimeZone>(
    window: &DayWindow<DateTime<Tz>>,
    instant: &DateTime<Tz>,
    altitude_degrees: f64,
    bounds: ScreenBounds,
) -> Option<ScreenPoint> {
    let x = project_x(window, instant, bounds)?;
    Some(ScreenPoint::new(x, project_y(altitude_degrees, bounds)))
}

/// Hour-of-day labels for the axis between sunrise and sunset.
///
/// Returns the hours from the sunrise hour to the sunset hour inclusive,
/// stepping by `step_hours` (the host UI ticks every 2 hours). Polar windows
/// yield no ticks. Hours are in the timezone of the window's instants.
#[must_use]
pub fn hour_ticks<Tz: TimeZone>(
    window: &DayWindow<DateTime<Tz>>,
    step_hours: core::num::NonZeroU32,
) -> Vec<u32> {
    let DayWindow::Regular { sunrise, sunset } = window else {
        return Vec::new();
    };

    let first = sunrise.hour();
    let last = sunset.hour();
    if first > last {
        // Window crosses local midnight; no single-day hour axis to draw
        return Vec::new();
    }

    (first..=last).step_by(step_hours.get() as usize).collect()
}
