//! # Sun Window
//!
//! Solar position, day-window, and altitude-threshold calculations for sun
//! exposure displays.
//!
//! This library is the computation core behind a "Vitamin D window" tracker:
//! given a geographic coordinate and an instant it derives the sun's current
//! altitude/azimuth, the day's sunrise-to-sunset window, the projection of the
//! sun onto screen coordinates, a countdown to the instant the sun reaches a
//! configurable altitude threshold, and a two-state producing/not-producing
//! classification.
//!
//! ## Design
//!
//! - **Pure and caller-polled**: every function is a synchronous, pure
//!   function of its inputs. There is no I/O, no clock access, no location
//!   access, and no internal caching or shared state; the host supplies
//!   coordinates and the current time and owns all polling cadence.
//! - **Degrees everywhere**: the public surface speaks degrees only. Altitude
//!   is in [-90°, +90°] (0° = horizon) and azimuth is normalized to
//!   [0°, 360°) with 0° = North, increasing clockwise.
//! - **Explicit conditions, not sentinels**: polar day/night is a
//!   [`DayWindow`] variant and a threshold that is never reached is a
//!   [`ThresholdCrossing`] variant. Malformed inputs (coordinates, thresholds,
//!   screen dimensions) are rejected at the boundary with [`Error`], never
//!   clamped.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{DateTime, Utc};
//! use sun_window::{
//!     position, screen, threshold, GeoCoordinate, ProductionState, ScreenBounds,
//!     VITAMIN_D_THRESHOLD,
//! };
//!
//! let coordinate = GeoCoordinate::new(52.09, 5.12)?; // Utrecht
//! let now = "2026-06-21T11:40:00Z".parse::<DateTime<Utc>>().unwrap();
//!
//! // Current position and day window
//! let sun = position::solar_position(&now, coordinate)?;
//! let window = position::day_window(&now, coordinate)?;
//!
//! // Marker position for a 375x600 viewport
//! let bounds = ScreenBounds::new(375.0, 600.0)?;
//! if let Some(point) = screen::sun_point(&window, &now, sun.altitude(), bounds) {
//!     println!("marker at ({:.0}, {:.0})", point.x(), point.y());
//! }
//!
//! // Countdown to the Vitamin D window and the production state
//! let crossing = threshold::find_threshold_crossing(coordinate, &window, VITAMIN_D_THRESHOLD)?;
//! println!("{}", threshold::format_remaining(&crossing, &now));
//!
//! let state = ProductionState::default().update(sun.altitude(), VITAMIN_D_THRESHOLD);
//! println!("message key: {}", state.message_key());
//! # Ok::<(), sun_window::Error>(())
//! ```
//!
//! ## Polling model
//!
//! The host UI historically refreshed the position every 60 seconds and the
//! countdown every second. The intended pattern is to compute the
//! [`DayWindow`] and [`ThresholdCrossing`] once per day, keep them, and call
//! only [`threshold::format_remaining`] (a string render) on the fast tick.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::production::ProductionState;
pub use crate::screen::ScreenBounds;
pub use crate::threshold::VITAMIN_D_THRESHOLD;
pub use crate::types::{DayWindow, GeoCoordinate, ScreenPoint, SolarPosition, ThresholdCrossing};

// Core modules
pub mod error;
pub mod position;
pub mod production;
pub mod screen;
pub mod threshold;
pub mod types;

// Internal modules
mod math;
