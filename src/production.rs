//! Vitamin D production state, driven by the altitude threshold.
//!
//! A two-state machine re-evaluated on every update tick with a strict,
//! inclusive threshold comparison and no hysteresis band. When the altitude
//! hovers at the threshold the state may toggle on consecutive ticks; for
//! this domain that is a documented characteristic, not a bug.

/// Whether the sun is currently high enough for Vitamin D production.
///
/// Starts at [`NotProducing`](Self::NotProducing) and toggles as the altitude
/// crosses the threshold in either direction.
///
/// # Example
/// ```
/// # use sun_window::{ProductionState, VITAMIN_D_THRESHOLD};
/// let state = ProductionState::default();
/// assert!(!state.is_producing());
///
/// let state = state.update(61.3, VITAMIN_D_THRESHOLD);
/// assert!(state.is_producing());
///
/// // The boundary is inclusive on the producing side
/// let state = state.update(45.0, VITAMIN_D_THRESHOLD);
/// assert!(state.is_producing());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProductionState {
    /// The sun is below the threshold altitude.
    #[default]
    NotProducing,
    /// The sun is at or above the threshold altitude.
    Producing,
}

impl ProductionState {
    /// Re-evaluates the state for the current altitude.
    ///
    /// Altitude at or above the threshold yields `Producing`, strictly below
    /// yields `NotProducing`. The previous state does not influence the
    /// outcome; the transition is a plain threshold comparison per tick.
    #[must_use]
    pub fn update(self, altitude_degrees: f64, threshold_degrees: f64) -> Self {
        if altitude_degrees >= threshold_degrees {
            Self::Producing
        } else {
            Self::NotProducing
        }
    }

    /// Checks whether this state is `Producing`.
    #[must_use]
    pub const fn is_producing(&self) -> bool {
        matches!(self, Self::Producing)
    }

    /// The localization key for this state's user-facing message.
    ///
    /// The core maps states to keys only; resolving the key to a localized
    /// string is the host's localization collaborator's job.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::Producing => "vitaminDMessageYes",
            Self::NotProducing => "vitaminDMessageNo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VITAMIN_D_THRESHOLD;

    #[test]
    fn test_initial_state_is_not_producing() {
        assert_eq!(ProductionState::default(), ProductionState::NotProducing);
        assert!(!ProductionState::default().is_producing());
    }

    #[test]
    fn test_crossing_above_starts_production() {
        let state = ProductionState::NotProducing.update(45.1, VITAMIN_D_THRESHOLD);
        assert_eq!(state, ProductionState::Producing);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        // Exactly meeting the threshold counts as producing
        let state = ProductionState::NotProducing.update(45.0, VITAMIN_D_THRESHOLD);
        assert!(state.is_producing());
    }

    #[test]
    fn test_dropping_below_stops_production() {
        let state = ProductionState::Producing.update(44.999, VITAMIN_D_THRESHOLD);
        assert_eq!(state, ProductionState::NotProducing);
    }

    #[test]
    fn test_no_hysteresis_oscillation() {
        // Re-evaluation is memoryless; oscillation at the boundary toggles freely
        let mut state = ProductionState::default();
        for altitude in [45.0, 44.99, 45.0, 44.99] {
            state = state.update(altitude, VITAMIN_D_THRESHOLD);
            assert_eq!(state.is_producing(), altitude >= VITAMIN_D_THRESHOLD);
        }
    }

    #[test]
    fn test_message_keys() {
        assert_eq!(
            ProductionState::Producing.message_key(),
            "vitaminDMessageYes"
        );
        assert_eq!(
            ProductionState::NotProducing.message_key(),
            "vitaminDMessageNo"
        );
    }

    #[test]
    fn test_custom_threshold() {
        let state = ProductionState::default().update(10.0, 6.0);
        assert!(state.is_producing());

        let state = state.update(10.0, 12.0);
        assert!(!state.is_producing());
    }
}
