//! Tap dance table entries.
//!
//! Only the data lives here, resolving taps against the tapping term is done by the firmware.
use embassy_time::Duration;

use crate::types::action::KeyAction;

/// Default tapping term of a tap dance
pub const DEFAULT_TAPPING_TERM: Duration = Duration::from_millis(200);

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapDance {
    pub tap: KeyAction,
    pub hold: KeyAction,
    pub hold_after_tap: KeyAction,
    pub double_tap: KeyAction,
    pub tapping_term: Duration,
}

impl Default for TapDance {
    fn default() -> Self {
        Self {
            tap: KeyAction::No,
            hold: KeyAction::No,
            hold_after_tap: KeyAction::No,
            double_tap: KeyAction::No,
            tapping_term: DEFAULT_TAPPING_TERM,
        }
    }
}

impl TapDance {
    /// Tap sends `tap`, double tap sends `double_tap`, holding does nothing
    pub fn tap_or_double(tap: KeyAction, double_tap: KeyAction) -> Self {
        Self {
            tap,
            double_tap,
            ..Default::default()
        }
    }
}
