//! Keyboard configuration.
//!
//! Compile-time constants are generated by `build.rs` from `keyboard.toml`,
//! the structs below carry them at runtime and can be overridden in code.

use heapless::Vec;

use crate::combo::Combo;
use crate::scroll::{NUM_SCROLL_PRESETS, SCROLL_PRESETS, ScrollPreset};
use crate::tap_dance::TapDance;

include!(concat!(env!("OUT_DIR"), "/constants.rs"));

/// The config struct for the keyboard
#[derive(Clone, Debug)]
pub struct KeyboardConfig {
    pub pointing_config: PointingConfig,
    pub scroll_config: ScrollConfig,
    pub behavior_config: BehaviorConfig,
    pub vial_config: VialConfig,
    /// Flash size of the board in bytes
    pub flash_size: usize,
}

/// Trackball sensor settings
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PointingConfig {
    /// Sensor resolution, counts per inch
    pub cpi: u16,
    /// Invert X axis
    pub invert_x: bool,
    /// Invert Y axis
    pub invert_y: bool,
}

impl Default for PointingConfig {
    fn default() -> Self {
        Self {
            cpi: POINTING_CPI,
            invert_x: POINTING_INVERT_X,
            invert_y: POINTING_INVERT_Y,
        }
    }
}

#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollConfig {
    pub presets: [ScrollPreset; NUM_SCROLL_PRESETS],
    /// Index of the preset used at startup
    pub default_preset: usize,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            presets: SCROLL_PRESETS,
            default_preset: SCROLL_DEFAULT_PRESET,
        }
    }
}

/// Config for configurable action behavior
#[derive(Clone, Debug, Default)]
pub struct BehaviorConfig {
    pub tap_dance: TapDancesConfig,
    pub combo: CombosConfig,
}

/// Tap dance table, referenced by `KeyAction::TapDance(index)`
#[derive(Clone, Debug, Default)]
pub struct TapDancesConfig {
    pub tap_dances: Vec<TapDance, TAP_DANCE_MAX_NUM>,
}

#[derive(Clone, Debug, Default)]
pub struct CombosConfig {
    pub combos: Vec<Combo, COMBO_MAX_NUM>,
}

/// Config for [vial](https://get.vial.today/)
#[derive(Clone, Copy, Debug)]
pub struct VialConfig {
    pub vial_keyboard_id: [u8; 8],
}

impl Default for VialConfig {
    fn default() -> Self {
        Self {
            vial_keyboard_id: VIAL_KEYBOARD_ID,
        }
    }
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            pointing_config: PointingConfig::default(),
            scroll_config: ScrollConfig::default(),
            behavior_config: BehaviorConfig::default(),
            vial_config: VialConfig::default(),
            flash_size: FLASH_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_follows_keyboard_toml() {
        let config = KeyboardConfig::default();
        assert_eq!(config.pointing_config.cpi, 1200);
        assert!(config.pointing_config.invert_x);
        assert!(config.pointing_config.invert_y);
        assert_eq!(config.scroll_config.default_preset, 2);
        assert_eq!(config.flash_size, 1024 * 1024);
        assert_eq!(
            config.vial_config.vial_keyboard_id,
            [0x9a, 0x90, 0x91, 0xb9, 0x9b, 0x35, 0x5f, 0x21]
        );
        assert_eq!(NUM_LAYER, 6);
        assert_eq!(TAP_DANCE_MAX_NUM, 8);
        assert_eq!(COMBO_MAX_NUM, 8);
    }
}
