//! Trackball scroll mode and scroll speed presets.
//!
//! While the scroll key is held, trackball motion is turned into wheel/pan
//! movement, scaled by the current [`ScrollPreset`]. The preset is cycled with
//! the next/previous keys and can be typed out to the host.

use core::cell::Cell;

use crate::config::ScrollConfig;
use crate::types::keycode::KeyCode;

/// Number of scroll speed presets
pub const NUM_SCROLL_PRESETS: usize = 5;

/// Limit of a scaled scroll value, matching the 8-bit wheel/pan fields of the HID mouse report
pub const SCROLL_VALUE_LIMIT: i32 = 127;

/// Scroll speed presets, from slowest to fastest
pub const SCROLL_PRESETS: [ScrollPreset; NUM_SCROLL_PRESETS] = [
    ScrollPreset::new(1, 4),
    ScrollPreset::new(1, 2),
    ScrollPreset::new(1, 1),
    ScrollPreset::new(3, 2),
    ScrollPreset::new(2, 1),
];

/// A scroll speed, `num / den` times the trackball motion
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollPreset {
    pub num: i8,
    pub den: i8,
}

impl ScrollPreset {
    /// `den` must not be zero
    pub const fn new(num: i8, den: i8) -> Self {
        Self { num, den }
    }

    /// Scale a motion delta to a scroll value.
    ///
    /// The division truncates toward zero, the result is clamped to ±[`SCROLL_VALUE_LIMIT`].
    pub fn scale(self, delta: i16) -> i16 {
        let scaled = delta as i32 * self.num as i32 / self.den as i32;
        scaled.clamp(-SCROLL_VALUE_LIMIT, SCROLL_VALUE_LIMIT) as i16
    }
}

/// What the trackball currently does
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollMode {
    /// Trackball moves the pointer
    #[default]
    Pointing,
    /// Trackball scrolls, the scroll key is held
    Scrolling,
}

/// User keycodes of the scroll feature, in QMK user keycode order
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollKey {
    /// Scroll while held
    Hold = 0,
    /// Switch to the next speed preset
    NextPreset = 1,
    /// Switch to the previous speed preset
    PrevPreset = 2,
    /// Type the current speed preset to the host
    PrintPreset = 3,
}

impl ScrollKey {
    pub fn from_keycode(keycode: KeyCode) -> Option<Self> {
        match keycode {
            KeyCode::User(0) => Some(ScrollKey::Hold),
            KeyCode::User(1) => Some(ScrollKey::NextPreset),
            KeyCode::User(2) => Some(ScrollKey::PrevPreset),
            KeyCode::User(3) => Some(ScrollKey::PrintPreset),
            _ => None,
        }
    }

    pub fn keycode(self) -> KeyCode {
        KeyCode::User(self as u8)
    }
}

/// Scroll state shared by the key processor, which changes it, and the pointing processor, which reads it.
///
/// Both processors run on the same executor, `Cell` is enough.
pub struct ScrollState {
    mode: Cell<ScrollMode>,
    preset_index: Cell<usize>,
    presets: [ScrollPreset; NUM_SCROLL_PRESETS],
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(&ScrollConfig::default())
    }
}

impl ScrollState {
    /// Presets with a zero denominator are replaced by the built-in preset at the same index
    pub fn new(config: &ScrollConfig) -> Self {
        let mut presets = config.presets;
        for (i, preset) in presets.iter_mut().enumerate() {
            if preset.den == 0 {
                warn!("Scroll preset {} has a zero denominator, using {:?}", i, SCROLL_PRESETS[i]);
                *preset = SCROLL_PRESETS[i];
            }
        }
        Self {
            mode: Cell::new(ScrollMode::Pointing),
            preset_index: Cell::new(config.default_preset % NUM_SCROLL_PRESETS),
            presets,
        }
    }

    pub fn mode(&self) -> ScrollMode {
        self.mode.get()
    }

    pub fn is_scrolling(&self) -> bool {
        self.mode.get() == ScrollMode::Scrolling
    }

    pub fn set_mode(&self, mode: ScrollMode) {
        if self.mode.replace(mode) != mode {
            info!("Scroll mode: {:?}", mode);
        }
    }

    pub fn preset_index(&self) -> usize {
        self.preset_index.get()
    }

    pub fn preset(&self) -> ScrollPreset {
        self.presets[self.preset_index.get()]
    }

    /// Switch to the next preset, wrapping after the fastest one
    pub fn next_preset(&self) {
        let index = (self.preset_index.get() + 1) % NUM_SCROLL_PRESETS;
        self.preset_index.set(index);
        debug!("Scroll preset: {}", index);
    }

    /// Switch to the previous preset, wrapping before the slowest one
    pub fn prev_preset(&self) {
        let index = (self.preset_index.get() + NUM_SCROLL_PRESETS - 1) % NUM_SCROLL_PRESETS;
        self.preset_index.set(index);
        debug!("Scroll preset: {}", index);
    }

    /// Scale a motion delta with the current preset
    pub fn scale(&self, delta: i16) -> i16 {
        self.preset().scale(delta)
    }
}
