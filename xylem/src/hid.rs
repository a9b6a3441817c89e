//! HID reports produced by the processors.
//!
//! Reports keep wider fields than the USB descriptors, values are narrowed
//! to the wire format in `into_hid`.

use usbd_hid::descriptor::{KeyboardReport as HidKeyboardReport, MouseReport};

use crate::types::keycode::HidKeyCode;
use crate::types::modifier::HidModifiers;
use crate::types::mouse_button::MouseButtons;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Report {
    /// Normal keyboard hid report
    KeyboardReport(KeyboardReport),
    /// Mouse hid report
    MouseReport(PointingReport),
}

/// Boot keyboard report, 6KRO
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    pub modifier: HidModifiers,
    pub keycodes: [u8; 6],
}

impl KeyboardReport {
    /// All keys released
    pub fn empty() -> Self {
        Self::default()
    }

    /// A single key held, with left shift if `shifted`
    pub fn single(key: HidKeyCode, shifted: bool) -> Self {
        let mut keycodes = [0; 6];
        keycodes[0] = key as u8;
        Self {
            modifier: HidModifiers::new().with_left_shift(shifted),
            keycodes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.modifier.into_bits() == 0 && self.keycodes.iter().all(|k| *k == 0)
    }

    pub fn into_hid(self) -> HidKeyboardReport {
        HidKeyboardReport {
            modifier: self.modifier.into_bits(),
            reserved: 0,
            leds: 0,
            keycodes: self.keycodes,
        }
    }
}

/// Mouse movement, scroll and buttons.
///
/// `h` is horizontal scroll (pan), `v` is vertical scroll (wheel).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PointingReport {
    pub buttons: MouseButtons,
    pub x: i16,
    pub y: i16,
    pub h: i16,
    pub v: i16,
}

impl PointingReport {
    pub fn motion(x: i16, y: i16) -> Self {
        Self {
            x,
            y,
            ..Default::default()
        }
    }

    pub fn into_hid(self) -> MouseReport {
        MouseReport {
            buttons: self.buttons.into_bits(),
            x: clamp_i8(self.x),
            y: clamp_i8(self.y),
            wheel: clamp_i8(self.v),
            pan: clamp_i8(self.h),
        }
    }
}

fn clamp_i8(value: i16) -> i8 {
    value.clamp(i8::MIN as i16, i8::MAX as i16) as i8
}
