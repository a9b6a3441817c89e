//! Mouse button state.
use core::ops::{BitOr, BitOrAssign};

use bitfield_struct::bitfield;

/// Mouse buttons, laid out as the first byte of a HID mouse report
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct MouseButtons {
    #[bits(1)]
    pub button1: bool, //left
    #[bits(1)]
    pub button2: bool, //right
    #[bits(1)]
    pub button3: bool, //middle
    #[bits(1)]
    pub button4: bool,
    #[bits(1)]
    pub button5: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for MouseButtons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

impl BitOrAssign for MouseButtons {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl MouseButtons {
    pub const BUTTON1: Self = Self::new().with_button1(true);
    pub const BUTTON2: Self = Self::new().with_button2(true);
    pub const BUTTON3: Self = Self::new().with_button3(true);
}
