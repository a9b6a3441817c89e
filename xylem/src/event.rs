//! Input events delivered to the processors.
use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

use crate::types::action::KeyAction;

/// A key switch changed state
#[derive(Serialize, Deserialize, Clone, Copy, Debug, MaxSize, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardEvent {
    pub pressed: bool,
    pub pos: KeyPos,
}

impl KeyboardEvent {
    pub fn key(row: u8, col: u8, pressed: bool) -> Self {
        Self {
            pressed,
            pos: KeyPos { row, col },
        }
    }
}

/// A key event together with the action it resolved to in the keymap
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub event: KeyboardEvent,
    pub action: KeyAction,
}

/// Matrix position of a key
#[derive(Serialize, Deserialize, Clone, Copy, Debug, MaxSize, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyPos {
    pub row: u8,
    pub col: u8,
}

/// Motion read from the trackball sensor, up to three axes per event
#[derive(Serialize, Deserialize, Clone, Copy, Debug, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PointingEvent(pub [AxisEvent; 3]);

impl PointingEvent {
    /// Relative x/y motion
    pub fn motion(x: i16, y: i16) -> Self {
        Self([
            AxisEvent::rel(Axis::X, x),
            AxisEvent::rel(Axis::Y, y),
            AxisEvent::rel(Axis::Z, 0),
        ])
    }

    /// Value of the given axis, 0 if the event doesn't carry it
    pub fn axis(&self, axis: Axis) -> i16 {
        self.0
            .iter()
            .find(|e| e.axis == axis)
            .map(|e| e.value)
            .unwrap_or(0)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Copy, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisEvent {
    /// Relative or absolute
    pub typ: AxisValType,
    pub axis: Axis,
    pub value: i16,
}

impl AxisEvent {
    pub fn rel(axis: Axis, value: i16) -> Self {
        Self {
            typ: AxisValType::Rel,
            axis,
            value,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Copy, MaxSize, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisValType {
    Rel,
    Abs,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, MaxSize, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
    Z,
    H,
    V,
}
