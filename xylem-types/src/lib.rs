//! # Xylem Types
//!
//! Type definitions shared by the xylem38 keymap.
//!
//! - [`action`] - What a key position does: plain keys, tap/hold, tap dance, layers
//! - [`keycode`] - HID keycodes and the user keycode range
//! - [`modifier`] - Modifier key combinations
//! - [`mouse_button`] - Mouse button state

#![no_std]

pub mod action;
pub mod keycode;
pub mod modifier;
pub mod mouse_button;
