//! Keymap and trackball scroll overlay for the xylem38 keyboard.
//!
//! The firmware owns the matrix, the sensor and the USB stack. This crate
//! supplies the keymap, the scroll keys and the pointing report filter that
//! turns trackball motion into scrolling while the scroll key is held.
#![cfg_attr(not(test), no_std)]
#![allow(async_fn_in_trait)]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
mod fmt;

use core::cell::RefCell;

use embassy_futures::join::join3;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
pub use xylem_types as types;

use crate::channel::{
    KEY_EVENT_CHANNEL, KEYBOARD_REPORT_CHANNEL, POINTING_EVENT_CHANNEL, TEXT_CHANNEL, UNHANDLED_KEY_CHANNEL,
};
use crate::config::KeyboardConfig;
use crate::keymap::KeyMap;
use crate::processor::{InputProcessor, ScrollKeyProcessor, ScrollPointingProcessor};
use crate::scroll::ScrollState;
use crate::text::{HostTyper, TextInjector};

pub mod channel;
pub mod combo;
pub mod config;
pub mod event;
pub mod hid;
pub mod keymap;
pub mod layout;
pub mod layout_macro;
pub mod processor;
pub mod scroll;
pub mod tap_dance;
pub mod text;

pub type RawMutex = CriticalSectionRawMutex;

/// Run the scroll keys, the pointing filter and the host typer on the global channels.
///
/// Key events are read from [`KEY_EVENT_CHANNEL`] and motion from [`POINTING_EVENT_CHANNEL`].
/// Mouse and typed reports go to [`KEYBOARD_REPORT_CHANNEL`], key events that aren't
/// scroll keys go to [`UNHANDLED_KEY_CHANNEL`].
pub async fn run_xylem<'a, 'k, const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
    keymap: &'a RefCell<KeyMap<'k, ROW, COL, NUM_LAYER>>,
    state: &'a ScrollState,
    config: &KeyboardConfig,
) -> ! {
    info!(
        "Starting xylem, {} layers, trackball at {} cpi",
        NUM_LAYER, config.pointing_config.cpi
    );
    let mut key_processor = ScrollKeyProcessor::new(keymap, state, TextInjector::new(&TEXT_CHANNEL));
    let mut pointing_processor =
        ScrollPointingProcessor::new(state, config.pointing_config, &KEYBOARD_REPORT_CHANNEL);
    let mut host_typer = HostTyper::new(&TEXT_CHANNEL, &KEYBOARD_REPORT_CHANNEL);

    join3(
        key_processor.process_loop(KEY_EVENT_CHANNEL.receiver(), UNHANDLED_KEY_CHANNEL.sender()),
        pointing_processor.run(POINTING_EVENT_CHANNEL.receiver()),
        host_typer.run(),
    )
    .await;

    unreachable!()
}
