//! Exposed channels which can be used to share data across devices & processors

use embassy_sync::channel::Channel;
pub use embassy_sync::{blocking_mutex, channel};

use crate::RawMutex;
use crate::config::{EVENT_CHANNEL_SIZE, REPORT_CHANNEL_SIZE, TEXT_CHANNEL_SIZE};
use crate::event::{KeyEvent, KeyboardEvent, PointingEvent};
use crate::hid::Report;
use crate::text::TextBuffer;

pub type ReportChannel = Channel<RawMutex, Report, REPORT_CHANNEL_SIZE>;
pub type TextChannel = Channel<RawMutex, TextBuffer, TEXT_CHANNEL_SIZE>;

/// Channel for key events from the matrix
pub static KEY_EVENT_CHANNEL: Channel<RawMutex, KeyboardEvent, EVENT_CHANNEL_SIZE> = Channel::new();
/// Key events that the scroll keys didn't consume, for the firmware's keyboard task
pub static UNHANDLED_KEY_CHANNEL: Channel<RawMutex, KeyEvent, EVENT_CHANNEL_SIZE> = Channel::new();
/// Channel for trackball motion
pub static POINTING_EVENT_CHANNEL: Channel<RawMutex, PointingEvent, EVENT_CHANNEL_SIZE> = Channel::new();
/// Reports to be sent to the host
pub static KEYBOARD_REPORT_CHANNEL: ReportChannel = Channel::new();
/// Texts waiting to be typed to the host
pub static TEXT_CHANNEL: TextChannel = Channel::new();
