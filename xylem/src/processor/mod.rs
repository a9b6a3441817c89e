//! Input processors.
//!
//! A processor takes events from an input channel and either consumes them,
//! or hands them on to the next stage of the firmware.

use embassy_sync::channel::{Receiver, Sender};

use crate::RawMutex;

pub mod key;
pub mod pointing;

pub use key::ScrollKeyProcessor;
pub use pointing::{ScrollPointingProcessor, filter_report};

/// The result of processing an event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProcessResult<T> {
    /// The event is consumed, nothing else sees it
    Stop,
    /// Default handling should still happen
    Continue(T),
}

pub trait InputProcessor {
    /// Type of the received events
    type Event;
    /// Type of the events handed on when processing continues
    type Output;

    async fn process(&mut self, event: Self::Event) -> ProcessResult<Self::Output>;

    /// Process events from `events` forever, forwarding what isn't consumed to `next`
    async fn process_loop<const N: usize, const M: usize>(
        &mut self,
        events: Receiver<'_, RawMutex, Self::Event, N>,
        next: Sender<'_, RawMutex, Self::Output, M>,
    ) -> ! {
        loop {
            let event = events.receive().await;
            if let ProcessResult::Continue(output) = self.process(event).await {
                next.send(output).await;
            }
        }
    }
}
