use embassy_sync::channel::Receiver;

use crate::RawMutex;
use crate::channel::ReportChannel;
use crate::config::PointingConfig;
use crate::event::{Axis, PointingEvent};
use crate::hid::{PointingReport, Report};
use crate::processor::{InputProcessor, ProcessResult};
use crate::scroll::ScrollState;

/// Rewrite a motion report while scroll mode is on.
///
/// Pointer motion is replaced by scrolling: `h` follows x, `v` follows the
/// inverted y, both scaled by the current preset. Buttons are left alone.
pub fn filter_report(state: &ScrollState, report: PointingReport) -> PointingReport {
    if !state.is_scrolling() {
        return report;
    }
    PointingReport {
        x: 0,
        y: 0,
        h: state.scale(report.x),
        v: state.scale(report.y.saturating_neg()),
        ..report
    }
}

/// Converts trackball motion to mouse reports, scrolling while the scroll key is held
pub struct ScrollPointingProcessor<'a> {
    state: &'a ScrollState,
    config: PointingConfig,
    reports: &'a ReportChannel,
}

impl<'a> ScrollPointingProcessor<'a> {
    pub fn new(state: &'a ScrollState, config: PointingConfig, reports: &'a ReportChannel) -> Self {
        Self { state, config, reports }
    }

    /// Motion of the event, with the configured axis inversion applied
    pub fn motion_report(&self, event: &PointingEvent) -> PointingReport {
        let mut x = event.axis(Axis::X);
        let mut y = event.axis(Axis::Y);
        if self.config.invert_x {
            x = x.saturating_neg();
        }
        if self.config.invert_y {
            y = y.saturating_neg();
        }
        PointingReport::motion(x, y)
    }

    /// Process motion from `events` forever, every event ends in a report
    pub async fn run<const N: usize>(&mut self, events: Receiver<'_, RawMutex, PointingEvent, N>) -> ! {
        loop {
            let event = events.receive().await;
            self.process(event).await;
        }
    }
}

impl InputProcessor for ScrollPointingProcessor<'_> {
    type Event = PointingEvent;
    type Output = PointingReport;

    async fn process(&mut self, event: PointingEvent) -> ProcessResult<PointingReport> {
        let report = filter_report(self.state, self.motion_report(&event));
        trace!("Pointing report: {:?}", report);
        self.reports.send(Report::MouseReport(report)).await;
        ProcessResult::Stop
    }
}

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;
    use embassy_sync::channel::Channel;

    use super::*;
    use crate::scroll::ScrollMode;
    use crate::types::mouse_button::MouseButtons;

    fn no_inversion() -> PointingConfig {
        PointingConfig {
            invert_x: false,
            invert_y: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_filter_is_identity_when_pointing() {
        let state = ScrollState::default();
        let report = PointingReport {
            buttons: MouseButtons::BUTTON2,
            x: -300,
            y: 42,
            h: 3,
            v: -4,
        };
        assert_eq!(filter_report(&state, report), report);
    }

    #[test]
    fn test_filter_scrolls_at_half_speed() {
        let state = ScrollState::default();
        state.prev_preset();
        state.set_mode(ScrollMode::Scrolling);
        let report = PointingReport {
            buttons: MouseButtons::BUTTON1,
            ..PointingReport::motion(10, -20)
        };
        let filtered = filter_report(&state, report);
        assert_eq!(filtered.x, 0);
        assert_eq!(filtered.y, 0);
        assert_eq!(filtered.h, 5);
        assert_eq!(filtered.v, 10);
        assert_eq!(filtered.buttons, MouseButtons::BUTTON1);
    }

    #[test]
    fn test_filter_handles_extreme_motion() {
        let state = ScrollState::default();
        state.set_mode(ScrollMode::Scrolling);
        let filtered = filter_report(&state, PointingReport::motion(i16::MIN, i16::MIN));
        assert_eq!(filtered.h, -127);
        assert_eq!(filtered.v, 127);
    }

    #[test]
    fn test_axis_inversion() {
        let state = ScrollState::default();
        let reports: ReportChannel = Channel::new();
        let processor = ScrollPointingProcessor::new(&state, PointingConfig::default(), &reports);
        let report = processor.motion_report(&PointingEvent::motion(3, -7));
        assert_eq!((report.x, report.y), (-3, 7));

        let processor = ScrollPointingProcessor::new(&state, no_inversion(), &reports);
        let report = processor.motion_report(&PointingEvent::motion(i16::MIN, 5));
        assert_eq!((report.x, report.y), (i16::MIN, 5));
    }

    #[test]
    fn test_process_sends_mouse_report() {
        let state = ScrollState::default();
        let reports: ReportChannel = Channel::new();
        let mut processor = ScrollPointingProcessor::new(&state, no_inversion(), &reports);

        let result = block_on(processor.process(PointingEvent::motion(200, -1)));
        assert_eq!(result, ProcessResult::Stop);
        let Report::MouseReport(report) = reports.try_receive().unwrap() else {
            panic!("expected a mouse report");
        };
        assert_eq!(report, PointingReport::motion(200, -1));
        let hid = report.into_hid();
        assert_eq!((hid.x, hid.y), (127, -1));
    }

    #[test]
    fn test_filter_with_zero_denominator_preset() {
        let mut config = crate::config::ScrollConfig::default();
        config.presets[2] = crate::scroll::ScrollPreset::new(1, 0);
        let state = ScrollState::new(&config);
        state.set_mode(ScrollMode::Scrolling);

        let report = filter_report(&state, PointingReport::motion(1, 1));
        assert_eq!((report.x, report.y, report.h, report.v), (0, 0, 1, -1));
    }
}
