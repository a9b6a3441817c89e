use core::cell::RefCell;

use xylem::channel::ReportChannel;
use xylem::config::{BehaviorConfig, NUM_LAYER};
use xylem::hid::{KeyboardReport, Report};
use xylem::keymap::KeyMap;
use xylem::layout::{COL, ROW, get_default_keymap};
use xylem::types::action::KeyAction;
use xylem::types::keycode::HidKeyCode;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub fn wrap_keymap<const R: usize, const C: usize, const L: usize>(
    keymap: [[[KeyAction; C]; R]; L],
    config: BehaviorConfig,
) -> &'static RefCell<KeyMap<'static, R, C, L>> {
    // Box::leak is acceptable in tests
    let leaked_keymap = Box::leak(Box::new(keymap));
    Box::leak(Box::new(RefCell::new(KeyMap::new(leaked_keymap, config))))
}

pub fn create_default_keymap() -> &'static RefCell<KeyMap<'static, ROW, COL, NUM_LAYER>> {
    wrap_keymap(get_default_keymap(), BehaviorConfig::default())
}

/// Character typed by a press report, US layout
fn typed_char(report: &KeyboardReport) -> Option<char> {
    let shifted = report.modifier.left_shift();
    let key = HidKeyCode::from(report.keycodes[0]);
    (0u8..0x80)
        .find(|b| HidKeyCode::from_ascii(*b) == Some((key, shifted)))
        .map(char::from)
}

/// Decode reports sent by the host typer back to text.
///
/// Every press report must be followed by a release report.
pub fn typed_text(reports: &[Report]) -> String {
    assert_eq!(reports.len() % 2, 0, "unpaired reports {:?}", reports);
    reports
        .chunks(2)
        .map(|pair| {
            let (Report::KeyboardReport(press), Report::KeyboardReport(release)) = (pair[0], pair[1]) else {
                panic!("unexpected reports {:?}", pair);
            };
            assert_eq!(release, KeyboardReport::empty(), "press {:?} is not released", press);
            typed_char(&press).expect("press report types a character")
        })
        .collect()
}

/// Receive `count` reports from the channel
pub async fn receive_reports(reports: &ReportChannel, count: usize) -> Vec<Report> {
    let mut received = Vec::with_capacity(count);
    for _ in 0..count {
        received.push(reports.receive().await);
    }
    received
}
