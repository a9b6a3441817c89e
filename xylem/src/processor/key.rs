use core::cell::RefCell;

use crate::event::{KeyEvent, KeyboardEvent};
use crate::keymap::KeyMap;
use crate::processor::{InputProcessor, ProcessResult};
use crate::scroll::{ScrollKey, ScrollMode, ScrollState};
use crate::text::TextInjector;
use crate::types::keycode::KeyCode;

/// Handles the scroll keys: hold to scroll, cycle the speed preset, print the speed preset.
///
/// Every other key is resolved through the keymap and handed on.
pub struct ScrollKeyProcessor<'a, 'k, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    keymap: &'a RefCell<KeyMap<'k, ROW, COL, NUM_LAYER>>,
    state: &'a ScrollState,
    text: TextInjector<'a>,
}

impl<'a, 'k, const ROW: usize, const COL: usize, const NUM_LAYER: usize> ScrollKeyProcessor<'a, 'k, ROW, COL, NUM_LAYER> {
    pub fn new(
        keymap: &'a RefCell<KeyMap<'k, ROW, COL, NUM_LAYER>>,
        state: &'a ScrollState,
        text: TextInjector<'a>,
    ) -> Self {
        Self { keymap, state, text }
    }

    /// Returns true when the key is consumed
    pub fn process_key(&self, keycode: KeyCode, pressed: bool) -> bool {
        let Some(key) = ScrollKey::from_keycode(keycode) else {
            return false;
        };

        if !pressed {
            // Only the hold key reacts to release
            if key == ScrollKey::Hold {
                self.state.set_mode(ScrollMode::Pointing);
                return true;
            }
            return false;
        }

        match key {
            ScrollKey::Hold => self.state.set_mode(ScrollMode::Scrolling),
            ScrollKey::NextPreset => self.state.next_preset(),
            ScrollKey::PrevPreset => self.state.prev_preset(),
            ScrollKey::PrintPreset => {
                let preset = self.state.preset();
                self.text
                    .send_fmt(format_args!("Scroll Speed: {}/{}\n", preset.num, preset.den));
            }
        }
        true
    }
}

impl<const ROW: usize, const COL: usize, const NUM_LAYER: usize> InputProcessor
    for ScrollKeyProcessor<'_, '_, ROW, COL, NUM_LAYER>
{
    type Event = KeyboardEvent;
    type Output = KeyEvent;

    async fn process(&mut self, event: KeyboardEvent) -> ProcessResult<KeyEvent> {
        let action = self.keymap.borrow_mut().get_action_with_layer_cache(event);
        if let Some(keycode) = action.keycode() {
            if self.process_key(keycode, event.pressed) {
                return ProcessResult::Stop;
            }
        }
        ProcessResult::Continue(KeyEvent { event, action })
    }
}

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;
    use embassy_sync::channel::Channel;

    use super::*;
    use crate::channel::TextChannel;
    use crate::config::BehaviorConfig;
    use crate::types::action::KeyAction;
    use crate::types::keycode::HidKeyCode;
    use crate::{k, layer, user};

    #[test]
    fn test_scroll_key_consumes_only_its_keys() {
        let mut layers = [layer!([[user!(0), user!(1), user!(2), user!(3), k!(A), user!(9)]])];
        let keymap = RefCell::new(KeyMap::new(&mut layers, BehaviorConfig::default()));
        let state = ScrollState::default();
        let texts: TextChannel = Channel::new();
        let mut processor = ScrollKeyProcessor::new(&keymap, &state, TextInjector::new(&texts));

        block_on(async {
            let press_a = KeyboardEvent::key(0, 4, true);
            assert_eq!(
                processor.process(press_a).await,
                ProcessResult::Continue(KeyEvent {
                    event: press_a,
                    action: k!(A)
                })
            );

            // Unassigned user keycode is left for the firmware
            let press_user = KeyboardEvent::key(0, 5, true);
            assert!(matches!(processor.process(press_user).await, ProcessResult::Continue(_)));

            assert_eq!(processor.process(KeyboardEvent::key(0, 1, true)).await, ProcessResult::Stop);
            let release_next = KeyboardEvent::key(0, 1, false);
            assert_eq!(
                processor.process(release_next).await,
                ProcessResult::Continue(KeyEvent {
                    event: release_next,
                    action: user!(1)
                })
            );
        });
        assert_eq!(state.preset_index(), 3);
        assert_eq!(state.mode(), ScrollMode::Pointing);
    }

    #[test]
    fn test_process_key_without_keymap_lookup() {
        let mut layers = [layer!([[k!(A)]])];
        let keymap = RefCell::new(KeyMap::new(&mut layers, BehaviorConfig::default()));
        let state = ScrollState::default();
        let texts: TextChannel = Channel::new();
        let processor = ScrollKeyProcessor::new(&keymap, &state, TextInjector::new(&texts));

        assert!(!processor.process_key(KeyCode::Hid(HidKeyCode::A), true));
        assert!(processor.process_key(KeyCode::User(0), true));
        assert!(state.is_scrolling());
        assert!(processor.process_key(KeyCode::User(2), true));
        assert!(!processor.process_key(KeyCode::User(2), false));
        assert!(state.is_scrolling());
        assert!(processor.process_key(KeyCode::User(0), false));
        assert!(!state.is_scrolling());
        assert_eq!(state.preset_index(), 1);
    }

    #[test]
    fn test_static_keymap_with_local_state() {
        // Firmware keeps the keymap in a static, the state and channels may live shorter
        let layers: &'static mut [[[KeyAction; 2]; 1]; 1] = Box::leak(Box::new([layer!([[user!(0), k!(A)]])]));
        let keymap: &'static RefCell<KeyMap<'static, 1, 2, 1>> =
            Box::leak(Box::new(RefCell::new(KeyMap::new(layers, BehaviorConfig::default()))));
        let state = ScrollState::default();
        let texts: TextChannel = Channel::new();
        {
            let mut processor = ScrollKeyProcessor::new(keymap, &state, TextInjector::new(&texts));
            block_on(async {
                assert_eq!(processor.process(KeyboardEvent::key(0, 0, true)).await, ProcessResult::Stop);
            });
        }
        assert!(state.is_scrolling());
    }
}
