//! Combo table entries.
use heapless::Vec;

use crate::config::COMBO_MAX_LENGTH;
use crate::types::action::KeyAction;

/// Keys pressed together that trigger `output`, optionally only on `layer`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Combo {
    pub actions: Vec<KeyAction, COMBO_MAX_LENGTH>,
    pub output: KeyAction,
    pub layer: Option<u8>,
}

impl Default for Combo {
    fn default() -> Self {
        Self::empty()
    }
}

impl Combo {
    /// Actions beyond `COMBO_MAX_LENGTH` are dropped
    pub fn new<I: IntoIterator<Item = KeyAction>>(actions: I, output: KeyAction, layer: Option<u8>) -> Self {
        let mut combo_actions = Vec::new();
        for action in actions {
            if combo_actions.push(action).is_err() {
                warn!("Combo has more than {} keys, the rest are dropped", COMBO_MAX_LENGTH);
                break;
            }
        }
        Self {
            actions: combo_actions,
            output,
            layer,
        }
    }

    pub fn empty() -> Self {
        Self {
            actions: Vec::new(),
            output: KeyAction::No,
            layer: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() || self.output.is_empty()
    }

    /// Whether `action` on `layer` is one of the combo keys
    pub fn contains(&self, action: &KeyAction, layer: u8) -> bool {
        if self.layer.is_some_and(|l| l != layer) {
            return false;
        }
        self.actions.contains(action)
    }
}
