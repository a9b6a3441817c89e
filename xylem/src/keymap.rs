use crate::combo::Combo;
use crate::config::{BehaviorConfig, COMBO_MAX_LENGTH};
use crate::event::KeyboardEvent;
use crate::tap_dance::TapDance;
use crate::types::action::KeyAction;

/// Keymap represents the stack of layers.
///
/// The conception of Keymap is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
/// A key is looked up by `(row, col)` in every active layer, from the highest to the default one.
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Layers
    layers: &'a mut [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Current state of each layer
    layer_state: [bool; NUM_LAYER],
    /// Default layer number
    default_layer: u8,
    /// Layer that served the last press of each key
    layer_cache: [[u8; COL]; ROW],
    /// Tap dance and combo tables
    behavior: BehaviorConfig,
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<'a, ROW, COL, NUM_LAYER> {
    pub fn new(action_map: &'a mut [[[KeyAction; COL]; ROW]; NUM_LAYER], behavior: BehaviorConfig) -> Self {
        KeyMap {
            layers: action_map,
            layer_state: [false; NUM_LAYER],
            default_layer: 0,
            layer_cache: [[0; COL]; ROW],
            behavior,
        }
    }

    pub fn get_keymap_config(&self) -> (usize, usize, usize) {
        (ROW, COL, NUM_LAYER)
    }

    pub fn get_default_layer(&self) -> u8 {
        self.default_layer
    }

    pub fn set_default_layer(&mut self, layer_num: u8) {
        if !self.check_layer(layer_num) {
            return;
        }
        info!("Default layer set to {}", layer_num);
        self.default_layer = layer_num;
    }

    pub fn get_action_at(&self, row: usize, col: usize, layer_num: usize) -> KeyAction {
        self.layers
            .get(layer_num)
            .and_then(|layer| layer.get(row))
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(KeyAction::No)
    }

    pub fn set_action_at(&mut self, row: usize, col: usize, layer_num: usize, action: KeyAction) {
        match self
            .layers
            .get_mut(layer_num)
            .and_then(|layer| layer.get_mut(row))
            .and_then(|r| r.get_mut(col))
        {
            Some(slot) => *slot = action,
            None => warn!("Invalid keymap position ({}, {}) on layer {}", row, col, layer_num),
        }
    }

    /// Resolve the action of a key event.
    ///
    /// A release resolves on the layer its press was served from, even if that layer is no longer active.
    pub fn get_action_with_layer_cache(&mut self, event: KeyboardEvent) -> KeyAction {
        let row = event.pos.row as usize;
        let col = event.pos.col as usize;
        if row >= ROW || col >= COL {
            warn!("Key position ({}, {}) is outside of the matrix", row, col);
            return KeyAction::No;
        }

        if !event.pressed {
            let layer = self.pop_layer_from_cache(row, col);
            return self.layers[layer as usize][row][col];
        }

        // Iterate from higher layer to lower layer, the lowest checked layer is the default layer
        for (layer_idx, layer) in self.layers.iter().enumerate().rev() {
            let is_default = layer_idx as u8 == self.default_layer;
            if self.layer_state[layer_idx] || is_default {
                let action = layer[row][col];
                if action != KeyAction::Transparent {
                    self.layer_cache[row][col] = layer_idx as u8;
                    return action;
                }
            }

            if is_default {
                break;
            }
        }

        KeyAction::No
    }

    /// Highest active layer
    pub fn get_activated_layer(&self) -> u8 {
        (0..NUM_LAYER)
            .rev()
            .find(|&idx| self.layer_state[idx] || idx as u8 == self.default_layer)
            .map(|idx| idx as u8)
            .unwrap_or(self.default_layer)
    }

    pub fn is_layer_active(&self, layer_num: u8) -> bool {
        self.layer_state.get(layer_num as usize).copied().unwrap_or(false)
    }

    fn pop_layer_from_cache(&mut self, row: usize, col: usize) -> u8 {
        let layer = self.layer_cache[row][col];
        self.layer_cache[row][col] = self.default_layer;
        layer
    }

    fn check_layer(&self, layer_num: u8) -> bool {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return false;
        }
        true
    }

    /// Activate given layer
    pub fn activate_layer(&mut self, layer_num: u8) {
        if self.check_layer(layer_num) {
            self.layer_state[layer_num as usize] = true;
        }
    }

    /// Deactivate given layer
    pub fn deactivate_layer(&mut self, layer_num: u8) {
        if self.check_layer(layer_num) {
            self.layer_state[layer_num as usize] = false;
        }
    }

    /// Toggle given layer
    pub fn toggle_layer(&mut self, layer_num: u8) {
        if self.check_layer(layer_num) {
            self.layer_state[layer_num as usize] = !self.layer_state[layer_num as usize];
        }
    }

    /// Tap dance referenced by `KeyAction::TapDance(index)`
    pub fn get_tap_dance(&self, index: u8) -> Option<&TapDance> {
        self.behavior.tap_dance.tap_dances.get(index as usize)
    }

    /// Combos, longest first
    pub fn combos(&self) -> impl Iterator<Item = &Combo> {
        (0..=COMBO_MAX_LENGTH).rev().flat_map(move |len| {
            self.behavior
                .combo
                .combos
                .iter()
                .filter(move |c| c.actions.len() == len)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CombosConfig, TapDancesConfig};
    use crate::types::action::Action;
    use crate::types::keycode::{HidKeyCode, KeyCode};
    use crate::{a, k, layer, mo};

    fn keymap_layers() -> [[[KeyAction; 2]; 1]; 3] {
        [
            layer!([[k!(A), mo!(1)]]),
            layer!([[k!(B), a!(Transparent)]]),
            layer!([[a!(Transparent), k!(C)]]),
        ]
    }

    #[test]
    fn test_lookup_skips_transparent_and_inactive_layers() {
        let mut layers = keymap_layers();
        let mut keymap = KeyMap::new(&mut layers, BehaviorConfig::default());

        assert_eq!(keymap.get_action_with_layer_cache(KeyboardEvent::key(0, 0, true)), k!(A));
        keymap.activate_layer(1);
        keymap.activate_layer(2);
        assert_eq!(keymap.get_activated_layer(), 2);
        // Layer 2 is transparent at (0, 0), falls to layer 1
        assert_eq!(keymap.get_action_with_layer_cache(KeyboardEvent::key(0, 0, true)), k!(B));
        assert_eq!(keymap.get_action_with_layer_cache(KeyboardEvent::key(0, 1, true)), k!(C));
    }

    #[test]
    fn test_release_uses_layer_of_press() {
        let mut layers = keymap_layers();
        let mut keymap = KeyMap::new(&mut layers, BehaviorConfig::default());

        keymap.activate_layer(1);
        assert_eq!(keymap.get_action_with_layer_cache(KeyboardEvent::key(0, 0, true)), k!(B));
        keymap.deactivate_layer(1);
        assert_eq!(keymap.get_action_with_layer_cache(KeyboardEvent::key(0, 0, false)), k!(B));
        // Cache is reset after release
        assert_eq!(keymap.get_action_with_layer_cache(KeyboardEvent::key(0, 0, false)), k!(A));
    }

    #[test]
    fn test_invalid_layer_and_position() {
        let mut layers = keymap_layers();
        let mut keymap = KeyMap::new(&mut layers, BehaviorConfig::default());

        keymap.activate_layer(3);
        keymap.toggle_layer(10);
        assert_eq!(keymap.get_activated_layer(), 0);
        assert!(!keymap.is_layer_active(3));
        assert_eq!(keymap.get_action_with_layer_cache(KeyboardEvent::key(1, 0, true)), KeyAction::No);
        assert_eq!(keymap.get_action_with_layer_cache(KeyboardEvent::key(0, 5, false)), KeyAction::No);
        assert_eq!(keymap.get_action_at(0, 0, 7), KeyAction::No);
    }

    #[test]
    fn test_toggle_and_default_layer() {
        let mut layers = keymap_layers();
        let mut keymap = KeyMap::new(&mut layers, BehaviorConfig::default());

        keymap.toggle_layer(2);
        assert!(keymap.is_layer_active(2));
        keymap.toggle_layer(2);
        assert!(!keymap.is_layer_active(2));

        keymap.set_default_layer(1);
        assert_eq!(keymap.get_default_layer(), 1);
        assert_eq!(keymap.get_action_with_layer_cache(KeyboardEvent::key(0, 0, true)), k!(B));
        // Layer 1 is transparent at (0, 1) and nothing below the default layer is checked
        assert_eq!(keymap.get_action_with_layer_cache(KeyboardEvent::key(0, 1, true)), KeyAction::No);
    }

    #[test]
    fn test_active_layer_below_default_is_not_checked() {
        let mut layers = keymap_layers();
        let mut keymap = KeyMap::new(&mut layers, BehaviorConfig::default());

        keymap.set_default_layer(1);
        keymap.activate_layer(0);
        // Layer 1 is transparent at (0, 1), layer 0 is active but below the default layer
        assert_eq!(keymap.get_action_with_layer_cache(KeyboardEvent::key(0, 1, true)), KeyAction::No);
        assert_eq!(keymap.get_action_with_layer_cache(KeyboardEvent::key(0, 0, true)), k!(B));
    }

    #[test]
    fn test_set_action_at() {
        let mut layers = keymap_layers();
        let mut keymap = KeyMap::new(&mut layers, BehaviorConfig::default());

        keymap.set_action_at(0, 0, 0, k!(Z));
        assert_eq!(keymap.get_action_at(0, 0, 0), k!(Z));
        assert_eq!(
            keymap.get_action_at(0, 0, 0).to_action(),
            Action::Key(KeyCode::Hid(HidKeyCode::Z))
        );
        keymap.set_action_at(4, 0, 0, k!(Z));
        assert_eq!(keymap.get_keymap_config(), (1, 2, 3));
    }

    #[test]
    fn test_behavior_tables() {
        let mut layers = keymap_layers();
        let mut tap_dances = TapDancesConfig::default();
        tap_dances
            .tap_dances
            .push(TapDance::tap_or_double(k!(Q), k!(Escape)))
            .unwrap();
        let mut combos = CombosConfig::default();
        combos.combos.push(Combo::new([k!(A), k!(B)], k!(Tab), None)).unwrap();
        combos
            .combos
            .push(Combo::new([k!(A), k!(B), k!(C)], k!(Enter), None))
            .unwrap();
        let behavior = BehaviorConfig {
            tap_dance: tap_dances,
            combo: combos,
        };
        let keymap = KeyMap::new(&mut layers, behavior);

        assert_eq!(keymap.get_tap_dance(0).map(|td| td.double_tap), Some(k!(Escape)));
        assert!(keymap.get_tap_dance(1).is_none());
        let outputs: heapless::Vec<KeyAction, 4> = keymap.combos().map(|c| c.output).collect();
        assert_eq!(outputs.as_slice(), &[k!(Enter), k!(Tab)]);
    }
}
