//! Default keymap of the xylem38.
//!
//! The matrix is 4x10. The thumb row has 8 keys, its last two columns are unused.
//! Layers above 3 are transparent and left for Vial to fill in.

use crate::config::NUM_LAYER;
use crate::types::action::KeyAction;
use crate::types::modifier::ModifierCombination;
use crate::{a, k, layer, lt, macro_key, mt, shifted, td, user, wm};

pub const ROW: usize = 4;
pub const COL: usize = 10;

const LSFT: ModifierCombination = ModifierCombination::LSHIFT;
const LALT: ModifierCombination = ModifierCombination::LALT;
const LCTL: ModifierCombination = ModifierCombination::LCTRL;
const LGUI: ModifierCombination = ModifierCombination::LGUI;

/// Row and column of the scroll hold key on layer 1
pub const SCROLL_HOLD_POS: (u8, u8) = (1, 8);

const LAYER_ALPHA: [[KeyAction; COL]; ROW] = layer!([
    [td!(1), k!(W), k!(E), k!(R), k!(T), k!(Y), k!(U), k!(I), k!(O), k!(P)],
    [k!(A), k!(S), k!(D), lt!(2, F), k!(G), k!(H), k!(J), k!(K), td!(4), td!(0)],
    [mt!(Z, LGUI), mt!(X, LSFT), k!(C), k!(V), k!(B), k!(N), k!(M), k!(Comma), mt!(Dot, LSFT), mt!(Minus, LGUI)],
    [lt!(1, No), mt!(International5, LALT), mt!(Grave, LCTL), lt!(3, Space), lt!(2, Backspace), k!(A), k!(A), k!(A), a!(No), a!(No)]
]);

const LAYER_FUNCTION: [[KeyAction; COL]; ROW] = layer!([
    [td!(1), k!(F2), k!(F3), k!(F4), k!(F5), wm!(Z, LCTL), wm!(X, LCTL), wm!(C, LCTL), wm!(V, LCTL), macro_key!(0)],
    [k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), k!(Escape), k!(MouseBtn1), k!(MouseBtn2), user!(0), td!(3)],
    [k!(LGui), k!(LShift), k!(C), k!(V), k!(B), td!(2), a!(No), a!(No), k!(LShift), k!(Delete)],
    [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(A), k!(A), k!(A), a!(No), a!(No)]
]);

const LAYER_SYMBOL: [[KeyAction; COL]; ROW] = layer!([
    [shifted!(Equal), k!(LeftBracket), shifted!(Kc3), shifted!(Kc4), shifted!(Kc5), k!(Equal), shifted!(Kc6), shifted!(LeftBracket), k!(International3), shifted!(International3)],
    [shifted!(Kc1), shifted!(RightBracket), shifted!(NonusHash), shifted!(Kc8), shifted!(Kc9), k!(Left), k!(Down), k!(Up), k!(Right), td!(0)],
    [shifted!(Slash), mt!(RightBracket, LSFT), k!(NonusHash), a!(No), a!(No), k!(Home), k!(PageDown), k!(PageUp), k!(End), k!(Delete)],
    [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(A), k!(A), k!(A), a!(No), a!(No)]
]);

const LAYER_NUMBER: [[KeyAction; COL]; ROW] = layer!([
    [k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0)],
    [shifted!(Kc7), k!(Quote), shifted!(Minus), k!(Minus), k!(Slash), k!(Backspace), k!(Kc4), k!(Kc5), k!(Kc6), td!(0)],
    [shifted!(Kc2), k!(Semicolon), shifted!(International1), shifted!(Semicolon), shifted!(Quote), k!(Kc0), k!(Kc1), k!(Kc2), k!(Kc3), k!(Dot)],
    [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(Delete), k!(A), k!(A), k!(A), a!(No), a!(No)]
]);

/// The default keymap, `NUM_LAYER` layers
pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    let mut keymap = [[[KeyAction::Transparent; COL]; ROW]; NUM_LAYER];
    keymap[0] = LAYER_ALPHA;
    keymap[1] = LAYER_FUNCTION;
    keymap[2] = LAYER_SYMBOL;
    keymap[3] = LAYER_NUMBER;
    keymap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::ScrollKey;

    #[test]
    fn test_scroll_hold_key_position() {
        let keymap = get_default_keymap();
        let (row, col) = SCROLL_HOLD_POS;
        let action = keymap[1][row as usize][col as usize];
        let keycode = action.keycode().unwrap();
        assert_eq!(keycode.to_qmk(), 0x7E40);
        assert_eq!(ScrollKey::from_keycode(keycode), Some(ScrollKey::Hold));
    }

    #[test]
    fn test_extra_layers_are_transparent() {
        let keymap = get_default_keymap();
        for layer in keymap.iter().skip(4) {
            assert!(layer.iter().flatten().all(|a| *a == KeyAction::Transparent));
        }
    }

    #[test]
    fn test_thumb_row_padding() {
        let keymap = get_default_keymap();
        for layer in keymap.iter().take(4) {
            assert_eq!(layer[3][8], KeyAction::No);
            assert_eq!(layer[3][9], KeyAction::No);
        }
    }

    #[test]
    fn test_layer_one_is_reachable_from_thumb() {
        use crate::types::action::Action;

        let keymap = get_default_keymap();
        match keymap[0][3][0] {
            KeyAction::TapHold(_, hold) => assert_eq!(hold, Action::LayerOn(1)),
            other => panic!("unexpected action {:?}", other),
        }
    }
}
