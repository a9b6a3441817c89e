use serde::{Deserialize, Serialize};
use strum::FromRepr;

use crate::modifier::ModifierCombination;

/// First keycode of the QMK/Vial user range (`QK_USER_0`, also `SAFE_RANGE`)
pub const QMK_USER_RANGE_START: u16 = 0x7E40;
/// Number of user keycodes
pub const QMK_USER_RANGE_SIZE: u16 = 0x40;

/// Key codes defined in the HID usage tables that this keyboard uses,
/// plus the mouse button codes in the 0xD1.. range.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidKeyCode {
    /// Reserved, no-key.
    No = 0x00,
    /// `a` and `A`
    A = 0x04,
    B = 0x05,
    C = 0x06,
    D = 0x07,
    E = 0x08,
    F = 0x09,
    G = 0x0A,
    H = 0x0B,
    I = 0x0C,
    J = 0x0D,
    K = 0x0E,
    L = 0x0F,
    M = 0x10,
    N = 0x11,
    O = 0x12,
    P = 0x13,
    Q = 0x14,
    R = 0x15,
    S = 0x16,
    T = 0x17,
    U = 0x18,
    V = 0x19,
    W = 0x1A,
    X = 0x1B,
    Y = 0x1C,
    /// `z` and `Z`
    Z = 0x1D,
    /// `1` and `!`
    Kc1 = 0x1E,
    /// `2` and `@`
    Kc2 = 0x1F,
    /// `3` and `#`
    Kc3 = 0x20,
    /// `4` and `$`
    Kc4 = 0x21,
    /// `5` and `%`
    Kc5 = 0x22,
    /// `6` and `^`
    Kc6 = 0x23,
    /// `7` and `&`
    Kc7 = 0x24,
    /// `8` and `*`
    Kc8 = 0x25,
    /// `9` and `(`
    Kc9 = 0x26,
    /// `0` and `)`
    Kc0 = 0x27,
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    /// `-` and `_`
    Minus = 0x2D,
    /// `=` and `+`
    Equal = 0x2E,
    /// `[` and `{`
    LeftBracket = 0x2F,
    /// `]` and `}`
    RightBracket = 0x30,
    /// `\` and `|`
    Backslash = 0x31,
    /// Non-US `#` and `~`
    NonusHash = 0x32,
    /// `;` and `:`
    Semicolon = 0x33,
    /// `'` and `"`
    Quote = 0x34,
    /// `` ` `` and `~`
    Grave = 0x35,
    /// `,` and `<`
    Comma = 0x36,
    /// `.` and `>`
    Dot = 0x37,
    /// `/` and `?`
    Slash = 0x38,
    CapsLock = 0x39,
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    Right = 0x4F,
    Left = 0x50,
    Down = 0x51,
    Up = 0x52,
    /// JIS `\` and `_`
    International1 = 0x87,
    /// JIS Katakana/Hiragana
    International2 = 0x88,
    /// JIS `¥` and `|`
    International3 = 0x89,
    /// JIS Henkan
    International4 = 0x8A,
    /// JIS Muhenkan
    International5 = 0x8B,
    MouseBtn1 = 0xD1,
    MouseBtn2 = 0xD2,
    MouseBtn3 = 0xD3,
    LCtrl = 0xE0,
    LShift = 0xE1,
    LAlt = 0xE2,
    LGui = 0xE3,
    RCtrl = 0xE4,
    RShift = 0xE5,
    RAlt = 0xE6,
    RGui = 0xE7,
}

impl HidKeyCode {
    pub fn is_modifier(self) -> bool {
        HidKeyCode::LCtrl <= self && self <= HidKeyCode::RGui
    }

    pub fn is_mouse_button(self) -> bool {
        HidKeyCode::MouseBtn1 <= self && self <= HidKeyCode::MouseBtn3
    }

    pub fn to_hid_modifiers(self) -> ModifierCombination {
        match self {
            HidKeyCode::LCtrl => ModifierCombination::LCTRL,
            HidKeyCode::LShift => ModifierCombination::LSHIFT,
            HidKeyCode::LAlt => ModifierCombination::LALT,
            HidKeyCode::LGui => ModifierCombination::LGUI,
            HidKeyCode::RCtrl => ModifierCombination::RCTRL,
            HidKeyCode::RShift => ModifierCombination::RSHIFT,
            HidKeyCode::RAlt => ModifierCombination::RALT,
            HidKeyCode::RGui => ModifierCombination::RGUI,
            _ => ModifierCombination::new(),
        }
    }

    /// Convert an ASCII byte to the key that types it on a US layout.
    ///
    /// The bool is true when shift must be held. Returns `None` for bytes
    /// that have no key.
    pub fn from_ascii(ascii: u8) -> Option<(HidKeyCode, bool)> {
        let key = match ascii {
            b'a'..=b'z' => (Self::from_repr(ascii - b'a' + HidKeyCode::A as u8)?, false),
            b'A'..=b'Z' => (Self::from_repr(ascii - b'A' + HidKeyCode::A as u8)?, true),
            b'1'..=b'9' => (Self::from_repr(ascii - b'1' + HidKeyCode::Kc1 as u8)?, false),
            b'0' => (HidKeyCode::Kc0, false),
            b'!' => (HidKeyCode::Kc1, true),
            b'@' => (HidKeyCode::Kc2, true),
            b'#' => (HidKeyCode::Kc3, true),
            b'$' => (HidKeyCode::Kc4, true),
            b'%' => (HidKeyCode::Kc5, true),
            b'^' => (HidKeyCode::Kc6, true),
            b'&' => (HidKeyCode::Kc7, true),
            b'*' => (HidKeyCode::Kc8, true),
            b'(' => (HidKeyCode::Kc9, true),
            b')' => (HidKeyCode::Kc0, true),
            b'\n' => (HidKeyCode::Enter, false),
            b'\t' => (HidKeyCode::Tab, false),
            b'\x08' => (HidKeyCode::Backspace, false),
            b'\x1b' => (HidKeyCode::Escape, false),
            b' ' => (HidKeyCode::Space, false),
            b'-' => (HidKeyCode::Minus, false),
            b'_' => (HidKeyCode::Minus, true),
            b'=' => (HidKeyCode::Equal, false),
            b'+' => (HidKeyCode::Equal, true),
            b'[' => (HidKeyCode::LeftBracket, false),
            b'{' => (HidKeyCode::LeftBracket, true),
            b']' => (HidKeyCode::RightBracket, false),
            b'}' => (HidKeyCode::RightBracket, true),
            b'\\' => (HidKeyCode::Backslash, false),
            b'|' => (HidKeyCode::Backslash, true),
            b';' => (HidKeyCode::Semicolon, false),
            b':' => (HidKeyCode::Semicolon, true),
            b'\'' => (HidKeyCode::Quote, false),
            b'"' => (HidKeyCode::Quote, true),
            b'`' => (HidKeyCode::Grave, false),
            b'~' => (HidKeyCode::Grave, true),
            b',' => (HidKeyCode::Comma, false),
            b'<' => (HidKeyCode::Comma, true),
            b'.' => (HidKeyCode::Dot, false),
            b'>' => (HidKeyCode::Dot, true),
            b'/' => (HidKeyCode::Slash, false),
            b'?' => (HidKeyCode::Slash, true),
            _ => return None,
        };
        Some(key)
    }
}

impl From<u8> for HidKeyCode {
    fn from(value: u8) -> Self {
        Self::from_repr(value).unwrap_or(HidKeyCode::No)
    }
}

impl ::postcard::experimental::max_size::MaxSize for HidKeyCode {
    const POSTCARD_MAX_SIZE: usize = 1usize;
}

/// A keycode as stored in the keymap.
///
/// `User` keycodes have no default behavior; they exist for keymap code to intercept.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(postcard::experimental::max_size::MaxSize)]
pub enum KeyCode {
    Hid(HidKeyCode),
    User(u8),
}

impl KeyCode {
    /// The 16-bit QMK/Vial keycode
    pub fn to_qmk(self) -> u16 {
        match self {
            KeyCode::Hid(hid) => hid as u16,
            KeyCode::User(id) => QMK_USER_RANGE_START + id as u16,
        }
    }

    /// Parse a 16-bit QMK/Vial keycode, `None` if it is outside the supported ranges
    pub fn from_qmk(code: u16) -> Option<Self> {
        if code <= 0xFF {
            return HidKeyCode::from_repr(code as u8).map(KeyCode::Hid);
        }
        if (QMK_USER_RANGE_START..QMK_USER_RANGE_START + QMK_USER_RANGE_SIZE).contains(&code) {
            return Some(KeyCode::User((code - QMK_USER_RANGE_START) as u8));
        }
        None
    }
}

impl From<HidKeyCode> for KeyCode {
    fn from(value: HidKeyCode) -> Self {
        KeyCode::Hid(value)
    }
}
