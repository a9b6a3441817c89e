use std::path::{Path, PathBuf};
use std::{env, fs};

use const_gen::*;
use serde::Deserialize;

/// Number of entries in the scroll preset table
const NUM_SCROLL_PRESETS: usize = 5;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct KeyboardTomlConfig {
    keyboard: KeyboardInfo,
    vial: VialInfo,
    pointing: PointingInfo,
    scroll: ScrollInfo,
    constants: ConstantsInfo,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct KeyboardInfo {
    layers: usize,
    flash_size: usize,
}

impl Default for KeyboardInfo {
    fn default() -> Self {
        Self {
            layers: 6,
            flash_size: 1024 * 1024,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct VialInfo {
    keyboard_id: [u8; 8],
    tap_dance_entries: usize,
    combo_entries: usize,
}

impl Default for VialInfo {
    fn default() -> Self {
        Self {
            keyboard_id: [0; 8],
            tap_dance_entries: 8,
            combo_entries: 8,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct PointingInfo {
    cpi: u16,
    invert_x: bool,
    invert_y: bool,
}

impl Default for PointingInfo {
    fn default() -> Self {
        Self {
            cpi: 1200,
            invert_x: false,
            invert_y: false,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ScrollInfo {
    default_preset: usize,
}

impl Default for ScrollInfo {
    fn default() -> Self {
        Self { default_preset: 2 }
    }
}

/// Channel and buffer sizes
#[derive(Debug, Deserialize)]
#[serde(default)]
struct ConstantsInfo {
    event_channel_size: usize,
    report_channel_size: usize,
    text_channel_size: usize,
    text_buffer_size: usize,
    combo_max_length: usize,
}

impl Default for ConstantsInfo {
    fn default() -> Self {
        Self {
            event_channel_size: 16,
            report_channel_size: 16,
            text_channel_size: 2,
            text_buffer_size: 32,
            combo_max_length: 4,
        }
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=KEYBOARD_TOML_PATH");

    let toml_path = env::var("KEYBOARD_TOML_PATH").map(PathBuf::from).unwrap_or_else(|_| {
        Path::new(&env::var("CARGO_MANIFEST_DIR").unwrap()).join("keyboard.toml")
    });
    println!("cargo:rerun-if-changed={}", toml_path.display());

    let user_config_str = fs::read_to_string(&toml_path).unwrap_or_default();
    let user_toml: KeyboardTomlConfig =
        toml::from_str(&user_config_str).expect("Failed to parse keyboard.toml");

    validate(&user_toml);

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("constants.rs");
    fs::write(&dest_path, get_constants_str(&user_toml)).expect("Failed to write constants.rs file");
}

fn validate(config: &KeyboardTomlConfig) {
    // Layers 0..=3 are defined in `layout.rs`
    if config.keyboard.layers < 4 || config.keyboard.layers > 32 {
        panic!("keyboard.layers must be in 4..=32, got {}", config.keyboard.layers);
    }
    if config.scroll.default_preset >= NUM_SCROLL_PRESETS {
        panic!(
            "scroll.default_preset must be less than {}, got {}",
            NUM_SCROLL_PRESETS, config.scroll.default_preset
        );
    }
    let sizes = &config.constants;
    if [
        sizes.event_channel_size,
        sizes.report_channel_size,
        sizes.text_channel_size,
        sizes.text_buffer_size,
        sizes.combo_max_length,
    ]
    .contains(&0)
    {
        panic!("channel and buffer sizes must be non-zero");
    }
}

fn get_constants_str(config: &KeyboardTomlConfig) -> String {
    let constant_strs = vec![
        const_declaration!(pub NUM_LAYER = config.keyboard.layers),
        const_declaration!(pub FLASH_SIZE = config.keyboard.flash_size),
        const_declaration!(pub VIAL_KEYBOARD_ID = config.vial.keyboard_id),
        const_declaration!(pub TAP_DANCE_MAX_NUM = config.vial.tap_dance_entries),
        const_declaration!(pub COMBO_MAX_NUM = config.vial.combo_entries),
        const_declaration!(pub COMBO_MAX_LENGTH = config.constants.combo_max_length),
        const_declaration!(pub POINTING_CPI = config.pointing.cpi),
        const_declaration!(pub POINTING_INVERT_X = config.pointing.invert_x),
        const_declaration!(pub POINTING_INVERT_Y = config.pointing.invert_y),
        const_declaration!(pub SCROLL_DEFAULT_PRESET = config.scroll.default_preset),
        const_declaration!(pub EVENT_CHANNEL_SIZE = config.constants.event_channel_size),
        const_declaration!(pub REPORT_CHANNEL_SIZE = config.constants.report_channel_size),
        const_declaration!(pub TEXT_CHANNEL_SIZE = config.constants.text_channel_size),
        const_declaration!(pub TEXT_BUFFER_SIZE = config.constants.text_buffer_size),
    ];

    constant_strs
        .into_iter()
        .map(|s| "#[allow(clippy::redundant_static_lifetimes)]\n".to_owned() + s.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
