//! Tile colors. Any value outside the table falls back to the empty color.

use crossterm::style::Color;
use twenty48_engine::engine::Tile;

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

pub const BOARD: Color = rgb(0xbb, 0xad, 0xa0);
pub const EMPTY: Color = rgb(0xcd, 0xc1, 0xb4);
const DARK_TEXT: Color = rgb(0x77, 0x6e, 0x65);
const LIGHT_TEXT: Color = rgb(0xff, 0xff, 0xff);

pub fn background(value: Tile) -> Color {
    match value {
        2 => rgb(0xee, 0xe4, 0xda),
        4 => rgb(0xed, 0xe0, 0xc8),
        8 => rgb(0xf2, 0xb1, 0x79),
        16 => rgb(0xf5, 0x95, 0x63),
        32 => rgb(0xf6, 0x7c, 0x5f),
        64 => rgb(0xf6, 0x5e, 0x3b),
        128 => rgb(0xed, 0xcf, 0x72),
        256 => rgb(0xed, 0xcc, 0x61),
        512 => rgb(0xed, 0xc8, 0x50),
        1024 => rgb(0xed, 0xc5, 0x3f),
        2048 => rgb(0xed, 0xc2, 0x2e),
        _ => EMPTY,
    }
}

/// Dark text on the two pale tiles, white everywhere else.
pub fn foreground(value: Tile) -> Color {
    if matches!(value, 2 | 4) {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

pub fn label(value: Tile) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}
