//! Color name resolution
//!
//! Accepts single-letter base colors, a table of common named colors, the
//! `tab:` palette, `C0`..`C9` cycle references, hex strings and grayscale
//! intensity strings.

use crate::errors::ColorError;

/// Default property cycle (the `tab:` palette)
const TAB10: [(&str, u32); 10] = [
    ("blue", 0x1f77b4),
    ("orange", 0xff7f0e),
    ("green", 0x2ca02c),
    ("red", 0xd62728),
    ("purple", 0x9467bd),
    ("brown", 0x8c564b),
    ("pink", 0xe377c2),
    ("gray", 0x7f7f7f),
    ("olive", 0xbcbd22),
    ("cyan", 0x17becf),
];

/// Resolve a named or hex color token to RGBA
pub fn lookup_name(name: &str) -> Result<[f64; 4], ColorError> {
    let token = name.trim();
    if token.is_empty() {
        return Err(ColorError::invalid("empty color name"));
    }

    if let Some(hex) = token.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ColorError::invalid(format!("bad hex color {name:?}")));
    }

    if let Some(rgb) = base_color(token) {
        return Ok(opaque(rgb));
    }

    let lower = token.to_ascii_lowercase();

    if let Some(index) = cycle_index(token) {
        return Ok(opaque(TAB10[index % TAB10.len()].1));
    }

    if let Some(tab) = lower.strip_prefix("tab:") {
        let tab = if tab == "grey" { "gray" } else { tab };
        return TAB10
            .iter()
            .find(|(n, _)| *n == tab)
            .map(|(_, rgb)| opaque(*rgb))
            .ok_or_else(|| ColorError::unknown(name));
    }

    if let Some(rgb) = named_color(&lower) {
        return Ok(opaque(rgb));
    }

    // Grayscale intensity, e.g. "0.75"
    if let Ok(level) = token.parse::<f64>() {
        if (0.0..=1.0).contains(&level) {
            return Ok([level, level, level, 1.0]);
        }
        return Err(ColorError::invalid(format!(
            "grayscale value {name:?} outside [0, 1]"
        )));
    }

    Err(ColorError::unknown(name))
}

fn base_color(token: &str) -> Option<u32> {
    let rgb = match token {
        "b" => 0x0000ff,
        "g" => 0x008000,
        "r" => 0xff0000,
        "c" => 0x00bfbf,
        "m" => 0xbf00bf,
        "y" => 0xbfbf00,
        "k" => 0x000000,
        "w" => 0xffffff,
        _ => return None,
    };
    Some(rgb)
}

fn named_color(name: &str) -> Option<u32> {
    let rgb = match name {
        "black" => 0x000000,
        "white" => 0xffffff,
        "red" => 0xff0000,
        "green" => 0x008000,
        "lime" => 0x00ff00,
        "blue" => 0x0000ff,
        "navy" => 0x000080,
        "cyan" | "aqua" => 0x00ffff,
        "magenta" | "fuchsia" => 0xff00ff,
        "yellow" => 0xffff00,
        "orange" => 0xffa500,
        "purple" => 0x800080,
        "brown" => 0xa52a2a,
        "pink" => 0xffc0cb,
        "olive" => 0x808000,
        "teal" => 0x008080,
        "maroon" => 0x800000,
        "gold" => 0xffd700,
        "silver" => 0xc0c0c0,
        "gray" | "grey" => 0x808080,
        "darkgray" | "darkgrey" => 0xa9a9a9,
        "lightgray" | "lightgrey" => 0xd3d3d3,
        "dimgray" | "dimgrey" => 0x696969,
        "whitesmoke" => 0xf5f5f5,
        "steelblue" => 0x4682b4,
        "skyblue" => 0x87ceeb,
        "crimson" => 0xdc143c,
        "salmon" => 0xfa8072,
        "coral" => 0xff7f50,
        "tomato" => 0xff6347,
        "indigo" => 0x4b0082,
        "violet" => 0xee82ee,
        "turquoise" => 0x40e0d0,
        "darkgreen" => 0x006400,
        "darkblue" => 0x00008b,
        "darkred" => 0x8b0000,
        "darkorange" => 0xff8c00,
        _ => return None,
    };
    Some(rgb)
}

/// `C` followed by decimal digits, e.g. `C3`
fn cycle_index(token: &str) -> Option<usize> {
    let digits = token.strip_prefix('C')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn opaque(rgb: u32) -> [f64; 4] {
    [
        f64::from((rgb >> 16) & 0xff) / 255.0,
        f64::from((rgb >> 8) & 0xff) / 255.0,
        f64::from(rgb & 0xff) / 255.0,
        1.0,
    ]
}

fn parse_hex(hex: &str) -> Option<[f64; 4]> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let digits: Vec<u8> = match hex.len() {
        // Short forms repeat each nibble
        3 | 4 => hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| (d * 17) as u8))
            .collect::<Option<_>>()?,
        6 | 8 => (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
            .collect::<Option<_>>()?,
        _ => return None,
    };
    let channel = |i: usize| digits.get(i).map_or(1.0, |v| f64::from(*v) / 255.0);
    Some([channel(0), channel(1), channel(2), channel(3)])
}
