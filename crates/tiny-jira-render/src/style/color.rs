//! Color values in theme files.
//!
//! ```yaml
//! key: { fg: cyan }            # one of the eight ANSI names (grey = white)
//! status: { fg: bright_yellow } # bright variants, palette 8-15
//! date: { fg: 244 }            # palette index
//! title: { fg: "#1e90ff" }     # hex, 3 or 6 digits
//! muted: { fg: [128, 128, 128] } # rgb triple
//! ```
//!
//! Terminals are not assumed to do true color: RGB is reduced to the xterm
//! 256-color palette when converted.

use console::Color;

const NAMED: [(&str, Color); 8] = [
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("magenta", Color::Magenta),
    ("cyan", Color::Cyan),
    ("white", Color::White),
];

/// A color as written in a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorDef {
    Named(Color),
    Color256(u8),
    Rgb(u8, u8, u8),
}

impl ColorDef {
    /// Reads a YAML scalar or sequence.
    pub fn parse_value(value: &serde_yaml::Value) -> Result<Self, String> {
        use serde_yaml::Value;

        match value {
            Value::String(s) => Self::parse_string(s),
            Value::Number(n) => n
                .as_u64()
                .and_then(|i| u8::try_from(i).ok())
                .map(ColorDef::Color256)
                .ok_or_else(|| format!("palette index must be 0-255, got {n}")),
            Value::Sequence(items) => {
                let channels = items
                    .iter()
                    .map(|v| v.as_u64().and_then(|c| u8::try_from(c).ok()))
                    .collect::<Option<Vec<u8>>>()
                    .ok_or("rgb channels must be numbers in 0-255")?;
                match channels[..] {
                    [r, g, b] => Ok(ColorDef::Rgb(r, g, b)),
                    _ => Err(format!("rgb needs 3 channels, got {}", channels.len())),
                }
            }
            other => Err(format!("not a color: {other:?}")),
        }
    }

    /// Reads a color name or `#hex` string.
    pub fn parse_string(s: &str) -> Result<Self, String> {
        let s = s.trim();
        match s.strip_prefix('#') {
            Some(hex) => parse_hex(hex),
            None => parse_name(&s.to_ascii_lowercase()),
        }
    }

    pub fn to_console_color(&self) -> Color {
        match *self {
            ColorDef::Named(c) => c,
            ColorDef::Color256(i) => Color::Color256(i),
            ColorDef::Rgb(r, g, b) => Color::Color256(rgb_to_ansi256((r, g, b))),
        }
    }
}

fn parse_name(name: &str) -> Result<ColorDef, String> {
    let (bright, base) = match name.strip_prefix("bright_") {
        Some(base) => (true, base),
        None => (false, name),
    };
    let base = if base == "gray" || base == "grey" {
        "white"
    } else {
        base
    };

    let position = NAMED
        .iter()
        .position(|(n, _)| *n == base)
        .ok_or_else(|| format!("unknown color '{name}'"))?;
    if bright {
        Ok(ColorDef::Color256(position as u8 + 8))
    } else {
        Ok(ColorDef::Named(NAMED[position].1))
    }
}

fn parse_hex(hex: &str) -> Result<ColorDef, String> {
    let invalid = || format!("invalid hex color '#{hex}'");
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
    match hex.len() {
        3 => {
            let nibble = |shift: u32| ((value >> shift) & 0xf) as u8 * 17;
            Ok(ColorDef::Rgb(nibble(8), nibble(4), nibble(0)))
        }
        6 => {
            let byte = |shift: u32| ((value >> shift) & 0xff) as u8;
            Ok(ColorDef::Rgb(byte(16), byte(8), byte(0)))
        }
        _ => Err(invalid()),
    }
}

/// Nearest xterm 256-color index for an RGB triple.
///
/// Greys go to the 24-step grey ramp; everything else to the 6x6x6 cube.
///
/// ```rust
/// use tiny_jira_render::style::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        return match r {
            0..=7 => 16,
            239..=255 => 231,
            v => 232 + (v - 8) / 10,
        };
    }
    // Cube levels sit at 0, 95, 135, 175, 215, 255.
    let level = |v: u8| match v {
        0..=47 => 0,
        48..=114 => 1,
        v => (v - 35) / 40,
    };
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(ColorDef::parse_string("Cyan"), Ok(ColorDef::Named(Color::Cyan)));
        assert_eq!(ColorDef::parse_string(" red "), Ok(ColorDef::Named(Color::Red)));
        assert_eq!(ColorDef::parse_string("grey"), Ok(ColorDef::Named(Color::White)));
        assert!(ColorDef::parse_string("purple").is_err());
    }

    #[test]
    fn bright_names_map_to_upper_palette() {
        assert_eq!(ColorDef::parse_string("bright_black"), Ok(ColorDef::Color256(8)));
        assert_eq!(ColorDef::parse_string("bright_red"), Ok(ColorDef::Color256(9)));
        assert_eq!(ColorDef::parse_string("bright_white"), Ok(ColorDef::Color256(15)));
        assert!(ColorDef::parse_string("bright_purple").is_err());
    }

    #[test]
    fn hex_colors() {
        assert_eq!(ColorDef::parse_string("#1e90ff"), Ok(ColorDef::Rgb(30, 144, 255)));
        assert_eq!(ColorDef::parse_string("#f80"), Ok(ColorDef::Rgb(255, 136, 0)));
        assert!(ColorDef::parse_string("#ff").is_err());
        assert!(ColorDef::parse_string("#zzzzzz").is_err());
        assert!(ColorDef::parse_string("#é1").is_err());
    }

    #[test]
    fn numbers_and_triples() {
        assert_eq!(
            ColorDef::parse_value(&Value::Number(244.into())),
            Ok(ColorDef::Color256(244))
        );
        assert!(ColorDef::parse_value(&Value::Number(300.into())).is_err());

        let triple: Value = serde_yaml::from_str("[128, 64, 0]").unwrap();
        assert_eq!(ColorDef::parse_value(&triple), Ok(ColorDef::Rgb(128, 64, 0)));

        let short: Value = serde_yaml::from_str("[1, 2]").unwrap();
        assert!(ColorDef::parse_value(&short).is_err());
        let bad: Value = serde_yaml::from_str("[1, 2, 999]").unwrap();
        assert!(ColorDef::parse_value(&bad).is_err());
    }

    #[test]
    fn conversion_reduces_rgb() {
        assert_eq!(ColorDef::Named(Color::Blue).to_console_color(), Color::Blue);
        assert_eq!(ColorDef::Rgb(0, 0, 255).to_console_color(), Color::Color256(21));
    }

    #[test]
    fn grey_ramp() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        assert_eq!(rgb_to_ansi256((128, 128, 128)), 244);
    }
}
