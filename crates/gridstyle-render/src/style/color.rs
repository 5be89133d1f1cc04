//! Color value parsing for theme files.
//!
//! Supports multiple color formats:
//!
//! - Named colors: `red`, `green`, `blue`, etc. (8 ANSI colors, plus `gray`)
//! - Bright variants: `bright_red`, `bright_green`, etc.
//! - 256-color palette: `0` through `255`
//! - RGB hex: `"#ff6b35"` or `"#fff"` (3 or 6 digit)
//! - RGB tuple: `[255, 107, 53]`
//!
//! # Example
//!
//! ```rust
//! use gridstyle_render::style::ColorDef;
//!
//! let red = ColorDef::parse_value(&serde_yaml::Value::String("red".into())).unwrap();
//! let hex = ColorDef::parse_string("#ff6b35").unwrap();
//! let indexed = ColorDef::parse_value(&serde_yaml::Value::Number(208.into())).unwrap();
//! assert_eq!(hex, ColorDef::Rgb(255, 107, 53));
//! assert_eq!(indexed, ColorDef::Color256(208));
//! # let _ = red;
//! ```

use console::Color;

/// Parsed color definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorDef {
    /// Named ANSI color.
    Named(Color),
    /// 256-color palette index.
    Color256(u8),
    /// RGB, downsampled to the 256-color cube on output.
    Rgb(u8, u8, u8),
}

impl ColorDef {
    /// Parses a color definition from a YAML value.
    pub fn parse_value(value: &serde_yaml::Value) -> Result<Self, String> {
        match value {
            serde_yaml::Value::String(s) => Self::parse_string(s),
            serde_yaml::Value::Number(n) => {
                let index = n
                    .as_u64()
                    .ok_or_else(|| format!("invalid color palette index: {}", n))?;
                if index > 255 {
                    return Err(format!(
                        "color palette index {} out of range (0-255)",
                        index
                    ));
                }
                Ok(ColorDef::Color256(index as u8))
            }
            serde_yaml::Value::Sequence(seq) => Self::parse_rgb_tuple(seq),
            _ => Err(format!("invalid color value: {:?}", value)),
        }
    }

    /// Parses a color from a string: a name, `bright_<name>`, a hex code, or
    /// a palette index written as text.
    pub fn parse_string(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if let Ok(index) = s.parse::<u8>() {
            return Ok(ColorDef::Color256(index));
        }

        Self::parse_named(s)
    }

    fn parse_hex(hex: &str) -> Result<Self, String> {
        let digit = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(|| format!("invalid hex color: #{}", hex))
        };
        match hex.len() {
            // #rgb -> #rrggbb
            3 => Ok(ColorDef::Rgb(
                digit(0..1)? * 17,
                digit(1..2)? * 17,
                digit(2..3)? * 17,
            )),
            6 => Ok(ColorDef::Rgb(digit(0..2)?, digit(2..4)?, digit(4..6)?)),
            _ => Err(format!(
                "invalid hex color: #{} (must be 3 or 6 digits)",
                hex
            )),
        }
    }

    fn parse_named(name: &str) -> Result<Self, String> {
        let name_lower = name.to_lowercase();

        if let Some(base) = name_lower.strip_prefix("bright_") {
            return Self::parse_bright_color(base);
        }

        let color = match name_lower.as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "gray" | "grey" => Color::White,
            _ => return Err(format!("unknown color name: {}", name)),
        };

        Ok(ColorDef::Named(color))
    }

    fn parse_bright_color(base: &str) -> Result<Self, String> {
        // console exposes bright colors as palette indices 8-15
        let index = match base {
            "black" => 8,
            "red" => 9,
            "green" => 10,
            "yellow" => 11,
            "blue" => 12,
            "magenta" => 13,
            "cyan" => 14,
            "white" => 15,
            _ => return Err(format!("unknown bright color: bright_{}", base)),
        };

        Ok(ColorDef::Color256(index))
    }

    fn parse_rgb_tuple(seq: &[serde_yaml::Value]) -> Result<Self, String> {
        if seq.len() != 3 {
            return Err(format!(
                "RGB tuple must have exactly 3 values, got {}",
                seq.len()
            ));
        }

        let mut components = [0u8; 3];
        for (i, val) in seq.iter().enumerate() {
            let n = val
                .as_u64()
                .ok_or_else(|| format!("RGB component {} is not a number", i))?;
            if n > 255 {
                return Err(format!("RGB component {} out of range (0-255): {}", i, n));
            }
            components[i] = n as u8;
        }

        Ok(ColorDef::Rgb(components[0], components[1], components[2]))
    }

    /// Converts this color definition to a `console::Color`.
    pub fn to_console_color(&self) -> Color {
        match self {
            ColorDef::Named(c) => *c,
            ColorDef::Color256(n) => Color::Color256(*n),
            ColorDef::Rgb(r, g, b) => Color::Color256(rgb_to_ansi256((*r, *g, *b))),
        }
    }
}

/// Maps an RGB triple onto the nearest xterm 256-color index.
///
/// Grays use the 24-step grayscale ramp; everything else the 6x6x6 cube.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}
