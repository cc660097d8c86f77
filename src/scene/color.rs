use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8Premul;

/// Straight-alpha RGBA8 color as written in scene descriptions.
///
/// Accepts `"#RGB"`, `"#RGBA"`, `"#RRGGBB"`, `"#RRGGBBAA"` (the `#` is optional) or a
/// `[r, g, b]` / `[r, g, b, a]` byte array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorDef {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha; 255 when the description leaves it out.
    pub a: u8,
}

impl ColorDef {
    /// Opaque white, the default for every color field.
    pub const WHITE: ColorDef = ColorDef::rgba(255, 255, 255, 255);

    /// Straight-alpha color from its components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Premultiplied form used by the widgets.
    pub fn to_rgba8_premul(self) -> Rgba8Premul {
        Rgba8Premul::from_straight_rgba(self.r, self.g, self.b, self.a)
    }

    /// Parse one of the hex forms, with or without the leading `#`.
    pub fn parse_hex(s: &str) -> Result<Self, String> {
        parse_hex(s)
    }
}

impl Default for ColorDef {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Serialize for ColorDef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        ))
    }
}

impl<'de> Deserialize<'de> for ColorDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Arr(v) => match v.as_slice() {
                &[r, g, b] => Ok(Self::rgba(r, g, b, 255)),
                &[r, g, b, a] => Ok(Self::rgba(r, g, b, a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

fn parse_hex(s: &str) -> Result<ColorDef, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.is_ascii() {
        return Err(format!("invalid hex color \"{s}\""));
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    // Short forms repeat each digit: "f80" is "ff8800".
    fn hex_nibble(digit: &str) -> Result<u8, String> {
        hex_byte(digit).map(|v| v * 17)
    }

    match s.len() {
        3 | 4 => {
            let r = hex_nibble(&s[0..1])?;
            let g = hex_nibble(&s[1..2])?;
            let b = hex_nibble(&s[2..3])?;
            let a = if s.len() == 4 {
                hex_nibble(&s[3..4])?
            } else {
                255
            };
            Ok(ColorDef::rgba(r, g, b, a))
        }
        6 | 8 => {
            let r = hex_byte(&s[0..2])?;
            let g = hex_byte(&s[2..4])?;
            let b = hex_byte(&s[4..6])?;
            let a = if s.len() == 8 {
                hex_byte(&s[6..8])?
            } else {
                255
            };
            Ok(ColorDef::rgba(r, g, b, a))
        }
        _ => Err("hex color must be #RGB, #RGBA, #RRGGBB or #RRGGBBAA".to_owned()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/color.rs"]
mod tests;
