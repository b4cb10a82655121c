use crate::core::ConfigValue;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Accepts `#RGB`, `#RRGGBB` and `#RRGGBBAA`, with or without the `#`.
    pub fn parse_hex(input: &str) -> Option<Self> {
        let hex = input.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();

        match hex.len() {
            3 => {
                let short = |i: usize| channel(i..i + 1).map(|v| v * 17);
                Some(Self::rgba(short(0)?, short(1)?, short(2)?, 255))
            }
            6 => Some(Self::rgba(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255)),
            8 => Some(Self::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

/// A color with an optional dark-appearance variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynamicColor {
    pub light: Color,
    pub dark: Option<Color>,
}

impl DynamicColor {
    /// Either a plain hex string or a `{light, dark}` map.
    pub fn from_config(value: &ConfigValue) -> Option<Self> {
        if let Some(hex) = value.as_str() {
            return Some(Self {
                light: Color::parse_hex(hex)?,
                dark: None,
            });
        }

        let light = Color::parse_hex(value.get("light")?.as_str()?)?;
        let dark = match value.get("dark") {
            Some(dark) => Some(Color::parse_hex(dark.as_str()?)?),
            None => None,
        };
        Some(Self { light, dark })
    }

    pub fn resolve(&self, appearance: Appearance) -> Color {
        match appearance {
            Appearance::Light => self.light,
            Appearance::Dark => self.dark.unwrap_or(self.light),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Appearance, Color, DynamicColor};
    use crate::core::ConfigValue;

    #[test]
    fn parses_hex_forms() {
        assert_eq!(Color::parse_hex("#fff"), Some(Color::rgba(255, 255, 255, 255)));
        assert_eq!(Color::parse_hex("#102030"), Some(Color::rgba(16, 32, 48, 255)));
        assert_eq!(Color::parse_hex("10203080"), Some(Color::rgba(16, 32, 48, 128)));
        assert_eq!(Color::parse_hex("#12345"), None);
        assert_eq!(Color::parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn displays_as_hex() {
        assert_eq!(Color::rgba(0, 0, 0, 153).to_string(), "#00000099");
        assert_eq!(Color::rgba(255, 0, 16, 255).to_string(), "#FF0010");
    }

    #[test]
    fn dynamic_color_resolves_per_appearance() {
        let value: ConfigValue =
            serde_json::from_str(r##"{"light":"#000000","dark":"#ffffff"}"##).expect("color");
        let color = DynamicColor::from_config(&value).expect("dynamic color");
        assert_eq!(color.resolve(Appearance::Light), Color::rgba(0, 0, 0, 255));
        assert_eq!(color.resolve(Appearance::Dark), Color::rgba(255, 255, 255, 255));

        let plain = DynamicColor::from_config(&ConfigValue::from("#abc")).expect("plain color");
        assert_eq!(plain.resolve(Appearance::Dark), plain.light);
    }
}
