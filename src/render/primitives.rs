use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DeckError, DeckResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serializes as a CSS color string: `#rrggbb` when opaque, otherwise
/// `rgba(r, g, b, a)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels and a normalized alpha.
    #[must_use]
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            alpha,
        )
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba8(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn validate(self) -> DeckResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(DeckError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let to_u8 = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        (to_u8(self.red), to_u8(self.green), to_u8(self.blue))
    }

    #[must_use]
    pub fn to_css(self) -> String {
        let (red, green, blue) = self.to_rgb8();
        if self.alpha >= 1.0 {
            format!("#{red:02x}{green:02x}{blue:02x}")
        } else {
            format!("rgba({red}, {green}, {blue}, {})", self.alpha)
        }
    }

    /// Parses `#rrggbb`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
    pub fn parse_css(input: &str) -> DeckResult<Self> {
        let raw = input.trim();
        let invalid = || DeckError::InvalidData(format!("unsupported css color `{input}`"));

        if let Some(hex) = raw.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(invalid());
            }
            let channel = |range: std::ops::Range<usize>| {
                u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
            };
            return Ok(Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?));
        }

        let (body, expected_parts) = if let Some(body) = raw.strip_prefix("rgba(") {
            (body, 4)
        } else if let Some(body) = raw.strip_prefix("rgb(") {
            (body, 3)
        } else {
            return Err(invalid());
        };
        let body = body.strip_suffix(')').ok_or_else(invalid)?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != expected_parts {
            return Err(invalid());
        }

        let channel = |part: &str| part.parse::<u8>().map_err(|_| invalid());
        let alpha = match parts.get(3) {
            Some(part) => part.parse::<f64>().map_err(|_| invalid())?,
            None => 1.0,
        };
        let color = Self::from_rgba8(
            channel(parts[0])?,
            channel(parts[1])?,
            channel(parts[2])?,
            alpha,
        );
        color.validate()?;
        Ok(color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Serializes as the `to_css` string. Color channels are quantized to 8 bits,
/// so only colors built from 8-bit channels round-trip exactly. Alpha is
/// written at full precision.
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse_css(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translucent_colors_render_as_rgba() {
        let color = Color::from_rgba8(37, 99, 235, 0.8);
        assert_eq!(color.to_css(), "rgba(37, 99, 235, 0.8)");
    }

    #[test]
    fn opaque_colors_render_as_hex() {
        assert_eq!(Color::from_rgb8(51, 65, 85).to_css(), "#334155");
    }

    #[test]
    fn parse_accepts_common_forms() {
        assert_eq!(
            Color::parse_css("#8b5cf6").expect("hex"),
            Color::from_rgb8(139, 92, 246)
        );
        assert_eq!(
            Color::parse_css("rgba(239, 68, 68, 0.7)").expect("rgba"),
            Color::from_rgba8(239, 68, 68, 0.7)
        );
        assert_eq!(
            Color::parse_css(" rgb(1, 2, 3) ").expect("rgb"),
            Color::from_rgb8(1, 2, 3)
        );
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for raw in ["", "#12345", "rgba(1, 2, 3)", "rgb(300, 0, 0)", "hsl(1, 2%, 3%)"] {
            assert!(Color::parse_css(raw).is_err(), "`{raw}` should be rejected");
        }
        assert!(Color::parse_css("rgba(1, 2, 3, 1.5)").is_err());
    }

    #[test]
    fn eight_bit_colors_roundtrip_through_serde() {
        let color = Color::from_rgba8(139, 92, 246, 0.35);
        let json = serde_json::to_string(&color).expect("serialize");
        let restored: Color = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, color);
    }

    #[test]
    fn fractional_channels_are_quantized_on_serialize() {
        let json = serde_json::to_string(&Color::rgb(0.5, 0.5, 0.5)).expect("serialize");
        assert_eq!(json, "\"#808080\"");
        let restored: Color = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, Color::from_rgb8(128, 128, 128));
    }
}
