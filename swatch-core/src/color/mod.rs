use std::fmt;

use palette::{encoding, Clamp, Darken, IntoColor, Lighten, Srgb};
use serde::{Deserialize, Serialize};

pub mod parse;

pub use parse::{parse_color, ColorError, ParseFailure};

/// HSL over the sRGB primaries.
///
/// `saturation` and `lightness` are in `[0, 1]`.
pub type Hsl = palette::Hsl<encoding::Srgb, f64>;

/// An opaque 8-bit sRGB color.
///
/// Colors are plain values: every operation returns a new color and equality is by channel
/// value, so `#3498db`, `#3498DB` and `rgb(52, 152, 219)` all compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_array([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }

    /// Construct from a packed `0xRRGGBB` value
    pub const fn from_u32(v: u32) -> Self {
        Self {
            r: (v >> 16) as u8,
            g: (v >> 8) as u8,
            b: v as u8,
        }
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub const fn red(self) -> u8 {
        self.r
    }

    pub const fn green(self) -> u8 {
        self.g
    }

    pub const fn blue(self) -> u8 {
        self.b
    }

    /// The canonical `#RRGGBB` form of the color
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        let rgb: Srgb<f64> = Srgb::<u8>::from(self).into_format();
        rgb.into_color()
    }

    /// Quantize `hsl` to the nearest 8-bit color
    pub fn from_hsl(hsl: Hsl) -> Self {
        let rgb: Srgb<f64> = hsl.into_color();
        rgb.into_format::<u8>().into()
    }

    /// HSL lightness in `[0, 1]`
    pub fn lightness(self) -> f64 {
        self.to_hsl().lightness
    }

    /// Reduce the HSL lightness by `amount` percentage points, keeping hue and saturation.
    ///
    /// The result is clamped at black.
    pub fn darken(self, amount: f32) -> Self {
        if amount == 0.0 {
            return self;
        }

        Self::from_hsl(self.to_hsl().darken_fixed(amount as f64 / 100.0).clamp())
    }

    /// Increase the HSL lightness by `amount` percentage points, keeping hue and saturation.
    ///
    /// The result is clamped at white.
    pub fn lighten(self, amount: f32) -> Self {
        if amount == 0.0 {
            return self;
        }

        Self::from_hsl(self.to_hsl().lighten_fixed(amount as f64 / 100.0).clamp())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        Self::from_array(value)
    }
}

impl From<Srgb<u8>> for Color {
    fn from(value: Srgb<u8>) -> Self {
        Self::rgb(value.red, value.green, value.blue)
    }
}

impl From<Color> for Srgb<u8> {
    fn from(value: Color) -> Self {
        Srgb::new(value.r, value.g, value.b)
    }
}

impl From<Color> for Srgb {
    fn from(value: Color) -> Self {
        Srgb::<u8>::from(value).into_format()
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Color, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_color(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use more_asserts::{assert_gt, assert_lt};

    use super::*;

    #[test]
    fn hex_is_uppercase_and_padded() {
        assert_eq!(Color::rgb(0x34, 0x98, 0xdb).to_hex(), "#3498DB");
        assert_eq!(Color::rgb(1, 2, 3).to_string(), "#010203");
        assert_eq!(Color::from_u32(0x0a0b0c), Color::rgb(10, 11, 12));
    }

    #[test]
    fn darken_and_lighten_move_lightness() {
        let color = Color::rgb(0x34, 0x98, 0xdb);

        assert_lt!(color.darken(20.0).lightness(), color.lightness());
        assert_gt!(color.lighten(20.0).lightness(), color.lightness());
        assert_eq!(color.darken(0.0), color);
        assert_eq!(color.lighten(0.0), color);
    }

    #[test]
    fn shifts_clamp_at_extremes() {
        assert_eq!(Color::BLACK.darken(40.0), Color::BLACK);
        assert_eq!(Color::WHITE.lighten(40.0), Color::WHITE);
        assert_eq!(Color::rgb(0x34, 0x98, 0xdb).darken(100.0), Color::BLACK);
        assert_eq!(Color::rgb(0x34, 0x98, 0xdb).lighten(100.0), Color::WHITE);
    }

    #[test]
    fn grays_stay_gray() {
        let gray = Color::rgb(0x80, 0x80, 0x80);
        assert_eq!(gray.darken(20.0), Color::rgb(0x4d, 0x4d, 0x4d));
        assert_eq!(gray.lighten(20.0), Color::rgb(0xb3, 0xb3, 0xb3));
    }

    #[test]
    fn primaries() {
        let red = Color::rgb(255, 0, 0).to_hsl();
        assert_eq!(red.hue.into_positive_degrees(), 0.0);
        assert_eq!((red.saturation, red.lightness), (1.0, 0.5));

        let blue = Color::rgb(0, 0, 255).to_hsl();
        assert_eq!(blue.hue.into_positive_degrees(), 240.0);

        assert_eq!(Color::from_hsl(Hsl::new(120.0, 1.0, 0.25)), Color::rgb(0, 128, 0));
        assert_eq!(Color::from_hsl(Hsl::new(0.0, 1.0, 0.5)), Color::rgb(255, 0, 0));
    }

    #[test]
    fn achromatic_has_no_saturation() {
        for v in [0, 1, 127, 128, 254, 255] {
            assert_eq!(Color::rgb(v, v, v).to_hsl().saturation, 0.0);
        }
    }

    #[test]
    fn hsl_round_trips() {
        for v in 0..=255 {
            let gray = Color::rgb(v, v, v);
            assert_eq!(Color::from_hsl(gray.to_hsl()), gray);
        }

        for v in [0x3498db, 0xa52a2a, 0xffc0cb, 0x123456] {
            let color = Color::from_u32(v);
            assert_eq!(Color::from_hsl(color.to_hsl()), color);
        }

        for r in (0..=255).step_by(17) {
            for g in (0..=255).step_by(51) {
                for b in (0..=255).step_by(85) {
                    let color = Color::rgb(r, g, b);
                    assert_eq!(Color::from_hsl(color.to_hsl()), color);
                }
            }
        }
    }

    #[test]
    fn palette_interop() {
        let color = Color::rgb(0x34, 0x98, 0xdb);
        let srgb: Srgb<u8> = color.into();
        assert_eq!((srgb.red, srgb.green, srgb.blue), (0x34, 0x98, 0xdb));
        assert_eq!(Color::from(srgb), color);
    }

    #[test]
    fn serde_uses_hex() {
        let color = Color::rgb(0x34, 0x98, 0xdb);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#3498DB\"");

        let parsed: Color = serde_json::from_str("\"#3498db\"").unwrap();
        assert_eq!(parsed, color);

        assert!(serde_json::from_str::<Color>("\"not-a-color\"").is_err());
    }
}
