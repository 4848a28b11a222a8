use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::{parse_color, Color, ColorError};

/// Lightness offset of the outermost shade and tint, in percentage points
pub const OUTER_OFFSET: f32 = 40.0;
/// Lightness offset of the inner shade and tint, in percentage points
pub const INNER_OFFSET: f32 = 20.0;

/// A slot in a [`Palette`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tone {
    Darkest,
    Darker,
    Base,
    Lighter,
    Lightest,
}

impl Tone {
    /// Every tone, darkest first
    pub const ALL: [Tone; 5] = [
        Tone::Darkest,
        Tone::Darker,
        Tone::Base,
        Tone::Lighter,
        Tone::Lightest,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Signed lightness offset relative to the base
    pub fn offset(self) -> f32 {
        match self {
            Tone::Darkest => -OUTER_OFFSET,
            Tone::Darker => -INNER_OFFSET,
            Tone::Base => 0.0,
            Tone::Lighter => INNER_OFFSET,
            Tone::Lightest => OUTER_OFFSET,
        }
    }

    pub fn apply(self, base: Color) -> Color {
        match self {
            Tone::Darkest | Tone::Darker => base.darken(-self.offset()),
            Tone::Base => base,
            Tone::Lighter | Tone::Lightest => base.lighten(self.offset()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tone::Darkest => "darkest",
            Tone::Darker => "darker",
            Tone::Base => "base",
            Tone::Lighter => "lighter",
            Tone::Lightest => "lightest",
        }
    }
}

/// Two shades, the base color, and two tints, ordered from darkest to lightest.
///
/// A palette is replaced wholesale when the base changes and is never edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: [Color; 5],
}

impl Palette {
    pub const LEN: usize = 5;

    pub fn derive(base: Color) -> Self {
        let colors = Tone::ALL.map(|tone| tone.apply(base));
        tracing::debug!(%base, ?colors, "derived palette");
        Self { colors }
    }

    pub fn colors(&self) -> &[Color; 5] {
        &self.colors
    }

    pub fn get(&self, tone: Tone) -> Color {
        self.colors[tone.index()]
    }

    pub fn base(&self) -> Color {
        self.get(Tone::Base)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tone, Color)> + '_ {
        Tone::ALL.into_iter().zip(self.colors.iter().copied())
    }

    /// Canonical hex strings of every swatch, in order
    pub fn hex(&self) -> [String; 5] {
        self.colors.map(Color::to_hex)
    }
}

impl Index<usize> for Palette {
    type Output = Color;

    fn index(&self, index: usize) -> &Self::Output {
        &self.colors[index]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

/// Derive the darkest, darker, base, lighter and lightest variants of `base`
pub fn derive_palette(base: Color) -> Palette {
    Palette::derive(base)
}

/// Parse `input` and derive its palette
pub fn derive_palette_str(input: &str) -> Result<Palette, ColorError> {
    parse_color(input).map(Palette::derive)
}
