use color_hex::color_from_hex;

use crate::Color;

/// Label shown for a color which has no entry in [`CATALOG`]
pub const CUSTOM_COLOR_LABEL: &str = "Custom Color";

/// A human readable name bound to a canonical color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamedColor {
    pub name: &'static str,
    pub color: Color,
}

impl NamedColor {
    pub const fn new(name: &'static str, color: Color) -> Self {
        Self { name, color }
    }

    /// Find a catalog entry by name, ignoring case
    pub fn by_name(name: &str) -> Option<&'static NamedColor> {
        let name = name.trim();
        CATALOG.iter().find(|v| v.name.eq_ignore_ascii_case(name))
    }
}

macro_rules! named {
    ($name:literal, $hex:literal) => {
        NamedColor::new($name, Color::from_array(color_from_hex!($hex)))
    };
}

/// The fixed list of colors offered by the picker, in display order
pub static CATALOG: [NamedColor; 10] = [
    named!("Red", "#FF0000"),
    named!("Blue", "#0000FF"),
    named!("Green", "#008000"),
    named!("Yellow", "#FFFF00"),
    named!("Purple", "#800080"),
    named!("Orange", "#FFA500"),
    named!("Pink", "#FFC0CB"),
    named!("Brown", "#A52A2A"),
    named!("Gray", "#808080"),
    named!("Black", "#000000"),
];

/// Returns the catalog name of `color` if it matches an entry exactly.
///
/// There is no nearest color matching.
pub fn color_name(color: Color) -> Option<&'static str> {
    CATALOG.iter().find(|v| v.color == color).map(|v| v.name)
}

/// The catalog name of `color`, or [`CUSTOM_COLOR_LABEL`]
pub fn label_for(color: Color) -> &'static str {
    color_name(color).unwrap_or(CUSTOM_COLOR_LABEL)
}
