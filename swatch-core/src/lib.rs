//! Color math for deriving shade and tint palettes.
//!
//! Everything in this crate is pure: no I/O, no shared state, and every function returns the
//! same output for the same input.
pub mod color;
pub mod named;
pub mod palette;

pub use color::{parse_color, Color, ColorError, Hsl, ParseFailure};
pub use named::{color_name, label_for, NamedColor, CATALOG, CUSTOM_COLOR_LABEL};
pub use self::palette::{derive_palette, derive_palette_str, Palette, Tone};
