//! Palette view state and the transitions between states.
//!
//! Every transition is a pure function of the previous state and an [`Action`], which keeps the
//! controller a thin owner of the current value.
use crate::core::{label_for, parse_color, Color, ColorError, NamedColor, Palette};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Raw text from a color input
    SetBase(String),
    /// A pick from the fixed catalog. Closes the picker.
    SelectNamed(&'static NamedColor),
    TogglePicker,
    /// Derive the palette of the current base again
    Regenerate,
    /// The display transition started by `generation` has completed
    TransitionFinished { generation: u64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaletteState {
    /// The text last entered, which may not be a valid color
    pub input: String,
    /// Last valid base color
    pub base: Color,
    pub palette: Palette,
    pub picker_open: bool,
    /// Set while the displayed palette is fading between generations
    pub generating: bool,
    pub generation: u64,
    pub last_error: Option<ColorError>,
}

impl PaletteState {
    pub fn new(base: Color) -> Self {
        Self {
            input: base.to_hex(),
            base,
            palette: Palette::derive(base),
            picker_open: false,
            generating: false,
            generation: 0,
            last_error: None,
        }
    }

    /// The catalog name of the base color, or "Custom Color"
    pub fn label(&self) -> &'static str {
        label_for(self.base)
    }

    pub fn reduce(self, action: &Action) -> Self {
        match action {
            Action::SetBase(input) => match parse_color(input) {
                Ok(base) => Self {
                    input: input.clone(),
                    ..self.regenerated(base)
                },
                Err(err) => Self {
                    input: input.clone(),
                    last_error: Some(err),
                    ..self
                },
            },
            Action::SelectNamed(named) => Self {
                input: named.color.to_hex(),
                picker_open: false,
                ..self.regenerated(named.color)
            },
            Action::TogglePicker => Self {
                picker_open: !self.picker_open,
                ..self
            },
            Action::Regenerate => {
                let base = self.base;
                Self {
                    last_error: self.last_error.clone(),
                    ..self.regenerated(base)
                }
            }
            &Action::TransitionFinished { generation } => Self {
                generating: self.generating && generation != self.generation,
                ..self
            },
        }
    }

    fn regenerated(self, base: Color) -> Self {
        Self {
            base,
            palette: Palette::derive(base),
            generating: true,
            generation: self.generation + 1,
            last_error: None,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ParseFailure, Tone, CATALOG, CUSTOM_COLOR_LABEL};

    fn initial() -> PaletteState {
        PaletteState::new(Color::rgb(0x34, 0x98, 0xdb))
    }

    #[test]
    fn set_base_regenerates() {
        let state = initial().reduce(&Action::SetBase("#FF0000".into()));

        assert_eq!(state.base, Color::rgb(255, 0, 0));
        assert_eq!(state.palette.get(Tone::Base), state.base);
        assert_eq!(state.palette.get(Tone::Darker).to_hex(), "#990000");
        assert_eq!(state.input, "#FF0000");
        assert_eq!(state.label(), "Red");
        assert!(state.generating);
        assert_eq!(state.generation, 1);
    }

    #[test]
    fn invalid_base_keeps_palette() {
        let before = initial();
        let state = before.clone().reduce(&Action::SetBase("not-a-color".into()));

        assert_eq!(state.palette, before.palette);
        assert_eq!(state.base, before.base);
        assert_eq!(state.generation, before.generation);
        assert_eq!(state.input, "not-a-color");
        assert_eq!(
            state.last_error.as_ref().map(|v| v.reason()),
            Some(ParseFailure::Unrecognized)
        );

        let state = state.reduce(&Action::SetBase("#123456".into()));
        assert_eq!(state.last_error, None);
        assert_eq!(state.label(), CUSTOM_COLOR_LABEL);
    }

    #[test]
    fn select_named_closes_picker() {
        let state = initial().reduce(&Action::TogglePicker);
        assert!(state.picker_open);

        let state = state.reduce(&Action::SelectNamed(&CATALOG[1]));
        assert!(!state.picker_open);
        assert_eq!(state.base, CATALOG[1].color);
        assert_eq!(state.input, "#0000FF");
        assert_eq!(state.label(), "Blue");
    }

    #[test]
    fn regenerate_is_stable() {
        let before = initial();
        let state = before.clone().reduce(&Action::Regenerate);

        assert_eq!(state.palette, before.palette);
        assert_eq!(state.generation, before.generation + 1);
        assert!(state.generating);
    }

    #[test]
    fn stale_transition_is_ignored() {
        let state = initial()
            .reduce(&Action::Regenerate)
            .reduce(&Action::Regenerate);
        assert_eq!(state.generation, 2);

        let state = state.reduce(&Action::TransitionFinished { generation: 1 });
        assert!(state.generating);

        let state = state.reduce(&Action::TransitionFinished { generation: 2 });
        assert!(!state.generating);
    }
}
