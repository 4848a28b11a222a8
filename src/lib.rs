//! Headless palette view: a controller a UI binds to, plus the clipboard and notification
//! collaborators it talks to.
//!
//! The color math lives in [`core`].
pub use futures_signals;
pub use swatch_core as core;
pub use web_time;

mod config;
mod controller;
pub mod io;
pub mod notify;
pub mod state;

pub use config::Config;
pub use controller::PaletteController;
pub use state::{Action, PaletteState};
