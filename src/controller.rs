use std::sync::Arc;

use futures::Stream;
use futures_signals::signal::{Mutable, SignalExt};
use web_time::Duration;

use crate::{
    core::{Color, ColorError, NamedColor, Palette, Tone},
    io::{Clipboard, ClipboardError},
    notify::Notification,
    state::{Action, PaletteState},
    Config,
};

/// Owns the palette view state and performs the side effects a palette view needs.
///
/// A view renders [`PaletteController::state`] and calls back into the controller on user
/// input. All state changes go through [`PaletteState::reduce`].
pub struct PaletteController {
    state: Mutable<PaletteState>,
    clipboard: Arc<dyn Clipboard>,
    notify_tx: flume::Sender<Notification>,
    transition: Duration,
}

impl PaletteController {
    pub fn new(
        config: &Config,
        clipboard: Arc<dyn Clipboard>,
        notify_tx: flume::Sender<Notification>,
    ) -> Self {
        Self {
            state: Mutable::new(PaletteState::new(config.base_color)),
            clipboard,
            notify_tx,
            transition: config.transition(),
        }
    }

    pub fn state(&self) -> &Mutable<PaletteState> {
        &self.state
    }

    pub fn snapshot(&self) -> PaletteState {
        self.state.get_cloned()
    }

    /// Subscribe to state changes, starting with the current state
    pub fn stream(&self) -> impl Stream<Item = PaletteState> + 'static {
        self.state.signal_cloned().to_stream()
    }

    /// Subscribe to the displayed palette, skipping updates which leave it unchanged
    pub fn palette_stream(&self) -> impl Stream<Item = Palette> + 'static {
        self.state
            .signal_ref(|v| v.palette)
            .dedupe()
            .to_stream()
    }

    pub fn palette(&self) -> Palette {
        self.state.lock_ref().palette
    }

    pub fn base(&self) -> Color {
        self.state.lock_ref().base
    }

    pub fn label(&self) -> &'static str {
        self.state.lock_ref().label()
    }

    /// Apply `action` and return the resulting state
    pub fn dispatch(&self, action: Action) -> PaletteState {
        let mut state = self.state.lock_mut();
        let next = state.clone().reduce(&action);
        *state = next.clone();
        next
    }

    /// Set the base color from user input.
    ///
    /// On failure the current palette stays on display and a warning is shown.
    #[tracing::instrument(level = "info", skip(self))]
    pub fn set_base(&self, input: &str) -> Result<Palette, ColorError> {
        let state = self.dispatch(Action::SetBase(input.to_string()));

        match state.last_error {
            Some(err) => {
                tracing::warn!(%err, "rejected base color");
                self.notify(Notification::warning(format!("Invalid color: {input}")));
                Err(err)
            }
            None => {
                tracing::info!(base = %state.base, "base color changed");
                Ok(state.palette)
            }
        }
    }

    pub fn select_named(&self, named: &'static NamedColor) -> Palette {
        tracing::info!(name = named.name, "selected named color");
        self.dispatch(Action::SelectNamed(named)).palette
    }

    pub fn toggle_picker(&self) -> bool {
        self.dispatch(Action::TogglePicker).picker_open
    }

    pub fn regenerate(&self) -> Palette {
        self.dispatch(Action::Regenerate).palette
    }

    /// Wait out the display transition of the current generation, then mark it finished.
    ///
    /// Skipping this only leaves `generating` set; the palette contents are already final.
    pub async fn settle(&self) {
        let generation = self.state.lock_ref().generation;
        tokio::time::sleep(self.transition).await;
        self.dispatch(Action::TransitionFinished { generation });
    }

    /// Copy the swatch at `index` to the clipboard.
    ///
    /// Returns `None` if there is no swatch at `index`.
    pub fn copy(&self, index: usize) -> Option<Result<(), ClipboardError>> {
        match Tone::from_index(index) {
            Some(tone) => Some(self.copy_tone(tone)),
            None => {
                tracing::warn!(index, "no swatch to copy");
                None
            }
        }
    }

    #[tracing::instrument(level = "info", skip(self))]
    pub fn copy_tone(&self, tone: Tone) -> Result<(), ClipboardError> {
        let hex = self.palette().get(tone).to_hex();

        match self.clipboard.set_text(&hex) {
            Ok(()) => {
                tracing::info!(%hex, "copied swatch");
                self.notify(Notification::info(format!("Copied {hex} to clipboard!")));
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%hex, %err, "failed to copy swatch");
                self.notify(Notification::error(format!(
                    "Failed to copy {hex} to clipboard: {err}"
                )));
                Err(err)
            }
        }
    }

    fn notify(&self, notification: Notification) {
        if self.notify_tx.send(notification).is_err() {
            tracing::debug!("notification receiver dropped");
        }
    }
}
