use std::sync::Arc;

use anyhow::Context;
use itertools::Itertools;
use swatch::{
    core::{label_for, CATALOG},
    io::SystemClipboard,
    notify::Notifications,
    Config, PaletteController,
};
use tracing_subscriber::{layer::SubscriberExt, registry, util::SubscriberInitExt, EnvFilter};
use tracing_tree::HierarchicalLayer;

/// Usage: `palette [BASE_COLOR] [SWATCH_INDEX]`
///
/// Set `SWATCH_CONFIG` to a json file to override the defaults.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    registry()
        .with(
            HierarchicalLayer::default()
                .with_deferred_spans(true)
                .with_span_retrace(true)
                .with_indent_lines(true),
        )
        .with(EnvFilter::from_default_env())
        .init();

    let config = match std::env::var_os("SWATCH_CONFIG") {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let (notify_tx, notify_rx) = flume::unbounded();
    let notifications = Notifications::new(config.notification_lifetime());
    let pump = tokio::spawn({
        let notifications = notifications.clone();
        async move { notifications.pump(notify_rx).await }
    });

    let controller = PaletteController::new(&config, Arc::new(SystemClipboard::new()), notify_tx);

    let mut args = std::env::args().skip(1);
    if let Some(input) = args.next() {
        controller
            .set_base(&input)
            .with_context(|| format!("Unable to use {input:?} as a base color"))?;
    }

    controller.settle().await;

    let state = controller.snapshot();
    println!("{} ({})", state.base, label_for(state.base));
    println!(
        "{}",
        state
            .palette
            .iter()
            .map(|(tone, color)| format!("{}: {color}", tone.name()))
            .join("  ")
    );

    if let Some(index) = args.next() {
        let index: usize = index.parse().context("Swatch index must be a number")?;
        if controller.copy(index).is_none() {
            anyhow::bail!("Swatch index must be below {}", swatch::core::Palette::LEN);
        }
    }

    // Closes the channel, ending the pump
    drop(controller);
    pump.await.context("Notification pump panicked")?;

    for notification in notifications.active() {
        println!("{:?}: {}", notification.kind, notification.message);
    }

    println!(
        "Named colors: {}",
        CATALOG.iter().map(|v| format!("{} {}", v.name, v.color)).join(", ")
    );

    Ok(())
}
