use futures::{FutureExt, StreamExt};
use futures_signals::signal::Mutable;
use web_time::Duration;

/// How often [`Notifications::pump`] ages the displayed notifications
pub const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Info,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Warning,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Warning,
    Error,
}

/// Transient notifications currently on screen, each with its remaining display time.
#[derive(Clone)]
pub struct Notifications {
    lifetime: Duration,
    items: Mutable<Vec<(Duration, Notification)>>,
}

impl Notifications {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            items: Mutable::new(Vec::new()),
        }
    }

    /// Observable list of active notifications, for binding to a view
    pub fn items(&self) -> &Mutable<Vec<(Duration, Notification)>> {
        &self.items
    }

    pub fn active(&self) -> Vec<Notification> {
        self.items.lock_ref().iter().map(|(_, v)| v.clone()).collect()
    }

    pub fn push(&self, notification: Notification) {
        self.items.lock_mut().push((self.lifetime, notification));
    }

    /// Age every notification by `elapsed` and drop the expired ones
    pub fn tick(&self, elapsed: Duration) {
        let items = &mut *self.items.lock_mut();
        items.retain_mut(|(remaining, _)| {
            *remaining = remaining.saturating_sub(elapsed);
            !remaining.is_zero()
        });
    }

    /// Feed notifications from `rx` into the display list until every sender is dropped.
    pub async fn pump(&self, rx: flume::Receiver<Notification>) {
        let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + TICK, TICK);

        let stream = rx.into_stream().fuse();
        futures::pin_mut!(stream);

        loop {
            futures::select! {
                _ = interval.tick().fuse() => self.tick(TICK),
                notification = stream.next() => match notification {
                    Some(notification) => self.push(notification),
                    None => break,
                },
            }
        }
    }
}
