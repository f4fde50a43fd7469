//! Shutdown coordination for the demo server.
//!
//! # Responsibilities
//! - Hand out listeners to tasks that must stop together
//! - Fan a programmatic stop out to every listener
//! - Race that stop against OS signals for serving tasks
//!
//! # Design Decisions
//! - Dropping the coordinator counts as a stop
//! - Tests wait on [`ShutdownListener::stopped`] so a stray Ctrl+C cannot end them early

use tokio::sync::broadcast;

use crate::lifecycle::signals::shutdown_signal;

/// Fans a stop request out to every [`ShutdownListener`].
#[derive(Debug, Clone)]
pub struct Shutdown {
    notify: broadcast::Sender<()>,
}

/// One task's view of a [`Shutdown`].
#[derive(Debug)]
pub struct ShutdownListener {
    notified: broadcast::Receiver<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (notify, _) = broadcast::channel(1);
        Self { notify }
    }

    pub fn listener(&self) -> ShutdownListener {
        ShutdownListener {
            notified: self.notify.subscribe(),
        }
    }

    /// Ask every listener to stop. Returns how many were still listening.
    pub fn trigger(&self) -> usize {
        let notified = self.notify.send(()).unwrap_or(0);
        tracing::info!(listeners = notified, "Shutdown triggered");
        notified
    }

    pub fn listeners(&self) -> usize {
        self.notify.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownListener {
    /// Resolve on a trigger or once the coordinator is gone.
    pub async fn stopped(mut self) {
        // Lagged cannot happen with a single message; any result means stop.
        let _ = self.notified.recv().await;
    }

    /// Resolve on a trigger, on coordinator drop, or on SIGINT/SIGTERM.
    pub async fn stopped_or_signalled(self) {
        tokio::select! {
            _ = shutdown_signal() => {},
            _ = self.stopped() => {
                tracing::info!("Shutdown requested");
            },
        }
    }
}
