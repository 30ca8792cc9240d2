//! Notification sinks
//!
//! Notifications are fire-and-forget: the controller logs a failed `notify`
//! and carries on. Any `FnMut(NotifyKind)` closure is a notifier.

use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use tokio::sync::mpsc;
use tracing::debug;

use memory_match_types::NotifyKind;

pub trait Notifier {
    fn notify(&mut self, kind: NotifyKind) -> Result<()>;
}

impl<F> Notifier for F
where
    F: FnMut(NotifyKind),
{
    fn notify(&mut self, kind: NotifyKind) -> Result<()> {
        self(kind);
        Ok(())
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _kind: NotifyKind) -> Result<()> {
        Ok(())
    }
}

/// Appends to a shared log; clones see the same log
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    log: Arc<Mutex<Vec<NotifyKind>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<NotifyKind> {
        match self.log.lock() {
            Ok(log) => log.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Return and clear the log
    pub fn take(&self) -> Vec<NotifyKind> {
        match self.log.lock() {
            Ok(mut log) => std::mem::take(&mut *log),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, kind: NotifyKind) -> Result<()> {
        self.log
            .lock()
            .map_err(|_| anyhow!("notification log poisoned"))?
            .push(kind);
        Ok(())
    }
}

/// Forwards onto an unbounded tokio channel
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<NotifyKind>,
}

impl ChannelNotifier {
    pub fn new(tx: mpsc::UnboundedSender<NotifyKind>) -> Self {
        Self { tx }
    }

    pub fn channel() -> (Self, mpsc::UnboundedReceiver<NotifyKind>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&mut self, kind: NotifyKind) -> Result<()> {
        self.tx
            .send(kind)
            .map_err(|_| anyhow!("notification receiver dropped"))
    }
}

/// Logs the tone each notification would play
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, kind: NotifyKind) -> Result<()> {
        let tone = kind.tone();
        debug!(
            kind = kind.as_str(),
            frequency_hz = tone.frequency_hz,
            duration_ms = tone.duration_ms,
            "tone"
        );
        Ok(())
    }
}
