//! Real-time runtime.
//!
//! Bridges a [`SessionController`] onto a tokio task: player inputs arrive on a
//! bounded channel, timer deadlines are awaited with `sleep_until`, and every
//! change is published on a `watch` channel. Wall time is read from
//! `tokio::time::Instant`, so a paused test clock drives the session exactly.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, warn};

use memory_match_core::{SessionSnapshot, SessionSummary};
use memory_match_types::PlayerInput;

use crate::controller::SessionController;
use crate::error::EngineError;
use crate::notify::Notifier;

/// Inputs buffered before `send` waits
pub const INPUT_QUEUE_DEPTH: usize = 32;

/// Handle to a running session task
pub struct SessionHandle {
    input_tx: mpsc::Sender<PlayerInput>,
    snapshot_rx: watch::Receiver<SessionSnapshot>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<SessionSummary>,
}

/// Run `controller` on the current tokio runtime
pub fn spawn<N>(controller: SessionController<N>) -> SessionHandle
where
    N: Notifier + Send + 'static,
{
    let (input_tx, input_rx) = mpsc::channel(INPUT_QUEUE_DEPTH);
    let (snapshot_tx, snapshot_rx) = watch::channel(controller.snapshot());
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let task = tokio::spawn(run(controller, input_rx, snapshot_tx, shutdown_rx));

    SessionHandle {
        input_tx,
        snapshot_rx,
        shutdown_tx: Some(shutdown_tx),
        task,
    }
}

impl SessionHandle {
    pub async fn send(&self, input: PlayerInput) -> Result<(), EngineError> {
        self.input_tx
            .send(input)
            .await
            .map_err(|_| EngineError::RuntimeClosed)
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Wait for the next published change
    pub async fn changed(&mut self) -> Result<SessionSnapshot, EngineError> {
        self.snapshot_rx
            .changed()
            .await
            .map_err(|_| EngineError::RuntimeClosed)?;
        Ok(self.snapshot_rx.borrow_and_update().clone())
    }

    /// Wait until a published snapshot satisfies `predicate`
    pub async fn wait_for<F>(&mut self, mut predicate: F) -> Result<SessionSnapshot, EngineError>
    where
        F: FnMut(&SessionSnapshot) -> bool,
    {
        let snapshot = self
            .snapshot_rx
            .wait_for(|s| predicate(s))
            .await
            .map_err(|_| EngineError::RuntimeClosed)?;
        Ok(snapshot.clone())
    }

    /// Stop the task and return the final summary
    pub async fn shutdown(mut self) -> Result<SessionSummary, EngineError> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        Ok(self.task.await?)
    }
}

async fn run<N: Notifier>(
    mut controller: SessionController<N>,
    mut input_rx: mpsc::Receiver<PlayerInput>,
    snapshot_tx: watch::Sender<SessionSnapshot>,
    mut shutdown_rx: oneshot::Receiver<()>,
) -> SessionSummary {
    let origin = Instant::now();
    let base_ms = controller.now_ms();
    let clock_ms = || base_ms + origin.elapsed().as_millis() as u64;

    loop {
        let deadline = controller
            .next_deadline_ms()
            .map(|ms| origin + Duration::from_millis(ms.saturating_sub(base_ms)));

        tokio::select! {
            _ = &mut shutdown_rx => break,
            input = input_rx.recv() => {
                let Some(input) = input else { break };
                // Deliver anything already due before the input lands.
                if let Err(err) = controller.advance_to(clock_ms()) {
                    warn!(error = %err, "timer delivery failed");
                }
                debug!(input = input.as_str(), "input");
                if let Err(err) = controller.handle(input) {
                    warn!(input = input.as_str(), error = %err, "input rejected");
                }
            }
            _ = sleep_until_deadline(deadline) => {
                if let Err(err) = controller.advance_to(clock_ms()) {
                    warn!(error = %err, "timer delivery failed");
                }
            }
        }

        let next = controller.snapshot();
        snapshot_tx.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    controller.summary()
}

async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
