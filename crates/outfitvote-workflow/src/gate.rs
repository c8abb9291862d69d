//! ActionGate: one delayed action of a kind at a time.
//!
//! Scheduling spawns a Tokio task that sleeps for the configured latency
//! and then hands the payload back over a oneshot channel. The gate stays
//! closed until the [`PendingAction`] is awaited or dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tracing::debug;

use outfitvote_core::errors::{OutfitResult, WorkflowError};
use outfitvote_observability::events;

/// The delayed actions the workflow performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Upload,
    SaveOutfit,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Upload => "upload",
            ActionKind::SaveOutfit => "save_outfit",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-flight guard for one [`ActionKind`].
#[derive(Debug, Clone)]
pub struct ActionGate {
    kind: ActionKind,
    in_flight: Arc<AtomicBool>,
}

impl ActionGate {
    pub fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Start a delayed action carrying `payload`.
    ///
    /// Fails with `ActionInFlight` while another action of this kind is
    /// pending. Must be called from within a Tokio runtime.
    pub fn schedule<T: Send + 'static>(
        &self,
        delay: Duration,
        payload: T,
    ) -> OutfitResult<PendingAction<T>> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            events::action_rejected(self.kind.as_str());
            return Err(WorkflowError::ActionInFlight {
                action: self.kind.to_string(),
            }
            .into());
        }

        let release = Release {
            flag: Arc::clone(&self.in_flight),
        };
        let (tx, rx) = oneshot::channel();
        debug!(
            action = %self.kind,
            delay_ms = delay.as_millis() as u64,
            "action scheduled"
        );
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the caller abandoned the action.
            let _ = tx.send(payload);
        });

        Ok(PendingAction {
            kind: self.kind,
            receiver: rx,
            _release: release,
        })
    }
}

/// Reopens the gate when dropped.
#[derive(Debug)]
struct Release {
    flag: Arc<AtomicBool>,
}

impl Drop for Release {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Handle to a scheduled action. Await [`PendingAction::wait`] for the
/// payload; dropping the handle abandons the action and reopens the gate.
#[derive(Debug)]
pub struct PendingAction<T> {
    kind: ActionKind,
    receiver: oneshot::Receiver<T>,
    _release: Release,
}

impl<T> PendingAction<T> {
    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    /// Wait for the simulated latency to elapse and take the payload back.
    pub async fn wait(self) -> OutfitResult<T> {
        let PendingAction {
            kind,
            receiver,
            _release,
        } = self;
        let payload = receiver.await.map_err(|_| WorkflowError::ActionAborted {
            action: kind.to_string(),
        })?;
        drop(_release);
        Ok(payload)
    }
}
