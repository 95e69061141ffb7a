//! Background worker running auth submissions off the UI loop.

use std::{collections::HashMap, sync::Arc};

use tokio::{sync::mpsc, task::JoinHandle};
use uuid::Uuid;

use crate::auth::{AuthBackend, AuthError, AuthMode, AuthSession, Credentials};

/// Commands sent from the UI to the worker.
#[derive(Debug)]
pub enum WorkerCmd {
    /// Start a submission identified by `ticket`.
    SubmitAuth {
        ticket: Uuid,
        mode: AuthMode,
        credentials: Credentials,
    },
    /// Abort the submission; it reports `AuthError::Cancelled` instead.
    CancelAuth { ticket: Uuid },
}

/// Events emitted by the worker for UI updates.
#[derive(Clone, Debug, PartialEq)]
pub enum WorkerEvent {
    AuthFinished {
        ticket: Uuid,
        result: Result<AuthSession, AuthError>,
    },
}

/// Worker loop: one task per submission, aborted on cancel.
pub async fn run(
    mut rx: mpsc::Receiver<WorkerCmd>,
    tx: mpsc::Sender<WorkerEvent>,
    backend: Arc<dyn AuthBackend>,
) {
    tracing::info!("worker started");
    let mut in_flight: HashMap<Uuid, JoinHandle<()>> = HashMap::new();

    while let Some(cmd) = rx.recv().await {
        // Forget tasks that already delivered their result.
        in_flight.retain(|_, h| !h.is_finished());

        match cmd {
            WorkerCmd::SubmitAuth {
                ticket,
                mode,
                credentials,
            } => {
                tracing::info!("auth submit start: {ticket} ({mode:?})");
                let backend = Arc::clone(&backend);
                let tx = tx.clone();
                let handle = tokio::spawn(async move {
                    let result = backend.submit(mode, &credentials).await;
                    match &result {
                        Ok(_) => tracing::info!("auth submit done: {ticket}"),
                        Err(e) => tracing::error!("auth submit failed: {ticket}: {e}"),
                    }
                    let _ = tx.send(WorkerEvent::AuthFinished { ticket, result }).await;
                });
                in_flight.insert(ticket, handle);
            }

            WorkerCmd::CancelAuth { ticket } => match in_flight.remove(&ticket) {
                Some(handle) => {
                    handle.abort();
                    tracing::info!("auth submit cancelled: {ticket}");
                    let result = Err(AuthError::Cancelled);
                    let _ = tx.send(WorkerEvent::AuthFinished { ticket, result }).await;
                }
                None => tracing::warn!("cancel for unknown or finished ticket {ticket}"),
            },
        }
    }

    // UI is gone; nothing left to deliver to.
    for (_, handle) in in_flight {
        handle.abort();
    }
    tracing::info!("worker stopped");
}
