//! Wiring between the refresh controller, its worker and the front ends

use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, TRIGGER_QUEUE_SIZE};
use crate::events::Event;
use crate::panel::{BindingError, FetchMode, RefreshController, ResourceBinding};
use crate::status::StatusSource;
use crate::workers::core::EventSender;
use crate::workers::refresher::RefreshWorker;
use std::sync::Arc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// The refresh control. Activating it asks the worker for a new refresh cycle.
#[derive(Debug, Clone)]
pub struct RefreshTrigger {
    sender: mpsc::Sender<()>,
}

impl RefreshTrigger {
    pub fn new(sender: mpsc::Sender<()>) -> Self {
        Self { sender }
    }

    /// Returns false when the activation could not be queued.
    pub fn activate(&self) -> bool {
        match self.sender.try_send(()) {
            Ok(()) => true,
            Err(TrySendError::Full(())) => {
                log::debug!("Refresh trigger queue full, dropping activation");
                false
            }
            Err(TrySendError::Closed(())) => false,
        }
    }
}

#[derive(Debug)]
pub struct RefreshRuntime {
    /// Surface updates and activity events for the front end
    pub event_receiver: mpsc::Receiver<Event>,
    pub trigger: RefreshTrigger,
    pub join_handle: JoinHandle<()>,
}

/// Start the refresh worker. The first refresh cycle begins immediately.
pub fn start_refresh_runtime(
    bindings: Vec<ResourceBinding>,
    source: Arc<dyn StatusSource>,
    mode: FetchMode,
    shutdown: broadcast::Receiver<()>,
) -> Result<RefreshRuntime, BindingError> {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let event_sender = EventSender::new(event_sender);

    let controller = Arc::new(RefreshController::new(
        bindings,
        source,
        Arc::new(event_sender.clone()),
        mode,
    )?);

    let (trigger_sender, trigger_receiver) = mpsc::channel(TRIGGER_QUEUE_SIZE);
    let worker = RefreshWorker::new(controller, event_sender);
    let join_handle = tokio::spawn(worker.run(trigger_receiver, shutdown));

    Ok(RefreshRuntime {
        event_receiver,
        trigger: RefreshTrigger::new(trigger_sender),
        join_handle,
    })
}
