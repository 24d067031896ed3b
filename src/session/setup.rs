//! Session setup and initialization

use crate::environment::Environment;
use crate::events::Event;
use crate::panel::{FetchMode, ResourceBinding, default_bindings};
use crate::runtime::{RefreshTrigger, start_refresh_runtime};
use crate::status::StatusClient;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Surface updates and activity events from the refresh worker
    pub event_receiver: mpsc::Receiver<Event>,
    /// The refresh control
    pub trigger: RefreshTrigger,
    /// Join handles for worker tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop all workers
    pub shutdown_sender: broadcast::Sender<()>,
    /// Status server being displayed
    pub environment: Environment,
    /// Bindings in display order
    pub bindings: Vec<ResourceBinding>,
    pub mode: FetchMode,
}

/// Sets up a refresh session
///
/// Builds the status client, starts the refresh worker (which runs the first
/// refresh right away) and returns the handles the front end needs.
///
/// # Arguments
/// * `env` - Status server to read from
/// * `mode` - Sequential or concurrent fetching
/// * `timeout` - Per-request timeout, `None` to wait forever
pub async fn setup_session(
    env: Environment,
    mode: FetchMode,
    timeout: Option<Duration>,
) -> Result<SessionData, Box<dyn Error>> {
    let client = StatusClient::new(env.clone(), timeout)?;
    let bindings = default_bindings();

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let runtime = start_refresh_runtime(
        bindings.clone(),
        Arc::new(client),
        mode,
        shutdown_sender.subscribe(),
    )?;

    Ok(SessionData {
        event_receiver: runtime.event_receiver,
        trigger: runtime.trigger,
        join_handles: vec![runtime.join_handle],
        shutdown_sender,
        environment: env,
        bindings,
        mode,
    })
}
