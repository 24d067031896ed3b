//! Refresh worker
//!
//! Runs the startup refresh, then one refresh cycle per trigger until shutdown.

use super::core::EventSender;
use crate::events::EventType;
use crate::logging::LogLevel;
use crate::panel::{RefreshController, RefreshOutcome, RefreshSummary};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinSet;

pub struct RefreshWorker {
    controller: Arc<RefreshController>,
    event_sender: EventSender,
}

impl RefreshWorker {
    pub fn new(controller: Arc<RefreshController>, event_sender: EventSender) -> Self {
        Self {
            controller,
            event_sender,
        }
    }

    pub async fn run(self, mut triggers: mpsc::Receiver<()>, mut shutdown: broadcast::Receiver<()>) {
        let mut cycles = JoinSet::new();
        let mut triggers_open = true;
        log::debug!(
            "Refresh worker started with {} bindings, {} fetch",
            self.controller.bindings().len(),
            self.controller.mode()
        );

        self.spawn_cycle(&mut cycles, "Initial refresh");

        loop {
            tokio::select! {
                _ = shutdown.recv() => break,
                trigger = triggers.recv(), if triggers_open => match trigger {
                    Some(()) => self.spawn_cycle(&mut cycles, "Refresh requested"),
                    None => triggers_open = false,
                },
                Some(joined) = cycles.join_next(), if !cycles.is_empty() => {
                    if let Err(e) = joined {
                        if e.is_panic() {
                            log::error!("Refresh cycle panicked: {}", e);
                        }
                    }
                }
            }
        }

        cycles.abort_all();
    }

    /// Each cycle runs in its own task so that a trigger arriving mid-cycle
    /// reaches the controller, which turns it away.
    fn spawn_cycle(&self, cycles: &mut JoinSet<()>, reason: &'static str) {
        let controller = self.controller.clone();
        let events = self.event_sender.clone();
        cycles.spawn(async move {
            events
                .send_refresh_event(reason.to_string(), EventType::Refresh, LogLevel::Info)
                .await;
            let outcome = controller.refresh().await;
            report_outcome(&events, outcome).await;
        });
    }
}

async fn report_outcome(events: &EventSender, outcome: RefreshOutcome) {
    match outcome {
        RefreshOutcome::Skipped => {
            events
                .send_refresh_event(
                    "Refresh already in progress, trigger ignored".to_string(),
                    EventType::Skipped,
                    LogLevel::Info,
                )
                .await;
        }
        RefreshOutcome::Completed(summary) => report_summary(events, &summary).await,
    }
}

async fn report_summary(events: &EventSender, summary: &RefreshSummary) {
    for failed in &summary.failed {
        events
            .send_refresh_event(
                format!("{}: {}", failed.target_id, failed.message),
                EventType::Error,
                failed.log_level,
            )
            .await;
    }
    for target_id in &summary.unreachable {
        events
            .send_refresh_event(
                format!("{}: display surface unavailable, skipped", target_id),
                EventType::Error,
                LogLevel::Warn,
            )
            .await;
    }

    let elapsed_ms = summary.elapsed.as_millis();
    if summary.is_clean() {
        events
            .send_refresh_event(
                format!("Refreshed {} surfaces in {} ms", summary.total(), elapsed_ms),
                EventType::CycleComplete,
                LogLevel::Info,
            )
            .await;
    } else {
        events
            .send_refresh_event(
                format!(
                    "Refreshed {} surfaces in {} ms: {} ok, {} failed",
                    summary.total(),
                    elapsed_ms,
                    summary.populated.len(),
                    summary.failed.len() + summary.unreachable.len()
                ),
                EventType::CycleComplete,
                LogLevel::Warn,
            )
            .await;
    }
}
