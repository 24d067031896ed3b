//! Core worker utilities

use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::panel::{SurfaceError, SurfaceSink, SurfaceState};
use tokio::sync::mpsc;

/// Common event sending utilities for workers
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }

    pub async fn send_refresh_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_event(Event::refresher_with_level(message, event_type, log_level))
            .await;
    }
}

/// Surfaces live in whichever front end drains the event channel.
#[async_trait::async_trait]
impl SurfaceSink for EventSender {
    async fn set_surface(&self, target_id: &str, state: SurfaceState) -> Result<(), SurfaceError> {
        self.sender
            .send(Event::surface_update(target_id, state))
            .await
            .map_err(|_| SurfaceError::Detached(target_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn surface_writes_become_events() {
        let (tx, mut rx) = mpsc::channel(4);
        let sender = EventSender::new(tx);

        sender
            .set_surface("docker", SurfaceState::Failed("/docker -> 502".to_string()))
            .await
            .unwrap();

        let event = rx.recv().await.unwrap();
        let update = event.surface.unwrap();
        assert_eq!(update.target_id, "docker");
        assert_eq!(update.state, SurfaceState::Failed("/docker -> 502".to_string()));
    }

    #[tokio::test]
    async fn closed_channel_detaches_surfaces() {
        let (tx, rx) = mpsc::channel(4);
        drop(rx);
        let sender = EventSender::new(tx);

        let result = sender.set_surface("health", SurfaceState::Pending).await;
        assert_eq!(result, Err(SurfaceError::Detached("health".to_string())));
    }
}
