//! Dashboard state update logic

use super::state::DashboardState;

use crate::events::{Event as WorkerEvent, EventType, SurfaceUpdate, Worker};
use crate::logging::LogLevel;

impl DashboardState {
    /// Advance the animation tick and apply all queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(&event);
            if event.should_display() {
                self.add_to_activity_log(event);
            }
        }
    }

    fn process_event(&mut self, event: &WorkerEvent) {
        match event.worker {
            Worker::Panel => {
                if let Some(update) = &event.surface {
                    self.apply_surface_update(update);
                }
            }
            Worker::Refresher => self.handle_refresher_event(event),
        }
    }

    fn apply_surface_update(&mut self, update: &SurfaceUpdate) {
        let Some(index) = self
            .surfaces
            .iter()
            .position(|s| s.target_id == update.target_id)
        else {
            self.add_to_activity_log(WorkerEvent::refresher_with_level(
                format!("No display surface '{}', update dropped", update.target_id),
                EventType::Error,
                LogLevel::Warn,
            ));
            return;
        };

        // New content starts at the top
        if update.state.is_settled() {
            self.reset_scroll(index);
        }
        self.surfaces[index].set(update.state.clone());
    }

    fn handle_refresher_event(&mut self, event: &WorkerEvent) {
        match event.event_type {
            EventType::Refresh => self.set_refreshing(true),
            EventType::CycleComplete => {
                self.set_refreshing(false);
                self.completed_refreshes += 1;
                self.last_refresh = Some(event.timestamp.clone());
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
    use crate::environment::Environment;
    use crate::panel::{FetchMode, SurfaceState, default_bindings};
    use crate::ui::app::UIConfig;
    use std::time::Instant;

    fn state() -> DashboardState {
        DashboardState::new(
            Environment::Local,
            default_bindings(),
            Instant::now(),
            UIConfig::new(false, FetchMode::Sequential),
        )
    }

    fn refresher(msg: &str, event_type: EventType) -> WorkerEvent {
        WorkerEvent::refresher_with_level(msg.to_string(), event_type, LogLevel::Info)
    }

    #[test]
    fn surface_events_update_their_panel_only() {
        let mut state = state();
        state.add_event(WorkerEvent::surface_update(
            "version",
            SurfaceState::Populated("{\n  \"version\": \"dev\"\n}".to_string()),
        ));
        state.update();

        assert_eq!(state.surfaces[0].state, SurfaceState::Pending);
        assert_eq!(
            state.surfaces[1].state,
            SurfaceState::Populated("{\n  \"version\": \"dev\"\n}".to_string())
        );
        assert!(state.surfaces[1].updated_at.is_some());
        // Surface updates stay out of the activity log
        assert!(state.activity_logs.is_empty());
    }

    #[test]
    fn unknown_surface_is_logged_and_skipped() {
        let mut state = state();
        state.add_event(WorkerEvent::surface_update("metrics", SurfaceState::Pending));
        state.update();

        assert_eq!(state.activity_logs.len(), 1);
        assert!(state.activity_logs[0].msg.contains("metrics"));
        assert!(
            state
                .surfaces
                .iter()
                .all(|s| s.state == SurfaceState::Pending && s.updated_at.is_none())
        );
    }

    #[test]
    fn tracks_refresh_cycles() {
        let mut state = state();
        state.add_event(refresher("Initial refresh", EventType::Refresh));
        state.update();
        assert!(state.is_refreshing());

        state.add_event(refresher("Refreshed 4 surfaces in 12 ms", EventType::CycleComplete));
        state.update();
        assert!(!state.is_refreshing());
        assert_eq!(state.completed_refreshes, 1);
        assert!(state.last_refresh.is_some());
        assert_eq!(state.activity_logs.len(), 2);
    }

    #[test]
    fn per_surface_errors_do_not_end_the_cycle() {
        let mut state = state();
        state.add_event(refresher("Refresh requested", EventType::Refresh));
        // Error text that reads like a summary does not end the cycle either
        state.add_event(refresher("Refreshed too early", EventType::Error));
        state.add_event(refresher("docker: /docker -> 500", EventType::Error));
        state.update();
        assert!(state.is_refreshing());
        assert_eq!(state.completed_refreshes, 0);

        state.add_event(refresher("Cycle done: 3 ok, 1 failed", EventType::CycleComplete));
        state.update();
        assert!(!state.is_refreshing());
        assert_eq!(state.completed_refreshes, 1);
    }

    #[test]
    fn activity_log_is_bounded() {
        let mut state = state();
        for i in 0..(MAX_ACTIVITY_LOGS + 5) {
            state.add_event(refresher(&format!("event {}", i), EventType::Skipped));
        }
        state.update();
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(state.activity_logs[0].msg, "event 5");
    }

    #[test]
    fn focus_and_scroll_are_clamped() {
        let mut state = state();
        state.focus_previous();
        assert_eq!(state.focused(), 3);
        state.focus_next();
        assert_eq!(state.focused(), 0);

        state.add_event(WorkerEvent::surface_update(
            "health",
            SurfaceState::Populated("{\n  \"status\": \"ok\"\n}".to_string()),
        ));
        state.update();
        state.scroll_focused(10);
        assert_eq!(state.scroll_offset(0), 2);
        state.scroll_focused(-10);
        assert_eq!(state.scroll_offset(0), 0);
    }
}
