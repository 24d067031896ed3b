//! Event System
//!
//! Events flowing from the refresh worker to the front ends: surface writes and
//! activity-log entries.

use crate::logging::{LogLevel, should_log_with_env};
use crate::panel::SurfaceState;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Worker {
    /// The refresh worker: triggers, cycle summaries, failures.
    Refresher,
    /// Surface writes made by the refresh controller.
    Panel,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    /// Closes every refresh cycle; Warn level when any binding failed.
    CycleComplete,
    Error,
    Refresh,
    Skipped,
    SurfaceUpdate,
}

/// A new state for one display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceUpdate {
    pub target_id: String,
    pub state: SurfaceState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Set on surface update events only
    pub surface: Option<SurfaceUpdate>,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            surface: None,
        }
    }

    pub fn surface_update(target_id: &str, state: SurfaceState) -> Self {
        let msg = match &state {
            SurfaceState::Pending => format!("{}: loading", target_id),
            SurfaceState::Populated(_) => format!("{}: updated", target_id),
            SurfaceState::Failed(message) => format!("{}: {}", target_id, message),
        };
        let mut event = Self::new(
            Worker::Panel,
            msg,
            EventType::SurfaceUpdate,
            LogLevel::Debug,
        );
        event.surface = Some(SurfaceUpdate {
            target_id: target_id.to_string(),
            state,
        });
        event
    }

    pub fn refresher_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Refresher, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Surface updates are rendered in their panels, not in the log
        if self.event_type == EventType::SurfaceUpdate {
            return false;
        }
        if self.event_type == EventType::CycleComplete || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
