//! Dashboard state management

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::panel::{FetchMode, ResourceBinding, Surface};
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::Instant;

/// Dashboard state: one surface per binding plus the activity log.
#[derive(Debug)]
pub struct DashboardState {
    /// The status server being displayed.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    pub mode: FetchMode,
    /// Bindings in display order.
    pub bindings: Vec<ResourceBinding>,
    /// Display surfaces, parallel to `bindings`.
    pub surfaces: Vec<Surface>,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
    /// Number of finished refresh cycles
    pub completed_refreshes: u64,
    /// Timestamp of the last finished refresh cycle
    pub last_refresh: Option<String>,

    /// A refresh cycle is in flight
    refreshing: bool,
    /// Index of the panel that receives scroll keys
    focused: usize,
    /// Vertical scroll offset per panel
    scroll_offsets: Vec<u16>,
}

impl DashboardState {
    pub fn new(
        environment: Environment,
        bindings: Vec<ResourceBinding>,
        start_time: Instant,
        ui_config: UIConfig,
    ) -> Self {
        let surfaces = bindings
            .iter()
            .map(|b| Surface::new(b.target_id.clone()))
            .collect();
        let scroll_offsets = vec![0; bindings.len()];
        Self {
            environment,
            start_time,
            mode: ui_config.mode,
            bindings,
            surfaces,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
            completed_refreshes: 0,
            last_refresh: None,
            refreshing: false,
            focused: 0,
            scroll_offsets,
        }
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn set_refreshing(&mut self, refreshing: bool) {
        self.refreshing = refreshing;
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn scroll_offset(&self, index: usize) -> u16 {
        self.scroll_offsets.get(index).copied().unwrap_or(0)
    }

    /// Move focus to the next panel, wrapping around.
    pub fn focus_next(&mut self) {
        if !self.surfaces.is_empty() {
            self.focused = (self.focused + 1) % self.surfaces.len();
        }
    }

    /// Move focus to the previous panel, wrapping around.
    pub fn focus_previous(&mut self) {
        if !self.surfaces.is_empty() {
            self.focused = (self.focused + self.surfaces.len() - 1) % self.surfaces.len();
        }
    }

    /// Scroll the focused panel by `delta` lines, clamped to its text.
    pub fn scroll_focused(&mut self, delta: i32) {
        let Some(surface) = self.surfaces.get(self.focused) else {
            return;
        };
        let max = surface.state.text().lines().count().saturating_sub(1) as i32;
        if let Some(offset) = self.scroll_offsets.get_mut(self.focused) {
            *offset = (*offset as i32 + delta).clamp(0, max) as u16;
        }
    }

    pub fn reset_scroll(&mut self, index: usize) {
        if let Some(offset) = self.scroll_offsets.get_mut(index) {
            *offset = 0;
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}
