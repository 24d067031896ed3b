//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::{EventType, Worker};
use crate::logging::LogLevel;
use crate::panel::SurfaceState;
use ratatui::prelude::Color;

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::Refresher => Color::Cyan,
        Worker::Panel => Color::Gray,
    }
}

/// Border and title color of a surface panel
pub fn get_surface_color(state: &SurfaceState) -> Color {
    match state {
        SurfaceState::Pending => Color::Yellow,
        SurfaceState::Populated(_) => Color::Green,
        SurfaceState::Failed(_) => Color::Red,
    }
}

pub fn get_event_icon(event_type: EventType, log_level: LogLevel) -> &'static str {
    match event_type {
        EventType::CycleComplete if log_level >= LogLevel::Warn => "⚠",
        EventType::CycleComplete => "✅",
        EventType::Error => "❌",
        EventType::Refresh => "↻",
        EventType::Skipped => "⏭",
        EventType::SurfaceUpdate => "",
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract MM-DD HH:MM from "YYYY-MM-DD HH:MM:SS"
    let mut parts = timestamp.split(' ');
    let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) else {
        return timestamp.to_string();
    };
    match (date_part.get(5..10), time_part.get(0..5)) {
        (Some(month_day), Some(hour_min)) => format!("{} {}", month_day, hour_min),
        _ => timestamp.to_string(),
    }
}

/// Only the time part of a full timestamp
pub fn format_time_only(timestamp: &str) -> &str {
    timestamp.split(' ').nth(1).unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_timestamp() {
        assert_eq!(format_compact_timestamp("2024-03-09 14:05:59"), "03-09 14:05");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn time_only() {
        assert_eq!(format_time_only("2024-03-09 14:05:59"), "14:05:59");
        assert_eq!(format_time_only("14:05"), "14:05");
    }
}
