//! Dashboard header component
//!
//! Renders the title and refresh progress gauge

use super::super::state::DashboardState;
use super::super::utils::format_time_only;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Render header with title, server and refresh progress.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let uptime = state.start_time.elapsed().as_secs();
    let title_text = format!(
        "STATUS PANEL v{} | {} | {} fetch | up {:02}:{:02}:{:02}",
        env!("CARGO_PKG_VERSION"),
        state.environment,
        state.mode,
        uptime / 3600,
        (uptime % 3600) / 60,
        uptime % 60
    );
    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let settled = state
        .surfaces
        .iter()
        .filter(|s| s.state.is_settled())
        .count();
    let total = state.surfaces.len().max(1);

    let (progress_text, gauge_color, progress_percent) = if state.is_refreshing() {
        (
            format!(
                "{} REFRESHING - {}/{} surfaces settled",
                SPINNER[(state.tick / 3) % SPINNER.len()],
                settled,
                total
            ),
            Color::LightYellow,
            (settled * 100 / total) as u16,
        )
    } else {
        let last = state
            .last_refresh
            .as_deref()
            .map(format_time_only)
            .unwrap_or("never");
        (
            format!(
                "IDLE - {} refreshes, last at {}",
                state.completed_refreshes, last
            ),
            Color::LightBlue,
            100,
        )
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent.min(100))
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
