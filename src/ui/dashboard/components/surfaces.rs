//! Surface grid component
//!
//! One bordered panel per binding, two per row

use super::super::state::DashboardState;
use super::super::utils::{format_time_only, get_surface_color};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

const COLUMNS: usize = 2;

pub fn render_surfaces(f: &mut Frame, area: Rect, state: &DashboardState) {
    if state.surfaces.is_empty() {
        return;
    }
    let rows = state.surfaces.len().div_ceil(COLUMNS);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .split(*row_area);
        for (column, cell) in cells.iter().enumerate() {
            let index = row * COLUMNS + column;
            if index < state.surfaces.len() {
                render_surface(f, *cell, state, index);
            }
        }
    }
}

fn render_surface(f: &mut Frame, area: Rect, state: &DashboardState, index: usize) {
    let surface = &state.surfaces[index];
    let color = get_surface_color(&surface.state);
    let focused = state.focused() == index;

    let mut title = vec![Span::styled(
        format!(" {} ", state.bindings[index].title()),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    title.push(Span::styled(
        format!("{} ", state.bindings[index].path),
        Style::default().fg(Color::DarkGray),
    ));

    let mut block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(color));
    if let Some(updated_at) = &surface.updated_at {
        block = block.title_bottom(
            Line::from(format!(" {} ", format_time_only(updated_at))).right_aligned(),
        );
    }

    let text_style = if surface.state.is_settled() {
        Style::default()
    } else {
        Style::default().fg(Color::Yellow)
    };
    let paragraph = Paragraph::new(surface.state.text())
        .style(text_style)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.scroll_offset(index), 0));
    f.render_widget(paragraph, area);
}
