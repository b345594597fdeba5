//! Floating tooltip for hovered records.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};
use crate::config::DashboardConfig;
use crate::data::model::Leader;

/// Time-in-office phrasing: singular up to one year.
pub fn format_duration(years: i32) -> String {
    if years <= 1 {
        format!("{years} year")
    } else {
        format!("{years} years")
    }
}

/// GDP per capita rounded to the nearest integer, or "missing".
pub fn format_gdp(pcgdp: Option<f64>) -> String {
    match pcgdp {
        Some(value) => format!("{}", value.round() as i64),
        None => "missing".to_string(),
    }
}

/// Tooltip body for one record.
pub fn tooltip_lines(leader: &Leader) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            leader.leader.clone(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{}, {}-{}", leader.country, leader.start_year, leader.end_year),
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        )),
        Line::from(format!("Age at inauguration: {}", leader.start_age)),
        Line::from(format!("Time in office: {}", format_duration(leader.duration))),
        Line::from(format!("GDP/capita: {}", format_gdp(leader.pcgdp))),
    ]
}

/// Draw the tooltip near the mouse position, clamped to the frame.
pub fn render_tooltip(
    frame: &mut Frame,
    leader: &Leader,
    mouse: (u16, u16),
    config: &DashboardConfig,
) {
    let lines = tooltip_lines(leader);
    let frame_area = frame.area();
    let width = (lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 4)
        .min(frame_area.width);
    let height = (lines.len() as u16 + 2).min(frame_area.height);
    if width == 0 || height == 0 {
        return;
    }

    let (dx, dy) = config.tooltip_offset;
    let x = mouse
        .0
        .saturating_add(dx)
        .min(frame_area.width.saturating_sub(width));
    let y = mouse
        .1
        .saturating_add(dy)
        .min(frame_area.height.saturating_sub(height));
    let area = Rect {
        x,
        y,
        width,
        height,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
