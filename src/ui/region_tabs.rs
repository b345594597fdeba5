//! Region selector tabs.
//!
//! Replaces the page-level select box of the source dashboard: one
//! clickable tab per region flag, with a marker on the active tab.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{COLOR_ACCENT, COLOR_DIM};
use crate::data::model::Region;

const PREFIX: &str = " Region: ";

/// Render the tab row and register one hit area per tab.
pub fn render_region_tabs(
    frame: &mut Frame,
    area: Rect,
    selected: Region,
    registry: &mut HitAreaRegistry,
) {
    let mut spans = vec![Span::styled(PREFIX, Style::default().fg(COLOR_DIM))];
    let mut x = area.x.saturating_add(PREFIX.len() as u16);

    for region in Region::ALL {
        let active = region == selected;
        let label = if active {
            format!("▶ {} ", region.label())
        } else {
            format!("  {} ", region.label())
        };
        let width = label.chars().count() as u16;
        let style = if active {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        if x < area.right() {
            registry.register(
                Rect {
                    x,
                    y: area.y,
                    width: width.min(area.right() - x),
                    height: 1,
                },
                ClickAction::SelectRegion(region),
            );
        }
        spans.push(Span::styled(label, style));
        x = x.saturating_add(width);
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
