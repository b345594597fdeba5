//! Gender bar chart view.
//!
//! Counts leaders by gender over the base (region-filtered) set. The
//! counts never narrow to the active gender filter: this chart controls
//! that filter and always shows the full base set it toggles over, which
//! is also why it only subscribes to region events.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders};
use ratatui::Frame;

use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{COLOR_ACCENT, COLOR_BAR, COLOR_BAR_ACTIVE, COLOR_BORDER};
use super::LinkedView;
use crate::config::DashboardConfig;
use crate::data::model::{Dataset, Gender};
use crate::events::ViewId;
use crate::selection::SelectionState;

#[derive(Debug, Default)]
pub struct BarView {
    /// Gender counts in first-seen order over the base set.
    counts: Vec<(Gender, usize)>,
}

impl BarView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> &[(Gender, usize)] {
        &self.counts
    }
}

impl LinkedView for BarView {
    fn id(&self) -> ViewId {
        ViewId::Bar
    }

    fn refresh(&mut self, dataset: &Dataset, state: &SelectionState) {
        self.counts.clear();
        for id in state.base() {
            let Some(leader) = dataset.get(*id) else {
                continue;
            };
            match self.counts.iter_mut().find(|(g, _)| *g == leader.gender) {
                Some((_, n)) => *n += 1,
                None => self.counts.push((leader.gender, 1)),
            }
        }
    }
}

impl BarView {
    pub fn draw(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &SelectionState,
        config: &DashboardConfig,
        registry: &mut HitAreaRegistry,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(COLOR_BORDER))
            .title(Line::from(Span::styled(
                " Leaders by Gender ",
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            )));
        let inner = block.inner(area);

        let bars: Vec<Bar> = self
            .counts
            .iter()
            .map(|(gender, count)| {
                let fill = if state.gender_filter() == Some(*gender) {
                    COLOR_BAR_ACTIVE
                } else {
                    COLOR_BAR
                };
                Bar::default()
                    .value(*count as u64)
                    .label(Line::from(gender.label()))
                    .style(Style::default().fg(fill))
                    .value_style(Style::default().fg(Color::Black).bg(fill))
            })
            .collect();

        let chart = BarChart::default()
            .block(block)
            .bar_width(config.bar_width)
            .bar_gap(config.bar_gap)
            .data(BarGroup::default().bars(&bars));
        frame.render_widget(chart, area);

        // Bars lay out left to right from the inner origin; each bar's
        // full column toggles its gender.
        for (i, (gender, _)) in self.counts.iter().enumerate() {
            let x = inner.x + i as u16 * (config.bar_width + config.bar_gap);
            if x >= inner.right() {
                break;
            }
            registry.register(
                Rect {
                    x,
                    y: inner.y,
                    width: config.bar_width.min(inner.right() - x),
                    height: inner.height,
                },
                ClickAction::ToggleGender(*gender),
            );
        }
    }
}
