//! GDP scatter view.
//!
//! One point per leader with a known GDP per capita; records without one
//! are absent from this view entirely and do not stretch the x-domain.
//! Under a gender filter, off-gender points render dimmed and are inert:
//! they swallow clicks without toggling and without falling through to
//! the background clear area.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{Block, BorderType, Borders};
use ratatui::Frame;

use super::interaction::{ClickAction, HitAreaRegistry, HoverTarget};
use super::project::{project_x, project_y};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_POINT, COLOR_POINT_DIM, COLOR_POINT_HOVER,
    COLOR_SELECTED,
};
use super::{LinkedView, AGE_BOUNDS};
use crate::data::model::{Dataset, LeaderId};
use crate::events::ViewId;
use crate::selection::SelectionState;

#[derive(Debug, Default)]
pub struct ScatterView {
    /// Base-set records with a known GDP, in draw order.
    displayed: Vec<LeaderId>,
    /// X-domain maximum over the displayed points.
    x_max: f64,
}

impl ScatterView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn displayed(&self) -> &[LeaderId] {
        &self.displayed
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }
}

impl LinkedView for ScatterView {
    fn id(&self) -> ViewId {
        ViewId::Scatter
    }

    fn refresh(&mut self, dataset: &Dataset, state: &SelectionState) {
        self.displayed = state
            .base()
            .iter()
            .copied()
            .filter(|id| dataset.get(*id).and_then(|l| l.pcgdp).is_some())
            .collect();
        self.x_max = self
            .displayed
            .iter()
            .filter_map(|id| dataset.get(*id).and_then(|l| l.pcgdp))
            .fold(0.0_f64, f64::max);
        if self.displayed.is_empty() {
            // keep the draw pass total when nothing has a GDP value
            self.x_max = 1.0;
        }
    }
}

impl ScatterView {
    pub fn draw(
        &self,
        frame: &mut Frame,
        area: Rect,
        dataset: &Dataset,
        state: &SelectionState,
        registry: &mut HitAreaRegistry,
        hovered: Option<LeaderId>,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(COLOR_BORDER))
            .title(Line::from(Span::styled(
                " GDP per Capita vs Age ",
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            )));
        let inner = block.inner(area);
        let x_bounds = [0.0, self.x_max];

        // Partition points by render class; selected draw last.
        let mut dim = Vec::new();
        let mut plain = Vec::new();
        let mut hover = Vec::new();
        let mut selected = Vec::new();
        for id in &self.displayed {
            let Some(leader) = dataset.get(*id) else {
                continue;
            };
            let Some(gdp) = leader.pcgdp else {
                continue;
            };
            let coord = (gdp, f64::from(leader.start_age));
            if !state.gender_matches(leader) {
                dim.push(coord);
            } else if state.is_selected(*id) {
                selected.push(coord);
            } else if hovered == Some(*id) {
                hover.push(coord);
            } else {
                plain.push(coord);
            }
        }

        let canvas = Canvas::default()
            .block(block)
            .x_bounds(x_bounds)
            .y_bounds(AGE_BOUNDS)
            .marker(Marker::Dot)
            .paint(|ctx| {
                ctx.draw(&Points {
                    coords: &dim,
                    color: COLOR_POINT_DIM,
                });
                ctx.draw(&Points {
                    coords: &plain,
                    color: COLOR_POINT,
                });
                ctx.draw(&Points {
                    coords: &hover,
                    color: COLOR_POINT_HOVER,
                });
                ctx.draw(&Points {
                    coords: &selected,
                    color: COLOR_SELECTED,
                });
                ctx.print(
                    x_bounds[0],
                    AGE_BOUNDS[1],
                    Line::from(Span::styled("Age", Style::default().fg(COLOR_DIM))),
                );
                ctx.print(
                    x_bounds[1] * 0.72,
                    AGE_BOUNDS[0],
                    Line::from(Span::styled(
                        format!("GDP per Capita (US$), max {:.0}", self.x_max),
                        Style::default().fg(COLOR_DIM),
                    )),
                );
            });
        frame.render_widget(canvas, area);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Background first, points after: later registrations win the
        // z-order, so a click only clears when it misses every point.
        registry.register(inner, ClickAction::ClearSelection);
        for id in &self.displayed {
            let Some(leader) = dataset.get(*id) else {
                continue;
            };
            let Some(gdp) = leader.pcgdp else {
                continue;
            };
            let cell = Rect {
                x: project_x(gdp, x_bounds, inner),
                y: project_y(f64::from(leader.start_age), AGE_BOUNDS, inner),
                width: 1,
                height: 1,
            };
            if state.gender_matches(leader) {
                registry.register_hover(
                    cell,
                    ClickAction::ToggleLeader(*id),
                    HoverTarget {
                        leader: *id,
                        view: ViewId::Scatter,
                    },
                );
            } else {
                // inert: swallows the click, no hover payload
                registry.register(cell, ClickAction::ToggleLeader(*id));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_dataset;
    use crate::data::model::Gender;

    fn dataset() -> Dataset {
        parse_dataset(
            "country,leader,gender,start_year,end_year,start_age,end_age,duration,pcgdp,label,oecd,eu,brics,gseven,gtwenty\n\
             A,With Gdp,M,1990,1995,50,55,5,1500.5,0,1,0,0,0,0\n\
             B,No Gdp,F,1980,1990,45,55,10,NA,0,1,0,0,0,0\n\
             C,Top Gdp,F,2000,2003,60,63,3,42000,0,1,0,0,0,0",
        )
        .unwrap()
    }

    #[test]
    fn null_gdp_records_are_absent() {
        let data = dataset();
        let state = SelectionState::new(&data);
        let mut view = ScatterView::new();
        view.refresh(&data, &state);
        assert_eq!(view.displayed().len(), 2);
        for id in view.displayed() {
            assert!(data.get(*id).unwrap().pcgdp.is_some());
        }
    }

    #[test]
    fn x_domain_max_covers_displayed_points_only() {
        let data = dataset();
        let state = SelectionState::new(&data);
        let mut view = ScatterView::new();
        view.refresh(&data, &state);
        assert_eq!(view.x_max(), 42000.0);
    }

    #[test]
    fn gender_filter_keeps_points_displayed() {
        let data = dataset();
        let mut state = SelectionState::new(&data);
        state.toggle_gender_filter(Gender::Female);
        let mut view = ScatterView::new();
        view.refresh(&data, &state);
        // off-gender points stay displayed (dimmed), so the domain is stable
        assert_eq!(view.displayed().len(), 2);
        assert_eq!(view.x_max(), 42000.0);
    }

    #[test]
    fn empty_display_set_falls_back_to_a_unit_domain() {
        let data = parse_dataset(
            "country,leader,gender,start_year,end_year,start_age,end_age,duration,pcgdp,label,oecd,eu,brics,gseven,gtwenty\n\
             B,No Gdp,F,1980,1990,45,55,10,NA,0,1,0,0,0,0",
        )
        .unwrap();
        let state = SelectionState::new(&data);
        let mut view = ScatterView::new();
        view.refresh(&data, &state);
        assert!(view.displayed().is_empty());
        assert_eq!(view.x_max(), 1.0);
    }
}
