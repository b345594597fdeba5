//! Lexis timeline view.
//!
//! One directed segment per leader, from (start_year, start_age) to
//! (end_year, end_age), on fixed axes. Tier precedence: selected (in the
//! active set) over highlighted (`label == 1`) over default. Hover
//! promotes only default-tier segments; selected and highlighted ones are
//! visually stable.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Block, BorderType, Borders};
use ratatui::Frame;

use super::interaction::{ClickAction, HitAreaRegistry, HoverTarget};
use super::project::{project_x, project_y, segment_cells};
use super::theme::{
    COLOR_ACCENT, COLOR_ARROW, COLOR_ARROW_HOVER, COLOR_BORDER, COLOR_DIM, COLOR_HIGHLIGHT,
    COLOR_SELECTED,
};
use super::{LinkedView, AGE_BOUNDS, YEAR_BOUNDS};
use crate::data::model::{Dataset, Leader, LeaderId};
use crate::events::ViewId;
use crate::selection::SelectionState;

/// Visual precedence class of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    Default,
    Highlighted,
    Selected,
}

fn tier(leader: &Leader, state: &SelectionState) -> Tier {
    if state.is_selected(leader.id) {
        Tier::Selected
    } else if leader.is_highlighted() {
        Tier::Highlighted
    } else {
        Tier::Default
    }
}

#[derive(Debug, Default)]
pub struct LexisView {
    /// Base set narrowed to the gender filter when one is active.
    visible: Vec<LeaderId>,
}

impl LexisView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(&self) -> &[LeaderId] {
        &self.visible
    }
}

impl LinkedView for LexisView {
    fn id(&self) -> ViewId {
        ViewId::Lexis
    }

    fn refresh(&mut self, dataset: &Dataset, state: &SelectionState) {
        self.visible = state
            .base()
            .iter()
            .copied()
            .filter(|id| dataset.get(*id).is_some_and(|l| state.gender_matches(l)))
            .collect();
    }
}

impl LexisView {
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
                " Leadership Timeline ",
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            )));
        let inner = block.inner(area);

        let stroke = |leader: &Leader| -> Color {
            match tier(leader, state) {
                Tier::Selected => COLOR_SELECTED,
                Tier::Highlighted => COLOR_HIGHLIGHT,
                Tier::Default if hovered == Some(leader.id) => COLOR_ARROW_HOVER,
                Tier::Default => COLOR_ARROW,
            }
        };

        let canvas = Canvas::default()
            .block(block)
            .x_bounds(YEAR_BOUNDS)
            .y_bounds(AGE_BOUNDS)
            .marker(Marker::Braille)
            .paint(|ctx| {
                // Two passes keep selected segments on top; the load-time
                // sort already draws highlighted rows above default ones.
                for selected_pass in [false, true] {
                    for id in &self.visible {
                        let Some(leader) = dataset.get(*id) else {
                            continue;
                        };
                        if (tier(leader, state) == Tier::Selected) != selected_pass {
                            continue;
                        }
                        ctx.draw(&CanvasLine {
                            x1: f64::from(leader.start_year),
                            y1: f64::from(leader.start_age),
                            x2: f64::from(leader.end_year),
                            y2: f64::from(leader.end_age),
                            color: stroke(leader),
                        });
                    }
                }
                ctx.layer();

                // Arrowheads and labels print above the strokes.
                for id in &self.visible {
                    let Some(leader) = dataset.get(*id) else {
                        continue;
                    };
                    let color = stroke(leader);
                    ctx.print(
                        f64::from(leader.end_year),
                        f64::from(leader.end_age),
                        Line::from(Span::styled("▶", Style::default().fg(color))),
                    );
                    let labeled = tier(leader, state) != Tier::Default
                        || hovered == Some(leader.id);
                    if labeled {
                        ctx.print(
                            f64::from(leader.start_year + leader.end_year) / 2.0,
                            f64::from(leader.start_age + leader.end_age) / 2.0,
                            Line::from(Span::styled(
                                leader.leader.clone(),
                                Style::default().fg(color),
                            )),
                        );
                    }
                }

                // Axis annotations; the domains are fixed.
                ctx.print(
                    YEAR_BOUNDS[0],
                    AGE_BOUNDS[1],
                    Line::from(Span::styled("Age", Style::default().fg(COLOR_DIM))),
                );
                ctx.print(
                    YEAR_BOUNDS[1] - 6.0,
                    AGE_BOUNDS[0],
                    Line::from(Span::styled("Year", Style::default().fg(COLOR_DIM))),
                );
            });
        frame.render_widget(canvas, area);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Hit areas along each stroke; selected segments register last so
        // they win overlaps, matching their draw order.
        for selected_pass in [false, true] {
            for id in &self.visible {
                let Some(leader) = dataset.get(*id) else {
                    continue;
                };
                if (tier(leader, state) == Tier::Selected) != selected_pass {
                    continue;
                }
                let a = (
                    project_x(f64::from(leader.start_year), YEAR_BOUNDS, inner),
                    project_y(f64::from(leader.start_age), AGE_BOUNDS, inner),
                );
                let b = (
                    project_x(f64::from(leader.end_year), YEAR_BOUNDS, inner),
                    project_y(f64::from(leader.end_age), AGE_BOUNDS, inner),
                );
                let hover = HoverTarget {
                    leader: *id,
                    view: ViewId::Lexis,
                };
                for (x, y) in segment_cells(a, b) {
                    registry.register_hover(
                        Rect {
                            x,
                            y,
                            width: 1,
                            height: 1,
                        },
                        ClickAction::ToggleLeader(*id),
                        hover,
                    );
                }
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
             A,Man One,M,1990,1995,50,55,5,1000,0,1,0,0,0,0\n\
             B,Woman One,F,1980,1990,45,55,10,2000,1,1,0,0,0,0\n\
             C,Woman Two,F,2000,2003,60,63,3,NA,0,1,0,0,0,0",
        )
        .unwrap()
    }

    #[test]
    fn visible_follows_the_base_set() {
        let data = dataset();
        let state = SelectionState::new(&data);
        let mut view = LexisView::new();
        view.refresh(&data, &state);
        assert_eq!(view.visible().len(), 3);
    }

    #[test]
    fn gender_filter_narrows_the_timeline() {
        let data = dataset();
        let mut state = SelectionState::new(&data);
        state.toggle_gender_filter(Gender::Female);
        let mut view = LexisView::new();
        view.refresh(&data, &state);
        assert_eq!(view.visible().len(), 2);
        for id in view.visible() {
            assert_eq!(data.get(*id).unwrap().gender, Gender::Female);
        }
    }

    #[test]
    fn tier_precedence_selected_over_highlighted() {
        let data = dataset();
        let mut state = SelectionState::new(&data);
        let highlighted = data
            .iter()
            .find(|l| l.is_highlighted())
            .map(|l| l.id)
            .unwrap();
        assert_eq!(tier(data.get(highlighted).unwrap(), &state), Tier::Highlighted);
        state.toggle_selected(highlighted);
        assert_eq!(tier(data.get(highlighted).unwrap(), &state), Tier::Selected);
    }
}
