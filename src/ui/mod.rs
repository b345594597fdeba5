//! UI rendering for the linked-views dashboard.
//!
//! [`render`] runs one draw pass: clear the hit registry, lay out the
//! frame, draw the region tabs and the three views (each registering its
//! hit areas), re-resolve the hover target against the fresh areas, and
//! float the tooltip above everything.

pub mod bar_chart;
pub mod interaction;
pub mod layout;
pub mod lexis_chart;
pub mod project;
pub mod region_tabs;
pub mod scatter_chart;
pub mod theme;
pub mod tooltip;

pub use interaction::{handle_click_action, ClickAction, HitAreaRegistry, HoverTarget};

use ratatui::Frame;

use crate::app::App;
use crate::data::model::Dataset;
use crate::events::ViewId;
use crate::selection::SelectionState;

/// Fixed year domain of the timeline.
pub const YEAR_BOUNDS: [f64; 2] = [1950.0, 2023.0];

/// Fixed age domain shared by the timeline and the scatter y-axis.
pub const AGE_BOUNDS: [f64; 2] = [25.0, 95.0];

/// The capability each chart exposes to the event bus: an identity plus
/// an update pass recomputing cached display data from the dataset and
/// the shared selection state. Drawing stays view-specific.
pub trait LinkedView {
    fn id(&self) -> ViewId;
    fn refresh(&mut self, dataset: &Dataset, state: &SelectionState);
}

/// Draw one full frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    let App {
        dataset,
        config,
        coordinator,
        bar,
        lexis,
        scatter,
        hit_registry,
        hovered,
        mouse,
        ..
    } = app;
    let state = coordinator.state();

    let lexis_hover = match hovered {
        Some(h) if h.view == ViewId::Lexis => Some(h.leader),
        _ => None,
    };
    let scatter_hover = match hovered {
        Some(h) if h.view == ViewId::Scatter => Some(h.leader),
        _ => None,
    };

    hit_registry.clear();
    let areas = layout::chart_areas(frame.area(), config);

    region_tabs::render_region_tabs(frame, areas.tabs, state.region(), hit_registry);
    lexis.draw(frame, areas.lexis, dataset, state, hit_registry, lexis_hover);
    bar.draw(frame, areas.bar, state, config, hit_registry);
    scatter.draw(
        frame,
        areas.scatter,
        dataset,
        state,
        hit_registry,
        scatter_hover,
    );

    // The hit areas may have moved with the layout; re-resolve the hover
    // against the fresh registry before floating the tooltip.
    *hovered = hit_registry.hover_at(mouse.0, mouse.1);
    if let Some(target) = hovered {
        if let Some(leader) = dataset.get(target.leader) {
            tooltip::render_tooltip(frame, leader, *mouse, config);
        }
    }
}
