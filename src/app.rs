//! Application state: dataset, coordination core, views, and interaction.

use crate::config::DashboardConfig;
use crate::coordinator::Coordinator;
use crate::data::model::{Dataset, Gender, LeaderId, Region};
use crate::events::ViewId;
use crate::selection::SelectionState;
use crate::ui::bar_chart::BarView;
use crate::ui::lexis_chart::LexisView;
use crate::ui::scatter_chart::ScatterView;
use crate::ui::{HitAreaRegistry, HoverTarget, LinkedView};

pub struct App {
    pub dataset: Dataset,
    pub config: DashboardConfig,
    pub coordinator: Coordinator,
    pub bar: BarView,
    pub lexis: LexisView,
    pub scatter: ScatterView,
    /// Hit areas registered by the most recent draw pass.
    pub hit_registry: HitAreaRegistry,
    /// Record under the mouse, if any; drives tooltips and hover styling.
    pub hovered: Option<HoverTarget>,
    /// Last observed mouse position.
    pub mouse: (u16, u16),
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl App {
    /// Build the app and run the initial refresh of all three views.
    pub fn new(dataset: Dataset, config: DashboardConfig) -> Self {
        let coordinator = Coordinator::new(&dataset);
        let mut app = Self {
            dataset,
            config,
            coordinator,
            bar: BarView::new(),
            lexis: LexisView::new(),
            scatter: ScatterView::new(),
            hit_registry: HitAreaRegistry::new(),
            hovered: None,
            mouse: (0, 0),
            needs_redraw: true,
            should_quit: false,
        };
        app.refresh_views(&[ViewId::Bar, ViewId::Lexis, ViewId::Scatter]);
        app
    }

    pub fn state(&self) -> &SelectionState {
        self.coordinator.state()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Refresh views in bus delivery order.
    pub fn refresh_views(&mut self, targets: &[ViewId]) {
        let App {
            dataset,
            coordinator,
            bar,
            lexis,
            scatter,
            ..
        } = self;
        let state = coordinator.state();
        let mut views: [&mut dyn LinkedView; 3] = [bar, lexis, scatter];
        for id in targets {
            if let Some(view) = views.iter_mut().find(|v| v.id() == *id) {
                view.refresh(dataset, state);
            }
        }
    }

    /// Apply a region selection. A no-op when the region is already
    /// active, as a selector only fires on actual change.
    pub fn select_region(&mut self, region: Region) {
        if region == self.coordinator.state().region() {
            return;
        }
        let targets = self.coordinator.select_region(&self.dataset, region);
        self.refresh_views(&targets);
        self.mark_dirty();
    }

    /// Keyboard affordance: step through the selector order.
    pub fn cycle_region(&mut self, forward: bool) {
        let current = self.coordinator.state().region();
        let next = if forward { current.next() } else { current.prev() };
        self.select_region(next);
    }

    pub fn toggle_gender(&mut self, gender: Gender) {
        let targets = self.coordinator.toggle_gender(&self.dataset, gender);
        self.refresh_views(&targets);
        self.mark_dirty();
    }

    /// Toggle a leader in or out of the selection. Off-gender records are
    /// inert while a gender filter is active.
    pub fn toggle_leader(&mut self, id: LeaderId) {
        let allowed = self
            .dataset
            .get(id)
            .is_some_and(|l| self.coordinator.state().gender_matches(l));
        if !allowed {
            tracing::debug!(id = id.0, "leader inert under gender filter");
            return;
        }
        let targets = self.coordinator.toggle_leader(id);
        self.refresh_views(&targets);
        self.mark_dirty();
    }

    /// Same operation as the scatter background click.
    pub fn clear_selection(&mut self) {
        let targets = self.coordinator.clear_selection();
        self.refresh_views(&targets);
        self.mark_dirty();
    }

    /// Route a left click through the hit areas of the last draw pass.
    pub fn on_mouse_down(&mut self, x: u16, y: u16) {
        if let Some(action) = self.hit_registry.hit_test(x, y) {
            crate::ui::handle_click_action(self, action);
        }
    }

    /// Track the mouse and re-resolve the hover target. Returns true when
    /// a redraw is needed (hover changed, or the tooltip follows the
    /// pointer while something is hovered).
    pub fn on_mouse_moved(&mut self, x: u16, y: u16) -> bool {
        self.mouse = (x, y);
        let target = self.hit_registry.hover_at(x, y);
        let changed = target != self.hovered;
        self.hovered = target;
        changed || self.hovered.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_dataset;

    fn test_app() -> App {
        let dataset = parse_dataset(
            "country,leader,gender,start_year,end_year,start_age,end_age,duration,pcgdp,label,oecd,eu,brics,gseven,gtwenty\n\
             Germany,Angela Merkel,F,2005,2021,51,67,16,34696,1,1,1,0,1,1\n\
             UK,Tony Blair,M,1997,2007,43,53,10,26000,0,1,1,0,1,1\n\
             India,Indira Gandhi,F,1966,1977,48,59,11,NA,1,0,0,1,0,1",
        )
        .unwrap();
        App::new(dataset, DashboardConfig::default())
    }

    #[test]
    fn new_app_starts_with_refreshed_views() {
        let app = test_app();
        assert_eq!(app.bar.counts().iter().map(|(_, n)| n).sum::<usize>(), 2);
        assert_eq!(app.lexis.visible().len(), 2);
        assert_eq!(app.scatter.displayed().len(), 2);
        assert!(app.needs_redraw);
    }

    #[test]
    fn selecting_the_active_region_is_a_no_op() {
        let mut app = test_app();
        let id = app.state().base()[0];
        app.toggle_leader(id);
        app.select_region(Region::Oecd);
        // the selection survived: no reset happened
        assert!(app.state().is_selected(id));
    }

    #[test]
    fn switching_regions_resets_and_refreshes_every_view() {
        let mut app = test_app();
        app.toggle_gender(Gender::Female);
        app.select_region(Region::GTwenty);
        assert_eq!(app.state().gender_filter(), None);
        assert_eq!(app.lexis.visible().len(), 3);
        assert_eq!(app.bar.counts().iter().map(|(_, n)| n).sum::<usize>(), 3);
    }

    #[test]
    fn gender_toggle_leaves_bar_counts_untouched() {
        let mut app = test_app();
        let before = app.bar.counts().to_vec();
        app.toggle_gender(Gender::Female);
        assert_eq!(app.bar.counts(), before);
        // but the timeline narrowed
        assert_eq!(app.lexis.visible().len(), 1);
    }

    #[test]
    fn cycle_region_steps_through_the_selector_order() {
        let mut app = test_app();
        app.cycle_region(true);
        assert_eq!(app.state().region(), Region::Eu);
        app.cycle_region(false);
        assert_eq!(app.state().region(), Region::Oecd);
        app.cycle_region(false);
        assert_eq!(app.state().region(), Region::GTwenty);
    }
}
