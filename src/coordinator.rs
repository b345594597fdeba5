//! Wires selection-state mutations to event delivery.
//!
//! Every mutation entry point of the dashboard lives here: the coordinator
//! owns the [`SelectionState`] and the [`EventBus`], applies the mutation,
//! and returns the ordered list of views the caller must refresh. State is
//! fully settled before the target list is returned, so subscribers never
//! observe a partial update.

use crate::data::model::{Dataset, Gender, LeaderId, Region};
use crate::events::{DashboardEvent, EventBus, EventKind, ViewId};
use crate::selection::SelectionState;

pub struct Coordinator {
    state: SelectionState,
    bus: EventBus,
}

impl Coordinator {
    /// Build the coordinator and register the fixed subscription table:
    /// the bar chart only reacts to region changes (it always reflects the
    /// full base set it toggles over), while the timeline and the scatter
    /// react to everything.
    pub fn new(dataset: &Dataset) -> Self {
        let mut bus = EventBus::new();
        bus.subscribe(ViewId::Bar, &[EventKind::Region]);
        bus.subscribe(
            ViewId::Lexis,
            &[EventKind::Region, EventKind::GenderFilter, EventKind::Selection],
        );
        bus.subscribe(
            ViewId::Scatter,
            &[EventKind::Region, EventKind::GenderFilter, EventKind::Selection],
        );
        Self {
            state: SelectionState::new(dataset),
            bus,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Region selector changed: replace the base set, reset the gender
    /// filter and the selection, notify all views.
    pub fn select_region(&mut self, dataset: &Dataset, region: Region) -> Vec<ViewId> {
        self.state.set_region_filter(dataset, region);
        tracing::info!(
            region = region.label(),
            records = self.state.base().len(),
            "region filter applied"
        );
        self.bus.publish(DashboardEvent::RegionChanged(region))
    }

    /// Bar category clicked: toggle the gender filter, prune the selection
    /// to the surviving gender, then notify subscribers.
    pub fn toggle_gender(&mut self, dataset: &Dataset, gender: Gender) -> Vec<ViewId> {
        let filter = self.state.toggle_gender_filter(gender);
        self.state.prune_selection_to_gender(dataset);
        self.bus.publish(DashboardEvent::GenderFilterChanged(filter))
    }

    /// Segment or point clicked: toggle the record in the active set.
    pub fn toggle_leader(&mut self, id: LeaderId) -> Vec<ViewId> {
        let selected = self.state.toggle_selected(id);
        tracing::debug!(id = id.0, selected, "selection toggled");
        self.bus.publish(DashboardEvent::SelectionChanged)
    }

    /// Scatter background clicked: empty the active set.
    pub fn clear_selection(&mut self) -> Vec<ViewId> {
        self.state.clear_selected();
        self.bus.publish(DashboardEvent::SelectionChanged)
    }
}
