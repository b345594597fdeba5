//! Typed events and the publish/subscribe bus linking the views.
//!
//! The bus is a subscription table, not a queue: delivery is synchronous,
//! in-process, and fire-and-forget. `publish` resolves the subscribers
//! interested in an event's kind, in registration order, and the caller
//! refreshes them before the next input event is read.

use crate::data::model::{Gender, Region};

/// Events broadcast between the views and the coordinator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashboardEvent {
    /// The top-level region selector changed; selection state was reset.
    RegionChanged(Region),
    /// The gender filter toggled; `None` means it was cleared.
    GenderFilterChanged(Option<Gender>),
    /// The set of individually selected leaders changed.
    SelectionChanged,
}

impl DashboardEvent {
    /// Discriminant used for subscription matching.
    pub fn kind(&self) -> EventKind {
        match self {
            DashboardEvent::RegionChanged(_) => EventKind::Region,
            DashboardEvent::GenderFilterChanged(_) => EventKind::GenderFilter,
            DashboardEvent::SelectionChanged => EventKind::Selection,
        }
    }
}

/// Event category a view can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Region,
    GenderFilter,
    Selection,
}

/// Identifies one of the three linked views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Bar,
    Lexis,
    Scatter,
}

/// Synchronous subscription table over [`DashboardEvent`] kinds.
#[derive(Debug, Default)]
pub struct EventBus {
    subscriptions: Vec<(ViewId, Vec<EventKind>)>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view's interest. Registration order is delivery order.
    pub fn subscribe(&mut self, view: ViewId, kinds: &[EventKind]) {
        self.subscriptions.push((view, kinds.to_vec()));
    }

    /// Resolve the views to notify for an event, in registration order.
    pub fn publish(&self, event: DashboardEvent) -> Vec<ViewId> {
        let kind = event.kind();
        let targets: Vec<ViewId> = self
            .subscriptions
            .iter()
            .filter(|(_, kinds)| kinds.contains(&kind))
            .map(|(view, _)| *view)
            .collect();
        tracing::debug!(?event, ?targets, "event published");
        targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wired_bus() -> EventBus {
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
        bus
    }

    #[test]
    fn event_kinds_match_variants() {
        assert_eq!(
            DashboardEvent::RegionChanged(Region::Eu).kind(),
            EventKind::Region
        );
        assert_eq!(
            DashboardEvent::GenderFilterChanged(Some(Gender::Female)).kind(),
            EventKind::GenderFilter
        );
        assert_eq!(DashboardEvent::SelectionChanged.kind(), EventKind::Selection);
    }

    #[test]
    fn region_events_reach_all_views_in_registration_order() {
        let bus = wired_bus();
        let targets = bus.publish(DashboardEvent::RegionChanged(Region::Brics));
        assert_eq!(targets, [ViewId::Bar, ViewId::Lexis, ViewId::Scatter]);
    }

    #[test]
    fn gender_events_skip_the_bar_view() {
        let bus = wired_bus();
        let targets = bus.publish(DashboardEvent::GenderFilterChanged(Some(Gender::Male)));
        assert_eq!(targets, [ViewId::Lexis, ViewId::Scatter]);
    }

    #[test]
    fn selection_events_skip_the_bar_view() {
        let bus = wired_bus();
        let targets = bus.publish(DashboardEvent::SelectionChanged);
        assert_eq!(targets, [ViewId::Lexis, ViewId::Scatter]);
    }

    #[test]
    fn unsubscribed_bus_delivers_nothing() {
        let bus = EventBus::new();
        assert!(bus.publish(DashboardEvent::SelectionChanged).is_empty());
    }
}
