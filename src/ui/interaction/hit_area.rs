//! Hit area registry for mouse interaction.
//!
//! Views register clickable cell regions during each draw pass; the event
//! loop hit-tests mouse clicks against the registry and resolves hover
//! targets for tooltips. The registry is purely geometric: hover state
//! lives on the `App`, so a redraw cannot drop an active hover.

use ratatui::layout::Rect;

use crate::data::model::{Gender, LeaderId, Region};
use crate::events::ViewId;

/// An action triggered by clicking a hit area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickAction {
    /// Switch the top-level region filter.
    SelectRegion(Region),
    /// Toggle the gender filter (bar chart category).
    ToggleGender(Gender),
    /// Toggle one leader in or out of the selection.
    ToggleLeader(LeaderId),
    /// Clear the whole selection (scatter background).
    ClearSelection,
}

/// A hovered record, for tooltips and stroke promotion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverTarget {
    pub leader: LeaderId,
    pub view: ViewId,
}

/// A clickable cell region with an associated action.
#[derive(Debug, Clone, Copy)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
    /// Hover payload; areas without one (region tabs, dimmed points,
    /// chart backgrounds) still occlude areas beneath them.
    pub hover: Option<HoverTarget>,
}

impl HitArea {
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry of hit areas for one draw pass.
///
/// Areas registered later win over earlier ones on overlap (z-order: last
/// registered = on top); the scatter view relies on this to put its points
/// above its background clear area.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all areas. Called at the start of each draw pass.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        self.areas.push(HitArea {
            rect,
            action,
            hover: None,
        });
    }

    pub fn register_hover(&mut self, rect: Rect, action: ClickAction, hover: HoverTarget) {
        self.areas.push(HitArea {
            rect,
            action,
            hover: Some(hover),
        });
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Topmost action at a position, if any.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action)
    }

    /// Hover payload of the topmost area at a position.
    ///
    /// The topmost area decides: an area without a hover payload yields
    /// `None` even when a hoverable area lies beneath it, so a dimmed
    /// scatter point suppresses tooltips for anything it covers.
    pub fn hover_at(&self, x: u16, y: u16) -> Option<HoverTarget> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .and_then(|area| area.hover)
    }
}
