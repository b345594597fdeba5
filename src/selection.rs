//! Shared selection and filter state for the linked views.
//!
//! One instance, owned by the coordinator and passed by reference into
//! view refresh and draw passes. Mutation happens only through the
//! operations below; each leaves the state internally consistent, so a
//! re-entrant render never observes a partial update.

use std::collections::HashSet;

use crate::data::model::{Dataset, Gender, Leader, LeaderId, Region};

/// The dashboard's shared mutable state: the region-filtered base set, the
/// optional gender filter, and the set of individually selected records.
#[derive(Debug, Clone)]
pub struct SelectionState {
    region: Region,
    base: Vec<LeaderId>,
    gender_filter: Option<Gender>,
    active: HashSet<LeaderId>,
}

impl SelectionState {
    /// Initial state: the OECD subset, no gender filter, nothing selected.
    pub fn new(dataset: &Dataset) -> Self {
        Self::with_region(dataset, Region::Oecd)
    }

    pub fn with_region(dataset: &Dataset, region: Region) -> Self {
        Self {
            region,
            base: dataset.ids_in_region(region),
            gender_filter: None,
            active: HashSet::new(),
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Records surviving the region predicate, in draw order.
    pub fn base(&self) -> &[LeaderId] {
        &self.base
    }

    pub fn gender_filter(&self) -> Option<Gender> {
        self.gender_filter
    }

    pub fn active(&self) -> &HashSet<LeaderId> {
        &self.active
    }

    pub fn is_selected(&self, id: LeaderId) -> bool {
        self.active.contains(&id)
    }

    /// Whether a record passes the gender filter (vacuously true without one).
    pub fn gender_matches(&self, leader: &Leader) -> bool {
        self.gender_filter.map_or(true, |g| leader.gender == g)
    }

    /// Replace the base set wholesale and reset both filters.
    pub fn set_region_filter(&mut self, dataset: &Dataset, region: Region) {
        self.region = region;
        self.base = dataset.ids_in_region(region);
        self.gender_filter = None;
        self.active.clear();
    }

    /// Toggle the gender filter; selecting the active gender clears it.
    /// Returns the new filter value.
    pub fn toggle_gender_filter(&mut self, gender: Gender) -> Option<Gender> {
        self.gender_filter = if self.gender_filter == Some(gender) {
            None
        } else {
            Some(gender)
        };
        self.gender_filter
    }

    /// Toggle a record in or out of the active set.
    /// Returns whether the record is selected afterwards.
    pub fn toggle_selected(&mut self, id: LeaderId) -> bool {
        if self.active.insert(id) {
            true
        } else {
            self.active.remove(&id);
            false
        }
    }

    /// Empty the active set.
    pub fn clear_selected(&mut self) {
        self.active.clear();
    }

    /// Drop active records not matching the current gender filter.
    ///
    /// The coordinator invokes this after every gender-filter change,
    /// before subscribers refresh, so no view observes a mixed selection.
    pub fn prune_selection_to_gender(&mut self, dataset: &Dataset) {
        if let Some(gender) = self.gender_filter {
            self.active
                .retain(|id| dataset.get(*id).is_some_and(|l| l.gender == gender));
        }
    }
}
