//! Controller state and the refresh transition guard.

use super::types::{Item, ItemId};

/// The list's single source of truth.
#[derive(Debug, Clone)]
pub struct ControllerState<I> {
    /// Items in display order.
    pub items: Vec<I>,
    /// Last page successfully loaded.
    pub page_index: usize,
    /// A load-more fetch is in flight.
    pub loading: bool,
    /// A refresh fetch is in flight.
    pub refreshing: bool,
    /// Whether a further load-more is permitted.
    pub continuation: bool,
    /// Identity of the single-selected item.
    pub selected_id: Option<ItemId>,
}

/// Coarse state of the fetch state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No fetch in flight.
    Idle,
    /// A refresh is in flight.
    Refreshing,
    /// A load-more is in flight.
    LoadingMore,
}

impl<I: Item> ControllerState<I> {
    pub(super) fn new(items: Vec<I>, page_index: usize, continuation: bool) -> Self {
        Self {
            items,
            page_index,
            loading: false,
            refreshing: false,
            continuation,
            selected_id: None,
        }
    }

    /// Current phase derived from the in-flight flags.
    pub fn phase(&self) -> Phase {
        if self.refreshing {
            Phase::Refreshing
        } else if self.loading {
            Phase::LoadingMore
        } else {
            Phase::Idle
        }
    }

    /// Whether the selected id still names an item in `items`.
    pub fn selection_is_live(&self) -> bool {
        match &self.selected_id {
            Some(id) => self.items.iter().any(|item| &item.id() == id),
            None => true,
        }
    }

    /// Drops the selected id if it no longer names a loaded item.
    pub(super) fn prune_selection(&mut self) -> bool {
        if self.selection_is_live() {
            return false;
        }
        self.selected_id = None;
        true
    }
}

/// Serializes refresh transitions.
///
/// Armed when a refresh is issued and disarmed when it completes or is
/// stopped. It is consulted synchronously before `refreshing` is touched, so
/// a completion that arrives after a stop cannot set the flag again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransitionGuard {
    armed: Option<u64>,
}

impl TransitionGuard {
    /// Arms the guard for `epoch`. Returns false if it was already armed.
    pub fn try_arm(&mut self, epoch: u64) -> bool {
        if self.armed.is_some() {
            return false;
        }
        self.armed = Some(epoch);
        true
    }

    /// Disarms the guard.
    pub fn disarm(&mut self) {
        self.armed = None;
    }

    /// Whether any refresh holds the guard.
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Whether the refresh of `epoch` still holds the guard.
    pub fn held_by(&self, epoch: u64) -> bool {
        self.armed == Some(epoch)
    }
}

/// Read-only copy of the list state, published after every transition.
#[derive(Debug, Clone)]
pub struct Snapshot<I> {
    /// Items in display order.
    pub items: Vec<I>,
    /// Last page successfully loaded.
    pub page_index: usize,
    /// Current phase.
    pub phase: Phase,
    /// Whether a further load-more is permitted.
    pub continuation: bool,
    /// Identity of the single-selected item.
    pub selected_id: Option<ItemId>,
}

impl<I: Item> From<&ControllerState<I>> for Snapshot<I> {
    fn from(state: &ControllerState<I>) -> Self {
        Self {
            items: state.items.clone(),
            page_index: state.page_index,
            phase: state.phase(),
            continuation: state.continuation,
            selected_id: state.selected_id.clone(),
        }
    }
}
