//! Dashboard state management
//!
//! Contains the dashboard state struct and the strategy-modal state machine

use crate::connection::HeatingStrategy;
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event as WorkerEvent;
use crate::store::StoreSnapshot;

use std::collections::VecDeque;

/// Heating-strategy selection modal, modeled as an explicit two-state
/// machine instead of an open/closed flag.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    SelectingStrategy { selected: HeatingStrategy },
}

impl ModalState {
    pub fn open(&mut self) {
        *self = ModalState::SelectingStrategy {
            selected: HeatingStrategy::default(),
        };
    }

    pub fn select_next(&mut self) {
        if let ModalState::SelectingStrategy { selected } = self {
            *selected = selected.next();
        }
    }

    pub fn select_prev(&mut self) {
        if let ModalState::SelectingStrategy { selected } = self {
            *selected = selected.prev();
        }
    }

    pub fn select(&mut self, strategy: HeatingStrategy) {
        if let ModalState::SelectingStrategy { selected } = self {
            *selected = strategy;
        }
    }

    /// Confirm the selection: closes the modal and hands back the chosen
    /// strategy. Returns `None` when the modal was not open.
    pub fn confirm(&mut self) -> Option<HeatingStrategy> {
        match *self {
            ModalState::Closed => None,
            ModalState::SelectingStrategy { selected } => {
                *self = ModalState::Closed;
                Some(selected)
            }
        }
    }

    /// Close without selecting anything.
    pub fn cancel(&mut self) {
        *self = ModalState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::SelectingStrategy { .. })
    }
}

/// Dashboard state: the latest store snapshot plus the view's own
/// transient UI state.
#[derive(Debug)]
pub struct DashboardState {
    /// Controller endpoint shown in the header.
    pub host: String,
    /// Latest store snapshot delivered by the telemetry poller.
    pub snapshot: StoreSnapshot,
    /// Whether telemetry is currently flowing.
    pub online: bool,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Animation tick counter
    pub tick: usize,

    /// Strategy modal; created closed, destroyed with the dashboard.
    modal: ModalState,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(host: String) -> Self {
        Self {
            host,
            snapshot: StoreSnapshot::default(),
            online: false,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
            modal: ModalState::Closed,
        }
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn modal_mut(&mut self) -> &mut ModalState {
        &mut self.modal
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_opens_on_the_default_strategy() {
        let mut modal = ModalState::Closed;
        modal.open();
        assert_eq!(
            modal,
            ModalState::SelectingStrategy {
                selected: HeatingStrategy::BrewOnly
            }
        );
    }

    #[test]
    fn modal_selection_cycles() {
        let mut modal = ModalState::Closed;
        modal.open();
        modal.select_next();
        modal.select_next();
        assert_eq!(
            modal,
            ModalState::SelectingStrategy {
                selected: HeatingStrategy::Parallel
            }
        );
        modal.select_prev();
        assert_eq!(
            modal,
            ModalState::SelectingStrategy {
                selected: HeatingStrategy::Sequential
            }
        );
    }

    #[test]
    fn confirm_returns_selection_and_closes() {
        let mut modal = ModalState::Closed;
        modal.open();
        modal.select(HeatingStrategy::SmartStagger);
        assert_eq!(modal.confirm(), Some(HeatingStrategy::SmartStagger));
        assert_eq!(modal, ModalState::Closed);
    }

    #[test]
    fn confirm_on_closed_modal_is_none() {
        let mut modal = ModalState::Closed;
        assert_eq!(modal.confirm(), None);
    }

    #[test]
    fn selection_on_closed_modal_is_ignored() {
        let mut modal = ModalState::Closed;
        modal.select_next();
        assert_eq!(modal, ModalState::Closed);
    }
}
