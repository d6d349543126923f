//! Dashboard state update logic
//!
//! Contains the methods for updating dashboard state from worker events

use super::state::DashboardState;

use crate::events::{Event as WorkerEvent, EventType, Source};

impl DashboardState {
    /// Update the dashboard state with new tick and queued events.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            // Telemetry ticks arrive every second and would flood the ring,
            // so only displayable events are kept for the log panel.
            if event.event_type != EventType::StateChange {
                self.add_to_activity_log(event.clone());
            }

            self.process_event(event);
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: WorkerEvent) {
        if let Some(snapshot) = event.snapshot {
            self.snapshot = *snapshot;
            self.online = true;
            return;
        }

        // A telemetry error means the poller lost the controller.
        if event.source == Source::Telemetry && event.event_type == EventType::Error {
            self.online = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Event;
    use crate::logging::LogLevel;
    use crate::store::{MachineMode, StoreSnapshot};

    fn snapshot_with_mode(mode: MachineMode) -> StoreSnapshot {
        let mut snapshot = StoreSnapshot::default();
        snapshot.machine.mode = mode;
        snapshot
    }

    #[test]
    fn telemetry_event_replaces_snapshot_and_marks_online() {
        let mut state = DashboardState::new("http://brewos.local".to_string());
        state.add_event(Event::telemetry(snapshot_with_mode(MachineMode::Eco)));
        state.update();

        assert!(state.online);
        assert_eq!(state.snapshot.machine.mode, MachineMode::Eco);
        // Snapshot ticks stay out of the activity log
        assert!(state.activity_logs.is_empty());
    }

    #[test]
    fn telemetry_error_marks_offline() {
        let mut state = DashboardState::new("http://brewos.local".to_string());
        state.add_event(Event::telemetry(StoreSnapshot::default()));
        state.add_event(Event::telemetry_with_level(
            "Controller unreachable".to_string(),
            EventType::Error,
            LogLevel::Warn,
        ));
        state.update();

        assert!(!state.online);
        assert_eq!(state.activity_logs.len(), 1);
    }
}
