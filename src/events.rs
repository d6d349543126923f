//! Event System
//!
//! Types for the events workers push to the UI loop.

use crate::logging::{LogLevel, should_log_with_env};
use crate::store::StoreSnapshot;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Source {
    /// Worker that polls the controller for status snapshots.
    Telemetry,
    /// Fire-and-forget command delivery.
    Command,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    StateChange,
}

#[derive(Debug, Clone)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Snapshot payload for telemetry state-change events.
    pub snapshot: Option<Box<StoreSnapshot>>,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            snapshot: None,
        }
    }

    /// A fresh store snapshot from the telemetry poller.
    pub fn telemetry(snapshot: StoreSnapshot) -> Self {
        Self {
            source: Source::Telemetry,
            msg: "status updated".to_string(),
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type: EventType::StateChange,
            log_level: LogLevel::Debug,
            snapshot: Some(Box::new(snapshot)),
        }
    }

    pub fn telemetry_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Telemetry, msg, event_type, log_level)
    }

    pub fn command_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Command, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // StateChange events feed the store, not the activity log
        if self.event_type == EventType::StateChange {
            return false;
        }
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_change_events_are_not_displayed() {
        let event = Event::telemetry(StoreSnapshot::default());
        assert!(!event.should_display());
        assert!(event.snapshot.is_some());
    }

    #[test]
    fn success_events_are_always_displayed() {
        let event = Event::command_with_level(
            "Sent set_mode standby".to_string(),
            EventType::Success,
            LogLevel::Debug,
        );
        assert!(event.should_display());
    }
}
