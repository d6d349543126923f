//! Fire-and-forget command dispatch.

use crate::connection::Connection;
use crate::connection::command::Command;
use crate::events::EventType;
use crate::logging::LogLevel;
use crate::workers::core::EventSender;
use std::sync::Arc;

/// Outbound command capability injected into the dashboard's input layer.
///
/// Dispatch never blocks and surfaces no delivery result to the caller; a
/// dropped command simply produces no state change on screen.
#[cfg_attr(test, mockall::automock)]
pub trait CommandSink {
    fn dispatch(&self, command: Command);
}

pub struct CommandDispatcher {
    connection: Arc<dyn Connection>,
    events: EventSender,
}

impl CommandDispatcher {
    pub fn new(connection: Arc<dyn Connection>, events: EventSender) -> Self {
        Self { connection, events }
    }
}

impl CommandSink for CommandDispatcher {
    fn dispatch(&self, command: Command) {
        let connection = self.connection.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let described = command.describe();
            match connection.send_command(&command).await {
                Ok(()) => {
                    events
                        .send_command_event(
                            format!("Sent {}", described),
                            EventType::Success,
                            LogLevel::Debug,
                        )
                        .await
                }
                // Delivery failures never reach the dashboard as errors; they
                // show up in the activity log only with debug logging on.
                Err(e) => {
                    events
                        .send_command_event(
                            format!("Dropped {}: {}", described, e),
                            EventType::Error,
                            LogLevel::Debug,
                        )
                        .await
                }
            }
        });
    }
}
