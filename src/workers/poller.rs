//! Telemetry polling worker.
//!
//! Owns the poll loop: fetch a snapshot every tick, forward it to the UI
//! loop, and report connection edges without repeating noise every tick.

use crate::connection::Connection;
use crate::consts::cli_consts::telemetry;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::workers::core::EventSender;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Spawn the poll loop. The task runs until the shutdown signal fires.
pub fn spawn_poller(
    connection: Arc<dyn Connection>,
    events: EventSender,
    mut shutdown: broadcast::Receiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(telemetry::poll_interval());
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        // None until the first poll resolves, then tracks the last edge so
        // lost/restored messages fire once per transition.
        let mut online: Option<bool> = None;

        loop {
            tokio::select! {
                _ = shutdown.recv() => break,
                _ = interval.tick() => {
                    match connection.fetch_status().await {
                        Ok(snapshot) => {
                            if online != Some(true) {
                                events
                                    .send_telemetry_event(
                                        "Controller connected".to_string(),
                                        EventType::Success,
                                        LogLevel::Info,
                                    )
                                    .await;
                                online = Some(true);
                            }
                            events.send_event(Event::telemetry(snapshot)).await;
                        }
                        Err(err) => {
                            if online != Some(false) {
                                events
                                    .send_telemetry_event(
                                        format!("Controller unreachable: {}", err),
                                        EventType::Error,
                                        err.log_level(),
                                    )
                                    .await;
                                online = Some(false);
                            }
                        }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::{ConnectionError, MockConnection};
    use crate::events::Source;
    use crate::store::StoreSnapshot;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn reports_connection_edges_and_forwards_snapshots() {
        let mut connection = MockConnection::new();
        let calls = AtomicUsize::new(0);
        connection.expect_fetch_status().returning(move || {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(ConnectionError::Http {
                    status: 500,
                    message: "down".to_string(),
                })
            } else {
                Ok(StoreSnapshot::default())
            }
        });

        let (sender, mut receiver) = mpsc::channel(16);
        let (shutdown_sender, _) = broadcast::channel(1);
        let handle = spawn_poller(
            Arc::new(connection),
            EventSender::new(sender),
            shutdown_sender.subscribe(),
        );

        // First poll fails: one loud edge event, no snapshot.
        let event = receiver.recv().await.expect("edge event");
        assert_eq!(event.source, Source::Telemetry);
        assert_eq!(event.event_type, EventType::Error);
        assert!(event.snapshot.is_none());

        // Second poll succeeds: restored edge, then the snapshot itself.
        let event = receiver.recv().await.expect("restored event");
        assert_eq!(event.event_type, EventType::Success);

        let event = receiver.recv().await.expect("telemetry event");
        assert_eq!(event.event_type, EventType::StateChange);
        assert!(event.snapshot.is_some());

        shutdown_sender.send(()).expect("poller subscribed");
        handle.await.expect("poller exits cleanly");
    }
}
