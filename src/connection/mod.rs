//! Controller connection layer: HTTP client, command shapes, and the
//! fire-and-forget dispatcher the dashboard sends through.

use crate::store::StoreSnapshot;

pub(crate) mod client;
pub use client::HttpConnection;
pub mod command;
pub use command::{Command, HeatingStrategy};
pub mod dispatcher;
pub use dispatcher::{CommandDispatcher, CommandSink};
pub mod error;
pub use error::ConnectionError;

#[cfg(test)]
use mockall::automock;

/// Client side of the controller API.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Connection: Send + Sync {
    /// Fetch the current status snapshot.
    async fn fetch_status(&self) -> Result<StoreSnapshot, ConnectionError>;

    /// Deliver a command to the controller. No acknowledgement is modeled;
    /// callers treat delivery as best-effort.
    async fn send_command(&self, command: &Command) -> Result<(), ConnectionError>;
}
