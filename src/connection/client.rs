//! BrewOS Controller Client
//!
//! An HTTP client for the controller's status and command endpoints.

use crate::connection::Connection;
use crate::connection::command::Command;
use crate::connection::error::ConnectionError;
use crate::consts::cli_consts::telemetry;
use crate::store::StoreSnapshot;
use reqwest::{Client, ClientBuilder, Response};

// User-Agent string with the monitor version
const USER_AGENT: &str = concat!("brewos-monitor/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct HttpConnection {
    client: Client,
    base_url: String,
}

impl HttpConnection {
    pub fn new(base_url: String) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(telemetry::request_timeout())
                .timeout(telemetry::request_timeout())
                .build()
                .expect("Failed to create HTTP client"),
            base_url,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ConnectionError> {
        if !response.status().is_success() {
            return Err(ConnectionError::from_response(response).await);
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl Connection for HttpConnection {
    async fn fetch_status(&self) -> Result<StoreSnapshot, ConnectionError> {
        let url = self.build_url("api/status");
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        let snapshot = serde_json::from_slice(&response_bytes)?;
        Ok(snapshot)
    }

    async fn send_command(&self, command: &Command) -> Result<(), ConnectionError> {
        let url = self.build_url("api/command");
        let response = self
            .client
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .json(command)
            .send()
            .await?;

        Self::handle_response_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_normalizes_slashes() {
        let connection = HttpConnection::new("http://brewos.local/".to_string());
        assert_eq!(
            connection.build_url("/api/status"),
            "http://brewos.local/api/status"
        );
    }
}
