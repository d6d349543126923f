//! Error handling for the connection module

use crate::logging::LogLevel;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectionError {
    /// Failed to decode a status payload from the controller
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// An error occurred while processing the request.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl ConnectionError {
    pub async fn from_response(response: reqwest::Response) -> ConnectionError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ConnectionError::Http { status, message }
    }

    /// Severity for the activity log. Transient network trouble stays quiet;
    /// anything pointing at a broken controller is loud.
    pub fn log_level(&self) -> LogLevel {
        match self {
            // Non-critical: the controller is busy or briefly away
            ConnectionError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,
            ConnectionError::Http { .. } => LogLevel::Error,

            // A payload we cannot read means a protocol mismatch
            ConnectionError::Decode(_) => LogLevel::Error,

            // Network issues - usually temporary
            ConnectionError::Reqwest(_) => LogLevel::Warn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_warnings() {
        let err = ConnectionError::Http {
            status: 503,
            message: "busy".to_string(),
        };
        assert_eq!(err.log_level(), LogLevel::Warn);
    }

    #[test]
    fn client_errors_are_errors() {
        let err = ConnectionError::Http {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(err.log_level(), LogLevel::Error);
    }

    #[test]
    fn decode_failures_are_errors() {
        let decode_err = serde_json::from_str::<crate::store::StoreSnapshot>("not json")
            .expect_err("must fail");
        assert_eq!(ConnectionError::Decode(decode_err).log_level(), LogLevel::Error);
    }
}
