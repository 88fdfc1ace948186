//! Sweep HTTP Client
//!
//! Loads jobs from the hosted job store and applies status changes. This is
//! the loader boundary: payload dates are normalized here before any record
//! reaches the filter engine.
//!
//! # Example
//!
//! ```no_run
//! use sweep_client::{JobBoard, SweepClient};
//! use sweep_core::role::Role;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = SweepClient::new("http://localhost:8080");
//!     let mut board = JobBoard::new(client, Role::Manager);
//!
//!     board.refresh().await?;
//!     board.set_query("office");
//!
//!     println!("{} job(s) visible", board.visible().len());
//!     Ok(())
//! }
//! ```

pub mod board;
pub mod error;
mod jobs;
pub mod payload;
pub mod source;

// Re-export commonly used types
pub use board::{JobBoard, LoadState};
pub use error::{ClientError, Result};
pub use source::JobSource;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the job store API
#[derive(Debug, Clone)]
pub struct SweepClient {
    /// Base URL of the job store (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl SweepClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the job store API (e.g., "http://localhost:8080")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the job store
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code and deserialize the JSON body
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
