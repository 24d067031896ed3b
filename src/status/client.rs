//! Status Server Client
//!
//! Fetches JSON status documents over HTTP, bypassing every cache layer.

use crate::environment::Environment;
use crate::status::StatusSource;
use crate::status::error::StatusError;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::{Client, ClientBuilder, Response};
use std::time::Duration;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("status-panel/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct StatusClient {
    client: Client,
    environment: Environment,
}

impl StatusClient {
    /// Creates a client for `environment`. A `timeout` of `None` lets requests hang indefinitely.
    pub fn new(environment: Environment, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.connect_timeout(timeout).timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.server_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn handle_response_status(path: &str, response: Response) -> Result<Response, StatusError> {
        if !response.status().is_success() {
            return Err(StatusError::from_response(path, &response));
        }
        Ok(response)
    }

    fn decode_response(path: &str, bytes: &[u8]) -> Result<serde_json::Value, StatusError> {
        serde_json::from_slice(bytes).map_err(|source| StatusError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

#[async_trait::async_trait]
impl StatusSource for StatusClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn fetch_json(&self, path: &str) -> Result<serde_json::Value, StatusError> {
        let transport = |source| StatusError::Transport {
            path: path.to_string(),
            source,
        };

        let url = self.build_url(path);
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header(CACHE_CONTROL, "no-cache, no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(transport)?;

        let response = Self::handle_response_status(path, response)?;
        let response_bytes = response.bytes().await.map_err(transport)?;
        Self::decode_response(path, &response_bytes)
    }
}
