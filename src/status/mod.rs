//! Status server access
//!
//! The refresh controller only sees the [`StatusSource`] trait; the reqwest
//! backed [`StatusClient`] is the production implementation.

use crate::environment::Environment;
use crate::status::error::StatusError;

pub(crate) mod client;
pub use client::StatusClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait StatusSource: Send + Sync {
    fn environment(&self) -> &Environment;

    /// GET `path` relative to the server and parse the body as JSON.
    ///
    /// Responses must never come from a cache.
    async fn fetch_json(&self, path: &str) -> Result<serde_json::Value, StatusError>;
}
