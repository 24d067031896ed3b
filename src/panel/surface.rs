//! Display surface states and the capability to write them.

use crate::consts::cli_consts::{ERROR_MARKER, LOADING_TEXT};
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

/// What a display surface currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceState {
    /// Fetch in flight.
    Pending,
    /// Pretty-printed JSON.
    Populated(String),
    /// Description of why the fetch failed.
    Failed(String),
}

impl SurfaceState {
    /// The text the surface displays.
    pub fn text(&self) -> String {
        match self {
            SurfaceState::Pending => LOADING_TEXT.to_string(),
            SurfaceState::Populated(text) => text.clone(),
            SurfaceState::Failed(message) => format!("{}: {}", ERROR_MARKER, message),
        }
    }

    /// True once the fetch for this surface has settled.
    pub fn is_settled(&self) -> bool {
        !matches!(self, SurfaceState::Pending)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("no display surface with id '{0}'")]
    MissingTarget(String),

    #[error("display surface '{0}' is no longer attached")]
    Detached(String),
}

/// Writes states into display surfaces by id.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait SurfaceSink: Send + Sync {
    async fn set_surface(&self, target_id: &str, state: SurfaceState) -> Result<(), SurfaceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_text_per_state() {
        assert_eq!(SurfaceState::Pending.text(), "Loading...");
        assert_eq!(
            SurfaceState::Populated("{}".to_string()).text(),
            "{}".to_string()
        );
        assert_eq!(
            SurfaceState::Failed("/health -> 500".to_string()).text(),
            "Error: /health -> 500"
        );
    }

    #[test]
    fn only_pending_is_unsettled() {
        assert!(!SurfaceState::Pending.is_settled());
        assert!(SurfaceState::Populated(String::new()).is_settled());
        assert!(SurfaceState::Failed(String::new()).is_settled());
    }
}
