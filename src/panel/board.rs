//! In-memory display surfaces.

use super::binding::ResourceBinding;
use super::surface::{SurfaceError, SurfaceSink, SurfaceState};
use chrono::Local;
use std::sync::{Mutex, MutexGuard};

/// One display surface and when it last changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    pub target_id: String,
    pub state: SurfaceState,
    /// Local time of the last write, `None` until the first one.
    pub updated_at: Option<String>,
}

impl Surface {
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            state: SurfaceState::Pending,
            updated_at: None,
        }
    }

    pub fn set(&mut self, state: SurfaceState) {
        self.state = state;
        self.updated_at = Some(Local::now().format("%Y-%m-%d %H:%M:%S").to_string());
    }
}

/// A fixed set of surfaces, in binding order, addressable by id.
#[derive(Debug, Default)]
pub struct SurfaceBoard {
    surfaces: Mutex<Vec<Surface>>,
}

impl SurfaceBoard {
    pub fn new<I, S>(target_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            surfaces: Mutex::new(target_ids.into_iter().map(Surface::new).collect()),
        }
    }

    pub fn for_bindings(bindings: &[ResourceBinding]) -> Self {
        Self::new(bindings.iter().map(|b| b.target_id.clone()))
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Surface>> {
        // A writer never panics while holding the lock, so poisoning carries no torn state.
        self.surfaces.lock().unwrap_or_else(|e| e.into_inner())
    }

    #[cfg(test)]
    pub fn state(&self, target_id: &str) -> Option<SurfaceState> {
        self.lock()
            .iter()
            .find(|s| s.target_id == target_id)
            .map(|s| s.state.clone())
    }

    /// Copies every surface, in order.
    pub fn snapshot(&self) -> Vec<Surface> {
        self.lock().clone()
    }
}

#[async_trait::async_trait]
impl SurfaceSink for SurfaceBoard {
    async fn set_surface(&self, target_id: &str, state: SurfaceState) -> Result<(), SurfaceError> {
        let mut surfaces = self.lock();
        let surface = surfaces
            .iter_mut()
            .find(|s| s.target_id == target_id)
            .ok_or_else(|| SurfaceError::MissingTarget(target_id.to_string()))?;
        surface.set(state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_known_surfaces() {
        let board = SurfaceBoard::new(["health", "version"]);
        assert_eq!(board.state("health"), Some(SurfaceState::Pending));

        board
            .set_surface("version", SurfaceState::Populated("{}".to_string()))
            .await
            .unwrap();

        let snapshot = board.snapshot();
        assert_eq!(snapshot[0].updated_at, None);
        assert_eq!(snapshot[1].state, SurfaceState::Populated("{}".to_string()));
        assert!(snapshot[1].updated_at.is_some());
    }

    #[tokio::test]
    async fn unknown_surface_is_missing_target() {
        let board = SurfaceBoard::new(["health"]);
        let result = board.set_surface("docker", SurfaceState::Pending).await;
        assert_eq!(
            result,
            Err(SurfaceError::MissingTarget("docker".to_string()))
        );
    }
}
