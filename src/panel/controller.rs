//! Refresh controller
//!
//! Walks the binding list, marking each surface pending, fetching its resource
//! and writing either the pretty-printed payload or the failure into it.
//! A failure on one binding never stops or alters the others.

use super::binding::{BindingError, ResourceBinding, validate_bindings};
use super::format::pretty;
use super::surface::{SurfaceSink, SurfaceState};
use crate::error_classifier::ErrorClassifier;
use crate::logging::LogLevel;
use crate::status::StatusSource;
use futures::future::join_all;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// How the bindings of one refresh cycle are fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display)]
pub enum FetchMode {
    /// One binding at a time, in list order.
    #[default]
    Sequential,
    /// All bindings at once; completion order follows the network.
    Concurrent,
}

/// A binding whose fetch failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedBinding {
    pub target_id: String,
    pub message: String,
    pub log_level: LogLevel,
}

/// What happened to each binding in one refresh cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshSummary {
    pub populated: Vec<String>,
    pub failed: Vec<FailedBinding>,
    /// Bindings whose surface could not be written.
    pub unreachable: Vec<String>,
    pub elapsed: Duration,
}

impl RefreshSummary {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty() && self.unreachable.is_empty()
    }

    pub fn total(&self) -> usize {
        self.populated.len() + self.failed.len() + self.unreachable.len()
    }
}

impl std::fmt::Display for RefreshSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} populated, {} failed, {} unreachable",
            self.populated.len(),
            self.failed.len(),
            self.unreachable.len()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Completed(RefreshSummary),
    /// Another refresh was already running on this controller.
    Skipped,
}

enum BindingResult {
    Populated(String),
    Failed(FailedBinding),
    Unreachable(String),
}

/// Clears the in-flight flag when a refresh ends, including on cancellation.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct RefreshController {
    bindings: Vec<ResourceBinding>,
    source: Arc<dyn StatusSource>,
    sink: Arc<dyn SurfaceSink>,
    mode: FetchMode,
    classifier: ErrorClassifier,
    in_flight: AtomicBool,
}

impl RefreshController {
    pub fn new(
        bindings: Vec<ResourceBinding>,
        source: Arc<dyn StatusSource>,
        sink: Arc<dyn SurfaceSink>,
        mode: FetchMode,
    ) -> Result<Self, BindingError> {
        validate_bindings(&bindings)?;
        Ok(Self {
            bindings,
            source,
            sink,
            mode,
            classifier: ErrorClassifier::new(),
            in_flight: AtomicBool::new(false),
        })
    }

    pub fn bindings(&self) -> &[ResourceBinding] {
        &self.bindings
    }

    pub fn mode(&self) -> FetchMode {
        self.mode
    }

    /// Runs one refresh cycle over every binding.
    ///
    /// Returns [`RefreshOutcome::Skipped`] without touching any surface when a
    /// cycle is already in flight on this controller.
    pub async fn refresh(&self) -> RefreshOutcome {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            log::info!("Refresh already in progress, ignoring trigger");
            return RefreshOutcome::Skipped;
        };

        let started = Instant::now();
        log::debug!(
            "Refreshing {} surfaces from {} ({})",
            self.bindings.len(),
            self.source.environment().server_url(),
            self.mode
        );

        let results = match self.mode {
            FetchMode::Sequential => {
                let mut results = Vec::with_capacity(self.bindings.len());
                for binding in &self.bindings {
                    results.push(self.refresh_binding(binding).await);
                }
                results
            }
            FetchMode::Concurrent => {
                join_all(self.bindings.iter().map(|b| self.refresh_binding(b))).await
            }
        };

        let mut summary = RefreshSummary::default();
        for result in results {
            match result {
                BindingResult::Populated(id) => summary.populated.push(id),
                BindingResult::Failed(failed) => summary.failed.push(failed),
                BindingResult::Unreachable(id) => summary.unreachable.push(id),
            }
        }
        summary.elapsed = started.elapsed();
        log::info!(
            "Refresh finished in {} ms: {}",
            summary.elapsed.as_millis(),
            summary
        );
        RefreshOutcome::Completed(summary)
    }

    async fn refresh_binding(&self, binding: &ResourceBinding) -> BindingResult {
        let target_id = binding.target_id.clone();
        if let Err(e) = self
            .sink
            .set_surface(&target_id, SurfaceState::Pending)
            .await
        {
            log::warn!("Skipping {}: {}", binding.path, e);
            return BindingResult::Unreachable(target_id);
        }

        let (state, result) = match self.source.fetch_json(&binding.path).await {
            Ok(value) => match pretty(&value) {
                Ok(text) => (
                    SurfaceState::Populated(text),
                    BindingResult::Populated(target_id.clone()),
                ),
                Err(e) => {
                    let message = format!("{} could not be formatted: {}", binding.path, e);
                    (
                        SurfaceState::Failed(message.clone()),
                        BindingResult::Failed(FailedBinding {
                            target_id: target_id.clone(),
                            message,
                            log_level: LogLevel::Error,
                        }),
                    )
                }
            },
            Err(e) => {
                let log_level = self.classifier.classify_fetch_error(&e);
                let message = e.to_string();
                let level: log::Level = log_level.into();
                log::log!(level, "{}: {}", target_id, message);
                (
                    SurfaceState::Failed(message.clone()),
                    BindingResult::Failed(FailedBinding {
                        target_id: target_id.clone(),
                        message,
                        log_level,
                    }),
                )
            }
        };

        if let Err(e) = self.sink.set_surface(&target_id, state).await {
            log::warn!("Dropping result for {}: {}", binding.path, e);
            return BindingResult::Unreachable(target_id);
        }
        result
    }
}
