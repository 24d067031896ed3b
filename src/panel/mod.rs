//! Status panel core
//!
//! Resource bindings, display surfaces and the refresh controller that ties
//! them to a [`StatusSource`](crate::status::StatusSource).

pub mod binding;
pub mod board;
pub mod controller;
pub mod format;
pub mod surface;

pub use binding::{BindingError, ResourceBinding, default_bindings};
pub use board::{Surface, SurfaceBoard};
pub use controller::{FetchMode, RefreshController, RefreshOutcome, RefreshSummary};
pub use surface::{SurfaceError, SurfaceSink, SurfaceState};
