//! Plain-text rendering of surfaces for the console front ends.

use crate::panel::{ResourceBinding, Surface, SurfaceState};

/// One surface as a titled section, e.g. `== HEALTH (/health) ==` followed by its text.
pub fn render_surface(binding: &ResourceBinding, state: &SurfaceState) -> String {
    format!(
        "== {} ({}) ==\n{}\n",
        binding.title(),
        binding.path,
        state.text()
    )
}

/// Every surface in binding order, separated by blank lines.
pub fn render_report(bindings: &[ResourceBinding], surfaces: &[Surface]) -> String {
    bindings
        .iter()
        .filter_map(|binding| {
            surfaces
                .iter()
                .find(|s| s.target_id == binding.target_id)
                .map(|surface| render_surface(binding, &surface.state))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
