//! One-shot check: a single refresh cycle printed to stdout

use super::messages::SessionMessage;
use crate::environment::Environment;
use crate::logging::LogLevel;
use crate::panel::{
    FetchMode, RefreshController, RefreshOutcome, RefreshSummary, SurfaceBoard, default_bindings,
};
use crate::report::render_report;
use crate::status::StatusClient;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

/// Refreshes every surface once, prints them, and returns the cycle summary.
pub async fn run_check_mode(
    env: Environment,
    mode: FetchMode,
    timeout: Option<Duration>,
) -> Result<RefreshSummary, Box<dyn Error>> {
    let client = StatusClient::new(env, timeout)?;
    let bindings = default_bindings();
    let board = Arc::new(SurfaceBoard::for_bindings(&bindings));
    let controller =
        RefreshController::new(bindings.clone(), Arc::new(client), board.clone(), mode)?;

    let summary = match controller.refresh().await {
        RefreshOutcome::Completed(summary) => summary,
        // Nothing else holds this controller
        RefreshOutcome::Skipped => return Err("refresh was skipped".into()),
    };

    println!("{}", render_report(&bindings, &board.snapshot()));

    if summary.is_clean() {
        SessionMessage::success(format!(
            "All {} surfaces refreshed in {} ms",
            summary.total(),
            summary.elapsed.as_millis()
        ))
        .print();
    } else {
        for failed in &summary.failed {
            let line = format!("{}: {}", failed.target_id, failed.message);
            if failed.log_level >= LogLevel::Error {
                SessionMessage::error(line).print();
            } else {
                SessionMessage::warn(line).print();
            }
        }
        for target_id in &summary.unreachable {
            SessionMessage::warn(format!("{}: no display surface", target_id)).print();
        }
    }
    Ok(summary)
}
