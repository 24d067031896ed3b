mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod panel;
mod report;
mod runtime;
mod session;
mod status;
mod ui;
mod workers;

use crate::config::{Config, SERVER_URL_ENV, get_config_path, resolve_server_url};
use crate::consts::cli_consts::network::{DEFAULT_TIMEOUT_SECS, request_timeout};
use crate::environment::Environment;
use crate::panel::FetchMode;
use crate::session::{run_check_mode, run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the status dashboard
    Start {
        /// Status server base URL, or `local`
        #[arg(long, value_name = "URL", env = SERVER_URL_ENV)]
        server: Option<String>,

        /// Run without the terminal UI. Press Enter to refresh.
        #[arg(long, default_value_t = false)]
        headless: bool,

        /// Fetch all endpoints at once instead of one after another
        #[arg(long, default_value_t = false)]
        concurrent: bool,

        /// Per-request timeout in seconds, 0 disables it
        #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,

        /// Paint the dashboard background
        #[arg(long = "with-background", action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Refresh every surface once, print it, and exit non-zero if any failed
    Check {
        /// Status server base URL, or `local`
        #[arg(long, value_name = "URL", env = SERVER_URL_ENV)]
        server: Option<String>,

        /// Fetch all endpoints at once instead of one after another
        #[arg(long, default_value_t = false)]
        concurrent: bool,

        /// Per-request timeout in seconds, 0 disables it
        #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,
    },
    /// Save the status server URL to the config file
    SetServer {
        /// Status server base URL
        #[arg(long, value_name = "URL")]
        url: String,
    },
    /// Delete the config file.
    ClearConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            server,
            headless,
            concurrent,
            timeout_secs,
            with_background,
        } => {
            let environment = resolve_environment(server, &config_path)?;
            let session = setup_session(
                environment,
                fetch_mode(concurrent),
                request_timeout(timeout_secs),
            )
            .await?;
            if headless {
                logging::init_console_logging();
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, with_background).await
            }
        }
        Command::Check {
            server,
            concurrent,
            timeout_secs,
        } => {
            logging::init_console_logging();
            let environment = resolve_environment(server, &config_path)?;
            let summary = run_check_mode(
                environment,
                fetch_mode(concurrent),
                request_timeout(timeout_secs),
            )
            .await?;
            if summary.is_clean() {
                Ok(())
            } else {
                Err(Box::from(format!(
                    "{} of {} surfaces failed",
                    summary.failed.len() + summary.unreachable.len(),
                    summary.total()
                )))
            }
        }
        Command::SetServer { url } => {
            let environment = url.parse::<Environment>().map_err(|_| invalid_server(&url))?;
            Config::new(environment.server_url())
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            println!("Saved status server {} to {}", environment, config_path.display());
            Ok(())
        }
        Command::ClearConfig => {
            println!("Clearing configuration file...");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

fn fetch_mode(concurrent: bool) -> FetchMode {
    if concurrent {
        FetchMode::Concurrent
    } else {
        FetchMode::Sequential
    }
}

/// Resolves the server from flag/env and the config file, defaulting to local.
fn resolve_environment(
    requested: Option<String>,
    config_path: &std::path::Path,
) -> Result<Environment, Box<dyn Error>> {
    match resolve_server_url(requested, config_path) {
        Some(url) => url.parse::<Environment>().map_err(|_| invalid_server(&url)),
        None => Ok(Environment::default()),
    }
}

fn invalid_server(url: &str) -> Box<dyn Error> {
    Box::from(format!(
        "Invalid server URL: {}. Expected `local` or an http(s) URL.",
        url
    ))
}
