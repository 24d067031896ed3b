//! Headless mode execution

use super::{
    SessionData,
    messages::{
        SessionMessage, print_session_exit_success, print_session_shutdown,
        print_session_starting,
    },
};
use crate::events::Event;
use crate::panel::ResourceBinding;
use crate::report::render_surface;
use crate::runtime::RefreshTrigger;
use std::error::Error;
use std::io::BufRead;

/// Runs the application in headless mode
///
/// Settled surfaces are printed as text sections, activity events as log
/// lines. Every line read from stdin activates the refresh control; Ctrl+C
/// shuts the session down.
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.environment);
    SessionMessage::info("Press Enter to refresh, Ctrl+C to quit").print();

    let mut shutdown_receiver = session.shutdown_sender.subscribe();

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    spawn_stdin_trigger(session.trigger.clone());

    // Event loop: print events to the console until shutdown
    loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                if let Some(text) = console_line(&session.bindings, &event) {
                    println!("{}", text);
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    print_session_shutdown();
    for handle in session.join_handles {
        let _ = handle.await;
    }
    print_session_exit_success();

    Ok(())
}

/// Stdin is read on a plain thread: a blocking read must not hold up runtime shutdown.
fn spawn_stdin_trigger(trigger: RefreshTrigger) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            if line.is_err() {
                break;
            }
            trigger.activate();
        }
    });
}

/// What headless mode prints for an event, if anything.
fn console_line(bindings: &[ResourceBinding], event: &Event) -> Option<String> {
    match &event.surface {
        Some(update) if update.state.is_settled() => bindings
            .iter()
            .find(|b| b.target_id == update.target_id)
            .map(|binding| render_surface(binding, &update.state)),
        Some(_) => None,
        None if event.should_display() => Some(event.to_string()),
        None => None,
    }
}
