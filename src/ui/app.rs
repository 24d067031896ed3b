//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::environment::Environment;
use crate::panel::{FetchMode, ResourceBinding};
use crate::runtime::RefreshTrigger;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// Lines moved by PageUp/PageDown.
const PAGE_SCROLL: i32 = 10;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub mode: FetchMode,
}

impl UIConfig {
    pub fn new(with_background_color: bool, mode: FetchMode) -> Self {
        Self {
            with_background_color,
            mode,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the status surfaces.
    Dashboard,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Surfaces and activity. Events are applied while the splash is up too.
    dashboard: DashboardState,

    /// Receives events from the refresh worker.
    event_receiver: mpsc::Receiver<crate::events::Event>,

    /// Requests a refresh cycle.
    trigger: RefreshTrigger,

    /// Broadcasts shutdown signal to worker tasks.
    shutdown_sender: broadcast::Sender<()>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        bindings: Vec<ResourceBinding>,
        event_receiver: mpsc::Receiver<crate::events::Event>,
        trigger: RefreshTrigger,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            dashboard: DashboardState::new(environment, bindings, Instant::now(), ui_config),
            event_receiver,
            trigger,
            shutdown_sender,
        }
    }

    /// Apply a key press. Returns false when the application should exit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            let _ = self.shutdown_sender.send(());
            return false;
        }

        if self.current_screen == Screen::Splash {
            // Any other key skips the splash screen
            self.current_screen = Screen::Dashboard;
            return true;
        }

        match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => {
                self.trigger.activate();
            }
            KeyCode::Tab => self.dashboard.focus_next(),
            KeyCode::BackTab => self.dashboard.focus_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.dashboard.scroll_focused(1),
            KeyCode::Up | KeyCode::Char('k') => self.dashboard.scroll_focused(-1),
            KeyCode::PageDown => self.dashboard.scroll_focused(PAGE_SCROLL),
            KeyCode::PageUp => self.dashboard.scroll_focused(-PAGE_SCROLL),
            KeyCode::Home => {
                let focused = self.dashboard.focused();
                self.dashboard.reset_scroll(focused);
            }
            _ => {}
        }
        true
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            app.dashboard.add_event(event);
        }
        app.dashboard.update();

        terminal.draw(|f| render(f, &app))?;

        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration {
            app.current_screen = Screen::Dashboard;
            continue;
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if !app.handle_key(key) {
                    return Ok(());
                }
            }
        }
        // Let the worker make progress between frames
        tokio::task::yield_now().await;
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f, &app.dashboard.environment.server_url()),
        Screen::Dashboard => render_dashboard(f, &app.dashboard),
    }
}
