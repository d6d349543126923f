//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::connection::CommandSink;
use crate::events::Event as WorkerEvent;
use crate::ui::dashboard::{DashboardState, InputOutcome, handle_key, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// The different screens in the application.
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying machine status.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// Controller endpoint, displayed in the dashboard header.
    host: String,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives events from worker tasks.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Broadcasts shutdown signal to worker tasks.
    shutdown_sender: broadcast::Sender<()>,

    /// Outbound command capability handed to the dashboard input layer.
    commands: Box<dyn CommandSink>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        host: String,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        shutdown_sender: broadcast::Sender<()>,
        commands: Box<dyn CommandSink>,
    ) -> Self {
        Self {
            host,
            current_screen: Screen::Splash,
            event_receiver,
            shutdown_sender,
            commands,
        }
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
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_event(event);
            }
        }

        // Update the state based on the current screen
        match &mut app.current_screen {
            Screen::Splash => {}
            Screen::Dashboard(state) => state.update(),
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.current_screen =
                    Screen::Dashboard(Box::new(DashboardState::new(app.host.clone())));
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                            let _ = app.shutdown_sender.send(());
                            return Ok(());
                        }
                        // Any other key press skips the splash screen
                        app.current_screen =
                            Screen::Dashboard(Box::new(DashboardState::new(app.host.clone())));
                    }
                    Screen::Dashboard(state) => {
                        let outcome = handle_key(key.code, state, app.commands.as_ref());
                        if outcome == InputOutcome::Quit {
                            // Send shutdown signal to workers
                            let _ = app.shutdown_sender.send(());
                            return Ok(());
                        }
                    }
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
