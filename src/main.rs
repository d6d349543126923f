mod config;
mod connection;
mod consts;
mod environment;
mod events;
mod logging;
mod store;
mod ui;
mod workers;

use crate::config::{Config, get_config_path};
use crate::connection::{CommandDispatcher, Connection, HttpConnection};
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::environment::Environment;
use crate::workers::core::EventSender;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::path::Path;
use std::sync::Arc;
use std::{error::Error, io};
use tokio::sync::{broadcast, mpsc};

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
    /// Launch the status dashboard
    Start {
        /// Controller base URL, e.g. http://brewos.local
        #[arg(long, value_name = "URL")]
        host: Option<String>,
    },
    /// Fetch one status snapshot and print it as JSON
    Status {
        /// Controller base URL, e.g. http://brewos.local
        #[arg(long, value_name = "URL")]
        host: Option<String>,
    },
    /// Save the controller base URL to the config file
    SetHost {
        /// Controller base URL, e.g. http://10.0.0.42
        #[arg(value_name = "URL")]
        host: String,
    },
    /// Remove the saved configuration
    Forget,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let brewos_host_str = std::env::var("BREWOS_HOST").unwrap_or_default();
    let environment = brewos_host_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start { host } => {
            let host = resolve_host(host, &environment, &config_path);
            start(host).await
        }
        Command::Status { host } => {
            let host = resolve_host(host, &environment, &config_path);
            let connection = HttpConnection::new(host);
            let snapshot = connection.fetch_status().await?;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            Ok(())
        }
        Command::SetHost { host } => {
            let config = Config::new(host);
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            println!("Controller host saved to {}", config_path.display());
            Ok(())
        }
        Command::Forget => {
            println!("Removing saved configuration...");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Resolve the controller host: explicit flag, then BREWOS_HOST, then the
/// saved config, then the default device address.
fn resolve_host(flag: Option<String>, environment: &Environment, config_path: &Path) -> String {
    if let Some(host) = flag {
        return host;
    }
    if *environment != Environment::Device {
        return environment.controller_url();
    }
    if config_path.exists() {
        if let Ok(config) = Config::load_from_file(config_path) {
            if !config.host.is_empty() {
                return config.host;
            }
        }
    }
    environment.controller_url()
}

/// Starts the dashboard against the given controller host.
async fn start(host: String) -> Result<(), Box<dyn Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Wire the telemetry poller and command dispatcher to the UI.
    let connection: Arc<dyn Connection> = Arc::new(HttpConnection::new(host.clone()));
    let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    let events = EventSender::new(event_sender);
    let (shutdown_sender, _) = broadcast::channel(1);
    let poller = workers::poller::spawn_poller(
        connection.clone(),
        events.clone(),
        shutdown_sender.subscribe(),
    );
    let dispatcher = CommandDispatcher::new(connection, events);

    // Create the application and run it.
    let app = ui::App::new(host, event_receiver, shutdown_sender, Box::new(dispatcher));
    let res = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // The run loop has signalled shutdown; wait for the poller to wind down.
    let _ = poller.await;

    res?;
    Ok(())
}
