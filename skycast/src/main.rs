//! skycast binary: terminal setup, logging, and the run loop.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use skycast::action::Action;
use skycast::runtime::{Clients, Runtime};
use skycast::state::AppState;
use skycast::ui::Ui;
use skycast_core::ApiConfig;

/// Terminal weather client: live conditions, city search, map.
#[derive(Parser, Debug)]
#[command(name = "skycast")]
#[command(about = "Current weather for your position and any city you search")]
struct Args {
    /// Map zoom step; each step halves the visible span (0 = whole world)
    #[arg(long, short, default_value = "5")]
    zoom: u8,

    /// Skip the startup position fix (no live header weather)
    #[arg(long)]
    no_locate: bool,

    /// Write tracing output to this file (the terminal itself is owned
    /// by the UI). Honors RUST_LOG.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("skycast=debug")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(path) = args.log_file.as_ref() {
        if let Err(e) = init_logging(path) {
            eprintln!("Error: could not open log file {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
    }

    // Build clients before touching the terminal so a configuration
    // failure prints normally.
    let clients = match Clients::new(&ApiConfig::default()) {
        Ok(clients) => clients,
        Err(e) => {
            eprintln!("Error: could not initialize HTTP clients: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = run(args, clients).await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args, clients: Clients) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut runtime = Runtime::new(AppState::new(args.zoom), clients);
    if !args.no_locate {
        runtime.enqueue(Action::PositionFetch);
    }

    let mut ui = Ui::new();
    let result = runtime.run(&mut terminal, &mut ui).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}
