//! faculty-accounts binary entry point.
//!
//! Parses arguments, sets up file logging, initializes the terminal in raw
//! mode, runs the TUI event loop and restores the terminal on exit.
//!
use anyhow::Context as _;
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use faculty_accounts::app::{self, AppState};

#[derive(Parser, Debug)]
#[command(name = "faculty-accounts", version, about)]
struct Args {
    /// Faculty roster (id:name:employee_code:designation:department_code per line)
    #[arg(long, env = "FACULTY_ROSTER", default_value = "faculty.roster")]
    roster: PathBuf,

    /// Theme file; created with defaults when missing
    #[arg(long, env = "FACULTY_THEME", default_value = "theme.conf")]
    theme: PathBuf,

    /// Log file (the terminal is owned by the UI)
    #[arg(long, env = "FACULTY_LOG", default_value = "faculty-accounts.log")]
    log_file: PathBuf,
}

/// Send `tracing` output to `path`; level comes from `RUST_LOG`, default `info`.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> anyhow::Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Program entry point: run the TUI and report any top-level error to stderr.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_file)?;
    tracing::info!(roster = %args.roster.display(), "starting");

    let state = AppState::load(&args.roster, &args.theme);
    let mut terminal = init_terminal().context("init terminal")?;

    let res = app::run(&mut terminal, state);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    if let Err(err) = res {
        tracing::error!(error = %err, "application error");
        eprintln!("application error: {err}");
    }
    Ok(())
}
