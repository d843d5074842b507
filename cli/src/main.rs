//! nbdeck CLI - binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`nbdeck_engine`] (notebook loading, navigation state)
//! and [`nbdeck_tui`] (rendering, input mapping), providing RAII-based
//! terminal management with guaranteed cleanup.
//!
//! ```text
//! main() -> load_deck(path) -> Navigator + ScreenView
//!                                   |
//!                                   v
//!                  TerminalSession::new() -> run_app() -> Quit | Err
//! ```
//!
//! # Event Loop
//!
//! Single-threaded and blocking: draw, wait for one terminal event, handle
//! it to completion, repeat. Nothing runs between events.

use std::{
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::PathBuf,
    sync::Mutex,
};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use nbdeck_engine::{NbdeckConfig, Navigator, UiOptions, load_deck};
use nbdeck_tui::{ControlBar, ScreenView, draw, handle_event};

/// Step through the questions, charts and code of an analysis notebook.
#[derive(Debug, Parser)]
#[command(name = "nbdeck", version, about)]
struct Args {
    /// Path to the .ipynb notebook to present.
    notebook: PathBuf,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // No log file: stay silent rather than write over the slideshow.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new().create(true).append(true).open(&candidate) {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.nbdeck/logs/nbdeck.log
    if let Some(config_path) = NbdeckConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("nbdeck.log"));
    }

    // Fallback: ./.nbdeck/logs/nbdeck.log
    candidates.push(PathBuf::from(".nbdeck").join("logs").join("nbdeck.log"));

    candidates
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode, alternate screen and mouse capture are enabled on creation and
/// restored on drop, so the shell is usable again after errors too.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
            return Err(err.into());
        }

        match Terminal::new(CrosstermBackend::new(out)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture);
                Err(err.into())
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = match NbdeckConfig::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Ignoring config: {err}");
            NbdeckConfig::default()
        }
    };
    let options = config.ui_options();

    let deck = load_deck(&args.notebook, &config.extract_options())
        .with_context(|| format!("cannot present {}", args.notebook.display()))?;

    let mut navigator = Navigator::new(deck);
    let mut view = ScreenView::new();
    navigator.show(&mut view)?;

    let result = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut navigator, &mut view, options)
    };

    if let Err(err) = &result {
        tracing::error!("Session aborted: {err:#}");
    }
    result
}

fn run_app<B>(
    terminal: &mut Terminal<B>,
    navigator: &mut Navigator,
    view: &mut ScreenView,
    options: UiOptions,
) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    loop {
        let mut controls = ControlBar::default();
        terminal.draw(|frame| controls = draw(frame, view, options))?;

        let event = event::read()?;
        if handle_event(&event, navigator, view, &controls)? {
            tracing::info!(slide = navigator.current_index() + 1, "Quit");
            return Ok(());
        }
    }
}
