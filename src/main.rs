//! livescroll-feed: a live-updating viewer for a remote JSON image feed.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌──────────┐  PollMsg   ┌──────────┐  draw()  ┌──────────┐
//! │  poll.rs │ ─────────► │  app.rs  │ ───────► │  ui.rs   │
//! │ (thread) │  (channel) │ (state)  │          │ (render) │
//! └──────────┘            └──────────┘          └──────────┘
//!      │ load()                ▲
//!      ▼                       │ handle_key_event()
//! ┌──────────────────┐    ┌──────────┐
//! │ RemoteFeedLoader │    │ input.rs │
//! │ + reqwest client │    └──────────┘
//! └──────────────────┘
//! ```
//!
//! * **`livescroll_feed`** (the library): loading, validation and transport.
//! * **`poll`**: spawns a background thread that triggers loads on a timer.
//! * **`app`**: owns all application state (items, scroll position, etc.).
//! * **`ui`**: pure rendering: reads `App` state and draws widgets.
//! * **`input`**: maps key events to `App` mutations.
//! * **`main`**: wires everything together: parse args, set up logging, the
//!   runtime and the terminal, and run the event loop.

mod app;
mod input;
mod poll;
mod ui;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

use app::App;
use livescroll_feed::http::ReqwestHttpClient;
use livescroll_feed::source::RemoteFeedLoader;
use poll::PollMsg;

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Watch a remote JSON feed of image items in the terminal.
#[derive(Debug, Parser)]
#[command(name = "livescroll-feed", version)]
struct Cli {
    /// Feed endpoint returning `{"items": [...]}`.
    url: Url,
    /// Seconds between loads.
    #[arg(
        long,
        value_name = "secs",
        default_value_t = 60,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    interval: u64,
    /// Seconds before a single request is abandoned.
    #[arg(
        long,
        value_name = "secs",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,
    /// Write logs here.  Filter with `RUST_LOG` (default `info`).
    #[arg(long, value_name = "path")]
    log_file: Option<PathBuf>,
}

/// Route `tracing` output to `path`.  The terminal belongs to the UI, so
/// without a log file nothing is logged.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ---------------------------------------------------------------------------
// RAII terminal guard
// ---------------------------------------------------------------------------

/// Manages terminal raw-mode and alternate-screen lifetime via [`Drop`].
///
/// Constructing this struct enters raw mode + alternate screen.  When the
/// value is dropped (normally or during stack unwinding) it restores the
/// terminal.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Install a panic hook that restores the terminal before printing the
/// panic message.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }
    install_panic_hook();

    // -- transport -----------------------------------------------------------
    // Requests run on this runtime; the UI loop below stays synchronous.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("creating tokio runtime")?;
    let client = ReqwestHttpClient::new(Duration::from_secs(cli.timeout), runtime.handle().clone())
        .context("building HTTP client")?;

    // -- start background polling --------------------------------------------
    info!(url = %cli.url, interval = cli.interval, "starting feed viewer");
    let loader = RemoteFeedLoader::new(cli.url.clone(), Arc::new(client));
    let rx = poll::spawn(Box::new(loader), Duration::from_secs(cli.interval));

    // -- terminal setup (Drop restores on exit or panic) ---------------------
    let mut guard = TerminalGuard::new()?;
    let mut app = App::new(cli.url.as_str());

    // -- main event loop -----------------------------------------------------
    // Runs at ~10 fps (100 ms tick).  Each iteration:
    //   1. Drain any messages from the poller.
    //   2. Render the UI.
    //   3. Poll for keyboard input (non-blocking, up to tick_rate).
    let tick_rate = Duration::from_millis(100);

    loop {
        // 1. Process poll messages
        while let Ok(msg) = rx.try_recv() {
            match msg {
                PollMsg::Loading => app.status = "Loading…".into(),
                PollMsg::Loaded(result) => app.apply_load(result, chrono::Local::now()),
            }
        }

        // 2. Render
        guard.terminal.draw(|f| ui::draw(&mut app, f))?;

        // 3. Handle input
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key_event(&mut app, key);
            }
        }

        if app.quit {
            break;
        }
    }

    // Requests still in flight are abandoned with the runtime.
    runtime.shutdown_background();
    info!("feed viewer stopped");

    // `guard` is dropped here, restoring the terminal.
    Ok(())
}
