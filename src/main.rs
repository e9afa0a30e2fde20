// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Music Library Tagging TUI.
//!
//! A terminal front end for browsing, searching and editing the tags of a
//! music library.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background processing layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * **Background Workers** load the library, persist tag changes and scan
//!   media directories.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.
//!
//! The visible view is fully described by a [`route::ViewState`], which
//! round-trips through a query string so it can be restored on the next
//! start or entered directly with `--view`.

mod commander;
mod components;
mod config;
mod db;
mod events;
mod logging;
mod model;
mod render;
mod route;
mod services;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{error, info};

use crate::{
    commander::Commander,
    components::{RegisterView, StatusBar, TagDetailView, TagListView},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::library::Library,
    route::{Navigator, Tab, ViewState},
    tasks::AppTask,
    theme::Theme,
};

/// Command-line options, each overriding the stored configuration.
#[derive(Parser, Debug)]
#[command(version, about = "Browse and edit the tags of a music library")]
struct Args {
    /// Path of the library database.
    #[arg(long)]
    library: Option<String>,

    /// Initial view as a query string, e.g. `tab=register&rq=blue`.
    #[arg(long)]
    view: Option<String>,

    /// Media directory to scan, may be repeated.
    #[arg(long = "media-dir")]
    media_dirs: Vec<String>,
}

/// The view currently on screen, derived from the view state.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Screen {
    TagList,
    TagDetail(String),
    Register,
}

/// Application state.
pub(crate) struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub library: Library,
    pub navigator: Navigator,

    /// A song tag change is being persisted.
    pub saving: bool,

    pub tag_list_view: TagListView,
    pub tag_detail_view: TagDetailView,
    pub register_view: RegisterView,
    pub status: StatusBar,

    pub commander: Commander,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, view: ViewState, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            task_tx,
            library: Library::new(),
            navigator: Navigator::new(view),
            saving: false,
            tag_list_view: TagListView::new(),
            tag_detail_view: TagDetailView::new(),
            register_view: RegisterView::new(),
            status: StatusBar::new(),
            commander: Commander::new(),
        }
    }

    /// Works out which view to show.
    ///
    /// A tag named in the view state is only shown while the library knows
    /// it, otherwise the tag list takes its place.
    pub fn screen(&self) -> Screen {
        let state = self.navigator.current();
        match state.tab {
            Tab::Register => Screen::Register,
            Tab::List => match &state.list.tag {
                Some(name) if self.library.tag(name).is_some() => Screen::TagDetail(name.clone()),
                _ => Screen::TagList,
            },
        }
    }
}

/// The entry point of the application.
///
/// Sets up the communication channels, initializes the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = config::load_config();
    if let Some(library) = args.library {
        config.library_path = library;
    }
    if !args.media_dirs.is_empty() {
        config.media_dirs = args.media_dirs;
    }

    logging::init_logging(&config.log_path()).context("Failed to initialise logging")?;

    let view = ViewState::from_query(args.view.as_deref().unwrap_or(&config.last_view));
    info!(library = %config.library_path().display(), view = %view.to_query(), "Starting");

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, view, task_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    app.config.last_view = app.navigator.current().to_query();
    if let Err(err) = config::save_config(&app.config) {
        error!(error = %err, "Failed to save configuration");
    }

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();

    // Without this the terminal shows a thin outline in its own background
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&mut stdout, &hex).context("Failed to set terminal background")?;
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// Best-effort, failures are ignored since this runs during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg(&mut io::stdout()).ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to process [`AppTask`]s against the library.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    tasks::spawn_task_worker(&app.config, task_rx, app.event_tx.clone());

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                tx_keys.send(AppEvent::Key(key)).ok();
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let _ = tx_tick.send(AppEvent::Tick);
            thread::sleep(Duration::from_millis(250));
        }
    });

    app.event_tx
        .send(AppEvent::ReloadLibrary)
        .context("Failed to request the library")?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
