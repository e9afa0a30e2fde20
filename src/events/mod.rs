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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), background worker updates
//! (library loads, persistence results), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: Each event updates the [`App`] state, sends tasks to the
//!    background worker and moves between views.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.
//!
//! Library mutations are applied to the local state first and persisted
//! afterwards, the UI never waits for the worker.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    model::Song,
    render::draw,
    route::{Tab, ViewState},
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    // Navigation
    Navigate(ViewState),
    SetTab(Tab),
    OpenTag(String),
    OpenSong(u64),
    Back,
    ViewChanged,

    // Library
    ReloadLibrary,
    ScanLibrary,
    LibraryLoaded { songs: Vec<Song>, offline: bool },
    LibraryLoadFailed { message: String, offline: bool },
    ScanFinished(usize),

    // Mutations
    RenameTag { from: String, to: String },
    DeleteTag(String),
    UpdateSongTags { song_id: u64, tags: Vec<String> },
    SongTagsSaved(u64),
    SongTagsSaveFailed(String),

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,

        AppEvent::Navigate(state) => handle_navigate(app, state),
        AppEvent::SetTab(tab) => handle_set_tab(app, tab),
        AppEvent::OpenTag(name) => handle_open_tag(app, name),
        AppEvent::OpenSong(song_id) => handle_open_song(app, song_id),
        AppEvent::Back => handle_back(app),
        AppEvent::ViewChanged => handle_view_changed(app),

        AppEvent::ReloadLibrary => handle_reload_library(app)?,
        AppEvent::ScanLibrary => handle_scan_library(app)?,
        AppEvent::LibraryLoaded { songs, offline } => handle_library_loaded(app, songs, offline),
        AppEvent::LibraryLoadFailed { message, offline } => handle_library_load_failed(app, message, offline),
        AppEvent::ScanFinished(count) => handle_scan_finished(app, count),

        AppEvent::RenameTag { from, to } => handle_rename_tag(app, from, to)?,
        AppEvent::DeleteTag(name) => handle_delete_tag(app, name)?,
        AppEvent::UpdateSongTags { song_id, tags } => handle_update_song_tags(app, song_id, tags)?,
        AppEvent::SongTagsSaved(song_id) => handle_song_tags_saved(app, song_id),
        AppEvent::SongTagsSaveFailed(message) => handle_song_tags_save_failed(app, message),

        AppEvent::Error(message) => handle_error(app, message),
        AppEvent::Tick => handle_tick(app),

        AppEvent::ExitApplication => {}
    }

    Ok(())
}
