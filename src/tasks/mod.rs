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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload loading and
//! persistence from the main UI thread. It provides a dedicated worker loop
//! that translates [`AppTask`] requests into calls on the service
//! collaborators and broadcasts the results back to the application via
//! [`AppEvent`]s.
//!
//! Tasks are processed one at a time in the order they were sent, so there is
//! never more than one persistence operation in flight.

mod handlers;

use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;
use tracing::{debug, error};

use crate::{
    config::AppConfig,
    events::AppEvent,
    model::Song,
    services::{SongCache, SongSource, TagService, cache::JsonSongCache, sqlite::SqliteLibrary},
};

#[derive(Debug)]
pub(crate) enum AppTask {
    LoadLibrary,
    ScanLibrary,

    // Each mutation carries the optimistic song list for the cache
    RenameTag {
        old: String,
        new: String,
        songs: Vec<Song>,
    },
    DeleteTag {
        name: String,
        songs: Vec<Song>,
    },
    UpdateSongTags {
        song_id: u64,
        tags: Vec<String>,
        songs: Vec<Song>,
    },
}

impl AppTask {
    fn name(&self) -> &'static str {
        match self {
            AppTask::LoadLibrary => "load-library",
            AppTask::ScanLibrary => "scan-library",
            AppTask::RenameTag { .. } => "rename-tag",
            AppTask::DeleteTag { .. } => "delete-tag",
            AppTask::UpdateSongTags { .. } => "update-song-tags",
        }
    }
}

/// Spawns a background thread to process application tasks.
///
/// The worker opens its own library connection and cache, then enters a
/// blocking loop listening for incoming [`AppTask`]s until the sending side
/// of the channel is dropped.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        let mut source = SqliteLibrary::new(config.library_path());
        let mut tag_service = SqliteLibrary::new(config.library_path());
        let mut cache = JsonSongCache::new(config.cache_path());

        while let Ok(task) = task_rx.recv() {
            debug!(task = task.name(), "Processing task");

            let mut ctx = TaskContext {
                config: &config,
                event_tx: &event_tx,
                source: &mut source,
                tag_service: &mut tag_service,
                cache: &mut cache,
            };

            if let Err(e) = handle_task(task, &mut ctx) {
                error!("Task failed: {:#}", e);
                let _ = event_tx.send(AppEvent::Error(format!("{:#}", e)));
            }
        }

        debug!("Task worker finished");
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
pub(crate) struct TaskContext<'a> {
    config: &'a AppConfig,
    event_tx: &'a Sender<AppEvent>,
    source: &'a mut dyn SongSource,
    tag_service: &'a mut dyn TagService,
    cache: &'a mut dyn SongCache,
}

/// Orchestrates the execution of a single task.
fn handle_task(task: AppTask, ctx: &mut TaskContext) -> Result<()> {
    match task {
        AppTask::LoadLibrary => handlers::load_library(ctx),
        AppTask::ScanLibrary => handlers::scan_library(ctx),

        AppTask::RenameTag { old, new, songs } => handlers::rename_tag(ctx, &old, &new, &songs),
        AppTask::DeleteTag { name, songs } => handlers::delete_tag(ctx, &name, &songs),
        AppTask::UpdateSongTags {
            song_id,
            tags,
            songs,
        } => handlers::update_song_tags(ctx, song_id, &tags, &songs),
    }
}
