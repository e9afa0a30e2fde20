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

use anyhow::Result;
use tracing::{info, warn};

use crate::{
    events::AppEvent,
    model::Song,
    services::ServiceError,
    tasks::TaskContext,
};

pub(super) fn load_library(ctx: &mut TaskContext) -> Result<()> {
    match ctx.source.load() {
        Ok(songs) => {
            write_cache(ctx, &songs);
            ctx.event_tx.send(AppEvent::LibraryLoaded {
                songs,
                offline: false,
            })?;
        }

        Err(ServiceError::Offline(location)) => {
            warn!(%location, "Library offline, falling back to cache");
            let event = match ctx.cache.load() {
                Ok(Some(songs)) => AppEvent::LibraryLoaded {
                    songs,
                    offline: true,
                },
                Ok(None) => AppEvent::LibraryLoadFailed {
                    message: format!("Library {} is unavailable and nothing is cached", location),
                    offline: true,
                },
                Err(e) => AppEvent::LibraryLoadFailed {
                    message: format!("Library {} is unavailable: {}", location, e),
                    offline: true,
                },
            };
            ctx.event_tx.send(event)?;
        }

        Err(e) => {
            warn!("Failed to load library: {}", e);
            ctx.event_tx.send(AppEvent::LibraryLoadFailed {
                message: e.to_string(),
                offline: false,
            })?;
        }
    }

    Ok(())
}

pub(super) fn scan_library(ctx: &mut TaskContext) -> Result<()> {
    let count = ctx.source.rescan(&ctx.config.media_dirs)?;
    info!(count, "Library rescanned");
    ctx.event_tx.send(AppEvent::ScanFinished(count))?;

    load_library(ctx)
}

pub(super) fn rename_tag(ctx: &mut TaskContext, old: &str, new: &str, songs: &[Song]) -> Result<()> {
    write_cache(ctx, songs);
    ctx.tag_service.rename_tag(old, new)?;

    Ok(())
}

pub(super) fn delete_tag(ctx: &mut TaskContext, name: &str, songs: &[Song]) -> Result<()> {
    write_cache(ctx, songs);
    ctx.tag_service.delete_tag(name)?;

    Ok(())
}

/// Persists one song's tags.
///
/// A failure here is reported to the UI as a message rather than as a task
/// error, the optimistic local state stays as it is.
pub(super) fn update_song_tags(ctx: &mut TaskContext, song_id: u64, tags: &[String], songs: &[Song]) -> Result<()> {
    write_cache(ctx, songs);

    let event = match ctx.tag_service.update_song_tags(song_id, tags) {
        Ok(()) => AppEvent::SongTagsSaved(song_id),
        Err(e) => {
            warn!(song_id, "Failed to save song tags: {}", e);
            AppEvent::SongTagsSaveFailed(e.to_string())
        }
    };
    ctx.event_tx.send(event)?;

    Ok(())
}

// The cache is best effort, a failed write is only logged.
fn write_cache(ctx: &mut TaskContext, songs: &[Song]) {
    if let Err(e) = ctx.cache.store(songs) {
        warn!("Failed to write song cache: {}", e);
    }
}
