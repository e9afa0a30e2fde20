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

//! Collaborators used by the task worker.
//!
//! The worker never talks to SQLite or the filesystem directly, it goes
//! through three narrow capabilities:
//!
//! * [`SongSource`]: supplies the song collection.
//! * [`TagService`]: persists tag renames, deletions and per-song updates.
//! * [`SongCache`]: write-through copy of the song collection, used to keep
//!   working when the library location is unavailable.
//!
//! [`sqlite::SqliteLibrary`] and [`cache::JsonSongCache`] are the production
//! implementations.

pub(crate) mod cache;
pub(crate) mod sqlite;

#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::model::Song;

#[derive(Debug, Error)]
pub(crate) enum ServiceError {
    #[error("library location {0} is unavailable")]
    Offline(String),

    #[error("{0:#}")]
    Storage(#[from] anyhow::Error),

    #[error("cache error: {0}")]
    Cache(#[from] std::io::Error),

    #[error("cache format error: {0}")]
    CacheFormat(#[from] serde_json::Error),
}

#[cfg_attr(test, automock)]
pub(crate) trait SongSource {
    fn load(&mut self) -> Result<Vec<Song>, ServiceError>;

    /// Re-indexes the given media directories, returning the song count.
    fn rescan(&mut self, dirs: &[String]) -> Result<usize, ServiceError>;
}

#[cfg_attr(test, automock)]
pub(crate) trait TagService {
    fn rename_tag(&mut self, old: &str, new: &str) -> Result<(), ServiceError>;

    fn delete_tag(&mut self, name: &str) -> Result<(), ServiceError>;

    fn update_song_tags(&mut self, song_id: u64, tags: &[String]) -> Result<(), ServiceError>;
}

#[cfg_attr(test, automock)]
pub(crate) trait SongCache {
    fn store(&mut self, songs: &[Song]) -> Result<(), ServiceError>;

    fn load(&self) -> Result<Option<Vec<Song>>, ServiceError>;
}
