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

//! SQLite backed song source and tag service.
//!
//! The connection is opened lazily on first use. A library whose parent
//! directory does not exist, for example on an unmounted drive, reports
//! [`ServiceError::Offline`] instead of creating a fresh empty database.

use std::path::PathBuf;

use chrono::Utc;
use rusqlite::Connection;
use tracing::{debug, info};

use crate::{
    db::{self, scan},
    model::Song,
    services::{ServiceError, SongSource, TagService},
};

pub(crate) struct SqliteLibrary {
    path: PathBuf,
    conn: Option<Connection>,
}

impl SqliteLibrary {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            conn: None,
        }
    }

    fn connection(&mut self) -> Result<&mut Connection, ServiceError> {
        if self.conn.is_none() {
            let available = self
                .path
                .parent()
                .is_none_or(|dir| dir.as_os_str().is_empty() || dir.is_dir());
            if !available {
                return Err(ServiceError::Offline(self.path.display().to_string()));
            }

            debug!(path = %self.path.display(), "Opening library");
            self.conn = Some(db::init_db(&self.path)?);
        }

        // Populated above
        self.conn
            .as_mut()
            .ok_or_else(|| ServiceError::Offline(self.path.display().to_string()))
    }
}

impl SongSource for SqliteLibrary {
    fn load(&mut self) -> Result<Vec<Song>, ServiceError> {
        let songs = db::fetch_songs(self.connection()?)?;
        info!(count = songs.len(), "Loaded songs");
        Ok(songs)
    }

    fn rescan(&mut self, dirs: &[String]) -> Result<usize, ServiceError> {
        Ok(scan::process_music_library(self.connection()?, dirs)?)
    }
}

impl TagService for SqliteLibrary {
    fn rename_tag(&mut self, old: &str, new: &str) -> Result<(), ServiceError> {
        let touched = db::rename_tag(self.connection()?, old, new, Utc::now())?;
        info!(old, new, touched, "Renamed tag");
        Ok(())
    }

    fn delete_tag(&mut self, name: &str) -> Result<(), ServiceError> {
        let touched = db::delete_tag(self.connection()?, name, Utc::now())?;
        info!(name, touched, "Deleted tag");
        Ok(())
    }

    fn update_song_tags(&mut self, song_id: u64, tags: &[String]) -> Result<(), ServiceError> {
        db::update_song_tags(self.connection()?, song_id, tags, Utc::now())?;
        debug!(song_id, count = tags.len(), "Updated song tags");
        Ok(())
    }
}
