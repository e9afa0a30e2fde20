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

//! In-memory song library.
//!
//! This module holds the songs loaded from the data source, together with the
//! tag collection derived from them and the load status shown in the UI.
//!
//! All mutations are optimistic: they rewrite the local song list at once
//! and regenerate the tags, persistence happens afterwards on the task
//! worker and is never waited for.

use chrono::Utc;

use crate::model::{
    Song, Tag,
    tags::{self, generate_tags_from_songs},
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum LoadStatus {
    Loading,
    Ready,
    Offline,
    Failed(String),
}

pub(crate) struct Library {
    songs: Vec<Song>,
    tags: Vec<Tag>,
    pub(crate) status: LoadStatus,
}

impl Library {
    pub(crate) fn new() -> Self {
        Self {
            songs: vec![],
            tags: vec![],
            status: LoadStatus::Loading,
        }
    }

    pub(crate) fn set_songs(&mut self, songs: Vec<Song>, offline: bool) {
        self.songs = songs;
        self.status = if offline {
            LoadStatus::Offline
        } else {
            LoadStatus::Ready
        };
        self.refresh_tags();
    }

    /// Records a load failure. An offline library keeps any songs it has.
    pub(crate) fn set_failed(&mut self, message: String, offline: bool) {
        self.status = if offline {
            LoadStatus::Offline
        } else {
            LoadStatus::Failed(message)
        };
    }

    pub(crate) fn set_loading(&mut self) {
        self.status = LoadStatus::Loading;
    }

    pub(crate) fn is_offline(&self) -> bool {
        self.status == LoadStatus::Offline
    }

    pub(crate) fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub(crate) fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub(crate) fn tag(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.name == name)
    }

    pub(crate) fn song(&self, id: u64) -> Option<&Song> {
        self.songs.iter().find(|s| s.id == id)
    }

    pub(crate) fn songs_with_tag(&self, name: &str) -> Vec<&Song> {
        self.songs.iter().filter(|s| s.has_tag(name)).collect()
    }

    pub(crate) fn vocabulary(&self) -> Vec<String> {
        tags::vocabulary(&self.songs)
    }

    /// Renames a tag across all songs, returning the ids of changed songs.
    pub(crate) fn rename_tag(&mut self, old: &str, new: &str) -> Vec<u64> {
        let changed = tags::rename_tag_in_songs(&mut self.songs, old, new, Utc::now());
        self.refresh_tags();
        changed
    }

    /// Deletes a tag from all songs, returning the ids of changed songs.
    pub(crate) fn delete_tag(&mut self, name: &str) -> Vec<u64> {
        let changed = tags::delete_tag_from_songs(&mut self.songs, name, Utc::now());
        self.refresh_tags();
        changed
    }

    pub(crate) fn set_song_tags(&mut self, song_id: u64, tags: Vec<String>) -> bool {
        let updated = tags::set_song_tags(&mut self.songs, song_id, tags, Utc::now());
        self.refresh_tags();
        updated
    }

    fn refresh_tags(&mut self) {
        self.tags = generate_tags_from_songs(&self.songs);
    }
}
