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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, songs and
//! the tags derived from them, together with the sort orders used by the
//! list views.
//!
//! Tags are not stored on their own. Each [`Song`] carries its tag names as
//! plain strings and a [`Tag`] is an aggregate view computed by scanning the
//! song collection, see [`tags::generate_tags_from_songs`].

pub(crate) mod collate;
pub(crate) mod library;
pub(crate) mod songs;
pub(crate) mod tags;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: u64,
    pub title: String,
    pub artists: Vec<String>,
    pub tags: Vec<String>,
    pub filename: String,
    pub updated_at: DateTime<Utc>,
}

impl Song {
    /// Derives the durable identifier for a song from its file path.
    ///
    /// The identifier survives a rescan of the library, which is what keeps
    /// tag assignments attached to the right file.
    pub(crate) fn durable_id(filename: &str) -> u64 {
        xxh3_64(filename.as_bytes())
    }

    pub(crate) fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t == name)
    }

    pub(crate) fn artist_line(&self) -> String {
        self.artists.join(", ")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    pub song_count: usize,
    pub last_updated: Option<DateTime<Utc>>,
}

impl Tag {
    pub(crate) fn id_for(name: &str) -> u64 {
        xxh3_64(name.as_bytes())
    }
}

/// Sort order for the tag list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagSort {
    #[default]
    Name,
    SongCount,
    Recent,
}

impl TagSort {
    pub(crate) fn token(self) -> &'static str {
        match self {
            TagSort::Name => "name",
            TagSort::SongCount => "count",
            TagSort::Recent => "recent",
        }
    }

    pub(crate) fn from_token(token: &str) -> Option<Self> {
        match token {
            "name" => Some(TagSort::Name),
            "count" => Some(TagSort::SongCount),
            "recent" => Some(TagSort::Recent),
            _ => None,
        }
    }

    pub(crate) fn next(self) -> Self {
        match self {
            TagSort::Name => TagSort::SongCount,
            TagSort::SongCount => TagSort::Recent,
            TagSort::Recent => TagSort::Name,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            TagSort::Name => "A-Z",
            TagSort::SongCount => "Songs",
            TagSort::Recent => "Recent",
        }
    }
}

/// Sort order for the song registration table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SongSort {
    #[default]
    Title,
    Artist,
    Recent,
}

impl SongSort {
    pub(crate) fn token(self) -> &'static str {
        match self {
            SongSort::Title => "title",
            SongSort::Artist => "artist",
            SongSort::Recent => "recent",
        }
    }

    pub(crate) fn from_token(token: &str) -> Option<Self> {
        match token {
            "title" => Some(SongSort::Title),
            "artist" => Some(SongSort::Artist),
            "recent" => Some(SongSort::Recent),
            _ => None,
        }
    }

    pub(crate) fn next(self) -> Self {
        match self {
            SongSort::Title => SongSort::Artist,
            SongSort::Artist => SongSort::Recent,
            SongSort::Recent => SongSort::Title,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            SongSort::Title => "Title",
            SongSort::Artist => "Artist",
            SongSort::Recent => "Recent",
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_tokens_round_trip() {
        for sort in [TagSort::Name, TagSort::SongCount, TagSort::Recent] {
            assert_eq!(TagSort::from_token(sort.token()), Some(sort));
        }
        for sort in [SongSort::Title, SongSort::Artist, SongSort::Recent] {
            assert_eq!(SongSort::from_token(sort.token()), Some(sort));
        }
        assert_eq!(TagSort::from_token("bogus"), None);
    }

    #[test]
    fn sort_modes_cycle() {
        assert_eq!(TagSort::Name.next().next().next(), TagSort::Name);
        assert_eq!(SongSort::Recent.next(), SongSort::Title);
    }

    #[test]
    fn durable_id_is_stable() {
        assert_eq!(Song::durable_id("/a/b.mp3"), Song::durable_id("/a/b.mp3"));
        assert_ne!(Song::durable_id("/a/b.mp3"), Song::durable_id("/a/c.mp3"));
    }
}
