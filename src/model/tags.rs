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

//! Tag derivation and tag rewrites across the song collection.
//!
//! Tags only exist as strings on songs, so every operation here is a plain
//! transform over a slice of [`Song`]s. Renaming or deleting a tag means
//! rewriting the string on every song that carries it.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::model::{
    Song, Tag, TagSort,
    collate::{compare_names, contains_ignore_case},
};

/// Builds the tag collection from the songs, one [`Tag`] per distinct name.
///
/// Song counts and last-updated timestamps are aggregated over the songs
/// carrying each tag. The result is ordered alphabetically.
pub(crate) fn generate_tags_from_songs(songs: &[Song]) -> Vec<Tag> {
    let mut by_name: HashMap<&str, Tag> = HashMap::new();

    for song in songs {
        for name in &song.tags {
            let tag = by_name.entry(name.as_str()).or_insert_with(|| Tag {
                id: Tag::id_for(name),
                name: name.clone(),
                song_count: 0,
                last_updated: None,
            });
            tag.song_count += 1;
            tag.last_updated = tag.last_updated.max(Some(song.updated_at));
        }
    }

    let mut tags: Vec<Tag> = by_name.into_values().collect();
    tags.sort_by(|a, b| compare_names(&a.name, &b.name));
    tags
}

/// All distinct tag names in use, alphabetical.
pub(crate) fn vocabulary(songs: &[Song]) -> Vec<String> {
    generate_tags_from_songs(songs)
        .into_iter()
        .map(|t| t.name)
        .collect()
}

/// Filters tags by case-insensitive substring on the name, then sorts them.
///
/// The sort is stable, tags with equal keys keep their incoming order.
pub(crate) fn filter_and_sort_tags(tags: &[Tag], query: &str, sort: TagSort) -> Vec<Tag> {
    let mut result: Vec<Tag> = tags
        .iter()
        .filter(|t| contains_ignore_case(&t.name, query))
        .cloned()
        .collect();

    match sort {
        TagSort::Name => result.sort_by(|a, b| compare_names(&a.name, &b.name)),
        TagSort::SongCount => result.sort_by(|a, b| b.song_count.cmp(&a.song_count)),
        // None orders below Some, so reversing puts untimed tags last
        TagSort::Recent => result.sort_by(|a, b| b.last_updated.cmp(&a.last_updated)),
    }

    result
}

/// Renames a tag on every song carrying it.
///
/// A song that already carries `new` just loses `old`, otherwise `old` is
/// replaced in place. Returns the ids of the songs that changed.
pub(crate) fn rename_tag_in_songs(
    songs: &mut [Song],
    old: &str,
    new: &str,
    now: DateTime<Utc>,
) -> Vec<u64> {
    if old == new {
        return vec![];
    }

    let mut changed = Vec::new();
    for song in songs.iter_mut() {
        let Some(pos) = song.tags.iter().position(|t| t == old) else {
            continue;
        };

        if song.has_tag(new) {
            song.tags.remove(pos);
        } else {
            song.tags[pos] = new.to_string();
        }
        song.updated_at = now;
        changed.push(song.id);
    }

    changed
}

/// Removes a tag from every song, leaving all other tags untouched.
pub(crate) fn delete_tag_from_songs(songs: &mut [Song], name: &str, now: DateTime<Utc>) -> Vec<u64> {
    let mut changed = Vec::new();
    for song in songs.iter_mut() {
        let before = song.tags.len();
        song.tags.retain(|t| t != name);
        if song.tags.len() != before {
            song.updated_at = now;
            changed.push(song.id);
        }
    }

    changed
}

/// Replaces the tag list of a single song.
///
/// Duplicates are dropped, keeping the first occurrence. Returns `false` if
/// no song has the given id.
pub(crate) fn set_song_tags(songs: &mut [Song], song_id: u64, tags: Vec<String>, now: DateTime<Utc>) -> bool {
    let Some(song) = songs.iter_mut().find(|s| s.id == song_id) else {
        return false;
    };

    song.tags = dedup_tags(tags);
    song.updated_at = now;
    true
}

pub(crate) fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !result.contains(&tag) {
            result.push(tag);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{at, song};

    fn library() -> Vec<Song> {
        vec![
            song(1, "Yesterday", &["The Beatles"], &["ballad", "rock"]),
            song(2, "Paranoid", &["Black Sabbath"], &["rock"]),
            song(3, "Koi", &["Gen Hoshino"], &["jpop", "dance"]),
            song(4, "Untagged", &["Nobody"], &[]),
        ]
    }

    fn names(tags: &[Tag]) -> Vec<&str> {
        tags.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn generate_counts_and_timestamps() {
        let tags = generate_tags_from_songs(&library());

        assert_eq!(names(&tags), vec!["ballad", "dance", "jpop", "rock"]);

        let rock = tags.iter().find(|t| t.name == "rock").unwrap();
        assert_eq!(rock.song_count, 2);
        assert_eq!(rock.last_updated, Some(at(200)));
        assert_eq!(rock.id, Tag::id_for("rock"));
    }

    #[test]
    fn generate_from_empty_library() {
        assert!(generate_tags_from_songs(&[]).is_empty());
    }

    #[test]
    fn filter_is_exactly_the_case_insensitive_matches() {
        let tags = generate_tags_from_songs(&library());

        let filtered = filter_and_sort_tags(&tags, "RO", TagSort::Name);
        assert_eq!(names(&filtered), vec!["rock"]);

        let filtered = filter_and_sort_tags(&tags, "", TagSort::Name);
        assert_eq!(filtered.len(), tags.len());

        let filtered = filter_and_sort_tags(&tags, "zzz", TagSort::Name);
        assert!(filtered.is_empty());
    }

    #[test]
    fn filter_does_not_fold_accents_or_ligatures() {
        let tags = generate_tags_from_songs(&[song(1, "One", &[], &["café", "\u{FB01}re", "Cafe"])]);

        assert_eq!(names(&filter_and_sort_tags(&tags, "cafe", TagSort::Name)), vec!["Cafe"]);
        assert!(filter_and_sort_tags(&tags, "fi", TagSort::Name).is_empty());
        assert_eq!(names(&filter_and_sort_tags(&tags, "CAFÉ", TagSort::Name)), vec!["café"]);
    }

    #[test]
    fn sort_by_song_count_is_stable() {
        let tags = generate_tags_from_songs(&library());
        let sorted = filter_and_sort_tags(&tags, "", TagSort::SongCount);

        // rock has two songs, the rest keep alphabetical order
        assert_eq!(names(&sorted), vec!["rock", "ballad", "dance", "jpop"]);
    }

    #[test]
    fn sort_by_recency_newest_first() {
        let tags = generate_tags_from_songs(&library());
        let sorted = filter_and_sort_tags(&tags, "", TagSort::Recent);

        assert_eq!(names(&sorted), vec!["dance", "jpop", "rock", "ballad"]);
    }

    #[test]
    fn vocabulary_is_distinct_and_alphabetical() {
        assert_eq!(vocabulary(&library()), vec!["ballad", "dance", "jpop", "rock"]);
    }

    #[test]
    fn rename_replaces_in_place() {
        let mut songs = library();
        let changed = rename_tag_in_songs(&mut songs, "rock", "hard rock", at(999));

        assert_eq!(changed, vec![1, 2]);
        assert_eq!(songs[0].tags, vec!["ballad", "hard rock"]);
        assert_eq!(songs[1].tags, vec!["hard rock"]);
        assert_eq!(songs[0].updated_at, at(999));
        assert_eq!(songs[2].updated_at, at(300));
    }

    #[test]
    fn rename_onto_existing_tag_keeps_one_copy() {
        let mut songs = library();
        let changed = rename_tag_in_songs(&mut songs, "ballad", "rock", at(999));

        assert_eq!(changed, vec![1]);
        assert_eq!(songs[0].tags, vec!["rock"]);
        for song in &songs {
            assert!(!song.has_tag("ballad"));
            assert!(song.tags.iter().filter(|t| *t == "rock").count() <= 1);
        }
    }

    #[test]
    fn rename_to_same_name_is_noop() {
        let mut songs = library();
        assert!(rename_tag_in_songs(&mut songs, "rock", "rock", at(999)).is_empty());
        assert_eq!(songs, library());
    }

    #[test]
    fn delete_only_removes_the_named_tag() {
        let mut songs = library();
        let changed = delete_tag_from_songs(&mut songs, "rock", at(999));

        assert_eq!(changed, vec![1, 2]);
        assert_eq!(songs[0].tags, vec!["ballad"]);
        assert!(songs[1].tags.is_empty());
        assert_eq!(songs[2].tags, vec!["jpop", "dance"]);
    }

    #[test]
    fn set_song_tags_drops_duplicates() {
        let mut songs = library();
        let tags = vec!["a".to_string(), "b".to_string(), "a".to_string()];

        assert!(set_song_tags(&mut songs, 4, tags, at(999)));
        assert_eq!(songs[3].tags, vec!["a", "b"]);
        assert!(!set_song_tags(&mut songs, 42, vec![], at(999)));
    }
}
