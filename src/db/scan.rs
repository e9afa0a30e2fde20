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

//! Media library indexing and database persistence.
//!
//! This module handles the discovery of audio files on the local filesystem
//! and the management of the associated song records.
//!
//! It utilizes `WalkDir` for directory traversal and `Lofty` for metadata
//! extraction.
//!
//! Unlike a full rebuild, a scan upserts songs by their durable id so that
//! tags assigned to a file survive re-indexing. Songs whose files are no
//! longer found under a scanned directory are removed, and their tags with
//! them.

use std::{collections::HashSet, path::Path};

use anyhow::{Context, Result, bail};
use chrono::Utc;
use lofty::prelude::*;
use lofty::probe::Probe;
use rusqlite::{Connection, params};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::{db::model::{from_db_id, to_db_id}, model::Song};

const AUDIO_EXTENSIONS: [&str; 6] = ["mp3", "flac", "ogg", "opus", "m4a", "wav"];

/// Recursively scans the media directories and synchronizes the songs table.
///
/// A directory that is not available is skipped, and the songs under it are
/// kept. Only songs under a scanned directory are removed when their file is
/// gone.
///
/// # Returns
///
/// Returns the total number of songs in the library after the scan.
///
/// # Errors
///
/// Returns an error if none of the directories is available, if the
/// transaction fails or if database constraints are violated during
/// insertion. Unreadable files are skipped with a warning.
pub(crate) fn process_music_library(conn: &mut Connection, dirs: &[String]) -> Result<usize> {
    let roots: Vec<&Path> = dirs
        .iter()
        .map(Path::new)
        .filter(|dir| {
            let available = dir.is_dir();
            if !available {
                warn!(dir = %dir.display(), "Media directory is not available, skipping");
            }
            available
        })
        .collect();

    if roots.is_empty() {
        bail!("No media directory is available");
    }

    let tx = conn.transaction()?;
    let mut seen: HashSet<u64> = HashSet::new();

    for root in &roots {
        info!(dir = %root.display(), "Scanning media directory");

        for entry in WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.map_err(|e| warn!("Skipping unreadable entry: {}", e)).ok())
            .filter(|e| is_audio_file(e.path()))
        {
            let Some(song) = read_song(entry.path()) else {
                continue;
            };

            upsert_song(&tx, &song)?;
            seen.insert(song.id);
        }
    }

    let stale: Vec<u64> = {
        let mut stmt = tx.prepare_cached("SELECT id, filename FROM songs")?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter()
            .filter(|(_, filename)| roots.iter().any(|root| Path::new(filename).starts_with(root)))
            .map(|(id, _)| from_db_id(id))
            .filter(|id| !seen.contains(id))
            .collect()
    };

    for id in &stale {
        tx.execute("DELETE FROM songs WHERE id = ?1", params![to_db_id(*id)])?;
    }

    tx.commit().context("Failed to commit transaction")?;

    let count: i64 = conn.query_row("SELECT COUNT(*) FROM songs", [], |row| row.get(0))?;
    info!(count, removed = stale.len(), "Scan finished");

    Ok(count as usize)
}

/// Inserts a song or refreshes its title, filename and artists.
///
/// The stored `updated_at` and tags of an existing song are left alone.
pub(crate) fn upsert_song(conn: &Connection, song: &Song) -> Result<()> {
    conn.execute(
        "INSERT INTO songs (id, title, filename, updated_at) VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT (id) DO UPDATE SET title = excluded.title, filename = excluded.filename",
        params![to_db_id(song.id), song.title, song.filename, song.updated_at],
    )?;

    conn.execute(
        "DELETE FROM song_artists WHERE song_id = ?1",
        params![to_db_id(song.id)],
    )?;
    let mut stmt = conn.prepare_cached(
        "INSERT INTO song_artists (song_id, position, name) VALUES (?1, ?2, ?3)",
    )?;
    for (position, name) in song.artists.iter().enumerate() {
        stmt.execute(params![to_db_id(song.id), position as i64, name])?;
    }

    Ok(())
}

fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| AUDIO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

fn read_song(path: &Path) -> Option<Song> {
    let Some(filename) = path.to_str().map(str::to_string) else {
        warn!(path = %path.display(), "Skipping path with invalid UTF-8");
        return None;
    };

    let tagged_file = match Probe::open(path).and_then(|p| p.read()) {
        Ok(file) => file,
        Err(e) => {
            warn!(path = %path.display(), "Skipping unreadable file: {}", e);
            return None;
        }
    };

    let fallback_title = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| filename.clone());

    let (title, artists) = match tagged_file.primary_tag().or_else(|| tagged_file.first_tag()) {
        Some(tag) => (
            tag.title().map(|t| t.to_string()).unwrap_or(fallback_title),
            tag.artist().map(|a| split_artists(&a)).unwrap_or_default(),
        ),
        None => {
            debug!(path = %path.display(), "No tags, using file name");
            (fallback_title, vec![])
        }
    };

    Some(Song {
        id: Song::durable_id(&filename),
        title,
        artists,
        tags: vec![],
        filename,
        updated_at: Utc::now(),
    })
}

fn split_artists(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::{fetch_songs, init_db, update_song_tags},
        model::fixtures::song,
    };
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn audio_extensions_are_case_insensitive() {
        assert!(is_audio_file(Path::new("/a/b.MP3")));
        assert!(is_audio_file(Path::new("/a/b.flac")));
        assert!(!is_audio_file(Path::new("/a/cover.jpg")));
        assert!(!is_audio_file(Path::new("/a/noext")));
    }

    #[test]
    fn artists_split_on_semicolons() {
        assert_eq!(split_artists("A; B ;;C"), vec!["A", "B", "C"]);
    }

    #[test]
    fn upsert_keeps_tags_and_timestamp() {
        let dir = TempDir::new().unwrap();
        let mut conn = init_db(&dir.path().join("lib.db")).unwrap();

        let original = song(7, "Old Title", &["A"], &["keep"]);
        upsert_song(&conn, &original).unwrap();
        update_song_tags(&mut conn, 7, &original.tags, original.updated_at).unwrap();

        let mut renamed = song(7, "New Title", &["B", "C"], &[]);
        renamed.updated_at = Utc::now();
        upsert_song(&conn, &renamed).unwrap();

        let songs = fetch_songs(&conn).unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].title, "New Title");
        assert_eq!(songs[0].artists, vec!["B", "C"]);
        assert_eq!(songs[0].tags, vec!["keep"]);
        assert_eq!(songs[0].updated_at, original.updated_at);
    }

    fn song_at(id: u64, filename: &Path) -> Song {
        let mut song = song(id, "Song", &[], &["keep"]);
        song.filename = filename.to_string_lossy().to_string();
        song
    }

    fn store(conn: &mut Connection, song: &Song) {
        upsert_song(conn, song).unwrap();
        update_song_tags(conn, song.id, &song.tags, song.updated_at).unwrap();
    }

    #[test]
    fn scan_removes_songs_that_disappeared() {
        let dir = TempDir::new().unwrap();
        let media = dir.path().join("media");
        fs::create_dir(&media).unwrap();
        fs::write(media.join("cover.jpg"), b"not audio").unwrap();

        let mut conn = init_db(&dir.path().join("lib.db")).unwrap();
        store(&mut conn, &song_at(1, &media.join("gone.mp3")));

        let count = process_music_library(&mut conn, &[media.to_string_lossy().to_string()]).unwrap();

        assert_eq!(count, 0);
        assert!(fetch_songs(&conn).unwrap().is_empty());
    }

    #[test]
    fn unavailable_directory_keeps_its_songs() {
        let dir = TempDir::new().unwrap();
        let media = dir.path().join("media");
        let unmounted = dir.path().join("unmounted");
        fs::create_dir(&media).unwrap();

        let mut conn = init_db(&dir.path().join("lib.db")).unwrap();
        store(&mut conn, &song_at(1, &media.join("gone.mp3")));
        store(&mut conn, &song_at(2, &unmounted.join("away.mp3")));

        let count = process_music_library(
            &mut conn,
            &[
                media.to_string_lossy().to_string(),
                unmounted.to_string_lossy().to_string(),
            ],
        )
        .unwrap();

        assert_eq!(count, 1);
        let songs = fetch_songs(&conn).unwrap();
        assert_eq!(songs[0].id, 2);
        assert_eq!(songs[0].tags, vec!["keep"]);
    }

    #[test]
    fn scan_without_available_directory_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let mut conn = init_db(&dir.path().join("lib.db")).unwrap();
        store(&mut conn, &song_at(1, &missing.join("song.mp3")));

        let result = process_music_library(&mut conn, &[missing.to_string_lossy().to_string()]);

        assert!(result.is_err());
        let songs = fetch_songs(&conn).unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].tags, vec!["keep"]);
    }
}
