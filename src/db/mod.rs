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

//! Data access layer.
//!
//! This module handles all interactions with the SQLite database, including
//! schema creation, fetching songs and rewriting tag assignments. It uses
//! cached statements to optimize frequently executed queries.
//!
//! # Tables
//!
//! * `songs` - One row per audio file, keyed by the durable id.
//! * `song_artists` - Ordered artist names for each song.
//! * `song_tags` - Ordered tag names for each song, unique per song.
//!
//! Tags have no table of their own, a tag exists for as long as some song
//! row in `song_tags` names it.

mod model;
pub(crate) mod scan;

use std::{collections::HashMap, path::Path};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, params};

use crate::model::Song;

/// Opens a connection to the SQLite database and configures performance settings.
///
/// This function performs the following setup:
/// * **WAL Mode**: Enables Write-Ahead Logging so the UI and the scanner can
///   share the file.
/// * **Performance Tuning**: Sets synchronous mode to `NORMAL` and increases the cache size.
/// * **Constraints**: Enforces foreign key integrity.
/// * **Schema**: Executes [`create_schema`] to ensure all tables and indices exist.
///
/// # Errors
///
/// Returns an error if:
/// * The database file cannot be opened.
/// * The initial PRAGMA configurations fail.
/// * The schema initialization fails.
pub(crate) fn init_db(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)
        .with_context(|| format!("Failed to open database {}", path.display()))?;

    let journal_mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |r| r.get(0))?;
    if journal_mode != "wal" && journal_mode != "memory" {
        anyhow::bail!(
            "Failed to switch to WAL mode. Current mode: {}",
            journal_mode
        );
    }

    conn.execute_batch(
        "
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        PRAGMA cache_size = -16000;
    ",
    )?;

    conn.set_prepared_statement_cache_capacity(100);

    create_schema(&conn)?;

    Ok(conn)
}

/// Create the database schema.
///
/// Artist and tag rows cascade with their song. The index on tag names keeps
/// renames and deletions from scanning the whole table.
fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "BEGIN;

        CREATE TABLE IF NOT EXISTS songs (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            filename TEXT NOT NULL UNIQUE,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS song_artists (
            song_id INTEGER NOT NULL,
            position INTEGER NOT NULL,
            name TEXT NOT NULL,
            PRIMARY KEY (song_id, position),
            FOREIGN KEY (song_id) REFERENCES songs (id) ON DELETE CASCADE
        );

        CREATE TABLE IF NOT EXISTS song_tags (
            song_id INTEGER NOT NULL,
            position INTEGER NOT NULL,
            name TEXT NOT NULL,
            PRIMARY KEY (song_id, name),
            FOREIGN KEY (song_id) REFERENCES songs (id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_song_tags_name ON song_tags (name);

        COMMIT;",
    )
    .context("Failed to create schema")
}

/// Fetches every song together with its artists and tags.
///
/// Artists and tags are loaded with one query each and grouped in memory,
/// rather than one query per song.
pub(crate) fn fetch_songs(conn: &Connection) -> Result<Vec<Song>> {
    let mut artists = fetch_song_strings(conn, "SELECT song_id, name FROM song_artists ORDER BY song_id, position")?;
    let mut tags = fetch_song_strings(conn, "SELECT song_id, name FROM song_tags ORDER BY song_id, position")?;

    let mut stmt = conn.prepare_cached("SELECT id, title, filename, updated_at FROM songs ORDER BY title")?;
    let songs = stmt
        .query_map([], Song::from_row)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|mut song| {
            song.artists = artists.remove(&song.id).unwrap_or_default();
            song.tags = tags.remove(&song.id).unwrap_or_default();
            song
        })
        .collect();

    Ok(songs)
}

fn fetch_song_strings(conn: &Connection, sql: &str) -> Result<HashMap<u64, Vec<String>>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map([], |row| {
        let id: i64 = row.get(0)?;
        let name: String = row.get(1)?;
        Ok((model::from_db_id(id), name))
    })?;

    let mut results: HashMap<u64, Vec<String>> = HashMap::new();
    for row in rows {
        let (id, name) = row?;
        results.entry(id).or_default().push(name);
    }

    Ok(results)
}

/// Renames a tag on every song, returning the number of songs touched.
///
/// Songs that already carry the new name keep their existing row and lose the
/// old one, so the tag appears exactly once afterwards.
pub(crate) fn rename_tag(conn: &mut Connection, old: &str, new: &str, now: DateTime<Utc>) -> Result<usize> {
    let tx = conn.transaction()?;

    let touched = tx.execute(
        "UPDATE songs SET updated_at = ?1 WHERE id IN (SELECT song_id FROM song_tags WHERE name = ?2)",
        params![now, old],
    )?;
    tx.execute(
        "UPDATE OR IGNORE song_tags SET name = ?1 WHERE name = ?2",
        params![new, old],
    )?;
    tx.execute("DELETE FROM song_tags WHERE name = ?1", params![old])?;

    tx.commit().context("Failed to commit tag rename")?;

    Ok(touched)
}

/// Removes a tag from every song, returning the number of songs touched.
pub(crate) fn delete_tag(conn: &mut Connection, name: &str, now: DateTime<Utc>) -> Result<usize> {
    let tx = conn.transaction()?;

    let touched = tx.execute(
        "UPDATE songs SET updated_at = ?1 WHERE id IN (SELECT song_id FROM song_tags WHERE name = ?2)",
        params![now, name],
    )?;
    tx.execute("DELETE FROM song_tags WHERE name = ?1", params![name])?;

    tx.commit().context("Failed to commit tag deletion")?;

    Ok(touched)
}

/// Replaces the tags of one song.
///
/// # Errors
///
/// Returns an error if the song does not exist, nothing is written in that
/// case.
pub(crate) fn update_song_tags(conn: &mut Connection, song_id: u64, tags: &[String], now: DateTime<Utc>) -> Result<()> {
    let tx = conn.transaction()?;

    let updated = tx.execute(
        "UPDATE songs SET updated_at = ?1 WHERE id = ?2",
        params![now, model::to_db_id(song_id)],
    )?;
    if updated == 0 {
        anyhow::bail!("No song with id {}", song_id);
    }

    tx.execute("DELETE FROM song_tags WHERE song_id = ?1", params![model::to_db_id(song_id)])?;
    {
        let mut stmt = tx.prepare_cached(
            "INSERT OR IGNORE INTO song_tags (song_id, position, name) VALUES (?1, ?2, ?3)",
        )?;
        for (position, name) in tags.iter().enumerate() {
            stmt.execute(params![model::to_db_id(song_id), position as i64, name])?;
        }
    }

    tx.commit().context("Failed to commit song tags")?;

    Ok(())
}
