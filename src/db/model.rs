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

//! Database row mapping for domain models.
//!
//! This module provides the conversion logic between raw SQLite result rows
//! and high-level domain models.
//!
//! Durable ids are 64-bit hashes and SQLite integers are signed, so ids are
//! stored bit-for-bit as `i64` and converted back on the way out.

use rusqlite::Row;

use crate::model::Song;

pub(crate) fn to_db_id(id: u64) -> i64 {
    id as i64
}

pub(crate) fn from_db_id(id: i64) -> u64 {
    id as u64
}

impl Song {
    /// Maps an SQLite row to a [`Song`] instance without artists or tags.
    ///
    /// This is a helper function designed to be used with [`rusqlite::Statement::query_map`],
    /// the caller fills in the artist and tag lists.
    ///
    /// # Errors
    ///
    /// Returns a [`rusqlite::Error`] if:
    /// * The row does not contain enough columns.
    /// * The data in a column cannot be converted to the required Rust type.
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: from_db_id(row.get(0)?),
            title: row.get(1)?,
            artists: vec![],
            tags: vec![],
            filename: row.get(2)?,
            updated_at: row.get(3)?,
        })
    }
}
