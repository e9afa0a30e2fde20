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

//! Song search and sorting for the registration view.

use std::cmp::Ordering;

use crate::model::{
    Song, SongSort,
    collate::{compare_names, contains_ignore_case},
};

/// Returns the songs whose title, artists or tags contain the query.
pub(crate) fn search_songs<'a>(songs: &'a [Song], query: &str) -> Vec<&'a Song> {
    songs
        .iter()
        .filter(|song| {
            contains_ignore_case(&song.title, query)
                || song.artists.iter().any(|a| contains_ignore_case(a, query))
                || song.tags.iter().any(|t| contains_ignore_case(t, query))
        })
        .collect()
}

pub(crate) fn sort_songs(songs: &mut [&Song], sort: SongSort) {
    match sort {
        SongSort::Title => songs.sort_by(|a, b| compare_names(&a.title, &b.title)),
        SongSort::Artist => songs.sort_by(|a, b| {
            compare_first_artist(a, b).then_with(|| compare_names(&a.title, &b.title))
        }),
        SongSort::Recent => songs.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
    }
}

fn compare_first_artist(a: &Song, b: &Song) -> Ordering {
    match (a.artists.first(), b.artists.first()) {
        (Some(x), Some(y)) => compare_names(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
