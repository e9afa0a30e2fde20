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

//! Write-through song cache stored as a JSON file.

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, ErrorKind, Write},
    path::PathBuf,
};

use tracing::debug;

use crate::{
    model::Song,
    services::{ServiceError, SongCache},
};

pub(crate) struct JsonSongCache {
    path: PathBuf,
}

impl JsonSongCache {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SongCache for JsonSongCache {
    /// Replaces the cache contents.
    ///
    /// The file is written next to the cache and renamed into place, so a
    /// crash mid-write never leaves a truncated cache behind.
    fn store(&mut self, songs: &[Song]) -> Result<(), ServiceError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        {
            let mut writer = BufWriter::new(File::create(&tmp)?);
            serde_json::to_writer(&mut writer, songs)?;
            writer.flush()?;
        }
        fs::rename(&tmp, &self.path)?;

        debug!(count = songs.len(), path = %self.path.display(), "Cached songs");
        Ok(())
    }

    fn load(&self) -> Result<Option<Vec<Song>>, ServiceError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let songs = serde_json::from_reader(BufReader::new(file))?;
        Ok(Some(songs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::song;
    use tempfile::TempDir;

    #[test]
    fn missing_cache_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let cache = JsonSongCache::new(dir.path().join("songs.json"));

        assert!(cache.load().unwrap().is_none());
    }

    #[test]
    fn stored_songs_load_back() {
        let dir = TempDir::new().unwrap();
        let mut cache = JsonSongCache::new(dir.path().join("nested").join("songs.json"));
        let songs = vec![song(1, "One", &["A"], &["rock"]), song(2, "Two", &[], &[])];

        cache.store(&songs).unwrap();

        assert_eq!(cache.load().unwrap(), Some(songs));
    }

    #[test]
    fn corrupt_cache_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("songs.json");
        fs::write(&path, "{not json").unwrap();

        let cache = JsonSongCache::new(path);
        assert!(matches!(cache.load(), Err(ServiceError::CacheFormat(_))));
    }
}
