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

//! Tag registration tab.
//!
//! A searchable song table on the left and, once a song is opened, a
//! [`TagInput`] editing that song's tags on the right.

mod event;
mod render;

use ratatui::widgets::TableState;
use tui_input::Input;

use crate::{
    components::{TagInput, nav},
    model::{
        Song, SongSort,
        songs::{search_songs, sort_songs},
    },
    route::RegisterParams,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum RegisterFocus {
    Songs,
    Search,
    Tags,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RegisterAction {
    StateChanged,
    SelectSong(u64),
    SongTagsChanged { song_id: u64, tags: Vec<String> },
}

pub(crate) struct RegisterView {
    pub(crate) search: Input,
    pub(crate) sort: SongSort,
    pub(crate) compact: bool,
    pub(crate) focus: RegisterFocus,
    pub(crate) table_state: TableState,
    pub(crate) tag_input: TagInput,
    visible: Vec<u64>,
    song: Option<u64>,
}

impl RegisterView {
    pub(crate) fn new() -> Self {
        Self {
            search: Input::default(),
            sort: SongSort::default(),
            compact: false,
            focus: RegisterFocus::Songs,
            table_state: TableState::default(),
            tag_input: TagInput::new(),
            visible: vec![],
            song: None,
        }
    }

    /// Takes the search text, display settings and open song from the view
    /// state.
    pub(crate) fn apply_params(&mut self, params: &RegisterParams, songs: &[Song], vocabulary: Vec<String>) {
        if self.search.value() != params.query {
            self.search = Input::new(params.query.clone());
        }
        self.sort = params.sort;
        self.compact = params.compact;
        self.refresh(songs);

        let song = params.song.and_then(|id| songs.iter().find(|s| s.id == id));
        self.open_song(song, vocabulary);
    }

    pub(crate) fn write_params(&self, params: &mut RegisterParams) {
        params.query = self.search.value().to_string();
        params.sort = self.sort;
        params.compact = self.compact;
        params.song = self.song;
    }

    pub(crate) fn refresh(&mut self, songs: &[Song]) {
        let mut found = search_songs(songs, self.search.value());
        sort_songs(&mut found, self.sort);
        self.visible = found.iter().map(|s| s.id).collect();
        nav::clamp(&mut self.table_state, self.visible.len());
    }

    /// Opens a song in the tag input. Reopening the same song keeps the edit
    /// in progress but takes the song's current tags, which a rename, delete
    /// or reload may have changed.
    fn open_song(&mut self, song: Option<&Song>, vocabulary: Vec<String>) {
        match song {
            Some(song) if self.song == Some(song.id) => self.tag_input.refresh(vocabulary, song.tags.clone()),

            Some(song) => {
                self.song = Some(song.id);
                self.tag_input.set_tags(vocabulary, song.tags.clone());
                if let Some(i) = self.visible.iter().position(|id| *id == song.id) {
                    self.table_state.select(Some(i));
                }
            }

            None => {
                self.song = None;
                self.tag_input.set_tags(vocabulary, vec![]);
                if self.focus == RegisterFocus::Tags {
                    self.focus = RegisterFocus::Songs;
                }
            }
        }
    }

    pub(crate) fn song(&self) -> Option<u64> {
        self.song
    }

    pub(crate) fn visible(&self) -> &[u64] {
        &self.visible
    }

    pub(crate) fn selected_song_id(&self) -> Option<u64> {
        self.table_state.selected().and_then(|i| self.visible.get(i)).copied()
    }

    pub(crate) fn is_capturing(&self) -> bool {
        self.focus != RegisterFocus::Songs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::song;

    fn songs() -> Vec<Song> {
        vec![
            song(1, "Yellow", &["Coldplay"], &["rock"]),
            song(2, "Blue", &["Eiffel 65"], &["dance"]),
            song(3, "Green Onions", &["Booker T"], &[]),
        ]
    }

    fn vocabulary() -> Vec<String> {
        vec!["dance".to_string(), "rock".to_string()]
    }

    #[test]
    fn refresh_searches_and_sorts() {
        let mut view = RegisterView::new();
        view.refresh(&songs());
        assert_eq!(view.visible(), &[2, 3, 1]);

        view.search = Input::new("rock".to_string());
        view.refresh(&songs());
        assert_eq!(view.visible(), &[1]);
    }

    #[test]
    fn params_open_the_song() {
        let mut view = RegisterView::new();
        let params = RegisterParams {
            song: Some(1),
            sort: SongSort::Artist,
            ..RegisterParams::default()
        };

        view.apply_params(&params, &songs(), vocabulary());

        assert_eq!(view.song(), Some(1));
        assert_eq!(view.tag_input.selected, vec!["rock".to_string()]);
        assert_eq!(view.selected_song_id(), Some(1));

        let mut written = RegisterParams::default();
        view.write_params(&mut written);
        assert_eq!(written, params);
    }

    #[test]
    fn unknown_song_closes_the_editor() {
        let mut view = RegisterView::new();
        view.apply_params(
            &RegisterParams {
                song: Some(1),
                ..RegisterParams::default()
            },
            &songs(),
            vocabulary(),
        );
        view.focus = RegisterFocus::Tags;

        view.apply_params(
            &RegisterParams {
                song: Some(99),
                ..RegisterParams::default()
            },
            &songs(),
            vocabulary(),
        );

        assert_eq!(view.song(), None);
        assert_eq!(view.focus, RegisterFocus::Songs);
    }

    #[test]
    fn reopening_keeps_edit_in_progress() {
        let mut view = RegisterView::new();
        let params = RegisterParams {
            song: Some(1),
            ..RegisterParams::default()
        };
        view.apply_params(&params, &songs(), vocabulary());
        view.tag_input.request_add("live");

        view.apply_params(&params, &songs(), vocabulary());

        assert!(view.tag_input.pending.is_some());
    }

    #[test]
    fn reopening_takes_changed_song_tags() {
        let mut view = RegisterView::new();
        let params = RegisterParams {
            song: Some(1),
            ..RegisterParams::default()
        };
        view.apply_params(&params, &songs(), vocabulary());

        let mut renamed = songs();
        renamed[0].tags = vec!["stone".to_string()];
        view.apply_params(&params, &renamed, vocabulary());

        assert_eq!(view.tag_input.selected, vec!["stone".to_string()]);
    }
}
