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

//! Keyboard handling for the registration tab.
//!
//! Keys go to whichever part has focus. `Tab` leaves the tag input only when
//! its text is empty, otherwise it moves through the suggestions.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::{RegisterAction, RegisterFocus, RegisterView, TagInputAction, nav},
    model::Song,
};

impl RegisterView {
    pub(crate) fn process_event(&mut self, event: &Event, songs: &[Song]) -> Option<RegisterAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match self.focus {
            RegisterFocus::Search => match key_event.code {
                KeyCode::Esc | KeyCode::Enter => {
                    self.focus = RegisterFocus::Songs;
                    None
                }
                _ => {
                    let before = self.search.value().to_string();
                    self.search.handle_event(event);
                    if before == self.search.value() {
                        return None;
                    }
                    self.refresh(songs);
                    Some(RegisterAction::StateChanged)
                }
            },

            RegisterFocus::Tags => {
                let idle = self.tag_input.input.value().is_empty() && self.tag_input.pending.is_none();
                if key_event.code == KeyCode::Tab && idle {
                    self.focus = RegisterFocus::Songs;
                    return None;
                }

                match self.tag_input.process_event(event)? {
                    TagInputAction::Changed(tags) => Some(RegisterAction::SongTagsChanged {
                        song_id: self.song()?,
                        tags,
                    }),
                    TagInputAction::Released => {
                        self.focus = RegisterFocus::Songs;
                        None
                    }
                }
            }

            RegisterFocus::Songs => {
                if nav::navigate(&mut self.table_state, self.visible.len(), event) {
                    return None;
                }

                match key_event.code {
                    KeyCode::Char('/') => {
                        self.focus = RegisterFocus::Search;
                        None
                    }

                    KeyCode::Char('s') => {
                        self.sort = self.sort.next();
                        self.refresh(songs);
                        Some(RegisterAction::StateChanged)
                    }

                    KeyCode::Char('c') => {
                        self.compact = !self.compact;
                        Some(RegisterAction::StateChanged)
                    }

                    KeyCode::Enter => {
                        let id = self.selected_song_id()?;
                        self.focus = RegisterFocus::Tags;
                        Some(RegisterAction::SelectSong(id))
                    }

                    KeyCode::Tab if self.song().is_some() => {
                        self.focus = RegisterFocus::Tags;
                        None
                    }

                    _ => None,
                }
            }
        }
    }
}
