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

//! Keyboard handling for the tag detail view.

use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::components::{TagDetailAction, TagDetailView, nav};

impl TagDetailView {
    /// Handles a key for the tag `name`, whose songs are `song_ids` in display
    /// order.
    pub(crate) fn process_event(&mut self, event: &Event, name: &str, song_ids: &[u64]) -> Option<TagDetailAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        if self.pending.is_some() {
            return match key_event.code {
                KeyCode::Char('y') | KeyCode::Enter => self.pending.take(),
                KeyCode::Char('n') | KeyCode::Esc => {
                    self.pending = None;
                    None
                }
                _ => None,
            };
        }

        if let Some(input) = self.rename.as_mut() {
            match key_event.code {
                KeyCode::Enter => self.submit_rename(name),
                KeyCode::Esc => self.rename = None,
                _ => {
                    input.handle_event(event);
                }
            }
            return None;
        }

        if nav::navigate(&mut self.table_state, song_ids.len(), event) {
            return None;
        }

        match key_event.code {
            KeyCode::Char('r') => {
                self.rename = Some(Input::new(name.to_string()));
                None
            }

            KeyCode::Char('d') => {
                self.pending = Some(TagDetailAction::Delete(name.to_string()));
                None
            }

            KeyCode::Enter => self
                .table_state
                .selected()
                .and_then(|i| song_ids.get(i))
                .map(|id| TagDetailAction::OpenSong(*id)),

            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => Some(TagDetailAction::Back),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::{ch, key, text};

    fn view() -> TagDetailView {
        let mut view = TagDetailView::new();
        view.show("rock");
        view
    }

    #[test]
    fn rename_requires_confirmation() {
        let mut view = view();

        assert_eq!(view.process_event(&ch('r'), "rock", &[]), None);
        assert_eq!(view.rename.as_ref().map(|i| i.value()), Some("rock"));

        for event in text("s") {
            view.process_event(&event, "rock", &[]);
        }
        assert_eq!(view.process_event(&key(KeyCode::Enter), "rock", &[]), None);
        assert!(view.rename.is_none());

        assert_eq!(
            view.process_event(&ch('y'), "rock", &[]),
            Some(TagDetailAction::Rename {
                from: "rock".to_string(),
                to: "rocks".to_string()
            })
        );
        assert!(!view.is_capturing());
    }

    #[test]
    fn rename_can_be_abandoned() {
        let mut view = view();

        view.process_event(&ch('r'), "rock", &[]);
        view.process_event(&key(KeyCode::Esc), "rock", &[]);
        assert!(!view.is_capturing());

        // Unchanged name never reaches the prompt
        view.process_event(&ch('r'), "rock", &[]);
        view.process_event(&key(KeyCode::Enter), "rock", &[]);
        assert_eq!(view.pending, None);
    }

    #[test]
    fn delete_can_be_cancelled_or_confirmed() {
        let mut view = view();

        view.process_event(&ch('d'), "rock", &[]);
        assert_eq!(view.process_event(&ch('n'), "rock", &[]), None);
        assert_eq!(view.pending, None);

        view.process_event(&ch('d'), "rock", &[]);
        assert_eq!(
            view.process_event(&key(KeyCode::Enter), "rock", &[]),
            Some(TagDetailAction::Delete("rock".to_string()))
        );
    }

    #[test]
    fn enter_opens_highlighted_song() {
        let mut view = view();

        view.process_event(&ch('j'), "rock", &[10, 20]);
        assert_eq!(
            view.process_event(&key(KeyCode::Enter), "rock", &[10, 20]),
            Some(TagDetailAction::OpenSong(20))
        );
    }

    #[test]
    fn escape_goes_back() {
        let mut view = view();

        assert_eq!(
            view.process_event(&key(KeyCode::Esc), "rock", &[]),
            Some(TagDetailAction::Back)
        );
        assert_eq!(
            view.process_event(&key(KeyCode::Backspace), "rock", &[]),
            Some(TagDetailAction::Back)
        );
    }
}
