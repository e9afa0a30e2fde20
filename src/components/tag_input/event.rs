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

//! Keyboard handling for the tag input.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{TagInput, TagInputAction};

impl TagInput {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<TagInputAction> {
        if self.disabled {
            return None;
        }

        let Event::Key(key_event) = event else {
            return None;
        };

        if self.pending.is_some() {
            return match key_event.code {
                KeyCode::Char('y') | KeyCode::Enter => self.confirm().map(TagInputAction::Changed),
                KeyCode::Char('n') | KeyCode::Esc => {
                    self.cancel();
                    None
                }
                _ => None,
            };
        }

        let text_empty = self.input.value().is_empty();

        match key_event.code {
            KeyCode::Down | KeyCode::Tab => self.next_suggestion(),
            KeyCode::Up | KeyCode::BackTab => self.previous_suggestion(),

            KeyCode::Enter => {
                let name = match self.highlighted() {
                    Some(i) => self.suggestions().get(i).map(|s| s.to_string()),
                    None => Some(self.input.value().to_string()),
                };
                if let Some(name) = name {
                    self.request_add(&name);
                }
            }

            KeyCode::Esc => {
                if self.highlighted().is_some() {
                    self.highlighted = None;
                } else if !text_empty {
                    self.reset_text();
                } else {
                    return Some(TagInputAction::Released);
                }
            }

            KeyCode::Left if text_empty => self.move_tag_cursor(false),
            KeyCode::Right if text_empty => self.move_tag_cursor(true),

            KeyCode::Backspace | KeyCode::Delete if text_empty => {
                if let Some(name) = self.removal_target() {
                    self.request_remove(&name);
                }
            }

            _ => {
                let before = self.input.value().to_string();
                self.input.handle_event(event);
                if before != self.input.value() {
                    self.highlighted = None;
                    self.tag_cursor = None;
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{
        PendingChange,
        testing::{ch, key, text},
    };

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn input_with(vocabulary: &[&str], selected: &[&str]) -> TagInput {
        let mut input = TagInput::new();
        input.set_tags(strings(vocabulary), strings(selected));
        input
    }

    fn type_text(input: &mut TagInput, s: &str) {
        for event in text(s) {
            assert_eq!(input.process_event(&event), None);
        }
    }

    #[test]
    fn typed_text_filters_suggestions() {
        let mut input = input_with(&["ballad", "rock", "jpop"], &[]);
        type_text(&mut input, "ro");

        assert_eq!(input.suggestions(), vec!["rock"]);
    }

    #[test]
    fn highlighted_suggestion_is_added_after_confirmation() {
        let mut input = input_with(&["ballad", "rock", "jpop"], &[]);
        type_text(&mut input, "ro");

        input.process_event(&key(KeyCode::Down));
        assert_eq!(input.highlighted(), Some(0));

        assert_eq!(input.process_event(&key(KeyCode::Enter)), None);
        assert_eq!(input.pending, Some(PendingChange::Add("rock".to_string())));
        assert!(input.selected.is_empty());

        assert_eq!(
            input.process_event(&ch('y')),
            Some(TagInputAction::Changed(strings(&["rock"])))
        );
        assert_eq!(input.input.value(), "");
    }

    #[test]
    fn typed_text_is_added_when_nothing_highlighted() {
        let mut input = input_with(&["rock"], &[]);
        type_text(&mut input, "shoegaze");

        input.process_event(&key(KeyCode::Enter));
        assert_eq!(input.pending, Some(PendingChange::Add("shoegaze".to_string())));

        // Only y, n, Enter and Esc are accepted while confirming
        assert_eq!(input.process_event(&ch('x')), None);
        assert_eq!(input.input.value(), "shoegaze");

        assert_eq!(
            input.process_event(&key(KeyCode::Enter)),
            Some(TagInputAction::Changed(strings(&["shoegaze"])))
        );
    }

    #[test]
    fn already_selected_tag_shows_no_prompt() {
        let mut input = input_with(&["rock"], &["rock"]);
        type_text(&mut input, "rock");

        assert_eq!(input.process_event(&key(KeyCode::Enter)), None);
        assert_eq!(input.pending, None);
        assert_eq!(input.selected, strings(&["rock"]));
    }

    #[test]
    fn cancel_leaves_tags_unchanged() {
        let mut input = input_with(&[], &["rock", "live"]);

        input.process_event(&key(KeyCode::Backspace));
        assert_eq!(input.pending, Some(PendingChange::Remove("live".to_string())));

        assert_eq!(input.process_event(&ch('n')), None);
        assert_eq!(input.pending, None);
        assert_eq!(input.selected, strings(&["rock", "live"]));
    }

    #[test]
    fn focused_tag_is_removed() {
        let mut input = input_with(&[], &["rock", "live", "demo"]);

        input.process_event(&key(KeyCode::Right));
        input.process_event(&key(KeyCode::Right));
        input.process_event(&key(KeyCode::Delete));
        assert_eq!(input.pending, Some(PendingChange::Remove("live".to_string())));

        assert_eq!(
            input.process_event(&ch('y')),
            Some(TagInputAction::Changed(strings(&["rock", "demo"])))
        );
    }

    #[test]
    fn backspace_edits_text_when_not_empty() {
        let mut input = input_with(&[], &["rock"]);
        type_text(&mut input, "ab");

        input.process_event(&key(KeyCode::Backspace));
        assert_eq!(input.input.value(), "a");
        assert_eq!(input.pending, None);
    }

    #[test]
    fn escape_unwinds_then_releases() {
        let mut input = input_with(&["rock"], &[]);
        type_text(&mut input, "r");
        input.process_event(&key(KeyCode::Tab));

        assert_eq!(input.process_event(&key(KeyCode::Esc)), None);
        assert_eq!(input.highlighted(), None);

        assert_eq!(input.process_event(&key(KeyCode::Esc)), None);
        assert_eq!(input.input.value(), "");

        assert_eq!(
            input.process_event(&key(KeyCode::Esc)),
            Some(TagInputAction::Released)
        );
    }

    #[test]
    fn disabled_input_ignores_keys() {
        let mut input = input_with(&["rock"], &[]);
        input.disabled = true;

        type_text(&mut input, "rock");
        input.process_event(&key(KeyCode::Enter));

        assert_eq!(input.input.value(), "");
        assert_eq!(input.pending, None);
    }

    #[test]
    fn suggestions_wrap_in_both_directions() {
        let mut input = input_with(&["a", "b", "c"], &[]);

        input.process_event(&key(KeyCode::Up));
        assert_eq!(input.highlighted(), Some(2));

        input.process_event(&key(KeyCode::Down));
        assert_eq!(input.highlighted(), Some(0));

        input.process_event(&key(KeyCode::BackTab));
        assert_eq!(input.highlighted(), Some(2));
    }
}
