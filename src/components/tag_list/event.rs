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

//! Keyboard handling for the tag list.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::{TagListAction, TagListView, nav},
    model::Tag,
};

impl TagListView {
    pub(crate) fn process_event(&mut self, event: &Event, tags: &[Tag]) -> Option<TagListAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        if self.searching {
            return match key_event.code {
                KeyCode::Esc | KeyCode::Enter => {
                    self.searching = false;
                    None
                }
                _ => {
                    let before = self.search.value().to_string();
                    self.search.handle_event(event);
                    if before == self.search.value() {
                        return None;
                    }
                    self.refresh(tags);
                    Some(TagListAction::StateChanged)
                }
            };
        }

        if nav::navigate(&mut self.table_state, self.visible.len(), event) {
            return None;
        }

        match key_event.code {
            KeyCode::Char('/') => {
                self.searching = true;
                None
            }

            KeyCode::Char('s') => {
                self.sort = self.sort.next();
                self.refresh(tags);
                Some(TagListAction::StateChanged)
            }

            KeyCode::Char('c') => {
                self.compact = !self.compact;
                Some(TagListAction::StateChanged)
            }

            KeyCode::Enter => self
                .selected_tag()
                .map(|tag| TagListAction::Select(tag.name.clone())),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use super::*;
    use crate::{
        components::testing::{ch, key, text},
        model::{TagSort, fixtures::song, tags::generate_tags_from_songs},
    };

    fn tags() -> Vec<Tag> {
        generate_tags_from_songs(&[
            song(1, "One", &[], &["rock", "jazz"]),
            song(2, "Two", &[], &["rock"]),
            song(3, "Three", &[], &["Ballad"]),
        ])
    }

    #[test]
    fn search_filters_and_reports_changes() {
        let tags = tags();
        let mut view = TagListView::new();
        view.refresh(&tags);

        assert_eq!(view.process_event(&ch('/'), &tags), None);
        assert!(view.is_capturing());

        let actions: Vec<_> = text("ja")
            .iter()
            .filter_map(|e| view.process_event(e, &tags))
            .collect();
        assert_eq!(actions, vec![TagListAction::StateChanged; 2]);
        assert_eq!(view.visible().len(), 1);

        // 's' is text while searching
        assert_eq!(view.process_event(&ch('s'), &tags), Some(TagListAction::StateChanged));
        assert_eq!(view.sort, TagSort::Name);
        assert_eq!(view.search.value(), "jas");

        view.process_event(&key(KeyCode::Esc), &tags);
        assert!(!view.is_capturing());
    }

    #[test]
    fn sort_and_compact_keys() {
        let tags = tags();
        let mut view = TagListView::new();
        view.refresh(&tags);

        assert_eq!(view.process_event(&ch('s'), &tags), Some(TagListAction::StateChanged));
        assert_eq!(view.sort, TagSort::SongCount);
        assert_eq!(view.visible()[0].name, "rock");

        assert_eq!(view.process_event(&ch('c'), &tags), Some(TagListAction::StateChanged));
        assert!(view.compact);
    }

    #[test]
    fn enter_selects_highlighted_tag() {
        let tags = tags();
        let mut view = TagListView::new();
        view.refresh(&tags);

        view.process_event(&ch('j'), &tags);
        assert_eq!(
            view.process_event(&key(KeyCode::Enter), &tags),
            Some(TagListAction::Select("jazz".to_string()))
        );
    }

    #[test]
    fn enter_on_empty_list_does_nothing() {
        let mut view = TagListView::new();
        view.refresh(&[]);

        assert_eq!(view.process_event(&key(KeyCode::Enter), &[]), None);
    }
}
