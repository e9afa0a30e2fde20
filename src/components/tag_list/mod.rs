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

//! Searchable, sortable list of all tags.
//!
//! The view keeps its own search text, sort mode and compact flag, and a
//! derived list of the tags currently visible. The derived list is rebuilt
//! whenever the tags or one of the view settings change.

mod event;
mod render;

use ratatui::widgets::TableState;
use tui_input::Input;

use crate::{
    components::nav,
    model::{Tag, TagSort, tags::filter_and_sort_tags},
    route::ListParams,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TagListAction {
    Select(String),
    StateChanged,
}

pub(crate) struct TagListView {
    pub(crate) search: Input,
    pub(crate) searching: bool,
    pub(crate) sort: TagSort,
    pub(crate) compact: bool,
    pub(crate) table_state: TableState,
    visible: Vec<Tag>,
}

impl TagListView {
    pub(crate) fn new() -> Self {
        Self {
            search: Input::default(),
            searching: false,
            sort: TagSort::default(),
            compact: false,
            table_state: TableState::default(),
            visible: vec![],
        }
    }

    /// Takes the search text and display settings from the view state.
    pub(crate) fn apply_params(&mut self, params: &ListParams, tags: &[Tag]) {
        if self.search.value() != params.query {
            self.search = Input::new(params.query.clone());
        }
        self.sort = params.sort;
        self.compact = params.compact;
        self.refresh(tags);
    }

    /// Writes the search text and display settings back to the view state.
    pub(crate) fn write_params(&self, params: &mut ListParams) {
        params.query = self.search.value().to_string();
        params.sort = self.sort;
        params.compact = self.compact;
    }

    pub(crate) fn refresh(&mut self, tags: &[Tag]) {
        self.visible = filter_and_sort_tags(tags, self.search.value(), self.sort);
        nav::clamp(&mut self.table_state, self.visible.len());
    }

    pub(crate) fn visible(&self) -> &[Tag] {
        &self.visible
    }

    pub(crate) fn selected_tag(&self) -> Option<&Tag> {
        self.table_state.selected().and_then(|i| self.visible.get(i))
    }

    /// Returns `true` while the view consumes printable keys.
    pub(crate) fn is_capturing(&self) -> bool {
        self.searching
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{fixtures::song, tags::generate_tags_from_songs};

    fn tags() -> Vec<Tag> {
        generate_tags_from_songs(&[
            song(1, "One", &[], &["rock", "jazz"]),
            song(2, "Two", &[], &["rock"]),
            song(3, "Three", &[], &["Ballad"]),
        ])
    }

    fn names(view: &TagListView) -> Vec<&str> {
        view.visible().iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn params_round_trip_through_view() {
        let mut view = TagListView::new();
        let params = ListParams {
            query: "ro".to_string(),
            sort: TagSort::SongCount,
            compact: true,
            tag: None,
        };

        view.apply_params(&params, &tags());
        assert_eq!(names(&view), vec!["rock"]);
        assert!(view.compact);

        let mut written = ListParams::default();
        view.write_params(&mut written);
        assert_eq!(written, params);
    }

    #[test]
    fn refresh_keeps_selection_in_range() {
        let mut view = TagListView::new();
        view.refresh(&tags());
        view.table_state.select(Some(2));

        view.search = Input::new("rock".to_string());
        view.refresh(&tags());

        assert_eq!(view.selected_tag().map(|t| t.name.as_str()), Some("rock"));
    }
}
