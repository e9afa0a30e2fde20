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

//! Detail view for a single tag.
//!
//! Lists the songs carrying the tag and offers renaming and deletion, both
//! behind a confirmation prompt.

mod event;
mod render;

use ratatui::widgets::TableState;
use tui_input::Input;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TagDetailAction {
    Rename { from: String, to: String },
    Delete(String),
    OpenSong(u64),
    Back,
}

pub(crate) struct TagDetailView {
    pub(crate) table_state: TableState,
    pub(crate) rename: Option<Input>,
    /// Rename or delete waiting for confirmation.
    pub(crate) pending: Option<TagDetailAction>,
    tag: Option<String>,
}

impl TagDetailView {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::default(),
            rename: None,
            pending: None,
            tag: None,
        }
    }

    /// Points the view at a tag. Switching to a different tag drops any edit
    /// in progress and moves the cursor back to the first song.
    pub(crate) fn show(&mut self, name: &str) {
        if self.tag.as_deref() == Some(name) {
            return;
        }
        self.tag = Some(name.to_string());
        self.table_state.select(Some(0));
        self.rename = None;
        self.pending = None;
    }

    pub(crate) fn is_capturing(&self) -> bool {
        self.rename.is_some() || self.pending.is_some()
    }

    /// Validates the rename text, turning it into a pending rename.
    fn submit_rename(&mut self, current: &str) {
        let Some(input) = self.rename.take() else {
            return;
        };
        let to = input.value().trim();
        if to.is_empty() || to == current {
            return;
        }
        self.pending = Some(TagDetailAction::Rename {
            from: current.to_string(),
            to: to.to_string(),
        });
    }
}
