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

//! Tag entry with autocomplete and confirmation.
//!
//! The component edits the tag list of one song. Free text is typed into an
//! input, known tags that are not yet selected are offered as suggestions,
//! and every addition or removal has to be confirmed before the list
//! changes.
//!
//! # States
//!
//! * **Editing**: keys go to the text input or move through suggestions and
//!   selected tags.
//! * **Confirming**: a [`PendingChange`] is waiting for `y` or `n`, nothing
//!   else is accepted.
//! * **Disabled**: a save is in flight, all keys are ignored.

mod event;
mod render;

use tui_input::Input;

use crate::model::collate::contains_ignore_case;

/// Upper bound on the number of suggestions shown at once.
pub(crate) const MAX_SUGGESTIONS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PendingChange {
    Add(String),
    Remove(String),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TagInputAction {
    Changed(Vec<String>),
    Released,
}

pub(crate) struct TagInput {
    pub(crate) input: Input,
    pub(crate) selected: Vec<String>,
    pub(crate) pending: Option<PendingChange>,
    pub(crate) disabled: bool,
    vocabulary: Vec<String>,
    highlighted: Option<usize>,
    tag_cursor: Option<usize>,
}

impl TagInput {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
            selected: vec![],
            pending: None,
            disabled: false,
            vocabulary: vec![],
            highlighted: None,
            tag_cursor: None,
        }
    }

    /// Starts editing a new tag list, discarding any text or pending change.
    pub(crate) fn set_tags(&mut self, vocabulary: Vec<String>, selected: Vec<String>) {
        self.vocabulary = vocabulary;
        self.selected = selected;
        self.pending = None;
        self.reset_text();
    }

    /// Takes the latest tags of the song being edited, keeping any typed
    /// text. A pending change that no longer applies is dropped.
    pub(crate) fn refresh(&mut self, vocabulary: Vec<String>, selected: Vec<String>) {
        self.vocabulary = vocabulary;
        self.highlighted = None;

        if self.selected != selected {
            self.selected = selected;
            self.tag_cursor = None;
        }

        let stale = match &self.pending {
            Some(PendingChange::Add(name)) => self.selected.contains(name),
            Some(PendingChange::Remove(name)) => !self.selected.contains(name),
            None => false,
        };
        if stale {
            self.pending = None;
        }
    }

    pub(crate) fn suggestions(&self) -> Vec<&str> {
        suggestions(&self.vocabulary, &self.selected, self.input.value())
    }

    pub(crate) fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub(crate) fn tag_cursor(&self) -> Option<usize> {
        self.tag_cursor
    }

    /// Returns `true` if `name` may be offered for addition.
    pub(crate) fn can_add(&self, name: &str) -> bool {
        let name = name.trim();
        !name.is_empty() && !self.selected.iter().any(|t| t == name)
    }

    /// Asks for confirmation to add a tag. Returns `false`, and leaves the
    /// component untouched, when the tag cannot be added.
    pub(crate) fn request_add(&mut self, name: &str) -> bool {
        if !self.can_add(name) {
            return false;
        }
        self.pending = Some(PendingChange::Add(name.trim().to_string()));
        true
    }

    pub(crate) fn request_remove(&mut self, name: &str) -> bool {
        if !self.selected.iter().any(|t| t == name) {
            return false;
        }
        self.pending = Some(PendingChange::Remove(name.to_string()));
        true
    }

    /// Applies the pending change, returning the new tag list.
    pub(crate) fn confirm(&mut self) -> Option<Vec<String>> {
        match self.pending.take()? {
            PendingChange::Add(name) => {
                self.selected.push(name);
                self.reset_text();
            }
            PendingChange::Remove(name) => {
                self.selected.retain(|t| *t != name);
                self.tag_cursor = None;
            }
        }
        Some(self.selected.clone())
    }

    pub(crate) fn cancel(&mut self) {
        self.pending = None;
    }

    fn next_suggestion(&mut self) {
        let len = self.suggestions().len();
        if len == 0 {
            return;
        }
        self.highlighted = match self.highlighted {
            Some(i) if i + 1 < len => Some(i + 1),
            _ => Some(0),
        };
    }

    fn previous_suggestion(&mut self) {
        let len = self.suggestions().len();
        if len == 0 {
            return;
        }
        self.highlighted = match self.highlighted {
            Some(0) | None => Some(len - 1),
            Some(i) => Some(i - 1),
        };
    }

    fn move_tag_cursor(&mut self, forward: bool) {
        let len = self.selected.len();
        if len == 0 {
            return;
        }
        self.tag_cursor = match (self.tag_cursor, forward) {
            (None, true) => Some(0),
            (None, false) => Some(len - 1),
            (Some(i), true) => Some((i + 1).min(len - 1)),
            (Some(i), false) => Some(i.saturating_sub(1)),
        };
    }

    /// The tag a removal key applies to: the focused one, else the last.
    fn removal_target(&self) -> Option<String> {
        self.tag_cursor
            .and_then(|i| self.selected.get(i))
            .or_else(|| self.selected.last())
            .cloned()
    }

    fn reset_text(&mut self) {
        self.input.reset();
        self.highlighted = None;
        self.tag_cursor = None;
    }
}

/// Known tags that are not selected yet and contain `text`, ignoring case.
/// Empty text matches everything.
pub(crate) fn suggestions<'a>(vocabulary: &'a [String], selected: &[String], text: &str) -> Vec<&'a str> {
    let text = text.trim();
    vocabulary
        .iter()
        .filter(|tag| !selected.contains(tag))
        .filter(|tag| contains_ignore_case(tag, text))
        .take(MAX_SUGGESTIONS)
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn suggestions_exclude_selected_and_filter_by_text() {
        let vocabulary = strings(&["ballad", "rock", "jpop"]);

        assert_eq!(suggestions(&vocabulary, &[], "ro"), vec!["rock"]);
        assert_eq!(suggestions(&vocabulary, &strings(&["rock"]), "ro"), Vec::<&str>::new());
        assert_eq!(
            suggestions(&vocabulary, &strings(&["rock"]), "  "),
            vec!["ballad", "jpop"]
        );
    }

    #[test]
    fn suggestions_ignore_case() {
        let vocabulary = strings(&["Rock", "J-Rock"]);

        assert_eq!(suggestions(&vocabulary, &[], "ROCK"), vec!["Rock", "J-Rock"]);
    }

    #[test]
    fn suggestions_do_not_fold_accents() {
        let vocabulary = strings(&["café", "\u{FB01}re", "cafeteria"]);

        assert_eq!(suggestions(&vocabulary, &[], "cafe"), vec!["cafeteria"]);
        assert_eq!(suggestions(&vocabulary, &[], "fi"), Vec::<&str>::new());
    }

    #[test]
    fn suggestions_are_capped() {
        let vocabulary: Vec<String> = (0..25).map(|i| format!("tag{:02}", i)).collect();

        let shown = suggestions(&vocabulary, &[], "tag");
        assert_eq!(shown.len(), MAX_SUGGESTIONS);
        assert_eq!(shown[0], "tag00");
    }

    #[test]
    fn adding_selected_or_empty_tag_is_refused() {
        let mut input = TagInput::new();
        input.set_tags(strings(&["rock"]), strings(&["rock"]));

        assert!(!input.can_add("rock"));
        assert!(!input.request_add("rock"));
        assert!(!input.request_add("   "));
        assert_eq!(input.pending, None);
        assert_eq!(input.selected, strings(&["rock"]));
    }

    #[test]
    fn nothing_changes_before_confirmation() {
        let mut input = TagInput::new();
        input.set_tags(vec![], strings(&["rock"]));

        assert!(input.request_add(" live "));
        assert_eq!(input.selected, strings(&["rock"]));

        input.cancel();
        assert_eq!(input.selected, strings(&["rock"]));
        assert_eq!(input.confirm(), None);

        input.request_add("live");
        assert_eq!(input.confirm(), Some(strings(&["rock", "live"])));

        input.request_remove("rock");
        assert_eq!(input.confirm(), Some(strings(&["live"])));
    }

    #[test]
    fn refresh_follows_song_and_keeps_valid_edit() {
        let mut input = TagInput::new();
        input.set_tags(strings(&["rock"]), strings(&["rock"]));
        input.input = Input::new("li".to_string());
        input.request_add("live");

        input.refresh(strings(&["stone"]), strings(&["stone"]));

        assert_eq!(input.selected, strings(&["stone"]));
        assert_eq!(input.pending, Some(PendingChange::Add("live".to_string())));
        assert_eq!(input.input.value(), "li");
        assert_eq!(input.confirm(), Some(strings(&["stone", "live"])));
    }

    #[test]
    fn refresh_drops_pending_change_that_no_longer_applies() {
        let mut input = TagInput::new();
        input.set_tags(vec![], strings(&["rock"]));
        input.request_remove("rock");

        input.refresh(vec![], vec![]);

        assert_eq!(input.pending, None);
        assert!(input.selected.is_empty());
    }

    #[test]
    fn removal_targets_focused_tag_or_last() {
        let mut input = TagInput::new();
        input.set_tags(vec![], strings(&["a", "b", "c"]));
        assert_eq!(input.removal_target().as_deref(), Some("c"));

        input.move_tag_cursor(true);
        assert_eq!(input.removal_target().as_deref(), Some("a"));

        input.move_tag_cursor(false);
        assert_eq!(input.tag_cursor(), Some(0));
    }
}
