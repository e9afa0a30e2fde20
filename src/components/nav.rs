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

//! Row navigation shared by the table components.

use crossterm::event::{Event, KeyCode};
use ratatui::widgets::TableState;

/// Applies a vi-style navigation key to the table, returning `true` if the
/// key was consumed.
pub(super) fn navigate(state: &mut TableState, len: usize, event: &Event) -> bool {
    let Event::Key(key_event) = event else {
        return false;
    };

    match key_event.code {
        KeyCode::Char('j') | KeyCode::Down => goto_next(state, len),
        KeyCode::Char('k') | KeyCode::Up => goto_previous(state, len),
        KeyCode::Char('g') | KeyCode::Home => goto_first(state, len),
        KeyCode::Char('G') | KeyCode::End => goto_last(state, len),
        _ => return false,
    }

    true
}

pub(super) fn goto_next(state: &mut TableState, len: usize) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(i) if i + 1 < len => i + 1,
        _ => 0,
    };
    state.select(Some(i));
}

pub(super) fn goto_previous(state: &mut TableState, len: usize) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(0) | None => len - 1,
        Some(i) => i - 1,
    };
    state.select(Some(i));
}

fn goto_first(state: &mut TableState, len: usize) {
    if len > 0 {
        state.select(Some(0));
    }
}

fn goto_last(state: &mut TableState, len: usize) {
    if len > 0 {
        state.select(Some(len - 1));
    }
}

/// Keeps the selection inside a table whose contents just changed.
pub(super) fn clamp(state: &mut TableState, len: usize) {
    match state.selected() {
        _ if len == 0 => state.select(None),
        Some(i) if i >= len => state.select(Some(len - 1)),
        None => state.select(Some(0)),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::{ch, key};

    #[test]
    fn wraps_around() {
        let mut state = TableState::default();
        clamp(&mut state, 3);
        assert_eq!(state.selected(), Some(0));

        assert!(navigate(&mut state, 3, &ch('k')));
        assert_eq!(state.selected(), Some(2));

        assert!(navigate(&mut state, 3, &key(KeyCode::Down)));
        assert_eq!(state.selected(), Some(0));

        assert!(!navigate(&mut state, 3, &ch('x')));
    }

    #[test]
    fn clamp_follows_shrinking_content() {
        let mut state = TableState::default().with_selected(Some(5));
        clamp(&mut state, 2);
        assert_eq!(state.selected(), Some(1));

        clamp(&mut state, 0);
        assert_eq!(state.selected(), None);
    }
}
