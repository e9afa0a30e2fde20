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

//! View state and navigation history.
//!
//! Everything needed to rebuild what is on screen, the active tab, the search
//! text, sort order and compact flag of each tab, and the selected tag or
//! song, lives in a [`ViewState`]. A view state serialises to a URL-style
//! query string so that it can be passed on the command line, typed into the
//! command line with `:view`, and saved on exit.
//!
//! # Parameters
//!
//! | Key        | Meaning                               |
//! |------------|---------------------------------------|
//! | `tab`      | `list` or `register`                  |
//! | `q`        | tag list search text                  |
//! | `sort`     | tag sort: `name`, `count`, `recent`   |
//! | `compact`  | tag list compact display (`1`/`0`)    |
//! | `tag`      | selected tag name                     |
//! | `rq`       | registration search text              |
//! | `rsort`    | song sort: `title`, `artist`, `recent`|
//! | `rcompact` | registration compact display          |
//! | `song`     | selected song id                      |
//!
//! Default values are left out when serialising. Parsing is lenient, unknown
//! keys and malformed values are skipped with a warning.

use std::collections::VecDeque;

use tracing::warn;

use crate::model::{SongSort, TagSort};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Tab {
    #[default]
    List,
    Register,
}

impl Tab {
    fn token(self) -> &'static str {
        match self {
            Tab::List => "list",
            Tab::Register => "register",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "list" => Some(Tab::List),
            "register" => Some(Tab::Register),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ListParams {
    pub(crate) query: String,
    pub(crate) sort: TagSort,
    pub(crate) compact: bool,
    pub(crate) tag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RegisterParams {
    pub(crate) query: String,
    pub(crate) sort: SongSort,
    pub(crate) compact: bool,
    pub(crate) song: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ViewState {
    pub(crate) tab: Tab,
    pub(crate) list: ListParams,
    pub(crate) register: RegisterParams,
}

impl ViewState {
    pub(crate) fn to_query(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();

        if self.tab != Tab::default() {
            pairs.push(("tab", self.tab.token().to_string()));
        }

        if !self.list.query.is_empty() {
            pairs.push(("q", self.list.query.clone()));
        }
        if self.list.sort != TagSort::default() {
            pairs.push(("sort", self.list.sort.token().to_string()));
        }
        if self.list.compact {
            pairs.push(("compact", "1".to_string()));
        }
        if let Some(tag) = &self.list.tag {
            pairs.push(("tag", tag.clone()));
        }

        if !self.register.query.is_empty() {
            pairs.push(("rq", self.register.query.clone()));
        }
        if self.register.sort != SongSort::default() {
            pairs.push(("rsort", self.register.sort.token().to_string()));
        }
        if self.register.compact {
            pairs.push(("rcompact", "1".to_string()));
        }
        if let Some(song) = self.register.song {
            pairs.push(("song", song.to_string()));
        }

        pairs
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(&v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub(crate) fn from_query(query: &str) -> Self {
        let mut state = ViewState::default();

        let query = query.trim().trim_start_matches('?');
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let value = match urlencoding::decode(&raw.replace('+', " ")) {
                Ok(v) => v.into_owned(),
                Err(e) => {
                    warn!(key, "Ignoring undecodable view parameter: {}", e);
                    continue;
                }
            };

            match key {
                "tab" => match Tab::from_token(&value) {
                    Some(tab) => state.tab = tab,
                    None => warn!(%value, "Unknown tab"),
                },
                "q" => state.list.query = value,
                "sort" => match TagSort::from_token(&value) {
                    Some(sort) => state.list.sort = sort,
                    None => warn!(%value, "Unknown tag sort order"),
                },
                "compact" => state.list.compact = parse_flag(&value),
                "tag" => state.list.tag = (!value.is_empty()).then_some(value),
                "rq" => state.register.query = value,
                "rsort" => match SongSort::from_token(&value) {
                    Some(sort) => state.register.sort = sort,
                    None => warn!(%value, "Unknown song sort order"),
                },
                "rcompact" => state.register.compact = parse_flag(&value),
                "song" => match value.parse::<u64>() {
                    Ok(id) => state.register.song = Some(id),
                    Err(_) => warn!(%value, "Invalid song id"),
                },
                _ => warn!(key, "Unknown view parameter"),
            }
        }

        state
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value, "1" | "true" | "yes" | "on")
}

/// Oldest entries are dropped once the history is full.
const MAX_HISTORY: usize = 100;

/// Current view state plus a bounded history stack for back navigation.
pub(crate) struct Navigator {
    current: ViewState,
    history: VecDeque<ViewState>,
}

impl Navigator {
    pub(crate) fn new(initial: ViewState) -> Self {
        Self {
            current: initial,
            history: VecDeque::new(),
        }
    }

    pub(crate) fn current(&self) -> &ViewState {
        &self.current
    }

    /// Moves to a new view state, remembering the current one.
    pub(crate) fn navigate(&mut self, next: ViewState) {
        if next != self.current {
            let previous = std::mem::replace(&mut self.current, next);
            if self.history.len() == MAX_HISTORY {
                self.history.pop_front();
            }
            self.history.push_back(previous);
        }
    }

    /// Updates the current view state without adding a history entry.
    pub(crate) fn replace(&mut self, update: impl FnOnce(&mut ViewState)) {
        update(&mut self.current);
    }

    /// Returns to the previous view state, if there is one.
    pub(crate) fn back(&mut self) -> bool {
        match self.history.pop_back() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }
}
