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

//! Command-line input logic and state management.
//!
//! This module implements the logic for a command-line processing component,
//! handling a text input component, and dispatching a corresponding
//! application event when typing is finished and a command is submitted.
//!
//! # Commands
//!
//! | Command                 | Effect                                   |
//! |-------------------------|------------------------------------------|
//! | `q`                     | quit                                     |
//! | `reload`                | reload the library                       |
//! | `scan`                  | rescan the media directories             |
//! | `view <query>`          | show the view described by a query string|
//! | `rename <old> <new>`    | rename a tag                             |
//! | `rename <old> -> <new>` | rename a tag whose names contain spaces  |
//! | `delete <tag>`          | remove a tag from every song             |
//! | `list`, `register`      | switch tab                               |
//! | `back`                  | go back                                  |

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tracing::debug;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    events::AppEvent,
    route::{Tab, ViewState},
};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Handles a key, returning `true` if the command line consumed it.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.active = false;
                self.input.reset();

                if !buffer.is_empty() {
                    debug!(command = %buffer, "Running command");
                    event_tx.send(parse_command(&buffer))?;
                }
            }

            // Delegate all other key events to the managed input component.
            _ => {
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }
}

/// Translates a command line into the application event it stands for.
/// Unknown or incomplete commands become an error message.
fn parse_command(buffer: &str) -> AppEvent {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    match parts.as_slice() {
        ["q"] => AppEvent::ExitApplication,

        ["reload"] => AppEvent::ReloadLibrary,
        ["scan"] => AppEvent::ScanLibrary,

        ["view", query @ ..] => AppEvent::Navigate(ViewState::from_query(&query.join(" "))),

        ["rename", args @ ..] => match split_rename(args) {
            Some((from, to)) => AppEvent::RenameTag { from, to },
            None => AppEvent::Error("Usage: rename <old> <new>".to_string()),
        },

        ["delete", name @ ..] if !name.is_empty() => AppEvent::DeleteTag(name.join(" ")),

        ["list"] => AppEvent::SetTab(Tab::List),
        ["register"] => AppEvent::SetTab(Tab::Register),
        ["back"] => AppEvent::Back,

        [cmd, ..] => AppEvent::Error(format!("Unknown command: {}", cmd)),
        [] => AppEvent::Error("Empty command".to_string()),
    }
}

fn split_rename(args: &[&str]) -> Option<(String, String)> {
    if let Some(arrow) = args.iter().position(|a| *a == "->") {
        let from = args[..arrow].join(" ");
        let to = args[arrow + 1..].join(" ");
        return (!from.is_empty() && !to.is_empty()).then_some((from, to));
    }

    match args {
        [from, to] => Some((from.to_string(), to.to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::components::testing::{ch, key, text};

    #[test]
    fn colon_activates_and_enter_submits() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut commander = Commander::new();

        assert!(!commander.handle_event(&ch('x'), &event_tx).unwrap());
        assert!(commander.handle_event(&ch(':'), &event_tx).unwrap());
        assert!(commander.active());

        for event in text("scan") {
            assert!(commander.handle_event(&event, &event_tx).unwrap());
        }
        commander.handle_event(&key(KeyCode::Enter), &event_tx).unwrap();

        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
        assert!(matches!(event_rx.try_recv().unwrap(), AppEvent::ScanLibrary));
    }

    #[test]
    fn escape_abandons_command() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.handle_event(&ch(':'), &event_tx).unwrap();
        commander.handle_event(&ch('q'), &event_tx).unwrap();
        commander.handle_event(&key(KeyCode::Esc), &event_tx).unwrap();

        assert!(!commander.active());
        assert!(event_rx.try_recv().is_err());
    }

    #[test]
    fn rename_forms() {
        assert!(matches!(
            parse_command("rename rock stone"),
            AppEvent::RenameTag { from, to } if from == "rock" && to == "stone"
        ));
        assert!(matches!(
            parse_command("rename hard rock -> heavy rock"),
            AppEvent::RenameTag { from, to } if from == "hard rock" && to == "heavy rock"
        ));
        assert!(matches!(parse_command("rename rock"), AppEvent::Error(_)));
        assert!(matches!(parse_command("rename rock ->"), AppEvent::Error(_)));
    }

    #[test]
    fn view_parses_query() {
        match parse_command("view tab=register&rq=blue") {
            AppEvent::Navigate(state) => {
                assert_eq!(state.tab, Tab::Register);
                assert_eq!(state.register.query, "blue");
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn delete_joins_words() {
        assert!(matches!(
            parse_command("delete hard rock"),
            AppEvent::DeleteTag(name) if name == "hard rock"
        ));
        assert!(matches!(parse_command("delete"), AppEvent::Error(_)));
        assert!(matches!(parse_command("frobnicate"), AppEvent::Error(_)));
    }
}
