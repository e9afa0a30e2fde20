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

//! Status line.
//!
//! Holds two kinds of feedback: a load-failure banner that stays until it is
//! dismissed, and short-lived messages that disappear after a number of
//! ticks.

mod event;
mod render;

/// Ticks a transient message stays visible, 4 seconds at the tick rate.
pub(crate) const MESSAGE_TICKS: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum MessageKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Message {
    pub(crate) text: String,
    pub(crate) kind: MessageKind,
    ticks_left: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Banner {
    pub(crate) text: String,
    pub(crate) can_retry: bool,
}

#[derive(Debug, PartialEq)]
pub(crate) enum StatusAction {
    Dismiss,
    Retry,
}

pub(crate) struct StatusBar {
    pub(crate) banner: Option<Banner>,
    pub(crate) message: Option<Message>,
}

impl StatusBar {
    pub(crate) fn new() -> Self {
        Self {
            banner: None,
            message: None,
        }
    }

    pub(crate) fn show_message(&mut self, text: impl Into<String>, kind: MessageKind) {
        self.message = Some(Message {
            text: text.into(),
            kind,
            ticks_left: MESSAGE_TICKS,
        });
    }

    /// Shows a load failure. Retrying is not offered while offline.
    pub(crate) fn show_banner(&mut self, text: impl Into<String>, offline: bool) {
        self.banner = Some(Banner {
            text: text.into(),
            can_retry: !offline,
        });
    }

    pub(crate) fn clear_banner(&mut self) {
        self.banner = None;
    }

    pub(crate) fn tick(&mut self) {
        if let Some(message) = self.message.as_mut() {
            message.ticks_left = message.ticks_left.saturating_sub(1);
            if message.ticks_left == 0 {
                self.message = None;
            }
        }
    }
}
