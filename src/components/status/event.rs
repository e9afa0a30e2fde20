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

use crossterm::event::{Event, KeyCode};

use crate::components::status::{StatusAction, StatusBar};

impl StatusBar {
    /// Handles the banner keys. Keys are only consumed while a banner is
    /// shown.
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<StatusAction> {
        let Event::Key(key_event) = event else {
            return None;
        };
        let can_retry = self.banner.as_ref()?.can_retry;

        match key_event.code {
            KeyCode::Char('x') => {
                self.banner = None;
                Some(StatusAction::Dismiss)
            }
            KeyCode::Char('R') if can_retry => {
                self.banner = None;
                Some(StatusAction::Retry)
            }
            _ => None,
        }
    }
}
