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

//! Interactive UI components.
//!
//! Each component owns its own view state and is split into the component
//! itself, its keyboard handling (`event`) and its drawing (`render`).
//!
//! Components never talk to the rest of the application directly, event
//! processing returns an optional action that the caller maps to an
//! application event.

mod nav;
mod register;
mod status;
mod tag_detail;
mod tag_input;
mod tag_list;

pub(crate) use register::{RegisterAction, RegisterFocus, RegisterView};
pub(crate) use status::{MessageKind, StatusAction, StatusBar};
pub(crate) use tag_detail::{TagDetailAction, TagDetailView};
pub(crate) use tag_input::{PendingChange, TagInput, TagInputAction};
pub(crate) use tag_list::{TagListAction, TagListView};
