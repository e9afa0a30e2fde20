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

//! Terminal background control.
//!
//! The application paints the whole terminal window in the theme background
//! using OSC 11, and restores the user's own background with OSC 111 on exit.
//! Terminals that do not understand these sequences ignore them.

use std::io::{self, Write};

const SET_BACKGROUND: &str = "\x1b]11;";
const RESET_BACKGROUND: &str = "\x1b]111";
const TERMINATOR: &str = "\x07";

/// Sets the terminal background to a `#rrggbb` colour.
pub(crate) fn set_terminal_bg(out: &mut impl Write, hex_color: &str) -> io::Result<()> {
    write!(out, "{}{}{}", SET_BACKGROUND, hex_color, TERMINATOR)?;
    out.flush()
}

/// Reverts the terminal background to the user's configured colour.
pub(crate) fn reset_terminal_bg(out: &mut impl Write) -> io::Result<()> {
    write!(out, "{}{}", RESET_BACKGROUND, TERMINATOR)?;
    out.flush()
}
