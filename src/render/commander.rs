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

//! Render the command line.
//!
//! The line stays empty until `:` is pressed, then shows the command being
//! typed and the cursor.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
};

use crate::App;

const PROMPT: &str = ":";

pub(crate) fn draw_commander(f: &mut Frame, area: Rect, app: &App) {
    let commander = &app.commander;

    let block = Block::default()
        .style(Style::default().bg(app.theme.panel_colour))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);

    let line = if commander.active() {
        Line::from(vec![
            Span::styled(PROMPT, Style::default().fg(app.theme.accent_colour)),
            Span::styled(commander.input.value(), Style::default().fg(app.theme.commander_colour)),
        ])
    } else {
        Line::default()
    };

    f.render_widget(Paragraph::new(line).block(block), area);

    if commander.active() {
        let cursor_x = inner.x + PROMPT.len() as u16 + commander.input.visual_cursor() as u16;
        f.set_cursor_position((cursor_x, inner.y));
    }
}
