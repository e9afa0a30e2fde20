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

//! Render the tab bar.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Tabs},
};

use crate::{App, Screen, util::format::format_count};

const TAB_TITLES: [&str; 2] = ["1 Tags", "2 Register"];

pub(crate) fn draw_header(f: &mut Frame, area: Rect, app: &App, screen: &Screen) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(32)])
        .split(inner);

    let selected = match screen {
        Screen::TagList | Screen::TagDetail(_) => 0,
        Screen::Register => 1,
    };

    let tabs = Tabs::new(TAB_TITLES)
        .select(selected)
        .style(Style::default().fg(app.theme.dim_colour))
        .highlight_style(
            Style::default()
                .fg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");
    f.render_widget(tabs, chunks[0]);

    let summary = Line::from(vec![Span::styled(
        format!(
            "{} | {}",
            format_count(app.library.songs().len(), "song"),
            format_count(app.library.tags().len(), "tag")
        ),
        Style::default().fg(app.theme.dim_colour),
    )])
    .right_aligned();
    f.render_widget(Paragraph::new(summary), chunks[1]);
}
