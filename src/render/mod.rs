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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change to provide a reactive user interface.

mod commander;
mod header;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{
    App, Screen,
    render::{commander::draw_commander, header::draw_header},
    theme::Theme,
};

/// Renders the user interface to the terminal frame.
///
/// The screen is split into a tab header, the active view, the status line
/// and the command line. Which view is shown follows from the current view
/// state, see [`App::screen`].
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to update internal view state (like table scroll positions).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let screen = app.screen();

    draw_header(f, outer[0], app, &screen);

    match screen {
        Screen::TagList => app.tag_list_view.draw(f, outer[1], &app.theme),
        Screen::TagDetail(name) => {
            let songs = app.library.songs_with_tag(&name);
            let tag = app.library.tag(&name);
            app.tag_detail_view.draw(f, outer[1], &name, tag, &songs, &app.theme);
        }
        Screen::Register => app.register_view.draw(f, outer[1], app.library.songs(), &app.theme),
    }

    app.status
        .draw(f, outer[2], &app.library.status, app.saving, &app.theme);

    draw_commander(f, outer[3], app);
}

/// Draws a yes/no prompt centred over `area`.
pub(crate) fn draw_confirm(f: &mut Frame, area: Rect, question: &str, theme: &Theme) {
    let width = (question.chars().count() as u16 + 6).clamp(24, area.width.max(24));
    let popup = centered(area, width, 5);

    let block = Block::default()
        .title(" Confirm ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_colour))
        .style(Style::default().bg(theme.panel_colour))
        .padding(Padding::horizontal(1));

    let text = vec![
        Line::from(question),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y]", Style::default().fg(theme.accent_colour)),
            Span::raw(" yes  "),
            Span::styled("[n]", Style::default().fg(theme.accent_colour)),
            Span::raw(" no"),
        ]),
    ];

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        popup,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
