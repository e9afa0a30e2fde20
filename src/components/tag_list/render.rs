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

//! UI rendering logic for the tag list.
//!
//! The header shows the search box together with the current sort mode. The
//! body is either a compact list of names or a table that adds the song count
//! and the most recent update of each tag.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    components::TagListView,
    theme::Theme,
    util::format::{format_count, format_timestamp},
};

impl TagListView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        self.draw_header(f, chunks[0], theme);

        if self.visible().is_empty() {
            let text = if self.search.value().is_empty() {
                "No tags yet"
            } else {
                "No tags match the search"
            };
            f.render_widget(
                Paragraph::new(text)
                    .style(Style::default().fg(theme.dim_colour))
                    .alignment(Alignment::Center),
                chunks[1],
            );
            return;
        }

        if self.compact {
            self.draw_compact(f, chunks[1], theme);
        } else {
            self.draw_table(f, chunks[1], theme);
        }
    }

    fn draw_header(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let search_style = if self.searching {
            Style::default().fg(theme.accent_colour)
        } else {
            Style::default().fg(theme.dim_colour)
        };

        let line = Line::from(vec![
            Span::styled("/ ", search_style),
            Span::raw(self.search.value()),
            Span::styled(
                format!(
                    "  {} | sort: {}",
                    format_count(self.visible().len(), "tag"),
                    self.sort.label()
                ),
                Style::default().fg(theme.dim_colour),
            ),
        ]);

        let inner = block.inner(area);
        f.render_widget(Paragraph::new(line).block(block), area);

        if self.searching {
            let cursor_x = inner.x + 2 + self.search.visual_cursor() as u16;
            f.set_cursor_position((cursor_x, inner.y));
        }
    }

    fn draw_compact(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.visible.iter().map(|tag| {
            Row::new(vec![Cell::from(
                Line::from(tag.name.as_str()).style(Style::default().fg(theme.table_tag_fg)),
            )])
        });

        let table = Table::new(rows, [Constraint::Percentage(100)])
            .row_highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg));

        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn draw_table(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.visible.iter().map(|tag| {
            Row::new(vec![
                Cell::from(Line::from(tag.name.as_str()).style(Style::default().fg(theme.table_tag_fg))),
                Cell::from(
                    Line::from(tag.song_count.to_string())
                        .style(Style::default().fg(theme.table_count_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(""),
                Cell::from(
                    Line::from(format_timestamp(tag.last_updated)).style(Style::default().fg(theme.table_time_fg)),
                ),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(60),
                Constraint::Length(6),
                Constraint::Length(2),
                Constraint::Length(16),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from("Tag"),
                Cell::from(Line::from("Songs").alignment(Alignment::Right)),
                Cell::from(""),
                Cell::from("Updated"),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg))
        .block(Block::default().padding(Padding::horizontal(1)));

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}
