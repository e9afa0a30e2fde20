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

//! UI rendering logic for the registration tab.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    components::{RegisterFocus, RegisterView},
    model::Song,
    theme::Theme,
    util::format::{format_count, format_timestamp},
};

impl RegisterView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, songs: &[Song], theme: &Theme) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(columns[0]);

        self.draw_header(f, left[0], theme);
        self.draw_songs(f, left[1], songs, theme);

        match self.song().and_then(|id| songs.iter().find(|s| s.id == id)) {
            Some(song) => {
                let panel = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(2), Constraint::Min(0)])
                    .split(columns[1]);

                let title = Line::from(vec![
                    Span::styled(song.title.as_str(), Style::default().bold().fg(theme.table_title_fg)),
                    Span::styled(
                        format!("  {}", song.artist_line()),
                        Style::default().fg(theme.table_artist_fg),
                    ),
                ]);
                f.render_widget(
                    Paragraph::new(title).block(Block::default().padding(Padding::horizontal(1))),
                    panel[0],
                );

                let focused = self.focus == RegisterFocus::Tags;
                self.tag_input.draw(f, panel[1], focused, theme);
            }
            None => {
                f.render_widget(
                    Paragraph::new("Select a song with Enter to edit its tags")
                        .style(Style::default().fg(theme.dim_colour))
                        .alignment(Alignment::Center)
                        .block(Block::default().borders(Borders::LEFT).border_style(Style::default().fg(theme.border_colour))),
                    columns[1],
                );
            }
        }
    }

    fn draw_header(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let searching = self.focus == RegisterFocus::Search;
        let search_style = if searching {
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
                    format_count(self.visible().len(), "song"),
                    self.sort.label()
                ),
                Style::default().fg(theme.dim_colour),
            ),
        ]);

        let inner = block.inner(area);
        f.render_widget(Paragraph::new(line).block(block), area);

        if searching {
            let cursor_x = inner.x + 2 + self.search.visual_cursor() as u16;
            f.set_cursor_position((cursor_x, inner.y));
        }
    }

    fn draw_songs(&mut self, f: &mut Frame, area: Rect, songs: &[Song], theme: &Theme) {
        let visible: Vec<&Song> = self
            .visible
            .iter()
            .filter_map(|id| songs.iter().find(|s| s.id == *id))
            .collect();

        let highlight = Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg);
        let title_style = Style::default().fg(theme.table_title_fg);

        let table = if self.compact {
            let rows = visible
                .iter()
                .map(|song| Row::new(vec![Cell::from(Line::from(song.title.as_str()).style(title_style))]));
            Table::new(rows, [Constraint::Percentage(100)])
        } else {
            let rows = visible.iter().map(|song| {
                Row::new(vec![
                    Cell::from(Line::from(song.title.as_str()).style(title_style)),
                    Cell::from(Line::from(song.artist_line()).style(Style::default().fg(theme.table_artist_fg))),
                    Cell::from(Line::from(song.tags.join(", ")).style(Style::default().fg(theme.table_tag_fg))),
                    Cell::from(
                        Line::from(format_timestamp(Some(song.updated_at)))
                            .style(Style::default().fg(theme.table_time_fg)),
                    ),
                ])
            });
            Table::new(
                rows,
                [
                    Constraint::Percentage(35),
                    Constraint::Percentage(25),
                    Constraint::Percentage(25),
                    Constraint::Length(16),
                ],
            )
            .header(
                Row::new(vec![
                    Cell::from("Title"),
                    Cell::from("Artist"),
                    Cell::from("Tags"),
                    Cell::from("Updated"),
                ])
                .style(Style::default().bold().fg(theme.accent_colour))
                .bottom_margin(1),
            )
        };

        let table = table
            .row_highlight_style(highlight)
            .block(Block::default().padding(Padding::horizontal(1)));

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}
