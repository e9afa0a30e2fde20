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

//! UI rendering logic for the tag detail view.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    components::{TagDetailAction, TagDetailView},
    model::{Song, Tag},
    render::draw_confirm,
    theme::Theme,
    util::format::{format_count, format_timestamp},
};

const RENAME_PROMPT: &str = "Rename to: ";

impl TagDetailView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        name: &str,
        tag: Option<&Tag>,
        songs: &[&Song],
        theme: &Theme,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.draw_header(f, chunks[0], name, tag, theme);

        if songs.is_empty() {
            f.render_widget(
                Paragraph::new(format!("No songs are tagged \"{}\"", name))
                    .style(Style::default().fg(theme.dim_colour))
                    .alignment(Alignment::Center),
                chunks[1],
            );
        } else {
            self.draw_songs(f, chunks[1], songs, theme);
        }

        if let Some(pending) = &self.pending {
            let question = match pending {
                TagDetailAction::Rename { from, to } => format!("Rename \"{}\" to \"{}\"?", from, to),
                TagDetailAction::Delete(name) => format!("Remove \"{}\" from every song?", name),
                _ => return,
            };
            draw_confirm(f, area, &question, theme);
        }
    }

    fn draw_header(&self, f: &mut Frame, area: Rect, name: &str, tag: Option<&Tag>, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let (count, updated) = match tag {
            Some(tag) => (tag.song_count, tag.last_updated),
            None => (0, None),
        };

        let title = Line::from(vec![
            Span::styled(name, Style::default().bold().fg(theme.table_tag_fg)),
            Span::styled(
                format!(
                    "  {} | updated {}",
                    format_count(count, "song"),
                    format_timestamp(updated)
                ),
                Style::default().fg(theme.dim_colour),
            ),
        ]);
        f.render_widget(Paragraph::new(title), rows[0]);

        match &self.rename {
            Some(input) => {
                let line = Line::from(vec![
                    Span::styled(RENAME_PROMPT, Style::default().fg(theme.accent_colour)),
                    Span::raw(input.value()),
                ]);
                f.render_widget(Paragraph::new(line), rows[1]);

                if self.pending.is_none() {
                    let cursor_x = rows[1].x + RENAME_PROMPT.len() as u16 + input.visual_cursor() as u16;
                    f.set_cursor_position((cursor_x, rows[1].y));
                }
            }
            None => {
                f.render_widget(
                    Paragraph::new("r rename  d delete  Enter edit song  Esc back")
                        .style(Style::default().fg(theme.dim_colour)),
                    rows[1],
                );
            }
        }
    }

    fn draw_songs(&mut self, f: &mut Frame, area: Rect, songs: &[&Song], theme: &Theme) {
        let rows = songs.iter().map(|song| {
            Row::new(vec![
                Cell::from(Line::from(song.title.as_str()).style(Style::default().fg(theme.table_title_fg))),
                Cell::from(Line::from(song.artist_line()).style(Style::default().fg(theme.table_artist_fg))),
                Cell::from(Line::from(song.tags.join(", ")).style(Style::default().fg(theme.table_tag_fg))),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(40),
                Constraint::Percentage(30),
                Constraint::Percentage(30),
            ],
        )
        .header(
            Row::new(vec![Cell::from("Title"), Cell::from("Artist"), Cell::from("Tags")])
                .style(Style::default().bold().fg(theme.accent_colour))
                .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg))
        .block(Block::default().padding(Padding::horizontal(1)));

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}
