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

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
};

use crate::{
    components::{PendingChange, TagInput},
    render::draw_confirm,
    theme::Theme,
};

const PROMPT: &str = "+ ";

impl TagInput {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let block = Block::default()
            .title(if self.disabled { " Tags (saving) " } else { " Tags " })
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if focused && !self.disabled {
                theme.accent_colour
            } else {
                theme.border_colour
            }))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        f.render_widget(Paragraph::new(self.tag_line(theme)), chunks[0]);
        self.draw_text(f, chunks[1], focused, theme);

        if focused {
            self.draw_suggestions(f, chunks[2], theme);
        }

        if let Some(pending) = &self.pending {
            let question = match pending {
                PendingChange::Add(name) => format!("Add tag \"{}\"?", name),
                PendingChange::Remove(name) => format!("Remove tag \"{}\"?", name),
            };
            draw_confirm(f, area, &question, theme);
        }
    }

    fn tag_line(&self, theme: &Theme) -> Line<'_> {
        if self.selected.is_empty() {
            return Line::styled("no tags", Style::default().fg(theme.dim_colour));
        }

        let mut spans = Vec::with_capacity(self.selected.len() * 2);
        for (i, tag) in self.selected.iter().enumerate() {
            let mut style = Style::default().fg(theme.chip_fg).bg(theme.chip_bg);
            if self.tag_cursor() == Some(i) {
                style = style.bg(theme.accent_colour).add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(format!(" {} ", tag), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn draw_text(&self, f: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let value = self.input.value();
        let mut spans = vec![
            Span::styled(PROMPT, Style::default().fg(theme.accent_colour)),
            Span::raw(value),
        ];

        // Shown when Enter would do nothing
        if !value.trim().is_empty() && !self.can_add(value) {
            spans.push(Span::styled("  already added", Style::default().fg(theme.dim_colour)));
        }

        let style = if self.disabled {
            Style::default().fg(theme.dim_colour)
        } else {
            Style::default()
        };
        f.render_widget(Paragraph::new(Line::from(spans)).style(style), area);

        if focused && !self.disabled && self.pending.is_none() {
            let cursor_x = area.x + PROMPT.len() as u16 + self.input.visual_cursor() as u16;
            f.set_cursor_position((cursor_x, area.y));
        }
    }

    fn draw_suggestions(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let items: Vec<ListItem> = self
            .suggestions()
            .into_iter()
            .map(|s| ListItem::new(s).style(Style::default().fg(theme.table_tag_fg)))
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg));

        let mut state = ListState::default().with_selected(self.highlighted());
        f.render_stateful_widget(list, area, &mut state);
    }
}
