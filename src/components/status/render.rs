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
    widgets::Paragraph,
};

use crate::{
    components::{MessageKind, StatusBar},
    model::library::LoadStatus,
    theme::Theme,
};

impl StatusBar {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, status: &LoadStatus, saving: bool, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(20)])
            .horizontal_margin(1)
            .split(area);

        f.render_widget(Paragraph::new(self.feedback_line(theme)), chunks[0]);

        let indicator = match status {
            LoadStatus::Offline => Span::styled(
                "OFFLINE",
                Style::default().fg(theme.offline_colour).add_modifier(Modifier::BOLD),
            ),
            LoadStatus::Loading => Span::styled("loading", Style::default().fg(theme.dim_colour)),
            _ if saving => Span::styled("saving", Style::default().fg(theme.dim_colour)),
            _ => Span::raw(""),
        };
        f.render_widget(Paragraph::new(Line::from(indicator).right_aligned()), chunks[1]);
    }

    fn feedback_line(&self, theme: &Theme) -> Line<'_> {
        if let Some(banner) = &self.banner {
            let hint = if banner.can_retry {
                "  [R] retry  [x] dismiss"
            } else {
                "  [x] dismiss"
            };
            return Line::from(vec![
                Span::styled(banner.text.as_str(), Style::default().fg(theme.error_colour)),
                Span::styled(hint, Style::default().fg(theme.dim_colour)),
            ]);
        }

        match &self.message {
            Some(message) => {
                let colour = match message.kind {
                    MessageKind::Info => theme.accent_colour,
                    MessageKind::Error => theme.error_colour,
                };
                Line::styled(message.text.as_str(), Style::default().fg(colour))
            }
            None => Line::default(),
        }
    }
}
