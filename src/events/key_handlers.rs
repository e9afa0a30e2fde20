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

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};

use crate::{
    App, Screen,
    components::{RegisterAction, StatusAction, TagDetailAction, TagListAction},
    events::AppEvent,
    route::Tab,
};

/// Routes a key press to the command line, the status banner, the global
/// shortcuts or the active view, in that order.
///
/// While a view is capturing text (a search box, the tag input, a rename or
/// a confirmation prompt) only the command line, if already open, and the
/// view itself see the key.
///
/// # Errors
///
/// Returns an error if an application event cannot be sent.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);
    let screen = app.screen();
    let capturing = is_capturing(app, &screen);

    if (app.commander.active() || !capturing) && app.commander.handle_event(&event, &app.event_tx)? {
        return Ok(());
    }

    if !capturing {
        if let Some(action) = app.status.process_event(&event) {
            if action == StatusAction::Retry {
                app.event_tx.send(AppEvent::ReloadLibrary)?;
            }
            return Ok(());
        }

        if process_global_key_event(app, key)? {
            return Ok(());
        }
    }

    match screen {
        Screen::TagList => {
            if let Some(action) = app.tag_list_view.process_event(&event, app.library.tags()) {
                let event = match action {
                    TagListAction::Select(name) => AppEvent::OpenTag(name),
                    TagListAction::StateChanged => AppEvent::ViewChanged,
                };
                app.event_tx.send(event)?;
            }
        }

        Screen::TagDetail(name) => {
            let song_ids: Vec<u64> = app.library.songs_with_tag(&name).iter().map(|s| s.id).collect();
            if let Some(action) = app.tag_detail_view.process_event(&event, &name, &song_ids) {
                let event = match action {
                    TagDetailAction::Rename { from, to } => AppEvent::RenameTag { from, to },
                    TagDetailAction::Delete(name) => AppEvent::DeleteTag(name),
                    TagDetailAction::OpenSong(song_id) => AppEvent::OpenSong(song_id),
                    TagDetailAction::Back => AppEvent::Back,
                };
                app.event_tx.send(event)?;
            }
        }

        Screen::Register => {
            if let Some(action) = app.register_view.process_event(&event, app.library.songs()) {
                let event = match action {
                    RegisterAction::StateChanged => AppEvent::ViewChanged,
                    RegisterAction::SelectSong(song_id) => AppEvent::OpenSong(song_id),
                    RegisterAction::SongTagsChanged { song_id, tags } => AppEvent::UpdateSongTags { song_id, tags },
                };
                app.event_tx.send(event)?;
            }
        }
    }

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    let event = match key.code {
        KeyCode::Char('q') => AppEvent::ExitApplication,
        KeyCode::Char('1') => AppEvent::SetTab(Tab::List),
        KeyCode::Char('2') => AppEvent::SetTab(Tab::Register),
        _ => return Ok(false),
    };
    app.event_tx.send(event)?;

    Ok(true)
}

fn is_capturing(app: &App, screen: &Screen) -> bool {
    match screen {
        Screen::TagList => app.tag_list_view.is_capturing(),
        Screen::TagDetail(_) => app.tag_detail_view.is_capturing(),
        Screen::Register => app.register_view.is_capturing(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::{config::AppConfig, events::handle_event, model::fixtures::song, route::ViewState};

    fn press(app: &mut App, code: KeyCode) {
        process_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
        // Apply the events produced by the key
        while let Ok(event) = app.event_rx.try_recv() {
            if matches!(event, AppEvent::ExitApplication) {
                continue;
            }
            handle_event(app, event).unwrap();
        }
    }

    fn app() -> App {
        let (task_tx, _task_rx) = mpsc::channel();
        let mut app = App::new(AppConfig::default(), ViewState::default(), task_tx);
        app.library.set_songs(
            vec![
                song(1, "One", &["A"], &["rock"]),
                song(2, "Two", &["B"], &["jazz"]),
            ],
            false,
        );
        handle_event(&mut app, AppEvent::Navigate(ViewState::default())).unwrap();
        app
    }

    #[test]
    fn enter_opens_tag_and_escape_returns() {
        let mut app = app();

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::TagDetail("rock".to_string()));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::TagList);
    }

    #[test]
    fn number_keys_switch_tabs() {
        let mut app = app();

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.screen(), Screen::Register);

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.screen(), Screen::TagList);
    }

    #[test]
    fn typing_in_search_is_not_a_shortcut() {
        let mut app = app();

        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('q'));

        assert_eq!(app.screen(), Screen::TagList);
        assert_eq!(app.navigator.current().list.query, "2q");
    }

    #[test]
    fn sort_key_updates_view_state() {
        let mut app = app();

        press(&mut app, KeyCode::Char('s'));

        assert_eq!(app.navigator.current().to_query(), "sort=count");
    }

    #[test]
    fn banner_keys_take_precedence() {
        let mut app = app();
        app.status.show_banner("Failed", false);

        press(&mut app, KeyCode::Char('x'));

        assert!(app.status.banner.is_none());
    }
}
