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
use tracing::{error, info, warn};

use crate::{
    App,
    components::MessageKind,
    model::Song,
    route::{Tab, ViewState},
    tasks::AppTask,
    util::format::format_count,
};

const OFFLINE_MESSAGE: &str = "Library is offline, changes cannot be saved";

pub(super) fn handle_navigate(app: &mut App, state: ViewState) {
    app.navigator.navigate(state);
    sync_views(app);
}

pub(super) fn handle_set_tab(app: &mut App, tab: Tab) {
    let mut next = app.navigator.current().clone();
    next.tab = tab;
    handle_navigate(app, next);
}

pub(super) fn handle_open_tag(app: &mut App, name: String) {
    let mut next = app.navigator.current().clone();
    next.tab = Tab::List;
    next.list.tag = Some(name);
    handle_navigate(app, next);
}

pub(super) fn handle_open_song(app: &mut App, song_id: u64) {
    let mut next = app.navigator.current().clone();
    next.tab = Tab::Register;
    next.register.song = Some(song_id);
    handle_navigate(app, next);
}

pub(super) fn handle_back(app: &mut App) {
    if app.navigator.back() {
        sync_views(app);
    }
}

/// Mirrors search text, sort order and display mode of the views into the
/// current view state.
pub(super) fn handle_view_changed(app: &mut App) {
    app.navigator.replace(|state| {
        app.tag_list_view.write_params(&mut state.list);
        app.register_view.write_params(&mut state.register);
    });
}

pub(super) fn handle_reload_library(app: &mut App) -> Result<()> {
    app.library.set_loading();
    app.task_tx.send(AppTask::LoadLibrary)?;

    Ok(())
}

pub(super) fn handle_scan_library(app: &mut App) -> Result<()> {
    if app.library.is_offline() {
        app.status.show_message(OFFLINE_MESSAGE, MessageKind::Error);
        return Ok(());
    }

    if app.config.media_dirs.is_empty() {
        app.status
            .show_message("No media directories are configured", MessageKind::Error);
        return Ok(());
    }

    app.task_tx.send(AppTask::ScanLibrary)?;
    app.status.show_message("Scanning media directories", MessageKind::Info);

    Ok(())
}

pub(super) fn handle_library_loaded(app: &mut App, songs: Vec<Song>, offline: bool) {
    info!(songs = songs.len(), offline, "Library loaded");

    app.library.set_songs(songs, offline);
    app.status.clear_banner();
    if offline {
        app.status
            .show_message("Library is unavailable, showing cached songs", MessageKind::Error);
    }

    sync_views(app);
}

pub(super) fn handle_library_load_failed(app: &mut App, message: String, offline: bool) {
    error!(offline, "Library load failed: {}", message);

    app.library.set_failed(message.clone(), offline);
    app.status.show_banner(message, offline);

    sync_views(app);
}

pub(super) fn handle_scan_finished(app: &mut App, count: usize) {
    app.status
        .show_message(format!("Scan finished, {} found", format_count(count, "song")), MessageKind::Info);
}

pub(super) fn handle_rename_tag(app: &mut App, from: String, to: String) -> Result<()> {
    let to = to.trim().to_string();
    if to.is_empty() || to == from {
        return Ok(());
    }

    if app.library.is_offline() {
        app.status.show_message(OFFLINE_MESSAGE, MessageKind::Error);
        return Ok(());
    }

    let changed = app.library.rename_tag(&from, &to);
    if changed.is_empty() {
        app.status
            .show_message(format!("No songs are tagged \"{}\"", from), MessageKind::Error);
        return Ok(());
    }

    info!(%from, %to, songs = changed.len(), "Renamed tag");

    app.navigator.replace(|state| {
        if state.list.tag.as_deref() == Some(from.as_str()) {
            state.list.tag = Some(to.clone());
        }
    });

    app.status.show_message(
        format!("Renamed \"{}\" to \"{}\" on {}", from, to, format_count(changed.len(), "song")),
        MessageKind::Info,
    );

    app.task_tx.send(AppTask::RenameTag {
        old: from,
        new: to,
        songs: app.library.songs().to_vec(),
    })?;

    sync_views(app);

    Ok(())
}

pub(super) fn handle_delete_tag(app: &mut App, name: String) -> Result<()> {
    if app.library.is_offline() {
        app.status.show_message(OFFLINE_MESSAGE, MessageKind::Error);
        return Ok(());
    }

    let changed = app.library.delete_tag(&name);
    if changed.is_empty() {
        app.status
            .show_message(format!("No songs are tagged \"{}\"", name), MessageKind::Error);
        return Ok(());
    }

    info!(%name, songs = changed.len(), "Deleted tag");

    app.navigator.replace(|state| {
        if state.list.tag.as_deref() == Some(name.as_str()) {
            state.list.tag = None;
        }
    });

    app.status.show_message(
        format!("Removed \"{}\" from {}", name, format_count(changed.len(), "song")),
        MessageKind::Info,
    );

    app.task_tx.send(AppTask::DeleteTag {
        name,
        songs: app.library.songs().to_vec(),
    })?;

    sync_views(app);

    Ok(())
}

pub(super) fn handle_update_song_tags(app: &mut App, song_id: u64, tags: Vec<String>) -> Result<()> {
    // Early returns resync the tag input, which already shows the change
    if app.library.is_offline() {
        app.status.show_message(OFFLINE_MESSAGE, MessageKind::Error);
        sync_views(app);
        return Ok(());
    }

    if !app.library.set_song_tags(song_id, tags) {
        warn!(song_id, "Tags changed for a song that is no longer in the library");
        sync_views(app);
        return Ok(());
    }

    let Some(tags) = app.library.song(song_id).map(|s| s.tags.clone()) else {
        return Ok(());
    };

    app.saving = true;
    app.task_tx.send(AppTask::UpdateSongTags {
        song_id,
        tags,
        songs: app.library.songs().to_vec(),
    })?;

    sync_views(app);

    Ok(())
}

pub(super) fn handle_song_tags_saved(app: &mut App, song_id: u64) {
    info!(song_id, "Song tags saved");

    app.saving = false;
    app.status.show_message("Tags saved", MessageKind::Info);
    sync_views(app);
}

pub(super) fn handle_song_tags_save_failed(app: &mut App, message: String) {
    app.saving = false;
    app.status
        .show_message(format!("Failed to save tags: {}", message), MessageKind::Error);
    sync_views(app);
}

pub(super) fn handle_error(app: &mut App, message: String) {
    app.status.show_message(message, MessageKind::Error);
}

pub(super) fn handle_tick(app: &mut App) {
    app.status.tick();
}

/// Rebuilds the views from the current view state and library.
pub(super) fn sync_views(app: &mut App) {
    let state = app.navigator.current().clone();

    app.tag_list_view.apply_params(&state.list, app.library.tags());
    if let Some(tag) = &state.list.tag {
        app.tag_detail_view.show(tag);
    }

    app.register_view
        .apply_params(&state.register, app.library.songs(), app.library.vocabulary());
    app.register_view.tag_input.disabled = app.saving || app.library.is_offline();
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use super::*;
    use crate::{
        Screen,
        config::AppConfig,
        model::{fixtures::song, library::LoadStatus},
    };

    fn app() -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        let mut app = App::new(AppConfig::default(), ViewState::default(), task_tx);
        handle_library_loaded(
            &mut app,
            vec![
                song(1, "One", &["A"], &["rock", "live"]),
                song(2, "Two", &["B"], &["rock"]),
            ],
            false,
        );
        (app, task_rx)
    }

    #[test]
    fn rename_is_optimistic_and_persisted() {
        let (mut app, task_rx) = app();
        handle_open_tag(&mut app, "rock".to_string());

        handle_rename_tag(&mut app, "rock".to_string(), "stone".to_string()).unwrap();

        assert_eq!(app.library.vocabulary(), vec!["live", "stone"]);
        assert_eq!(app.navigator.current().list.tag.as_deref(), Some("stone"));
        assert_eq!(app.screen(), Screen::TagDetail("stone".to_string()));

        match task_rx.try_recv().unwrap() {
            AppTask::RenameTag { old, new, songs } => {
                assert_eq!((old.as_str(), new.as_str()), ("rock", "stone"));
                assert!(songs.iter().all(|s| !s.has_tag("rock")));
            }
            other => panic!("unexpected task {:?}", other),
        }
    }

    #[test]
    fn delete_leaves_detail_view() {
        let (mut app, task_rx) = app();
        handle_open_tag(&mut app, "live".to_string());

        handle_delete_tag(&mut app, "live".to_string()).unwrap();

        assert_eq!(app.library.vocabulary(), vec!["rock"]);
        assert_eq!(app.screen(), Screen::TagList);
        assert!(matches!(task_rx.try_recv().unwrap(), AppTask::DeleteTag { .. }));
    }

    #[test]
    fn unknown_tag_sends_nothing() {
        let (mut app, task_rx) = app();

        handle_delete_tag(&mut app, "jazz".to_string()).unwrap();

        assert!(task_rx.try_recv().is_err());
        assert!(app.status.message.is_some());
    }

    #[test]
    fn song_update_sets_saving_until_acknowledged() {
        let (mut app, task_rx) = app();
        handle_open_song(&mut app, 2);

        handle_update_song_tags(&mut app, 2, vec!["rock".to_string(), "demo".to_string()]).unwrap();

        assert!(app.saving);
        assert!(app.register_view.tag_input.disabled);
        assert!(app.library.song(2).is_some_and(|s| s.has_tag("demo")));
        assert!(matches!(
            task_rx.try_recv().unwrap(),
            AppTask::UpdateSongTags { song_id: 2, .. }
        ));

        handle_song_tags_saved(&mut app, 2);
        assert!(!app.saving);
        assert!(!app.register_view.tag_input.disabled);
    }

    #[test]
    fn song_update_persists_deduplicated_tags() {
        let (mut app, task_rx) = app();

        handle_update_song_tags(
            &mut app,
            2,
            vec!["demo".to_string(), "demo".to_string(), "rock".to_string()],
        )
        .unwrap();

        match task_rx.try_recv().unwrap() {
            AppTask::UpdateSongTags { tags, songs, .. } => {
                let stored = songs.iter().find(|s| s.id == 2).map(|s| s.tags.clone());
                assert_eq!(tags, vec!["demo", "rock"]);
                assert_eq!(Some(tags), stored);
            }
            other => panic!("unexpected task {:?}", other),
        }
    }

    #[test]
    fn refused_song_update_restores_tag_input() {
        let (mut app, task_rx) = app();
        handle_open_song(&mut app, 2);
        let songs = app.library.songs().to_vec();
        handle_library_loaded(&mut app, songs.clone(), true);
        app.register_view.tag_input.selected = vec![];

        handle_update_song_tags(&mut app, 2, vec![]).unwrap();

        assert_eq!(app.register_view.tag_input.selected, vec!["rock"]);
        assert!(task_rx.try_recv().is_err());

        handle_library_loaded(&mut app, songs, false);
        app.register_view.tag_input.selected = vec![];

        handle_update_song_tags(&mut app, 99, vec![]).unwrap();

        assert_eq!(app.register_view.tag_input.selected, vec!["rock"]);
        assert!(task_rx.try_recv().is_err());
    }

    #[test]
    fn renamed_tag_is_not_restored_by_later_edit() {
        let (mut app, task_rx) = app();
        handle_open_song(&mut app, 2);
        handle_set_tab(&mut app, Tab::List);
        handle_rename_tag(&mut app, "rock".to_string(), "stone".to_string()).unwrap();
        let _ = task_rx.try_recv();
        handle_set_tab(&mut app, Tab::Register);

        assert_eq!(app.register_view.tag_input.selected, vec!["stone"]);

        let input = &mut app.register_view.tag_input;
        assert!(input.request_add("demo"));
        let tags = input.confirm().unwrap();
        handle_update_song_tags(&mut app, 2, tags).unwrap();

        match task_rx.try_recv().unwrap() {
            AppTask::UpdateSongTags { tags, .. } => assert_eq!(tags, vec!["stone", "demo"]),
            other => panic!("unexpected task {:?}", other),
        }
        assert!(!app.library.vocabulary().contains(&"rock".to_string()));
    }

    #[test]
    fn failed_song_update_keeps_local_state() {
        let (mut app, _task_rx) = app();
        handle_update_song_tags(&mut app, 1, vec![]).unwrap();

        handle_song_tags_save_failed(&mut app, "locked".to_string());

        assert!(!app.saving);
        assert!(app.library.song(1).is_some_and(|s| s.tags.is_empty()));
        assert_eq!(
            app.status.message.as_ref().map(|m| m.kind),
            Some(MessageKind::Error)
        );
    }

    #[test]
    fn offline_library_is_read_only() {
        let (mut app, task_rx) = app();
        handle_library_loaded(&mut app, vec![song(1, "One", &[], &["rock"])], true);

        handle_rename_tag(&mut app, "rock".to_string(), "stone".to_string()).unwrap();

        assert_eq!(app.library.vocabulary(), vec!["rock"]);
        assert!(task_rx.try_recv().is_err());
        assert!(app.register_view.tag_input.disabled);
    }

    #[test]
    fn load_failure_shows_banner() {
        let (mut app, _task_rx) = app();

        handle_library_load_failed(&mut app, "disk I/O error".to_string(), false);

        assert_eq!(app.library.status, LoadStatus::Failed("disk I/O error".to_string()));
        assert_eq!(app.status.banner.as_ref().map(|b| b.can_retry), Some(true));
        assert_eq!(app.library.songs().len(), 2);
    }

    #[test]
    fn navigation_history() {
        let (mut app, _task_rx) = app();

        handle_open_tag(&mut app, "rock".to_string());
        handle_set_tab(&mut app, Tab::Register);
        assert_eq!(app.screen(), Screen::Register);

        handle_back(&mut app);
        assert_eq!(app.screen(), Screen::TagDetail("rock".to_string()));

        handle_back(&mut app);
        assert_eq!(app.screen(), Screen::TagList);
    }

    #[test]
    fn view_changes_replace_current_state() {
        let (mut app, _task_rx) = app();
        app.tag_list_view.compact = true;

        handle_view_changed(&mut app);
        assert!(app.navigator.current().list.compact);

        // Nothing to go back to
        handle_back(&mut app);
        assert!(app.navigator.current().list.compact);
    }
}
