use crate::app::{
    action::Action, command::Command, features::store::handle_command, input::map_event_to_action,
    reducer, state::AppState, ui,
};
use crate::domain::store::CommandStore;

use anyhow::Result;
use crossterm::event::{self, Event};
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use ratatui::{backend::Backend, Terminal};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info, warn};

const TICK_RATE: Duration = Duration::from_millis(250);
const DEBOUNCE: Duration = Duration::from_millis(500);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    store: Arc<dyn CommandStore>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, store, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    store: Arc<dyn CommandStore>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    // Commands file watcher
    let (notify_tx, mut notify_rx) = mpsc::channel::<PathBuf>(16);
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if let Ok(event) = res {
            if matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                for path in event.paths {
                    let _ = notify_tx.try_send(path);
                }
            }
        }
    })?;

    let action_tx_clone = action_tx.clone();
    tokio::spawn(async move {
        let mut pending: Option<PathBuf> = None;

        loop {
            if let Some(path) = pending.take() {
                tokio::select! {
                    Some(next) = notify_rx.recv() => pending = Some(next),
                    () = tokio::time::sleep(DEBOUNCE) => {
                        let _ = action_tx_clone.send(Action::ExternalChangeDetected(path)).await;
                    }
                }
            } else if let Some(path) = notify_rx.recv().await {
                pending = Some(path);
            } else {
                break;
            }
        }
    });

    // Initial Load
    let initial = Command::Load(
        app_state.commands_path.clone(),
        app_state.missing_file_policy,
    );
    dispatch(&mut app_state, handle_command(initial, store.as_ref()), store.as_ref());
    let mut watched = None;
    rewatch(&mut watcher, &mut watched, &app_state.commands_path);

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Watcher results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            dispatch(&mut app_state, action, store.as_ref());
            if app_state.should_quit {
                break;
            }
            rewatch(&mut watcher, &mut watched, &app_state.commands_path);
        }
    }

    info!("exiting");
    Ok(())
}

/// Reduces `action`, running any resulting store command and feeding its
/// outcome back through the reducer until nothing is left to do.
pub(crate) fn dispatch(app_state: &mut AppState<'_>, action: Action, store: &dyn CommandStore) {
    let mut next = Some(action);
    while let Some(action) = next.take() {
        if let Some(command) = reducer::update(app_state, action) {
            next = Some(handle_command(command, store));
        }
    }
}

/// Directory holding the commands file; a bare file name lives in the cwd.
fn watch_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn rewatch(watcher: &mut RecommendedWatcher, watched: &mut Option<PathBuf>, path: &Path) {
    let dir = watch_dir(path);
    if watched.as_ref() == Some(&dir) {
        return;
    }
    if let Some(old) = watched.take() {
        let _ = watcher.unwatch(&old);
    }
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "not watching missing directory");
        return;
    }
    match watcher.watch(&dir, RecursiveMode::NonRecursive) {
        Ok(()) => {
            debug!(dir = %dir.display(), "watching for external changes");
            *watched = Some(dir);
        }
        Err(e) => warn!(dir = %dir.display(), error = %e, "failed to watch directory"),
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
