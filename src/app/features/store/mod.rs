pub mod handler;

pub use handler::handle_command;

use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    persistence,
    state::{AppMode, AppState, AppTextArea, ErrorSeverity, InputState},
};
use crate::domain::models::CommandList;
use crate::domain::store::MissingFilePolicy;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// File events this soon after our own save are the save echoing back.
const SELF_WRITE_GRACE: Duration = Duration::from_secs(2);

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SaveCommands => UpdateResult::Handled(Some(Command::Save(
            state.commands_path.clone(),
            state.commands.clone(),
        ))),
        Action::LoadCommands => UpdateResult::Handled(Some(Command::Load(
            state.commands_path.clone(),
            state.missing_file_policy,
        ))),
        Action::OpenFileIntent => {
            state.mode = AppMode::OpenFile;
            state.selected_recent_index = None;
            state.input = Some(InputState {
                text_area: AppTextArea::from_text(&state.commands_path.display().to_string()),
            });
            UpdateResult::Handled(None)
        }
        Action::OpenFile(text) => {
            state.mode = AppMode::Normal;
            state.input = None;
            state.selected_recent_index = None;

            let text = text.trim();
            if text.is_empty() {
                return UpdateResult::Handled(None);
            }

            persistence::push_recent(&mut state.recent_files, text);
            if let Some(recent_path) = &state.recent_files_path {
                persistence::save_recent_files_to(recent_path, &state.recent_files);
            }

            let path = crate::app::config::expand_home(std::path::Path::new(text));
            UpdateResult::Handled(Some(Command::Load(path, MissingFilePolicy::Strict)))
        }
        Action::RecentFileNext => {
            cycle_recent(state, true);
            UpdateResult::Handled(None)
        }
        Action::RecentFilePrev => {
            cycle_recent(state, false);
            UpdateResult::Handled(None)
        }
        Action::CommandsLoaded { path, policy, list } => {
            info!(path = %path.display(), entries = list.len(), "commands loaded");
            replace_list(state, path, *policy, (**list).clone());
            let msg = format!("Loaded {} commands from {}", list.command_count(), state.file_label());
            state.set_status(msg);
            UpdateResult::Handled(None)
        }
        Action::LoadFailed {
            path,
            policy,
            message,
            decode,
        } => {
            if *decode {
                // No partial recovery: the note switches to the file, empty.
                replace_list(state, path, *policy, CommandList::default());
                state.report_error(
                    format!("Failed to load the command list. File might be corrupted.\n{message}"),
                    ErrorSeverity::Warning,
                );
            } else {
                state.report_error(message.clone(), ErrorSeverity::Error);
            }
            UpdateResult::Handled(None)
        }
        Action::CommandsSaved(path) => {
            state.last_saved_at = Some(Instant::now());
            state.set_status(format!("Commands saved to {}", path.display()));
            UpdateResult::Handled(None)
        }
        Action::SaveFailed(message) => {
            state.report_error(
                format!("Failed to save the command list: {message}"),
                ErrorSeverity::Error,
            );
            UpdateResult::Handled(None)
        }
        Action::ExternalChangeDetected(path) => {
            if path.file_name() != state.commands_path.file_name() {
                return UpdateResult::Handled(None);
            }
            if state
                .last_saved_at
                .is_some_and(|t| t.elapsed() < SELF_WRITE_GRACE)
            {
                debug!(path = %path.display(), "ignoring change from our own save");
                return UpdateResult::Handled(None);
            }
            info!(path = %path.display(), "commands file changed on disk, reloading");
            UpdateResult::Handled(Some(Command::Load(
                state.commands_path.clone(),
                state.missing_file_policy,
            )))
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Wholesale replace; every load starts unfiltered.
fn replace_list(
    state: &mut AppState,
    path: &std::path::Path,
    policy: MissingFilePolicy,
    list: CommandList,
) {
    state.commands = list;
    state.commands_path = path.to_path_buf();
    state.missing_file_policy = policy;
    state.search.filter.reset();
    state.scroll = 0;
}

fn cycle_recent(state: &mut AppState, forward: bool) {
    if state.mode != AppMode::OpenFile || state.recent_files.is_empty() {
        return;
    }
    let len = state.recent_files.len();
    let next = match (state.selected_recent_index, forward) {
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
        (None, true) => 0,
        (None, false) => len - 1,
    };
    state.selected_recent_index = Some(next);
    if let Some(input) = &mut state.input {
        input.text_area = AppTextArea::from_text(&state.recent_files[next]);
    }
}
