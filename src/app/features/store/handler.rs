use crate::app::{action::Action, command::Command};
use crate::domain::store::CommandStore;
use tracing::error;

/// Runs `command` against the store and reports the outcome as an action.
///
/// Files are local and small, so this is a direct call on the UI task.
pub fn handle_command(command: Command, store: &dyn CommandStore) -> Action {
    match command {
        Command::Load(path, policy) => match store.load(&path, policy) {
            Ok(list) => Action::CommandsLoaded {
                path,
                policy,
                list: Box::new(list),
            },
            Err(e) => {
                error!(error = %e, "load failed");
                Action::LoadFailed {
                    decode: e.is_decode(),
                    message: e.to_string(),
                    path,
                    policy,
                }
            }
        },
        Command::Save(path, list) => match store.save(&path, &list) {
            Ok(()) => Action::CommandsSaved(path),
            Err(e) => {
                error!(error = %e, "save failed");
                Action::SaveFailed(e.to_string())
            }
        },
    }
}
