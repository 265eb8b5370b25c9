use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};
use tracing::trace;

type FeatureUpdate = fn(&mut AppState, &Action) -> UpdateResult;

/// Feature reducers in dispatch order; the first to handle an action wins.
const FEATURES: [FeatureUpdate; 4] = [
    features::search::update,
    features::navigation::update,
    features::store::update,
    features::ui::update,
];

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    for feature in FEATURES {
        if let UpdateResult::Handled(command) = feature(state, &action) {
            return command;
        }
    }
    trace!(?action, "action not handled");
    None
}
