use crate::app::{
    action::{Action, UpdateResult},
    state::AppState,
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ScrollUp(n) => {
            state.scroll = state.scroll.saturating_sub(*n);
            UpdateResult::Handled(None)
        }
        Action::ScrollDown(n) => {
            state.scroll = state.scroll.saturating_add(*n).min(max_scroll(state));
            UpdateResult::Handled(None)
        }
        Action::ScrollTop => {
            state.scroll = 0;
            UpdateResult::Handled(None)
        }
        Action::ScrollBottom => {
            state.scroll = max_scroll(state);
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Last visible entry can scroll to the top row, no further.
fn max_scroll(state: &AppState) -> u16 {
    u16::try_from(state.visible_count().saturating_sub(1)).unwrap_or(u16::MAX)
}
