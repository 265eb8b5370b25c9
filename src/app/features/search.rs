use crate::app::{
    action::{Action, UpdateResult},
    state::{AppState, AppTextArea},
};
use crate::domain::search::FilterState;
use tracing::debug;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SearchInput(key) => {
            state.search.text_area.input(*key);
            // Ctrl+M and friends can sneak a newline in; the bar is a single line.
            if state.search.text_area.lines().len() > 1 {
                let text = state.search.text_area.text();
                state.search.text_area = AppTextArea::from_text(&text);
            }
            UpdateResult::Handled(None)
        }
        Action::CommitSearch => {
            let term = state.search_term();
            let filter_state = state.search.filter.commit(&term).clone();
            match filter_state {
                FilterState::Filtered(term) => {
                    let shown = state.visible_count();
                    debug!(term = %term, shown, "filter applied");
                    let msg = format!("Filter: {shown} of {} shown", state.commands.len());
                    state.set_status(msg);
                }
                FilterState::Unfiltered => {
                    if !term.is_empty() {
                        state.set_status("Filter cleared");
                    }
                }
            }
            state.scroll = 0;
            UpdateResult::Handled(None)
        }
        Action::ClearSearch => {
            state.search.clear();
            if state.search.filter.is_filtered() {
                state.search.filter.commit("");
                state.scroll = 0;
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
