use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState, ContextMenuState, ErrorSeverity, ThemeSelectionState},
};
use crate::theme::Theme;
use std::time::Duration;
use tracing::info;

const STATUS_TTL: Duration = Duration::from_secs(3);

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => {
            if state
                .status_clear_time
                .is_some_and(|t| t.elapsed() >= STATUS_TTL)
            {
                state.status_message = None;
                state.status_clear_time = None;
            }
            UpdateResult::Handled(None)
        }
        Action::Resize(..) => UpdateResult::Handled(None),
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::ErrorOccurred(message) => {
            state.report_error(message.clone(), ErrorSeverity::Error);
            UpdateResult::Handled(None)
        }
        Action::CancelMode => {
            state.mode = AppMode::Normal;
            state.input = None;
            state.selected_recent_index = None;
            state.last_error = None;
            state.context_menu = None;
            state.theme_selection = None;
            UpdateResult::Handled(None)
        }
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Normal
            } else {
                AppMode::Help
            };
            UpdateResult::Handled(None)
        }
        Action::ToggleFrameless => {
            state.frameless = !state.frameless;
            info!(frameless = state.frameless, "window chrome toggled");
            UpdateResult::Handled(None)
        }
        Action::EnterThemeSelection => {
            state.mode = AppMode::ThemeSelection;
            state.theme_selection = Some(ThemeSelectionState::starting_at(state.palette_type));
            UpdateResult::Handled(None)
        }
        Action::SelectThemeNext => {
            if let Some(ts) = &mut state.theme_selection {
                ts.selected_index = (ts.selected_index + 1) % ts.themes.len();
            }
            UpdateResult::Handled(None)
        }
        Action::SelectThemePrev => {
            if let Some(ts) = &mut state.theme_selection {
                if ts.selected_index == 0 {
                    ts.selected_index = ts.themes.len() - 1;
                } else {
                    ts.selected_index -= 1;
                }
            }
            UpdateResult::Handled(None)
        }
        Action::ConfirmTheme => {
            let selected = state
                .theme_selection
                .as_ref()
                .and_then(|ts| ts.themes.get(ts.selected_index).copied());
            match selected {
                Some(palette) => update(state, &Action::SwitchTheme(palette)),
                None => UpdateResult::Handled(None),
            }
        }
        Action::SwitchTheme(palette) => {
            state.palette_type = *palette;
            state.theme = Theme::from_palette_type(*palette);
            state.theme_selection = None;
            state.mode = AppMode::Normal;
            state.set_status(format!("Theme: {}", palette.label()));
            UpdateResult::Handled(None)
        }
        Action::TextAreaInput(key) => {
            if let Some(input) = &mut state.input {
                input.text_area.input(*key);
            }
            UpdateResult::Handled(None)
        }
        Action::OpenContextMenu((x, y)) => {
            state.context_menu = Some(ContextMenuState {
                x: *x,
                y: *y,
                selected_index: 0,
                actions: context_menu_actions(state),
            });
            state.mode = AppMode::ContextMenu;
            UpdateResult::Handled(None)
        }
        Action::SelectContextMenuNext => {
            if let Some(menu) = &mut state.context_menu {
                menu.selected_index = (menu.selected_index + 1) % menu.actions.len();
            }
            UpdateResult::Handled(None)
        }
        Action::SelectContextMenuPrev => {
            if let Some(menu) = &mut state.context_menu {
                if menu.selected_index == 0 {
                    menu.selected_index = menu.actions.len() - 1;
                } else {
                    menu.selected_index -= 1;
                }
            }
            UpdateResult::Handled(None)
        }
        Action::SelectContextMenuAction(idx) => {
            let chosen = state
                .context_menu
                .take()
                .and_then(|menu| menu.actions.into_iter().nth(*idx))
                .map(|(_, action)| action);
            state.mode = AppMode::Normal;
            match chosen {
                Some(action) => UpdateResult::Handled(crate::app::reducer::update(state, action)),
                None => UpdateResult::Handled(None),
            }
        }
        Action::CloseContextMenu => {
            state.context_menu = None;
            state.mode = AppMode::Normal;
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Menu entries, each labelled with its current key binding when it has one.
fn context_menu_actions(state: &AppState) -> Vec<(String, Action)> {
    let frameless_label = if state.frameless {
        "Show Frame"
    } else {
        "Hide Frame"
    };
    [
        ("Save Commands", Action::SaveCommands),
        ("Load Commands", Action::LoadCommands),
        ("Open File...", Action::OpenFileIntent),
        (frameless_label, Action::ToggleFrameless),
        ("Theme...", Action::EnterThemeSelection),
        ("Exit", Action::Quit),
    ]
    .into_iter()
    .map(|(name, action)| {
        let label = match state.keymap.binding_label(&action) {
            Some(key) => format!("{name} ({key})"),
            None => name.to_string(),
        };
        (label, action)
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::command::Command;
    use crate::app::state::ErrorState;
    use crate::theme::PaletteType;
    use std::time::Instant;

    #[test]
    fn test_toggle_frameless() {
        let mut state = AppState::default();
        assert!(!state.frameless);
        update(&mut state, &Action::ToggleFrameless);
        assert!(state.frameless);
        update(&mut state, &Action::ToggleFrameless);
        assert!(!state.frameless);
    }

    #[test]
    fn test_status_expires_on_tick() {
        let mut state = AppState::default();
        state.set_status("Saved");
        update(&mut state, &Action::Tick);
        assert_eq!(state.status_message.as_deref(), Some("Saved"));

        state.status_clear_time = Some(Instant::now() - Duration::from_secs(10));
        update(&mut state, &Action::Tick);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_context_menu_labels_carry_bindings() {
        let mut state = AppState::default();
        update(&mut state, &Action::OpenContextMenu((3, 4)));
        assert_eq!(state.mode, AppMode::ContextMenu);
        let menu = state.context_menu.as_ref().unwrap();
        assert_eq!(menu.actions[0].0, "Save Commands (Ctrl+S)");
        assert_eq!(menu.actions.last().unwrap().1, Action::Quit);
    }

    #[test]
    fn test_context_menu_selection_dispatches() {
        let mut state = AppState::default();
        update(&mut state, &Action::OpenContextMenu((0, 0)));
        let result = update(&mut state, &Action::SelectContextMenuAction(0));
        assert!(matches!(result, UpdateResult::Handled(Some(Command::Save(..)))));
        assert_eq!(state.mode, AppMode::Normal);
        assert!(state.context_menu.is_none());
    }

    #[test]
    fn test_context_menu_wraps() {
        let mut state = AppState::default();
        update(&mut state, &Action::OpenContextMenu((0, 0)));
        update(&mut state, &Action::SelectContextMenuPrev);
        let menu = state.context_menu.as_ref().unwrap();
        assert_eq!(menu.selected_index, menu.actions.len() - 1);
        update(&mut state, &Action::SelectContextMenuNext);
        assert_eq!(state.context_menu.as_ref().unwrap().selected_index, 0);
    }

    #[test]
    fn test_theme_selection_confirm() {
        let mut state = AppState::default();
        update(&mut state, &Action::EnterThemeSelection);
        let start = state.theme_selection.as_ref().unwrap().selected_index;
        assert_eq!(PaletteType::all()[start], state.palette_type);

        update(&mut state, &Action::SelectThemeNext);
        update(&mut state, &Action::ConfirmTheme);
        let expected = PaletteType::all()[(start + 1) % PaletteType::all().len()];
        assert_eq!(state.palette_type, expected);
        assert_eq!(state.mode, AppMode::Normal);
        assert!(state.theme_selection.is_none());
    }

    #[test]
    fn test_cancel_mode_clears_overlays() {
        let mut state = AppState::default();
        state.last_error = Some(ErrorState::new("boom", ErrorSeverity::Error));
        update(&mut state, &Action::OpenContextMenu((0, 0)));
        update(&mut state, &Action::CancelMode);
        assert_eq!(state.mode, AppMode::Normal);
        assert!(state.last_error.is_none());
        assert!(state.context_menu.is_none());
    }
}
