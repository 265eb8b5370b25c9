use crate::app::{
    action::Action,
    state::{AppMode, AppState},
};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::{Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == KeyEventKind::Release {
            return None;
        }
    }
    if let Event::Resize(w, h) = event {
        return Some(Action::Resize(w, h));
    }

    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);

    match app_state.mode {
        AppMode::OpenFile => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc => Some(Action::CancelMode),
                KeyCode::Enter => app_state
                    .input
                    .as_ref()
                    .map(|input| Action::OpenFile(input.text_area.text())),
                KeyCode::Down | KeyCode::Tab => Some(Action::RecentFileNext),
                KeyCode::Up | KeyCode::BackTab => Some(Action::RecentFilePrev),
                _ => Some(Action::TextAreaInput(key)),
            },
            _ => None,
        },
        AppMode::ContextMenu => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc => Some(Action::CloseContextMenu),
                KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectContextMenuNext),
                KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectContextMenuPrev),
                KeyCode::Enter => app_state
                    .context_menu
                    .as_ref()
                    .map(|menu| Action::SelectContextMenuAction(menu.selected_index)),
                _ => None,
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => app_state
                    .context_menu
                    .as_ref()
                    .and_then(|menu| menu.item_at(area, mouse.column, mouse.row))
                    .map_or(Some(Action::CloseContextMenu), |idx| {
                        Some(Action::SelectContextMenuAction(idx))
                    }),
                MouseEventKind::Down(MouseButton::Right) => Some(Action::CloseContextMenu),
                _ => None,
            },
            _ => None,
        },
        AppMode::Help => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q' | '?') => Some(Action::ToggleHelp),
                _ => None,
            },
            _ => None,
        },
        AppMode::ThemeSelection => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc => Some(Action::CancelMode),
                KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectThemeNext),
                KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectThemePrev),
                KeyCode::Enter => Some(Action::ConfirmTheme),
                _ => None,
            },
            _ => None,
        },
        AppMode::Normal => match event {
            Event::Key(key) if app_state.last_error.is_some() => map_error_key(key, app_state),
            Event::Key(key) => app_state
                .keymap
                .get_action(key)
                .or(Some(Action::SearchInput(key))),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => Some(Action::ScrollUp(1)),
                MouseEventKind::ScrollDown => Some(Action::ScrollDown(1)),
                MouseEventKind::Down(MouseButton::Right) => {
                    Some(Action::OpenContextMenu((mouse.column, mouse.row)))
                }
                _ => None,
            },
            _ => None,
        },
    }
}

/// While an error is on screen only dismissal and quitting get through.
fn map_error_key(key: KeyEvent, app_state: &AppState<'_>) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => Some(Action::CancelMode),
        _ => match app_state.keymap.get_action(key) {
            Some(Action::Quit) => Some(Action::Quit),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{ErrorSeverity, ErrorState};
    use crossterm::event::{KeyModifiers, MouseEvent};

    const SIZE: Size = Size {
        width: 80,
        height: 24,
    };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn right_click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_normal_mode_keys() {
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(key(KeyCode::Enter), &state, SIZE),
            Some(Action::CommitSearch)
        );
        assert_eq!(
            map_event_to_action(
                Event::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
                &state,
                SIZE
            ),
            Some(Action::SaveCommands)
        );
        assert!(matches!(
            map_event_to_action(key(KeyCode::Char('x')), &state, SIZE),
            Some(Action::SearchInput(_))
        ));
    }

    #[test]
    fn test_right_click_opens_menu() {
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(right_click(10, 5), &state, SIZE),
            Some(Action::OpenContextMenu((10, 5)))
        );
    }

    #[test]
    fn test_error_swallows_typing() {
        let state = AppState {
            last_error: Some(ErrorState::new("boom", ErrorSeverity::Error)),
            ..Default::default()
        };
        assert_eq!(map_event_to_action(key(KeyCode::Char('x')), &state, SIZE), None);
        assert_eq!(
            map_event_to_action(key(KeyCode::Esc), &state, SIZE),
            Some(Action::CancelMode)
        );
    }

    #[test]
    fn test_open_file_prompt_keys() {
        let mut state = AppState::default();
        crate::app::reducer::update(&mut state, Action::OpenFileIntent);
        assert_eq!(
            map_event_to_action(key(KeyCode::Enter), &state, SIZE),
            Some(Action::OpenFile("commands.json".to_string()))
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Down), &state, SIZE),
            Some(Action::RecentFileNext)
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Up), &state, SIZE),
            Some(Action::RecentFilePrev)
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Esc), &state, SIZE),
            Some(Action::CancelMode)
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let state = AppState::default();
        let mut ev = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        ev.kind = KeyEventKind::Release;
        assert_eq!(map_event_to_action(Event::Key(ev), &state, SIZE), None);
    }
}
