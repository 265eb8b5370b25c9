use super::*;
use crate::app::action::Action;
use crate::app::state::{AppMode, AppState, ErrorSeverity};
use crate::domain::error::StoreError;
use crate::domain::models::Entry;
use crate::domain::store::{default_list, MissingFilePolicy, MockCommandStore};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

#[test]
fn test_dispatch_feeds_load_result_back() {
    let mut mock = MockCommandStore::new();
    mock.expect_load()
        .withf(|path, policy| {
            path == Path::new("git.json") && *policy == MissingFilePolicy::Strict
        })
        .times(1)
        .returning(|_, _| Ok(vec![Entry::category("Git"), Entry::command("git st - status")].into()));

    let mut state = AppState::default();
    dispatch(&mut state, Action::OpenFile("git.json".to_string()), &mock);

    assert_eq!(state.commands_path, PathBuf::from("git.json"));
    assert_eq!(state.commands.len(), 2);
    assert_eq!(state.mode, AppMode::Normal);
}

#[test]
fn test_dispatch_io_error_to_state() {
    let mut mock = MockCommandStore::new();
    mock.expect_save().returning(|path, _| {
        Err(StoreError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied"),
        })
    });

    let mut state = AppState {
        commands: default_list(),
        ..Default::default()
    };
    dispatch(&mut state, Action::SaveCommands, &mock);

    let err = state.last_error.expect("save failure should surface");
    assert_eq!(err.severity, ErrorSeverity::Error);
    assert!(err.message.contains("Permission denied"));
    assert_eq!(state.commands, default_list());
}

#[test]
fn test_watch_dir() {
    assert_eq!(watch_dir(Path::new("commands.json")), PathBuf::from("."));
    assert_eq!(
        watch_dir(Path::new("/home/me/notes/vim.json")),
        PathBuf::from("/home/me/notes")
    );
}

#[tokio::test]
async fn test_initial_load_then_quit() {
    let mut mock = MockCommandStore::new();
    mock.expect_load()
        .times(1)
        .returning(|_, _| Ok(default_list()));

    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(4);
    event_tx
        .send(Ok(Event::Key(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::CONTROL,
        ))))
        .await
        .unwrap();

    run_loop_with_events(&mut terminal, AppState::default(), Arc::new(mock), event_rx)
        .await
        .unwrap();

    let rendered: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(rendered.contains("Global Commands"));
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut mock = MockCommandStore::new();
    mock.expect_load().returning(|_, _| Ok(default_list()));
    mock.expect_save().returning(|_, _| Ok(()));

    let store = Arc::new(mock);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::default();

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=15 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Back out of any overlay, then quit
        for key in [
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        ] {
            let _ = event_tx.send(Ok(Event::Key(key))).await;
        }
    });

    // Run the real loop (with a test backend)
    let result = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, store, event_rx),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        14 => KeyCode::F(1),
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    // Ctrl+Q would end the run early
    if rng.gen_bool(0.1) && code != KeyCode::Char('q') {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: crossterm::event::KeyModifiers::empty(),
    })
}
