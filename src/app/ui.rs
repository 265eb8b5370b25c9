use crate::app::state::{AppMode, AppState};
use crate::components::footer::Footer;
use crate::components::modals::ModalManager;
use crate::components::note_list::NoteList;
use crate::components::search_bar::{SearchBar, PLACEHOLDER};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
    Frame,
};

pub struct AppLayout {
    /// The note itself, frame included.
    pub note: Rect,
    pub search: Rect,
    pub list: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect, frameless: bool) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Note
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let note = main[0];
    let inner = if frameless {
        note
    } else {
        Block::default().borders(Borders::ALL).inner(note)
    };

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Search bar
            Constraint::Length(1), // Gap
            Constraint::Min(0),    // Entries
        ])
        .split(inner);

    AppLayout {
        note,
        search: body[0],
        list: body[2],
        footer: main[1],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let theme = app_state.theme.clone();
    let layout = get_layout(f.area(), app_state.frameless);
    let typing = app_state.mode == AppMode::Normal && app_state.last_error.is_none();

    // --- Note Frame ---
    let mut note_block = Block::default().style(theme.background);
    if !app_state.frameless {
        let border_style = if typing {
            theme.border_focus
        } else {
            theme.border
        };
        note_block = note_block
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(app_state.file_label(), theme.header_item),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
    }
    f.render_widget(note_block, layout.note);

    // --- Search Bar ---
    let filtered = app_state.search.filter.is_filtered();
    let bar_style = if filtered {
        theme.search_filtered
    } else {
        theme.search_bar
    };
    let text_area = &mut app_state.search.text_area;
    text_area.set_style(bar_style);
    text_area.set_cursor_line_style(Style::default());
    text_area.set_placeholder_text(PLACEHOLDER);
    text_area.set_placeholder_style(theme.search_placeholder);
    text_area.set_cursor_style(if typing {
        bar_style.add_modifier(Modifier::REVERSED)
    } else {
        bar_style
    });

    if let Some(input) = &mut app_state.input {
        input.text_area.set_cursor_line_style(Style::default());
        input.text_area.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    }

    let app_state = &*app_state;

    if layout.search.width > 0 && layout.search.height > 0 {
        f.render_widget(
            SearchBar {
                text_area: &app_state.search.text_area,
                theme: &theme,
                filtered,
            },
            layout.search,
        );
    }

    // --- Entries ---
    if layout.list.width > 0 && layout.list.height > 0 {
        let views = app_state.entry_views();
        f.render_widget(
            NoteList {
                commands: &app_state.commands,
                views: &views,
                scroll: app_state.scroll,
                theme: &theme,
                filter_term: app_state.search.filter.committed_term(),
            },
            layout.list,
        );
    }

    // --- Footer ---
    if layout.footer.width > 0 && layout.footer.height > 0 {
        f.render_widget(
            Footer {
                state: app_state,
                theme: &theme,
            },
            layout.footer,
        );
    }

    // --- Modals ---
    f.render_widget(
        ModalManager {
            theme: &theme,
            app_state,
        },
        f.area(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::default_list;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(state: &mut AppState) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(50, 12)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();
        let buf = terminal.backend().buffer().clone();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_frameless_gains_room() {
        let area = Rect::new(0, 0, 40, 20);
        let framed = get_layout(area, false);
        let bare = get_layout(area, true);
        assert!(bare.list.height > framed.list.height);
        assert!(bare.list.width > framed.list.width);
        assert_eq!(framed.footer, bare.footer);
    }

    #[test]
    fn test_draw_framed_and_frameless() {
        let mut state = AppState {
            commands: default_list(),
            ..Default::default()
        };

        let rows = render(&mut state);
        assert!(rows[0].starts_with('\u{256d}'));
        assert!(rows[0].contains("commands.json"));
        assert!(rows.iter().any(|r| r.contains("Global Commands")));

        state.frameless = true;
        let rows = render(&mut state);
        assert!(!rows[0].contains('\u{256d}'));
        assert!(rows.iter().any(|r| r.contains("Global Commands")));
    }

    #[test]
    fn test_placeholder_when_search_empty() {
        let mut state = AppState::default();
        let rows = render(&mut state);
        assert!(rows[1].contains(PLACEHOLDER));
    }
}
