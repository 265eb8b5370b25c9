use crate::app::action::Action;
use crate::app::keymap::KeyMap;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

/// Key column is either a live binding or fixed text for unbindable input.
enum Key {
    Bound(Action),
    Fixed(&'static str),
}

fn sections() -> Vec<(&'static str, Vec<(Key, &'static str)>)> {
    vec![
        (
            "Search",
            vec![
                (Key::Fixed(" type"), "Highlight matching entries"),
                (Key::Bound(Action::CommitSearch), "Filter to matches / show all"),
                (Key::Bound(Action::ClearSearch), "Clear search and filter"),
            ],
        ),
        (
            "Navigation",
            vec![
                (Key::Bound(Action::ScrollUp(1)), "Scroll up"),
                (Key::Bound(Action::ScrollDown(1)), "Scroll down"),
                (Key::Bound(Action::ScrollUp(10)), "Page up"),
                (Key::Bound(Action::ScrollDown(10)), "Page down"),
                (Key::Bound(Action::ScrollTop), "Jump to top"),
                (Key::Bound(Action::ScrollBottom), "Jump to bottom"),
            ],
        ),
        (
            "File",
            vec![
                (Key::Bound(Action::SaveCommands), "Save commands"),
                (Key::Bound(Action::LoadCommands), "Reload commands"),
                (Key::Bound(Action::OpenFileIntent), "Open another file"),
            ],
        ),
        (
            "Window",
            vec![
                (Key::Bound(Action::ToggleFrameless), "Toggle frame"),
                (Key::Bound(Action::EnterThemeSelection), "Choose theme"),
                (Key::Fixed(" right-click"), "Context menu"),
                (Key::Bound(Action::ToggleHelp), "Show this help"),
                (Key::Bound(Action::Quit), "Quit"),
            ],
        ),
    ]
}

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
    pub keymap: &'a KeyMap,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(70, 80, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let key_style = self.theme.footer_segment_key;
        let desc_style = self.theme.list_item;
        let category_style = self.theme.header_item;

        let mut rows = Vec::new();
        for (i, (section, entries)) in sections().into_iter().enumerate() {
            if i > 0 {
                rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
            }
            rows.push(Row::new(vec![
                Cell::from(Span::styled(section, category_style)),
                Cell::from(""),
            ]));
            for (key, desc) in entries {
                let label = match key {
                    Key::Fixed(text) => text.to_string(),
                    Key::Bound(action) => match self.keymap.binding_label(&action) {
                        Some(label) => format!(" {label}"),
                        None => " (unbound)".to_string(),
                    },
                };
                rows.push(Row::new(vec![
                    Cell::from(Span::styled(label, key_style)),
                    Cell::from(Span::styled(desc, desc_style)),
                ]));
            }
        }

        Table::new(
            rows,
            [Constraint::Percentage(30), Constraint::Percentage(70)],
        )
        .block(block)
        .render(help_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::keymap::KeyConfig;

    #[test]
    fn test_help_lists_current_bindings() {
        let theme = Theme::default();
        let keymap = KeyMap::from_config(&KeyConfig::default());
        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);
        HelpModal {
            theme: &theme,
            keymap: &keymap,
        }
        .render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Ctrl+S"));
        assert!(text.contains("Toggle frame"));
    }
}
