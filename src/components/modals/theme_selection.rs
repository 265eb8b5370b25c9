use crate::app::state::ThemeSelectionState;
use crate::theme::{PaletteType, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

pub struct ThemeSelectionModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a ThemeSelectionState,
    pub active: PaletteType,
}

impl Widget for ThemeSelectionModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(50, 40, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" SELECT THEME ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let items: Vec<ListItem> = self
            .state
            .themes
            .iter()
            .enumerate()
            .map(|(i, palette)| {
                let selected = i == self.state.selected_index;
                let style = if selected {
                    self.theme.list_selected
                } else {
                    self.theme.list_item
                };
                let prefix = if selected { "> " } else { "  " };

                // Swatch in the candidate's own colors
                let preview = Theme::from_palette_type(*palette);
                let mut spans = vec![
                    Span::styled(prefix, style),
                    Span::styled(palette.label(), style),
                    Span::raw("  "),
                    Span::styled(" Aa ", preview.background.patch(preview.category)),
                    Span::styled(" :w ", preview.background.patch(preview.command_name)),
                ];
                if *palette == self.active {
                    spans.push(Span::styled(" (current)", self.theme.dimmed));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        List::new(items).block(block).render(modal_area, buf);
    }
}
