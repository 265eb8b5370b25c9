use crate::app::persistence::MAX_RECENT_FILES;
use crate::app::state::AppTextArea;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, List, ListItem, ListState, StatefulWidget, Widget,
    },
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow};

/// Path prompt with the recently opened files listed underneath.
pub struct OpenFileModal<'a> {
    pub theme: &'a Theme,
    pub text_area: &'a AppTextArea<'a>,
    pub recent_files: &'a [String],
    pub selected_recent: Option<usize>,
}

impl Widget for OpenFileModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let recent_rows = self.recent_files.len().min(MAX_RECENT_FILES) as u16;
        // Input + separator + recent list + borders
        let height = 1 + 1 + recent_rows.max(1) + 2;
        let modal_area = centered_rect_fixed_height(70, height, area);

        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" OPEN COMMANDS FILE ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Input
                Constraint::Length(1), // Separator
                Constraint::Min(0),    // Recent files
            ])
            .split(inner_area);

        if layout[0].width > 0 && layout[0].height > 0 {
            Widget::render(self.text_area, layout[0], buf);
        }

        if layout[1].height > 0 {
            let separator = "\u{2500}".repeat(layout[1].width as usize);
            buf.set_string(layout[1].x, layout[1].y, separator, self.theme.border);
        }

        if layout[2].height == 0 {
            return;
        }
        if self.recent_files.is_empty() {
            buf.set_string(
                layout[2].x,
                layout[2].y,
                "  no recent files",
                self.theme.dimmed,
            );
            return;
        }

        let items: Vec<ListItem> = self
            .recent_files
            .iter()
            .enumerate()
            .map(|(i, f)| {
                let is_selected = Some(i) == self.selected_recent;
                let style = if is_selected {
                    self.theme.list_selected
                } else {
                    self.theme.list_item
                };
                let prefix = if is_selected { "\u{25b8} " } else { "  " };
                ListItem::new(format!("{prefix}{f}")).style(style)
            })
            .collect();

        // Scrolls to keep the selection on screen when the terminal is short.
        let mut list_state = ListState::default().with_selected(self.selected_recent);
        StatefulWidget::render(List::new(items), layout[2], buf, &mut list_state);
    }
}
