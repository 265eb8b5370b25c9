use crate::app::state::AppTextArea;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::Widget,
};

pub const PLACEHOLDER: &str = "Search commands...";

/// Single-line search input with a filter badge on the right while filtered.
pub struct SearchBar<'a> {
    pub text_area: &'a AppTextArea<'a>,
    pub theme: &'a Theme,
    pub filtered: bool,
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let style = if self.filtered {
            self.theme.search_filtered
        } else {
            self.theme.search_bar
        };
        buf.set_style(area, style);

        let badge = " FILTERED ";
        let show_badge = self.filtered && area.width as usize > badge.len() + 8;
        let badge_width = if show_badge { badge.len() as u16 } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(badge_width),
            ])
            .split(area);

        Widget::render(self.text_area, chunks[1], buf);

        if show_badge {
            buf.set_span(
                chunks[2].x,
                chunks[2].y,
                &Span::styled(badge, self.theme.header_warn),
                chunks[2].width,
            );
        }
    }
}
