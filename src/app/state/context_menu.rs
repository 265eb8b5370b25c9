use super::super::action::Action;
use ratatui::layout::Rect;

#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenuState {
    pub x: u16,
    pub y: u16,
    pub selected_index: usize,
    pub actions: Vec<(String, Action)>,
}

impl ContextMenuState {
    /// Places the menu at the click, shifted back inside the terminal when it would overflow.
    #[must_use]
    pub fn calculate_rect(&self, terminal_area: Rect) -> Rect {
        let longest_action = self
            .actions
            .iter()
            .map(|(name, _)| name.chars().count())
            .max()
            .unwrap_or(0) as u16;
        let menu_width = (longest_action + 6).min(terminal_area.width);
        let menu_height = (self.actions.len() as u16 + 2).min(terminal_area.height);

        let mut x = self.x;
        let mut y = self.y;

        if x.saturating_add(menu_width) > terminal_area.width {
            x = terminal_area.width.saturating_sub(menu_width);
        }

        if y.saturating_add(menu_height) > terminal_area.height {
            y = terminal_area.height.saturating_sub(menu_height);
        }

        Rect::new(x, y, menu_width, menu_height)
    }

    /// Index of the item under `(column, row)`, if the click landed on one.
    #[must_use]
    pub fn item_at(&self, terminal_area: Rect, column: u16, row: u16) -> Option<usize> {
        let area = self.calculate_rect(terminal_area);
        let inside = column > area.x
            && column < area.x + area.width.saturating_sub(1)
            && row > area.y
            && row < area.y + area.height.saturating_sub(1);
        if !inside {
            return None;
        }
        let idx = (row - area.y - 1) as usize;
        (idx < self.actions.len()).then_some(idx)
    }
}
