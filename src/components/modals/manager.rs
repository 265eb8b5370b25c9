use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::context_menu::ContextMenuModal;
use super::error::ErrorModal;
use super::help::HelpModal;
use super::helpers::dim_area;
use super::open_file::OpenFileModal;
use super::theme_selection::ThemeSelectionModal;

/// Draws whichever overlay the current mode calls for, errors on top.
pub struct ModalManager<'a> {
    pub theme: &'a Theme,
    pub app_state: &'a AppState<'a>,
}

impl ModalManager<'_> {
    #[must_use]
    pub fn is_active(app_state: &AppState) -> bool {
        app_state.mode != AppMode::Normal || app_state.last_error.is_some()
    }
}

impl Widget for ModalManager<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.app_state;

        // --- Visual Dimming ---
        if Self::is_active(state) {
            dim_area(buf, area);
        }

        match state.mode {
            AppMode::Help => HelpModal {
                theme: self.theme,
                keymap: &state.keymap,
            }
            .render(area, buf),
            AppMode::OpenFile => {
                if let Some(input) = &state.input {
                    OpenFileModal {
                        theme: self.theme,
                        text_area: &input.text_area,
                        recent_files: &state.recent_files,
                        selected_recent: state.selected_recent_index,
                    }
                    .render(area, buf);
                }
            }
            AppMode::ContextMenu => {
                if let Some(menu) = &state.context_menu {
                    ContextMenuModal {
                        theme: self.theme,
                        state: menu,
                    }
                    .render(area, buf);
                }
            }
            AppMode::ThemeSelection => {
                if let Some(ts) = &state.theme_selection {
                    ThemeSelectionModal {
                        theme: self.theme,
                        state: ts,
                        active: state.palette_type,
                    }
                    .render(area, buf);
                }
            }
            AppMode::Normal => {}
        }

        // --- Error Modal ---
        if let Some(err) = &state.last_error {
            ErrorModal {
                theme: self.theme,
                error: err,
            }
            .render(area, buf);
        }
    }
}
