use crate::theme::PaletteType;

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSelectionState {
    pub selected_index: usize,
    pub themes: Vec<PaletteType>,
}

impl ThemeSelectionState {
    /// Opens with the active palette preselected.
    #[must_use]
    pub fn starting_at(current: PaletteType) -> Self {
        let themes = PaletteType::all().to_vec();
        Self {
            selected_index: themes.iter().position(|t| *t == current).unwrap_or(0),
            themes,
        }
    }
}
