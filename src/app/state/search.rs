use super::input::AppTextArea;
use crate::domain::search::SearchFilter;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState<'a> {
    pub text_area: AppTextArea<'a>,
    pub filter: SearchFilter,
}

impl SearchState<'_> {
    #[must_use]
    pub fn term(&self) -> String {
        self.text_area.lines().concat()
    }

    pub fn clear(&mut self) {
        self.text_area = AppTextArea::default();
    }
}
