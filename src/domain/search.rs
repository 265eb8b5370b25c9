//! Search over a [`CommandList`].
//!
//! Two display modes share one matcher. Highlight mode runs on every
//! keystroke and never hides anything. Filter mode is toggled by an explicit
//! commit and hides non-matches until the next commit. The empty term is
//! treated oppositely by the two: it highlights nothing and filters nothing.

use crate::domain::models::{CommandList, Entry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Highlight,
    Filter,
}

/// Case-insensitive substring match against the entry's display text.
#[must_use]
pub fn matches(entry: &Entry, term: &str, mode: SearchMode) -> bool {
    if term.is_empty() {
        return mode == SearchMode::Filter;
    }
    entry
        .display_text()
        .to_lowercase()
        .contains(&term.to_lowercase())
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterState {
    #[default]
    Unfiltered,
    /// Holds the term captured at commit time.
    Filtered(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryView {
    pub highlighted: bool,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchFilter {
    state: FilterState,
}

impl SearchFilter {
    #[must_use]
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    #[must_use]
    pub fn is_filtered(&self) -> bool {
        matches!(self.state, FilterState::Filtered(_))
    }

    /// The term that is hiding entries, if any.
    #[must_use]
    pub fn committed_term(&self) -> Option<&str> {
        match &self.state {
            FilterState::Filtered(term) => Some(term),
            FilterState::Unfiltered => None,
        }
    }

    /// Unfiltered + non-empty term filters; Filtered + anything unfilters.
    pub fn commit(&mut self, term: &str) -> &FilterState {
        self.state = match &self.state {
            FilterState::Unfiltered if !term.is_empty() => FilterState::Filtered(term.to_string()),
            FilterState::Unfiltered | FilterState::Filtered(_) => FilterState::Unfiltered,
        };
        &self.state
    }

    pub fn reset(&mut self) {
        self.state = FilterState::Unfiltered;
    }

    #[must_use]
    pub fn view(&self, entry: &Entry, live_term: &str) -> EntryView {
        EntryView {
            highlighted: matches(entry, live_term, SearchMode::Highlight),
            visible: match &self.state {
                FilterState::Unfiltered => true,
                FilterState::Filtered(term) => matches(entry, term, SearchMode::Filter),
            },
        }
    }

    /// One view per entry, in list order.
    #[must_use]
    pub fn classify(&self, list: &CommandList, live_term: &str) -> Vec<EntryView> {
        list.iter().map(|e| self.view(e, live_term)).collect()
    }

    #[must_use]
    pub fn visible_count(&self, list: &CommandList) -> usize {
        self.classify(list, "").iter().filter(|v| v.visible).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_commands() -> CommandList {
        vec![Entry::command("A - one"), Entry::command("B - two")].into()
    }

    #[test]
    fn test_empty_term_asymmetry() {
        let entry = Entry::command(":w - Save");
        assert!(!matches(&entry, "", SearchMode::Highlight));
        assert!(matches(&entry, "", SearchMode::Filter));

        let mut filter = SearchFilter::default();
        let list = two_commands();
        assert!(filter.classify(&list, "").iter().all(|v| !v.highlighted));

        filter.commit("");
        assert_eq!(filter.state(), &FilterState::Unfiltered);
        assert!(filter.classify(&list, "").iter().all(|v| v.visible));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let entry = Entry::command("Ctrl+r - Redo");
        assert!(matches(&entry, "REDO", SearchMode::Highlight));
        assert!(matches(&entry, "ctrl+R", SearchMode::Filter));
        assert!(!matches(&entry, "undo", SearchMode::Highlight));
    }

    #[test]
    fn test_categories_are_searchable() {
        let entry = Entry::category("Search and Replace");
        assert!(matches(&entry, "replace", SearchMode::Highlight));
    }

    #[test]
    fn test_filter_toggle_scenario() {
        let list = two_commands();
        let mut filter = SearchFilter::default();

        filter.commit("a");
        let views = filter.classify(&list, "a");
        assert!(views[0].visible);
        assert!(!views[1].visible);

        filter.commit("zzz");
        assert!(!filter.is_filtered());
        assert!(filter.classify(&list, "zzz").iter().all(|v| v.visible));
    }

    #[test]
    fn test_visibility_uses_committed_term() {
        let list = two_commands();
        let mut filter = SearchFilter::default();
        filter.commit("one");

        // Typing after the commit only moves the highlight.
        let views = filter.classify(&list, "two");
        assert_eq!(
            views,
            vec![
                EntryView { highlighted: false, visible: true },
                EntryView { highlighted: true, visible: false },
            ]
        );
        assert_eq!(filter.committed_term(), Some("one"));
        assert_eq!(filter.visible_count(&list), 1);
    }

    #[test]
    fn test_unfilter_reapplies_highlight() {
        let list = two_commands();
        let mut filter = SearchFilter::default();
        filter.commit("one");
        filter.commit("two");
        let views = filter.classify(&list, "two");
        assert!(views.iter().all(|v| v.visible));
        assert!(views[1].highlighted);
    }

    #[test]
    fn test_reset() {
        let mut filter = SearchFilter::default();
        filter.commit("x");
        filter.reset();
        assert_eq!(filter.state(), &FilterState::Unfiltered);
    }
}
