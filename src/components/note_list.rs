use crate::domain::models::{CommandList, Entry};
use crate::domain::search::EntryView;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// The note body: one line per visible entry, highlighted entries restyled.
pub struct NoteList<'a> {
    pub commands: &'a CommandList,
    pub views: &'a [EntryView],
    pub scroll: u16,
    pub theme: &'a Theme,
    /// Committed filter term, used for the empty-result hint.
    pub filter_term: Option<&'a str>,
}

impl NoteList<'_> {
    fn entry_line(&self, entry: &Entry, highlighted: bool) -> Line<'static> {
        let theme = self.theme;
        let patch = |style: Style| {
            if highlighted {
                style.patch(theme.entry_highlight)
            } else {
                style
            }
        };

        let line = match entry {
            Entry::Category { title } => {
                Line::from(Span::styled(format!(" {title}"), patch(theme.category)))
            }
            Entry::Command { .. } => {
                let mut spans = Vec::with_capacity(4);
                if let Some(parts) = entry.parts() {
                    spans.push(Span::styled("   ", patch(Style::default())));
                    spans.push(Span::styled(
                        parts.name.to_string(),
                        patch(theme.command_name),
                    ));
                    if !parts.description.is_empty() {
                        spans.push(Span::styled(" - ", patch(theme.divider)));
                        spans.push(Span::styled(
                            parts.description.to_string(),
                            patch(theme.command_desc),
                        ));
                    }
                }
                Line::from(spans)
            }
        };

        if highlighted {
            line.style(theme.entry_highlight)
        } else {
            line
        }
    }
}

impl Widget for NoteList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let lines: Vec<Line> = self
            .commands
            .iter()
            .zip(self.views)
            .filter(|(_, view)| view.visible)
            .map(|(entry, view)| self.entry_line(entry, view.highlighted))
            .collect();

        if lines.is_empty() {
            let hint = match self.filter_term {
                Some(term) => format!(" No matches for '{term}'"),
                None => " No commands".to_string(),
            };
            Paragraph::new(Line::from(Span::styled(hint, self.theme.dimmed))).render(area, buf);
            return;
        }

        Paragraph::new(lines)
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::SearchFilter;

    fn render(list: &CommandList, filter: &SearchFilter, live: &str) -> Vec<String> {
        let theme = Theme::default();
        let views = filter.classify(list, live);
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        NoteList {
            commands: list,
            views: &views,
            scroll: 0,
            theme: &theme,
            filter_term: filter.committed_term(),
        }
        .render(area, &mut buf);

        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    fn sample() -> CommandList {
        vec![
            Entry::category("Git"),
            Entry::command("git st - status"),
            Entry::command("git lg"),
        ]
        .into()
    }

    #[test]
    fn test_renders_entries_in_order() {
        let rows = render(&sample(), &SearchFilter::default(), "");
        assert_eq!(rows[0], " Git");
        assert_eq!(rows[1], "   git st - status");
        assert_eq!(rows[2], "   git lg");
    }

    #[test]
    fn test_filtered_entries_are_hidden() {
        let mut filter = SearchFilter::default();
        filter.commit("lg");
        let rows = render(&sample(), &filter, "lg");
        assert_eq!(rows[0], "   git lg");
        assert_eq!(rows[1], "");
    }

    #[test]
    fn test_no_matches_hint() {
        let mut filter = SearchFilter::default();
        filter.commit("zzz");
        let rows = render(&sample(), &filter, "zzz");
        assert_eq!(rows[0], " No matches for 'zzz'");
    }
}
