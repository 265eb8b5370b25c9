use super::types::{FooterGroup, FooterItem};
use crate::app::action::Action;
use crate::app::state::{AppMode, AppState};

fn item(key: impl Into<String>, desc: &'static str) -> FooterItem {
    FooterItem {
        key: key.into(),
        desc,
        highlighted: false,
    }
}

/// Item for a remappable action; dropped when the action has no binding.
fn bound(state: &AppState, action: &Action, desc: &'static str) -> Option<FooterItem> {
    state.keymap.binding_label(action).map(|key| item(key, desc))
}

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    if state.last_error.is_some() {
        return vec![FooterGroup {
            name: "ERROR",
            items: vec![item("Esc", "dismiss")],
        }];
    }

    match state.mode {
        AppMode::Normal => {
            let filtered = state.search.filter.is_filtered();
            let mut search = vec![FooterItem {
                key: "Enter".to_string(),
                desc: if filtered { "unfilter" } else { "filter" },
                highlighted: filtered,
            }];
            search.extend(bound(state, &Action::ClearSearch, "clear"));

            let file = [
                bound(state, &Action::SaveCommands, "save"),
                bound(state, &Action::LoadCommands, "load"),
                bound(state, &Action::OpenFileIntent, "open"),
            ];
            let app = [
                bound(state, &Action::ToggleFrameless, "frame"),
                bound(state, &Action::ToggleHelp, "help"),
                bound(state, &Action::Quit, "quit"),
            ];

            vec![
                FooterGroup {
                    name: "SEARCH",
                    items: search,
                },
                FooterGroup {
                    name: "FILE",
                    items: file.into_iter().flatten().collect(),
                },
                FooterGroup {
                    name: "APP",
                    items: app.into_iter().flatten().collect(),
                },
            ]
        }
        AppMode::OpenFile => vec![FooterGroup {
            name: "OPEN",
            items: vec![
                item("Enter", "open"),
                item("\u{2191}/\u{2193}", "recent"),
                item("Esc", "cancel"),
            ],
        }],
        AppMode::ContextMenu => vec![FooterGroup {
            name: "MENU",
            items: vec![
                item("j/k", "move"),
                item("Enter", "select"),
                item("Esc", "close"),
            ],
        }],
        AppMode::Help => vec![FooterGroup {
            name: "HELP",
            items: vec![item("q/Esc/F1", "close")],
        }],
        AppMode::ThemeSelection => vec![FooterGroup {
            name: "THEME",
            items: vec![
                item("j/k", "select"),
                item("Enter", "apply"),
                item("Esc", "cancel"),
            ],
        }],
    }
}
