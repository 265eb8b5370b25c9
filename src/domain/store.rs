use crate::domain::error::StoreError;
use crate::domain::models::{CommandList, Entry};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What `load` returns when the path does not point at an existing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingFilePolicy {
    /// Fall back to the built-in demonstration list.
    #[default]
    #[serde(rename = "defaults")]
    WithDefaults,
    /// Start from an empty list.
    Strict,
}

impl MissingFilePolicy {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            MissingFilePolicy::WithDefaults => "defaults",
            MissingFilePolicy::Strict => "strict",
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait CommandStore: Send + Sync {
    /// Reads the whole list. A missing file is not an error; see [`MissingFilePolicy`].
    fn load(&self, path: &Path, policy: MissingFilePolicy) -> Result<CommandList, StoreError>;

    /// Overwrites `path` with `list`.
    fn save(&self, path: &Path, list: &CommandList) -> Result<(), StoreError>;
}

/// Vim cheat sheet shown when no commands file exists yet.
#[must_use]
pub fn default_list() -> CommandList {
    vec![
        Entry::category("Global Commands"),
        Entry::command(":w - Save"),
        Entry::command(":q - Quit"),
        Entry::command(":wq - Save and Quit"),
        Entry::category("Editing"),
        Entry::command("i - Insert Mode"),
        Entry::command("dd - Delete Line"),
        Entry::command("yy - Yank Line"),
        Entry::command("p - Paste"),
        Entry::category("Search and Replace"),
        Entry::command("/search - Search"),
        Entry::command(":s - Replace"),
        Entry::command("u - Undo"),
        Entry::command("Ctrl+r - Redo"),
    ]
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::DIVIDER;

    #[test]
    fn test_default_list_exercises_split() {
        let list = default_list();
        assert!(list.category_count() >= 1);
        assert!(list
            .iter()
            .any(|e| matches!(e, Entry::Command { raw } if raw.contains(DIVIDER))));
    }

    #[test]
    fn test_policy_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: MissingFilePolicy,
        }
        let w: Wrapper = toml::from_str("policy = \"strict\"").unwrap();
        assert_eq!(w.policy, MissingFilePolicy::Strict);
        let w: Wrapper = toml::from_str("policy = \"defaults\"").unwrap();
        assert_eq!(w.policy, MissingFilePolicy::WithDefaults);
        assert_eq!(MissingFilePolicy::default().label(), "defaults");
    }
}
