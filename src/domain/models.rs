use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Separates a command's name from its description within one raw line.
pub const DIVIDER: char = '-';

/// One line of the note: a section header or a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EntryRepr", into = "EntryRepr")]
pub enum Entry {
    Category { title: String },
    Command { raw: String },
}

/// On-disk shape. A bare string is a command, an object with a `category`
/// key is a header. Other keys on the object are ignored.
#[derive(Serialize)]
#[serde(untagged)]
enum EntryRepr {
    Category { category: String },
    Command(String),
}

struct EntryReprVisitor;

impl<'de> Visitor<'de> for EntryReprVisitor {
    type Value = EntryRepr;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a command string or a {\"category\": ...} object")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(EntryRepr::Command(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(EntryRepr::Command(v))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut category = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == "category" {
                if category.is_some() {
                    return Err(de::Error::duplicate_field("category"));
                }
                category = Some(map.next_value::<String>()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        category
            .map(|category| EntryRepr::Category { category })
            .ok_or_else(|| de::Error::missing_field("category"))
    }
}

impl<'de> Deserialize<'de> for EntryRepr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EntryReprVisitor)
    }
}

impl From<EntryRepr> for Entry {
    fn from(repr: EntryRepr) -> Self {
        match repr {
            EntryRepr::Category { category } => Entry::Category { title: category },
            EntryRepr::Command(raw) => Entry::Command { raw },
        }
    }
}

impl From<Entry> for EntryRepr {
    fn from(entry: Entry) -> Self {
        match entry {
            Entry::Category { title } => EntryRepr::Category { category: title },
            Entry::Command { raw } => EntryRepr::Command(raw),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandParts<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

/// Splits on the first divider only; both halves are trimmed.
#[must_use]
pub fn split_command(raw: &str) -> CommandParts<'_> {
    match raw.split_once(DIVIDER) {
        Some((name, description)) => CommandParts {
            name: name.trim(),
            description: description.trim(),
        },
        None => CommandParts {
            name: raw.trim(),
            description: "",
        },
    }
}

impl Entry {
    pub fn category(title: impl Into<String>) -> Self {
        Entry::Category {
            title: title.into(),
        }
    }

    pub fn command(raw: impl Into<String>) -> Self {
        Entry::Command { raw: raw.into() }
    }

    #[must_use]
    pub fn is_category(&self) -> bool {
        matches!(self, Entry::Category { .. })
    }

    /// Name and description for commands, `None` for headers.
    #[must_use]
    pub fn parts(&self) -> Option<CommandParts<'_>> {
        match self {
            Entry::Category { .. } => None,
            Entry::Command { raw } => Some(split_command(raw)),
        }
    }

    /// The text a reader sees, and the text search runs against.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Entry::Category { title } => title.clone(),
            Entry::Command { raw } => {
                let parts = split_command(raw);
                if parts.description.is_empty() {
                    parts.name.to_string()
                } else {
                    format!("{} {DIVIDER} {}", parts.name, parts.description)
                }
            }
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

/// Ordered entries; position is the only identity and duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandList {
    entries: Vec<Entry>,
}

impl CommandList {
    #[must_use]
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_category()).count()
    }

    #[must_use]
    pub fn command_count(&self) -> usize {
        self.len() - self.category_count()
    }
}

impl From<Vec<Entry>> for CommandList {
    fn from(entries: Vec<Entry>) -> Self {
        Self::new(entries)
    }
}

impl FromIterator<Entry> for CommandList {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CommandList {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_first_divider_only() {
        let parts = split_command("a-b-c");
        assert_eq!(parts.name, "a");
        assert_eq!(parts.description, "b-c");
    }

    #[test]
    fn test_split_without_divider() {
        let parts = split_command("xyz");
        assert_eq!(parts.name, "xyz");
        assert_eq!(parts.description, "");
    }

    #[test]
    fn test_split_trims_both_sides() {
        let parts = split_command("  :wq   -  Save and Quit ");
        assert_eq!(parts.name, ":wq");
        assert_eq!(parts.description, "Save and Quit");
    }

    #[test]
    fn test_category_is_never_split() {
        let entry = Entry::category("Search - Replace");
        assert!(entry.parts().is_none());
        assert_eq!(entry.display_text(), "Search - Replace");
    }

    #[test]
    fn test_display_text() {
        assert_eq!(Entry::command("dd -Delete Line").display_text(), "dd - Delete Line");
        assert_eq!(Entry::command("  xyz ").display_text(), "xyz");
    }

    #[test]
    fn test_counts() {
        let list: CommandList = vec![
            Entry::category("Editing"),
            Entry::command("i - Insert Mode"),
            Entry::command("i - Insert Mode"),
        ]
        .into();
        assert_eq!(list.category_count(), 1);
        assert_eq!(list.command_count(), 2);
    }
}
