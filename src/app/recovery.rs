use crate::app::action::Action;
use crate::app::keymap::KeyMap;

/// Appends " with <key>" when the action is bound at all.
fn via(keymap: &KeyMap, action: &Action, text: &str) -> String {
    match keymap.binding_label(action) {
        Some(label) => format!("{text} with {label}"),
        None => text.to_string(),
    }
}

#[must_use]
pub fn get_suggestions(msg: &str, keymap: &KeyMap) -> Vec<String> {
    let mut suggestions = Vec::new();
    let msg_lower = msg.to_lowercase();

    if msg_lower.contains("permission denied") {
        suggestions.push("Check the file permissions".to_string());
    }

    if msg_lower.contains("permission denied") || msg_lower.contains("read-only file system") {
        suggestions.push(via(
            keymap,
            &Action::OpenFileIntent,
            "Open a command file in a writable location",
        ));
    }

    if msg_lower.contains("no such file or directory") {
        suggestions.push(via(
            keymap,
            &Action::SaveCommands,
            "Create the parent directory, then save again",
        ));
    }

    if msg_lower.contains("is a directory") {
        suggestions.push("Point the note at a .json file, not a directory".to_string());
    }

    if msg_lower.contains("failed to decode") {
        suggestions.push(
            "The file must be a JSON array of strings and {\"category\": ...} objects".to_string(),
        );
        suggestions.push(via(
            keymap,
            &Action::LoadCommands,
            "Fix it in an editor, then reload",
        ));
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::keymap::KeyConfig;
    use std::collections::HashMap;

    #[test]
    fn test_suggestions() {
        let keymap = KeyMap::from_config(&KeyConfig::default());

        let s = get_suggestions("I/O error on 'a.json': Permission denied (os error 13)", &keymap);
        assert!(s.iter().any(|x| x.contains("permissions")));
        assert!(s.iter().any(|x| x.ends_with("writable location with Ctrl+O")));
        assert!(!s.iter().any(|x| x.contains("save elsewhere")));

        let s = get_suggestions(
            "failed to decode 'a.json': key must be a string at line 1 column 2",
            &keymap,
        );
        assert_eq!(s.len(), 2);
        assert_eq!(s[1], "Fix it in an editor, then reload with Ctrl+L");

        assert!(get_suggestions("Saved", &keymap).is_empty());
    }

    #[test]
    fn test_suggestions_follow_custom_bindings() {
        let keymap = KeyMap::from_config(&KeyConfig {
            custom: Some(HashMap::from([("load".to_string(), "f5".to_string())])),
            ..Default::default()
        });

        let s = get_suggestions("failed to decode 'a.json': EOF", &keymap);
        assert_eq!(s[1], "Fix it in an editor, then reload with F5");
        assert!(!s.iter().any(|x| x.contains("Ctrl+L")));
    }
}
