use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    pub profile: String,
    /// Action name -> key string, e.g. `save = "ctrl+w"`.
    pub custom: Option<HashMap<String, String>>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            custom: None,
        }
    }
}

/// Names accepted in `[keys.custom]`.
fn bindable_action(name: &str) -> Option<Action> {
    match name {
        "save" => Some(Action::SaveCommands),
        "load" => Some(Action::LoadCommands),
        "quit" => Some(Action::Quit),
        "toggle_frameless" => Some(Action::ToggleFrameless),
        "open" => Some(Action::OpenFileIntent),
        "theme" => Some(Action::EnterThemeSelection),
        "help" => Some(Action::ToggleHelp),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    #[must_use]
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut global = HashMap::new();

        if config.profile != "default" {
            warn!(profile = %config.profile, "unknown key profile, using default");
        }

        // --- Shortcuts ---
        global.insert(ctrl('s'), Action::SaveCommands);
        global.insert(ctrl('l'), Action::LoadCommands);
        global.insert(ctrl('q'), Action::Quit);
        global.insert(ctrl('g'), Action::ToggleFrameless);
        global.insert(ctrl('o'), Action::OpenFileIntent);
        global.insert(ctrl('t'), Action::EnterThemeSelection);
        global.insert(key(KeyCode::F(1)), Action::ToggleHelp);

        // --- Search ---
        global.insert(key(KeyCode::Enter), Action::CommitSearch);
        global.insert(key(KeyCode::Esc), Action::ClearSearch);

        // --- Scrolling ---
        global.insert(key(KeyCode::Up), Action::ScrollUp(1));
        global.insert(key(KeyCode::Down), Action::ScrollDown(1));
        global.insert(key(KeyCode::PageUp), Action::ScrollUp(10));
        global.insert(key(KeyCode::PageDown), Action::ScrollDown(10));
        global.insert(key(KeyCode::Home), Action::ScrollTop);
        global.insert(key(KeyCode::End), Action::ScrollBottom);

        if let Some(custom) = &config.custom {
            for (name, binding) in custom {
                let Some(action) = bindable_action(name) else {
                    warn!(action = %name, "unknown action in custom key bindings");
                    continue;
                };
                let Some(event) = parse_key(binding) else {
                    warn!(binding = %binding, "could not parse key binding");
                    continue;
                };
                global.retain(|_, a| *a != action);
                global.insert(event, action);
            }
        }

        Self { global }
    }

    #[must_use]
    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        self.global
            .get(&KeyEvent::new(event.code, event.modifiers))
            .cloned()
    }

    /// Human-readable binding for `action`, e.g. `Ctrl+S`.
    #[must_use]
    pub fn binding_label(&self, action: &Action) -> Option<String> {
        self.global
            .iter()
            .filter(|(_, a)| *a == action)
            .map(|(k, _)| format_key(k))
            .min()
    }
}

fn key(code: impl Into<KeyCode>) -> KeyEvent {
    KeyEvent::new(code.into(), KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Parses strings like `ctrl+s`, `alt+shift+x`, `f2`, `esc`.
#[must_use]
pub fn parse_key(s: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::empty();
    let mut code = None;

    for part in s.split('+').map(str::trim) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers.insert(KeyModifiers::CONTROL),
            "alt" => modifiers.insert(KeyModifiers::ALT),
            "shift" => modifiers.insert(KeyModifiers::SHIFT),
            "enter" | "return" => code = Some(KeyCode::Enter),
            "esc" | "escape" => code = Some(KeyCode::Esc),
            "tab" => code = Some(KeyCode::Tab),
            "space" => code = Some(KeyCode::Char(' ')),
            lower => {
                if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                    code = Some(KeyCode::F(n));
                } else {
                    let mut chars = lower.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => code = Some(KeyCode::Char(c)),
                        _ => return None,
                    }
                }
            }
        }
    }

    code.map(|c| KeyEvent::new(c, modifiers))
}

fn format_key(event: &KeyEvent) -> String {
    let mut parts = Vec::new();
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if event.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if event.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift".to_string());
    }
    parts.push(match event.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
        KeyCode::F(n) => format!("F{n}"),
        other => format!("{other:?}"),
    });
    parts.join("+")
}
