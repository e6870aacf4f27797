//! Keybinding configuration

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Open or close the agent menu
    ToggleMenu,
    /// Highlight the next agent
    NextAgent,
    /// Highlight the previous agent
    PrevAgent,
    /// Open the menu, or select the highlighted agent when open
    Confirm,
    /// Close the menu
    Cancel,
    /// Quit application
    Quit,
}

impl Action {
    /// Get the display description for this action
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ToggleMenu => "Open/close agents",
            Self::NextAgent => "Next agent",
            Self::PrevAgent => "Previous agent",
            Self::Confirm => "Select",
            Self::Cancel => "Close",
            Self::Quit => "Quit",
        }
    }
}

/// Keybinding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Map of key strings to actions (for serialization)
    bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(" ".to_string(), Action::ToggleMenu);
        bindings.insert("a".to_string(), Action::ToggleMenu);
        bindings.insert("j".to_string(), Action::NextAgent);
        bindings.insert("Down".to_string(), Action::NextAgent);
        bindings.insert("k".to_string(), Action::PrevAgent);
        bindings.insert("Up".to_string(), Action::PrevAgent);
        bindings.insert("Enter".to_string(), Action::Confirm);
        bindings.insert("Esc".to_string(), Action::Cancel);
        bindings.insert("q".to_string(), Action::Quit);
        bindings.insert("Ctrl+c".to_string(), Action::Quit);

        Self { bindings }
    }
}

impl KeyBindings {
    /// Merge in any missing default keybindings
    ///
    /// Keeps user-provided bindings and fills gaps left by older configs.
    pub fn merge_defaults(&mut self) {
        let defaults = Self::default();
        for (key, action) in defaults.bindings {
            self.bindings.entry(key).or_insert(action);
        }
    }

    /// Get the action for a key event
    #[must_use]
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let key_str = key_to_string(code, modifiers);
        self.bindings.get(&key_str).copied()
    }

    /// Set a keybinding
    pub fn set(&mut self, key: &str, action: Action) {
        self.bindings.insert(key.to_string(), action);
    }

    /// Get all bindings for an action
    #[must_use]
    pub fn keys_for_action(&self, action: Action) -> Vec<String> {
        self.bindings
            .iter()
            .filter_map(|(k, &v)| if v == action { Some(k.clone()) } else { None })
            .collect()
    }

    /// Format key(s) for an action for display (e.g., "j/Down")
    #[must_use]
    pub fn format_keys(&self, action: Action) -> String {
        let mut keys = self.keys_for_action(action);
        keys.sort_by(|a, b| {
            let a_simple = a.chars().count() == 1;
            let b_simple = b.chars().count() == 1;
            match (a_simple, b_simple) {
                (true, false) => std::cmp::Ordering::Less,
                (false, true) => std::cmp::Ordering::Greater,
                _ => a.cmp(b),
            }
        });
        keys.iter()
            .map(|k| {
                if k == " " {
                    "Space".to_string()
                } else {
                    k.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Generate status bar hint text
    #[must_use]
    pub fn status_hints(&self, menu_open: bool) -> String {
        let hints: &[(Action, &str)] = if menu_open {
            &[
                (Action::NextAgent, "move"),
                (Action::Confirm, "select"),
                (Action::Cancel, "close"),
                (Action::Quit, "quit"),
            ]
        } else {
            &[(Action::ToggleMenu, "agents"), (Action::Quit, "quit")]
        };

        hints
            .iter()
            .map(|(action, label)| {
                let key = self.format_keys(*action);
                let key = key.split('/').next().unwrap_or_default().to_string();
                format!("[{key}]{label}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Convert a key code and modifiers to a string representation
#[must_use]
pub fn key_to_string(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if modifiers.contains(KeyModifiers::SHIFT) && !matches!(code, KeyCode::Char(_)) {
        parts.push("Shift".to_string());
    }

    let key_part = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return String::new(),
    };

    parts.push(key_part);
    parts.join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keybindings() {
        let keys = KeyBindings::default();

        assert_eq!(
            keys.get_action(KeyCode::Char(' '), KeyModifiers::NONE),
            Some(Action::ToggleMenu)
        );
        assert_eq!(
            keys.get_action(KeyCode::Enter, KeyModifiers::NONE),
            Some(Action::Confirm)
        );
        assert_eq!(
            keys.get_action(KeyCode::Esc, KeyModifiers::NONE),
            Some(Action::Cancel)
        );
        assert_eq!(
            keys.get_action(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_unknown_key() {
        let keys = KeyBindings::default();
        assert_eq!(
            keys.get_action(KeyCode::Char('x'), KeyModifiers::NONE),
            None
        );
    }

    #[test]
    fn test_set_keybinding() {
        let mut keys = KeyBindings::default();
        keys.set("x", Action::Quit);

        assert_eq!(
            keys.get_action(KeyCode::Char('x'), KeyModifiers::NONE),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_format_keys() {
        let keys = KeyBindings::default();
        assert_eq!(keys.format_keys(Action::NextAgent), "j/Down");
        assert_eq!(keys.format_keys(Action::ToggleMenu), "Space/a");
    }

    #[test]
    fn test_status_hints() {
        let keys = KeyBindings::default();
        assert_eq!(keys.status_hints(false), "[Space]agents [q]quit");
        assert!(keys.status_hints(true).contains("[Enter]select"));
    }

    #[test]
    fn test_merge_defaults() {
        let mut keys = KeyBindings {
            bindings: [("x".to_string(), Action::Quit)].into_iter().collect(),
        };
        assert_eq!(
            keys.get_action(KeyCode::Enter, KeyModifiers::NONE),
            None
        );

        keys.merge_defaults();
        assert_eq!(
            keys.get_action(KeyCode::Enter, KeyModifiers::NONE),
            Some(Action::Confirm)
        );
        assert_eq!(
            keys.get_action(KeyCode::Char('x'), KeyModifiers::NONE),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_key_to_string() {
        assert_eq!(key_to_string(KeyCode::Char('a'), KeyModifiers::NONE), "a");
        assert_eq!(
            key_to_string(KeyCode::Char('c'), KeyModifiers::CONTROL),
            "Ctrl+c"
        );
        assert_eq!(key_to_string(KeyCode::Enter, KeyModifiers::NONE), "Enter");
        assert_eq!(key_to_string(KeyCode::F(1), KeyModifiers::NONE), "F1");
        assert_eq!(key_to_string(KeyCode::Insert, KeyModifiers::NONE), "");
    }

    #[test]
    fn test_serde_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let keys = KeyBindings::default();
        let json = serde_json::to_string(&keys)?;
        let parsed: KeyBindings = serde_json::from_str(&json)?;
        assert_eq!(keys, parsed);
        Ok(())
    }
}
