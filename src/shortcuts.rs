//! Key binding tables, loaded from `shortcut.toml` when present.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// All key bindings, grouped by surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shortcuts {
    pub landing: LandingShortcuts,
    pub dashboard: DashboardShortcuts,
    pub auth_modal: AuthModalShortcuts,
    pub text_input: TextInputShortcuts,
}

/// Landing page bindings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandingShortcuts {
    pub quit: Vec<String>,
    pub login: Vec<String>,
    pub signup: Vec<String>,
    pub menu: Vec<String>,
    pub down: Vec<String>,
    pub up: Vec<String>,
    pub select: Vec<String>,
    pub get_started: Vec<String>,
    pub demo: Vec<String>,
    pub features: Vec<String>,
    pub pricing: Vec<String>,
    pub contact_sales: Vec<String>,
    pub close: Vec<String>,
}

/// Dashboard shell bindings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardShortcuts {
    pub quit: Vec<String>,
    pub home: Vec<String>,
    pub logout: Vec<String>,
    pub sidebar: Vec<String>,
    pub menu: Vec<String>,
    pub down: Vec<String>,
    pub up: Vec<String>,
    pub next_tab: Vec<String>,
    pub prev_tab: Vec<String>,
    pub select: Vec<String>,
    pub open_link: Vec<String>,
    pub upload_resume: Vec<String>,
    pub add_job: Vec<String>,
    pub close: Vec<String>,
}

/// Auth modal bindings. Plain characters go to the focused field, so these
/// should be non-printing keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthModalShortcuts {
    pub close: Vec<String>,
    pub submit: Vec<String>,
    pub next_field: Vec<String>,
    pub prev_field: Vec<String>,
    pub switch_mode: Vec<String>,
}

/// Editing bindings inside a text field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextInputShortcuts {
    pub backspace: Vec<String>,
    pub delete: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub home: Vec<String>,
    pub end: Vec<String>,
    pub clear_line: Vec<String>,
}

impl Shortcuts {
    /// Read TOML from `path`, or fall back to the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let shortcuts: Shortcuts = toml::from_str(&content)?;
            tracing::info!("shortcuts loaded from {}", path.display());
            Ok(shortcuts)
        } else {
            Ok(Self::default())
        }
    }
}

fn keys(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

impl Default for Shortcuts {
    fn default() -> Self {
        Self {
            landing: LandingShortcuts {
                quit: keys(&["q"]),
                login: keys(&["l"]),
                signup: keys(&["s"]),
                menu: keys(&["m"]),
                down: keys(&["Down", "j"]),
                up: keys(&["Up", "k"]),
                select: keys(&["Enter"]),
                get_started: keys(&["g"]),
                demo: keys(&["d"]),
                features: keys(&["f"]),
                pricing: keys(&["p"]),
                contact_sales: keys(&["c"]),
                close: keys(&["Esc"]),
            },
            dashboard: DashboardShortcuts {
                quit: keys(&["q"]),
                home: keys(&["g"]),
                logout: keys(&["x"]),
                sidebar: keys(&["b"]),
                menu: keys(&["m"]),
                down: keys(&["Down", "j"]),
                up: keys(&["Up", "k"]),
                next_tab: keys(&["Tab", "Right"]),
                prev_tab: keys(&["BackTab", "Left"]),
                select: keys(&["Enter"]),
                open_link: keys(&["o"]),
                upload_resume: keys(&["u"]),
                add_job: keys(&["a"]),
                close: keys(&["Esc"]),
            },
            auth_modal: AuthModalShortcuts {
                close: keys(&["Esc"]),
                submit: keys(&["Enter"]),
                next_field: keys(&["Tab", "Down"]),
                prev_field: keys(&["BackTab", "Up"]),
                switch_mode: keys(&["Ctrl+t"]),
            },
            text_input: TextInputShortcuts {
                backspace: keys(&["Backspace"]),
                delete: keys(&["Delete"]),
                left: keys(&["Left"]),
                right: keys(&["Right"]),
                home: keys(&["Home"]),
                end: keys(&["End"]),
                clear_line: keys(&["Ctrl+u"]),
            },
        }
    }
}

/// Whether `key` matches any binding in `shortcuts`.
pub fn matches_shortcut(key: &KeyEvent, shortcuts: &[String]) -> bool {
    shortcuts.iter().any(|s| matches_single_shortcut(key, s))
}

/// Binding strings look like "Ctrl+u", "a", "Enter".
fn matches_single_shortcut(key: &KeyEvent, shortcut: &str) -> bool {
    let (modifiers_str, key_str) = match shortcut.rsplit_once('+') {
        Some((mods, k)) if !k.is_empty() => (mods.split('+').collect::<Vec<_>>(), k),
        _ => (Vec::new(), shortcut),
    };

    let mut expected_modifiers = KeyModifiers::empty();
    for modifier in modifiers_str {
        match modifier.to_ascii_lowercase().as_str() {
            "ctrl" => expected_modifiers |= KeyModifiers::CONTROL,
            "alt" => expected_modifiers |= KeyModifiers::ALT,
            "shift" => expected_modifiers |= KeyModifiers::SHIFT,
            _ => return false,
        }
    }

    // Terminals report BackTab with SHIFT set; compare it without modifiers.
    if key_str.eq_ignore_ascii_case("backtab") {
        return key.code == KeyCode::BackTab;
    }

    if key.modifiers != expected_modifiers {
        return false;
    }

    match key_str.to_ascii_lowercase().as_str() {
        "enter" => key.code == KeyCode::Enter,
        "esc" => key.code == KeyCode::Esc,
        "tab" => key.code == KeyCode::Tab,
        "backspace" => key.code == KeyCode::Backspace,
        "delete" => key.code == KeyCode::Delete,
        "up" => key.code == KeyCode::Up,
        "down" => key.code == KeyCode::Down,
        "left" => key.code == KeyCode::Left,
        "right" => key.code == KeyCode::Right,
        "home" => key.code == KeyCode::Home,
        "end" => key.code == KeyCode::End,
        _ => {
            let mut chars = key_str.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => key.code == KeyCode::Char(c),
                _ => false,
            }
        }
    }
}

/// Display form of a binding list ("Down/j").
pub fn format_keys(keys: &[String]) -> String {
    keys.join("/")
}
