use crate::domain::keybinding::{Action, Keybind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Highest slide number reachable with a digit key.
const MAX_DIGIT_JUMP: u8 = 9;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeySpecError {
    #[error("empty key binding")]
    Empty,
    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),
    #[error("unknown key `{0}`")]
    UnknownKey(String),
}

pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut display_bindings = HashMap::new();
        let mut input_bindings = Vec::new();

        let mut register = |action: Action, key: KeyEvent, is_primary: bool| {
            if is_primary {
                display_bindings.insert(action, key);
            }
            input_bindings.push((key, action));
        };

        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            false,
        );
        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            false,
        );

        register(
            Action::PreviousSlide,
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            true,
        );
        register(
            Action::PreviousSlide,
            KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE),
            false,
        );
        register(
            Action::PreviousSlide,
            KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE),
            false,
        );
        register(
            Action::PreviousSlide,
            KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE),
            false,
        );

        register(
            Action::NextSlide,
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            true,
        );
        register(
            Action::NextSlide,
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE),
            false,
        );
        register(
            Action::NextSlide,
            KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE),
            false,
        );
        register(
            Action::NextSlide,
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            false,
        );
        register(
            Action::NextSlide,
            KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE),
            false,
        );

        register(
            Action::FirstSlide,
            KeyEvent::new(KeyCode::Home, KeyModifiers::NONE),
            true,
        );
        register(
            Action::FirstSlide,
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            false,
        );
        register(
            Action::LastSlide,
            KeyEvent::new(KeyCode::End, KeyModifiers::NONE),
            true,
        );
        register(
            Action::LastSlide,
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            false,
        );

        for digit in 1..=MAX_DIGIT_JUMP {
            register(
                Action::JumpTo(usize::from(digit - 1)),
                KeyEvent::new(KeyCode::Char(char::from(b'0' + digit)), KeyModifiers::NONE),
                true,
            );
        }

        register(
            Action::ToggleTab,
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            true,
        );

        Self {
            display_bindings,
            input_bindings,
        }
    }
}

impl CommandRegistry {
    /// Default bindings with user overrides from the config file applied on top.
    ///
    /// Overrides take precedence over defaults on the same key; entries that
    /// fail to parse are skipped with a warning.
    #[must_use]
    pub fn with_overrides(overrides: &HashMap<String, Action>) -> Self {
        let mut registry = Self::default();

        let mut specs: Vec<_> = overrides.iter().collect();
        specs.sort_by(|a, b| a.0.cmp(b.0));

        for (spec, action) in specs {
            match parse_key_spec(spec) {
                Ok(key) => {
                    debug!(key = spec.as_str(), ?action, "Applying keybinding override");
                    registry.bind(key, *action);
                }
                Err(e) => warn!(key = spec.as_str(), error = %e, "Ignoring keybinding"),
            }
        }

        registry
    }

    /// Binds `key` to `action`, shadowing any existing binding of that key.
    pub fn bind(&mut self, key: KeyEvent, action: Action) {
        self.input_bindings.insert(0, (key, action));
        self.display_bindings.insert(action, key);
    }

    #[must_use]
    pub fn get(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    #[must_use]
    pub fn find_action(&self, key: KeyEvent) -> Option<Action> {
        self.input_bindings
            .iter()
            .find(|(k, _)| k.code == key.code && k.modifiers == key.modifiers)
            .map(|(_, a)| *a)
    }

    /// Footer entry for `action`, if it has a key to show.
    #[must_use]
    pub fn keybind(&self, action: Action, label: &'static str) -> Option<Keybind> {
        self.get(action).map(|key| Keybind::new(key, action, label))
    }
}

pub trait HasCommands {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind>;
}

/// Parses a binding such as `Ctrl+q`, `Alt+Enter`, `G` or `F5`.
///
/// # Errors
///
/// Returns [`KeySpecError`] when a modifier or key name is not recognized.
pub fn parse_key_spec(spec: &str) -> Result<KeyEvent, KeySpecError> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Err(KeySpecError::Empty);
    }

    // A lone "+" is the plus key, not a separator.
    let (modifier_part, key_part) = match spec.rsplit_once('+') {
        Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(mods), "+"),
        Some((mods, key)) => (mods, key),
        None => ("", spec),
    };

    let mut modifiers = KeyModifiers::NONE;
    for modifier in modifier_part.split('+').filter(|m| !m.is_empty()) {
        modifiers |= match modifier.to_ascii_lowercase().as_str() {
            "ctrl" | "control" | "c" => KeyModifiers::CONTROL,
            "alt" | "meta" | "a" => KeyModifiers::ALT,
            "shift" | "s" => KeyModifiers::SHIFT,
            _ => return Err(KeySpecError::UnknownModifier(modifier.to_string())),
        };
    }

    let code = parse_key_code(key_part)?;
    if let KeyCode::Char(c) = code
        && c.is_ascii_uppercase()
    {
        modifiers |= KeyModifiers::SHIFT;
    }

    Ok(KeyEvent::new(code, modifiers))
}

fn parse_key_code(name: &str) -> Result<KeyCode, KeySpecError> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    let lower = name.to_ascii_lowercase();
    let code = match lower.as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "backspace" | "bksp" => KeyCode::Backspace,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        other => match other.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
            Some(n @ 1..=12) => KeyCode::F(n),
            _ => return Err(KeySpecError::UnknownKey(name.to_string())),
        },
    };
    Ok(code)
}
