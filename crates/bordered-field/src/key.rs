//! Key bindings for the field's non-editing actions.
//!
//! Editing keys (characters, Backspace, arrows, ...) are fixed. The two
//! actions a host may want to move or switch off live in [`FieldKeyMap`].

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key together with the modifiers that must be held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyChord {
    /// The bare key.
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// The key with Ctrl held.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    /// Whether `event` presses this key with at least these modifiers held.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.code == event.code && event.modifiers.contains(self.modifiers)
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            f.write_str("ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            f.write_str("alt+")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            f.write_str("shift+")?;
        }
        match self.code {
            KeyCode::Char(' ') => f.write_str("space"),
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::Enter => f.write_str("enter"),
            KeyCode::Tab => f.write_str("tab"),
            KeyCode::Esc => f.write_str("esc"),
            KeyCode::F(n) => write!(f, "f{n}"),
            other => f.write_str(&format!("{other:?}").to_lowercase()),
        }
    }
}

/// A line of help text for one binding: the chord as typed and what it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub keys: String,
    pub action: &'static str,
}

/// Bindings for the actions a field performs besides editing text.
///
/// `None` switches an action off. A secure field without a visibility
/// binding can still be toggled by clicking its button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldKeyMap {
    /// Reveal or re-mask a secure field.
    pub toggle_visibility: Option<KeyChord>,
    /// Submit the value and give up focus.
    pub submit: Option<KeyChord>,
}

impl Default for FieldKeyMap {
    fn default() -> Self {
        Self {
            toggle_visibility: Some(KeyChord::ctrl(KeyCode::Char('r'))),
            submit: Some(KeyChord::plain(KeyCode::Enter)),
        }
    }
}

impl FieldKeyMap {
    pub fn is_toggle_visibility(&self, event: &KeyEvent) -> bool {
        self.toggle_visibility.is_some_and(|k| k.matches(event))
    }

    pub fn is_submit(&self, event: &KeyEvent) -> bool {
        self.submit.is_some_and(|k| k.matches(event))
    }

    /// Help lines for the bound actions. The visibility toggle is listed only
    /// for secure fields.
    pub fn hints(&self, secure: bool) -> Vec<KeyHint> {
        let toggle = self.toggle_visibility.filter(|_| secure);
        [(toggle, "show/hide"), (self.submit, "submit")]
            .into_iter()
            .filter_map(|(chord, action)| {
                chord.map(|k| KeyHint {
                    keys: k.to_string(),
                    action,
                })
            })
            .collect()
    }
}
