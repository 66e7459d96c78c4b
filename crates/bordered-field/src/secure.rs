//! Masking state and the show/hide button of a secure field.

use std::cell::Cell;

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;

use crate::error::FieldError;
use crate::measure::{char_width, text_width};
use crate::style::DEFAULT_MASK;

/// Whether a secure field currently hides its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Each character is shown as the mask character.
    #[default]
    Masked,
    /// The text is shown as typed.
    Revealed,
}

impl Visibility {
    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Masked => Visibility::Revealed,
            Visibility::Revealed => Visibility::Masked,
        }
    }
}

/// Glyphs for the toggle button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleIcons {
    /// Shown while the text is masked (eye with a slash).
    pub masked: String,
    /// Shown while the text is revealed (open eye).
    pub revealed: String,
}

impl Default for ToggleIcons {
    fn default() -> Self {
        Self {
            masked: "◌".to_string(),
            revealed: "◉".to_string(),
        }
    }
}

impl ToggleIcons {
    /// Columns the wider of the two icons needs, so the button does not
    /// shift the text when it flips.
    pub fn width(&self) -> u16 {
        text_width(&self.masked).max(text_width(&self.revealed)) as u16
    }
}

/// The show/hide state of a secure field together with its button.
///
/// The button's screen position is only known once the field is drawn, so
/// [`render`](SecureToggle::render) records it and
/// [`hit`](SecureToggle::hit) tests clicks against it.
#[derive(Debug)]
pub struct SecureToggle {
    visibility: Visibility,
    mask: char,
    icons: ToggleIcons,
    button: Cell<Option<Rect>>,
}

impl Default for SecureToggle {
    fn default() -> Self {
        Self::new()
    }
}

impl SecureToggle {
    /// A toggle starting masked with the default mask and icons.
    pub fn new() -> Self {
        Self {
            visibility: Visibility::Masked,
            mask: DEFAULT_MASK,
            icons: ToggleIcons::default(),
            button: Cell::new(None),
        }
    }

    /// Use `mask` for hidden characters.
    ///
    /// Fails unless `mask` is printable and exactly one column wide, which
    /// keeps cursor positions in the masked text one-to-one with characters.
    pub fn try_with_mask(mut self, mask: char) -> Result<Self, FieldError> {
        if mask.is_control() || char_width(mask) != 1 {
            return Err(FieldError::InvalidMask(mask));
        }
        self.mask = mask;
        Ok(self)
    }

    /// Replace the button glyphs.
    pub fn with_icons(mut self, icons: ToggleIcons) -> Self {
        self.icons = icons;
        self
    }

    /// Current state.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// The mask character.
    pub fn mask(&self) -> char {
        self.mask
    }

    /// The button glyphs.
    pub fn icons(&self) -> &ToggleIcons {
        &self.icons
    }

    /// Whether the text is hidden.
    pub fn is_masked(&self) -> bool {
        self.visibility == Visibility::Masked
    }

    /// Flip between masked and revealed, returning the new state.
    pub fn toggle(&mut self) -> Visibility {
        self.visibility = self.visibility.toggled();
        self.visibility
    }

    /// Force the state.
    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    /// The characters to draw for `value`: one mask character per character
    /// when masked, the value itself when revealed.
    pub fn display(&self, value: &[char]) -> Vec<char> {
        match self.visibility {
            Visibility::Masked => vec![self.mask; value.len()],
            Visibility::Revealed => value.to_vec(),
        }
    }

    /// The icon for the current state.
    pub fn icon(&self) -> &str {
        match self.visibility {
            Visibility::Masked => &self.icons.masked,
            Visibility::Revealed => &self.icons.revealed,
        }
    }

    /// Draw the button at the trailing edge of `row` and remember where it
    /// went. Returns the part of `row` left for text.
    ///
    /// The button is separated from the text by one blank column. A row too
    /// narrow for both keeps all of its width for text and the button is not
    /// drawn.
    pub fn render(&self, row: Rect, buf: &mut Buffer, style: Style) -> Rect {
        let width = self.icons.width();
        if row.height == 0 || row.width < width + 2 {
            self.button.set(None);
            return row;
        }
        let button = Rect {
            x: row.right() - width,
            y: row.y,
            width,
            height: 1,
        };
        buf.set_string(button.x, button.y, self.icon(), style);
        self.button.set(Some(button));
        Rect {
            width: row.width - width - 1,
            ..row
        }
    }

    /// Where the button was last drawn.
    pub fn button_area(&self) -> Option<Rect> {
        self.button.get()
    }

    /// Whether the cell at (`column`, `row`) lies on the last drawn button.
    pub fn hit(&self, column: u16, row: u16) -> bool {
        self.button
            .get()
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }

    /// Forget the recorded button position, e.g. once the field stops being
    /// secure.
    pub(crate) fn clear_button(&self) {
        self.button.set(None);
    }
}
