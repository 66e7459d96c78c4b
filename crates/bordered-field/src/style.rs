//! Colors, styles and configuration knobs for a [`BorderedField`](crate::field::BorderedField).

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

use crate::error::{ColorRole, FieldError};

/// Default mask character for secure fields.
pub const DEFAULT_MASK: char = '•';

/// Style configuration for the field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldStyle {
    /// Outline and label color while unfocused.
    pub border: Color,
    /// Outline and label color while focused.
    pub highlight: Color,
    /// Style applied to the field text.
    pub text: Style,
    /// Style applied to the placeholder shown in the body of an empty field.
    pub placeholder: Style,
    /// Style applied to the cursor cell.
    pub cursor: Style,
    /// Style applied to the secure-entry toggle icon.
    pub toggle: Style,
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            border: Color::Gray,
            highlight: Color::Blue,
            text: Style::default(),
            placeholder: Style::default().fg(Color::DarkGray),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            toggle: Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
        }
    }
}

impl FieldStyle {
    /// Build the default style with outline colors parsed from strings.
    ///
    /// Accepts anything [`Color`] parses: names (`"gray"`, `"light-blue"`),
    /// indexed colors (`"208"`) and hex (`"#ff8800"`).
    pub fn parse_colors(border: &str, highlight: &str) -> Result<Self, FieldError> {
        Ok(Self {
            border: parse_color(ColorRole::Border, border)?,
            highlight: parse_color(ColorRole::Highlight, highlight)?,
            ..Self::default()
        })
    }

    /// The outline color for the given focus state.
    pub fn stroke_color(&self, focused: bool) -> Color {
        if focused {
            self.highlight
        } else {
            self.border
        }
    }

    /// Style for outline cells.
    pub fn stroke(&self, focused: bool) -> Style {
        Style::default().fg(self.stroke_color(focused))
    }

    /// Style for the label cut into the top edge.
    pub fn label(&self, focused: bool) -> Style {
        self.stroke(focused).add_modifier(Modifier::BOLD)
    }
}

fn parse_color(role: ColorRole, value: &str) -> Result<Color, FieldError> {
    Color::from_str(value.trim()).map_err(|_| FieldError::InvalidColor {
        role,
        value: value.to_string(),
    })
}

/// The configuration knobs of a field, with their defaults.
///
/// Use with [`BorderedField::from_config`](crate::field::BorderedField::from_config)
/// when the settings come from elsewhere; the builder methods on the field
/// cover the same ground.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    /// Whether the field accepts focus and edits.
    pub editable: bool,
    /// Whether the text is masked, with a visibility toggle.
    pub secure: bool,
    /// Whether the placeholder is cut into the top border.
    pub show_border_placeholder: bool,
    /// Outline color while unfocused.
    pub border_color: Color,
    /// Outline color while focused.
    pub highlight_color: Color,
    /// Character shown for each masked character.
    pub mask: char,
    /// Maximum number of characters, if any.
    pub char_limit: Option<usize>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            editable: true,
            secure: false,
            show_border_placeholder: true,
            border_color: Color::Gray,
            highlight_color: Color::Blue,
            mask: DEFAULT_MASK,
            char_limit: None,
        }
    }
}
