//! Errors raised while configuring a field.

use std::fmt;

/// Which of the two outline colors a value was meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    /// Outline color while the field is unfocused.
    Border,
    /// Outline color while the field has focus.
    Highlight,
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorRole::Border => f.write_str("border"),
            ColorRole::Highlight => f.write_str("highlight"),
        }
    }
}

/// Errors that can occur while building a [`BorderedField`](crate::field::BorderedField)
/// or its style.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// A color string was neither a named color, an indexed color, nor `#rrggbb`.
    #[error("invalid {role} color `{value}`")]
    InvalidColor {
        /// The color the value was given for.
        role: ColorRole,
        /// The rejected input.
        value: String,
    },
    /// The mask character must occupy exactly one terminal column.
    #[error("mask character {0:?} is not a single-column printable character")]
    InvalidMask(char),
}
