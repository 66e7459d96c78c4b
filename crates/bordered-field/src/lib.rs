//! A text field for [`ratatui`] whose placeholder sits in a gap of its
//! rounded border, with secure entry and a show/hide toggle.
//!
//! ```text
//! ╭─ Username ──────────╮      ╭─ Password ──────────╮
//! │ jdoe                │      │ ••••••••          ◌ │
//! ╰─────────────────────╯      ╰─────────────────────╯
//! ```
//!
//! [`BorderedField`](field::BorderedField) implements
//! [`bordered_core::Component`], so it can be embedded in any
//! [`bordered_core::Model`] and placed freely within ratatui layouts.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`field`] | The field component and its messages |
//! | [`border`] | Outline geometry and the outline painter |
//! | [`secure`] | Masking state and the show/hide button |
//! | [`style`] | Colors, styles and [`FieldConfig`](style::FieldConfig) |
//! | [`focus`] | [`FocusRing`](focus::FocusRing) for forms of several fields |
//! | [`key`] | Key bindings for the field's non-editing actions |
//! | [`measure`] | Unicode-aware width measurement and truncation |
//! | [`error`] | [`FieldError`](error::FieldError) |

pub mod border;
pub mod error;
pub mod field;
pub mod focus;
pub mod key;
pub mod measure;
pub mod secure;
pub mod style;

pub use error::FieldError;
pub use field::{BorderedField, Message};
pub use focus::{FocusChange, FocusRing};
pub use key::{FieldKeyMap, KeyChord};
pub use secure::Visibility;
pub use style::{FieldConfig, FieldStyle};
