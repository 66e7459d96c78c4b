//! **bordered** -- text fields with the placeholder cut into the border, for
//! [`ratatui`].
//!
//! This is the umbrella crate that re-exports everything from a single
//! dependency:
//!
//! ```toml
//! [dependencies]
//! bordered = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`bordered_core`] are available at the crate root
//!   ([`Component`], [`Model`], [`Command`], [`TerminalEvent`], and the
//!   [`testing`] harness).
//! * The [`field`] module re-exports everything from [`bordered_field`].
//! * [`ratatui`] and [`crossterm`] are re-exported so downstream crates do not
//!   need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use bordered::field::{BorderedField, Message};
//! use bordered::{Command, Component};
//!
//! let mut password = BorderedField::new("Password").secure(true);
//! password.update(Message::Focus);
//!
//! // In the host's event loop:
//! // if let Some(msg) = Message::from_event(event.into()) {
//! //     for out in password.update(msg).into_messages() { ... }
//! // }
//! // terminal.draw(|frame| password.view(frame, area))?;
//! ```

pub use bordered_core::*;
pub mod field {
    pub use bordered_field::*;
}

// Re-export dependencies for downstream crates
pub use crossterm;
pub use ratatui;
