//! Component protocol for the **bordered** widgets.
//!
//! `bordered-core` holds the small set of traits and types every widget in the
//! workspace is written against. The design follows the [Elm Architecture]:
//! state changes only through `update`, rendering is a function of state, and
//! anything a widget wants its parent to know travels back as a message inside
//! a [`Command`].
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Component`] | Reusable widget that renders into a [`ratatui::layout::Rect`] |
//! | [`Model`] | Top-level screen owning components (init / update / view) |
//! | [`Command`] | Messages a widget hands back to its parent |
//! | [`TerminalEvent`] | Terminal input converted from crossterm |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit-testing a [`Model`] |
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use event::TerminalEvent;
pub use model::Model;
