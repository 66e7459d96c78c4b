use crossterm::event::{KeyEvent, KeyEventKind, MouseEvent};

/// Terminal input as seen by components.
///
/// Each variant wraps the corresponding [`crossterm::event::Event`] payload,
/// so hosts can read crossterm events however they like and convert them with
/// `TerminalEvent::from`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event.
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Terminal window gained focus.
    FocusGained,
    /// Terminal window lost focus.
    FocusLost,
    /// Bracketed paste content.
    Paste(String),
}

impl TerminalEvent {
    /// Whether this is a key release. Terminals with the kitty keyboard
    /// protocol report both press and release; widgets act on presses only.
    pub fn is_key_release(&self) -> bool {
        matches!(self, TerminalEvent::Key(k) if k.kind == KeyEventKind::Release)
    }
}

impl From<crossterm::event::Event> for TerminalEvent {
    fn from(event: crossterm::event::Event) -> Self {
        match event {
            crossterm::event::Event::Key(k) => TerminalEvent::Key(k),
            crossterm::event::Event::Mouse(m) => TerminalEvent::Mouse(m),
            crossterm::event::Event::Resize(w, h) => TerminalEvent::Resize(w, h),
            crossterm::event::Event::FocusGained => TerminalEvent::FocusGained,
            crossterm::event::Event::FocusLost => TerminalEvent::FocusLost,
            crossterm::event::Event::Paste(s) => TerminalEvent::Paste(s),
        }
    }
}
