//! Keyboard focus routing across the fields of a form.

use crate::field::{BorderedField, Message};

/// Which slots lost and gained focus after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusChange {
    /// The slot that had focus before, if it changed.
    pub blurred: Option<usize>,
    /// The slot that has focus now.
    pub focused: Option<usize>,
}

impl FocusChange {
    const NONE: FocusChange = FocusChange {
        blurred: None,
        focused: None,
    };

    /// Whether focus moved at all.
    pub fn is_empty(&self) -> bool {
        self.blurred.is_none() && self.focused.is_none()
    }

    /// The `Blur` / `Focus` messages to deliver, paired with their slot.
    pub fn messages(&self) -> Vec<(usize, Message)> {
        let mut out = Vec::new();
        if let Some(i) = self.blurred {
            out.push((i, Message::Blur));
        }
        if let Some(i) = self.focused {
            out.push((i, Message::Focus));
        }
        out
    }
}

/// Tracks which of `len` fields has keyboard focus.
///
/// Slots marked unfocusable (read-only fields) are skipped by
/// [`next`](FocusRing::next) and [`prev`](FocusRing::prev) and refused by
/// [`focus`](FocusRing::focus). The ring only does bookkeeping; the parent
/// delivers the returned [`FocusChange`] to the fields.
#[derive(Debug, Clone)]
pub struct FocusRing {
    focusable: Vec<bool>,
    current: Option<usize>,
}

impl FocusRing {
    /// A ring of `len` focusable slots with nothing focused.
    pub fn new(len: usize) -> Self {
        Self {
            focusable: vec![true; len],
            current: None,
        }
    }

    /// A ring matching `fields`, with read-only fields unfocusable.
    pub fn for_fields<'a>(fields: impl IntoIterator<Item = &'a BorderedField>) -> Self {
        Self {
            focusable: fields.into_iter().map(BorderedField::is_editable).collect(),
            current: None,
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.focusable.len()
    }

    /// Whether the ring has no slots.
    pub fn is_empty(&self) -> bool {
        self.focusable.is_empty()
    }

    /// The focused slot, if any.
    pub fn focused(&self) -> Option<usize> {
        self.current
    }

    /// Whether `index` has focus.
    pub fn is_focused(&self, index: usize) -> bool {
        self.current == Some(index)
    }

    /// Mark a slot focusable or not. Making the focused slot unfocusable
    /// clears focus and reports it as blurred.
    pub fn set_focusable(&mut self, index: usize, focusable: bool) -> FocusChange {
        let Some(slot) = self.focusable.get_mut(index) else {
            return FocusChange::NONE;
        };
        *slot = focusable;
        if !focusable && self.current == Some(index) {
            self.current = None;
            return FocusChange {
                blurred: Some(index),
                focused: None,
            };
        }
        FocusChange::NONE
    }

    /// Focus `index`, clamped to the last slot. Unfocusable slots are
    /// refused.
    pub fn focus(&mut self, index: usize) -> FocusChange {
        if self.is_empty() {
            return FocusChange::NONE;
        }
        let index = index.min(self.len() - 1);
        if !self.focusable[index] {
            return FocusChange::NONE;
        }
        self.move_to(Some(index))
    }

    /// Drop focus entirely.
    pub fn clear(&mut self) -> FocusChange {
        self.move_to(None)
    }

    /// Move to the next focusable slot, wrapping after the last.
    pub fn next(&mut self) -> FocusChange {
        let start = self.current.map_or(0, |i| i + 1);
        let target = self.scan(start, |i, n| (i + 1) % n);
        self.move_to(target.or(self.current))
    }

    /// Move to the previous focusable slot, wrapping before the first.
    pub fn prev(&mut self) -> FocusChange {
        let n = self.len();
        if n == 0 {
            return FocusChange::NONE;
        }
        let start = self.current.map_or(n - 1, |i| (i + n - 1) % n);
        let target = self.scan(start, |i, n| (i + n - 1) % n);
        self.move_to(target.or(self.current))
    }

    fn scan(&self, start: usize, step: impl Fn(usize, usize) -> usize) -> Option<usize> {
        let n = self.len();
        if n == 0 {
            return None;
        }
        let mut i = start % n;
        for _ in 0..n {
            if self.focusable[i] {
                return Some(i);
            }
            i = step(i, n);
        }
        None
    }

    fn move_to(&mut self, target: Option<usize>) -> FocusChange {
        if target == self.current {
            return FocusChange::NONE;
        }
        let change = FocusChange {
            blurred: self.current,
            focused: target,
        };
        self.current = target;
        change
    }
}
