//! Single-line text field with its placeholder cut into a rounded border,
//! focus-dependent outline color, read-only mode and secure entry with a
//! show/hide button.

use std::cell::Cell;

use bordered_core::command::Command;
use bordered_core::component::Component;
use bordered_core::event::TerminalEvent;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use ratatui::style::Color;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use ratatui::Frame;

use crate::border::{inner_area, BorderOutline};
use crate::error::FieldError;
use crate::key::{FieldKeyMap, KeyHint};
use crate::measure::{char_width, sanitize, slice_width, truncate_to_width};
use crate::secure::{SecureToggle, ToggleIcons, Visibility};
use crate::style::{FieldConfig, FieldStyle};

/// Messages for the field.
///
/// The first group is input the field reacts to; the second group is output
/// it reports through the returned [`Command`]. Output variants fed back into
/// [`update`](Component::update) are ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A keyboard event to process.
    KeyPress(KeyEvent),
    /// Paste text at the cursor.
    Paste(String),
    /// A mouse event; clicks focus the field or hit the show/hide button.
    Mouse(MouseEvent),
    /// The field gained focus.
    Focus,
    /// The field lost focus.
    Blur,
    /// Flip masking of a secure field.
    ToggleVisibility,

    /// The value changed; carries the new value.
    Changed(String),
    /// Enter was pressed; carries the value. Focus is released right after.
    Submit(String),
    /// The field took focus.
    EditingBegan,
    /// The field released focus; carries the final value.
    EditingEnded(String),
    /// A secure field was revealed or masked again.
    VisibilityChanged(Visibility),
}

impl Message {
    /// Map a terminal event onto a field message.
    ///
    /// Terminal focus events become [`Message::Focus`] / [`Message::Blur`],
    /// which suits a screen with a single field; forms with several fields
    /// route focus with a [`FocusRing`](crate::focus::FocusRing) instead.
    /// Key releases and resizes map to `None`.
    pub fn from_event(event: TerminalEvent) -> Option<Self> {
        if event.is_key_release() {
            return None;
        }
        match event {
            TerminalEvent::Key(key) => Some(Message::KeyPress(key)),
            TerminalEvent::Mouse(mouse) => Some(Message::Mouse(mouse)),
            TerminalEvent::Paste(text) => Some(Message::Paste(text)),
            TerminalEvent::FocusGained => Some(Message::Focus),
            TerminalEvent::FocusLost => Some(Message::Blur),
            TerminalEvent::Resize(..) => None,
        }
    }
}

/// A text field whose placeholder sits in a gap of its rounded outline.
///
/// ```text
/// ╭─ Password ──────────────╮
/// │ ••••••••              ◌ │
/// ╰─────────────────────────╯
/// ```
///
/// The outline is drawn in the highlight color while the field has focus and
/// in the border color otherwise. A field of three or more rows gets the
/// outline; shorter areas render only the text row.
///
/// # Example
///
/// ```ignore
/// let mut password = BorderedField::new("Password")
///     .secure(true)
///     .highlight_color(Color::Magenta);
///
/// password.focus();
///
/// // In your parent's update, forward messages and watch for output:
/// // let cmd = password.update(msg);
///
/// // In your parent's view, delegate rendering:
/// // password.view(frame, area);
/// ```
#[derive(Debug)]
pub struct BorderedField {
    value: Vec<char>,
    cursor: usize,
    offset: Cell<usize>,
    focus: bool,
    placeholder: String,
    config: FieldConfig,
    style: FieldStyle,
    keymap: FieldKeyMap,
    toggle: SecureToggle,
    area: Cell<Option<Rect>>,
    text_area: Cell<Option<Rect>>,
}

impl BorderedField {
    /// Create an empty, editable field with the given placeholder.
    pub fn new(placeholder: impl Into<String>) -> Self {
        let config = FieldConfig::default();
        Self {
            value: Vec::new(),
            cursor: 0,
            offset: Cell::new(0),
            focus: false,
            placeholder: sanitize(&placeholder.into()),
            style: FieldStyle {
                border: config.border_color,
                highlight: config.highlight_color,
                ..FieldStyle::default()
            },
            config,
            keymap: FieldKeyMap::default(),
            toggle: SecureToggle::new(),
            area: Cell::new(None),
            text_area: Cell::new(None),
        }
    }

    /// Create a field from a configuration value.
    ///
    /// Fails if `config.mask` is not a single-column printable character.
    pub fn from_config(
        placeholder: impl Into<String>,
        value: &str,
        config: FieldConfig,
    ) -> Result<Self, FieldError> {
        let field = Self::new(placeholder)
            .with_value(value)
            .try_with_mask(config.mask)?
            .editable(config.editable)
            .secure(config.secure)
            .show_border_placeholder(config.show_border_placeholder)
            .border_color(config.border_color)
            .highlight_color(config.highlight_color);
        Ok(match config.char_limit {
            Some(limit) => field.with_char_limit(limit),
            None => field,
        })
    }

    /// Set the initial value.
    pub fn with_value(mut self, value: &str) -> Self {
        self.set_value(value);
        self
    }

    /// Allow or forbid focus and editing.
    pub fn editable(mut self, editable: bool) -> Self {
        self.set_editable(editable);
        self
    }

    /// Mask the text and show the show/hide button.
    pub fn secure(mut self, secure: bool) -> Self {
        self.set_secure(secure);
        self
    }

    /// Cut the placeholder into the top border (on by default). When off,
    /// the outline is a plain rounded rectangle.
    pub fn show_border_placeholder(mut self, show: bool) -> Self {
        self.config.show_border_placeholder = show;
        self
    }

    /// Outline color while unfocused.
    pub fn border_color(mut self, color: Color) -> Self {
        self.config.border_color = color;
        self.style.border = color;
        self
    }

    /// Outline color while focused.
    pub fn highlight_color(mut self, color: Color) -> Self {
        self.config.highlight_color = color;
        self.style.highlight = color;
        self
    }

    /// Set the maximum number of characters allowed from typing and pasting.
    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.config.char_limit = Some(limit);
        self
    }

    /// Use `mask` for hidden characters of a secure field.
    pub fn try_with_mask(mut self, mask: char) -> Result<Self, FieldError> {
        let toggle = std::mem::take(&mut self.toggle);
        self.toggle = toggle.try_with_mask(mask)?;
        self.config.mask = mask;
        Ok(self)
    }

    /// Replace all styles, including both outline colors.
    pub fn with_style(mut self, style: FieldStyle) -> Self {
        self.config.border_color = style.border;
        self.config.highlight_color = style.highlight;
        self.style = style;
        self
    }

    /// Replace the key bindings.
    pub fn with_keymap(mut self, keymap: FieldKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Replace the show/hide button glyphs.
    pub fn with_toggle_icons(mut self, icons: ToggleIcons) -> Self {
        let toggle = std::mem::take(&mut self.toggle);
        self.toggle = toggle.with_icons(icons);
        self
    }

    /// The current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replace the value and move the cursor to the end.
    pub fn set_value(&mut self, value: &str) {
        self.value = sanitize(value).chars().collect();
        self.cursor = self.value.len();
    }

    /// The placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Replace the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = sanitize(placeholder);
    }

    /// Bring the field in line with state owned by the caller.
    ///
    /// Only what differs is touched, so the cursor survives when the caller
    /// echoes back the value the field just reported. Returns whether
    /// anything changed and the field needs a redraw.
    pub fn sync(&mut self, value: &str, placeholder: &str) -> bool {
        // Stored text is sanitized, so compare against the sanitized input.
        let value = sanitize(value);
        let placeholder = sanitize(placeholder);
        let mut changed = false;
        if self.value() != value {
            self.set_value(&value);
            changed = true;
        }
        if self.placeholder != placeholder {
            self.placeholder = placeholder;
            changed = true;
        }
        changed
    }

    /// Give this field keyboard focus. Read-only fields refuse; returns
    /// whether the field has focus afterwards.
    pub fn focus(&mut self) -> bool {
        if !self.config.editable {
            tracing::debug!(placeholder = %self.placeholder, "read-only field refused focus");
            return false;
        }
        if !self.focus {
            tracing::debug!(placeholder = %self.placeholder, "field focused");
        }
        self.focus = true;
        true
    }

    /// Remove keyboard focus.
    pub fn blur(&mut self) {
        if self.focus {
            tracing::debug!(
                placeholder = %self.placeholder,
                len = self.value.len(),
                "field blurred"
            );
        }
        self.focus = false;
    }

    /// Whether the field has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.focus
    }

    /// Whether the field accepts focus and edits.
    pub fn is_editable(&self) -> bool {
        self.config.editable
    }

    /// Allow or forbid editing. Turning editing off also drops focus.
    pub fn set_editable(&mut self, editable: bool) {
        self.config.editable = editable;
        if !editable {
            self.blur();
        }
    }

    /// Whether the field masks its text.
    pub fn is_secure(&self) -> bool {
        self.config.secure
    }

    /// Turn secure entry on (masked, with the show/hide button) or off
    /// (plain text, no button).
    pub fn set_secure(&mut self, secure: bool) {
        self.config.secure = secure;
        self.toggle.set_visibility(Visibility::Masked);
        if !secure {
            self.toggle.clear_button();
        }
    }

    /// Whether the border placeholder is shown.
    pub fn shows_border_placeholder(&self) -> bool {
        self.config.show_border_placeholder
    }

    /// Masking state of a secure field; always [`Visibility::Revealed`] for
    /// plain fields.
    pub fn visibility(&self) -> Visibility {
        if self.config.secure {
            self.toggle.visibility()
        } else {
            Visibility::Revealed
        }
    }

    /// Flip masking of a secure field. Returns the new state, or `None` for
    /// a plain field.
    pub fn toggle_visibility(&mut self) -> Option<Visibility> {
        if !self.config.secure {
            return None;
        }
        let visibility = self.toggle.toggle();
        tracing::debug!(placeholder = %self.placeholder, ?visibility, "visibility toggled");
        Some(visibility)
    }

    /// The current configuration.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// The current style.
    pub fn style(&self) -> &FieldStyle {
        &self.style
    }

    /// The outline color for the current focus state.
    pub fn stroke_color(&self) -> Color {
        self.style.stroke_color(self.focus)
    }

    /// The text as drawn: masked for a hidden secure field.
    pub fn display_value(&self) -> String {
        self.display_chars().into_iter().collect()
    }

    /// Return the current cursor position (character index).
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Programmatically set the cursor position, clamped to the value.
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.value.len());
    }

    /// Whether the value is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Number of characters in the value.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Help lines for the keys this field answers to, for a host's help bar.
    pub fn key_hints(&self) -> Vec<KeyHint> {
        self.keymap.hints(self.config.secure)
    }

    /// Where the show/hide button was last drawn, if it was.
    pub fn toggle_area(&self) -> Option<Rect> {
        if self.config.secure {
            self.toggle.button_area()
        } else {
            None
        }
    }

    fn display_chars(&self) -> Vec<char> {
        if self.config.secure {
            self.toggle.display(&self.value)
        } else {
            self.value.clone()
        }
    }

    fn changed(&self) -> Command<Message> {
        Command::message(Message::Changed(self.value()))
    }

    fn insert_char(&mut self, c: char) -> Command<Message> {
        if c.is_control() {
            return Command::none();
        }
        if let Some(limit) = self.config.char_limit {
            if self.value.len() >= limit {
                return Command::none();
            }
        }
        self.value.insert(self.cursor, c);
        self.cursor += 1;
        self.changed()
    }

    fn insert_paste(&mut self, text: &str) -> Command<Message> {
        let chars: Vec<char> = sanitize(text).chars().collect();
        let available = match self.config.char_limit {
            Some(limit) => limit.saturating_sub(self.value.len()),
            None => chars.len(),
        };
        let to_insert = &chars[..available.min(chars.len())];
        if to_insert.is_empty() {
            return Command::none();
        }
        for (i, &c) in to_insert.iter().enumerate() {
            self.value.insert(self.cursor + i, c);
        }
        self.cursor += to_insert.len();
        self.changed()
    }

    fn delete_char_backward(&mut self) -> Command<Message> {
        if self.cursor == 0 {
            return Command::none();
        }
        self.cursor -= 1;
        self.value.remove(self.cursor);
        self.changed()
    }

    fn delete_char_forward(&mut self) -> Command<Message> {
        if self.cursor >= self.value.len() {
            return Command::none();
        }
        self.value.remove(self.cursor);
        self.changed()
    }

    fn delete_word_backward(&mut self) -> Command<Message> {
        if self.cursor == 0 {
            return Command::none();
        }
        let mut start = self.cursor;
        while start > 0 && self.value[start - 1] == ' ' {
            start -= 1;
        }
        while start > 0 && self.value[start - 1] != ' ' {
            start -= 1;
        }
        self.value.drain(start..self.cursor);
        self.cursor = start;
        self.changed()
    }

    fn delete_to_start(&mut self) -> Command<Message> {
        if self.cursor == 0 {
            return Command::none();
        }
        self.value.drain(..self.cursor);
        self.cursor = 0;
        self.changed()
    }

    fn delete_to_end(&mut self) -> Command<Message> {
        if self.cursor >= self.value.len() {
            return Command::none();
        }
        self.value.truncate(self.cursor);
        self.changed()
    }

    fn begin_editing(&mut self) -> Command<Message> {
        let was_focused = self.focus;
        if self.focus() && !was_focused {
            Command::message(Message::EditingBegan)
        } else {
            Command::none()
        }
    }

    fn end_editing(&mut self) -> Command<Message> {
        if !self.focus {
            return Command::none();
        }
        self.blur();
        Command::message(Message::EditingEnded(self.value()))
    }

    fn visibility_changed(&mut self) -> Command<Message> {
        match self.toggle_visibility() {
            Some(visibility) => Command::message(Message::VisibilityChanged(visibility)),
            None => Command::none(),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        if key.kind == KeyEventKind::Release || !self.focus || !self.config.editable {
            return Command::none();
        }
        if self.config.secure && self.keymap.is_toggle_visibility(&key) {
            return self.visibility_changed();
        }
        if self.keymap.is_submit(&key) {
            let value = self.value();
            tracing::debug!(placeholder = %self.placeholder, len = self.value.len(), "field submitted");
            return Command::batch([Command::message(Message::Submit(value)), self.end_editing()]);
        }
        match (key.code, key.modifiers) {
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => self.insert_char(c),
            (KeyCode::Backspace, m) if m.contains(KeyModifiers::ALT) => {
                self.delete_word_backward()
            }
            (KeyCode::Char('w'), m) if m.contains(KeyModifiers::CONTROL) => {
                self.delete_word_backward()
            }
            (KeyCode::Backspace, _) => self.delete_char_backward(),
            (KeyCode::Delete, _) => self.delete_char_forward(),
            (KeyCode::Char('u'), m) if m.contains(KeyModifiers::CONTROL) => self.delete_to_start(),
            (KeyCode::Char('k'), m) if m.contains(KeyModifiers::CONTROL) => self.delete_to_end(),
            (KeyCode::Left, _) => {
                self.cursor = self.cursor.saturating_sub(1);
                Command::none()
            }
            (KeyCode::Right, _) => {
                self.cursor = (self.cursor + 1).min(self.value.len());
                Command::none()
            }
            (KeyCode::Home, _) => {
                self.cursor = 0;
                Command::none()
            }
            (KeyCode::Char('a'), m) if m.contains(KeyModifiers::CONTROL) => {
                self.cursor = 0;
                Command::none()
            }
            (KeyCode::End, _) => {
                self.cursor = self.value.len();
                Command::none()
            }
            (KeyCode::Char('e'), m) if m.contains(KeyModifiers::CONTROL) => {
                self.cursor = self.value.len();
                Command::none()
            }
            _ => Command::none(),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Command<Message> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Command::none();
        }
        if self.config.secure && self.toggle.hit(mouse.column, mouse.row) {
            return self.visibility_changed();
        }
        let inside = self
            .area
            .get()
            .is_some_and(|area| area.contains(Position::new(mouse.column, mouse.row)));
        if !inside || !self.config.editable {
            return Command::none();
        }
        if let Some(column) = self.text_column(mouse.column, mouse.row) {
            self.cursor = self.cursor_at_column(column);
        }
        self.begin_editing()
    }

    /// Column offset of a click within the text row, if it landed there.
    fn text_column(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.text_area.get()?;
        if row != area.y || column < area.x || column >= area.right() {
            return None;
        }
        Some((column - area.x) as usize)
    }

    fn cursor_at_column(&self, column: usize) -> usize {
        let display = self.display_chars();
        let mut used = 0;
        for (i, &c) in display.iter().enumerate().skip(self.offset.get()) {
            let w = char_width(c);
            if used + w > column {
                return i;
            }
            used += w;
        }
        display.len()
    }

    /// Scroll offset keeping the cursor cell inside `width` columns. A wide
    /// character under the cursor needs all of its columns.
    fn visible_offset(&self, display: &[char], width: usize) -> usize {
        let cursor_width = display
            .get(self.cursor)
            .map_or(1, |&c| char_width(c).max(1));
        let mut offset = self.offset.get().min(self.cursor);
        while offset < self.cursor
            && slice_width(display, offset, self.cursor) + cursor_width > width
        {
            offset += 1;
        }
        offset
    }

    fn text_line(&self, width: usize) -> Line<'_> {
        let display = self.display_chars();
        let mut spans = Vec::new();

        if display.is_empty() {
            self.offset.set(0);
            let mut room = width;
            if self.focus {
                spans.push(Span::styled(" ", self.style.cursor));
                room = room.saturating_sub(1);
            }
            let placeholder = truncate_to_width(&self.placeholder, room);
            if !placeholder.is_empty() {
                spans.push(Span::styled(placeholder, self.style.placeholder));
            }
            return Line::from(spans);
        }

        // Unfocused fields show the start of the text.
        let offset = if self.focus {
            self.visible_offset(&display, width)
        } else {
            0
        };
        self.offset.set(offset);

        let mut used = 0;
        let mut end = offset;
        while end < display.len() && used + char_width(display[end]) <= width {
            used += char_width(display[end]);
            end += 1;
        }

        if !self.focus {
            let visible: String = display[offset..end].iter().collect();
            spans.push(Span::styled(visible, self.style.text));
            return Line::from(spans);
        }

        let before: String = display[offset..self.cursor.min(end)].iter().collect();
        if !before.is_empty() {
            spans.push(Span::styled(before, self.style.text));
        }
        if self.cursor < end {
            spans.push(Span::styled(
                display[self.cursor].to_string(),
                self.style.cursor,
            ));
            let after: String = display[self.cursor + 1..end].iter().collect();
            if !after.is_empty() {
                spans.push(Span::styled(after, self.style.text));
            }
        } else {
            spans.push(Span::styled(" ", self.style.cursor));
        }
        Line::from(spans)
    }
}

impl Component for BorderedField {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => self.handle_key(key),
            Message::Paste(text) => {
                if !self.focus || !self.config.editable {
                    return Command::none();
                }
                self.insert_paste(&text)
            }
            Message::Mouse(mouse) => self.handle_mouse(mouse),
            Message::Focus => self.begin_editing(),
            Message::Blur => self.end_editing(),
            Message::ToggleVisibility => self.visibility_changed(),
            Message::Changed(_)
            | Message::Submit(_)
            | Message::EditingBegan
            | Message::EditingEnded(_)
            | Message::VisibilityChanged(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let buf = frame.buffer_mut();
        let area = area.intersection(buf.area);
        self.area.set(Some(area));

        let row = if area.height >= 3 {
            BorderOutline::new(&self.placeholder)
                .show_label(self.config.show_border_placeholder)
                .stroke(self.style.stroke(self.focus))
                .label_style(self.style.label(self.focus))
                .render(area, buf);
            let inner = inner_area(area);
            Rect {
                x: inner.x.saturating_add(1),
                y: inner.y + (inner.height - 1) / 2,
                width: inner.width.saturating_sub(2),
                height: 1,
            }
        } else {
            Rect { height: area.height.min(1), ..area }
        };

        let text_area = if self.config.secure {
            self.toggle.render(row, buf, self.style.toggle)
        } else {
            row
        };
        if text_area.width == 0 || text_area.height == 0 {
            self.text_area.set(None);
            return;
        }
        self.text_area.set(Some(text_area));
        self.text_line(text_area.width as usize).render(text_area, buf);
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyChord;
    use bordered_core::testing::{buffer_lines, collect_messages, render_component};
    use crossterm::event::{KeyEventState, KeyModifiers};
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;
    use ratatui::style::Modifier;
    use ratatui::Terminal;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn key_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(code)
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn type_str(field: &mut BorderedField, s: &str) -> Vec<Message> {
        s.chars()
            .flat_map(|c| {
                collect_messages(field.update(Message::KeyPress(key(KeyCode::Char(c)))))
            })
            .collect()
    }

    #[test]
    fn defaults() {
        let field = BorderedField::new("Username");
        assert!(field.shows_border_placeholder());
        assert!(field.is_editable());
        assert!(!field.is_secure());
        assert!(!field.is_focused());
        assert_eq!(field.style().border, Color::Gray);
        assert_eq!(field.style().highlight, Color::Blue);
        assert_eq!(field.value(), "");
        assert_eq!(field.placeholder(), "Username");
    }

    #[test]
    fn stroke_color_follows_focus() {
        let mut field = BorderedField::new("Email")
            .border_color(Color::Yellow)
            .highlight_color(Color::Magenta);
        assert_eq!(field.stroke_color(), Color::Yellow);
        field.update(Message::Focus);
        assert_eq!(field.stroke_color(), Color::Magenta);
        field.update(Message::Blur);
        assert_eq!(field.stroke_color(), Color::Yellow);
    }

    #[test]
    fn typing_reports_each_change() {
        let mut field = BorderedField::new("");
        field.focus();
        let out = type_str(&mut field, "hi");
        assert_eq!(
            out,
            vec![Message::Changed("h".into()), Message::Changed("hi".into())]
        );
        assert_eq!(field.value(), "hi");
    }

    #[test]
    fn unfocused_ignores_keys_and_paste() {
        let mut field = BorderedField::new("");
        assert!(type_str(&mut field, "a").is_empty());
        assert!(collect_messages(field.update(Message::Paste("xyz".into()))).is_empty());
        assert_eq!(field.value(), "");
    }

    #[test]
    fn read_only_refuses_focus_and_edits() {
        let mut field = BorderedField::new("Read Only Field")
            .with_value("This is read-only")
            .editable(false);
        assert!(!field.focus());
        assert!(field.update(Message::Focus).is_none());
        assert!(!field.is_focused());
        assert!(type_str(&mut field, "x").is_empty());
        assert_eq!(field.value(), "This is read-only");
        assert_eq!(field.stroke_color(), Color::Gray);
    }

    #[test]
    fn disabling_editing_drops_focus() {
        let mut field = BorderedField::new("");
        field.focus();
        field.set_editable(false);
        assert!(!field.is_focused());
    }

    #[test]
    fn focus_and_blur_report_editing_bounds() {
        let mut field = BorderedField::new("").with_value("abc");
        assert_eq!(
            collect_messages(field.update(Message::Focus)),
            vec![Message::EditingBegan]
        );
        assert!(field.update(Message::Focus).is_none());
        assert_eq!(
            collect_messages(field.update(Message::Blur)),
            vec![Message::EditingEnded("abc".into())]
        );
        assert!(field.update(Message::Blur).is_none());
    }

    #[test]
    fn enter_submits_then_resigns_focus() {
        let mut field = BorderedField::new("");
        field.focus();
        field.set_value("done");
        let out = collect_messages(field.update(Message::KeyPress(key(KeyCode::Enter))));
        assert_eq!(
            out,
            vec![
                Message::Submit("done".into()),
                Message::EditingEnded("done".into())
            ]
        );
        assert!(!field.is_focused());
        assert_eq!(field.value(), "done");
    }

    #[test]
    fn editing_keys() {
        let mut field = BorderedField::new("");
        field.focus();
        field.set_value("hello world");
        field.update(Message::KeyPress(key_ctrl(KeyCode::Char('w'))));
        assert_eq!(field.value(), "hello ");
        field.update(Message::KeyPress(key(KeyCode::Backspace)));
        assert_eq!(field.value(), "hello");
        field.update(Message::KeyPress(key(KeyCode::Home)));
        field.update(Message::KeyPress(key(KeyCode::Delete)));
        assert_eq!(field.value(), "ello");
        field.update(Message::KeyPress(key(KeyCode::Right)));
        field.update(Message::KeyPress(key_ctrl(KeyCode::Char('k'))));
        assert_eq!(field.value(), "e");
        field.update(Message::KeyPress(key_ctrl(KeyCode::Char('e'))));
        field.update(Message::KeyPress(key_ctrl(KeyCode::Char('u'))));
        assert_eq!(field.value(), "");
        assert_eq!(field.cursor_position(), 0);
    }

    #[test]
    fn cursor_movement_inserts_in_place() {
        let mut field = BorderedField::new("");
        field.focus();
        type_str(&mut field, "abc");
        field.update(Message::KeyPress(key(KeyCode::Left)));
        field.update(Message::KeyPress(key(KeyCode::Left)));
        type_str(&mut field, "x");
        assert_eq!(field.value(), "axbc");
    }

    #[test]
    fn deletes_at_edges_report_nothing() {
        let mut field = BorderedField::new("");
        field.focus();
        assert!(field
            .update(Message::KeyPress(key(KeyCode::Backspace)))
            .is_none());
        assert!(field
            .update(Message::KeyPress(key(KeyCode::Delete)))
            .is_none());
    }

    #[test]
    fn char_limit_caps_typing_and_paste() {
        let mut field = BorderedField::new("").with_char_limit(5);
        field.focus();
        type_str(&mut field, "ab");
        field.update(Message::Paste("cdefgh".into()));
        assert_eq!(field.value(), "abcde");
        assert!(type_str(&mut field, "z").is_empty());
    }

    #[test]
    fn paste_is_sanitized_and_inserted_at_cursor() {
        let mut field = BorderedField::new("");
        field.focus();
        field.set_value("hd");
        field.set_cursor(1);
        let out = collect_messages(field.update(Message::Paste("ello\n worl".into())));
        assert_eq!(out, vec![Message::Changed("hello world".into())]);
        assert_eq!(field.cursor_position(), 10);
    }

    #[test]
    fn secure_field_masks_until_toggled() {
        let mut field = BorderedField::new("Password").secure(true);
        field.focus();
        type_str(&mut field, "sec");
        assert_eq!(field.value(), "sec");
        assert_eq!(field.display_value(), "•••");
        assert_eq!(field.visibility(), Visibility::Masked);

        let toggle = Message::KeyPress(key_ctrl(KeyCode::Char('r')));
        let out = collect_messages(field.update(toggle));
        assert_eq!(out, vec![Message::VisibilityChanged(Visibility::Revealed)]);
        assert_eq!(field.display_value(), "sec");

        field.update(Message::ToggleVisibility);
        assert_eq!(field.display_value(), "•••");
    }

    #[test]
    fn rebound_toggle_shows_in_hints() {
        let keymap = FieldKeyMap {
            toggle_visibility: Some(KeyChord::ctrl(KeyCode::Char('t'))),
            ..FieldKeyMap::default()
        };
        let mut field = BorderedField::new("").secure(true).with_keymap(keymap);
        field.focus();
        assert!(field.update(Message::KeyPress(key_ctrl(KeyCode::Char('r')))).is_none());
        let toggle = Message::KeyPress(key_ctrl(KeyCode::Char('t')));
        assert_eq!(
            collect_messages(field.update(toggle)),
            vec![Message::VisibilityChanged(Visibility::Revealed)]
        );
        let keys: Vec<String> = field.key_hints().into_iter().map(|h| h.keys).collect();
        assert_eq!(keys, vec!["ctrl+t", "enter"]);
    }

    #[test]
    fn plain_field_ignores_toggle() {
        let mut field = BorderedField::new("");
        assert!(field.update(Message::ToggleVisibility).is_none());
        assert_eq!(field.toggle_visibility(), None);
        assert_eq!(field.visibility(), Visibility::Revealed);
    }

    #[test]
    fn switching_secure_resets_masking() {
        let mut field = BorderedField::new("").with_value("pw").secure(true);
        field.toggle_visibility();
        assert_eq!(field.display_value(), "pw");
        field.set_secure(false);
        assert!(!field.is_secure());
        assert_eq!(field.display_value(), "pw");
        field.set_secure(true);
        assert_eq!(field.display_value(), "••");
    }

    #[test]
    fn custom_mask_and_invalid_mask() {
        let field = BorderedField::new("")
            .with_value("abc")
            .secure(true)
            .try_with_mask('*')
            .unwrap();
        assert_eq!(field.display_value(), "***");
        assert!(BorderedField::new("").try_with_mask('\u{0}').is_err());
    }

    #[test]
    fn sync_only_touches_what_differs() {
        let mut field = BorderedField::new("Name").with_value("abc");
        field.set_cursor(1);
        assert!(!field.sync("abc", "Name"));
        assert_eq!(field.cursor_position(), 1);
        assert!(field.sync("abcd", "Name"));
        assert_eq!(field.cursor_position(), 4);
        assert!(field.sync("abcd", "Full name"));
        assert_eq!(field.placeholder(), "Full name");
    }

    #[test]
    fn sync_compares_sanitized_caller_state() {
        let mut field = BorderedField::new("");
        assert!(field.sync("a\tb", "Na\nme"));
        assert_eq!(field.value(), "ab");
        assert_eq!(field.placeholder(), "Name");
        field.set_cursor(0);
        assert!(!field.sync("a\tb", "Na\nme"));
        assert_eq!(field.cursor_position(), 0);
    }

    #[test]
    fn from_config_applies_every_knob() {
        let config = FieldConfig {
            editable: false,
            secure: true,
            show_border_placeholder: false,
            border_color: Color::Green,
            highlight_color: Color::Red,
            mask: '*',
            char_limit: Some(4),
        };
        let field = BorderedField::from_config("Notes", "xy", config.clone()).unwrap();
        assert_eq!(field.config(), &config);
        assert_eq!(field.display_value(), "**");
        assert_eq!(field.stroke_color(), Color::Green);
    }

    #[test]
    fn from_config_rejects_bad_mask() {
        let config = FieldConfig {
            mask: '\t',
            ..FieldConfig::default()
        };
        assert_eq!(
            BorderedField::from_config("", "", config).unwrap_err(),
            FieldError::InvalidMask('\t')
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let mut field = BorderedField::new("");
        field.focus();
        let release = KeyEvent {
            kind: KeyEventKind::Release,
            ..key(KeyCode::Char('a'))
        };
        assert!(field.update(Message::KeyPress(release)).is_none());
        assert_eq!(Message::from_event(TerminalEvent::Key(release)), None);
    }

    #[test]
    fn terminal_events_map_to_messages() {
        assert_eq!(
            Message::from_event(TerminalEvent::FocusGained),
            Some(Message::Focus)
        );
        assert_eq!(
            Message::from_event(TerminalEvent::FocusLost),
            Some(Message::Blur)
        );
        assert_eq!(
            Message::from_event(TerminalEvent::Paste("x".into())),
            Some(Message::Paste("x".into()))
        );
        assert_eq!(Message::from_event(TerminalEvent::Resize(1, 1)), None);
    }

    #[test]
    fn renders_label_in_border_and_value_in_body() {
        let field = BorderedField::new("Username").with_value("jdoe");
        let buf = render_component(&field, 20, 3);
        assert_eq!(
            buffer_lines(&buf),
            vec![
                "╭─ Username ───────╮",
                "│ jdoe             │",
                "╰──────────────────╯",
            ]
        );
    }

    #[test]
    fn renders_plain_outline_when_border_placeholder_hidden() {
        let field = BorderedField::new("Notes")
            .with_value("n")
            .show_border_placeholder(false);
        let buf = render_component(&field, 10, 3);
        assert_eq!(
            buffer_lines(&buf),
            vec!["╭────────╮", "│ n      │", "╰────────╯"]
        );
    }

    #[test]
    fn empty_field_shows_placeholder_in_body() {
        let field = BorderedField::new("Email");
        let buf = render_component(&field, 12, 3);
        assert_eq!(
            buffer_lines(&buf),
            vec!["╭─ Email ──╮", "│ Email    │", "╰──────────╯"]
        );
        assert_eq!(buf[(2, 1)].fg, Color::DarkGray);
    }

    #[test]
    fn outline_and_label_take_stroke_color() {
        let mut field = BorderedField::new("Pw").highlight_color(Color::Magenta);
        let buf = render_component(&field, 10, 3);
        assert_eq!(buf[(0, 0)].fg, Color::Gray);
        assert_eq!(buf[(3, 0)].fg, Color::Gray);

        field.update(Message::Focus);
        let buf = render_component(&field, 10, 3);
        assert_eq!(buf[(0, 0)].fg, Color::Magenta);
        assert_eq!(buf[(9, 2)].fg, Color::Magenta);
        assert_eq!(buf[(3, 0)].fg, Color::Magenta);
        assert!(buf[(3, 0)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn focused_field_draws_cursor() {
        let mut field = BorderedField::new("").with_value("ab");
        field.focus();
        field.set_cursor(1);
        let buf = render_component(&field, 10, 3);
        assert!(buf[(3, 1)].modifier.contains(Modifier::REVERSED));
        assert_eq!(buf[(3, 1)].symbol(), "b");
        assert!(!buf[(2, 1)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn secure_field_renders_mask_and_button() {
        let field = BorderedField::new("Password")
            .with_value("hunter2")
            .secure(true);
        let buf = render_component(&field, 16, 3);
        assert_eq!(
            buffer_lines(&buf),
            vec![
                "╭─ Password ───╮",
                "│ •••••••    ◌ │",
                "╰──────────────╯",
            ]
        );
        assert_eq!(field.toggle_area(), Some(Rect::new(13, 1, 1, 1)));
        assert!(buf[(13, 1)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn clicking_button_reveals_text() {
        let mut field = BorderedField::new("Password")
            .with_value("hunter2")
            .secure(true);
        render_component(&field, 16, 3);
        let out = collect_messages(field.update(Message::Mouse(click(13, 1))));
        assert_eq!(out, vec![Message::VisibilityChanged(Visibility::Revealed)]);
        assert!(!field.is_focused());

        let buf = render_component(&field, 16, 3);
        assert_eq!(buffer_lines(&buf)[1], "│ hunter2    ◉ │");
    }

    #[test]
    fn read_only_secure_field_still_toggles() {
        let mut field = BorderedField::new("Pin")
            .with_value("1234")
            .secure(true)
            .editable(false);
        render_component(&field, 12, 3);
        let button = field.toggle_area().unwrap();
        field.update(Message::Mouse(click(button.x, button.y)));
        assert_eq!(field.display_value(), "1234");
    }

    #[test]
    fn clicking_text_focuses_and_places_cursor() {
        let mut field = BorderedField::new("").with_value("abcdef");
        render_component(&field, 12, 3);
        let out = collect_messages(field.update(Message::Mouse(click(4, 1))));
        assert_eq!(out, vec![Message::EditingBegan]);
        assert!(field.is_focused());
        assert_eq!(field.cursor_position(), 2);
    }

    #[test]
    fn clicking_outside_does_nothing() {
        let mut field = BorderedField::new("").with_value("abc");
        render_component(&field, 12, 3);
        assert!(field.update(Message::Mouse(click(30, 1))).is_none());
        assert!(!field.is_focused());
    }

    #[test]
    fn long_value_scrolls_to_keep_cursor_visible() {
        let mut field = BorderedField::new("").with_value("abcdefghij");
        field.focus();
        let buf = render_component(&field, 8, 3);
        // four text columns: three characters and the cursor cell.
        assert_eq!(buffer_lines(&buf)[1], "│ hij  │");
        assert!(buf[(5, 1)].modifier.contains(Modifier::REVERSED));

        field.update(Message::KeyPress(key(KeyCode::Home)));
        let buf = render_component(&field, 8, 3);
        assert_eq!(buffer_lines(&buf)[1], "│ abcd │");
    }

    #[test]
    fn short_area_renders_text_only() {
        let field = BorderedField::new("Name").with_value("abc");
        let buf = render_component(&field, 6, 1);
        assert_eq!(buffer_lines(&buf), vec!["abc   "]);
    }

    #[test]
    fn tall_area_centers_text_row() {
        let field = BorderedField::new("").with_value("x");
        let buf = render_component(&field, 5, 5);
        assert_eq!(
            buffer_lines(&buf),
            vec!["╭───╮", "│   │", "│ x │", "│   │", "╰───╯"]
        );
    }

    #[test]
    fn wide_char_under_cursor_stays_visible() {
        let mut field = BorderedField::new("").with_value("a名");
        field.focus();
        field.set_cursor(1);
        let buf = render_component(&field, 6, 3);
        assert_eq!(buf[(2, 1)].symbol(), "名");
        assert!(buf[(2, 1)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn area_past_the_frame_is_clipped_before_layout() {
        let field = BorderedField::new("Pass").with_value("pw").secure(true);
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        terminal
            .draw(|frame| field.view(frame, Rect::new(0, 0, 20, 3)))
            .unwrap();
        let buf = terminal.backend().buffer().clone();
        assert_eq!(buffer_lines(&buf)[1], "│ ••   ◌ │");
        assert_eq!(field.toggle_area(), Some(Rect::new(7, 1, 1, 1)));
    }
}
