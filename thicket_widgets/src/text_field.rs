// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-line text input.

use core::fmt;

use kurbo::{Point, Rect};
use thicket_focus::{Direction, Navigation};

use crate::input::{Key, Modifiers, MouseButton};
use crate::surface::{Background, Border, Color, Surface};
use crate::widget::{RenderCx, Widget, WidgetState};

/// Default maximum number of characters.
pub const DEFAULT_MAX_LENGTH: usize = 32;

/// Padding between the border and the text.
const PADDING: f64 = 3.0;

/// Accepts or rejects a candidate text.
pub type TextPredicate = Box<dyn Fn(&str) -> bool>;

/// Notified with the new text after every change.
pub type ChangeListener = Box<dyn FnMut(&str)>;

/// A single-line editable text field.
///
/// While focused, Left and Right arrows move the cursor instead of focus; Tab
/// still leaves the field.
pub struct TextField {
    title: String,
    text: String,
    /// Cursor position in characters.
    cursor: usize,
    /// First character drawn, so the cursor stays in view.
    first_visible: usize,
    max_length: usize,
    editable: bool,
    tooltip: Option<String>,
    predicate: Option<TextPredicate>,
    listener: Option<ChangeListener>,
    border: Border,
    background: Background,
}

impl fmt::Debug for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextField")
            .field("title", &self.title)
            .field("text", &self.text)
            .field("cursor", &self.cursor)
            .field("first_visible", &self.first_visible)
            .field("max_length", &self.max_length)
            .field("editable", &self.editable)
            .field("tooltip", &self.tooltip)
            .field("border", &self.border)
            .field("background", &self.background)
            .finish_non_exhaustive()
    }
}

impl TextField {
    /// An empty field. `title` is shown as a placeholder while the field is empty.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: String::new(),
            cursor: 0,
            first_visible: 0,
            max_length: DEFAULT_MAX_LENGTH,
            editable: true,
            tooltip: None,
            predicate: None,
            listener: None,
            border: Border::new(1.0, Color::BORDER).with_focused_color(Color::WHITE),
            background: Background::new(Color::BLACK),
        }
    }

    /// Only accept texts for which `predicate` returns `true`.
    #[must_use]
    pub fn with_predicate(mut self, predicate: impl Fn(&str) -> bool + 'static) -> Self {
        self.predicate = Some(Box::new(predicate));
        self
    }

    /// Notify `listener` after every change.
    #[must_use]
    pub fn on_change(mut self, listener: impl FnMut(&str) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Limit the text to `max` characters.
    #[must_use]
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = max;
        self
    }

    /// Attach a tooltip.
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// The placeholder title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position, in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the text, truncated to the maximum length, and move the cursor to the end.
    ///
    /// Rejected by the predicate, the text is left unchanged. Returns whether it changed.
    pub fn set_text(&mut self, text: &str) -> bool {
        let truncated: String = text.chars().take(self.max_length).collect();
        if !self.accepts(&truncated) {
            return false;
        }
        self.replace(truncated);
        self.set_cursor_to_end();
        true
    }

    /// Allow or forbid editing. Read-only fields stay focusable.
    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    /// Whether the text can be edited.
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Move the cursor before the first character.
    pub fn set_cursor_to_start(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor after the last character.
    pub fn set_cursor_to_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Replace the border.
    pub fn set_border(&mut self, border: Border) {
        self.border = border;
    }

    /// Replace the background.
    pub fn set_background(&mut self, background: Background) {
        self.background = background;
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn accepts(&self, candidate: &str) -> bool {
        self.predicate.as_ref().is_none_or(|p| p(candidate))
    }

    fn replace(&mut self, text: String) {
        if text == self.text {
            return;
        }
        self.text = text;
        self.cursor = self.cursor.min(self.char_len());
        self.first_visible = self.first_visible.min(self.cursor);
        if let Some(listener) = &mut self.listener {
            listener(&self.text);
        }
    }

    fn insert_char(&mut self, ch: char) -> bool {
        if self.char_len() >= self.max_length {
            return false;
        }
        let mut candidate = self.text.clone();
        candidate.insert(self.byte_index(self.cursor), ch);
        if !self.accepts(&candidate) {
            return false;
        }
        self.cursor += 1;
        self.replace(candidate);
        true
    }

    fn delete_range(&mut self, from: usize, to: usize) -> bool {
        if from >= to {
            return false;
        }
        let mut candidate = self.text.clone();
        candidate.replace_range(self.byte_index(from)..self.byte_index(to), "");
        if !self.accepts(&candidate) {
            return false;
        }
        self.cursor = from;
        self.replace(candidate);
        true
    }

    fn inner_rect(&self, rect: Rect) -> Rect {
        rect.inset(-(self.border.thickness + PADDING))
    }

    fn scroll_to_cursor(&mut self, surface: &dyn Surface, width: f64) {
        self.first_visible = self.first_visible.min(self.cursor);
        loop {
            let start = self.byte_index(self.first_visible);
            let end = self.byte_index(self.cursor);
            if surface.text_width(&self.text[start..end]) <= width || self.first_visible >= self.cursor {
                break;
            }
            self.first_visible += 1;
        }
    }
}

impl Widget for TextField {
    fn render(&mut self, cx: &mut RenderCx<'_>, state: &WidgetState) {
        let rect = state.rect;
        self.background.render(cx.surface, rect);
        self.border.render(cx.surface, rect, state.focused);

        let inner = self.inner_rect(rect);
        self.scroll_to_cursor(cx.surface, inner.width());
        let y = (rect.y0 + (rect.height() - 8.0) / 2.0).floor();
        cx.with_clip(inner, |cx| {
            if self.text.is_empty() && !state.focused {
                cx.surface.draw_text(
                    &self.title,
                    Point::new(inner.x0, y),
                    Color::DISABLED_TEXT.argb(),
                    true,
                );
                return;
            }
            let color = if self.editable {
                Color::TEXT
            } else {
                Color::UNEDITABLE
            };
            let visible = &self.text[self.byte_index(self.first_visible)..];
            cx.surface
                .draw_text(visible, Point::new(inner.x0, y), color.argb(), true);
            if state.focused && self.editable {
                let before = &self.text[self.byte_index(self.first_visible)..self.byte_index(self.cursor)];
                let x = inner.x0 + cx.surface.text_width(before);
                cx.surface
                    .fill_rect(Rect::new(x, y - 1.0, x + 1.0, y + 9.0), Color::TEXT);
            }
        });
    }

    fn mouse_clicked(&mut self, _pointer: Point, button: MouseButton, _state: &WidgetState) -> bool {
        button == MouseButton::Primary
    }

    fn key_pressed(&mut self, key: Key, _modifiers: Modifiers) -> bool {
        match key {
            Key::Home => {
                self.set_cursor_to_start();
                true
            }
            Key::End => {
                self.set_cursor_to_end();
                true
            }
            Key::Backspace if self.editable => {
                let cursor = self.cursor;
                self.delete_range(cursor.saturating_sub(1), cursor);
                true
            }
            Key::Delete if self.editable => {
                let cursor = self.cursor;
                self.delete_range(cursor, (cursor + 1).min(self.char_len()));
                true
            }
            _ => false,
        }
    }

    fn char_typed(&mut self, ch: char) -> bool {
        if !self.editable || ch.is_control() {
            return false;
        }
        self.insert_char(ch);
        true
    }

    fn navigate_within(&mut self, nav: Navigation) -> bool {
        if nav.tab {
            return false;
        }
        match nav.direction {
            Direction::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            Direction::Right => {
                self.cursor = (self.cursor + 1).min(self.char_len());
                true
            }
            Direction::Up | Direction::Down => false,
        }
    }

    fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn typed(field: &mut TextField, text: &str) {
        for ch in text.chars() {
            field.char_typed(ch);
        }
    }

    #[test]
    fn typing_and_deleting() {
        let mut field = TextField::new("Name");
        typed(&mut field, "héllo");
        assert_eq!(field.text(), "héllo");
        assert_eq!(field.cursor(), 5);

        assert!(field.navigate_within(Navigation::arrow(Direction::Left)));
        assert!(field.navigate_within(Navigation::arrow(Direction::Left)));
        field.key_pressed(Key::Backspace, Modifiers::empty());
        assert_eq!(field.text(), "hélo");
        field.key_pressed(Key::Home, Modifiers::empty());
        field.key_pressed(Key::Delete, Modifiers::empty());
        assert_eq!(field.text(), "élo");
        assert_eq!(field.cursor(), 0);
        field.key_pressed(Key::Backspace, Modifiers::empty());
        assert_eq!(field.text(), "élo");
    }

    #[test]
    fn horizontal_arrows_are_consumed_tab_is_not() {
        let mut field = TextField::new("Name");
        assert!(field.navigate_within(Navigation::arrow(Direction::Left)));
        assert!(field.navigate_within(Navigation::arrow(Direction::Right)));
        assert_eq!(field.cursor(), 0);
        assert!(!field.navigate_within(Navigation::arrow(Direction::Down)));
        assert!(!field.navigate_within(Navigation::tab(true)));
    }

    #[test]
    fn predicate_and_max_length_gate_input() {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let log = changes.clone();
        let mut field = TextField::new("Port")
            .with_predicate(|s| s.chars().all(|c| c.is_ascii_digit()))
            .with_max_length(4)
            .on_change(move |s| log.borrow_mut().push(s.to_owned()));
        typed(&mut field, "8a0800");
        assert_eq!(field.text(), "8080");
        assert!(!field.set_text("80x"));
        assert!(field.set_text("443"));
        assert_eq!(field.cursor(), 3);
        assert_eq!(*changes.borrow(), ["8", "80", "808", "8080", "443"]);
    }

    #[test]
    fn read_only_ignores_edits() {
        let mut field = TextField::new("Seed");
        field.set_text("1234");
        field.set_editable(false);
        assert!(!field.char_typed('5'));
        assert!(!field.key_pressed(Key::Backspace, Modifiers::empty()));
        assert_eq!(field.text(), "1234");
    }
}
