// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-line text field with a cursor/selection edit buffer.
//!
//! ## Indices
//!
//! `cursor` and the optional selection `anchor` count characters (Unicode scalar values), not
//! bytes, and always lie in `[0, char count]`. The selection is the range between anchor and
//! cursor; an anchor equal to the cursor is an empty selection.
//!
//! ## Editing keys
//!
//! | Key | Effect |
//! |-----|--------|
//! | `ArrowLeft` / `ArrowRight` | Move one character; with `Shift` extend the selection, without it collapse a non-empty selection to its edge. |
//! | `Home` / `End` | Move to start / end; `Shift` extends. |
//! | `Backspace` / `Delete` | Remove the selection, else the character before / after the cursor. |
//! | `Ctrl+A` | Select all. |
//! | `Enter` | Emit [`Submitted`](UiEvent::Submitted). |

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use kurbo::Rect;

use crate::types::{Capabilities, Key, Modifiers, UiEvent, WidgetId};
use crate::widget::{Widget, WidgetCore};

/// An editable text field.
#[derive(Clone, Debug)]
pub struct TextInput {
    core: WidgetCore,
    content: String,
    cursor: usize,
    anchor: Option<usize>,
}

impl TextInput {
    /// Create an empty text field.
    pub fn new(id: WidgetId, bounds: Rect) -> Self {
        Self {
            core: WidgetCore::new(id, bounds, Capabilities::EDITABLE),
            content: String::new(),
            cursor: 0,
            anchor: None,
        }
    }

    /// Builder-style initial content; the cursor goes to the end.
    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    /// Builder-style z-order.
    pub fn with_z_order(mut self, z_order: i32) -> Self {
        self.core = self.core.with_z_order(z_order);
        self
    }

    /// Current content.
    pub fn text(&self) -> &str {
        &self.content
    }

    /// Content length in characters.
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Cursor index in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Selection anchor in characters, if a selection is being made.
    pub fn selection_anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// The non-empty selected character range, if any.
    pub fn selection(&self) -> Option<Range<usize>> {
        let anchor = self.anchor?;
        if anchor == self.cursor {
            return None;
        }
        Some(anchor.min(self.cursor)..anchor.max(self.cursor))
    }

    /// The selected text, if any.
    pub fn selected_text(&self) -> Option<&str> {
        let sel = self.selection()?;
        Some(&self.content[self.byte_at(sel.start)..self.byte_at(sel.end)])
    }

    /// Replace the content programmatically. The cursor moves to the end and the selection
    /// is cleared. No event is emitted.
    pub fn set_text(&mut self, text: &str) {
        self.content = text.into();
        self.cursor = self.char_len();
        self.anchor = None;
    }

    /// Move the cursor, optionally extending the selection from the current position.
    pub fn set_cursor(&mut self, index: usize, extend: bool) {
        if extend {
            self.anchor.get_or_insert(self.cursor);
        } else {
            self.anchor = None;
        }
        self.cursor = index.min(self.char_len());
    }

    fn byte_at(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.content.len())
    }

    fn remove_chars(&mut self, range: Range<usize>) {
        let (start, end) = (self.byte_at(range.start), self.byte_at(range.end));
        self.content.replace_range(start..end, "");
        self.cursor = range.start;
        self.anchor = None;
        self.clamp_indices();
    }

    fn clamp_indices(&mut self) {
        let len = self.char_len();
        self.cursor = self.cursor.min(len);
        self.anchor = self.anchor.map(|a| a.min(len));
    }

    fn changed(&self, events: &mut Vec<UiEvent>) {
        events.push(UiEvent::TextChanged {
            widget_id: self.core.id(),
            new_content: self.content.clone(),
        });
    }

    fn step(&mut self, forward: bool, extend: bool) {
        if !extend && let Some(sel) = self.selection() {
            self.cursor = if forward { sel.end } else { sel.start };
            self.anchor = None;
            return;
        }
        let target = if forward {
            self.cursor + 1
        } else {
            self.cursor.saturating_sub(1)
        };
        self.set_cursor(target, extend);
    }

    fn delete(&mut self, forward: bool) -> bool {
        if let Some(sel) = self.selection() {
            self.remove_chars(sel);
            return true;
        }
        self.anchor = None;
        if forward && self.cursor < self.char_len() {
            self.remove_chars(self.cursor..self.cursor + 1);
            true
        } else if !forward && self.cursor > 0 {
            self.remove_chars(self.cursor - 1..self.cursor);
            true
        } else {
            false
        }
    }
}

impl Widget for TextInput {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    fn kind(&self) -> &'static str {
        "text_input"
    }

    fn on_key(&mut self, key: Key, modifiers: Modifiers, events: &mut Vec<UiEvent>) {
        let extend = modifiers.contains(Modifiers::SHIFT);
        let command = modifiers.intersects(Modifiers::CTRL | Modifiers::META);
        match key {
            Key::ArrowLeft => self.step(false, extend),
            Key::ArrowRight => self.step(true, extend),
            Key::Home => self.set_cursor(0, extend),
            Key::End => self.set_cursor(self.char_len(), extend),
            Key::Backspace | Key::Delete => {
                if self.delete(key == Key::Delete) {
                    self.changed(events);
                }
            }
            Key::Character('a' | 'A') if command => {
                self.anchor = Some(0);
                self.cursor = self.char_len();
            }
            Key::Enter => events.push(UiEvent::Submitted {
                widget_id: self.core.id(),
                content: self.content.clone(),
            }),
            Key::Escape | Key::Tab | Key::Character(_) => {}
        }
        self.clamp_indices();
    }

    fn on_text(&mut self, text: &str, events: &mut Vec<UiEvent>) {
        let insert: String = text.chars().filter(|c| !c.is_control()).collect();
        if insert.is_empty() {
            return;
        }
        if let Some(sel) = self.selection() {
            self.remove_chars(sel);
        }
        let at = self.byte_at(self.cursor);
        self.content.insert_str(at, &insert);
        self.cursor += insert.chars().count();
        self.anchor = None;
        self.clamp_indices();
        self.changed(events);
    }
}
