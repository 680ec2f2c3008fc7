//! Caret editor behind the `edit` widget.
//!
//! One session exists process-wide (it lives in the persistent interaction
//! state): only the field that captures the keyboard edits. The session
//! edits the caller's `String` in place, caret positions are char indices.

use glint_shared::Vec2i;

use crate::id::Id;
use crate::input::{Key, TextEvent};
use crate::layout::Rect;

/// Line handling of an edit field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Enter finishes editing, newlines are stripped from input.
    #[default]
    SingleLine,
    /// Enter inserts a newline.
    MultiLine,
}

/// Editing session of the field that holds the keyboard capture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextEdit {
    id: Option<Id>,
    caret: usize,
    mode: EditMode,
    window: Rect,
}

fn byte_index(text: &str, caret: usize) -> usize {
    text.char_indices().nth(caret).map_or(text.len(), |(i, _)| i)
}

impl TextEdit {
    /// Starts editing `text` for field `id` with the caret at the end.
    pub fn initialize(&mut self, id: Id, text: &str, mode: EditMode) {
        self.id = Some(id);
        self.caret = text.chars().count();
        self.mode = mode;
        self.window.x = 0;
        self.window.y = 0;
    }

    /// Ends the session.
    pub fn finish(&mut self) {
        self.id = None;
    }

    /// Field being edited, if any.
    #[must_use]
    pub fn id(&self) -> Option<Id> {
        self.id
    }

    /// Line handling of the current session.
    #[must_use]
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Caret position as a char index.
    #[must_use]
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Moves the caret.
    pub fn set_caret(&mut self, caret: usize) {
        self.caret = caret;
    }

    /// Sets the size of the visible text window.
    pub fn set_window_size(&mut self, size: Vec2i) {
        self.window.width = size.x;
        self.window.height = size.y;
    }

    /// Visible part of the text block (block-local coordinates).
    #[must_use]
    pub fn window(&self) -> Rect {
        self.window
    }

    /// Scrolls the window so the caret at baseline `caret` stays visible.
    pub fn scroll_to_caret(&mut self, caret: Vec2i, font_size: i32) {
        if self.window.width > 0 {
            if caret.x < self.window.x {
                self.window.x = caret.x;
            } else if caret.x >= self.window.right() {
                self.window.x = caret.x - self.window.width + 1;
            }
        }
        if self.window.height > 0 {
            let top = caret.y - font_size;
            if top < self.window.y {
                self.window.y = top.max(0);
            } else if caret.y > self.window.bottom() {
                self.window.y = caret.y - self.window.height;
            }
        }
    }

    /// Applies queued input to `text`. Returns true once editing finished.
    pub fn handle_events(&mut self, events: &[TextEvent], text: &mut String) -> bool {
        let count = text.chars().count();
        self.caret = self.caret.min(count);
        for event in events {
            match event {
                TextEvent::Text(input) => self.insert(text, input),
                TextEvent::Key(Key::Enter) if self.mode == EditMode::MultiLine => {
                    self.insert(text, "\n");
                }
                TextEvent::Key(Key::Enter | Key::Escape) => return true,
                TextEvent::Key(Key::Backspace) => {
                    if self.caret > 0 {
                        self.caret -= 1;
                        text.remove(byte_index(text, self.caret));
                    }
                }
                TextEvent::Key(Key::Delete) => {
                    if self.caret < text.chars().count() {
                        text.remove(byte_index(text, self.caret));
                    }
                }
                TextEvent::Key(Key::Left) => self.caret = self.caret.saturating_sub(1),
                TextEvent::Key(Key::Right) => {
                    self.caret = (self.caret + 1).min(text.chars().count());
                }
                TextEvent::Key(Key::Home) => self.caret = self.line_start(text),
                TextEvent::Key(Key::End) => self.caret = self.line_end(text),
                TextEvent::Key(_) => {}
            }
        }
        false
    }

    fn insert(&mut self, text: &mut String, input: &str) {
        let filtered: String = match self.mode {
            EditMode::SingleLine => input.chars().filter(|&c| c != '\n' && c != '\r').collect(),
            EditMode::MultiLine => input.chars().filter(|&c| c != '\r').collect(),
        };
        text.insert_str(byte_index(text, self.caret), &filtered);
        self.caret += filtered.chars().count();
    }

    fn line_start(&self, text: &str) -> usize {
        text.chars()
            .take(self.caret)
            .collect::<Vec<_>>()
            .iter()
            .rposition(|&c| c == '\n')
            .map_or(0, |i| i + 1)
    }

    fn line_end(&self, text: &str) -> usize {
        text.chars()
            .skip(self.caret)
            .position(|c| c == '\n')
            .map_or(text.chars().count(), |offset| self.caret + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(text: &str, mode: EditMode) -> TextEdit {
        let mut edit = TextEdit::default();
        edit.initialize(Id::new("field"), text, mode);
        edit
    }

    #[test]
    fn test_insert_and_delete() {
        let mut text = String::from("héllo");
        let mut edit = session(&text, EditMode::SingleLine);
        edit.set_caret(1);

        let done = edit.handle_events(
            &[
                TextEvent::Key(Key::Delete),
                TextEvent::Text("e".to_string()),
                TextEvent::Key(Key::End),
                TextEvent::Key(Key::Backspace),
                TextEvent::Text("!\n".to_string()),
            ],
            &mut text,
        );

        assert!(!done);
        assert_eq!(text, "hell!");
        assert_eq!(edit.caret(), 5);
    }

    #[test]
    fn test_enter_finishes_single_line() {
        let mut text = String::from("ok");
        let mut edit = session(&text, EditMode::SingleLine);
        assert!(edit.handle_events(&[TextEvent::Key(Key::Enter)], &mut text));
        assert_eq!(text, "ok");
    }

    #[test]
    fn test_enter_inserts_newline_in_multi_line() {
        let mut text = String::from("ab");
        let mut edit = session(&text, EditMode::MultiLine);
        edit.set_caret(1);
        assert!(!edit.handle_events(&[TextEvent::Key(Key::Enter)], &mut text));
        assert_eq!(text, "a\nb");

        edit.handle_events(&[TextEvent::Key(Key::Home)], &mut text);
        assert_eq!(edit.caret(), 2);
        edit.set_caret(0);
        edit.handle_events(&[TextEvent::Key(Key::End)], &mut text);
        assert_eq!(edit.caret(), 1);
    }

    #[test]
    fn test_caret_clamps_to_text() {
        let mut text = String::from("abc");
        let mut edit = session("much longer text", EditMode::SingleLine);
        edit.handle_events(&[TextEvent::Key(Key::Right)], &mut text);
        assert_eq!(edit.caret(), 3);
    }

    #[test]
    fn test_window_follows_caret() {
        let mut edit = session("", EditMode::SingleLine);
        edit.set_window_size(Vec2i::new(50, 10));
        edit.scroll_to_caret(Vec2i::new(80, 10), 10);
        assert_eq!(edit.window().x, 31);
        edit.scroll_to_caret(Vec2i::new(5, 10), 10);
        assert_eq!(edit.window().x, 5);
    }
}
