//! Editable text field.

use glint_shared::{Vec2, Vec2i};

use crate::gui::Gui;
use crate::id::Id;
use crate::interaction::Event;
use crate::layout::{Layout, Rect};
use crate::render::RenderCommand;
use crate::text_edit::EditMode;

/// Caret blink phase: visible while `sin(ticks / 100) > 0`.
#[allow(clippy::cast_precision_loss)]
fn caret_visible(ticks_ms: u64) -> bool {
    (ticks_ms as f64 / 100.0).sin() > 0.0
}

impl Gui<'_> {
    /// Text field editing `text` in place. `ysize` is the font height and
    /// `size` the field size (virtual units). A zero height, or a height
    /// equal to the font height, makes a single-line field.
    ///
    /// Clicking the field (or moving focus onto it) captures the keyboard.
    /// Returns true while the field is being edited.
    pub fn edit(&mut self, ysize: f32, size: Vec2, id: impl Into<Id>, text: &mut String) -> bool {
        let id = id.into();
        self.start_group(Layout::HORIZONTAL_BOTTOM, 0.0, id);
        let in_edit = self.persistent.focus() == Some(id);
        let event = self.check_event();

        let mut field = self.virtual_to_physical(size);
        let font_size = self.to_physical(ysize);
        let mode = if field.y == 0 || field.y == font_size {
            field.y = font_size;
            EditMode::SingleLine
        } else {
            EditMode::MultiLine
        };

        // Single-line text never wraps, it scrolls inside the field.
        let bounds = match mode {
            EditMode::SingleLine => Vec2i::new(0, field.y),
            EditMode::MultiLine => field,
        };
        let layout = self.text.layout(text, font_size, bounds, true);
        let block = Vec2i::new(
            if field.x > 0 { field.x } else { layout.size.x },
            layout.size.y,
        );
        let editing = in_edit && self.persistent.text_edit.id() == Some(id);
        let window = if editing {
            self.persistent.text_edit.set_window_size(block);
            self.persistent.text_edit.window()
        } else {
            Rect::from_pos_size(Vec2i::ZERO, block)
        };
        let origin = self.text_block(id.child("text"), text, &layout, window);

        if !self.is_layout_pass() {
            let mut show_caret = false;
            let mut pick_caret = event.contains(Event::WENT_DOWN);
            if self.persistent.focus() == Some(id) {
                if self.persistent.input_capture() != Some(id) {
                    self.persistent.text_edit.initialize(id, text, mode);
                    pick_caret = true;
                    self.capture_input(id);
                }
                show_caret = true;
            }
            if pick_caret && self.persistent.text_edit.id() == Some(id) {
                let caret = layout.pick(self.pointer_position() - origin);
                self.persistent.text_edit.set_caret(caret);
            }

            if show_caret {
                let caret = layout.caret_position(self.persistent.text_edit.caret());
                let top = caret.y - font_size;
                if caret.x >= window.x
                    && caret.x <= window.right()
                    && top >= window.y
                    && caret.y <= window.bottom()
                {
                    let caret_rect = Rect::from_pos_size(
                        origin + Vec2i::new(caret.x, top),
                        Vec2i::new(1, font_size),
                    );
                    if caret_visible(self.input.ticks_ms()) {
                        self.commands.push(RenderCommand::Caret {
                            bounds: caret_rect,
                            color: self.text_color,
                        });
                    }
                    self.input.set_text_input_rect(caret_rect);
                }

                // Input is applied after drawing, the frame shows the
                // text as it was laid out.
                let events = self.input.text_events().to_vec();
                self.input.clear_text_events();
                let finished = self.persistent.text_edit.handle_events(&events, text);
                if finished {
                    self.release_input();
                } else {
                    let layout = self.text.layout(text, font_size, bounds, true);
                    let caret = layout.caret_position(self.persistent.text_edit.caret());
                    self.persistent.text_edit.scroll_to_caret(caret, font_size);
                }
            }
        }

        self.end_group();
        in_edit
    }
}
