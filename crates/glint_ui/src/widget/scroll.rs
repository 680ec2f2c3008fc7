//! Scroll regions.
//!
//! A scroll region turns the current group into a clipped window of `size`
//! over its content. Usage:
//!
//! ```text
//! start_group(..); start_scroll(size, &mut offset);
//!     ...content...
//! end_scroll(); end_group();
//! ```

use glint_shared::{Vec2, Vec2i};

use crate::error::UiError;
use crate::gui::Gui;
use crate::id::Id;
use crate::interaction::Event;
use crate::layout::Rect;

impl Gui<'_> {
    /// Makes the current group a scroll region with a visible window of
    /// `size` (virtual units). `offset` is clamped to the scrollable range
    /// and updated from drags and the mouse wheel.
    #[allow(clippy::cast_possible_truncation)]
    pub fn start_scroll(&mut self, size: Vec2, offset: &mut Vec2i) {
        if self.clip.active {
            self.fault(UiError::NestedScroll);
            return;
        }
        let visible = self.virtual_to_physical(size);
        self.clip.active = true;
        self.clip.depth = self.group_stack.len();
        self.clip.size = visible;
        if self.is_layout_pass() {
            return;
        }

        let position = self.group.position;
        let window = Rect::from_pos_size(position, visible);
        self.commands.push_clip(window);
        self.group.size = visible;
        self.clip.position = position;

        let index = self.group.element_index;
        let Some(element) = self.elements.get(index).copied() else {
            return;
        };
        if element.id != Id::SENTINEL {
            // Scroll regions react to drags even when nothing else in them
            // is interactive.
            if let Some(e) = self.elements.get_mut(index) {
                e.interactive = true;
            }
            let event = self.check_event_with(true);
            if let Some(e) = self.elements.get_mut(index) {
                e.interactive = element.interactive;
            }

            if event.contains(Event::START_DRAG) {
                self.capture_pointer(element.id);
            }
            let (delta, speed) = if self.is_pointer_captured(element.id) {
                if event.contains(Event::END_DRAG) {
                    self.release_pointer();
                }
                (self.pointer_delta(), self.scroll_speed_drag)
            } else if window.contains(self.input.pointer(0).position) {
                (self.input.wheel_delta, -self.scroll_speed_wheel)
            } else {
                (Vec2i::ZERO, self.scroll_speed_drag)
            };

            *offset = offset
                .saturating_sub(delta.saturating_mul(speed as i32))
                .max(Vec2i::ZERO)
                .min(element.extra_size);
        }

        let count = self.active_pointers();
        for (i, inside) in self.clip.pointer_inside.iter_mut().enumerate().take(count) {
            if !window.contains(self.input.pointer(i).position) {
                *inside = false;
            }
        }
        self.group.position -= *offset;
    }

    /// Closes the scroll region opened in the current group.
    pub fn end_scroll(&mut self) {
        if !self.clip.active || self.clip.depth != self.group_stack.len() {
            self.fault(UiError::UnbalancedScroll);
            return;
        }
        self.clip.active = false;
        if self.is_layout_pass() {
            let extra = (self.group.size - self.clip.size).max(Vec2i::ZERO);
            if let Some(element) = self.elements.get_mut(self.group.element_index) {
                element.extra_size = extra;
            }
            self.group.size = self.clip.size;
        } else {
            self.clip.pointer_inside.fill(true);
            self.commands.pop_clip();
        }
    }

    /// Visible window of the open scroll region, for culling expensive
    /// custom elements. `None` outside scroll regions and while measuring.
    #[must_use]
    pub fn scroll_clip(&self) -> Option<Rect> {
        (self.clip.active && !self.is_layout_pass())
            .then(|| Rect::from_pos_size(self.clip.position, self.clip.size))
    }
}
