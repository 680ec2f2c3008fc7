//! Groups and their decorations.

use glint_shared::{Vec2i, Vec4};

use crate::error::UiError;
use crate::group::Group;
use crate::gui::Gui;
use crate::id::Id;
use crate::layout::{align_dimension, Alignment, Direction, Layout, Margin, Rect};
use crate::render::{RenderCommand, Texture};
use crate::style::Color;

impl Gui<'_> {
    /// Opens a group. `spacing` (virtual units) separates its children.
    ///
    /// Must be closed by [`Gui::end_group`] in the same pass.
    pub fn start_group(&mut self, layout: Layout, spacing: f32, id: impl Into<Id>) {
        let id = id.into();
        let spacing = self.to_physical(spacing);
        let group = if self.is_layout_pass() {
            let index = self.elements.push(id, Vec2i::ZERO);
            Group::new(layout, spacing, index)
        } else if let Some(index) = self.elements.next_matching(id) {
            let size = self.elements.get(index).map_or(Vec2i::ZERO, |e| e.size);
            let mut group = Group::new(layout, spacing, index);
            group.position = self.group.place(size);
            group.size = size;
            group
        } else {
            // Not measured: anchor on the sentinel at the parent's cursor.
            let mut group = Group::new(layout, spacing, self.elements.sentinel_index());
            group.position = self.group.position;
            group
        };
        self.group_stack.push(std::mem::replace(&mut self.group, group));
    }

    /// Closes the innermost group and contributes its size to the parent.
    pub fn end_group(&mut self) {
        let Some(parent) = self.group_stack.pop() else {
            self.fault(UiError::GroupUnderflow);
            return;
        };
        let closing = std::mem::replace(&mut self.group, parent);
        let index = closing.element_index;

        if self.is_layout_pass() {
            let size = closing.size + closing.margin.xy() + closing.margin.zw();
            self.group.extend(size);
            if let Some(element) = self.elements.get_mut(index) {
                element.size = size;
            }
            if self.group.direction == Direction::Overlay {
                // Only the last layer of an overlay takes input.
                let first = self.group.element_index + 1;
                for element in self.elements.elements_mut().iter_mut().take(index).skip(first) {
                    element.interactive = false;
                }
            }
        } else {
            let size = self.elements.get(index).map_or(Vec2i::ZERO, |e| e.size);
            self.group.advance(size);
        }
    }

    /// Sets the margin of the current group.
    pub fn set_margin(&mut self, margin: Margin) {
        self.group.margin = self.virtual_to_physical4(margin.borders);
    }

    /// Places the whole UI inside the window.
    ///
    /// Called before the root group: in the layout pass it switches the
    /// virtual resolution, in the render pass it aligns the root inside the
    /// window.
    pub fn position_ui(
        &mut self,
        virtual_resolution: f32,
        horizontal: Alignment,
        vertical: Alignment,
    ) {
        if self.is_layout_pass() {
            self.set_virtual_resolution(virtual_resolution);
        } else {
            let space = self.window_size() - self.group.size;
            self.group.position +=
                align_dimension(horizontal, 0, space) + align_dimension(vertical, 1, space);
        }
    }

    /// Size of the current group including scrollable content.
    #[must_use]
    pub fn group_size(&self) -> Vec2i {
        let extra = self
            .elements
            .get(self.group.element_index)
            .map_or(Vec2i::ZERO, |e| e.extra_size);
        self.group.size + extra
    }

    fn group_rect(&self) -> Rect {
        Rect::from_pos_size(self.group.position, self.group_size())
    }

    /// Fills the current group with a solid color.
    pub fn color_background(&mut self, color: Color) {
        if !self.is_layout_pass() && !color.is_transparent() {
            let bounds = self.group_rect();
            self.commands.push(RenderCommand::Quad { bounds, color });
        }
    }

    /// Stretches a texture over the current group.
    pub fn image_background(&mut self, texture: &Texture) {
        if !self.is_layout_pass() {
            let bounds = self.group_rect();
            self.render_texture(texture, bounds.position(), bounds.size());
        }
    }

    /// Nine-patch texture over the current group.
    pub fn image_background_nine_patch(&mut self, texture: &Texture, patch: Vec4) {
        let bounds = self.group_rect();
        self.render_texture_nine_patch(texture, patch, bounds.position(), bounds.size());
    }

    /// Color of subsequent labels and edit fields.
    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }
}
