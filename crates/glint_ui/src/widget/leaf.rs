//! Leaf widgets and raw draws.

use glint_shared::{Vec2, Vec2i, Vec4};

use crate::gui::Gui;
use crate::id::Id;
use crate::layout::Rect;
use crate::render::{CommandList, RenderCommand, Texture};
use crate::text::TextLayout;

/// Largest caret stop of a layout: the natural extent of the text.
fn text_extent(layout: &TextLayout) -> Vec2i {
    layout
        .carets
        .iter()
        .fold(Vec2i::ZERO, |extent, &caret| extent.max(caret))
}

impl Gui<'_> {
    /// Measures (layout pass) or places (render pass) a leaf of `size`.
    ///
    /// Returns the placed top-left in the render pass, `None` while measuring
    /// or when the leaf was not measured this frame.
    pub(crate) fn leaf(&mut self, id: Id, size: Vec2i) -> Option<(Vec2i, Vec2i)> {
        if self.is_layout_pass() {
            self.elements.push(id, size);
            self.group.extend(size);
            return None;
        }
        let index = self.elements.next_matching(id)?;
        let size = self.elements.get(index).map_or(Vec2i::ZERO, |e| e.size);
        let position = self.group.place(size);
        self.group.advance(size);
        Some((position, size))
    }

    /// A texture, `ysize` virtual units tall, width by aspect ratio.
    #[allow(clippy::cast_precision_loss)]
    pub fn image(&mut self, texture: &Texture, ysize: f32) {
        let width = if texture.size.y > 0 {
            texture.size.x as f32 * ysize / texture.size.y as f32
        } else {
            0.0
        };
        let size = self.virtual_to_physical(Vec2::new(width, ysize));
        let id = Id::new("image").with_index(u64::from(texture.id.0));
        if let Some((position, size)) = self.leaf(id, size) {
            self.render_texture(texture, position, size);
        }
    }

    /// Id of `key` scoped to the innermost open group, so equal texts in
    /// different groups stay distinct.
    pub(crate) fn scoped_id(&self, key: &str) -> Id {
        if self.group_stack.is_empty() {
            return Id::new(key);
        }
        self.elements
            .get(self.group.element_index)
            .map_or_else(|| Id::new(key), |group| group.id.child(key))
    }

    /// Single-line text, `ysize` virtual units tall.
    pub fn label(&mut self, text: &str, ysize: f32) {
        self.label_sized(text, ysize, Vec2::ZERO);
    }

    /// Text wrapped to `size` (virtual units). Zero components take the
    /// natural size of the text.
    pub fn label_sized(&mut self, text: &str, ysize: f32, size: Vec2) {
        let bounds = self.virtual_to_physical(size);
        let font_size = self.to_physical(ysize);
        let layout = self.text.layout(text, font_size, bounds, false);
        let window = Rect::from_pos_size(Vec2i::ZERO, layout.size);
        let id = self.scoped_id(text);
        self.text_block(id, text, &layout, window);
    }

    /// Draws the part of a laid-out text under `window` (block-local).
    ///
    /// Returns the on-screen origin of the block, or zero while measuring.
    pub(crate) fn text_block(
        &mut self,
        id: Id,
        text: &str,
        layout: &TextLayout,
        window: Rect,
    ) -> Vec2i {
        let Some((position, _)) = self.leaf(id, window.size()) else {
            return Vec2i::ZERO;
        };
        let extent = text_extent(layout);
        let clipped = window.width > 0
            && window.height > 0
            && (window.x != 0
                || window.y != 0
                || extent.x > window.width
                || extent.y > window.height);
        let origin = position - window.position();
        self.commands.push(RenderCommand::Text {
            text: text.to_string(),
            origin,
            font_size: layout.font_size,
            color: self.text_color,
            clip: clipped.then(|| Rect::from_pos_size(position, window.size())),
        });
        origin
    }

    /// Element drawn by the caller: `render` receives the command list, the
    /// placed position and the size in the render pass.
    pub fn custom_element<F>(&mut self, size: Vec2, id: impl Into<Id>, render: F)
    where
        F: FnOnce(&mut CommandList, Vec2i, Vec2i),
    {
        let size = self.virtual_to_physical(size);
        if let Some((position, size)) = self.leaf(id.into(), size) {
            render(&mut *self.commands, position, size);
        }
    }

    /// Draws `texture` at a physical rectangle. Render pass only.
    pub fn render_texture(&mut self, texture: &Texture, position: Vec2i, size: Vec2i) {
        if !self.is_layout_pass() {
            self.commands.push(RenderCommand::Texture {
                bounds: Rect::from_pos_size(position, size),
                texture: texture.id,
                uv: [0.0, 0.0, 1.0, 1.0],
            });
        }
    }

    /// Draws `texture` as a nine-patch at a physical rectangle. Render pass
    /// only.
    pub fn render_texture_nine_patch(
        &mut self,
        texture: &Texture,
        patch: Vec4,
        position: Vec2i,
        size: Vec2i,
    ) {
        if !self.is_layout_pass() {
            self.commands.push(RenderCommand::NinePatch {
                bounds: Rect::from_pos_size(position, size),
                texture: texture.id,
                texture_size: texture.size,
                patch,
            });
        }
    }
}
