//! Render command recording.
//!
//! The engine never talks to a GPU. The render pass records
//! [`RenderCommand`]s into a [`CommandList`] which the host replays with its
//! own quad, text and scissor primitives after [`crate::Ui::run`] returns.

use glint_shared::{Vec2i, Vec4};

use crate::layout::Rect;
use crate::style::Color;

/// Host-side texture handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// A texture the host has already loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Texture {
    /// Handle the host resolves when replaying commands.
    pub id: TextureId,
    /// Size in texels.
    pub size: Vec2i,
}

impl Texture {
    /// Creates a texture descriptor.
    #[must_use]
    pub const fn new(id: TextureId, size: Vec2i) -> Self {
        Self { id, size }
    }
}

/// A render command for the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Start of the UI overlay: orthographic projection over the whole
    /// window with (0, 0) top-left, alpha blending on, depth test off.
    Viewport {
        /// Window size in physical pixels.
        size: Vec2i,
    },
    /// Filled rectangle.
    Quad {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
    },
    /// Textured quad.
    Texture {
        /// Bounds.
        bounds: Rect,
        /// Texture ID.
        texture: TextureId,
        /// UV coordinates (u0, v0, u1, v1).
        uv: [f32; 4],
    },
    /// Nine-patch stretched texture, see [`nine_patch_vertices`].
    NinePatch {
        /// Bounds.
        bounds: Rect,
        /// Texture ID.
        texture: TextureId,
        /// Texture size in texels.
        texture_size: Vec2i,
        /// Stretchable region as UV fractions (left, top, right, bottom).
        patch: Vec4,
    },
    /// Laid-out text.
    Text {
        /// Text content.
        text: String,
        /// Top-left of the text block.
        origin: Vec2i,
        /// Font size in physical pixels.
        font_size: i32,
        /// Text color.
        color: Color,
        /// Visible window when only part of the block shows.
        clip: Option<Rect>,
    },
    /// Text caret of a focused edit field.
    Caret {
        /// Bounds.
        bounds: Rect,
        /// Caret color.
        color: Color,
    },
    /// Scissor rect (clip children).
    PushClip {
        /// Clip bounds.
        bounds: Rect,
    },
    /// Pop scissor rect.
    PopClip,
}

/// Collects the commands of one frame.
#[derive(Debug, Default)]
pub struct CommandList {
    /// All commands from the frame.
    commands: Vec<RenderCommand>,
    /// Clip stack.
    clip_stack: Vec<Rect>,
}

impl CommandList {
    /// Creates a new command list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(1024),
            clip_stack: Vec::with_capacity(4),
        }
    }

    /// Begins a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
    }

    /// Adds a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Pushes a clip rect.
    pub fn push_clip(&mut self, bounds: Rect) {
        // Intersect with current clip if any
        let actual_clip = if let Some(current) = self.clip_stack.last() {
            current.intersection(&bounds).unwrap_or(Rect::ZERO)
        } else {
            bounds
        };

        self.clip_stack.push(actual_clip);
        self.commands.push(RenderCommand::PushClip {
            bounds: actual_clip,
        });
    }

    /// Pops the current clip rect.
    pub fn pop_clip(&mut self) {
        if self.clip_stack.pop().is_some() {
            self.commands.push(RenderCommand::PopClip);
        }
    }

    /// Returns the current clip rect.
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Commands recorded so far.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Ends the frame and hands the recorded commands to the caller.
    pub fn end_frame(&mut self) -> Vec<RenderCommand> {
        self.clip_stack.clear();
        std::mem::take(&mut self.commands)
    }

    /// Returns the total command count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Vertex for UI rendering.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UiVertex {
    /// Position (x, y).
    pub position: [f32; 2],
    /// UV coordinates.
    pub uv: [f32; 2],
    /// Color (RGBA).
    pub color: [f32; 4],
}

impl UiVertex {
    /// Creates a new vertex.
    #[must_use]
    pub const fn new(x: f32, y: f32, u: f32, v: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
            color,
        }
    }
}

/// Triangle list over the 4x4 vertex grid of [`nine_patch_vertices`].
pub const NINE_PATCH_INDICES: [u16; 54] = nine_patch_indices();

const fn nine_patch_indices() -> [u16; 54] {
    let mut indices = [0u16; 54];
    let mut cell = 0;
    while cell < 9 {
        let row = cell / 3;
        let col = cell % 3;
        let top_left = (row * 4 + col) as u16;
        let base = cell * 6;
        indices[base] = top_left;
        indices[base + 1] = top_left + 4;
        indices[base + 2] = top_left + 1;
        indices[base + 3] = top_left + 1;
        indices[base + 4] = top_left + 4;
        indices[base + 5] = top_left + 5;
        cell += 1;
    }
    indices
}

/// Splits `[start, end]` into four stops whose outer bands keep their texel
/// size, shrinking them proportionally when the span is too small.
fn patch_stops(start: f32, end: f32, texels: f32, lo: f32, hi: f32) -> [f32; 4] {
    let span = (end - start).max(0.0);
    let mut near = texels * lo;
    let mut far = texels * (1.0 - hi);
    if near + far > span && near + far > 0.0 {
        let shrink = span / (near + far);
        near *= shrink;
        far *= shrink;
    }
    [start, start + near, end - far, end]
}

/// Builds the 16 vertices of a nine-patch quad, row-major from the top-left.
///
/// `patch` holds the stretchable region as UV fractions (left, top, right,
/// bottom). The corner bands keep their texel size; the center stretches.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn nine_patch_vertices(
    bounds: Rect,
    texture_size: Vec2i,
    patch: Vec4,
    color: Color,
) -> [UiVertex; 16] {
    let xs = patch_stops(
        bounds.x as f32,
        bounds.right() as f32,
        texture_size.x as f32,
        patch.x,
        patch.z,
    );
    let ys = patch_stops(
        bounds.y as f32,
        bounds.bottom() as f32,
        texture_size.y as f32,
        patch.y,
        patch.w,
    );
    let us = [0.0, patch.x, patch.z, 1.0];
    let vs = [0.0, patch.y, patch.w, 1.0];
    let color = color.to_array();

    let mut vertices = [UiVertex::default(); 16];
    for (row, (&y, &v)) in ys.iter().zip(vs.iter()).enumerate() {
        for (col, (&x, &u)) in xs.iter().zip(us.iter()).enumerate() {
            vertices[row * 4 + col] = UiVertex::new(x, y, u, v, color);
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_list_frame() {
        let mut list = CommandList::new();

        list.begin_frame();
        list.push(RenderCommand::Quad {
            bounds: Rect::new(0, 0, 100, 50),
            color: Color::WHITE,
        });

        let commands = list.end_frame();
        assert_eq!(commands.len(), 1);
        assert!(list.is_empty());
    }

    #[test]
    fn test_clip_stack_intersects() {
        let mut list = CommandList::new();
        list.begin_frame();

        list.push_clip(Rect::new(0, 0, 100, 100));
        list.push_clip(Rect::new(50, 50, 100, 100));
        assert_eq!(list.current_clip(), Some(Rect::new(50, 50, 50, 50)));

        list.pop_clip();
        list.pop_clip();
        assert!(list.current_clip().is_none());
        // A stray pop records nothing.
        list.pop_clip();
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_nine_patch_mesh() {
        let vertices = nine_patch_vertices(
            Rect::new(10, 20, 100, 40),
            Vec2i::new(32, 32),
            Vec4::new(0.25, 0.25, 0.75, 0.75),
            Color::WHITE,
        );

        // 8 texel borders on a 32x32 texture.
        assert_eq!(vertices[0].position, [10.0, 20.0]);
        assert_eq!(vertices[5].position, [18.0, 28.0]);
        assert_eq!(vertices[10].position, [102.0, 52.0]);
        assert_eq!(vertices[15].position, [110.0, 60.0]);
        assert_eq!(vertices[5].uv, [0.25, 0.25]);

        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 16 * std::mem::size_of::<UiVertex>());
        assert!(NINE_PATCH_INDICES.iter().all(|&i| i < 16));
    }

    #[test]
    fn test_nine_patch_shrinks_borders_on_small_quads() {
        let vertices = nine_patch_vertices(
            Rect::new(0, 0, 8, 8),
            Vec2i::new(32, 32),
            Vec4::new(0.25, 0.25, 0.75, 0.75),
            Color::WHITE,
        );
        assert_eq!(vertices[1].position[0], 4.0);
        assert_eq!(vertices[2].position[0], 4.0);
    }
}
