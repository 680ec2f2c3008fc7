//! Per-nesting-level layout accumulator.
//!
//! In the layout pass a [`Group`] sums up its children's sizes. In the render
//! pass the same record carries the group's resolved size and a cursor that
//! walks over the children as they are placed.

use glint_shared::{Vec2i, Vec4i};

use crate::layout::{align_dimension, Alignment, Direction, Layout};

/// Transient state of one group while it is measured or rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    /// Child arrangement.
    pub direction: Direction,
    /// Cross-axis alignment.
    pub alignment: Alignment,
    /// Gap between consecutive children, physical pixels.
    pub spacing: i32,
    /// Measured size (layout pass) or resolved size (render pass).
    pub size: Vec2i,
    /// Cursor for the next child (render pass).
    pub position: Vec2i,
    /// Index of the element anchoring this group.
    pub element_index: usize,
    /// Physical margin (left, top, right, bottom).
    pub margin: Vec4i,
    children: usize,
}

impl Group {
    /// Creates an empty group anchored on `element_index`.
    #[must_use]
    pub const fn new(layout: Layout, spacing: i32, element_index: usize) -> Self {
        Self {
            direction: layout.direction,
            alignment: layout.alignment,
            spacing,
            size: Vec2i::ZERO,
            position: Vec2i::ZERO,
            element_index,
            margin: Vec4i::ZERO,
            children: 0,
        }
    }

    /// Number of children measured so far.
    #[must_use]
    pub const fn child_count(&self) -> usize {
        self.children
    }

    /// Grows the group by one child, adding spacing unless it is the first.
    pub fn extend(&mut self, child: Vec2i) {
        let gap = if self.children > 0 { self.spacing } else { 0 };
        self.size = match self.direction {
            Direction::Horizontal => {
                Vec2i::new(self.size.x + child.x + gap, self.size.y.max(child.y))
            }
            Direction::Vertical => {
                Vec2i::new(self.size.x.max(child.x), self.size.y + child.y + gap)
            }
            Direction::Overlay => self.size.max(child),
        };
        self.children += 1;
    }

    /// Moves the cursor past a placed child.
    pub fn advance(&mut self, child: Vec2i) {
        match self.direction {
            Direction::Horizontal => self.position.x += child.x + self.spacing,
            Direction::Vertical => self.position.y += child.y + self.spacing,
            // Keep at starting position.
            Direction::Overlay => {}
        }
    }

    /// Top-left of a child of size `child` at the current cursor.
    #[must_use]
    pub fn place(&self, child: Vec2i) -> Vec2i {
        let position = self.position + self.margin.xy();
        let space = self.size - child - self.margin.xy() - self.margin.zw();
        match self.direction {
            Direction::Horizontal => position + align_dimension(self.alignment, 1, space),
            Direction::Vertical => position + align_dimension(self.alignment, 0, space),
            Direction::Overlay => {
                position
                    + align_dimension(self.alignment, 0, space)
                    + align_dimension(self.alignment, 1, space)
            }
        }
    }
}
