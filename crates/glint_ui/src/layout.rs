//! Layout vocabulary: rectangles, directions, alignment, margins.
//!
//! Everything here is a pure value type. The stateful accumulator that uses
//! them lives in [`crate::group`].

use glint_shared::{Vec2i, Vec4};

/// A rectangle in physical screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    /// X position (left edge).
    pub x: i32,
    /// Y position (top edge).
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from position and size.
    #[must_use]
    pub const fn from_pos_size(pos: Vec2i, size: Vec2i) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    /// Top-left corner.
    #[must_use]
    pub const fn position(&self) -> Vec2i {
        Vec2i::new(self.x, self.y)
    }

    /// Width and height.
    #[must_use]
    pub const fn size(&self) -> Vec2i {
        Vec2i::new(self.width, self.height)
    }

    /// Returns the right edge.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Returns true if the point is inside the rectangle (right/bottom edges excluded).
    #[must_use]
    pub fn contains(&self, point: Vec2i) -> bool {
        point.in_range(self.position(), self.position() + self.size())
    }

    /// Returns true if two rectangles intersect.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Returns the intersection of two rectangles, or None if they don't intersect.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }

        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        Some(Self::new(x, y, right - x, bottom - y))
    }
}

/// How a group arranges its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Stacked on the same origin; only the last child takes input.
    Overlay,
}

/// Placement of a child inside the slack of its group.
///
/// Horizontal groups align children vertically, vertical groups align them
/// horizontally, overlay groups align on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Align to start (left/top).
    #[default]
    Start,
    /// Align to center.
    Center,
    /// Align to end (right/bottom).
    End,
}

impl Alignment {
    /// Top edge (horizontal groups).
    pub const TOP: Self = Self::Start;
    /// Bottom edge (horizontal groups).
    pub const BOTTOM: Self = Self::End;
    /// Left edge (vertical groups).
    pub const LEFT: Self = Self::Start;
    /// Right edge (vertical groups).
    pub const RIGHT: Self = Self::End;

    /// Offset of a child inside `space` pixels of slack along one axis.
    #[must_use]
    pub const fn offset(self, space: i32) -> i32 {
        match self {
            Self::Start => 0,
            Self::Center => space / 2,
            Self::End => space,
        }
    }
}

/// Offset vector that aligns along a single axis (0 = x, 1 = y) of `space`.
#[must_use]
pub fn align_dimension(alignment: Alignment, axis: usize, space: Vec2i) -> Vec2i {
    let offset = alignment.offset(space.axis(axis));
    if axis == 0 {
        Vec2i::new(offset, 0)
    } else {
        Vec2i::new(0, offset)
    }
}

/// Direction plus alignment of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Layout {
    /// Child arrangement.
    pub direction: Direction,
    /// Cross-axis alignment.
    pub alignment: Alignment,
}

impl Layout {
    /// Children in a row, top-aligned.
    pub const HORIZONTAL_TOP: Self = Self::new(Direction::Horizontal, Alignment::TOP);
    /// Children in a row, vertically centered.
    pub const HORIZONTAL_CENTER: Self = Self::new(Direction::Horizontal, Alignment::Center);
    /// Children in a row, bottom-aligned.
    pub const HORIZONTAL_BOTTOM: Self = Self::new(Direction::Horizontal, Alignment::BOTTOM);
    /// Children in a column, left-aligned.
    pub const VERTICAL_LEFT: Self = Self::new(Direction::Vertical, Alignment::LEFT);
    /// Children in a column, horizontally centered.
    pub const VERTICAL_CENTER: Self = Self::new(Direction::Vertical, Alignment::Center);
    /// Children in a column, right-aligned.
    pub const VERTICAL_RIGHT: Self = Self::new(Direction::Vertical, Alignment::RIGHT);
    /// Layered children anchored top-left.
    pub const OVERLAY_START: Self = Self::new(Direction::Overlay, Alignment::Start);
    /// Layered children centered on both axes.
    pub const OVERLAY_CENTER: Self = Self::new(Direction::Overlay, Alignment::Center);

    /// Creates a layout.
    #[must_use]
    pub const fn new(direction: Direction, alignment: Alignment) -> Self {
        Self {
            direction,
            alignment,
        }
    }

    /// Creates a horizontal layout.
    #[must_use]
    pub const fn horizontal(alignment: Alignment) -> Self {
        Self::new(Direction::Horizontal, alignment)
    }

    /// Creates a vertical layout.
    #[must_use]
    pub const fn vertical(alignment: Alignment) -> Self {
        Self::new(Direction::Vertical, alignment)
    }

    /// Creates an overlay layout.
    #[must_use]
    pub const fn overlay(alignment: Alignment) -> Self {
        Self::new(Direction::Overlay, alignment)
    }
}

/// Group margin in virtual units: left, top, right, bottom.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margin {
    /// Borders as (left, top, right, bottom).
    pub borders: Vec4,
}

impl Margin {
    /// Same margin on all four sides.
    #[must_use]
    pub const fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Horizontal margin on left/right, vertical on top/bottom.
    #[must_use]
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Explicit left, top, right and bottom margins.
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            borders: Vec4::new(left, top, right, bottom),
        }
    }
}
