//! Mathematical types shared between the engine and its hosts.
//!
//! `Vec2`/`Vec4` carry virtual (caller-facing) quantities, `Vec2i`/`Vec4i`
//! carry physical pixels.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 2D Vector - virtual sizes, scale factors
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Vec2 {
    /// Creates a new Vec2
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Converts to array
    #[must_use]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Smaller of the two components.
    #[must_use]
    pub fn min_element(self) -> f32 {
        self.x.min(self.y)
    }
}

impl From<Vec2i> for Vec2 {
    #[allow(clippy::cast_precision_loss)]
    fn from(v: Vec2i) -> Self {
        Self::new(v.x as f32, v.y as f32)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl std::ops::Div<f32> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

/// 2D integer vector - physical pixel positions and sizes
#[repr(C)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct Vec2i {
    /// X component
    pub x: i32,
    /// Y component
    pub y: i32,
}

impl Vec2i {
    /// Creates a new Vec2i
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Both components set to `v`.
    #[must_use]
    pub const fn splat(v: i32) -> Self {
        Self::new(v, v)
    }

    /// Zero vector
    pub const ZERO: Self = Self::new(0, 0);

    /// Component-wise minimum.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Component-wise `self * scale`, saturating at the `i32` bounds.
    #[must_use]
    pub const fn saturating_mul(self, scale: i32) -> Self {
        Self::new(self.x.saturating_mul(scale), self.y.saturating_mul(scale))
    }

    /// Component-wise `self - other`, saturating at the `i32` bounds.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self::new(self.x.saturating_sub(other.x), self.y.saturating_sub(other.y))
    }

    /// True if `self` lies in the half-open box `[start, end)` on both axes.
    #[must_use]
    pub fn in_range(self, start: Self, end: Self) -> bool {
        self.x >= start.x && self.x < end.x && self.y >= start.y && self.y < end.y
    }

    /// Component by axis index (0 = x, anything else = y).
    #[must_use]
    pub const fn axis(self, axis: usize) -> i32 {
        if axis == 0 {
            self.x
        } else {
            self.y
        }
    }

    /// Converts to array
    #[must_use]
    pub const fn to_array(self) -> [i32; 2] {
        [self.x, self.y]
    }
}

impl std::ops::Add for Vec2i {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign for Vec2i {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vec2i {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::SubAssign for Vec2i {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl std::ops::Neg for Vec2i {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl std::ops::Mul<i32> for Vec2i {
    type Output = Self;
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// 4D Vector - colors, nine-patch insets, virtual margins
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec4 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
    /// W component
    pub w: f32,
}

impl Vec4 {
    /// Creates a new Vec4
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// First two components.
    #[must_use]
    pub const fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Last two components.
    #[must_use]
    pub const fn zw(self) -> Vec2 {
        Vec2::new(self.z, self.w)
    }

    /// Converts to array
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

/// 4D integer vector - physical margins (left, top, right, bottom)
#[repr(C)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct Vec4i {
    /// X component
    pub x: i32,
    /// Y component
    pub y: i32,
    /// Z component
    pub z: i32,
    /// W component
    pub w: i32,
}

impl Vec4i {
    /// Creates a new Vec4i
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32, w: i32) -> Self {
        Self { x, y, z, w }
    }

    /// Zero vector
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// First two components.
    #[must_use]
    pub const fn xy(self) -> Vec2i {
        Vec2i::new(self.x, self.y)
    }

    /// Last two components.
    #[must_use]
    pub const fn zw(self) -> Vec2i {
        Vec2i::new(self.z, self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2i_operations() {
        let a = Vec2i::new(3, -4);
        let b = Vec2i::new(1, 10);

        assert_eq!(a + b, Vec2i::new(4, 6));
        assert_eq!(a - b, Vec2i::new(2, -14));
        assert_eq!(a * 2, Vec2i::new(6, -8));
        assert_eq!(-a, Vec2i::new(-3, 4));
        assert_eq!(a.min(b), Vec2i::new(1, -4));
        assert_eq!(a.max(b), Vec2i::new(3, 10));
    }

    #[test]
    fn test_saturating_operations() {
        let big = Vec2i::new(0, 200_000_000);
        assert_eq!(big.saturating_mul(-16), Vec2i::new(0, i32::MIN));
        assert_eq!(
            Vec2i::new(5, 5).saturating_sub(Vec2i::new(1, i32::MIN)),
            Vec2i::new(4, i32::MAX)
        );
    }

    #[test]
    fn test_in_range_is_half_open() {
        let start = Vec2i::new(10, 10);
        let end = Vec2i::new(20, 20);

        assert!(Vec2i::new(10, 10).in_range(start, end));
        assert!(Vec2i::new(19, 19).in_range(start, end));
        assert!(!Vec2i::new(20, 15).in_range(start, end));
        assert!(!Vec2i::new(15, 9).in_range(start, end));
    }

    #[test]
    fn test_vec4i_halves() {
        let m = Vec4i::new(1, 2, 3, 4);
        assert_eq!(m.xy() + m.zw(), Vec2i::new(4, 6));
    }

    #[test]
    fn test_vec2i_bytemuck() {
        let v = [Vec2i::new(1, 2), Vec2i::new(3, 4)];
        let bytes: &[u8] = bytemuck::cast_slice(&v);
        assert_eq!(bytes.len(), 16);
    }

    #[test]
    fn test_vec2_toml_roundtrip_shape() {
        let v: Vec2 = toml::from_str("x = 1.5\ny = 2.0").unwrap();
        assert_eq!(v, Vec2::new(1.5, 2.0));
    }
}
