use core::ops::{Add, Mul, Sub};

/// 2D vector in scene (normalized device) units.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Component-wise product.
    #[inline]
    pub fn scale_by(self, sx: f32, sy: f32) -> Self {
        Vec2::new(self.x * sx, self.y * sy)
    }
}

impl From<(f32, f32)> for Vec2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Vec2::new(x, y)
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Vec2::new(x, y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_by_is_per_axis() {
        assert_eq!(Vec2::new(0.02, 0.5).scale_by(3.0, 2.0), Vec2::new(0.06, 1.0));
    }

    #[test]
    fn conversions_and_ops() {
        let a: Vec2 = (1.0, 2.0).into();
        let b: Vec2 = [0.5, 0.5].into();
        assert_eq!(a + b, Vec2::new(1.5, 2.5));
        assert_eq!(a - b, Vec2::new(0.5, 1.5));
        assert_eq!(b * 4.0, Vec2::new(2.0, 2.0));
        assert_eq!(Vec2::zero(), Vec2::default());
    }
}
