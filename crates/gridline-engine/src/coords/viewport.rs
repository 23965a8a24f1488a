/// Drawable surface size in logical pixels.
///
/// Gesture math divides wheel deltas by these dimensions, and the studio
/// derives its aspect-ratio uniform from them.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// `height / width`, or 1.0 for a degenerate surface.
    #[inline]
    pub fn aspect_ratio(self) -> f32 {
        if self.is_valid() { self.height / self.width } else { 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_is_height_over_width() {
        assert_eq!(Viewport::new(800.0, 400.0).aspect_ratio(), 0.5);
    }

    #[test]
    fn aspect_ratio_of_empty_surface_is_one() {
        assert_eq!(Viewport::new(0.0, 400.0).aspect_ratio(), 1.0);
        assert_eq!(Viewport::default().aspect_ratio(), 1.0);
    }

    #[test]
    fn non_finite_viewport_is_invalid() {
        assert!(!Viewport::new(f32::NAN, 10.0).is_valid());
        assert!(!Viewport::new(10.0, f32::INFINITY).is_valid());
        assert!(Viewport::new(1.0, 1.0).is_valid());
    }
}
