#![forbid(unsafe_code)]

//! Geometric primitives for hit testing measured elements.
//!
//! Coordinates are host screen coordinates (origin at top-left, y grows
//! downwards). Unlike layout rectangles, a [`ScreenRect`] is stored by its
//! corners and containment is inclusive on every edge, so a point sitting
//! exactly on the right or bottom border still hits the element.

/// Inclusive point-in-rectangle test.
///
/// Returns `true` when `tl_x <= px <= br_x` and `tl_y <= py <= br_y`.
/// A degenerate rectangle (`tl == br`) contains only that single point.
#[inline]
#[must_use]
pub fn contains_point(px: f32, py: f32, tl_x: f32, tl_y: f32, br_x: f32, br_y: f32) -> bool {
    tl_x <= px && px <= br_x && tl_y <= py && py <= br_y
}

/// An axis-aligned rectangle in screen coordinates, stored by its corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect {
    /// Top-left x.
    pub tl_x: f32,
    /// Top-left y.
    pub tl_y: f32,
    /// Bottom-right x.
    pub br_x: f32,
    /// Bottom-right y.
    pub br_y: f32,
}

impl ScreenRect {
    /// Create a rectangle from its corners.
    #[inline]
    pub const fn new(tl_x: f32, tl_y: f32, br_x: f32, br_y: f32) -> Self {
        Self {
            tl_x,
            tl_y,
            br_x,
            br_y,
        }
    }

    /// Build the rectangle covered by a measured element.
    #[inline]
    #[must_use]
    pub fn from_measurement(m: Measurement) -> Self {
        Self::new(
            m.screen_x,
            m.screen_y,
            m.screen_x + m.width,
            m.screen_y + m.height,
        )
    }

    /// Width (`br_x - tl_x`).
    #[inline]
    pub fn width(&self) -> f32 {
        self.br_x - self.tl_x
    }

    /// Height (`br_y - tl_y`).
    #[inline]
    pub fn height(&self) -> f32 {
        self.br_y - self.tl_y
    }

    /// Check if a point is inside the rectangle (inclusive bounds).
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        contains_point(x, y, self.tl_x, self.tl_y, self.br_x, self.br_y)
    }
}

/// A measurement reported by the host toolkit for one rendered element.
///
/// `screen_x`/`screen_y` are the absolute top-left position on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurement {
    pub screen_x: f32,
    pub screen_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Measurement {
    /// Create a new measurement.
    #[inline]
    pub const fn new(screen_x: f32, screen_y: f32, width: f32, height: f32) -> Self {
        Self {
            screen_x,
            screen_y,
            width,
            height,
        }
    }
}

impl From<Measurement> for ScreenRect {
    fn from(m: Measurement) -> Self {
        Self::from_measurement(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive_on_all_edges() {
        let r = ScreenRect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(0.0, 0.0));
        assert!(r.contains(10.0, 10.0));
        assert!(r.contains(10.0, 0.0));
        assert!(r.contains(0.0, 10.0));
        assert!(r.contains(5.0, 5.0));
    }

    #[test]
    fn contains_rejects_points_just_outside() {
        let r = ScreenRect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!r.contains(10.0001, 5.0));
        assert!(!r.contains(-0.0001, 5.0));
        assert!(!r.contains(5.0, 10.0001));
        assert!(!r.contains(5.0, -0.5));
    }

    #[test]
    fn degenerate_rect_contains_only_its_point() {
        assert!(contains_point(5.0, 5.0, 5.0, 5.0, 5.0, 5.0));
        assert!(!contains_point(5.0, 5.1, 5.0, 5.0, 5.0, 5.0));
        assert!(!contains_point(4.9, 5.0, 5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn zero_rect_matches_origin() {
        let r = ScreenRect::default();
        assert!(r.contains(0.0, 0.0));
        assert!(!r.contains(1.0, 1.0));
    }

    #[test]
    fn from_measurement_adds_size() {
        let r = ScreenRect::from_measurement(Measurement::new(12.0, 40.0, 30.0, 18.0));
        assert_eq!(r, ScreenRect::new(12.0, 40.0, 42.0, 58.0));
        assert_eq!(r.width(), 30.0);
        assert_eq!(r.height(), 18.0);
    }
}
