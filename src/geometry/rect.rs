//! Axis-aligned rectangle, normalized so `min <= max` componentwise.
use glam::DVec2;

/// Axis-aligned rectangle.
///
/// `min` is the bottom-left corner and `max` the top-right corner in a
/// y-up world. Construction through [`Rect::from_corners`] normalizes any
/// pair of opposite corners, so authored drag direction never matters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect {
    /// Build a rectangle from two opposite corners in any order.
    pub fn from_corners(a: DVec2, b: DVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn left(&self) -> f64 {
        self.min.x
    }

    pub fn right(&self) -> f64 {
        self.max.x
    }

    pub fn bottom(&self) -> f64 {
        self.min.y
    }

    pub fn top(&self) -> f64 {
        self.max.y
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// Top-left corner, the anchor point for lines attached to a basin wall.
    pub fn top_left(&self) -> DVec2 {
        DVec2::new(self.min.x, self.max.y)
    }

    /// Top-right corner, the anchor point for lines attached to a basin wall.
    pub fn top_right(&self) -> DVec2 {
        DVec2::new(self.max.x, self.max.y)
    }

    /// Closed containment test, edges included.
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_corners_normalizes_any_drag_direction() {
        let a = Rect::from_corners(DVec2::new(2.0, 3.0), DVec2::new(0.0, 1.0));
        let b = Rect::from_corners(DVec2::new(0.0, 3.0), DVec2::new(2.0, 1.0));
        assert_eq!(a, b);
        assert_eq!(a.min, DVec2::new(0.0, 1.0));
        assert_eq!(a.max, DVec2::new(2.0, 3.0));
    }

    #[test]
    fn accessors_match_corners() {
        let r = Rect::from_corners(DVec2::new(1.0, 2.0), DVec2::new(4.0, 6.0));
        assert_eq!(r.width(), 3.0);
        assert_eq!(r.height(), 4.0);
        assert_eq!(r.center(), DVec2::new(2.5, 4.0));
        assert_eq!(r.top_left(), DVec2::new(1.0, 6.0));
        assert_eq!(r.top_right(), DVec2::new(4.0, 6.0));
    }

    #[test]
    fn contains_includes_edges() {
        let r = Rect::from_corners(DVec2::ZERO, DVec2::new(1.0, 1.0));
        assert!(r.contains(DVec2::new(0.0, 0.0)));
        assert!(r.contains(DVec2::new(1.0, 0.5)));
        assert!(!r.contains(DVec2::new(1.0001, 0.5)));
    }
}
