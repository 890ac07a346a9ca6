//! Line segment between two points.
use glam::DVec2;

/// A line segment from `p1` to `p2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p1: DVec2,
    pub p2: DVec2,
}

impl Segment {
    pub fn new(p1: DVec2, p2: DVec2) -> Self {
        Self { p1, p2 }
    }

    pub fn delta(&self) -> DVec2 {
        self.p2 - self.p1
    }

    pub fn length(&self) -> f64 {
        self.delta().length()
    }

    /// Point at parameter `t` in `[0, 1]` along the segment.
    pub fn at(&self, t: f64) -> DVec2 {
        self.p1 + self.delta() * t
    }

    /// Proper intersection test between closed segments.
    ///
    /// Touching at a shared endpoint counts as intersecting; callers that
    /// chain segments (polygon edges) must exclude adjacent pairs themselves.
    pub fn intersects(&self, other: &Segment) -> bool {
        let d1 = orient(other.p1, other.p2, self.p1);
        let d2 = orient(other.p1, other.p2, self.p2);
        let d3 = orient(self.p1, self.p2, other.p1);
        let d4 = orient(self.p1, self.p2, other.p2);

        if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
            && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
        {
            return true;
        }

        (d1 == 0.0 && on_segment(other.p1, other.p2, self.p1))
            || (d2 == 0.0 && on_segment(other.p1, other.p2, self.p2))
            || (d3 == 0.0 && on_segment(self.p1, self.p2, other.p1))
            || (d4 == 0.0 && on_segment(self.p1, self.p2, other.p2))
    }
}

/// Cross product sign of `(b - a) x (p - a)`.
fn orient(a: DVec2, b: DVec2, p: DVec2) -> f64 {
    (b - a).perp_dot(p - a)
}

/// Whether collinear point `p` lies within the bounding box of `a..b`.
fn on_segment(a: DVec2, b: DVec2, p: DVec2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersects_detects_crossing() {
        let a = Segment::new(DVec2::new(0.0, 0.0), DVec2::new(2.0, 2.0));
        let b = Segment::new(DVec2::new(0.0, 2.0), DVec2::new(2.0, 0.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn intersects_rejects_parallel_disjoint() {
        let a = Segment::new(DVec2::new(0.0, 0.0), DVec2::new(2.0, 0.0));
        let b = Segment::new(DVec2::new(0.0, 1.0), DVec2::new(2.0, 1.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn intersects_counts_endpoint_touch() {
        let a = Segment::new(DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0));
        let b = Segment::new(DVec2::new(1.0, 0.0), DVec2::new(1.0, 1.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn at_interpolates_endpoints() {
        let s = Segment::new(DVec2::new(1.0, 1.0), DVec2::new(3.0, 5.0));
        assert_eq!(s.at(0.0), s.p1);
        assert_eq!(s.at(1.0), s.p2);
        assert_eq!(s.at(0.5), DVec2::new(2.0, 3.0));
    }
}
