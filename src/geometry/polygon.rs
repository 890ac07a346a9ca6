//! Simple polygon with strict-interior containment testing.
use glam::DVec2;

use crate::geometry::{Rect, Segment};

/// A polygon given by its vertices in authored order.
///
/// A polygon is considered closed when its first and last vertex are
/// bit-identical; both closed and open forms describe the same ring and
/// [`Polygon::open`] drops the duplicated closing vertex.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub points: Vec<DVec2>,
}

impl Polygon {
    pub fn new(points: Vec<DVec2>) -> Self {
        Self { points }
    }

    pub fn is_closed(&self) -> bool {
        self.points.len() >= 2 && self.points.first() == self.points.last()
    }

    /// The ring without a duplicated closing vertex.
    pub fn open(&self) -> Polygon {
        let mut points = self.points.clone();
        if self.is_closed() {
            points.pop();
        }
        Polygon { points }
    }

    /// Edges of the ring, closing edge included.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let ring = &self.points;
        let n = ring.len();
        (0..n).map(move |i| Segment::new(ring[i], ring[(i + 1) % n]))
    }

    /// Whether the ring has no proper self-intersection.
    ///
    /// Rings with fewer than three distinct vertices are not simple. The test
    /// is the quadratic pairwise one over non-adjacent edges; polygon sizes
    /// here are interactive (tens of vertices), so no sweep is warranted.
    pub fn is_simple(&self) -> bool {
        let ring = self.open();
        let n = ring.points.len();
        if n < 3 {
            return false;
        }
        let edges: Vec<Segment> = ring.edges().collect();
        for i in 0..n {
            for j in (i + 1)..n {
                // adjacent edges share a vertex, including the (0, n-1) wrap
                if j == i + 1 || (i == 0 && j == n - 1) {
                    continue;
                }
                if edges[i].intersects(&edges[j]) {
                    return false;
                }
            }
        }
        true
    }

    /// Strict interior test; points exactly on an edge are outside.
    pub fn contains(&self, p: DVec2) -> bool {
        let ring = self.open();
        let pts = &ring.points;
        let n = pts.len();
        if n < 3 {
            return false;
        }

        for edge in ring.edges() {
            if on_edge(&edge, p) {
                return false;
            }
        }

        // even-odd crossing count against a ray towards +x
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (a, b) = (pts[i], pts[j]);
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = b.x + (p.y - b.y) * (a.x - b.x) / (a.y - b.y);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Axis-aligned bounding box of all vertices.
    pub fn bounding_box(&self) -> Option<Rect> {
        let first = *self.points.first()?;
        let (min, max) = self
            .points
            .iter()
            .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p)));
        Some(Rect { min, max })
    }
}

fn on_edge(edge: &Segment, p: DVec2) -> bool {
    let d = edge.delta();
    if d.perp_dot(p - edge.p1) != 0.0 {
        return false;
    }
    p.x >= edge.p1.x.min(edge.p2.x)
        && p.x <= edge.p1.x.max(edge.p2.x)
        && p.y >= edge.p1.y.min(edge.p2.y)
        && p.y <= edge.p1.y.max(edge.p2.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Polygon {
        Polygon::new(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ])
    }

    #[test]
    fn open_drops_duplicated_closing_vertex() {
        let mut closed = unit_square();
        closed.points.push(DVec2::new(0.0, 0.0));
        assert!(closed.is_closed());
        assert_eq!(closed.open(), unit_square());
    }

    #[test]
    fn square_is_simple_bowtie_is_not() {
        assert!(unit_square().is_simple());

        let bowtie = Polygon::new(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(0.0, 1.0),
        ]);
        assert!(!bowtie.is_simple());
    }

    #[test]
    fn degenerate_rings_are_not_simple() {
        assert!(!Polygon::new(vec![]).is_simple());
        assert!(!Polygon::new(vec![DVec2::ZERO, DVec2::new(1.0, 0.0)]).is_simple());
    }

    #[test]
    fn contains_is_strict_interior() {
        let sq = unit_square();
        assert!(sq.contains(DVec2::new(0.5, 0.5)));
        // vertices and edge points are outside
        assert!(!sq.contains(DVec2::new(0.0, 0.0)));
        assert!(!sq.contains(DVec2::new(0.5, 0.0)));
        assert!(!sq.contains(DVec2::new(1.0, 0.5)));
        assert!(!sq.contains(DVec2::new(1.5, 0.5)));
    }

    #[test]
    fn contains_handles_concave_ring() {
        // a "U" shape; the notch is outside
        let u = Polygon::new(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(3.0, 0.0),
            DVec2::new(3.0, 3.0),
            DVec2::new(2.0, 3.0),
            DVec2::new(2.0, 1.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(1.0, 3.0),
            DVec2::new(0.0, 3.0),
        ]);
        assert!(u.contains(DVec2::new(0.5, 2.0)));
        assert!(u.contains(DVec2::new(2.5, 2.0)));
        assert!(!u.contains(DVec2::new(1.5, 2.0)));
    }

    #[test]
    fn bounding_box_spans_all_vertices() {
        let bbox = unit_square().bounding_box().unwrap();
        assert_eq!(bbox.min, DVec2::ZERO);
        assert_eq!(bbox.max, DVec2::new(1.0, 1.0));
        assert!(Polygon::default().bounding_box().is_none());
    }
}
