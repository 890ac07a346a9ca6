//! Lattice line rasterization with accumulated-error stepping.
use glam::DVec2;

use crate::error::Result;
use crate::geometry::{snap_point, Segment};
use crate::raster::Rasterize;

/// Rasterize a segment onto the lattice, one point per `dx` step along x
/// with error-accumulated steps along y (the classic Bresenham/DDA scheme
/// generalized to real spacing).
///
/// Endpoints are snapped to the lattice before stepping, so the emitted
/// points land exactly on cell positions. Perfectly vertical segments are
/// special-cased with uniform y stepping; the step-size ratio `Δy/Δx` is
/// never formed for them.
#[derive(Clone, Debug)]
pub struct GridLine {
    pub segment: Segment,
    pub dx: f64,
}

impl GridLine {
    pub fn new(segment: Segment, dx: f64) -> Self {
        Self { segment, dx }
    }
}

impl Rasterize for GridLine {
    fn generate(&self) -> Result<Vec<DVec2>> {
        let dx = self.dx;
        let p1 = snap_point(self.segment.p1, dx);
        let p2 = snap_point(self.segment.p2, dx);

        if p1.x == p2.x {
            return Ok(vertical(p1, p2, dx));
        }

        let delta = p2 - p1;
        let delta_error = (delta.y / delta.x).abs();

        let mut out = Vec::new();
        let mut error = 0.0;
        let mut x = p1.x;
        let mut y = p1.y;
        let x_step = if p1.x < p2.x { dx } else { -dx };
        let y_step = if delta.y < 0.0 { -dx } else { dx };
        // half-step tolerances absorb float accumulation: the snapped
        // endpoint column is always emitted and y never oversteps the
        // endpoint row
        let x_end = p2.x + x_step * 0.5;
        let y_end = p2.y + y_step * 0.5;

        loop {
            out.push(DVec2::new(x, y));
            error += delta_error;
            while error >= 0.5 {
                error -= 1.0;
                let next = y + y_step;
                if (y_step > 0.0 && next < y_end) || (y_step < 0.0 && next > y_end) {
                    y = next;
                    out.push(DVec2::new(x, y));
                }
            }
            x += x_step;
            if (x_step > 0.0 && x >= x_end) || (x_step < 0.0 && x <= x_end) {
                break;
            }
        }
        Ok(out)
    }
}

fn vertical(p1: DVec2, p2: DVec2, dx: f64) -> Vec<DVec2> {
    let steps = ((p2.y - p1.y).abs() / dx).round() as usize;
    let dir = if p2.y >= p1.y { dx } else { -dx };
    (0..=steps)
        .map(|k| DVec2::new(p1.x, p1.y + dir * k as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_line_covers_both_endpoints() {
        let line = GridLine::new(Segment::new(DVec2::ZERO, DVec2::new(4.0, 0.0)), 1.0);
        let pts = line.generate().unwrap();
        let expected: Vec<DVec2> = (0..=4).map(|i| DVec2::new(i as f64, 0.0)).collect();
        assert_eq!(pts, expected);
    }

    #[test]
    fn vertical_line_steps_uniformly() {
        let line = GridLine::new(Segment::new(DVec2::new(2.0, 0.0), DVec2::new(2.0, 3.0)), 1.0);
        let pts = line.generate().unwrap();
        let expected: Vec<DVec2> = (0..=3).map(|i| DVec2::new(2.0, i as f64)).collect();
        assert_eq!(pts, expected);

        let down = GridLine::new(Segment::new(DVec2::new(2.0, 3.0), DVec2::new(2.0, 0.0)), 1.0);
        let pts = down.generate().unwrap();
        assert_eq!(pts.first(), Some(&DVec2::new(2.0, 3.0)));
        assert_eq!(pts.last(), Some(&DVec2::new(2.0, 0.0)));
    }

    #[test]
    fn degenerate_line_is_a_single_point() {
        let p = DVec2::new(1.0, 1.0);
        let line = GridLine::new(Segment::new(p, p), 1.0);
        assert_eq!(line.generate().unwrap(), vec![p]);
    }

    #[test]
    fn diagonal_line_visits_every_column_and_row() {
        let line = GridLine::new(Segment::new(DVec2::ZERO, DVec2::new(4.0, 4.0)), 1.0);
        let pts = line.generate().unwrap();
        for i in 0..=4 {
            assert!(pts.iter().any(|p| p.x == i as f64));
            assert!(pts.iter().any(|p| p.y == i as f64));
        }
        assert!(pts.contains(&DVec2::new(4.0, 4.0)));
    }

    #[test]
    fn steep_line_emits_multiple_rows_per_column() {
        let line = GridLine::new(Segment::new(DVec2::ZERO, DVec2::new(1.0, 4.0)), 1.0);
        let pts = line.generate().unwrap();
        // both endpoint rows appear even though only two columns exist
        assert!(pts.contains(&DVec2::new(0.0, 0.0)));
        assert!(pts.iter().any(|p| p.y == 4.0));
        assert!(pts.iter().all(|p| p.x == 0.0 || p.x == 1.0));
    }

    #[test]
    fn snapping_applies_before_stepping() {
        let line = GridLine::new(
            Segment::new(DVec2::new(0.012, 0.0), DVec2::new(0.038, 0.0)),
            0.01,
        );
        let pts = line.generate().unwrap();
        assert_eq!(pts.len(), 4);
        assert!((pts[0].x - 0.01).abs() < 1e-12);
        assert!((pts[3].x - 0.04).abs() < 1e-9);
    }
}
