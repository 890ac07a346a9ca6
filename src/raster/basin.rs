//! Open-top basin wall outline rasterization.
use glam::DVec2;

use crate::error::Result;
use crate::geometry::Rect;
use crate::raster::Rasterize;

/// Rasterize the walls of an open-top basin rectangle.
///
/// Emits the bottom edge extended `round(rc/dx)` extra points past both
/// corners, plus the left and right vertical edges, each repeated in
/// `dx`-spaced layers outward until the wall is `cutoff_radius` thick. The
/// top edge is deliberately absent: basins are open for fluid fill.
#[derive(Clone, Debug)]
pub struct BasinWalls {
    pub rect: Rect,
    pub dx: f64,
    pub cutoff_radius: f64,
}

impl BasinWalls {
    pub fn new(rect: Rect, dx: f64, cutoff_radius: f64) -> Self {
        Self {
            rect,
            dx,
            cutoff_radius,
        }
    }

    fn layers(&self) -> i64 {
        ((self.cutoff_radius / self.dx).round() as i64).max(1)
    }
}

impl Rasterize for BasinWalls {
    fn generate(&self) -> Result<Vec<DVec2>> {
        let (r, dx) = (&self.rect, self.dx);
        let ext = self.layers();
        let cols = (r.width() / dx).round() as i64;
        let rows = (r.height() / dx).round() as i64;

        let mut out = Vec::new();
        for k in 0..self.layers() {
            let off = k as f64 * dx;

            // floor, extended past both corners by the wall thickness
            let y = r.bottom() - off;
            for i in -ext..=(cols + ext) {
                out.push(DVec2::new(r.left() + i as f64 * dx, y));
            }

            // side walls, bottom corner to rim
            let (xl, xr) = (r.left() - off, r.right() + off);
            for j in 0..=rows {
                let y = r.bottom() + j as f64 * dx;
                out.push(DVec2::new(xl, y));
                out.push(DVec2::new(xr, y));
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basin() -> BasinWalls {
        let rect = Rect::from_corners(DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.5));
        BasinWalls::new(rect, 0.1, 0.2)
    }

    #[test]
    fn top_edge_is_open() {
        let pts = basin().generate().unwrap();
        // no particle along the rim between the side walls
        assert!(!pts
            .iter()
            .any(|p| p.y == 0.5 && p.x > 0.0 && p.x < 1.0));
    }

    #[test]
    fn floor_extends_past_the_corners() {
        let pts = basin().generate().unwrap();
        let floor: Vec<&DVec2> = pts.iter().filter(|p| p.y == 0.0).collect();
        let min_x = floor.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max_x = floor.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        assert!((min_x + 0.2).abs() < 1e-12);
        assert!((max_x - 1.2).abs() < 1e-12);
    }

    #[test]
    fn walls_thicken_outward_and_downward() {
        let pts = basin().generate().unwrap();
        // two layers: k = 0 and k = 1
        assert!(pts.iter().any(|p| (p.y + 0.1).abs() < 1e-12));
        assert!(pts.iter().any(|p| (p.x + 0.1).abs() < 1e-12));
        assert!(pts.iter().any(|p| (p.x - 1.1).abs() < 1e-12));
        // never inward past the side walls above the floor
        assert!(!pts.iter().any(|p| p.y > 0.0 && p.x > 0.0 && p.x < 1.0));
    }

    #[test]
    fn side_walls_reach_the_rim() {
        let pts = basin().generate().unwrap();
        assert!(pts.contains(&DVec2::new(0.0, 0.5)));
        assert!(pts.contains(&DVec2::new(1.0, 0.5)));
    }
}
