//! Polygon interior rasterization by bounding-box scan.
use glam::DVec2;

use crate::error::{Error, Result};
use crate::geometry::{snap_index, Polygon};
use crate::raster::Rasterize;

/// Scan the polygon's snapped bounding box and keep the lattice points
/// strictly inside the ring.
///
/// The scan range is half-open `[min, max)` in both axes and boundary-exact
/// lattice points are excluded by the containment test, so a polygon edge
/// never produces particles of its own. Self-intersecting rings are rejected
/// before any point is generated.
#[derive(Clone, Debug)]
pub struct PolygonFill {
    pub polygon: Polygon,
    pub dx: f64,
}

impl PolygonFill {
    pub fn new(polygon: Polygon, dx: f64) -> Self {
        Self { polygon, dx }
    }
}

impl Rasterize for PolygonFill {
    fn generate(&self) -> Result<Vec<DVec2>> {
        let ring = self.polygon.open();
        if !ring.is_simple() {
            return Err(Error::NonSimplePolygon);
        }
        let Some(bbox) = ring.bounding_box() else {
            return Ok(Vec::new());
        };

        let dx = self.dx;
        let x0 = snap_index(bbox.left(), dx);
        let x1 = snap_index(bbox.right(), dx);
        let y0 = snap_index(bbox.bottom(), dx);
        let y1 = snap_index(bbox.top(), dx);

        let mut out = Vec::new();
        for xi in x0..x1 {
            for yi in y0..y1 {
                let p = DVec2::new(xi as f64 * dx, yi as f64 * dx);
                if ring.contains(p) {
                    out.push(p);
                }
            }
        }
        Ok(out)
    }
}
