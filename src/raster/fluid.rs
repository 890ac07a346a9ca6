//! Lattice fill of a fluid rectangle.
use glam::DVec2;

use crate::error::Result;
use crate::geometry::{snap_index, Rect};
use crate::raster::Rasterize;

/// Emit every lattice point of the rectangle's snapped bounding box,
/// corners included.
#[derive(Clone, Debug)]
pub struct FluidFill {
    pub rect: Rect,
    pub dx: f64,
}

impl FluidFill {
    pub fn new(rect: Rect, dx: f64) -> Self {
        Self { rect, dx }
    }
}

impl Rasterize for FluidFill {
    fn generate(&self) -> Result<Vec<DVec2>> {
        let dx = self.dx;
        let x0 = snap_index(self.rect.left(), dx);
        let x1 = snap_index(self.rect.right(), dx);
        let y0 = snap_index(self.rect.bottom(), dx);
        let y1 = snap_index(self.rect.top(), dx);

        let mut out = Vec::with_capacity(((x1 - x0 + 1).max(0) * (y1 - y0 + 1).max(0)) as usize);
        for xi in x0..=x1 {
            for yi in y0..=y1 {
                out.push(DVec2::new(xi as f64 * dx, yi as f64 * dx));
            }
        }
        Ok(out)
    }
}
