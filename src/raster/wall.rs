//! Finite-thickness SPH wall generation from a single segment.
use glam::DVec2;

use crate::error::Result;
use crate::geometry::Segment;
use crate::raster::{sample_segment, Rasterize};

/// Number of wall layers per unit of cutoff radius.
///
/// This ties the layer count to the particles-per-unit-length convention the
/// simulator uses (~100 at the default `dx` of 0.01). It is a configuration
/// constant of the file format, not a derived quantity.
pub const DEFAULT_LAYER_SCALE: f64 = 100.0;

/// Rasterize a wall segment as a stack of parallel particle lines.
///
/// The base segment is sampled at `dx` spacing, then `layer_scale *
/// cutoff_radius` copies are offset along the segment normal `(dy, -dx)` in
/// `dx` increments, producing a solid wall several particle layers deep.
/// Results are meant for the non-grid particle list: offset positions must
/// be kept exact, not snapped.
#[derive(Clone, Debug)]
pub struct WallLayers {
    pub segment: Segment,
    pub dx: f64,
    pub cutoff_radius: f64,
    pub layer_scale: f64,
}

impl WallLayers {
    pub fn new(segment: Segment, dx: f64, cutoff_radius: f64) -> Self {
        Self {
            segment,
            dx,
            cutoff_radius,
            layer_scale: DEFAULT_LAYER_SCALE,
        }
    }

    /// Override the layers-per-cutoff-unit convention.
    pub fn with_layer_scale(mut self, layer_scale: f64) -> Self {
        self.layer_scale = layer_scale;
        self
    }

    /// Total line count, base included.
    pub fn layer_count(&self) -> usize {
        (self.cutoff_radius * self.layer_scale).max(1.0) as usize
    }
}

impl Rasterize for WallLayers {
    fn generate(&self) -> Result<Vec<DVec2>> {
        let len = self.segment.length();
        let mut out = sample_segment(&self.segment, self.dx);
        if len == 0.0 {
            return Ok(out);
        }

        let d = self.segment.delta();
        let normal = DVec2::new(d.y, -d.x) / len * self.dx;

        for i in 1..self.layer_count() {
            let offset = normal * i as f64;
            let shifted = Segment::new(self.segment.p1 + offset, self.segment.p2 + offset);
            out.extend(sample_segment(&shifted, self.dx));
        }
        Ok(out)
    }
}
