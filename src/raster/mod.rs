//! Rasterization strategies converting authored shapes into candidate
//! particle positions.
//!
//! Every rasterizer is a stateless parameter struct implementing
//! [`Rasterize`]; none of them touch grid state. The caller decides whether
//! the points go through the scene's snapped precedence path or straight
//! into the non-grid particle list.
use glam::DVec2;
use rand::Rng as RngCore;

use crate::error::Result;
use crate::geometry::Segment;

pub mod basin;
pub mod disk;
pub mod fluid;
pub mod line;
pub mod polygon;
pub mod wall;

pub use basin::BasinWalls;
pub use disk::SunflowerDisk;
pub use fluid::FluidFill;
pub use line::GridLine;
pub use polygon::PolygonFill;
pub use wall::WallLayers;

/// Trait for shape-to-points rasterization.
pub trait Rasterize {
    /// Candidate particle positions for this shape.
    fn generate(&self) -> Result<Vec<DVec2>>;
}

/// Sample a segment at parametric spacing `dx / length`, both endpoints'
/// parameters in `[0, 1]`.
///
/// A zero-length segment yields its single point; the step-size division is
/// never reached for it.
pub fn sample_segment(segment: &Segment, dx: f64) -> Vec<DVec2> {
    let len = segment.length();
    if len == 0.0 || dx <= 0.0 {
        return vec![segment.p1];
    }
    let step = dx / len;
    let mut out = Vec::with_capacity((1.0 / step) as usize + 1);
    let mut t = 0.0;
    while t <= 1.0 {
        out.push(segment.at(t));
        t += step;
    }
    out
}

/// Generate a random float in the range [0, 1].
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u32() as f64) / ((u32::MAX as f64) + 1.0)
}
