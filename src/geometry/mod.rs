//! Geometry primitives for scene authoring.
//!
//! Points are [`glam::DVec2`]. Rectangles are normalized on construction,
//! segments and polygons keep their authored vertex order.
use glam::DVec2;

pub mod polygon;
pub mod rect;
pub mod segment;

pub use polygon::Polygon;
pub use rect::Rect;
pub use segment::Segment;

/// Snap a scalar to the nearest lattice multiple of `dx`.
///
/// Uses round-half-away-from-zero ([`f64::round`]), matching the lattice
/// indexing used by [`crate::scene::Scene`].
#[inline]
pub fn snap(v: f64, dx: f64) -> f64 {
    (v / dx).round() * dx
}

/// Snap both components of a point to the lattice.
#[inline]
pub fn snap_point(p: DVec2, dx: f64) -> DVec2 {
    DVec2::new(snap(p.x, dx), snap(p.y, dx))
}

/// Lattice cell index of a scalar coordinate.
#[inline]
pub fn snap_index(v: f64, dx: f64) -> i64 {
    (v / dx).round() as i64
}
