//! The scene aggregate: particle grid, free particles, authored shapes, and
//! simulation parameters.
//!
//! Every mutation goes through the operations here; each call leaves the
//! scene fully consistent and bumps [`Scene::revision`] so a presentation
//! layer can poll for changes instead of subscribing.
use glam::DVec2;
use tracing::debug;

use crate::error::{Error, Result};
use crate::geometry::{snap_index, Polygon, Rect, Segment};
use crate::raster::{PolygonFill, Rasterize};

pub mod grid;

pub use grid::Grid;

/// Particle classification of a grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParticleType {
    #[default]
    None,
    Fluid1,
    Fluid2,
    Boundary,
}

/// Pass-through scalars for the external simulator.
///
/// The designer stores and serializes these but never interprets them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimParams {
    pub acceleration_x: f64,
    pub acceleration_y: f64,
    pub neighbours: f64,
    pub c: f64,
    pub alpha: f64,
    pub damping_factor: f64,
    pub shepard: f64,
    pub xsph: f64,
    pub no_slip: f64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            acceleration_x: 0.0,
            acceleration_y: 9.81,
            neighbours: 3.0,
            c: 0.0,
            alpha: 0.0,
            damping_factor: 0.0,
            shepard: 0.0,
            xsph: 0.0,
            no_slip: 0.0,
        }
    }
}

/// Aggregate root of an authored scene.
#[derive(Clone, Debug)]
pub struct Scene {
    width: f64,
    height: f64,
    sampling_distance: f64,
    cutoff_radius: f64,
    pub params: SimParams,
    grid: Grid,
    /// Particles stored at exact, unsnapped positions (wall layers, repairs).
    pub nongrid: Vec<DVec2>,
    pub boundary_rects: Vec<Rect>,
    pub fluid_rects: Vec<Rect>,
    pub boundary_lines: Vec<Segment>,
    pub(crate) repair: Option<crate::repair::RepairIntegrator>,
    revision: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// A 1x1 world at the default lattice spacing of 0.01.
    pub fn new() -> Self {
        let (width, height, dx) = (1.0, 1.0, 0.01);
        Self {
            width,
            height,
            sampling_distance: dx,
            cutoff_radius: 0.03,
            params: SimParams::default(),
            grid: Grid::new(grid_dim(width, dx), grid_dim(height, dx)),
            nongrid: Vec::new(),
            boundary_rects: Vec::new(),
            fluid_rects: Vec::new(),
            boundary_lines: Vec::new(),
            repair: None,
            revision: 0,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn sampling_distance(&self) -> f64 {
        self.sampling_distance
    }

    pub fn cutoff_radius(&self) -> f64 {
        self.cutoff_radius
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Counter bumped by every mutating operation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    /// The only path that changes lattice topology.
    ///
    /// Grid dimensions are recomputed as `ceil(extent / dx)`; the overlapping
    /// cell region keeps its particles, everything else is dropped.
    pub fn set_grid(&mut self, width: f64, height: f64, sampling_distance: f64) -> Result<()> {
        if !(width > 0.0 && width.is_finite() && height > 0.0 && height.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "scene extent must be finite and > 0, got {width}x{height}"
            )));
        }
        if !(sampling_distance > 0.0 && sampling_distance.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "sampling distance must be finite and > 0, got {sampling_distance}"
            )));
        }
        self.width = width;
        self.height = height;
        self.sampling_distance = sampling_distance;
        self.grid
            .resize(grid_dim(width, sampling_distance), grid_dim(height, sampling_distance));
        self.touch();
        Ok(())
    }

    pub fn set_cutoff_radius(&mut self, r: f64) -> Result<()> {
        if !(r > 0.0 && r.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "cutoff radius must be finite and > 0, got {r}"
            )));
        }
        self.cutoff_radius = r;
        self.touch();
        Ok(())
    }

    fn snap(&self, v: f64) -> i64 {
        snap_index(v, self.sampling_distance)
    }

    /// Place particles on the snapped lattice under the type precedence
    /// policy: `Boundary` beats the fluids, fluids beat `None`, and the
    /// first fluid writer wins. Walls can therefore never be erased by an
    /// overlapping fluid fill.
    ///
    /// The whole slice is bounds-checked before any cell is written; an
    /// out-of-range point fails the call without a partial update.
    pub fn add_particles(&mut self, points: &[DVec2], ty: ParticleType) -> Result<()> {
        let mut cells = Vec::with_capacity(points.len());
        for &p in points {
            let (x, y) = (self.snap(p.x), self.snap(p.y));
            if !self.grid.in_bounds(x, y) {
                return Err(Error::OutOfBounds {
                    x,
                    y,
                    width: self.grid.width(),
                    height: self.grid.height(),
                });
            }
            cells.push((x, y));
        }
        for (x, y) in cells {
            match self.grid.get(x, y)? {
                ParticleType::None => self.grid.set(x, y, ty)?,
                ParticleType::Boundary => {}
                ParticleType::Fluid1 | ParticleType::Fluid2 => {
                    if ty == ParticleType::Boundary {
                        self.grid.set(x, y, ty)?;
                    }
                }
            }
        }
        self.touch();
        Ok(())
    }

    /// Same as [`Scene::add_particles`], but out-of-range points are dropped
    /// instead of failing. Returns how many landed. Used by document loading
    /// and export, where best-effort remapping is the contract.
    pub fn add_particles_clipped(&mut self, points: &[DVec2], ty: ParticleType) -> usize {
        let mut placed = 0;
        let mut dropped = 0;
        let mut in_range = Vec::with_capacity(points.len());
        for &p in points {
            if self.grid.in_bounds(self.snap(p.x), self.snap(p.y)) {
                in_range.push(p);
                placed += 1;
            } else {
                dropped += 1;
            }
        }
        if dropped > 0 {
            debug!(dropped, "points outside the lattice were dropped");
        }
        // in-range points cannot fail the strict path
        let _ = self.add_particles(&in_range, ty);
        placed
    }

    /// Snap and clear a single cell.
    pub fn delete_particle(&mut self, p: DVec2) -> Result<()> {
        let (x, y) = (self.snap(p.x), self.snap(p.y));
        self.grid.set(x, y, ParticleType::None)?;
        self.touch();
        Ok(())
    }

    /// The square stamp brush: a `(2*size+1)^2` snapped neighborhood around
    /// `center`. `ParticleType::None` erases the cells outright; any other
    /// type goes through the precedence policy.
    pub fn brush(&mut self, center: DVec2, size: i32, ty: ParticleType) -> Result<()> {
        let dx = self.sampling_distance;
        let mut stamp = Vec::with_capacity(((2 * size + 1) * (2 * size + 1)).max(0) as usize);
        for ix in -size..=size {
            for iy in -size..=size {
                stamp.push(DVec2::new(
                    center.x + dx * ix as f64,
                    center.y + dx * iy as f64,
                ));
            }
        }
        if ty == ParticleType::None {
            for p in stamp {
                self.delete_particle(p)?;
            }
            Ok(())
        } else {
            self.add_particles(&stamp, ty)
        }
    }

    /// Rasterize a polygon interior through the precedence path.
    ///
    /// Fails without placing anything when the polygon self-intersects.
    pub fn fluid_polygon(&mut self, polygon: &Polygon, ty: ParticleType) -> Result<usize> {
        let points = PolygonFill::new(polygon.clone(), self.sampling_distance).generate()?;
        let placed = self.add_particles_clipped(&points, ty);
        Ok(placed)
    }

    pub fn add_particle_to_nongrid(&mut self, p: DVec2) {
        self.nongrid.push(p);
        self.touch();
    }

    pub fn add_particles_to_nongrid(&mut self, points: &[DVec2]) {
        self.nongrid.extend_from_slice(points);
        self.touch();
    }

    pub fn add_boundary_rect(&mut self, r: Rect) {
        self.boundary_rects.push(r);
        self.touch();
    }

    pub fn add_fluid_rect(&mut self, r: Rect) {
        self.fluid_rects.push(r);
        self.touch();
    }

    pub fn add_boundary_line(&mut self, l: Segment) {
        self.boundary_lines.push(l);
        self.touch();
    }

    /// Add a boundary line, shifting endpoints that sit exactly on a basin's
    /// top corner outward by `cutoff_radius - dx` along x, so the line clears
    /// the finite thickness of the basin wall.
    ///
    /// Corner matching is exact float equality; it holds because both the
    /// endpoint and the corner come from the same snapping path.
    pub fn add_boundary_line_anchored(&mut self, mut l: Segment) {
        let shift = DVec2::new(self.cutoff_radius - self.sampling_distance, 0.0);
        for r in &self.boundary_rects {
            if l.p1 == r.top_right() {
                l.p1 += shift;
            } else if l.p1 == r.top_left() {
                l.p1 -= shift;
            }
            if l.p2 == r.top_right() {
                l.p2 += shift;
            } else if l.p2 == r.top_left() {
                l.p2 -= shift;
            }
        }
        self.add_boundary_line(l);
    }

    /// Fluid fill of a basin from a click: the resulting rect spans the
    /// basin's full width, from the click height down to the basin floor.
    /// Returns `None` (and adds nothing) when the point is in no basin.
    pub fn fill_basin_fluid(&mut self, p: DVec2) -> Option<Rect> {
        let basin = self.boundary_rects.iter().find(|r| r.contains(p))?;
        let fluid = Rect::from_corners(
            DVec2::new(basin.left(), p.y),
            DVec2::new(basin.right(), basin.bottom()),
        );
        self.add_fluid_rect(fluid);
        Some(fluid)
    }

    /// Remove every fluid rect containing `p`; returns how many went away.
    pub fn delete_fluid_at(&mut self, p: DVec2) -> usize {
        let before = self.fluid_rects.len();
        self.fluid_rects.retain(|r| !r.contains(p));
        let removed = before - self.fluid_rects.len();
        if removed > 0 {
            self.touch();
        }
        removed
    }

    /// Remove every boundary rect containing `p`; returns how many went away.
    pub fn delete_rect_at(&mut self, p: DVec2) -> usize {
        let before = self.boundary_rects.len();
        self.boundary_rects.retain(|r| !r.contains(p));
        let removed = before - self.boundary_rects.len();
        if removed > 0 {
            self.touch();
        }
        removed
    }

    /// Remove boundary lines passing near `p`: a line is hit when it crosses
    /// either diagonal of the `eps` box around the point.
    pub fn delete_line_near(&mut self, p: DVec2, eps: f64) -> usize {
        let d1 = Segment::new(
            DVec2::new(p.x - eps, p.y - eps),
            DVec2::new(p.x + eps, p.y + eps),
        );
        let d2 = Segment::new(
            DVec2::new(p.x - eps, p.y + eps),
            DVec2::new(p.x + eps, p.y - eps),
        );
        let before = self.boundary_lines.len();
        self.boundary_lines
            .retain(|l| !l.intersects(&d1) && !l.intersects(&d2));
        let removed = before - self.boundary_lines.len();
        if removed > 0 {
            self.touch();
        }
        removed
    }

    pub fn clear_grid(&mut self) {
        self.grid.clear();
        self.touch();
    }

    /// Empty the grid, the non-grid particles, and every shape collection;
    /// simulation parameters and lattice topology stay as they are.
    pub fn clear(&mut self) {
        self.fluid_rects.clear();
        self.boundary_rects.clear();
        self.boundary_lines.clear();
        self.nongrid.clear();
        self.grid.clear();
        self.touch();
    }
}

fn grid_dim(extent: f64, dx: f64) -> usize {
    (extent / dx).ceil() as usize
}
