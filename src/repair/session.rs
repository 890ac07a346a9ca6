//! Scene-level repair operations.
use glam::DVec2;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::geometry::{snap_point, Polygon, Rect};
use crate::raster::SunflowerDisk;
use crate::repair::RepairIntegrator;
use crate::scene::Scene;

/// Points drawn into a repaired circle.
pub const CIRCLE_REFILL_COUNT: usize = 500;
/// Cap on lattice points drawn into a repaired square.
pub const SQUARE_REFILL_CAP: usize = 1000;

impl Scene {
    /// Replace the non-grid particles inside a circle with a fresh sunflower
    /// distribution of [`CIRCLE_REFILL_COUNT`] points. Returns how many
    /// particles were removed.
    pub fn repair_circle(&mut self, center: DVec2, radius: f64) -> Result<usize> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "repair radius must be finite and > 0, got {radius}"
            )));
        }
        let r2 = radius * radius;
        let before = self.nongrid.len();
        self.nongrid.retain(|p| (*p - center).length_squared() > r2);
        let removed = before - self.nongrid.len();

        // rotation off, refills stay deterministic
        let refill = SunflowerDisk::new(center, radius, CIRCLE_REFILL_COUNT)
            .generate(&mut rand::rng());
        self.add_particles_to_nongrid(&refill);
        debug!(removed, added = CIRCLE_REFILL_COUNT, "circle repair");
        Ok(removed)
    }

    /// Replace the non-grid particles inside a rectangle with snapped lattice
    /// points, capped at [`SQUARE_REFILL_CAP`]. Returns how many were removed.
    pub fn repair_square(&mut self, rect: Rect) -> usize {
        let before = self.nongrid.len();
        self.nongrid.retain(|p| !rect.contains(*p));
        let removed = before - self.nongrid.len();

        let dx = self.sampling_distance();
        let mut added = 0;
        let mut x = rect.left();
        'outer: while x <= rect.right() {
            let mut y = rect.bottom();
            while y <= rect.top() {
                self.nongrid.push(snap_point(DVec2::new(x, y), dx));
                added += 1;
                if added >= SQUARE_REFILL_CAP {
                    break 'outer;
                }
                y += dx;
            }
            x += dx;
        }
        debug!(removed, added, "square repair");
        removed
    }

    /// Start an interactive polygon repair session.
    ///
    /// Deletes the non-grid particles strictly inside the ring and seeds the
    /// integrator with fixed anchors along every edge, closing edge included.
    /// Floating particles are then added by [`Scene::add_repair_particle`]
    /// and relaxed with [`Scene::step_repair`].
    pub fn begin_polygon_repair(&mut self, polygon: &Polygon) -> Result<usize> {
        let ring = polygon.open();
        if !ring.is_simple() {
            return Err(Error::NonSimplePolygon);
        }

        let before = self.nongrid.len();
        self.nongrid.retain(|p| !ring.contains(*p));
        let removed = before - self.nongrid.len();

        let mut sim = RepairIntegrator::new();
        let dx = self.sampling_distance();
        for edge in ring.edges() {
            sim.add_anchor_line(&edge, dx);
        }
        debug!(removed, anchors = sim.non_movable(), "polygon repair started");
        self.repair = Some(sim);
        Ok(removed)
    }

    pub fn repair_session(&self) -> Option<&RepairIntegrator> {
        self.repair.as_ref()
    }

    /// Add one movable particle to the active session.
    pub fn add_repair_particle(&mut self, p: DVec2) -> Result<()> {
        let sim = self.repair.as_mut().ok_or(Error::NoActiveRepair)?;
        sim.add_particle(p.x, p.y);
        sim.compute_accelerations();
        Ok(())
    }

    /// Advance the active session by one integrator step.
    pub fn step_repair(&mut self) -> Result<()> {
        let sim = self.repair.as_mut().ok_or(Error::NoActiveRepair)?;
        sim.time_step();
        Ok(())
    }

    /// Flatten the session back into the non-grid particles and end it.
    ///
    /// A session that went non-finite (coincident particles blew up the
    /// repulsion) is discarded wholesale: nothing is flattened and the error
    /// is surfaced instead.
    pub fn finish_repair(&mut self) -> Result<usize> {
        let sim = self.repair.take().ok_or(Error::NoActiveRepair)?;
        if !sim.is_finite() {
            warn!("repair session diverged, discarding its particles");
            return Err(Error::RepairDiverged);
        }
        let points = sim.positions();
        let count = points.len();
        self.add_particles_to_nongrid(&points);
        Ok(count)
    }

    /// Drop the active session without flattening anything.
    pub fn cancel_repair(&mut self) {
        self.repair = None;
    }
}
