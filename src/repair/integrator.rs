//! Pairwise-repulsion N-body relaxation.
use glam::DVec2;

use crate::geometry::Segment;
use crate::raster::sample_segment;

/// Length rescaling applied to pair distances before the force law.
///
/// Chosen so the short-range repulsion acts at the centimeter-ish particle
/// spacings of designer scenes rather than at unit distances.
pub const DEFAULT_REPULSION_DISTANCE: f64 = 70.0;

/// Relaxes a locally edited particle patch toward uniform spacing with a
/// short-range, purely repulsive Lennard-Jones-like force,
/// `f(r) = 3 r^-3.25 - 1.5 r^-1.75` at the rescaled distance
/// `r = dist * repulsion_distance`.
///
/// Particle state is index-aligned SoA. The first `non_movable` entries are
/// fixed anchors: they exert force on movable particles but are never
/// integrated and never accumulate force themselves.
///
/// There is no safeguard against a coincident pair: `r -> 0` produces an
/// unbounded force and NaN propagation. [`RepairIntegrator::is_finite`] is
/// the caller's gate before flattening results back into a scene.
#[derive(Clone, Debug)]
pub struct RepairIntegrator {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub vx: Vec<f64>,
    pub vy: Vec<f64>,
    pub ax: Vec<f64>,
    pub ay: Vec<f64>,
    non_movable: usize,
    pub repulsion_distance: f64,
    pub dt: f64,
    pub t: f64,
}

impl Default for RepairIntegrator {
    fn default() -> Self {
        Self::new()
    }
}

impl RepairIntegrator {
    pub fn new() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            vx: Vec::new(),
            vy: Vec::new(),
            ax: Vec::new(),
            ay: Vec::new(),
            non_movable: 0,
            repulsion_distance: DEFAULT_REPULSION_DISTANCE,
            dt: 0.01,
            t: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn non_movable(&self) -> usize {
        self.non_movable
    }

    fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
        self.vx.push(0.0);
        self.vy.push(0.0);
        self.ax.push(0.0);
        self.ay.push(0.0);
    }

    /// Append one movable particle at rest.
    pub fn add_particle(&mut self, x: f64, y: f64) {
        self.push(x, y);
    }

    /// Rasterize a segment at spacing `dx` into fixed anchor particles.
    ///
    /// Anchors must be added before any movable particle: they live in the
    /// array prefix by convention.
    pub fn add_anchor_line(&mut self, segment: &Segment, dx: f64) {
        debug_assert_eq!(
            self.non_movable,
            self.len(),
            "anchors must precede movable particles"
        );
        for p in sample_segment(segment, dx) {
            self.push(p.x, p.y);
            self.non_movable += 1;
        }
    }

    /// Recompute accelerations from every distinct pair.
    pub fn compute_accelerations(&mut self) {
        for i in self.non_movable..self.len() {
            self.ax[i] = 0.0;
            self.ay[i] = 0.0;
        }

        for i in 0..self.len() {
            for j in 0..i {
                let dx = self.x[i] - self.x[j];
                let dy = self.y[i] - self.y[j];
                let r = (dx * dx + dy * dy).sqrt() * self.repulsion_distance;
                let f = 3.0 * r.powf(-3.25) - 1.5 * r.powf(-1.75);
                if i >= self.non_movable {
                    self.ax[i] += f * dx / r;
                    self.ay[i] += f * dy / r;
                }
                if j >= self.non_movable {
                    self.ax[j] -= f * dx / r;
                    self.ay[j] -= f * dy / r;
                }
            }
        }
    }

    /// One velocity-Verlet step of size `dt` over the movable particles.
    ///
    /// All positions advance from a single acceleration snapshot (drift plus
    /// first half-kick), then accelerations are recomputed once for the
    /// second half-kick, which preserves the momentum symmetry of the
    /// pairwise forces.
    pub fn time_step(&mut self) {
        let dt = self.dt;
        self.t += dt;

        for i in self.non_movable..self.len() {
            self.x[i] += self.vx[i] * dt + 0.5 * self.ax[i] * dt * dt;
            self.y[i] += self.vy[i] * dt + 0.5 * self.ay[i] * dt * dt;
            self.vx[i] += 0.5 * self.ax[i] * dt;
            self.vy[i] += 0.5 * self.ay[i] * dt;
        }

        self.compute_accelerations();

        for i in self.non_movable..self.len() {
            self.vx[i] += 0.5 * self.ax[i] * dt;
            self.vy[i] += 0.5 * self.ay[i] * dt;
        }
    }

    /// Whether every particle position is still finite.
    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.y.iter()).all(|v| v.is_finite())
    }

    /// All particle positions, anchors included.
    pub fn positions(&self) -> Vec<DVec2> {
        self.x
            .iter()
            .zip(&self.y)
            .map(|(&x, &y)| DVec2::new(x, y))
            .collect()
    }

    /// Reset to the empty state.
    pub fn clear(&mut self) {
        self.x.clear();
        self.y.clear();
        self.vx.clear();
        self.vy.clear();
        self.ax.clear();
        self.ay.clear();
        self.non_movable = 0;
        self.t = 0.0;
    }
}
