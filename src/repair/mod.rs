//! Local particle-distribution repair.
//!
//! Two flavors: direct refills (circle via the sunflower sampler, square via
//! a lattice fill) and an interactive polygon session backed by the
//! pairwise-repulsion [`RepairIntegrator`].
pub mod integrator;
pub mod session;

pub use integrator::RepairIntegrator;
