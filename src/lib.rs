#![forbid(unsafe_code)]
//! sph_designer: authoring core for 2D SPH simulation scenes.
//!
//! Modules:
//! - geometry: points, rects, segments, simple polygons
//! - scene: the typed particle lattice and the scene aggregate
//! - raster: shape-to-particle rasterizers (lines, walls, basins, fills, disks)
//! - repair: pairwise-repulsion relaxation of locally edited patches
//! - codec: JSON project and flattened-export documents
//! - sampler: batch export of basin-expansion scene variants
//!
//! For examples and docs, see README and docs.rs.
pub mod codec;
pub mod error;
pub mod geometry;
pub mod raster;
pub mod repair;
pub mod sampler;
pub mod scene;

/// Convenient re-exports for common types. Import with `use sph_designer::prelude::*;`.
pub mod prelude {
    pub use crate::codec::{
        export_particles, load_project, read_project, save_project, write_export, write_project,
        SceneDoc,
    };
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{snap, snap_index, snap_point, Polygon, Rect, Segment};
    pub use crate::raster::{
        BasinWalls, FluidFill, GridLine, PolygonFill, Rasterize, SunflowerDisk, WallLayers,
    };
    pub use crate::repair::RepairIntegrator;
    pub use crate::sampler::{BasinExpansion, DirectorySink, SceneSampler, VariantSink, VecSink};
    pub use crate::scene::{Grid, ParticleType, Scene, SimParams};
}
