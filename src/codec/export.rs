//! Flattened export for the external solver.
//!
//! Export rasterizes every authored shape into concrete particles and emits
//! plain particle lists. The operation is destructive by design: the grid
//! and the non-grid list are cleared afterwards so a repeated export cannot
//! stack a second set of wall layers on top of the first, matching the
//! one-shot hand-off to the solver.
use std::path::Path;

use tracing::info;

use crate::codec::schema::{ParamsDoc, ParticleDoc, SceneDoc};
use crate::error::Result;
use crate::raster::{BasinWalls, FluidFill, Rasterize, WallLayers};
use crate::scene::{ParticleType, Scene};

/// Rasterizes all shapes and flattens the scene to particle lists.
pub fn export_particles(scene: &mut Scene) -> Result<SceneDoc> {
    let dx = scene.sampling_distance();
    let rc = scene.cutoff_radius();

    for line in scene.boundary_lines.clone() {
        let layers = WallLayers::new(line, dx, rc).generate()?;
        scene.add_particles_to_nongrid(&layers);
    }
    for rect in scene.boundary_rects.clone() {
        let walls = BasinWalls::new(rect, dx, rc).generate()?;
        scene.add_particles_to_nongrid(&walls);
    }
    for rect in scene.fluid_rects.clone() {
        let fill = FluidFill::new(rect, dx).generate()?;
        scene.add_particles_clipped(&fill, ParticleType::Fluid1);
    }

    let to_doc = |(x, y): (usize, usize)| ParticleDoc {
        x: x as f64 * dx,
        y: y as f64 * dx,
    };
    let mut fluid: Vec<ParticleDoc> = scene
        .grid()
        .cells_of(ParticleType::Fluid1)
        .map(to_doc)
        .collect();
    fluid.extend(scene.grid().cells_of(ParticleType::Fluid2).map(to_doc));

    let mut boundary: Vec<ParticleDoc> = scene
        .grid()
        .cells_of(ParticleType::Boundary)
        .map(to_doc)
        .collect();
    boundary.extend(scene.nongrid.iter().map(|&p| ParticleDoc::from(p)));

    scene.nongrid.clear();
    scene.clear_grid();
    info!(
        fluid = fluid.len(),
        boundary = boundary.len(),
        "scene exported"
    );
    Ok(SceneDoc {
        scene: ParamsDoc::from_scene(scene),
        fluid_particles: fluid,
        boundary_particles: boundary,
        fluid_rects: Vec::new(),
        boundary_rects: Vec::new(),
        boundary_lines: Vec::new(),
    })
}

pub fn export_to_string(scene: &mut Scene) -> Result<String> {
    Ok(serde_json::to_string(&export_particles(scene)?)?)
}

pub fn write_export(scene: &mut Scene, path: impl AsRef<Path>) -> Result<()> {
    std::fs::write(path, export_to_string(scene)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Rect, Segment};
    use glam::DVec2;

    #[test]
    fn export_rasterizes_shapes_into_particle_lists() {
        let mut scene = Scene::new();
        scene.set_grid(10.0, 10.0, 1.0).unwrap();
        scene.set_cutoff_radius(1.0).unwrap();
        scene.add_fluid_rect(Rect::from_corners(
            DVec2::new(2.0, 2.0),
            DVec2::new(4.0, 4.0),
        ));
        scene.add_boundary_line(Segment::new(DVec2::new(0.0, 0.0), DVec2::new(3.0, 0.0)));

        let doc = export_particles(&mut scene).unwrap();
        // 3x3 inclusive fluid fill.
        assert_eq!(doc.fluid_particles.len(), 9);
        assert!(!doc.boundary_particles.is_empty());
        assert!(doc.fluid_rects.is_empty() && doc.boundary_lines.is_empty());
    }

    #[test]
    fn export_clears_the_grid() {
        let mut scene = Scene::new();
        scene.set_grid(10.0, 10.0, 1.0).unwrap();
        scene
            .add_particles(&[DVec2::new(5.0, 5.0)], ParticleType::Fluid1)
            .unwrap();

        let doc = export_particles(&mut scene).unwrap();
        assert_eq!(doc.fluid_particles.len(), 1);
        assert!(scene.grid().is_empty_of_particles());
    }

    #[test]
    fn repeated_export_does_not_stack_wall_layers() {
        let mut scene = Scene::new();
        scene.set_grid(10.0, 10.0, 1.0).unwrap();
        scene.set_cutoff_radius(1.0).unwrap();
        scene.add_boundary_line(Segment::new(DVec2::new(0.0, 5.0), DVec2::new(4.0, 5.0)));

        let first = export_particles(&mut scene).unwrap();
        let second = export_particles(&mut scene).unwrap();
        assert_eq!(
            first.boundary_particles.len(),
            second.boundary_particles.len()
        );
        assert!(scene.nongrid.is_empty());
    }

    #[test]
    fn boundary_walls_keep_wall_precedence_over_fluid() {
        let mut scene = Scene::new();
        scene.set_grid(10.0, 10.0, 1.0).unwrap();
        scene
            .add_particles(&[DVec2::new(3.0, 3.0)], ParticleType::Boundary)
            .unwrap();
        // Fluid rect over the wall cell must not overwrite it.
        scene.add_fluid_rect(Rect::from_corners(
            DVec2::new(3.0, 3.0),
            DVec2::new(4.0, 4.0),
        ));

        let doc = export_particles(&mut scene).unwrap();
        assert_eq!(doc.fluid_particles.len(), 3);
        assert_eq!(doc.boundary_particles.len(), 1);
    }

    #[test]
    fn exported_document_carries_flat_shape_free_json() {
        let mut scene = Scene::new();
        scene.set_grid(2.0, 2.0, 1.0).unwrap();
        let json = export_to_string(&mut scene).unwrap();
        assert!(json.contains("\"scene\""));
        assert!(!json.contains("boundary_lines"));
    }
}
