//! Saving and loading editable project documents.
use std::path::Path;

use glam::DVec2;
use tracing::{debug, warn};

use crate::codec::schema::{LineDoc, ParamsDoc, ParticleDoc, RectDoc, SceneDoc};
use crate::error::Result;
use crate::scene::{ParticleType, Scene};

fn grid_particles(scene: &Scene, ty: ParticleType) -> Vec<ParticleDoc> {
    let dx = scene.sampling_distance();
    scene
        .grid()
        .cells_of(ty)
        .map(|(x, y)| ParticleDoc {
            x: x as f64 * dx,
            y: y as f64 * dx,
        })
        .collect()
}

/// Snapshots the scene as a project document.
///
/// The grid is flattened to particle lists and the authored rect and line
/// collections are carried alongside, so the shapes stay editable after a
/// reload. Nongrid particles are not persisted here; they are regenerated
/// from the shapes at export time.
pub fn save_project(scene: &Scene) -> SceneDoc {
    let mut fluid = grid_particles(scene, ParticleType::Fluid1);
    fluid.extend(grid_particles(scene, ParticleType::Fluid2));
    SceneDoc {
        scene: ParamsDoc::from_scene(scene),
        fluid_particles: fluid,
        boundary_particles: grid_particles(scene, ParticleType::Boundary),
        fluid_rects: scene.fluid_rects.iter().map(RectDoc::from).collect(),
        boundary_rects: scene.boundary_rects.iter().map(RectDoc::from).collect(),
        boundary_lines: scene.boundary_lines.iter().map(LineDoc::from).collect(),
    }
}

pub fn project_to_string(scene: &Scene) -> Result<String> {
    Ok(serde_json::to_string(&save_project(scene))?)
}

pub fn write_project(scene: &Scene, path: impl AsRef<Path>) -> Result<()> {
    std::fs::write(path, project_to_string(scene)?)?;
    Ok(())
}

/// Replaces the scene's contents with a parsed document.
///
/// The document is fully validated before any mutation, so a malformed
/// input leaves the scene untouched.
pub fn apply_document(scene: &mut Scene, doc: &SceneDoc) -> Result<()> {
    scene.set_grid(doc.scene.width, doc.scene.height, doc.scene.sampling_dist)?;
    scene.clear();
    scene.params = doc.scene.to_params();

    let boundary: Vec<DVec2> = doc.boundary_particles.iter().map(|&p| p.into()).collect();
    let fluid: Vec<DVec2> = doc.fluid_particles.iter().map(|&p| p.into()).collect();
    let placed_b = scene.add_particles_clipped(&boundary, ParticleType::Boundary);
    let placed_f = scene.add_particles_clipped(&fluid, ParticleType::Fluid1);
    if placed_b < boundary.len() || placed_f < fluid.len() {
        warn!(
            dropped = boundary.len() + fluid.len() - placed_b - placed_f,
            "document contained particles outside the grid"
        );
    }

    for r in &doc.fluid_rects {
        scene.add_fluid_rect((*r).into());
    }
    for r in &doc.boundary_rects {
        scene.add_boundary_rect((*r).into());
    }
    for l in &doc.boundary_lines {
        scene.add_boundary_line((*l).into());
    }
    debug!(
        fluid = placed_f,
        boundary = placed_b,
        rects = doc.fluid_rects.len() + doc.boundary_rects.len(),
        lines = doc.boundary_lines.len(),
        "project loaded"
    );
    Ok(())
}

pub fn load_project(scene: &mut Scene, json: &str) -> Result<()> {
    let doc: SceneDoc = serde_json::from_str(json)?;
    apply_document(scene, &doc)
}

pub fn read_project(scene: &mut Scene, path: impl AsRef<Path>) -> Result<()> {
    let json = std::fs::read_to_string(path)?;
    load_project(scene, &json)
}
