//! JSON persistence for scenes.
//!
//! Two document shapes share one schema: the editable project keeps the
//! authored shape collections next to the grid particles, while the
//! flattened export carries only raw particle lists for the solver.
mod export;
mod project;
mod schema;

pub use export::{export_particles, export_to_string, write_export};
pub use project::{apply_document, load_project, project_to_string, read_project, save_project, write_project};
pub use schema::{CoordDoc, LineDoc, NumString, ParamsDoc, ParticleDoc, RectDoc, SceneDoc};
