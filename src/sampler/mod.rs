//! Batch generation of scene variants.
//!
//! Each authored basin gets a [`BasinExpansion`] describing how far and in
//! what increments its width and height should grow. The sampler walks the
//! cartesian product of those choices, one choice per basin, and emits one
//! flattened export per leaf through a [`VariantSink`]. Lines anchored to a
//! basin corner and fluid fills centered inside a basin follow the basin as
//! it grows.
use std::fs;
use std::path::PathBuf;

use glam::DVec2;
use tracing::{debug, info};

use crate::codec::{export_particles, SceneDoc};
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::scene::Scene;

/// Expansion schedule for one basin.
///
/// Width deltas are `{0, x_step, 2 * x_step, ...} < x_add` and likewise for
/// height. A non-positive `add` or `step` degenerates to the single delta 0,
/// so a basin can be held fixed while others vary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasinExpansion {
    pub x_add: f64,
    pub x_step: f64,
    pub y_add: f64,
    pub y_step: f64,
}

impl BasinExpansion {
    pub fn fixed() -> Self {
        Self {
            x_add: 0.0,
            x_step: 0.0,
            y_add: 0.0,
            y_step: 0.0,
        }
    }

    fn deltas(add: f64, step: f64) -> Vec<f64> {
        if !(add > 0.0 && step > 0.0 && add.is_finite() && step.is_finite()) {
            return vec![0.0];
        }
        let n = ((add / step).ceil() as usize).max(1);
        (0..n).map(|i| i as f64 * step).collect()
    }

    fn width_deltas(&self) -> Vec<f64> {
        Self::deltas(self.x_add, self.x_step)
    }

    fn height_deltas(&self) -> Vec<f64> {
        Self::deltas(self.y_add, self.y_step)
    }
}

/// Receives one flattened document per recursion leaf.
pub trait VariantSink {
    fn emit(&mut self, index: usize, doc: &SceneDoc) -> Result<()>;
}

/// Writes `sampleScene{N}.json` files into a directory.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl VariantSink for DirectorySink {
    fn emit(&mut self, index: usize, doc: &SceneDoc) -> Result<()> {
        let path = self.dir.join(format!("sampleScene{index}.json"));
        fs::write(&path, serde_json::to_string(doc)?)?;
        debug!(path = %path.display(), "variant written");
        Ok(())
    }
}

/// Collects documents in memory.
#[derive(Debug, Default)]
pub struct VecSink {
    pub docs: Vec<SceneDoc>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VariantSink for VecSink {
    fn emit(&mut self, _index: usize, doc: &SceneDoc) -> Result<()> {
        self.docs.push(doc.clone());
        Ok(())
    }
}

/// Enumerates basin expansion variants and exports each one.
pub struct SceneSampler<'a> {
    scene: &'a Scene,
    expansions: &'a [BasinExpansion],
}

impl<'a> SceneSampler<'a> {
    /// One expansion schedule per authored basin, in collection order.
    pub fn new(scene: &'a Scene, expansions: &'a [BasinExpansion]) -> Result<Self> {
        if expansions.len() != scene.boundary_rects.len() {
            return Err(Error::InvalidConfig(format!(
                "{} expansion schedules for {} basins",
                expansions.len(),
                scene.boundary_rects.len()
            )));
        }
        Ok(Self { scene, expansions })
    }

    /// Runs the full enumeration; returns the number of variants emitted.
    ///
    /// The source scene is never mutated; each leaf works on a clone, so the
    /// destructive nature of export stays contained.
    pub fn run(&self, sink: &mut dyn VariantSink) -> Result<usize> {
        let mut counter = 0;
        let mut deltas = Vec::with_capacity(self.expansions.len());
        self.recurse(0, &mut deltas, &mut counter, sink)?;
        info!(variants = counter, "scene sampling finished");
        Ok(counter)
    }

    fn recurse(
        &self,
        depth: usize,
        deltas: &mut Vec<(f64, f64)>,
        counter: &mut usize,
        sink: &mut dyn VariantSink,
    ) -> Result<()> {
        if depth == self.expansions.len() {
            let mut variant = build_variant(self.scene, deltas);
            let doc = export_particles(&mut variant)?;
            sink.emit(*counter, &doc)?;
            *counter += 1;
            return Ok(());
        }
        for dw in self.expansions[depth].width_deltas() {
            for dh in self.expansions[depth].height_deltas() {
                deltas.push((dw, dh));
                self.recurse(depth + 1, deltas, counter, sink)?;
                deltas.pop();
            }
        }
        Ok(())
    }
}

/// Applies one full delta assignment to a clone of the scene.
///
/// Every basin is expanded relative to its ORIGINAL rect, never relative to
/// a previously expanded one. Lines whose endpoint exactly equals an
/// original basin's top-left or top-right corner move to the matching corner
/// of the expanded basin; fluid rects centered inside an original basin are
/// stretched to the expanded basin's left and right edges.
fn build_variant(original: &Scene, deltas: &[(f64, f64)]) -> Scene {
    let mut scene = original.clone();
    let before = original.boundary_rects.clone();

    for (rect, &(dw, dh)) in scene.boundary_rects.iter_mut().zip(deltas) {
        *rect = Rect::from_corners(
            DVec2::new(rect.left(), rect.bottom()),
            DVec2::new(rect.right() + dw, rect.top() + dh),
        );
    }
    let after = scene.boundary_rects.clone();

    for line in scene.boundary_lines.iter_mut() {
        for (orig, new) in before.iter().zip(&after) {
            let corners = [
                (orig.top_left(), new.top_left()),
                (orig.top_right(), new.top_right()),
            ];
            for (from, to) in corners {
                if line.p1 == from {
                    line.p1 = to;
                }
                if line.p2 == from {
                    line.p2 = to;
                }
            }
        }
    }

    for fluid in scene.fluid_rects.iter_mut() {
        for (orig, new) in before.iter().zip(&after) {
            if orig.contains(fluid.center()) {
                *fluid = Rect::from_corners(
                    DVec2::new(new.left(), fluid.bottom()),
                    DVec2::new(new.right(), fluid.top()),
                );
                break;
            }
        }
    }
    scene
}
