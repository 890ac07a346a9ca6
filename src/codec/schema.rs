//! Wire types for the designer's JSON documents.
//!
//! Shape coordinates are serialized as numeric strings, a legacy quirk of
//! the file format kept for interchange; [`NumString`] writes strings and
//! reads either representation. Particle lists are plain numbers.
use glam::DVec2;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::geometry::{Rect, Segment};
use crate::scene::{Scene, SimParams};

/// An `f64` carried as a JSON string on the wire.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumString(pub f64);

impl Serialize for NumString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for NumString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(f64),
            Str(String),
        }
        match Raw::deserialize(deserializer)? {
            Raw::Num(v) => Ok(NumString(v)),
            Raw::Str(s) => s
                .parse()
                .map(NumString)
                .map_err(|e| serde::de::Error::custom(format!("invalid numeric string: {e}"))),
        }
    }
}

/// The `scene` parameter block shared by both document shapes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamsDoc {
    pub sampling_dist: f64,
    pub width: f64,
    pub height: f64,
    pub neighbours: f64,
    pub c: f64,
    pub no_slip: f64,
    pub alpha: f64,
    pub epsilon_xsph: f64,
    pub shepard: f64,
    pub t_damp: f64,
    pub g: [f64; 2],
}

impl ParamsDoc {
    pub fn from_scene(scene: &Scene) -> Self {
        let p = &scene.params;
        Self {
            sampling_dist: scene.sampling_distance(),
            width: scene.width(),
            height: scene.height(),
            neighbours: p.neighbours,
            c: p.c,
            no_slip: p.no_slip,
            alpha: p.alpha,
            epsilon_xsph: p.xsph,
            shepard: p.shepard,
            t_damp: p.damping_factor,
            g: [p.acceleration_x, p.acceleration_y],
        }
    }

    pub fn to_params(&self) -> SimParams {
        SimParams {
            acceleration_x: self.g[0],
            acceleration_y: self.g[1],
            neighbours: self.neighbours,
            c: self.c,
            alpha: self.alpha,
            damping_factor: self.t_damp,
            shepard: self.shepard,
            xsph: self.epsilon_xsph,
            no_slip: self.no_slip,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleDoc {
    pub x: f64,
    pub y: f64,
}

impl From<DVec2> for ParticleDoc {
    fn from(p: DVec2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<ParticleDoc> for DVec2 {
    fn from(p: ParticleDoc) -> Self {
        DVec2::new(p.x, p.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoordDoc {
    pub x: NumString,
    pub y: NumString,
}

impl From<DVec2> for CoordDoc {
    fn from(p: DVec2) -> Self {
        Self {
            x: NumString(p.x),
            y: NumString(p.y),
        }
    }
}

impl From<CoordDoc> for DVec2 {
    fn from(c: CoordDoc) -> Self {
        DVec2::new(c.x.0, c.y.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectDoc {
    pub topleft: CoordDoc,
    pub botright: CoordDoc,
}

impl From<&Rect> for RectDoc {
    fn from(r: &Rect) -> Self {
        Self {
            topleft: r.top_left().into(),
            botright: DVec2::new(r.right(), r.bottom()).into(),
        }
    }
}

impl From<RectDoc> for Rect {
    fn from(d: RectDoc) -> Self {
        Rect::from_corners(d.topleft.into(), d.botright.into())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineDoc {
    pub p1: CoordDoc,
    pub p2: CoordDoc,
}

impl From<&Segment> for LineDoc {
    fn from(l: &Segment) -> Self {
        Self {
            p1: l.p1.into(),
            p2: l.p2.into(),
        }
    }
}

impl From<LineDoc> for Segment {
    fn from(d: LineDoc) -> Self {
        Segment::new(d.p1.into(), d.p2.into())
    }
}

/// A complete designer document.
///
/// The project shape carries the authored rect/line collections; the
/// flattened export omits them because they have been rasterized away.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneDoc {
    pub scene: ParamsDoc,
    pub fluid_particles: Vec<ParticleDoc>,
    pub boundary_particles: Vec<ParticleDoc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fluid_rects: Vec<RectDoc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub boundary_rects: Vec<RectDoc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub boundary_lines: Vec<LineDoc>,
}
