//! Procedural mesh generation.
//!
//! Builds the three shapes the chessboard scene is made of: a flat square in
//! the XZ plane, a capped cylinder and a UV sphere. Each shape is a [`Mesh`],
//! an ordered list of [`Primitive`]s whose vertices keep the winding a
//! quad/strip/fan rasterizer expects. The renderer turns primitives into
//! triangles (and outlines) through [`Primitive::triangles`] and
//! [`Primitive::outline`].
//!
//! # Vertex layout
//!
//! - square: one [`PrimitiveKind::Quad`] with 4 vertices, counter-clockwise
//!   seen from +Y.
//! - cylinder: a [`PrimitiveKind::QuadStrip`] side with `2·(slices+1)`
//!   vertices alternating bottom/top ring, then a top and a bottom
//!   [`PrimitiveKind::Polygon`] of `slices` vertices each.
//! - sphere: `slices` latitude bands, each a [`PrimitiveKind::QuadStrip`] of
//!   `2·(stacks+1)` vertices. The last longitude sample repeats the first so
//!   every band is closed.
//!
//! All generators validate their parameters and return
//! [`GeometryError::InvalidGeometryParameter`] instead of emitting degenerate
//! geometry.

use raylib::prelude::Vector3;
use smallvec::SmallVec;
use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;

/// Minimum slice count for a cylinder.
pub const MIN_CYLINDER_SLICES: usize = 3;
/// Minimum number of latitude bands for a sphere.
pub const MIN_SPHERE_SLICES: usize = 2;
/// Minimum number of longitude steps per sphere band.
pub const MIN_SPHERE_STACKS: usize = 3;

/// Error returned when a generator receives parameters that cannot describe
/// a real surface.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    InvalidGeometryParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Human readable reason, including the rejected value.
        detail: String,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidGeometryParameter { parameter, detail } => {
                write!(f, "invalid geometry parameter `{}`: {}", parameter, detail)
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// How the vertices of a [`Primitive`] are connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// Four vertices forming one quad.
    Quad,
    /// Pairs of vertices; each consecutive pair of pairs forms a quad.
    QuadStrip,
    /// Convex polygon, triangulated as a fan around the first vertex.
    Polygon,
}

/// A run of vertices sharing one connectivity rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub kind: PrimitiveKind,
    pub vertices: Vec<Vector3>,
}

impl Primitive {
    fn new(kind: PrimitiveKind, vertices: Vec<Vector3>) -> Self {
        Primitive { kind, vertices }
    }

    /// Triangles covering the primitive, in emission order.
    pub fn triangles(&self) -> Vec<[Vector3; 3]> {
        let v = &self.vertices;
        match self.kind {
            PrimitiveKind::Quad | PrimitiveKind::Polygon => {
                if v.len() < 3 {
                    return Vec::new();
                }
                (1..v.len() - 1).map(|i| [v[0], v[i], v[i + 1]]).collect()
            }
            PrimitiveKind::QuadStrip => {
                let quads = (v.len() / 2).saturating_sub(1);
                let mut out = Vec::with_capacity(quads * 2);
                for k in 0..quads {
                    let (a, b, c, d) = (v[2 * k], v[2 * k + 1], v[2 * k + 3], v[2 * k + 2]);
                    out.push([a, b, c]);
                    out.push([a, c, d]);
                }
                out
            }
        }
    }

    /// Closed outline of a quad or polygon as line segments.
    ///
    /// Strips have no meaningful outline and yield nothing.
    pub fn outline(&self) -> Vec<(Vector3, Vector3)> {
        match self.kind {
            PrimitiveKind::Quad | PrimitiveKind::Polygon => {
                let n = self.vertices.len();
                (0..n)
                    .map(|i| (self.vertices[i], self.vertices[(i + 1) % n]))
                    .collect()
            }
            PrimitiveKind::QuadStrip => Vec::new(),
        }
    }
}

/// A shape made of one or more primitives.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    pub primitives: SmallVec<[Primitive; 3]>,
}

impl Mesh {
    /// Total number of vertices across all primitives.
    pub fn vertex_count(&self) -> usize {
        self.primitives.iter().map(|p| p.vertices.len()).sum()
    }

    /// Every triangle of every primitive.
    pub fn triangles(&self) -> Vec<[Vector3; 3]> {
        self.primitives.iter().flat_map(|p| p.triangles()).collect()
    }
}

fn check_positive(parameter: &'static str, value: f32) -> Result<(), GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidGeometryParameter {
            parameter,
            detail: format!("must be a finite value > 0, got {}", value),
        })
    }
}

fn check_min(parameter: &'static str, value: usize, min: usize) -> Result<(), GeometryError> {
    if value >= min {
        Ok(())
    } else {
        Err(GeometryError::InvalidGeometryParameter {
            parameter,
            detail: format!("must be >= {}, got {}", min, value),
        })
    }
}

/// Flat square of side `size` in the XZ plane with its minimum corner at
/// `origin`.
pub fn square(origin: Vector3, size: f32) -> Result<Mesh, GeometryError> {
    check_positive("size", size)?;
    let Vector3 { x, y, z } = origin;
    let vertices = vec![
        Vector3::new(x, y, z),
        Vector3::new(x + size, y, z),
        Vector3::new(x + size, y, z + size),
        Vector3::new(x, y, z + size),
    ];
    let mut mesh = Mesh::default();
    mesh.primitives
        .push(Primitive::new(PrimitiveKind::Quad, vertices));
    Ok(mesh)
}

/// Ring of `slices` points of the given radius at height `y`.
fn ring(radius: f32, y: f32, slices: usize) -> impl Iterator<Item = Vector3> {
    (0..slices).map(move |i| {
        let angle = TAU * i as f32 / slices as f32;
        Vector3::new(radius * angle.cos(), y, radius * angle.sin())
    })
}

/// Capped cylinder standing on the XZ plane, axis along +Y.
pub fn cylinder(radius: f32, height: f32, slices: usize) -> Result<Mesh, GeometryError> {
    check_positive("radius", radius)?;
    check_positive("height", height)?;
    check_min("slices", slices, MIN_CYLINDER_SLICES)?;

    let mut side = Vec::with_capacity(2 * (slices + 1));
    for i in 0..=slices {
        let angle = TAU * i as f32 / slices as f32;
        let (x, z) = (radius * angle.cos(), radius * angle.sin());
        side.push(Vector3::new(x, 0.0, z));
        side.push(Vector3::new(x, height, z));
    }

    let mut mesh = Mesh::default();
    mesh.primitives
        .push(Primitive::new(PrimitiveKind::QuadStrip, side));
    mesh.primitives.push(Primitive::new(
        PrimitiveKind::Polygon,
        ring(radius, height, slices).collect(),
    ));
    mesh.primitives.push(Primitive::new(
        PrimitiveKind::Polygon,
        ring(radius, 0.0, slices).collect(),
    ));
    Ok(mesh)
}

/// UV sphere centered on the origin with its poles on the Z axis.
///
/// `slices` is the number of latitude bands, `stacks` the number of longitude
/// steps in each band.
pub fn sphere(radius: f32, slices: usize, stacks: usize) -> Result<Mesh, GeometryError> {
    check_positive("radius", radius)?;
    check_min("slices", slices, MIN_SPHERE_SLICES)?;
    check_min("stacks", stacks, MIN_SPHERE_STACKS)?;

    let mut mesh = Mesh::default();
    for i in 0..slices {
        let lat0 = -FRAC_PI_2 + PI * i as f32 / slices as f32;
        let lat1 = -FRAC_PI_2 + PI * (i + 1) as f32 / slices as f32;
        let (z0, r0) = (lat0.sin() * radius, lat0.cos() * radius);
        let (z1, r1) = (lat1.sin() * radius, lat1.cos() * radius);

        let mut band = Vec::with_capacity(2 * (stacks + 1));
        for j in 0..=stacks {
            // j == stacks wraps back to longitude 0
            let lng = TAU * (j % stacks) as f32 / stacks as f32;
            let (y, x) = lng.sin_cos();
            band.push(Vector3::new(x * r0, y * r0, z0));
            band.push(Vector3::new(x * r1, y * r1, z1));
        }
        mesh.primitives
            .push(Primitive::new(PrimitiveKind::QuadStrip, band));
    }
    Ok(mesh)
}
