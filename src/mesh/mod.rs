//! `Mesh` struct: an indexed triangle mesh with shared vertex storage

use crate::errors::ValidationError;
use crate::float_types::{EPSILON, Real};
use hashbrown::{HashMap, HashSet};
use nalgebra::Point3;
use std::{fmt::Debug, sync::OnceLock};

pub mod icosahedron;
pub mod subdivide;

/// Highest subdivision level accepted by [`Mesh::geodesic`].
///
/// Triangle counts grow as `20 * 4^levels`; level 4 already yields 5120
/// triangles, enough for a smooth silhouette at typical view distances.
pub const MAX_SUBDIVISIONS: u32 = 4;

/// Canonical form of an undirected edge: smaller index first, so `(a, b)`
/// and `(b, a)` resolve to the same key.
pub(crate) const fn edge_key(a: u32, b: u32) -> (u32, u32) {
    if a < b { (a, b) } else { (b, a) }
}

/// Axis-aligned bounding box spanning a set of vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub mins: Point3<Real>,
    pub maxs: Point3<Real>,
}

impl Aabb {
    #[inline]
    pub const fn new(mins: Point3<Real>, maxs: Point3<Real>) -> Self {
        Self { mins, maxs }
    }

    #[inline]
    pub fn center(&self) -> Point3<Real> {
        Point3::new(
            (self.mins.x + self.maxs.x) * 0.5,
            (self.mins.y + self.maxs.y) * 0.5,
            (self.mins.z + self.maxs.z) * 0.5,
        )
    }

    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.maxs.x >= other.mins.x
            && self.mins.x <= other.maxs.x
            && self.maxs.y >= other.mins.y
            && self.mins.y <= other.maxs.y
            && self.maxs.z >= other.mins.z
            && self.mins.z <= other.maxs.z
    }
}

/// An indexed triangle mesh: shared vertex positions plus a flat list of
/// index triples.
///
/// A vertex's position in `vertices` is its permanent identifier for the
/// lifetime of the mesh; triangles reference vertices only by index.
/// Winding is fixed at creation so every face normal points away from
/// the solid's interior.
#[derive(Clone, Debug)]
pub struct Mesh<S: Clone + Send + Sync + Debug> {
    /// Shared vertex positions
    pub vertices: Vec<Point3<Real>>,

    /// Triangle corners as indices into `vertices`, grouped in runs of 3
    pub indices: Vec<u32>,

    /// Lazily calculated AABB that spans `vertices`.
    pub bounding_box: OnceLock<Aabb>,

    /// Metadata
    pub metadata: Option<S>,
}

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    /// An empty mesh with no vertices and no triangles
    pub const fn new() -> Self {
        Mesh {
            vertices: Vec::new(),
            indices: Vec::new(),
            bounding_box: OnceLock::new(),
            metadata: None,
        }
    }

    /// Generate a geodesic polyhedron: a regular icosahedron refined by
    /// `subdivisions` rounds of 4-way triangle subdivision.
    ///
    /// Rejects non-positive or non-finite `scale` and any `subdivisions`
    /// above [`MAX_SUBDIVISIONS`] before building anything; on error no
    /// partial mesh exists. Two calls with identical arguments produce
    /// bit-identical vertex and index arrays.
    ///
    /// Midpoint vertices stay on the flat faces of their parent
    /// triangles, so the output is a piecewise-flat approximation of the
    /// sphere. Callers wanting a true geodesic sphere opt in with
    /// [`Mesh::project_to_sphere`] afterwards.
    ///
    /// ## Example
    /// ```
    /// use icomesh::Mesh;
    ///
    /// let mesh: Mesh<()> = Mesh::geodesic(1.0, 1, None).unwrap();
    /// assert_eq!(mesh.vertex_count(), 42); // 12 base + one midpoint per base edge
    /// assert_eq!(mesh.triangle_count(), 80);
    /// ```
    pub fn geodesic(
        scale: Real,
        subdivisions: u32,
        metadata: Option<S>,
    ) -> Result<Mesh<S>, ValidationError> {
        if subdivisions > MAX_SUBDIVISIONS {
            return Err(ValidationError::SubdivisionsOutOfRange(subdivisions));
        }

        let mut mesh = Self::icosahedron(scale, metadata)?;
        mesh.subdivide_triangles_mut(subdivisions);
        Ok(mesh)
    }

    /// Number of unique vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangle faces
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterator over index triples, one per triangle face
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Vertex coordinates flattened to `[x, y, z]` triples in index
    /// order, the layout renderers consume alongside
    /// [`indices`](Self::indices)
    pub fn positions(&self) -> Vec<[Real; 3]> {
        self.vertices.iter().map(|p| [p.x, p.y, p.z]).collect()
    }

    /// The set of undirected edges referenced by the triangle list, in
    /// canonical `(min, max)` order
    pub fn edges(&self) -> HashSet<(u32, u32)> {
        let mut edges = HashSet::new();
        for [a, b, c] in self.triangles() {
            edges.insert(edge_key(a, b));
            edges.insert(edge_key(b, c));
            edges.insert(edge_key(a, c));
        }
        edges
    }

    /// `true` when every undirected edge is shared by exactly two
    /// triangles, i.e. the mesh is a closed surface with no cracks and
    /// no duplicated-but-coincident seam vertices
    pub fn is_closed(&self) -> bool {
        let mut edge_faces: HashMap<(u32, u32), u32> = HashMap::new();
        for [a, b, c] in self.triangles() {
            *edge_faces.entry(edge_key(a, b)).or_insert(0) += 1;
            *edge_faces.entry(edge_key(b, c)).or_insert(0) += 1;
            *edge_faces.entry(edge_key(a, c)).or_insert(0) += 1;
        }
        !edge_faces.is_empty() && edge_faces.values().all(|&faces| faces == 2)
    }

    /// Axis aligned bounding box of this Mesh (cached after first call)
    pub fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            let mut mins = Point3::new(Real::MAX, Real::MAX, Real::MAX);
            let mut maxs = Point3::new(-Real::MAX, -Real::MAX, -Real::MAX);
            for v in &self.vertices {
                mins.x = mins.x.min(v.x);
                mins.y = mins.y.min(v.y);
                mins.z = mins.z.min(v.z);
                maxs.x = maxs.x.max(v.x);
                maxs.y = maxs.y.max(v.y);
                maxs.z = maxs.z.max(v.z);
            }
            Aabb::new(mins, maxs)
        })
    }

    /// Drop the cached bounding box after a mutation of `vertices`
    pub fn invalidate_bounding_box(&mut self) {
        self.bounding_box = OnceLock::new();
    }

    /// Push every vertex radially onto the sphere of the given `radius`,
    /// turning the piecewise-flat subdivision output into a geodesic
    /// sphere approximation.
    ///
    /// Never applied implicitly: [`Mesh::geodesic`] leaves midpoints on
    /// the flat face planes, and callers opt in by passing
    /// [`icosahedron::circumradius`] of their scale factor. Vertices
    /// closer to the origin than `EPSILON` have no radial direction and
    /// are left in place; the generator never produces one.
    pub fn project_to_sphere(&mut self, radius: Real) {
        for pos in &mut self.vertices {
            let norm = pos.coords.norm();
            if norm > EPSILON {
                *pos = Point3::from(pos.coords * (radius / norm));
            }
        }
        self.invalidate_bounding_box();
    }
}

impl<S: Clone + Send + Sync + Debug> Default for Mesh<S> {
    fn default() -> Self {
        Self::new()
    }
}
