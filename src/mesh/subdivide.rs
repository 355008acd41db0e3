//! 4-way triangle subdivision with shared-edge midpoint deduplication

use crate::float_types::Real;
use crate::mesh::{Mesh, edge_key};
use hashbrown::HashMap;
use nalgebra::Point3;
use std::fmt::Debug;

/// Midpoint vertex cache for one subdivision pass.
///
/// Keys are undirected edges in canonical `(min, max)` order, so the two
/// triangles sharing an edge resolve to the same midpoint vertex instead
/// of creating coincident duplicates. Vertex indices change meaning as
/// the vertex list grows between passes, so a cache never outlives the
/// pass that created it.
struct MidpointCache {
    map: HashMap<(u32, u32), u32>,
}

impl MidpointCache {
    fn new() -> Self {
        MidpointCache {
            map: HashMap::new(),
        }
    }

    /// Index of the vertex at the midpoint of edge `(a, b)`.
    ///
    /// The first lookup of an edge appends the component-wise mean of
    /// the two endpoints as a new vertex; every later lookup, in either
    /// argument order, returns that same index without touching the
    /// vertex list.
    fn midpoint(&mut self, vertices: &mut Vec<Point3<Real>>, a: u32, b: u32) -> u32 {
        let key = edge_key(a, b);
        if let Some(&index) = self.map.get(&key) {
            return index;
        }

        debug_assert!(
            (a as usize) < vertices.len() && (b as usize) < vertices.len(),
            "edge ({}, {}) references a vertex outside the mesh",
            a,
            b
        );

        let p1 = vertices[a as usize];
        let p2 = vertices[b as usize];
        // the new vertex stays on the flat face plane, no renormalization
        let mid = Point3::new(
            (p1.x + p2.x) / 2.0,
            (p1.y + p2.y) / 2.0,
            (p1.z + p2.z) / 2.0,
        );

        vertices.push(mid);
        let index = (vertices.len() - 1) as u32;
        self.map.insert(key, index);
        index
    }
}

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    /// Subdivide all triangles in this Mesh `levels` times, returning a
    /// new Mesh. `levels = 0` returns an unchanged copy.
    pub fn subdivide_triangles(&self, levels: u32) -> Mesh<S> {
        let mut mesh = self.clone();
        mesh.subdivide_triangles_mut(levels);
        mesh
    }

    /// Subdivide all triangles in this Mesh `levels` times, in place.
    ///
    /// Each pass splits every triangle `(a, b, c)` into four children
    /// that preserve the parent's winding:
    ///
    /// ```text
    ///        a
    ///       /  \
    ///     mab -- mac
    ///     /  \  /  \
    ///    b -- mbc -- c
    /// ```
    ///
    /// Edge midpoints are deduplicated through a per-pass cache, so the
    /// two triangles flanking an edge share
    /// one midpoint vertex and the surface stays closed. The working
    /// triangle list is replaced by the pass output before the next
    /// pass begins; `levels = 0` is a no-op.
    pub fn subdivide_triangles_mut(&mut self, levels: u32) {
        for _ in 0..levels {
            let mut cache = MidpointCache::new();
            let mut refined = Vec::with_capacity(self.indices.len() * 4);

            for tri in self.indices.chunks_exact(3) {
                let (a, b, c) = (tri[0], tri[1], tri[2]);

                let mab = cache.midpoint(&mut self.vertices, a, b);
                let mbc = cache.midpoint(&mut self.vertices, b, c);
                let mac = cache.midpoint(&mut self.vertices, a, c);

                // three corner triangles, then the central one
                refined.extend_from_slice(&[a, mab, mac]);
                refined.extend_from_slice(&[mab, b, mbc]);
                refined.extend_from_slice(&[mac, mbc, c]);
                refined.extend_from_slice(&[mab, mbc, mac]);
            }

            self.indices = refined;
        }

        if levels > 0 {
            self.invalidate_bounding_box();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment() -> Vec<Point3<Real>> {
        vec![Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0)]
    }

    #[test]
    fn midpoint_is_idempotent_within_a_pass() {
        let mut vertices = segment();
        let mut cache = MidpointCache::new();

        let first = cache.midpoint(&mut vertices, 0, 1);
        let swapped = cache.midpoint(&mut vertices, 1, 0);
        let again = cache.midpoint(&mut vertices, 0, 1);

        assert_eq!(first, swapped);
        assert_eq!(first, again);
        assert_eq!(vertices.len(), 3, "only one midpoint vertex may exist");
        assert_eq!(vertices[first as usize], Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn fresh_cache_recomputes_midpoints() {
        let mut vertices = segment();

        let first = MidpointCache::new().midpoint(&mut vertices, 0, 1);
        let second = MidpointCache::new().midpoint(&mut vertices, 0, 1);

        assert_ne!(first, second, "a new pass starts from an empty cache");
        assert_eq!(vertices.len(), 4);
    }

    #[test]
    fn shared_edge_midpoint_created_once() {
        // two triangles flanking the edge (0, 1)
        let mut vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
            Point3::new(0.5, -1.0, 0.0),
        ];
        let mut cache = MidpointCache::new();

        let from_upper = cache.midpoint(&mut vertices, 0, 1);
        let from_lower = cache.midpoint(&mut vertices, 1, 0);

        assert_eq!(from_upper, from_lower);
        assert_eq!(vertices.len(), 5);
    }
}
