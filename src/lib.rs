//! Procedural **geodesic polyhedron** generation: a regular icosahedron
//! refined by recursive 4-way triangle subdivision, with shared-edge
//! midpoint deduplication, producing an indexed triangle [`Mesh`].
//!
//! Generation is a pure function of its parameters. One call builds the
//! 12-vertex/20-face base solid, runs the requested number of subdivision
//! passes, and returns owned vertex/index arrays; nothing is shared or
//! reused across calls.
//!
//! ```
//! use icomesh::Mesh;
//!
//! let mesh: Mesh<()> = Mesh::geodesic(1.0, 2, None).unwrap();
//! assert_eq!(mesh.triangle_count(), 20 * 4_usize.pow(2));
//! ```
//!
//! Subdivision midpoints stay on the flat faces of their parent
//! triangles. To inflate the result into a true geodesic sphere
//! approximation, opt in explicitly:
//!
//! ```
//! use icomesh::Mesh;
//! use icomesh::mesh::icosahedron;
//!
//! let mut mesh: Mesh<()> = Mesh::geodesic(1.0, 3, None).unwrap();
//! mesh.project_to_sphere(icosahedron::circumradius(1.0));
//! ```
//!
//! # Features
//! #### Default
//! - **f32**: use f32 as Real
//!
//! #### Optional
//! - **f64**: use f64 as Real, this conflicts with f32

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod mesh;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::ValidationError;
pub use mesh::Mesh;
