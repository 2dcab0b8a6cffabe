//! # Rounded Cube
//!
//! Procedural mesh generation for rounded rectangular boxes. Builds a
//! position buffer, a parallel outward-normal buffer and a triangle index
//! buffer forming a closed, seamless, outward-wound mesh from three integer
//! grid resolutions and a rounding radius.
//!
//! ## Architecture
//!
//! ```text
//! (x, y, z, roundness)
//!       ↓
//! ring sweep + cap lattices (positions, normals)
//!       ↓
//! side bands + cap stitching (triangle indices)
//!       ↓
//! Mesh (immutable buffers, f32 export at the GPU boundary)
//! ```
//!
//! The vertex index space is a flat arena partitioned into ring layers and
//! two cap interior lattices; [`topology::BoxTopology`] owns that addressing
//! and the closed-form size formulas the buffers are allocated from.
//!
//! ## Usage
//!
//! ```rust
//! use rounded_cube::create_rounded_cube;
//!
//! let mesh = create_rounded_cube(8, 4, 6, 2.0).unwrap();
//! assert_eq!(mesh.vertex_count(), 210);
//! assert!(mesh.is_closed());
//! ```

pub mod error;
pub mod mesh;
pub mod primitives;
pub mod topology;

pub use error::{MeshError, MeshResult};
pub use mesh::Mesh;
pub use primitives::{create_rounded_cube, RoundedCube};
pub use topology::BoxTopology;
