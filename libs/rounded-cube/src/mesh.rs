//! # Mesh Data Structure
//!
//! Indexed triangle mesh with per-vertex positions and outward normals.

use std::collections::HashSet;

use config::constants::DEGENERATE_AREA_EPSILON;
use glam::DVec3;

/// A triangle mesh with parallel position/normal buffers and triangle indices.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the GPU boundary for rendering.
///
/// The buffers are fully populated during generation and immutable
/// afterwards; the read-only accessors below are the whole surface.
///
/// # Example
///
/// ```rust
/// use rounded_cube::create_rounded_cube;
///
/// let mesh = create_rounded_cube(4, 4, 4, 1.0).unwrap();
/// assert_eq!(mesh.vertex_count(), mesh.normals().len());
/// assert_eq!(mesh.indices_u32().len(), mesh.triangle_count() * 3);
/// ```
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Outward unit normals, parallel to `vertices`
    normals: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Assembles a mesh from fully populated buffers.
    ///
    /// The position and normal buffers must be parallel (same length, same
    /// index space); triangle indices reference both.
    pub(crate) fn from_buffers(
        vertices: Vec<DVec3>,
        normals: Vec<DVec3>,
        triangles: Vec<[u32; 3]>,
    ) -> Self {
        debug_assert_eq!(vertices.len(), normals.len());
        Self {
            vertices,
            normals,
            triangles,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns a reference to the vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex position at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the vertex normal at the given index.
    #[inline]
    pub fn normal(&self, index: u32) -> DVec3 {
        self.normals[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Validates the mesh for structural correctness.
    ///
    /// Checks:
    /// - Position and normal buffers are parallel
    /// - All triangle indices are valid
    /// - No degenerate triangles (repeated indices or zero area)
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        if self.normals.len() != self.vertices.len() {
            return false;
        }

        let vertex_count = self.vertices.len() as u32;

        for tri in &self.triangles {
            // Check indices are valid
            if tri[0] >= vertex_count || tri[1] >= vertex_count || tri[2] >= vertex_count {
                return false;
            }

            // Check for repeated indices
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }

            // Check for zero-area triangles
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let area = (v1 - v0).cross(v2 - v0).length();
            if area < DEGENERATE_AREA_EPSILON {
                return false;
            }
        }

        true
    }

    /// Checks that the mesh is a closed, consistently oriented manifold.
    ///
    /// Every directed edge must appear exactly once, and its reverse must
    /// appear in an adjacent triangle. A crack, duplicated seam, or flipped
    /// triangle anywhere breaks one of the two conditions.
    pub fn is_closed(&self) -> bool {
        let mut directed_edges = HashSet::with_capacity(self.triangles.len() * 3);

        for tri in &self.triangles {
            for i in 0..3 {
                let edge = (tri[i], tri[(i + 1) % 3]);
                if !directed_edges.insert(edge) {
                    // Same directed edge shared by two triangles
                    return false;
                }
            }
        }

        directed_edges
            .iter()
            .all(|&(start, end)| directed_edges.contains(&(end, start)))
    }

    /// Exports vertex positions as f32 array for GPU upload.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports vertex normals as f32 array for GPU upload.
    pub fn normals_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.normals.len() * 3);
        for n in &self.normals {
            result.push(n.x as f32);
            result.push(n.y as f32);
            result.push(n.z as f32);
        }
        result
    }

    /// Exports triangle indices as a flat u32 array.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array, two index
    /// triples per logical quad.
    pub fn indices_u32(&self) -> Vec<u32> {
        let mut result = Vec::with_capacity(self.triangles.len() * 3);
        for tri in &self.triangles {
            result.push(tri[0]);
            result.push(tri[1]);
            result.push(tri[2]);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A tetrahedron with consistent outward winding.
    fn tetrahedron() -> Mesh {
        let vertices = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
        ];
        let normals = vec![
            DVec3::new(-1.0, -1.0, -1.0).normalize(),
            DVec3::X,
            DVec3::Y,
            DVec3::Z,
        ];
        let triangles = vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [0, 3, 2]];
        Mesh::from_buffers(vertices, normals, triangles)
    }

    #[test]
    fn test_counts_and_accessors() {
        let mesh = tetrahedron();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 4);
        assert_eq!(mesh.vertex(1), DVec3::new(1.0, 0.0, 0.0));
        assert_eq!(mesh.normal(3), DVec3::Z);
        assert_eq!(mesh.triangle(0), [0, 2, 1]);
    }

    #[test]
    fn test_bounding_box() {
        let mesh = tetrahedron();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_validate_accepts_tetrahedron() {
        assert!(tetrahedron().validate());
    }

    #[test]
    fn test_validate_rejects_out_of_range_index() {
        let mesh = Mesh::from_buffers(
            vec![DVec3::ZERO],
            vec![DVec3::Y],
            vec![[0, 1, 2]],
        );
        assert!(!mesh.validate());
    }

    #[test]
    fn test_validate_rejects_repeated_index() {
        let mesh = Mesh::from_buffers(
            vec![DVec3::ZERO, DVec3::X, DVec3::Y],
            vec![DVec3::Z, DVec3::Z, DVec3::Z],
            vec![[0, 0, 1]],
        );
        assert!(!mesh.validate());
    }

    #[test]
    fn test_validate_rejects_zero_area_triangle() {
        // Three collinear points
        let mesh = Mesh::from_buffers(
            vec![DVec3::ZERO, DVec3::X, DVec3::new(2.0, 0.0, 0.0)],
            vec![DVec3::Z, DVec3::Z, DVec3::Z],
            vec![[0, 1, 2]],
        );
        assert!(!mesh.validate());
    }

    #[test]
    fn test_closed_tetrahedron() {
        assert!(tetrahedron().is_closed());
    }

    #[test]
    fn test_open_triangle_is_not_closed() {
        let mesh = Mesh::from_buffers(
            vec![DVec3::ZERO, DVec3::X, DVec3::Y],
            vec![DVec3::Z, DVec3::Z, DVec3::Z],
            vec![[0, 1, 2]],
        );
        assert!(!mesh.is_closed());
    }

    #[test]
    fn test_duplicated_seam_is_not_closed() {
        // Two triangles traverse the same directed edge 0 -> 1
        let mesh = Mesh::from_buffers(
            vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z],
            vec![DVec3::Z, DVec3::Z, DVec3::Z, DVec3::Z],
            vec![[0, 1, 2], [0, 1, 3]],
        );
        assert!(!mesh.is_closed());
    }

    #[test]
    fn test_f32_exports() {
        let mesh = tetrahedron();
        let positions = mesh.vertices_f32();
        assert_eq!(positions.len(), 12);
        assert_eq!(&positions[3..6], &[1.0f32, 0.0, 0.0]);

        let normals = mesh.normals_f32();
        assert_eq!(normals.len(), 12);

        let indices = mesh.indices_u32();
        assert_eq!(indices.len(), 12);
        assert_eq!(&indices[0..3], &[0, 2, 1]);
    }
}
