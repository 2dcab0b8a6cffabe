//! # Box Topology
//!
//! Closed-form sizes and index addressing for the ring/cap vertex layout.
//!
//! The vertex index space is one flat arena, partitioned in this fixed order:
//!
//! ```text
//! [ ring layers: (y+1) * 2*(x+z) ][ top interior: (x-1)*(z-1) ][ bottom interior: (x-1)*(z-1) ]
//! ```
//!
//! Each ring layer sweeps the side perimeter at one height: the front edge
//! (x ascending at z = 0), the +z side edge, the back edge (x descending at
//! z = z_size), then the -z side edge back towards the start. The helpers
//! below are the only place this arithmetic lives; the triangulation derives
//! every cursor start from them rather than hardcoding offsets.

/// Index layout of a rounded-cube vertex arena for one grid resolution.
///
/// Pure arithmetic over validated resolutions; callers are expected to have
/// checked `x_size >= 2`, `y_size >= 1`, `z_size >= 2` beforehand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxTopology {
    x_size: u32,
    y_size: u32,
    z_size: u32,
}

impl BoxTopology {
    /// Creates the layout for the given grid resolutions.
    pub fn new(x_size: u32, y_size: u32, z_size: u32) -> Self {
        Self {
            x_size,
            y_size,
            z_size,
        }
    }

    /// Number of vertices in one ring layer: `2*(x+z)`.
    #[inline]
    pub fn ring_len(&self) -> usize {
        2 * (self.x_size as usize + self.z_size as usize)
    }

    /// Number of ring layers: `y+1` (one per horizontal grid line).
    #[inline]
    pub fn ring_layer_count(&self) -> usize {
        self.y_size as usize + 1
    }

    /// Total ring-block size: `(y+1) * 2*(x+z)`.
    #[inline]
    pub fn ring_vertex_count(&self) -> usize {
        self.ring_layer_count() * self.ring_len()
    }

    /// Arena index of a ring vertex addressed by (layer, perimeter step).
    #[inline]
    pub fn ring_vertex(&self, layer: usize, step: usize) -> usize {
        layer * self.ring_len() + step
    }

    /// Grid (x, z) coordinates of one perimeter step.
    ///
    /// Steps `0..=x` run along the front edge, `x+1..=x+z` up the +z side
    /// edge, `x+z+1..=2x+z` back along the far edge, and the remainder down
    /// the -z side edge.
    pub fn perimeter_coords(&self, step: usize) -> (u32, u32) {
        let x = self.x_size as usize;
        let z = self.z_size as usize;
        debug_assert!(step < self.ring_len());

        if step <= x {
            (step as u32, 0)
        } else if step <= x + z {
            (self.x_size, (step - x) as u32)
        } else if step <= 2 * x + z {
            ((2 * x + z - step) as u32, self.z_size)
        } else {
            (0, (self.ring_len() - step) as u32)
        }
    }

    /// Interior lattice size of one cap: `(x-1)*(z-1)`.
    #[inline]
    pub fn cap_interior_count(&self) -> usize {
        (self.x_size as usize - 1) * (self.z_size as usize - 1)
    }

    /// Arena index of the first top-cap interior vertex.
    #[inline]
    pub fn top_interior_start(&self) -> usize {
        self.ring_vertex_count()
    }

    /// Arena index of the first bottom-cap interior vertex.
    #[inline]
    pub fn bottom_interior_start(&self) -> usize {
        self.top_interior_start() + self.cap_interior_count()
    }

    /// Number of corner vertices: always 8.
    #[inline]
    pub fn corner_vertex_count(&self) -> usize {
        8
    }

    /// Number of edge vertices: `4*(x+y+z-3)`.
    #[inline]
    pub fn edge_vertex_count(&self) -> usize {
        4 * (self.x_size as usize + self.y_size as usize + self.z_size as usize - 3)
    }

    /// Number of face-interior vertices:
    /// `2*((x-1)(y-1) + (x-1)(z-1) + (y-1)(z-1))`.
    #[inline]
    pub fn face_interior_vertex_count(&self) -> usize {
        let x = self.x_size as usize - 1;
        let y = self.y_size as usize - 1;
        let z = self.z_size as usize - 1;
        2 * (x * y + x * z + y * z)
    }

    /// Total vertex count: corners + edges + face interiors.
    ///
    /// Must equal the arena layout size
    /// `ring_vertex_count() + 2*cap_interior_count()`; the unit tests assert
    /// the identity, which is the primary correctness invariant of the
    /// vertex stage.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.corner_vertex_count() + self.edge_vertex_count() + self.face_interior_vertex_count()
    }

    /// Number of logical quads: `2*(xy + xz + yz)`.
    #[inline]
    pub fn quad_count(&self) -> usize {
        let x = self.x_size as usize;
        let y = self.y_size as usize;
        let z = self.z_size as usize;
        2 * (x * y + x * z + y * z)
    }

    /// Number of triangles: two per quad.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        2 * self.quad_count()
    }

    /// Length of the flat triangle index stream: six per quad.
    #[inline]
    pub fn index_count(&self) -> usize {
        6 * self.quad_count()
    }
}
