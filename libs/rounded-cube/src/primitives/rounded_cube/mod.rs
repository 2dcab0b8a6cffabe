//! # Rounded Cube Builder
//!
//! Generates a closed, seamless mesh approximating a box with rounded edges
//! and corners, from integer grid resolutions and a rounding radius.
//!
//! The build runs in two stages over pre-sized buffers:
//!
//! 1. **Vertices**: sweep `y+1` perimeter rings bottom-to-top, then the two
//!    cap interior lattices, rounding every point onto the shell as it is
//!    written.
//! 2. **Triangles**: connect adjacent rings into side quads, then stitch each
//!    cap's interior lattice to its surrounding ring boundary with a collar
//!    of bridging quads.
//!
//! Index assignment is positional: the triangulation stage consumes the exact
//! vertex order produced by stage one, via the [`BoxTopology`] helpers.

use glam::DVec3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::topology::BoxTopology;

/// Rounded-cube mesh builder parameters.
///
/// Grid resolutions count subdivisions per axis; `roundness` is the radius
/// of the edge/corner rounding in grid units. Construction is eager and
/// one-shot: [`RoundedCube::to_mesh`] validates the parameters, generates
/// every buffer in a single pass and hands them off immutable.
///
/// # Examples
/// ```
/// use rounded_cube::RoundedCube;
///
/// let mesh = RoundedCube::new(8, 4, 6, 2.0).to_mesh().unwrap();
/// assert_eq!(mesh.vertex_count(), 210);
/// assert_eq!(mesh.triangle_count(), 416);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundedCube {
    /// Subdivisions along the x axis. Minimum 2.
    pub x_size: u32,
    /// Subdivisions along the y axis. Minimum 1.
    pub y_size: u32,
    /// Subdivisions along the z axis. Minimum 2.
    pub z_size: u32,
    /// Rounding radius in grid units, `0 <= roundness <= min(x,y,z)/2`.
    pub roundness: f64,
}

impl Default for RoundedCube {
    fn default() -> Self {
        Self {
            x_size: 4,
            y_size: 4,
            z_size: 4,
            roundness: 1.0,
        }
    }
}

impl RoundedCube {
    /// Creates a new builder with the given resolutions and rounding radius.
    pub fn new(x_size: u32, y_size: u32, z_size: u32, roundness: f64) -> Self {
        Self {
            x_size,
            y_size,
            z_size,
            roundness,
        }
    }

    /// Largest roundness the grid supports: half the smallest resolution.
    ///
    /// Beyond this the flat center region of the smallest faces would invert.
    pub fn max_roundness(&self) -> f64 {
        f64::from(self.x_size.min(self.y_size).min(self.z_size)) / 2.0
    }

    /// Checks the parameters before any buffer is allocated.
    ///
    /// The cap stitching always emits a near and a far collar row, so a cap
    /// lattice needs at least two cells along x and z. A single layer along
    /// y is fine. Out-of-range roundness is rejected rather than clamped.
    fn validate(&self) -> MeshResult<()> {
        if self.x_size == 0 || self.y_size == 0 || self.z_size == 0 {
            return Err(MeshError::invalid_dimension(format!(
                "grid resolution must be at least 1 on every axis, got {}x{}x{}",
                self.x_size, self.y_size, self.z_size
            )));
        }

        if self.x_size < 2 || self.z_size < 2 {
            return Err(MeshError::invalid_dimension(format!(
                "cap lattices need at least two subdivisions along x and z, got {}x{}x{}",
                self.x_size, self.y_size, self.z_size
            )));
        }

        let max_roundness = self.max_roundness();
        if !self.roundness.is_finite() || self.roundness < 0.0 || self.roundness > max_roundness {
            return Err(MeshError::invalid_roundness(format!(
                "roundness {} must lie in [0, {}] for a {}x{}x{} grid",
                self.roundness, max_roundness, self.x_size, self.y_size, self.z_size
            )));
        }

        Ok(())
    }

    /// Generates the mesh.
    ///
    /// Fails only on invalid parameters; generation itself has no failure
    /// paths. The output buffer sizes follow the closed forms of
    /// [`BoxTopology`] exactly.
    pub fn to_mesh(&self) -> MeshResult<Mesh> {
        self.validate()?;

        let topology = BoxTopology::new(self.x_size, self.y_size, self.z_size);
        let (positions, normals) = self.generate_vertices(&topology);
        let triangles = self.generate_triangles(&topology);

        debug_assert_eq!(positions.len(), topology.vertex_count());
        debug_assert_eq!(triangles.len(), topology.triangle_count());

        Ok(Mesh::from_buffers(positions, normals, triangles))
    }

    /// Grid dimensions as a vector, for the per-vertex rounding clamp.
    fn dimensions(&self) -> DVec3 {
        DVec3::new(
            f64::from(self.x_size),
            f64::from(self.y_size),
            f64::from(self.z_size),
        )
    }

    /// Fills the position and normal arenas in ring/cap order.
    fn generate_vertices(&self, topology: &BoxTopology) -> (Vec<DVec3>, Vec<DVec3>) {
        let total = topology.vertex_count();
        let mut positions = vec![DVec3::ZERO; total];
        let mut normals = vec![DVec3::ZERO; total];

        let dims = self.dimensions();
        let radius = self.roundness;
        let ring = topology.ring_len();
        let ring_total = topology.ring_vertex_count();

        // Ring layers occupy disjoint equally-sized arena slices, so they can
        // be filled in parallel without disturbing the index assignment.
        let (ring_positions, cap_positions) = positions.split_at_mut(ring_total);
        let (ring_normals, cap_normals) = normals.split_at_mut(ring_total);

        ring_positions
            .par_chunks_mut(ring)
            .zip(ring_normals.par_chunks_mut(ring))
            .enumerate()
            .for_each(|(layer, (layer_positions, layer_normals))| {
                for step in 0..ring {
                    let (gx, gz) = topology.perimeter_coords(step);
                    let raw = DVec3::new(f64::from(gx), layer as f64, f64::from(gz));
                    let (position, normal) = round_vertex(raw, dims, radius);
                    layer_positions[step] = position;
                    layer_normals[step] = normal;
                }
            });

        // Cap interior lattices, top then bottom, z-major like the ring sweep.
        let mut cursor = 0;
        for &height in &[self.y_size, 0] {
            for gz in 1..self.z_size {
                for gx in 1..self.x_size {
                    let raw = DVec3::new(f64::from(gx), f64::from(height), f64::from(gz));
                    let (position, normal) = round_vertex(raw, dims, radius);
                    cap_positions[cursor] = position;
                    cap_normals[cursor] = normal;
                    cursor += 1;
                }
            }
        }
        debug_assert_eq!(cursor, 2 * topology.cap_interior_count());

        (positions, normals)
    }

    /// Emits the full triangle buffer: side bands, top cap, bottom cap.
    fn generate_triangles(&self, topology: &BoxTopology) -> Vec<[u32; 3]> {
        let mut triangles = Vec::with_capacity(topology.triangle_count());
        self.add_side_quads(&mut triangles, topology);
        self.add_top_cap_quads(&mut triangles, topology);
        self.add_bottom_cap_quads(&mut triangles, topology);
        triangles
    }

    /// Connects every pair of adjacent ring layers into a band of quads.
    fn add_side_quads(&self, triangles: &mut Vec<[u32; 3]>, topology: &BoxTopology) {
        let ring = topology.ring_len();
        let mut v = topology.ring_vertex(0, 0);

        for _ in 0..self.y_size {
            for _ in 0..ring - 1 {
                push_quad(triangles, v, v + 1, v + ring, v + ring + 1);
                v += 1;
            }
            // Wrap-around seam: the last quad of the band closes the loop
            // back to the layer's first index instead of running off the end.
            push_quad(triangles, v, v + 1 - ring, v + ring, v + 1);
            v += 1;
        }
    }

    /// Tiles the top face: a near collar row, the interior lattice rows, and
    /// a far collar row.
    ///
    /// The ring boundary runs counter-clockwise around the cap while the
    /// interior lattice runs row-major, so the middle rows walk three
    /// independent cursors: `v_min` descending along the -z ring edge,
    /// `v_mid` ascending through the lattice, `v_max` ascending along the
    /// +z ring edge.
    fn add_top_cap_quads(&self, triangles: &mut Vec<[u32; 3]>, topology: &BoxTopology) {
        let x = self.x_size as usize;
        let z = self.z_size as usize;
        let ring = topology.ring_len();

        // Near collar: the top ring's front edge against the first lattice row.
        let mut v = topology.ring_vertex(self.y_size as usize, 0);
        for _ in 0..x - 1 {
            push_quad(triangles, v, v + 1, v + ring - 1, v + ring);
            v += 1;
        }
        // Row-ending bridge onto the +z side edge.
        push_quad(triangles, v, v + 1, v + ring - 1, v + 2);

        let mut v_min = topology.top_interior_start() - 1;
        let mut v_mid = topology.top_interior_start();
        let mut v_max = v + 2;

        for _ in 1..z - 1 {
            push_quad(triangles, v_min, v_mid, v_min - 1, v_mid + x - 1);
            for _ in 1..x - 1 {
                push_quad(triangles, v_mid, v_mid + 1, v_mid + x - 1, v_mid + x);
                v_mid += 1;
            }
            push_quad(triangles, v_mid, v_max, v_mid + x - 1, v_max + 1);
            v_min -= 1;
            v_mid += 1;
            v_max += 1;
        }

        // Far collar: the last lattice row against the ring's far edge, which
        // runs in the opposite direction, so its cursor decreases.
        let mut v_top = v_min - 2;
        push_quad(triangles, v_min, v_mid, v_top + 1, v_top);
        for _ in 1..x - 1 {
            push_quad(triangles, v_mid, v_mid + 1, v_top, v_top - 1);
            v_top -= 1;
            v_mid += 1;
        }
        push_quad(triangles, v_mid, v_top - 2, v_top, v_top - 1);
    }

    /// Tiles the bottom face, mirroring the top with reversed winding.
    ///
    /// The bottom faces outward-downward, so every quad swaps its row order
    /// relative to the top cap. The lattice base offset differs too: the
    /// bottom interior grid is stored after the top one.
    fn add_bottom_cap_quads(&self, triangles: &mut Vec<[u32; 3]>, topology: &BoxTopology) {
        let x = self.x_size as usize;
        let z = self.z_size as usize;
        let ring = topology.ring_len();

        // Near collar: the first lattice row against the bottom ring's front
        // edge, starting at the corner bridge from the ring's wrap point.
        let mut v = 1;
        let mut v_mid = topology.bottom_interior_start();
        push_quad(triangles, ring - 1, v_mid, 0, 1);
        for _ in 1..x - 1 {
            push_quad(triangles, v_mid, v_mid + 1, v, v + 1);
            v += 1;
            v_mid += 1;
        }
        push_quad(triangles, v_mid, v + 2, v, v + 1);

        let mut v_min = ring - 2;
        v_mid -= x - 2;
        let mut v_max = v + 2;

        for _ in 1..z - 1 {
            push_quad(triangles, v_min, v_mid + x - 1, v_min + 1, v_mid);
            for _ in 1..x - 1 {
                push_quad(triangles, v_mid + x - 1, v_mid + x, v_mid, v_mid + 1);
                v_mid += 1;
            }
            push_quad(triangles, v_mid + x - 1, v_max + 1, v_mid, v_max);
            v_min -= 1;
            v_mid += 1;
            v_max += 1;
        }

        // Far collar closing out at the ring's far corner.
        let mut v_top = v_min - 1;
        push_quad(triangles, v_top + 1, v_top, v_top + 2, v_mid);
        for _ in 1..x - 1 {
            push_quad(triangles, v_top, v_top - 1, v_mid, v_mid + 1);
            v_top -= 1;
            v_mid += 1;
        }
        push_quad(triangles, v_top, v_top - 1, v_mid, v_top - 2);
    }
}

/// Clamps a raw grid point into the core box and rounds it onto the shell.
///
/// Each coordinate is pulled into `[radius, dim - radius]`, giving the inner
/// point; the outward normal is the direction from the inner point back to
/// the raw point, and the final position sits one radius along it. The same
/// rule produces flat faces (one clamped axis), rounded edges (two) and
/// rounded corners (three) without branching on the region.
fn round_vertex(raw: DVec3, dims: DVec3, radius: f64) -> (DVec3, DVec3) {
    let inner = raw.clamp(DVec3::splat(radius), dims - DVec3::splat(radius));

    match (raw - inner).try_normalize() {
        Some(normal) => (inner + normal * radius, normal),
        // Zero displacement only happens with zero roundness; the point still
        // sits on the outer shell, so an outward axis direction exists.
        None => (raw, shell_normal(raw, dims)),
    }
}

/// Outward axis normal for an unrounded shell point; first extreme axis wins.
///
/// Only called for points with at least one coordinate at 0 or at its
/// dimension; returns zero otherwise rather than panicking.
fn shell_normal(raw: DVec3, dims: DVec3) -> DVec3 {
    if raw.x == 0.0 {
        DVec3::NEG_X
    } else if raw.x == dims.x {
        DVec3::X
    } else if raw.y == 0.0 {
        DVec3::NEG_Y
    } else if raw.y == dims.y {
        DVec3::Y
    } else if raw.z == 0.0 {
        DVec3::NEG_Z
    } else if raw.z == dims.z {
        DVec3::Z
    } else {
        DVec3::ZERO
    }
}

/// Emits one quad as two outward-wound triangles.
///
/// Corners are addressed as `v00` (near-left), `v10` (near-right), `v01`
/// (far-left) and `v11` (far-right) in the quad's own row/column frame;
/// the split is counter-clockwise seen from outside the solid.
fn push_quad(triangles: &mut Vec<[u32; 3]>, v00: usize, v10: usize, v01: usize, v11: usize) {
    triangles.push([v00 as u32, v01 as u32, v10 as u32]);
    triangles.push([v10 as u32, v01 as u32, v11 as u32]);
}

/// Creates a rounded-cube mesh.
///
/// Convenience wrapper over [`RoundedCube`].
///
/// # Arguments
///
/// * `x_size` - Subdivisions along the x axis. Minimum 2.
/// * `y_size` - Subdivisions along the y axis. Minimum 1.
/// * `z_size` - Subdivisions along the z axis. Minimum 2.
/// * `roundness` - Rounding radius in grid units, at most `min(x,y,z)/2`.
///
/// # Example
///
/// ```rust
/// use rounded_cube::create_rounded_cube;
///
/// let mesh = create_rounded_cube(2, 2, 2, 0.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 26);
/// assert_eq!(mesh.triangle_count(), 48);
/// ```
pub fn create_rounded_cube(
    x_size: u32,
    y_size: u32,
    z_size: u32,
    roundness: f64,
) -> MeshResult<Mesh> {
    RoundedCube::new(x_size, y_size, z_size, roundness).to_mesh()
}
