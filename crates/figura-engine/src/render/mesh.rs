//! CPU-side meshes.
//!
//! Meshes are non-indexed and uploaded once. Placement, color and count come
//! from per-instance data.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    /// Zero for line meshes; the shader leaves zero-normal fragments unlit.
    pub normal: [f32; 3],
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // normal
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Topology {
    /// Every two vertices form a segment.
    Lines,
    /// Every three vertices form a counter-clockwise triangle.
    Triangles,
}

impl Topology {
    pub(super) fn to_wgpu(self) -> wgpu::PrimitiveTopology {
        match self {
            Topology::Lines => wgpu::PrimitiveTopology::LineList,
            Topology::Triangles => wgpu::PrimitiveTopology::TriangleList,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub topology: Topology,
    pub vertices: Vec<MeshVertex>,
}

impl Mesh {
    /// Segment list from `(start, end)` pairs.
    pub fn lines<I>(segments: I) -> Self
    where
        I: IntoIterator<Item = (Vec3, Vec3)>,
    {
        let vertices = segments
            .into_iter()
            .flat_map(|(a, b)| [a, b])
            .map(|p| MeshVertex {
                position: p.to_array(),
                normal: [0.0; 3],
            })
            .collect();

        Self {
            topology: Topology::Lines,
            vertices,
        }
    }

    /// Closed outline through `points`, last point joined back to the first.
    pub fn line_loop(points: &[Vec3]) -> Self {
        let n = points.len();
        if n < 2 {
            return Self::lines(std::iter::empty());
        }
        Self::lines((0..n).map(|i| (points[i], points[(i + 1) % n])))
    }

    /// Axis-aligned unit cube centered at the origin (side 1), 36 vertices
    /// with outward face normals.
    pub fn unit_cube() -> Self {
        const CORNERS: [[f32; 3]; 8] = [
            [-0.5, -0.5, 0.5],
            [-0.5, 0.5, 0.5],
            [0.5, 0.5, 0.5],
            [0.5, -0.5, 0.5],
            [-0.5, -0.5, -0.5],
            [-0.5, 0.5, -0.5],
            [0.5, 0.5, -0.5],
            [0.5, -0.5, -0.5],
        ];
        // Each face as a quad (a, b, c, d), counter-clockwise seen from outside.
        const FACES: [[usize; 4]; 6] = [
            [1, 0, 3, 2],
            [2, 3, 7, 6],
            [3, 0, 4, 7],
            [6, 5, 1, 2],
            [4, 5, 6, 7],
            [5, 4, 0, 1],
        ];

        let corner = |i: usize| Vec3::from_array(CORNERS[i]);

        let mut vertices = Vec::with_capacity(36);
        for [a, b, c, d] in FACES {
            let normal = (corner(b) - corner(a))
                .cross(corner(c) - corner(b))
                .normalize()
                .to_array();
            for i in [a, b, c, a, c, d] {
                vertices.push(MeshVertex {
                    position: CORNERS[i],
                    normal,
                });
            }
        }

        Self {
            topology: Topology::Triangles,
            vertices,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn v(a: [f32; 3]) -> Vec3 {
        Vec3::from_array(a)
    }

    // ── cube ──────────────────────────────────────────────────────────────

    #[test]
    fn cube_has_twelve_triangles() {
        let cube = Mesh::unit_cube();
        assert_eq!(cube.topology, Topology::Triangles);
        assert_eq!(cube.vertex_count(), 36);
    }

    #[test]
    fn cube_normals_are_unit_and_outward() {
        let cube = Mesh::unit_cube();
        for tri in cube.vertices.chunks(3) {
            let n = v(tri[0].normal);
            let centroid = (v(tri[0].position) + v(tri[1].position) + v(tri[2].position)) / 3.0;

            assert!((n.length() - 1.0).abs() < EPS);
            assert!(n.dot(centroid) > 0.0);
        }
    }

    #[test]
    fn cube_triangles_wind_counter_clockwise_from_outside() {
        let cube = Mesh::unit_cube();
        for tri in cube.vertices.chunks(3) {
            let (a, b, c) = (v(tri[0].position), v(tri[1].position), v(tri[2].position));
            let face = (b - a).cross(c - a);
            assert!(face.dot(v(tri[0].normal)) > 0.0);
        }
    }

    #[test]
    fn cube_spans_unit_box() {
        let cube = Mesh::unit_cube();
        let (min, max) = cube.vertices.iter().fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(lo, hi), vx| (lo.min(v(vx.position)), hi.max(v(vx.position))),
        );
        assert_eq!(min, Vec3::splat(-0.5));
        assert_eq!(max, Vec3::splat(0.5));
    }

    // ── lines ─────────────────────────────────────────────────────────────

    #[test]
    fn lines_emit_two_vertices_per_segment_without_normals() {
        let m = Mesh::lines([(Vec3::ZERO, Vec3::X), (Vec3::ZERO, Vec3::Y)]);
        assert_eq!(m.topology, Topology::Lines);
        assert_eq!(m.vertex_count(), 4);
        assert!(m.vertices.iter().all(|vx| vx.normal == [0.0; 3]));
    }

    #[test]
    fn line_loop_closes_the_outline() {
        let square = [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 0.0, 1.0), Vec3::Z];
        let m = Mesh::line_loop(&square);

        assert_eq!(m.vertex_count(), 8);
        assert_eq!(m.vertices[6].position, Vec3::Z.to_array());
        assert_eq!(m.vertices[7].position, Vec3::ZERO.to_array());
    }

    #[test]
    fn degenerate_loop_is_empty() {
        assert_eq!(Mesh::line_loop(&[Vec3::X]).vertex_count(), 0);
    }
}
