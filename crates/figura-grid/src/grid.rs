//! Grid and axis geometry.

use glam::{Mat4, Vec3};

use figura_engine::paint::Color;
use figura_engine::render::Mesh;

/// Outline of one cell: the unit square from the origin to `(1, 0, 1)`.
pub fn cell_mesh() -> Mesh {
    Mesh::line_loop(&[
        Vec3::ZERO,
        Vec3::X,
        Vec3::new(1.0, 0.0, 1.0),
        Vec3::Z,
    ])
}

/// One placement per cell, corners at `(i, 0, j) * cell_size` for
/// `i, j` in `-half_extent..half_extent`, row by row along X.
pub fn cell_models(half_extent: i32, cell_size: f32) -> impl Iterator<Item = Mat4> {
    let range = -half_extent..half_extent;
    range.clone().flat_map(move |j| {
        range.clone().map(move |i| {
            Mat4::from_scale_rotation_translation(
                Vec3::splat(cell_size),
                glam::Quat::IDENTITY,
                Vec3::new(i as f32, 0.0, j as f32) * cell_size,
            )
        })
    })
}

/// Unit segment along +X; each axis is one scaled and rotated instance.
pub fn axis_mesh() -> Mesh {
    Mesh::lines([(Vec3::ZERO, Vec3::X)])
}

/// X (red), Y (green), Z (blue) axis placements of `length`.
pub fn axis_instances(length: f32) -> [(Mat4, Color); 3] {
    let s = Mat4::from_scale(Vec3::splat(length));
    [
        (s, Color::RED),
        (Mat4::from_rotation_z(90f32.to_radians()) * s, Color::GREEN),
        (Mat4::from_rotation_y(-90f32.to_radians()) * s, Color::BLUE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn origin_of(m: Mat4) -> Vec3 {
        m.transform_point3(Vec3::ZERO)
    }

    // ── cells ─────────────────────────────────────────────────────────────

    #[test]
    fn hundred_by_hundred_cells() {
        let corners: Vec<Vec3> = cell_models(50, 1.0).map(origin_of).collect();
        assert_eq!(corners.len(), 10_000);

        let (min, max) = corners.iter().fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(lo, hi), &c| (lo.min(c), hi.max(c)),
        );
        assert_eq!(min, Vec3::new(-50.0, 0.0, -50.0));
        assert_eq!(max, Vec3::new(49.0, 0.0, 49.0));
    }

    #[test]
    fn cells_tile_without_gaps() {
        let models: Vec<Mat4> = cell_models(2, 1.0).collect();
        // Far corner of a cell is the near corner of its diagonal neighbour.
        let far = models[0].transform_point3(Vec3::new(1.0, 0.0, 1.0));
        assert!(far.abs_diff_eq(origin_of(models[5]), EPS));
    }

    #[test]
    fn cell_size_scales_spacing() {
        let corners: Vec<Vec3> = cell_models(1, 2.0).map(origin_of).collect();
        assert_eq!(corners, vec![
            Vec3::new(-2.0, 0.0, -2.0),
            Vec3::new(0.0, 0.0, -2.0),
            Vec3::new(-2.0, 0.0, 0.0),
            Vec3::ZERO,
        ]);
    }

    #[test]
    fn cell_outline_is_four_edges() {
        assert_eq!(cell_mesh().vertex_count(), 8);
    }

    // ── axes ──────────────────────────────────────────────────────────────

    #[test]
    fn axes_point_along_positive_axes() {
        let tips: Vec<(Vec3, Color)> = axis_instances(3.0)
            .iter()
            .map(|&(m, c)| (m.transform_point3(Vec3::X), c))
            .collect();

        assert!(tips[0].0.abs_diff_eq(Vec3::new(3.0, 0.0, 0.0), EPS));
        assert!(tips[1].0.abs_diff_eq(Vec3::new(0.0, 3.0, 0.0), EPS));
        assert!(tips[2].0.abs_diff_eq(Vec3::new(0.0, 0.0, 3.0), EPS));
        assert_eq!(
            [tips[0].1, tips[1].1, tips[2].1],
            [Color::RED, Color::GREEN, Color::BLUE]
        );
    }

    #[test]
    fn axes_start_at_origin() {
        for (m, _) in axis_instances(3.0) {
            assert!(origin_of(m).abs_diff_eq(Vec3::ZERO, EPS));
        }
    }
}
