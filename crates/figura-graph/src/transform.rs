//! Transform builders.
//!
//! All builders return a column-major `Mat4` for column vectors (`m * v`).
//! In a product `a * b`, `b` is applied first. Angles are in degrees.

use glam::{Mat4, Vec3};

/// Principal rotation axis.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along this axis.
    #[inline]
    pub const fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

#[inline]
pub fn translate(dx: f32, dy: f32, dz: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(dx, dy, dz))
}

/// Right-handed rotation of `degrees` about `axis`.
#[inline]
pub fn rotate(axis: Axis, degrees: f32) -> Mat4 {
    let rad = degrees.to_radians();
    match axis {
        Axis::X => Mat4::from_rotation_x(rad),
        Axis::Y => Mat4::from_rotation_y(rad),
        Axis::Z => Mat4::from_rotation_z(rad),
    }
}

#[inline]
pub fn rotate_x(degrees: f32) -> Mat4 {
    rotate(Axis::X, degrees)
}

#[inline]
pub fn rotate_y(degrees: f32) -> Mat4 {
    rotate(Axis::Y, degrees)
}

#[inline]
pub fn rotate_z(degrees: f32) -> Mat4 {
    rotate(Axis::Z, degrees)
}

#[inline]
pub fn scale(sx: f32, sy: f32, sz: f32) -> Mat4 {
    Mat4::from_scale(Vec3::new(sx, sy, sz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    const EPS: f32 = 1e-5;

    fn point(m: Mat4, x: f32, y: f32, z: f32) -> Vec3 {
        (m * Vec4::new(x, y, z, 1.0)).truncate()
    }

    // ── builders ──────────────────────────────────────────────────────────

    #[test]
    fn translate_moves_points_not_directions() {
        let m = translate(1.0, -2.0, 3.0);
        assert!(point(m, 0.0, 0.0, 0.0).abs_diff_eq(Vec3::new(1.0, -2.0, 3.0), EPS));

        let dir = (m * Vec4::new(1.0, 0.0, 0.0, 0.0)).truncate();
        assert!(dir.abs_diff_eq(Vec3::X, EPS));
    }

    #[test]
    fn rotate_z_quarter_turn_maps_x_to_y() {
        assert!(point(rotate_z(90.0), 1.0, 0.0, 0.0).abs_diff_eq(Vec3::Y, EPS));
    }

    #[test]
    fn rotate_y_quarter_turn_maps_z_to_x() {
        assert!(point(rotate_y(90.0), 0.0, 0.0, 1.0).abs_diff_eq(Vec3::X, EPS));
    }

    #[test]
    fn rotate_x_quarter_turn_maps_y_to_z() {
        assert!(point(rotate_x(90.0), 0.0, 1.0, 0.0).abs_diff_eq(Vec3::Z, EPS));
    }

    #[test]
    fn rotate_matches_axis_shorthands() {
        for deg in [-80.0, 0.0, 45.0, 170.0, 180.0] {
            assert!(rotate(Axis::X, deg).abs_diff_eq(rotate_x(deg), EPS));
            assert!(rotate(Axis::Y, deg).abs_diff_eq(rotate_y(deg), EPS));
            assert!(rotate(Axis::Z, deg).abs_diff_eq(rotate_z(deg), EPS));
        }
    }

    #[test]
    fn rotation_about_axis_keeps_axis_fixed() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let u = axis.unit();
            assert!(point(rotate(axis, 37.0), u.x, u.y, u.z).abs_diff_eq(u, EPS));
        }
    }

    #[test]
    fn scale_is_per_axis() {
        let p = point(scale(2.0, 3.0, 4.0), 1.0, 1.0, 1.0);
        assert!(p.abs_diff_eq(Vec3::new(2.0, 3.0, 4.0), EPS));
    }

    // ── composition ───────────────────────────────────────────────────────

    #[test]
    fn composition_applies_right_operand_first() {
        // Scale then translate: (1,0,0) -> (2,0,0) -> (2,5,0).
        let m = translate(0.0, 5.0, 0.0) * scale(2.0, 2.0, 2.0);
        assert!(point(m, 1.0, 0.0, 0.0).abs_diff_eq(Vec3::new(2.0, 5.0, 0.0), EPS));
    }

    #[test]
    fn composition_is_not_commutative() {
        let a = translate(1.0, 0.0, 0.0);
        let b = rotate_z(90.0);
        assert!(!(a * b).abs_diff_eq(b * a, EPS));
    }
}
