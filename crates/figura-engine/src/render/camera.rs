//! Look-at perspective camera.

use glam::{Mat4, Vec3};

/// Perspective camera looking from `eye` at `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y_deg: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Camera {
    pub fn look_at(eye: Vec3, target: Vec3) -> Self {
        Self {
            eye,
            target,
            ..Self::default()
        }
    }

    /// Sets the perspective parameters.
    pub fn with_perspective(mut self, fov_y_deg: f32, near: f32, far: f32) -> Self {
        self.fov_y_deg = fov_y_deg;
        self.near = near;
        self.far = far;
        self
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.eye.distance(self.target)
    }

    /// World-to-view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// View-to-clip matrix with `[0, 1]` depth.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_deg.to_radians(), aspect, self.near, self.far)
    }

    /// `projection * view`.
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    const EPS: f32 = 1e-4;

    #[test]
    fn target_projects_to_screen_center() {
        let cam = Camera::look_at(Vec3::new(0.0, 10.0, 10.0), Vec3::ZERO);
        let clip = cam.view_projection(800.0 / 600.0) * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;

        assert!(ndc.x.abs() < EPS);
        assert!(ndc.y.abs() < EPS);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn eye_maps_to_view_origin() {
        let cam = Camera::look_at(Vec3::new(0.0, 5.0, 20.0), Vec3::ZERO);
        let v = cam.view_matrix() * Vec4::new(0.0, 5.0, 20.0, 1.0);
        assert!(v.truncate().abs_diff_eq(Vec3::ZERO, EPS));
    }

    #[test]
    fn nearer_points_have_smaller_depth() {
        let cam = Camera::look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO).with_perspective(45.0, 0.1, 300.0);
        let vp = cam.view_projection(1.0);

        let depth = |z: f32| {
            let c = vp * Vec4::new(0.0, 0.0, z, 1.0);
            c.z / c.w
        };

        assert!(depth(5.0) < depth(0.0));
        assert!(depth(0.0) < depth(-50.0));
    }

    #[test]
    fn distance_is_eye_to_target() {
        let cam = Camera::look_at(Vec3::new(0.0, 3.0, 4.0), Vec3::ZERO);
        assert!((cam.distance() - 5.0).abs() < EPS);
    }
}
