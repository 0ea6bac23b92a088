use glam::Vec3;

use figura_engine::render::Camera;

/// Camera dolly direction.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Dolly {
    /// Eye moves by `+step`.
    Out,
    /// Eye moves by `-step`.
    In,
}

/// Moves the eye by one `step` and returns whether it moved.
///
/// A step that would bring the eye closer than `min_distance` to the target,
/// or carry it past the target, is refused.
pub fn dolly(camera: &mut Camera, dir: Dolly, step: Vec3, min_distance: f32) -> bool {
    let offset = match dir {
        Dolly::Out => step,
        Dolly::In => -step,
    };
    let eye = camera.eye + offset;

    let before = camera.eye - camera.target;
    let after = eye - camera.target;
    if after.length() < min_distance || after.dot(before) <= 0.0 {
        return false;
    }

    camera.eye = eye;
    true
}
