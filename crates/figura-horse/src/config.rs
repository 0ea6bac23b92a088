use glam::Vec3;

use figura_engine::paint::Color;
use figura_engine::render::Camera;
use figura_engine::window::RuntimeConfig;

/// Horse viewer settings.
#[derive(Debug, Clone)]
pub struct HorseConfig {
    pub window: RuntimeConfig,
    pub camera: Camera,

    /// Torso yaw applied once the figure is built, in degrees.
    pub torso_yaw: f32,
    /// Joint rotation speed while Left/Right is held, degrees per second.
    pub joint_speed: f32,

    /// Direction towards the light, world space.
    pub light_dir: Vec3,
    pub ambient: f32,
    pub clear: Color,
}

impl Default for HorseConfig {
    fn default() -> Self {
        Self {
            window: RuntimeConfig::new("RobotHorse", 800.0, 600.0),
            camera: Camera::look_at(Vec3::new(0.0, 5.0, 20.0), Vec3::ZERO)
                .with_perspective(45.0, 0.1, 300.0),
            torso_yaw: 50.0,
            joint_speed: 90.0,
            light_dir: Vec3::new(0.4, 1.0, 0.6),
            ambient: 0.35,
            clear: Color::gray(0.7),
        }
    }
}
