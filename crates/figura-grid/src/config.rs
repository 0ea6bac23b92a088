use glam::Vec3;

use figura_engine::paint::Color;
use figura_engine::render::Camera;
use figura_engine::window::RuntimeConfig;

/// Grid viewer settings.
#[derive(Debug, Clone)]
pub struct GridConfig {
    pub window: RuntimeConfig,
    pub camera: Camera,

    /// Cells span `-half_extent..half_extent` on both X and Z.
    pub half_extent: i32,
    pub cell_size: f32,
    pub axis_length: f32,

    /// Eye offset applied by one Down press (Up applies its negation).
    pub dolly_step: Vec3,
    /// Closest the eye may get to the look-at target.
    pub min_distance: f32,

    pub clear: Color,
    pub grid_color: Color,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            window: RuntimeConfig::new("Assignment1", 800.0, 600.0),
            camera: Camera::look_at(Vec3::new(0.0, 10.0, 10.0), Vec3::ZERO)
                .with_perspective(45.0, 0.1, 100.0),
            half_extent: 50,
            cell_size: 1.0,
            axis_length: 3.0,
            dolly_step: Vec3::new(0.0, 1.0, 1.0),
            min_distance: 1.0,
            clear: Color::gray(0.7),
            grid_color: Color::BLACK,
        }
    }
}
