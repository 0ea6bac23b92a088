/// Viewport size in physical pixels.
///
/// Renderers use it for the projection aspect ratio.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width over height, or `fallback` for a degenerate (minimized) viewport.
    #[inline]
    pub fn aspect_or(self, fallback: f32) -> f32 {
        if self.is_valid() {
            self.width / self.height
        } else {
            fallback
        }
    }
}
