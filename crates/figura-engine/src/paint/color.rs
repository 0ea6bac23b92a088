/// Linear straight-alpha RGBA color.
///
/// Invariant:
/// - components are in linear space; the sRGB surface applies the transfer
///   function on write.
///
/// Colors authored by eye (hex literals, "0.7 gray") are in sRGB space and
/// should go through [`from_srgb`](Self::from_srgb).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::linear(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::linear(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color::linear(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color::linear(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color = Color::linear(0.0, 0.0, 1.0, 1.0);

    /// Creates a color from linear components.
    #[inline]
    pub const fn linear(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a linear color from sRGB-encoded `f32` components in `[0, 1]`.
    ///
    /// Alpha is not gamma-encoded and is only clamped.
    #[inline]
    pub fn from_srgb(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: srgb_to_linear(r),
            g: srgb_to_linear(g),
            b: srgb_to_linear(b),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Uniform gray from an sRGB level, fully opaque.
    #[inline]
    pub fn gray(level: f32) -> Self {
        Self::from_srgb(level, level, level, 1.0)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

/// sRGB electro-optical transfer function for one channel.
#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    let c = c.clamp(0.0, 1.0);
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_endpoints_are_fixed() {
        assert_eq!(Color::from_srgb(0.0, 1.0, 0.0, 1.0), Color::GREEN);
        assert_eq!(Color::from_srgb(1.0, 1.0, 1.0, 1.0), Color::WHITE);
    }

    #[test]
    fn srgb_midtones_get_darker_in_linear() {
        let c = Color::gray(0.7);
        assert!(c.r < 0.7 && c.r > 0.4);
        assert_eq!(c.r, c.g);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn alpha_is_clamped_not_encoded() {
        let c = Color::from_srgb(0.5, 0.5, 0.5, 1.5);
        assert_eq!(c.a, 1.0);
        let c = Color::from_srgb(0.5, 0.5, 0.5, 0.5);
        assert_eq!(c.a, 0.5);
    }

    #[test]
    fn to_wgpu_preserves_channels() {
        let w = Color::linear(0.25, 0.5, 0.75, 1.0).to_wgpu();
        assert_eq!((w.r, w.g, w.b, w.a), (0.25, 0.5, 0.75, 1.0));
    }
}
