//! Raster pixel value

/// Straight-alpha RGBA pixel, channels in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// From resolved figure color components
    pub fn from_unit([r, g, b, a]: [f64; 4]) -> Self {
        Self::rgba(r as f32, g as f32, b as f32, a as f32)
    }

    /// Quantize to 8 bits per channel
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a].map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// Partial coverage: alpha multiplied by `coverage`
    pub fn with_coverage(self, coverage: f32) -> Self {
        Self {
            a: self.a * coverage.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Porter-Duff source-over of `self` onto `dst`
    pub fn over(self, dst: Self) -> Self {
        let keep = dst.a * (1.0 - self.a);
        let alpha = self.a + keep;
        if alpha <= f32::EPSILON {
            return Self::TRANSPARENT;
        }
        let mix = |src: f32, under: f32| (src * self.a + under * keep) / alpha;
        Self {
            r: mix(self.r, dst.r),
            g: mix(self.g, dst.g),
            b: mix(self.b, dst.b),
            a: alpha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_clamps() {
        assert_eq!(Color::WHITE.to_rgba8(), [255, 255, 255, 255]);
        assert_eq!(Color::rgba(2.0, -1.0, 0.5, 0.0).to_rgba8(), [255, 0, 128, 0]);
    }

    #[test]
    fn test_half_red_over_blue() {
        let out = Color::rgba(1.0, 0.0, 0.0, 0.5).over(Color::rgb(0.0, 0.0, 1.0));
        assert!((out.r - 0.5).abs() < 1e-6);
        assert!((out.b - 0.5).abs() < 1e-6);
        assert_eq!(out.a, 1.0);
    }

    #[test]
    fn test_over_transparent_keeps_source() {
        let src = Color::rgba(0.2, 0.4, 0.6, 0.5);
        let out = src.over(Color::TRANSPARENT);
        assert!((out.r - 0.2).abs() < 1e-6);
        assert!((out.a - 0.5).abs() < 1e-6);
        assert_eq!(Color::TRANSPARENT.over(Color::TRANSPARENT), Color::TRANSPARENT);
    }

    #[test]
    fn test_coverage_scales_alpha_only() {
        let c = Color::BLACK.with_coverage(0.25);
        assert_eq!((c.r, c.a), (0.0, 0.25));
    }
}
