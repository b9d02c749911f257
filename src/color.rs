//! Color types.
//!
//! Chart styles are [`Rgba`] constants; [`Rgba::to_css`] prints them the way
//! a browser chart would receive them (`rgba(151,187,205,0.5)`).

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Light grey used for grid lines.
    pub const GRID: Self = Self::new(0, 0, 0, 26);
    /// Axis line color.
    pub const AXIS: Self = Self::new(0, 0, 0, 64);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Alpha as a fraction in `0.0..=1.0`.
    #[must_use]
    pub fn alpha_f32(self) -> f32 {
        f32::from(self.a) / 255.0
    }

    /// Composite this color over an opaque background.
    #[must_use]
    pub fn over(self, background: Self) -> Self {
        let a = self.alpha_f32();
        let mix = |src: u8, dst: u8| -> u8 {
            (f32::from(src) * a + f32::from(dst) * (1.0 - a)).round() as u8
        };
        Self::rgb(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }

    /// Format as a CSS `rgba()` string.
    #[must_use]
    pub fn to_css(self) -> String {
        let alpha = format!("{:.2}", self.alpha_f32());
        let alpha = alpha.trim_end_matches('0').trim_end_matches('.');
        let alpha = if alpha.is_empty() { "0" } else { alpha };
        format!("rgba({},{},{},{alpha})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::WHITE, Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::TRANSPARENT.a, 0);
    }

    #[test]
    fn test_to_css() {
        assert_eq!(Rgba::new(151, 187, 205, 128).to_css(), "rgba(151,187,205,0.5)");
        assert_eq!(Rgba::rgb(1, 2, 3).to_css(), "rgba(1,2,3,1)");
        assert_eq!(Rgba::TRANSPARENT.to_css(), "rgba(0,0,0,0)");
    }

    #[test]
    fn test_over_white() {
        let half_black = Rgba::new(0, 0, 0, 128);
        let out = half_black.over(Rgba::WHITE);
        assert_eq!(out.a, 255);
        assert!(out.r > 120 && out.r < 135);
    }
}
