//! Colors for highlight bands and viewport backgrounds.

/// A color with straight alpha, components in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from four `f32` components.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from `u8` components.
    #[inline]
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Creates a color from `u8` components.
    #[inline]
    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }
}

impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl From<[u8; 3]> for Color {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_rgb_u8(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_components_scale_to_unit_range() {
        let grey = Color::from_rgb_u8(0x33, 0x33, 0x33);
        assert_eq!(grey.r, 0.2);
        assert_eq!(grey.a, 1.0);
        assert_eq!(Color::from([0xff, 0xff, 0xff]), Color::WHITE);
    }

    #[test]
    fn test_alpha_component() {
        assert_eq!(Color::from_rgba_u8(0, 0, 0, 0), Color::TRANSPARENT);
        assert_eq!(Color::from_rgba_u8(0, 0, 0, 128).a, 128.0 / 255.0);
        assert_eq!(Color::default(), Color::TRANSPARENT);
    }
}
