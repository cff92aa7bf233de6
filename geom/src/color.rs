//! RGBA color with integer channels and an "empty" sentinel

use serde::{Deserialize, Serialize};

use crate::Vec4;

/// Sentinel channel value meaning "no color provided"
pub const RGBA_EMPTY_VALUE: i16 = -1;
/// Minimum channel value
pub const RGBA_MIN_VALUE: i16 = 0;
/// Maximum channel value
pub const RGBA_MAX_VALUE: i16 = 255;

/// RGBA color with 0-255 integer channels.
///
/// The default value is [`Rgba::EMPTY`] (all channels -1), used throughout
/// the surface layer to mean "no override provided": an empty color skips
/// the corresponding style override entirely instead of rendering black.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// The "no color provided" sentinel
    pub const EMPTY: Rgba = Rgba {
        r: RGBA_EMPTY_VALUE,
        g: RGBA_EMPTY_VALUE,
        b: RGBA_EMPTY_VALUE,
        a: RGBA_EMPTY_VALUE,
    };

    /// Construct a color, clamping every channel into `[0, 255]`
    pub fn new(r: i16, g: i16, b: i16, a: i16) -> Self {
        Self {
            r: Self::clamp(r),
            g: Self::clamp(g),
            b: Self::clamp(b),
            a: Self::clamp(a),
        }
    }

    /// Fully transparent black, distinct from [`Rgba::EMPTY`]
    pub const fn transparent() -> Self {
        Rgba { r: 0, g: 0, b: 0, a: 0 }
    }

    /// Whether this is the "no color provided" sentinel
    pub fn is_empty(&self) -> bool {
        self.r == RGBA_EMPTY_VALUE
            && self.g == RGBA_EMPTY_VALUE
            && self.b == RGBA_EMPTY_VALUE
            && self.a == RGBA_EMPTY_VALUE
    }

    /// Convert to the normalized `[0.0, 1.0]` representation consumed by
    /// the render layer. Every channel, alpha included, divides by 255.
    pub fn to_normalized(&self) -> Vec4 {
        let max = f32::from(RGBA_MAX_VALUE);
        Vec4::new(
            f32::from(self.r) / max,
            f32::from(self.g) / max,
            f32::from(self.b) / max,
            f32::from(self.a) / max,
        )
    }

    fn clamp(value: i16) -> i16 {
        value.clamp(RGBA_MIN_VALUE, RGBA_MAX_VALUE)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_out_of_range_channels() {
        let c = Rgba::new(-40, 300, 128, 999);
        assert_eq!(c, Rgba { r: 0, g: 255, b: 128, a: 255 });
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let once = Rgba::new(-40, 300, 128, 999);
        let twice = Rgba::new(once.r, once.g, once.b, once.a);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_sentinel_detection() {
        assert!(Rgba::EMPTY.is_empty());
        assert!(Rgba::default().is_empty());
        assert!(!Rgba::new(0, 0, 0, 0).is_empty());
        assert!(!Rgba::transparent().is_empty());
    }

    #[test]
    fn test_constructed_color_is_never_empty() {
        // new() clamps -1 up to 0, so a constructed color cannot collide
        // with the sentinel
        assert!(!Rgba::new(-1, -1, -1, -1).is_empty());
    }

    #[test]
    fn test_normalized_channels_in_unit_range() {
        let c = Rgba::new(26, 30, 67, 255);
        let v = c.to_normalized();
        for channel in [v.x, v.y, v.z, v.w] {
            assert!((0.0..=1.0).contains(&channel));
        }
    }

    #[test]
    fn test_normalized_alpha_divides_by_255() {
        let v = Rgba::new(0, 0, 0, 255).to_normalized();
        assert_eq!(v.w, 1.0);
        let v = Rgba::new(0, 0, 0, 51).to_normalized();
        assert!((v.w - 0.2).abs() < 1e-6);
    }
}
