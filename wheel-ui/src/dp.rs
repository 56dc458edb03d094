//! # Density-Independent Pixels (Dp)
//!
//! Picker geometry (item height, viewport height, highlight border) is given
//! in [`Dp`] and resolved to physical pixels through the global
//! [`SCALE_FACTOR`] when a layout is computed.
//!
//! ```
//! use wheel_ui::Dp;
//!
//! let item_height = Dp(30.0);
//! let pixels = item_height.to_pixels_f32();
//! assert!(pixels > 0.0);
//! ```

use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::Px;

/// Global scale factor for converting between dp and physical pixels.
///
/// Hosts set it once at startup from the display density, see
/// [`set_scale_factor`]. Reads fall back to `1.0` while it is unset.
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Sets the global scale factor, creating it on first use.
///
/// Non-finite or non-positive factors are ignored.
pub fn set_scale_factor(factor: f64) {
    if !factor.is_finite() || factor <= 0.0 {
        tracing::warn!(factor, "ignoring invalid scale factor");
        return;
    }
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(1.0));
    *lock.write() = factor;
}

fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0)
}

/// Density-independent pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Zero dp.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Dp`; usable in constants.
    ///
    /// ```
    /// use wheel_ui::Dp;
    ///
    /// const ITEM_HEIGHT: Dp = Dp::new(60.0);
    /// assert_eq!(ITEM_HEIGHT.0, 60.0);
    /// ```
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Converts to physical pixels as an `f32`.
    pub fn to_pixels_f32(&self) -> f32 {
        (self.0 * scale_factor()) as f32
    }

    /// Creates a `Dp` from physical pixels given as `f32`.
    pub fn from_pixels_f32(value: f32) -> Self {
        Dp(f64::from(value) / scale_factor())
    }

    /// Converts to a [`Px`] value.
    pub fn to_px(&self) -> Px {
        Px::saturating_from_f32(self.to_pixels_f32())
    }

    /// Multiplies the dp value by a scalar.
    pub fn scale(self, factor: f64) -> Self {
        Dp(self.0 * factor)
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp(value)
    }
}

impl From<Px> for Dp {
    fn from(px: Px) -> Self {
        px.to_dp()
    }
}
