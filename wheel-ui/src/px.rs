//! Physical pixel values.
//!
//! [`Px`] is the unit picker layouts are reported in. The y axis grows
//! downward and negative values are allowed so offsets above the viewport
//! stay representable.
//!
//! ```
//! use wheel_ui::{Dp, Px};
//!
//! let row = Px::new(30);
//! assert_eq!(row * 3, Px::new(90));
//! assert_eq!((Px::new(150) - row) / 2, Px::new(60));
//! let _ = Px::from_dp(Dp(16.0));
//! ```

use crate::dp::{Dp, SCALE_FACTOR};

/// A physical pixel value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// The largest representable pixel value.
    pub const MAX: Self = Self(i32::MAX);

    /// Creates a new `Px`.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Returns the raw `i32` value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Converts from [`Dp`] using the current scale factor.
    pub fn from_dp(dp: Dp) -> Self {
        Px::saturating_from_f32(dp.to_pixels_f32())
    }

    /// Converts to [`Dp`] using the current scale factor.
    pub fn to_dp(self) -> Dp {
        let scale_factor = SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0);
        Dp(f64::from(self.0) / scale_factor)
    }

    /// Creates a `Px` from an `f32`, saturating at the `i32` bounds.
    ///
    /// `NaN` maps to zero.
    ///
    /// ```
    /// use wheel_ui::Px;
    ///
    /// assert_eq!(Px::saturating_from_f32(42.7).raw(), 42);
    /// assert_eq!(Px::saturating_from_f32(f32::MAX).raw(), i32::MAX);
    /// ```
    pub fn saturating_from_f32(value: f32) -> Self {
        if value.is_nan() {
            return Px::ZERO;
        }
        let clamped_value = value.clamp(i32::MIN as f32, i32::MAX as f32);
        Px(clamped_value as i32)
    }

    /// Saturating addition.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Px(self.0.saturating_add(rhs.0))
    }

    /// Multiplies by a row count, saturating at the `i32` bounds.
    pub fn saturating_mul_usize(self, times: usize) -> Self {
        let product = i64::from(self.0).saturating_mul(times.min(i64::MAX as usize) as i64);
        if product > i64::from(i32::MAX) {
            Px::MAX
        } else if product < i64::from(i32::MIN) {
            Px(i32::MIN)
        } else {
            Px(product as i32)
        }
    }

    /// Returns the larger of two values.
    pub fn max(self, other: Self) -> Self {
        Px(self.0.max(other.0))
    }
}

impl std::ops::Add for Px {
    type Output = Px;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Px {
    type Output = Px;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl std::ops::Mul<i32> for Px {
    type Output = Px;

    fn mul(self, rhs: i32) -> Self::Output {
        Px(self.0 * rhs)
    }
}

impl std::ops::Div<i32> for Px {
    type Output = Px;

    fn div(self, rhs: i32) -> Self::Output {
        Px(self.0 / rhs)
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Px(value)
    }
}

impl From<Dp> for Px {
    fn from(dp: Dp) -> Self {
        Px::from_dp(dp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_arithmetic() {
        let a = Px(10);
        let b = Px(5);

        assert_eq!(a + b, Px(15));
        assert_eq!(a - b, Px(5));
        assert_eq!(a * 2, Px(20));
        assert_eq!(a / 2, Px(5));
    }

    #[test]
    fn test_px_saturating_arithmetic() {
        assert_eq!(Px::MAX.saturating_add(Px(1)), Px::MAX);
        assert_eq!(Px(i32::MIN).saturating_add(Px(-1)), Px(i32::MIN));
        assert_eq!(Px(30).saturating_mul_usize(4), Px(120));
        assert_eq!(Px(30).saturating_mul_usize(usize::MAX), Px::MAX);
        assert_eq!(Px(-30).saturating_mul_usize(usize::MAX), Px(i32::MIN));
    }

    #[test]
    fn test_saturating_from_f32() {
        assert_eq!(Px::saturating_from_f32(f32::MIN), Px(i32::MIN));
        assert_eq!(Px::saturating_from_f32(-100.5), Px(-100));
        assert_eq!(Px::saturating_from_f32(f32::NAN), Px::ZERO);
    }
}
