//! Scalar helpers: range remapping and float bit reinterpretation.

use log::debug;
use num_traits::Float;

/// Maps `value` from the range `[r1_min, r1_max]` onto `[r2_min, r2_max]`.
///
/// This is the affine map `f` with `f(r1_min) = r2_min` and
/// `f(r1_max) = r2_max`:
///
/// ```
/// use planar::linear_interpolation;
///
/// assert_eq!(linear_interpolation(0.5, 0.0, 1.0, 0.0, 100.0), 50.0);
/// ```
///
/// `value` is expected inside the source range but is not clamped, so values
/// outside it extrapolate. When `r1_min == r1_max` the source range has no
/// width and the result is infinite or NaN per IEEE-754.
#[inline]
pub fn linear_interpolation<F: Float>(value: F, r1_min: F, r1_max: F, r2_min: F, r2_max: F) -> F {
    if r1_max == r1_min {
        debug!("linear_interpolation: source range has zero width");
    }
    (value - r1_min) * (r2_max - r2_min) / (r1_max - r1_min) + r2_min
}

/// Reinterprets the bits of a 32-bit float as an unsigned integer.
///
/// No numeric conversion happens; `1.0` maps to `0x3f80_0000`.
#[inline]
pub fn float_to_bits(value: f32) -> u32 {
    value.to_bits()
}

/// Inverse of [`float_to_bits`].
#[inline]
pub fn bits_to_float(bits: u32) -> f32 {
    f32::from_bits(bits)
}
