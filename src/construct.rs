//! Constructing new points from existing ones.

use crate::primitives::Point2;
use log::debug;
use num_traits::Float;

/// Returns the point halfway between `p1` and `p2`.
#[inline]
pub fn midpoint<F: Float>(p1: Point2<F>, p2: Point2<F>) -> Point2<F> {
    p1.midpoint(p2)
}

/// Returns the point at fraction `t` of the way from `p1` to `p2`.
///
/// `t = 0` returns `p1` and `t = 1` returns `p2`, both bit-exact. Values
/// outside [0, 1] extrapolate past the endpoints.
///
/// ```
/// use planar::{interpolated_point, Point2};
///
/// let p = interpolated_point(Point2::new(2.0, 2.0), Point2::new(4.0, 4.0), 0.5);
/// assert_eq!(p, Point2::new(3.0, 3.0));
/// ```
#[inline]
pub fn interpolated_point<F: Float>(p1: Point2<F>, p2: Point2<F>, t: F) -> Point2<F> {
    if t == F::zero() {
        return p1;
    }
    if t == F::one() {
        return p2;
    }
    p1.lerp(p2, t)
}

/// Extends the line from `p1` through `p2` by `length` past `p2`.
///
/// `length = 0` returns `p2` unchanged. A negative `length` walks back
/// towards `p1`. When `p1 == p2` the direction is undefined and the result
/// has NaN coordinates.
///
/// ```
/// use planar::{extend_line, Point2};
///
/// let p = extend_line(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0), 5.0);
/// assert_eq!(p, Point2::new(6.0, 8.0));
/// ```
pub fn extend_line<F: Float>(p1: Point2<F>, p2: Point2<F>, length: F) -> Point2<F> {
    if length == F::zero() {
        return p2;
    }
    if p1 == p2 {
        debug!("extend_line: base segment has zero length");
    }
    p2 + (p2 - p1).with_length(length)
}
