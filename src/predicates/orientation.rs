//! Orientation of an ordered point triple.

use crate::primitives::Point2;
use num_traits::Float;

/// Turn direction of the path `p1 -> q1 -> p2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// All three points lie on one line.
    Collinear,
    /// The path turns right.
    Clockwise,
    /// The path turns left.
    CounterClockwise,
}

impl Orientation {
    /// Returns the orientation of the reversed path.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Collinear => Orientation::Collinear,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }
}

/// Computes the orientation of the path `p1 -> q1 -> p2`.
///
/// The test compares the slopes of `(p1, q1)` and `(q1, p2)`:
///
/// ```text
/// o = (q1.y - p1.y) * (p2.x - q1.x) - (q1.x - p1.x) * (p2.y - q1.y)
/// ```
///
/// `o == 0` is `Collinear`, `o > 0` is `Clockwise` and `o < 0` is
/// `CounterClockwise` (y-up coordinates). A NaN coordinate makes every
/// comparison false and reports `CounterClockwise`.
#[inline]
pub fn orientation<F: Float>(p1: Point2<F>, q1: Point2<F>, p2: Point2<F>) -> Orientation {
    let o = (q1.y - p1.y) * (p2.x - q1.x) - (q1.x - p1.x) * (p2.y - q1.y);

    if o == F::zero() {
        Orientation::Collinear
    } else if o > F::zero() {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}
