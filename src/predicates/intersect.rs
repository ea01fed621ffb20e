//! Segment intersection via orientation tests.

use super::orientation::{orientation, Orientation};
use crate::primitives::Point2;
use num_traits::Float;

/// Returns `true` if `p2` lies in the closed bounding box of `p1` and `q1`.
///
/// On its own this is only a box test. Callers use it after establishing
/// that `p2` is collinear with `(p1, q1)`, where box membership and segment
/// membership coincide.
#[inline]
pub fn on_segment_bounds<F: Float>(p1: Point2<F>, q1: Point2<F>, p2: Point2<F>) -> bool {
    p2.x >= p1.x.min(q1.x)
        && p2.x <= p1.x.max(q1.x)
        && p2.y >= p1.y.min(q1.y)
        && p2.y <= p1.y.max(q1.y)
}

/// Returns `true` if segment `(p1, q1)` touches or crosses segment `(p2, q2)`.
///
/// Endpoint contact and collinear overlap both count as intersecting.
pub fn segments_intersect<F: Float>(
    p1: Point2<F>,
    q1: Point2<F>,
    p2: Point2<F>,
    q2: Point2<F>,
) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    // Each segment's endpoints lie on opposite sides of the other.
    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment_bounds(p1, q1, p2))
        || (o2 == Orientation::Collinear && on_segment_bounds(p1, q1, q2))
        || (o3 == Orientation::Collinear && on_segment_bounds(p2, q2, p1))
        || (o4 == Orientation::Collinear && on_segment_bounds(p2, q2, q1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    #[test]
    fn test_on_segment_bounds() {
        let (a, b) = (p(0.0, 2.0), p(4.0, 0.0));
        assert!(on_segment_bounds(a, b, p(2.0, 1.0)));
        assert!(on_segment_bounds(a, b, a));
        assert!(on_segment_bounds(a, b, b));
        assert!(!on_segment_bounds(a, b, p(-0.1, 1.0)));
        assert!(!on_segment_bounds(a, b, p(2.0, 2.5)));
    }

    #[test]
    fn test_on_segment_bounds_rejects_points_below_the_box() {
        let (a, b) = (p(2.0, 0.0), p(3.0, 0.0));
        assert!(!on_segment_bounds(a, b, p(0.0, 0.0)));
        assert!(!on_segment_bounds(a, b, p(1.0, -1.0)));
    }

    #[test]
    fn test_on_segment_bounds_is_a_box_test() {
        // Inside the box but off the diagonal.
        assert!(on_segment_bounds(p(0.0, 0.0), p(2.0, 2.0), p(2.0, 0.0)));
    }

    #[test]
    fn test_crossing_diagonals() {
        assert!(segments_intersect(p(0.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(1.0, 0.0)));
    }

    #[test]
    fn test_collinear_disjoint() {
        assert!(!segments_intersect(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0)));
        assert!(!segments_intersect(p(2.0, 0.0), p(3.0, 0.0), p(0.0, 0.0), p(1.0, 0.0)));
    }

    #[test]
    fn test_collinear_overlapping() {
        assert!(segments_intersect(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 0.0), p(3.0, 0.0)));
    }

    #[test]
    fn test_collinear_touching_at_endpoint() {
        assert!(segments_intersect(p(0.0, 0.0), p(1.0, 1.0), p(1.0, 1.0), p(2.0, 2.0)));
    }

    #[test]
    fn test_t_junction() {
        assert!(segments_intersect(p(0.0, 0.0), p(4.0, 0.0), p(2.0, 0.0), p(2.0, 3.0)));
    }

    #[test]
    fn test_parallel() {
        assert!(!segments_intersect(p(0.0, 0.0), p(4.0, 0.0), p(0.0, 1.0), p(4.0, 1.0)));
    }

    #[test]
    fn test_would_cross_if_extended() {
        assert!(!segments_intersect(p(0.0, 0.0), p(4.0, 4.0), p(6.0, 4.0), p(10.0, 0.0)));
    }

    #[test]
    fn test_symmetric() {
        let cases = [
            (p(0.0, 0.0), p(3.0, 1.0), p(1.0, -1.0), p(2.0, 2.0)),
            (p(0.0, 0.0), p(1.0, 0.0), p(0.5, 0.5), p(0.5, 2.0)),
            (p(-1.0, -1.0), p(1.0, 1.0), p(0.0, 0.0), p(5.0, 0.0)),
        ];
        for (a, b, c, d) in cases {
            assert_eq!(segments_intersect(a, b, c, d), segments_intersect(c, d, a, b));
            assert_eq!(segments_intersect(a, b, c, d), segments_intersect(b, a, d, c));
        }
    }
}
