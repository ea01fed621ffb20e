//! Point-in-polygon by ray casting.

use super::intersect::segments_intersect;
use crate::primitives::Point2;
use num_traits::Float;

/// Tests whether `point` lies inside the ring `boundary`.
///
/// A ray is cast from `point` to `(F::max_value(), point.y)` and crossed
/// edges are counted; an odd count means inside. The edges are
/// `boundary[i] -> boundary[i + 1]`, so the ring is *not* closed
/// automatically: repeat the first vertex at the end (see [`close_ring`]).
/// With fewer than two vertices there are no edges and the result is `false`.
///
/// Points on the boundary, and rays passing exactly through a vertex, may
/// be counted either way.
///
/// ```
/// use planar::{point_in_polygon, Point2};
///
/// let square = [
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(0.0, 0.0),
/// ];
/// assert!(point_in_polygon(Point2::new(0.5, 0.5), &square));
/// assert!(!point_in_polygon(Point2::new(2.0, 2.0), &square));
/// ```
pub fn point_in_polygon<F: Float>(point: Point2<F>, boundary: &[Point2<F>]) -> bool {
    let ray_end = Point2::new(F::max_value(), point.y);

    let crossings = boundary
        .windows(2)
        .filter(|edge| segments_intersect(point, ray_end, edge[0], edge[1]))
        .count();

    crossings % 2 == 1
}

/// Returns `points` as a closed ring, appending the first vertex if the last
/// one differs from it.
pub fn close_ring<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    let mut ring = points.to_vec();
    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if first != last {
            ring.push(first);
        }
    }
    ring
}
