//! 2D line segment type.

use super::{Point2, Vec2};
use crate::predicates::{on_segment_bounds, segments_intersect};
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    #[inline]
    pub fn midpoint(self) -> Point2<F> {
        self.start.midpoint(self.end)
    }

    /// Returns the point at parameter `t` along the segment.
    ///
    /// - `t = 0` returns `start`
    /// - `t = 1` returns `end`
    /// - Values outside [0, 1] extrapolate beyond the segment
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        crate::construct::interpolated_point(self.start, self.end, t)
    }

    /// Returns `true` if `p` lies inside the bounding box of this segment.
    ///
    /// This is only a membership test when `p` is already known to be
    /// collinear with the segment.
    #[inline]
    pub fn bounds_contain(self, p: Point2<F>) -> bool {
        on_segment_bounds(self.start, self.end, p)
    }

    /// Returns `true` if this segment touches or crosses `other`.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        segments_intersect(self.start, self.end, other.start, other.end)
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}
