//! Distances and nearest-point queries over points and polylines.

use crate::error::GeomError;
use crate::primitives::Point2;
use log::trace;
use num_traits::Float;

/// Returns the Euclidean distance between two points.
#[inline]
pub fn euclid_dist<F: Float>(p1: Point2<F>, p2: Point2<F>) -> F {
    p1.distance(p2)
}

/// Approximates the length of a polyline with two chords.
///
/// The result is the distance from the first point to the middle point
/// (`points[n / 2]`) plus the distance from the middle point to the last.
/// This is deliberately cheaper and shorter than the true arc length; use
/// [`polyline_length`] when the exact value is wanted.
///
/// # Errors
///
/// Returns [`GeomError::TooFewPoints`] when fewer than two points are given.
pub fn approx_line_length<F: Float>(points: &[Point2<F>]) -> Result<F, GeomError> {
    if points.len() < 2 {
        return Err(GeomError::TooFewPoints {
            required: 2,
            actual: points.len(),
        });
    }

    let first = points[0];
    let middle = points[points.len() / 2];
    let last = points[points.len() - 1];

    Ok(euclid_dist(first, middle) + euclid_dist(middle, last))
}

/// Returns the exact length of a polyline (sum of its chord lengths).
///
/// Zero for fewer than two points.
pub fn polyline_length<F: Float>(points: &[Point2<F>]) -> F {
    points
        .windows(2)
        .fold(F::zero(), |acc, w| acc + euclid_dist(w[0], w[1]))
}

/// Finds the point in `points` nearest to `pos`.
///
/// Returns the index of the nearest point together with a copy of it, or
/// `None` when `points` is empty. Ties keep the earliest point, and the scan
/// stops at the first point exactly equal to `pos`.
pub fn closest_point<F: Float>(pos: Point2<F>, points: &[Point2<F>]) -> Option<(usize, Point2<F>)> {
    let mut best: Option<(usize, F)> = None;

    for (i, &p) in points.iter().enumerate() {
        let dist = euclid_dist(pos, p);

        let closer = match best {
            Some((_, best_dist)) => dist < best_dist,
            None => true,
        };
        if closer {
            best = Some((i, dist));
        }

        if dist == F::zero() {
            trace!("closest_point: exact match at index {i}");
            break;
        }
    }

    best.map(|(i, _)| (i, points[i]))
}
