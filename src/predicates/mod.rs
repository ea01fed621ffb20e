//! Exact geometric predicates: orientation, segment intersection and
//! point-in-polygon containment.
//!
//! Comparisons are made against exact zero; no tolerance is applied.

mod containment;
mod intersect;
mod orientation;

pub use containment::{close_ring, point_in_polygon};
pub use intersect::{on_segment_bounds, segments_intersect};
pub use orientation::{orientation, Orientation};
