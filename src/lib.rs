//! planar - Small 2D geometry helpers
//!
//! Stateless functions over plain 2D points: distances, interpolation,
//! extending lines, orientation, segment intersection and point-in-polygon.
//! Every function is pure and safe to call from any thread.

pub mod construct;
pub mod error;
pub mod measure;
pub mod predicates;
pub mod primitives;
pub mod scalar;

pub use construct::{extend_line, interpolated_point, midpoint};
pub use error::GeomError;
pub use measure::{approx_line_length, closest_point, euclid_dist, polyline_length};
pub use predicates::{
    close_ring, on_segment_bounds, orientation, point_in_polygon, segments_intersect,
    Orientation,
};
pub use primitives::{Point2, Segment2, Vec2};
pub use scalar::{bits_to_float, float_to_bits, linear_interpolation};
