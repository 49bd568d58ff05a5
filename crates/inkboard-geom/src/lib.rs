//! Geometry kernel for inkboard.
//!
//! Provides the primitives the shape model and the board are built on:
//! - [`Point`] with the orientation predicate used by the intersection kernel
//! - [`BoundingBox`] with point/segment/box overlap tests (broad phase)
//! - [`Segment`] with the exact orientation-based intersection test and
//!   reduced-slope parallelism
//!
//! All predicates here are total: they return plain booleans and never fail.
//! Coordinates are `f64` in canvas space (x grows right, y grows down), so a
//! positive cross product means a clockwise turn.

pub mod bounding_box;
pub mod point;
pub mod segment;

pub use bounding_box::{BoundingBox, Extent};
pub use point::{on_segment, orientation, Orientation, Point};
pub use segment::{Segment, Slope};
