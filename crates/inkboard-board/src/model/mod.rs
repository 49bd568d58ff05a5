//! The shape model.
//!
//! Every drawable is a variant of the closed [`Shape`] enum, dispatching to
//! a per-variant struct through the [`BoardShape`] trait. Variants own their
//! geometry, a [`Style`] and a cached bounding box; the bounding box and any
//! derived segment lists are rebuilt by `update` and never serialized.

pub mod group;
pub mod line;
pub mod path;
pub mod polygon;
pub mod rectangle;
pub mod ring;
pub mod style;

pub use group::Group;
pub use line::Line;
pub use path::Path;
pub use polygon::Polygon;
pub use rectangle::{BoxShape, Rectangle};
pub use ring::{Circle, Ring};
pub use style::{LineCap, LineJoin, Style};

use inkboard_geom::{BoundingBox, Point, Segment};
use serde::{Deserialize, Serialize};

use crate::surface::DrawSurface;

/// Common contract for everything drawable on a board.
///
/// The cached bounding box is only valid after `update`; every geometric
/// mutation on a variant refreshes it before returning, so callers can rely
/// on `bounding_box` between mutations.
pub trait BoardShape {
    /// Anchor point of the shape. Top-left corner for rectangle-likes,
    /// center for radial shapes, first point for lines and paths.
    fn origin(&self) -> Point;

    /// Cached bounds, kept current by `update`.
    fn bounding_box(&self) -> &BoundingBox;

    fn style(&self) -> &Style;

    /// Recompute derived state (bounding box, derived segments) and apply
    /// minimum-size clamps. Idempotent.
    fn update(&mut self);

    /// Move by a delta.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Move the origin to an absolute position, carrying the rest of the
    /// geometry along.
    fn translate_to(&mut self, x: f64, y: f64) {
        let o = self.origin();
        self.translate(x - o.x, y - o.y);
    }

    /// Rotate by a delta, in radians. Only meaningful for polygons; the
    /// other variants ignore it.
    fn rotate(&mut self, angle: f64) {
        let _ = angle;
    }

    /// Set the absolute rotation, in radians.
    fn rotate_to(&mut self, angle: f64) {
        let _ = angle;
    }

    /// Whether the point lies inside the shape. Open shapes (lines, paths,
    /// groups) have no interior and always answer `false`.
    fn contains_point(&self, point: Point) -> bool;

    /// Exact segment overlap test, used by the eraser after the broad
    /// bounding-box pass.
    fn segment_intersects(&self, segment: &Segment) -> bool;

    /// Emit the shape's path onto a surface.
    fn draw(&self, surface: &mut dyn DrawSurface);
}

/// A drawable shape.
///
/// Serialized as a field mapping keyed by a lowercase `type` discriminator,
/// so documents written by other implementations of the format load as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Line(Line),
    Path(Path),
    Rectangle(Rectangle),
    Box(BoxShape),
    Circle(Circle),
    Ring(Ring),
    Polygon(Polygon),
    Group(Group),
}

impl Shape {
    fn inner(&self) -> &dyn BoardShape {
        match self {
            Shape::Line(s) => s,
            Shape::Path(s) => s,
            Shape::Rectangle(s) => s,
            Shape::Box(s) => s,
            Shape::Circle(s) => s,
            Shape::Ring(s) => s,
            Shape::Polygon(s) => s,
            Shape::Group(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn BoardShape {
        match self {
            Shape::Line(s) => s,
            Shape::Path(s) => s,
            Shape::Rectangle(s) => s,
            Shape::Box(s) => s,
            Shape::Circle(s) => s,
            Shape::Ring(s) => s,
            Shape::Polygon(s) => s,
            Shape::Group(s) => s,
        }
    }

    /// Deserialize one shape record, rebuilding derived state.
    ///
    /// Records with an unknown `type` (or otherwise malformed fields) are
    /// dropped with a warning rather than failing the whole document.
    pub fn from_value(value: serde_json::Value) -> Option<Shape> {
        match serde_json::from_value::<Shape>(value) {
            Ok(mut shape) => {
                shape.update();
                Some(shape)
            }
            Err(err) => {
                tracing::warn!(error = %err, "skipping unrecognized shape record");
                None
            }
        }
    }
}

impl BoardShape for Shape {
    fn origin(&self) -> Point {
        self.inner().origin()
    }

    fn bounding_box(&self) -> &BoundingBox {
        self.inner().bounding_box()
    }

    fn style(&self) -> &Style {
        self.inner().style()
    }

    fn update(&mut self) {
        self.inner_mut().update();
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.inner_mut().translate(dx, dy);
    }

    fn translate_to(&mut self, x: f64, y: f64) {
        self.inner_mut().translate_to(x, y);
    }

    fn rotate(&mut self, angle: f64) {
        self.inner_mut().rotate(angle);
    }

    fn rotate_to(&mut self, angle: f64) {
        self.inner_mut().rotate_to(angle);
    }

    fn contains_point(&self, point: Point) -> bool {
        self.inner().contains_point(point)
    }

    fn segment_intersects(&self, segment: &Segment) -> bool {
        self.inner().segment_intersects(segment)
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        self.inner().draw(surface);
    }
}
