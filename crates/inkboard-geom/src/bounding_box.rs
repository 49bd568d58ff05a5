//! Axis-aligned bounding boxes.
//!
//! A [`BoundingBox`] is two corner points, deliberately not normalized: a
//! shape dragged up and to the left keeps its negative width and height, and
//! every test here is written to be corner-order agnostic instead.

use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::segment::Segment;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub start: Point,
    pub end: Point,
}

impl BoundingBox {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
        }
    }

    /// Reposition both corners. The only mutator; shapes call this from
    /// their own `update` after geometry changes.
    pub fn update(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.start.update(x1, y1);
        self.end.update(x2, y2);
    }

    /// Signed width; negative when the end corner is left of the start.
    pub fn width(&self) -> f64 {
        self.end.x - self.start.x
    }

    /// Signed height; negative when the end corner is above the start.
    pub fn height(&self) -> f64 {
        self.end.y - self.start.y
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.start.x + self.width() / 2.0,
            self.start.y + self.height() / 2.0,
        )
    }

    /// Whether a point lies inside the box, border included.
    ///
    /// Uses the distance-sum identity per axis: the point is between the two
    /// corner coordinates exactly when its distances to both add up to the
    /// corner span. Holds for either corner ordering.
    pub fn contains_point(&self, p: Point) -> bool {
        let on_x =
            (self.start.x - p.x).abs() + (self.end.x - p.x).abs() == (self.start.x - self.end.x).abs();
        let on_y =
            (self.start.y - p.y).abs() + (self.end.y - p.y).abs() == (self.start.y - self.end.y).abs();
        on_x && on_y
    }

    /// The four sides as segments, synthesized from the corners.
    pub fn edges(&self) -> [Segment; 4] {
        let (s, e) = (self.start, self.end);
        let top_right = Point::new(e.x, s.y);
        let bottom_left = Point::new(s.x, e.y);
        [
            Segment::new(s, top_right),
            Segment::new(top_right, e),
            Segment::new(e, bottom_left),
            Segment::new(bottom_left, s),
        ]
    }

    /// Whether a segment touches the box: an endpoint inside, or a crossing
    /// of any of the four sides.
    pub fn segment_intersects(&self, seg: &Segment) -> bool {
        if self.contains_point(seg.start) || self.contains_point(seg.end) {
            return true;
        }
        self.edges().iter().any(|edge| edge.intersects(seg))
    }

    /// Box/box overlap, shared edges and corners included.
    ///
    /// Separating-axis style: the boxes are disjoint exactly when one lies
    /// entirely past the other on some axis, phrased over both corners of
    /// both boxes so corner ordering does not matter. Symmetric.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        let left = self.start.x.min(self.end.x);
        let right = self.start.x.max(self.end.x);
        let top = self.start.y.min(self.end.y);
        let bottom = self.start.y.max(self.end.y);

        let other_left = other.start.x.min(other.end.x);
        let other_right = other.start.x.max(other.end.x);
        let other_top = other.start.y.min(other.end.y);
        let other_bottom = other.start.y.max(other.end.y);

        !(right < other_left || other_right < left || bottom < other_top || other_bottom < top)
    }
}

/// Running min/max accumulator for unioning geometry into one box.
///
/// Composite shapes fold their children through this and feed the result to
/// `BoundingBox::update`. Starts inverted (infinities) so the first include
/// snaps to it.
#[derive(Debug, Clone, Copy)]
pub struct Extent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Extent {
    pub fn new() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    pub fn include(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    /// Union in a possibly non-normalized box by including both corners.
    pub fn include_box(&mut self, b: &BoundingBox) {
        self.include(b.start);
        self.include(b.end);
    }

    /// True until the first `include`.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::new()
    }
}
