//! Straight line segments.

use inkboard_geom::{BoundingBox, Point, Segment};
use serde::{Deserialize, Serialize};

use crate::constants::MIN_SHAPE_SIZE;
use crate::model::{BoardShape, Style};
use crate::surface::DrawSurface;

/// A straight stroke from `origin` to `end_point`.
///
/// Standalone lines are clamped to the minimum drawable length on `update`.
/// Lines owned by a composite (polygon edges) set `is_segment`, which
/// exempts them from the clamp so derived geometry is never distorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    #[serde(default)]
    pub origin: Point,
    #[serde(default)]
    pub end_point: Point,
    #[serde(default)]
    pub style: Style,
    #[serde(default)]
    pub is_segment: bool,
    #[serde(skip)]
    bounding_box: BoundingBox,
}

impl Line {
    pub fn new(origin: Point, end_point: Point) -> Self {
        let mut line = Self {
            origin,
            end_point,
            style: Style::default(),
            is_segment: false,
            bounding_box: BoundingBox::default(),
        };
        line.update();
        line
    }

    /// A dependent edge of a composite shape, exempt from the minimum-length
    /// clamp.
    pub fn edge(start: Point, end: Point, style: Style) -> Self {
        let mut line = Self {
            origin: start,
            end_point: end,
            style,
            is_segment: true,
            bounding_box: BoundingBox::default(),
        };
        line.update();
        line
    }

    /// The line's geometry as a kernel segment.
    pub fn segment(&self) -> Segment {
        Segment::new(self.origin, self.end_point)
    }

    pub fn length(&self) -> f64 {
        self.origin.distance_to(self.end_point)
    }

    /// Refresh only the cached bounds, without re-running the length clamp.
    /// Paths use this on their member strokes, which may legitimately be
    /// shorter than a standalone line.
    pub fn update_bounding_box(&mut self) {
        self.bounding_box.update(
            self.origin.x,
            self.origin.y,
            self.end_point.x,
            self.end_point.y,
        );
    }

    fn enforce_min_length(&mut self) {
        let len = self.length();
        if len >= MIN_SHAPE_SIZE {
            return;
        }
        if len == 0.0 {
            // Degenerate point: give it a horizontal default extent.
            self.end_point = Point::new(self.origin.x + MIN_SHAPE_SIZE, self.origin.y);
            return;
        }
        // Stretch along the existing direction.
        let scale = MIN_SHAPE_SIZE / len;
        self.end_point = Point::new(
            self.origin.x + (self.end_point.x - self.origin.x) * scale,
            self.origin.y + (self.end_point.y - self.origin.y) * scale,
        );
    }
}

impl BoardShape for Line {
    fn origin(&self) -> Point {
        self.origin
    }

    fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn update(&mut self) {
        if !self.is_segment {
            self.enforce_min_length();
        }
        self.update_bounding_box();
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.origin.update(self.origin.x + dx, self.origin.y + dy);
        self.end_point
            .update(self.end_point.x + dx, self.end_point.y + dy);
        self.update_bounding_box();
    }

    fn contains_point(&self, _point: Point) -> bool {
        // A stroke has no interior.
        false
    }

    fn segment_intersects(&self, segment: &Segment) -> bool {
        self.segment().intersects(segment)
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.set_style(&self.style);
        surface.begin_path();
        surface.move_to(self.origin.x, self.origin.y);
        surface.line_to(self.end_point.x, self.end_point.y);
        surface.stroke();
    }
}
