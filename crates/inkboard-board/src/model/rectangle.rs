//! Axis-aligned rectangles, filled and outline-only.

use inkboard_geom::{BoundingBox, Point, Segment};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_RECT_SIZE, MIN_SHAPE_SIZE};
use crate::model::{BoardShape, Style};
use crate::surface::DrawSurface;

fn default_size() -> f64 {
    DEFAULT_RECT_SIZE
}

/// Clamp a signed dimension to the minimum drawable size, preserving the
/// drag direction. Zero picks the positive direction.
fn clamp_dimension(value: f64) -> f64 {
    if value.abs() < MIN_SHAPE_SIZE {
        MIN_SHAPE_SIZE.copysign(value)
    } else {
        value
    }
}

/// A filled rectangle anchored at its top-left origin.
///
/// `width` and `height` are signed: dragging up/left of the origin is legal
/// and keeps the negative dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    #[serde(default)]
    pub origin: Point,
    #[serde(default = "default_size")]
    pub width: f64,
    #[serde(default = "default_size")]
    pub height: f64,
    #[serde(default)]
    pub style: Style,
    #[serde(skip)]
    bounding_box: BoundingBox,
}

impl Rectangle {
    pub fn new(origin: Point, width: f64, height: f64) -> Self {
        let mut rect = Self {
            origin,
            width,
            height,
            style: Style::default(),
            bounding_box: BoundingBox::default(),
        };
        rect.update();
        rect
    }
}

impl BoardShape for Rectangle {
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
        self.width = clamp_dimension(self.width);
        self.height = clamp_dimension(self.height);
        self.bounding_box.update(
            self.origin.x,
            self.origin.y,
            self.origin.x + self.width,
            self.origin.y + self.height,
        );
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.origin.update(self.origin.x + dx, self.origin.y + dy);
        self.update();
    }

    fn contains_point(&self, point: Point) -> bool {
        // The rectangle's extent is exactly its bounding box.
        self.bounding_box.contains_point(point)
    }

    fn segment_intersects(&self, segment: &Segment) -> bool {
        // Filled: any touch counts, including a segment fully inside.
        self.bounding_box.segment_intersects(segment)
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.set_style(&self.style);
        surface.begin_path();
        surface.rect(self.origin.x, self.origin.y, self.width, self.height);
        surface.fill();
    }
}

/// An outline-only rectangle.
///
/// Same geometry as [`Rectangle`], but only the border is drawn, and a
/// segment that stays strictly inside does not count as touching it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxShape {
    #[serde(default)]
    pub origin: Point,
    #[serde(default = "default_size")]
    pub width: f64,
    #[serde(default = "default_size")]
    pub height: f64,
    #[serde(default)]
    pub style: Style,
    #[serde(skip)]
    bounding_box: BoundingBox,
}

impl BoxShape {
    pub fn new(origin: Point, width: f64, height: f64) -> Self {
        let mut shape = Self {
            origin,
            width,
            height,
            style: Style::default(),
            bounding_box: BoundingBox::default(),
        };
        shape.update();
        shape
    }
}

impl BoardShape for BoxShape {
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
        self.width = clamp_dimension(self.width);
        self.height = clamp_dimension(self.height);
        self.bounding_box.update(
            self.origin.x,
            self.origin.y,
            self.origin.x + self.width,
            self.origin.y + self.height,
        );
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.origin.update(self.origin.x + dx, self.origin.y + dy);
        self.update();
    }

    fn contains_point(&self, point: Point) -> bool {
        self.bounding_box.contains_point(point)
    }

    fn segment_intersects(&self, segment: &Segment) -> bool {
        let start_inside = self.bounding_box.contains_point(segment.start);
        let end_inside = self.bounding_box.contains_point(segment.end);
        if start_inside != end_inside {
            // Crosses the border once.
            return true;
        }
        // Both endpoints on the same side of the border: only an actual
        // border crossing counts, so a segment strictly inside misses.
        self.bounding_box
            .edges()
            .iter()
            .any(|edge| edge.intersects(segment))
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.set_style(&self.style);
        surface.begin_path();
        surface.rect(self.origin.x, self.origin.y, self.width, self.height);
        surface.stroke();
    }
}
