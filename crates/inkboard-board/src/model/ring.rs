//! Circles, filled and outline-only.

use inkboard_geom::{BoundingBox, Point, Segment};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_RADIUS, MIN_SHAPE_SIZE};
use crate::model::{BoardShape, Style};
use crate::surface::DrawSurface;

fn default_radius() -> f64 {
    DEFAULT_RADIUS
}

pub(crate) fn clamp_radius(radius: f64) -> f64 {
    // Radii are half-dimensions, so they clamp to half the minimum size.
    if radius.abs() < MIN_SHAPE_SIZE / 2.0 {
        (MIN_SHAPE_SIZE / 2.0).copysign(radius)
    } else {
        radius
    }
}

/// A filled disc centered on `origin`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    #[serde(default)]
    pub origin: Point,
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default)]
    pub style: Style,
    #[serde(skip)]
    bounding_box: BoundingBox,
}

impl Circle {
    pub fn new(origin: Point, radius: f64) -> Self {
        let mut circle = Self {
            origin,
            radius,
            style: Style::default(),
            bounding_box: BoundingBox::default(),
        };
        circle.update();
        circle
    }
}

impl BoardShape for Circle {
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
        self.radius = clamp_radius(self.radius);
        self.bounding_box.update(
            self.origin.x - self.radius,
            self.origin.y - self.radius,
            self.origin.x + self.radius,
            self.origin.y + self.radius,
        );
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.origin.update(self.origin.x + dx, self.origin.y + dy);
        self.update();
    }

    fn contains_point(&self, point: Point) -> bool {
        self.origin.distance_to(point) <= self.radius
    }

    /// Endpoint-based test only: a segment whose endpoints both lie outside
    /// the disc is reported as missing it even when it passes through.
    /// Matches the established eraser behavior; chord intersection is not
    /// computed.
    fn segment_intersects(&self, segment: &Segment) -> bool {
        self.contains_point(segment.start) || self.contains_point(segment.end)
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.set_style(&self.style);
        surface.begin_path();
        surface.arc(self.origin.x, self.origin.y, self.radius.abs());
        surface.fill();
    }
}

/// An outline-only circle.
///
/// Same disc geometry as [`Circle`]; only the rim is drawn, and a segment
/// counts as touching it only when it crosses the rim (one endpoint inside
/// the disc, the other outside).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    #[serde(default)]
    pub origin: Point,
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default)]
    pub style: Style,
    #[serde(skip)]
    bounding_box: BoundingBox,
}

impl Ring {
    pub fn new(origin: Point, radius: f64) -> Self {
        let mut ring = Self {
            origin,
            radius,
            style: Style::default(),
            bounding_box: BoundingBox::default(),
        };
        ring.update();
        ring
    }
}

impl BoardShape for Ring {
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
        self.radius = clamp_radius(self.radius);
        self.bounding_box.update(
            self.origin.x - self.radius,
            self.origin.y - self.radius,
            self.origin.x + self.radius,
            self.origin.y + self.radius,
        );
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.origin.update(self.origin.x + dx, self.origin.y + dy);
        self.update();
    }

    fn contains_point(&self, point: Point) -> bool {
        self.origin.distance_to(point) <= self.radius
    }

    /// Rim-crossing test: exactly one endpoint inside the disc. A segment
    /// entirely inside, or passing through with both endpoints outside,
    /// does not touch the rim. The pass-through gap mirrors [`Circle`].
    fn segment_intersects(&self, segment: &Segment) -> bool {
        self.contains_point(segment.start) != self.contains_point(segment.end)
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.set_style(&self.style);
        surface.begin_path();
        surface.arc(self.origin.x, self.origin.y, self.radius.abs());
        surface.stroke();
    }
}
