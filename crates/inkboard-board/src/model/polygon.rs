//! Regular polygons.

use std::f64::consts::TAU;

use inkboard_geom::{BoundingBox, Extent, Point, Segment};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants::{DEFAULT_POLYGON_SIDES, DEFAULT_RADIUS};
use crate::model::ring::clamp_radius;
use crate::model::{BoardShape, Line, Style};
use crate::surface::DrawSurface;

fn default_sides() -> u32 {
    DEFAULT_POLYGON_SIDES
}

fn default_radius() -> f64 {
    DEFAULT_RADIUS
}

/// A regular polygon centered on `origin`, vertices on a circle of
/// `radius`, rotated by `rotation` radians.
///
/// The edges are derived geometry: `update` regenerates them from the
/// parameters, flagged as dependent segments so the minimum-length clamp
/// never distorts them. Vertex `i` sits at angle `i·(2π/n) + rotation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    #[serde(default)]
    pub origin: Point,
    #[serde(default = "default_sides")]
    pub num_sides: u32,
    #[serde(default = "default_radius")]
    pub radius: f64,
    /// Radians, normalized into `[0, 2π)`.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub style: Style,
    #[serde(skip)]
    segments: SmallVec<[Line; 8]>,
    #[serde(skip)]
    bounding_box: BoundingBox,
}

impl Polygon {
    pub fn new(origin: Point, num_sides: u32, radius: f64, rotation: f64) -> Self {
        let mut polygon = Self {
            origin,
            num_sides,
            radius,
            rotation,
            style: Style::default(),
            segments: SmallVec::new(),
            bounding_box: BoundingBox::default(),
        };
        polygon.update();
        polygon
    }

    /// The derived edges, in vertex order.
    pub fn segments(&self) -> &[Line] {
        &self.segments
    }

    fn vertex(&self, angle: f64) -> Point {
        Point::new(
            self.origin.x + self.radius * angle.cos(),
            self.origin.y + self.radius * angle.sin(),
        )
    }

    fn rebuild_segments(&mut self) {
        self.segments.clear();
        if self.num_sides == 0 {
            return;
        }
        let theta = TAU / self.num_sides as f64;
        for i in 0..self.num_sides {
            let start = self.vertex(i as f64 * theta + self.rotation);
            let end = self.vertex((i + 1) as f64 * theta + self.rotation);
            self.segments.push(Line::edge(start, end, self.style.clone()));
        }
    }
}

impl BoardShape for Polygon {
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
        self.rotation = self.rotation.rem_euclid(TAU);
        self.rebuild_segments();

        let mut extent = Extent::new();
        extent.include(self.origin);
        for segment in &self.segments {
            extent.include(segment.origin);
            extent.include(segment.end_point);
        }
        self.bounding_box
            .update(extent.min_x, extent.min_y, extent.max_x, extent.max_y);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.origin.update(self.origin.x + dx, self.origin.y + dy);
        self.update();
    }

    fn rotate(&mut self, angle: f64) {
        self.rotation = (self.rotation + angle).rem_euclid(TAU);
        self.update();
    }

    fn rotate_to(&mut self, angle: f64) {
        self.rotation = angle.rem_euclid(TAU);
        self.update();
    }

    /// Even-odd ray cast: shoot a horizontal ray to the right of the point
    /// and count edge crossings. Odd parity means inside.
    fn contains_point(&self, point: Point) -> bool {
        let mut crossings = 0u32;
        for segment in &self.segments {
            let a = segment.origin;
            let b = segment.end_point;
            if (a.y > point.y) != (b.y > point.y) {
                let cross_x = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if cross_x > point.x {
                    crossings += 1;
                }
            }
        }
        crossings % 2 == 1
    }

    fn segment_intersects(&self, segment: &Segment) -> bool {
        self.segments.iter().any(|edge| {
            edge.bounding_box().segment_intersects(segment) && edge.segment_intersects(segment)
        })
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.set_style(&self.style);
        surface.begin_path();
        let Some(first) = self.segments.first() else {
            return;
        };
        surface.move_to(first.origin.x, first.origin.y);
        for segment in &self.segments {
            surface.line_to(segment.end_point.x, segment.end_point.y);
        }
        surface.stroke();
    }
}
