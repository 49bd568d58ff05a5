//! Free-hand pen strokes.

use inkboard_geom::{BoundingBox, Extent, Point, Segment};
use serde::{Deserialize, Serialize};

use crate::model::{BoardShape, Line, Style};
use crate::surface::DrawSurface;

/// A polyline built incrementally by the pen tool, one stroke segment per
/// pointer movement.
///
/// The first segment is kept anchored at the path origin: moving the origin
/// drags every segment along by the same delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    #[serde(default)]
    pub origin: Point,
    #[serde(default)]
    pub segments: Vec<Line>,
    #[serde(default)]
    pub style: Style,
    #[serde(skip)]
    bounding_box: BoundingBox,
}

impl Path {
    pub fn new(origin: Point) -> Self {
        let mut path = Self {
            origin,
            segments: Vec::new(),
            style: Style::default(),
            bounding_box: BoundingBox::default(),
        };
        path.update();
        path
    }

    /// Append one stroke segment and grow the bounds to cover it.
    pub fn push_segment(&mut self, mut segment: Line) {
        segment.update_bounding_box();
        self.segments.push(segment);
        self.update_bounding_box();
    }

    /// Re-anchor the segment list so the first segment starts at the path
    /// origin. No-op when they already agree.
    fn align_segments(&mut self) {
        let Some(first) = self.segments.first() else {
            return;
        };
        let dx = self.origin.x - first.origin.x;
        let dy = self.origin.y - first.origin.y;
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        for segment in &mut self.segments {
            segment.translate(dx, dy);
        }
    }

    fn update_bounding_box(&mut self) {
        let mut extent = Extent::new();
        extent.include(self.origin);
        for segment in &self.segments {
            extent.include(segment.origin);
            extent.include(segment.end_point);
        }
        self.bounding_box
            .update(extent.min_x, extent.min_y, extent.max_x, extent.max_y);
    }
}

impl BoardShape for Path {
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
        self.align_segments();
        for segment in &mut self.segments {
            segment.update_bounding_box();
        }
        self.update_bounding_box();
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.origin.update(self.origin.x + dx, self.origin.y + dy);
        for segment in &mut self.segments {
            segment.translate(dx, dy);
        }
        // Members already refreshed their own bounds.
        self.update_bounding_box();
    }

    fn contains_point(&self, _point: Point) -> bool {
        // Open stroke, no interior.
        false
    }

    fn segment_intersects(&self, segment: &Segment) -> bool {
        // Broad phase against each member's bounds before the exact test.
        self.segments.iter().any(|member| {
            member.bounding_box().segment_intersects(segment) && member.segment_intersects(segment)
        })
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.set_style(&self.style);
        surface.begin_path();
        for segment in &self.segments {
            surface.move_to(segment.origin.x, segment.origin.y);
            surface.line_to(segment.end_point.x, segment.end_point.y);
        }
        surface.stroke();
    }
}
