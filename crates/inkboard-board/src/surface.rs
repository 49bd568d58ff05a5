//! The rendering boundary.
//!
//! Shapes do not know how to rasterize; they issue canvas-style path
//! commands against a [`DrawSurface`]. Backends implement the trait;
//! [`RecordingSurface`] captures the command stream for tests and headless
//! use.

use crate::model::Style;

/// Canvas-2d-like drawing primitives.
///
/// A shape's `draw` applies its style first, then builds exactly one path
/// and finishes it with `stroke` or `fill`.
pub trait DrawSurface {
    fn set_style(&mut self, style: &Style);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Axis-aligned rectangle subpath. Width and height may be negative.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    /// Full circle subpath centered on `(cx, cy)`.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64);
    fn stroke(&mut self);
    fn fill(&mut self);
}

/// One recorded drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    SetStyle(Style),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Rect(f64, f64, f64, f64),
    Arc(f64, f64, f64),
    Stroke,
    Fill,
}

/// A [`DrawSurface`] that records its command stream.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn set_style(&mut self, style: &Style) {
        self.ops.push(SurfaceOp::SetStyle(style.clone()));
    }

    fn begin_path(&mut self) {
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(SurfaceOp::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(SurfaceOp::LineTo(x, y));
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(SurfaceOp::Rect(x, y, width, height));
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64) {
        self.ops.push(SurfaceOp::Arc(cx, cy, radius));
    }

    fn stroke(&mut self) {
        self.ops.push(SurfaceOp::Stroke);
    }

    fn fill(&mut self) {
        self.ops.push(SurfaceOp::Fill);
    }
}
