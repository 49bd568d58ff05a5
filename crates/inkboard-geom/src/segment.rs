//! Line segments: the exact intersection kernel and reduced slopes.

use serde::{Deserialize, Serialize};

use crate::point::{on_segment, orientation, Orientation, Point};

/// A directed line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    /// Slope of the segment as a reduced rational.
    pub fn slope(&self) -> Slope {
        Slope::new(self.start.y - self.end.y, self.start.x - self.end.x)
    }

    /// Whether two segments have the same reduced slope.
    ///
    /// Parallel segments may still be collinear; this test alone says nothing
    /// about intersection.
    pub fn parallel(a: &Segment, b: &Segment) -> bool {
        a.slope() == b.slope()
    }

    /// Exact segment/segment intersection.
    ///
    /// Classic four-orientation test: the segments cross properly when the
    /// endpoints of each lie on opposite sides of the other. The four
    /// follow-up checks catch collinear overlap and endpoint touching, which
    /// both count as intersecting. Symmetric in its arguments.
    pub fn intersects(&self, other: &Segment) -> bool {
        let o1 = orientation(self.start, self.end, other.start);
        let o2 = orientation(self.start, self.end, other.end);
        let o3 = orientation(other.start, other.end, self.start);
        let o4 = orientation(other.start, other.end, self.end);

        if o1 != o2 && o3 != o4 {
            return true;
        }

        // Collinear configurations: intersect only when the collinear point
        // falls inside the other segment's span.
        if o1 == Orientation::Collinear && on_segment(self.start, other.start, self.end) {
            return true;
        }
        if o2 == Orientation::Collinear && on_segment(self.start, other.end, self.end) {
            return true;
        }
        if o3 == Orientation::Collinear && on_segment(other.start, self.start, other.end) {
            return true;
        }
        if o4 == Orientation::Collinear && on_segment(other.start, self.end, other.end) {
            return true;
        }

        false
    }
}

/// A slope stored as a reduced rise/run pair.
///
/// Reducing through the GCD keeps equality exact: `2/4` and `1/2` compare
/// equal once reduced. Vertical segments are special-cased as `run == 0`
/// rather than dividing, and the run is normalized non-negative so opposite
/// segment directions produce the same slope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slope {
    rise: f64,
    run: f64,
}

impl Slope {
    pub fn new(rise: f64, run: f64) -> Self {
        if run == 0.0 {
            // Vertical, or a degenerate point when the rise is zero too.
            let rise = if rise == 0.0 { 0.0 } else { 1.0 };
            return Self { rise, run: 0.0 };
        }
        if rise == 0.0 {
            return Self { rise: 0.0, run: 1.0 };
        }

        let g = gcd(rise.abs(), run.abs());
        let (mut rise, mut run) = (rise / g, run / g);
        if run < 0.0 {
            rise = -rise;
            run = -run;
        }
        Self { rise, run }
    }

    pub fn rise(&self) -> f64 {
        self.rise
    }

    pub fn run(&self) -> f64 {
        self.run
    }

    pub fn is_vertical(&self) -> bool {
        self.run == 0.0
    }
}

/// Euclidean GCD over non-negative floats.
///
/// Terminates because every finite float is rational; for typical canvas
/// coordinates it converges in a handful of iterations.
fn gcd(mut a: f64, mut b: f64) -> f64 {
    while b > 0.0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
