//! Behavioral tests for the geometry kernel: segment intersection cases,
//! bounding-box containment and overlap, slope parallelism.

use inkboard_geom::{BoundingBox, Extent, Point, Segment};

fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
    Segment::new(Point::new(x1, y1), Point::new(x2, y2))
}

#[test]
fn crossing_segments_intersect() {
    let a = seg(0.0, 0.0, 10.0, 10.0);
    let b = seg(0.0, 10.0, 10.0, 0.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn disjoint_segments_do_not_intersect() {
    let a = seg(0.0, 0.0, 10.0, 0.0);
    let b = seg(0.0, 5.0, 10.0, 5.0);
    assert!(!a.intersects(&b));
}

#[test]
fn shared_endpoint_counts_as_intersection() {
    let a = seg(0.0, 0.0, 10.0, 0.0);
    let b = seg(10.0, 0.0, 20.0, 15.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn endpoint_touching_interior_counts() {
    // T shape: b ends on the interior of a.
    let a = seg(0.0, 0.0, 10.0, 0.0);
    let b = seg(5.0, -5.0, 5.0, 0.0);
    assert!(a.intersects(&b));
}

#[test]
fn parallel_non_collinear_segments_do_not_intersect() {
    let a = seg(0.0, 0.0, 10.0, 10.0);
    let b = seg(0.0, 1.0, 10.0, 11.0);
    assert!(Segment::parallel(&a, &b));
    assert!(!a.intersects(&b));
}

#[test]
fn collinear_disjoint_segments_do_not_intersect() {
    let a = seg(0.0, 0.0, 5.0, 5.0);
    let b = seg(6.0, 6.0, 10.0, 10.0);
    assert!(Segment::parallel(&a, &b));
    assert!(!a.intersects(&b));
}

#[test]
fn collinear_overlapping_segments_intersect() {
    let a = seg(0.0, 0.0, 6.0, 6.0);
    let b = seg(4.0, 4.0, 10.0, 10.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn slopes_reduce_before_comparison() {
    // 2/4 and 1/2 are the same slope once reduced.
    let a = seg(0.0, 0.0, 4.0, 2.0);
    let b = seg(10.0, 10.0, 12.0, 11.0);
    assert!(Segment::parallel(&a, &b));

    let c = seg(0.0, 0.0, 4.0, 3.0);
    assert!(!Segment::parallel(&a, &c));
}

#[test]
fn vertical_and_horizontal_parallelism() {
    assert!(Segment::parallel(
        &seg(2.0, 0.0, 2.0, 9.0),
        &seg(-4.0, 3.0, -4.0, 1.0)
    ));
    assert!(Segment::parallel(
        &seg(0.0, 2.0, 9.0, 2.0),
        &seg(3.0, -4.0, 1.0, -4.0)
    ));
    assert!(!Segment::parallel(
        &seg(2.0, 0.0, 2.0, 9.0),
        &seg(0.0, 2.0, 9.0, 2.0)
    ));
}

#[test]
fn bounding_box_signed_dimensions() {
    let b = BoundingBox::new(10.0, 10.0, 4.0, 2.0);
    assert_eq!(b.width(), -6.0);
    assert_eq!(b.height(), -8.0);
    assert_eq!(b.center(), Point::new(7.0, 6.0));
}

#[test]
fn contains_point_ignores_corner_order() {
    let normal = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    let flipped = BoundingBox::new(10.0, 10.0, 0.0, 0.0);
    for p in [
        Point::new(5.0, 5.0),
        Point::new(0.0, 0.0),
        Point::new(10.0, 5.0),
    ] {
        assert!(normal.contains_point(p));
        assert!(flipped.contains_point(p));
    }
    let outside = Point::new(10.5, 5.0);
    assert!(!normal.contains_point(outside));
    assert!(!flipped.contains_point(outside));
}

#[test]
fn segment_with_endpoint_inside_box_intersects() {
    let b = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    assert!(b.segment_intersects(&seg(5.0, 5.0, 50.0, 50.0)));
}

#[test]
fn segment_crossing_through_box_intersects() {
    // Both endpoints outside, but the segment passes through.
    let b = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    assert!(b.segment_intersects(&seg(-5.0, 5.0, 15.0, 5.0)));
}

#[test]
fn segment_missing_box_does_not_intersect() {
    let b = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    assert!(!b.segment_intersects(&seg(-5.0, 20.0, 15.0, 20.0)));
}

#[test]
fn overlapping_boxes_intersect() {
    let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    let b = BoundingBox::new(5.0, 5.0, 20.0, 20.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn touching_boxes_intersect() {
    // Shared edge counts as overlap.
    let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    let b = BoundingBox::new(10.0, 0.0, 20.0, 10.0);
    assert!(a.intersects(&b));

    // Shared corner too.
    let c = BoundingBox::new(10.0, 10.0, 20.0, 20.0);
    assert!(a.intersects(&c));
}

#[test]
fn disjoint_boxes_do_not_intersect() {
    let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    let b = BoundingBox::new(11.0, 0.0, 20.0, 10.0);
    assert!(!a.intersects(&b));
    assert!(!b.intersects(&a));
}

#[test]
fn inverted_boxes_still_overlap_correctly() {
    let a = BoundingBox::new(10.0, 10.0, 0.0, 0.0);
    let b = BoundingBox::new(20.0, 20.0, 5.0, 5.0);
    assert!(a.intersects(&b));
    let c = BoundingBox::new(30.0, 30.0, 12.0, 12.0);
    assert!(!a.intersects(&c));
}

#[test]
fn extent_unions_points_and_boxes() {
    let mut e = Extent::new();
    assert!(e.is_empty());
    e.include(Point::new(3.0, -2.0));
    e.include_box(&BoundingBox::new(10.0, 10.0, -4.0, 0.0));
    assert!(!e.is_empty());
    assert_eq!((e.min_x, e.min_y, e.max_x, e.max_y), (-4.0, -2.0, 10.0, 10.0));
}
