//! Shape model tests: minimum-size clamps, per-variant hit testing,
//! polygon derivation, grouping and serde round-trips.

use inkboard_board::model::BoardShape;
use inkboard_board::{BoxShape, Circle, Group, Line, Path, Polygon, Rectangle, Ring, Shape};
use inkboard_geom::{Point, Segment};
use serde_json::json;
use std::f64::consts::PI;

fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
    Segment::new(Point::new(x1, y1), Point::new(x2, y2))
}

#[test]
fn rectangle_dimensions_clamp_preserving_sign() {
    let rect = Rectangle::new(Point::new(0.0, 0.0), -5.0, 3.0);
    assert_eq!(rect.width, -10.0);
    assert_eq!(rect.height, 10.0);

    let big = Rectangle::new(Point::new(0.0, 0.0), -50.0, 50.0);
    assert_eq!(big.width, -50.0);
    assert_eq!(big.height, 50.0);
}

#[test]
fn box_dimensions_clamp_like_rectangle() {
    let b = BoxShape::new(Point::new(0.0, 0.0), 4.0, -4.0);
    assert_eq!(b.width, 10.0);
    assert_eq!(b.height, -10.0);
}

#[test]
fn radius_clamps_to_half_minimum() {
    let circle = Circle::new(Point::new(0.0, 0.0), 2.0);
    assert_eq!(circle.radius, 5.0);

    let ring = Ring::new(Point::new(0.0, 0.0), 3.0);
    assert_eq!(ring.radius, 5.0);

    let polygon = Polygon::new(Point::new(0.0, 0.0), 6, 1.0, 0.0);
    assert_eq!(polygon.radius, 5.0);
}

#[test]
fn zero_length_line_gets_default_extent() {
    let line = Line::new(Point::new(5.0, 5.0), Point::new(5.0, 5.0));
    assert_eq!(line.end_point, Point::new(15.0, 5.0));
    assert_eq!(line.length(), 10.0);
}

#[test]
fn short_line_stretches_along_its_direction() {
    // 3-4-5 triangle scaled to the minimum length.
    let line = Line::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
    assert_eq!(line.end_point, Point::new(6.0, 8.0));
    assert_eq!(line.length(), 10.0);
}

#[test]
fn dependent_edges_are_exempt_from_the_length_clamp() {
    let mut edge = Line::edge(Point::new(0.0, 0.0), Point::new(2.0, 0.0), Default::default());
    edge.update();
    assert_eq!(edge.end_point, Point::new(2.0, 0.0));
    assert_eq!(edge.length(), 2.0);
}

#[test]
fn rectangle_contains_points_regardless_of_drag_direction() {
    // Dragged up-left: negative width and height.
    let rect = Rectangle::new(Point::new(10.0, 10.0), -10.0, -10.0);
    assert!(rect.contains_point(Point::new(5.0, 5.0)));
    assert!(rect.contains_point(Point::new(10.0, 10.0)));
    assert!(!rect.contains_point(Point::new(11.0, 5.0)));
}

#[test]
fn interior_segment_hits_rectangle_but_not_box() {
    let rect = Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0);
    let outline = BoxShape::new(Point::new(0.0, 0.0), 10.0, 10.0);
    let interior = seg(2.0, 2.0, 8.0, 8.0);
    assert!(rect.segment_intersects(&interior));
    assert!(!outline.segment_intersects(&interior));

    let crossing = seg(-5.0, 5.0, 5.0, 5.0);
    assert!(rect.segment_intersects(&crossing));
    assert!(outline.segment_intersects(&crossing));
}

#[test]
fn disc_containment_is_radial() {
    let circle = Circle::new(Point::new(0.0, 0.0), 50.0);
    assert!(circle.contains_point(Point::new(30.0, 40.0)));
    assert!(!circle.contains_point(Point::new(30.0, 41.0)));
}

#[test]
fn interior_segment_hits_circle_but_not_ring() {
    let circle = Circle::new(Point::new(0.0, 0.0), 50.0);
    let ring = Ring::new(Point::new(0.0, 0.0), 50.0);
    let interior = seg(-10.0, 0.0, 10.0, 0.0);
    assert!(circle.segment_intersects(&interior));
    assert!(!ring.segment_intersects(&interior));

    let crossing = seg(0.0, 0.0, 100.0, 0.0);
    assert!(circle.segment_intersects(&crossing));
    assert!(ring.segment_intersects(&crossing));
}

#[test]
fn pass_through_segment_misses_both_disc_shapes() {
    // Established endpoint-only behavior: both endpoints outside, so the
    // crossing goes unreported.
    let circle = Circle::new(Point::new(0.0, 0.0), 50.0);
    let ring = Ring::new(Point::new(0.0, 0.0), 50.0);
    let through = seg(-100.0, 0.0, 100.0, 0.0);
    assert!(!circle.segment_intersects(&through));
    assert!(!ring.segment_intersects(&through));
}

#[test]
fn polygon_derives_one_edge_per_side() {
    let polygon = Polygon::new(Point::new(0.0, 0.0), 6, 40.0, 0.0);
    assert_eq!(polygon.segments().len(), 6);
    assert!(polygon.segments().iter().all(|edge| edge.is_segment));

    // First vertex sits at angle zero: straight right of the center.
    let first = &polygon.segments()[0];
    assert!((first.origin.x - 40.0).abs() < 1e-9);
    assert!(first.origin.y.abs() < 1e-9);
}

#[test]
fn polygon_contains_its_center_but_not_far_points() {
    for sides in [4, 10] {
        let polygon = Polygon::new(Point::new(0.0, 0.0), sides, 10.0, 0.0);
        assert!(polygon.contains_point(Point::new(0.0, 0.0)));
        assert!(!polygon.contains_point(Point::new(100.0, 100.0)));
    }
}

#[test]
fn polygon_rotation_normalizes_into_one_turn() {
    let mut polygon = Polygon::new(Point::new(0.0, 0.0), 5, 40.0, 0.0);
    polygon.rotate_to(7.0 * PI);
    assert!((polygon.rotation - PI).abs() < 1e-9);

    polygon.rotate(-2.0 * PI);
    assert!((polygon.rotation - PI).abs() < 1e-9);

    polygon.rotate(PI + PI / 2.0);
    assert!((polygon.rotation - PI / 2.0).abs() < 1e-9);
}

#[test]
fn polygon_translate_carries_the_edges() {
    let mut polygon = Polygon::new(Point::new(0.0, 0.0), 4, 10.0, 0.0);
    polygon.translate(100.0, 50.0);
    assert!(polygon.contains_point(Point::new(100.0, 50.0)));
    assert!(!polygon.contains_point(Point::new(0.0, 0.0)));
    let first = &polygon.segments()[0];
    assert!((first.origin.x - 110.0).abs() < 1e-9);
    assert!((first.origin.y - 50.0).abs() < 1e-9);
}

#[test]
fn path_bounds_grow_with_each_stroke() {
    let mut path = Path::new(Point::new(0.0, 0.0));
    path.push_segment(Line::edge(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Default::default(),
    ));
    assert_eq!(path.bounding_box().end, Point::new(10.0, 0.0));

    path.push_segment(Line::edge(
        Point::new(10.0, 0.0),
        Point::new(10.0, -20.0),
        Default::default(),
    ));
    assert_eq!(path.bounding_box().start, Point::new(0.0, -20.0));
    assert_eq!(path.bounding_box().end, Point::new(10.0, 0.0));
}

#[test]
fn path_translate_moves_every_stroke() {
    let mut path = Path::new(Point::new(0.0, 0.0));
    path.push_segment(Line::edge(
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        Default::default(),
    ));
    path.translate(5.0, 5.0);
    assert_eq!(path.origin, Point::new(5.0, 5.0));
    assert_eq!(path.segments[0].origin, Point::new(5.0, 5.0));
    assert_eq!(path.segments[0].end_point, Point::new(15.0, 15.0));
    assert!(path.segment_intersects(&seg(10.0, 0.0, 10.0, 20.0)));
}

#[test]
fn moving_a_path_origin_drags_the_strokes_on_update() {
    let mut path = Path::new(Point::new(0.0, 0.0));
    path.push_segment(Line::edge(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Default::default(),
    ));
    path.origin = Point::new(20.0, 20.0);
    path.update();
    assert_eq!(path.segments[0].origin, Point::new(20.0, 20.0));
    assert_eq!(path.segments[0].end_point, Point::new(30.0, 20.0));
}

#[test]
fn grouping_groups_flattens_the_members() {
    let inner = Group::new(
        Point::new(0.0, 0.0),
        vec![
            Shape::Rectangle(Rectangle::new(Point::new(0.0, 0.0), 20.0, 20.0)),
            Shape::Circle(Circle::new(Point::new(50.0, 50.0), 10.0)),
        ],
    );
    let outer = Group::new(
        Point::new(0.0, 0.0),
        vec![
            Shape::Group(inner),
            Shape::Line(Line::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0))),
        ],
    );
    assert_eq!(outer.members.len(), 3);
    assert!(!outer
        .members
        .iter()
        .any(|member| matches!(member, Shape::Group(_))));
}

#[test]
fn group_bounds_are_the_union_of_member_bounds() {
    let group = Group::new(
        Point::new(0.0, 0.0),
        vec![
            Shape::Rectangle(Rectangle::new(Point::new(0.0, 0.0), 20.0, 20.0)),
            Shape::Circle(Circle::new(Point::new(100.0, 100.0), 20.0)),
        ],
    );
    assert_eq!(group.bounding_box().start, Point::new(0.0, 0.0));
    assert_eq!(group.bounding_box().end, Point::new(120.0, 120.0));
}

#[test]
fn group_translate_preserves_member_layout() {
    let mut group = Group::new(
        Point::new(0.0, 0.0),
        vec![
            Shape::Rectangle(Rectangle::new(Point::new(0.0, 0.0), 20.0, 20.0)),
            Shape::Circle(Circle::new(Point::new(100.0, 100.0), 20.0)),
        ],
    );
    group.translate(5.0, -5.0);
    assert_eq!(group.origin, Point::new(5.0, -5.0));
    assert_eq!(group.members[0].origin(), Point::new(5.0, -5.0));
    assert_eq!(group.members[1].origin(), Point::new(105.0, 95.0));
    assert_eq!(group.bounding_box().start, Point::new(5.0, -5.0));
    assert_eq!(group.bounding_box().end, Point::new(125.0, 115.0));
}

#[test]
fn group_erase_test_reaches_into_members() {
    let group = Group::new(
        Point::new(0.0, 0.0),
        vec![Shape::Rectangle(Rectangle::new(
            Point::new(0.0, 0.0),
            20.0,
            20.0,
        ))],
    );
    assert!(group.segment_intersects(&seg(-5.0, 10.0, 5.0, 10.0)));
    assert!(!group.segment_intersects(&seg(50.0, 50.0, 60.0, 60.0)));
}

#[test]
fn shapes_round_trip_through_their_tagged_encoding() {
    let original = Shape::Polygon(Polygon::new(Point::new(10.0, 20.0), 7, 30.0, 1.0));
    let value = serde_json::to_value(&original).unwrap();
    assert_eq!(value["type"], "polygon");

    let reloaded = Shape::from_value(value).unwrap();
    let Shape::Polygon(polygon) = &reloaded else {
        panic!("wrong variant after reload");
    };
    assert_eq!(polygon.num_sides, 7);
    assert_eq!(polygon.radius, 30.0);
    assert_eq!(polygon.segments().len(), 7);
    assert_eq!(reloaded.bounding_box(), original.bounding_box());
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let circle = Shape::from_value(json!({ "type": "circle" })).unwrap();
    let Shape::Circle(circle) = circle else {
        panic!("wrong variant");
    };
    assert_eq!(circle.radius, 50.0);
    assert_eq!(circle.origin, Point::new(0.0, 0.0));
    assert_eq!(circle.style.line_width, 1.0);

    let rect = Shape::from_value(json!({ "type": "rectangle" })).unwrap();
    let Shape::Rectangle(rect) = rect else {
        panic!("wrong variant");
    };
    assert_eq!(rect.width, 100.0);
    assert_eq!(rect.height, 100.0);
}

#[test]
fn unknown_shape_types_are_dropped() {
    assert!(Shape::from_value(json!({ "type": "sticker" })).is_none());
    assert!(Shape::from_value(json!("not even an object")).is_none());
}

#[test]
fn unknown_member_types_are_dropped_from_groups() {
    let group = Shape::from_value(json!({
        "type": "group",
        "origin": { "x": 0.0, "y": 0.0 },
        "members": [
            { "type": "rectangle", "origin": { "x": 0.0, "y": 0.0 } },
            { "type": "sticker" }
        ]
    }))
    .unwrap();
    let Shape::Group(group) = group else {
        panic!("wrong variant");
    };
    assert_eq!(group.members.len(), 1);
}

#[test]
fn deserialized_line_is_clamped_like_a_new_one() {
    let line = Shape::from_value(json!({
        "type": "line",
        "origin": { "x": 0.0, "y": 0.0 }
    }))
    .unwrap();
    let Shape::Line(line) = line else {
        panic!("wrong variant");
    };
    // Default endpoint coincides with the origin, so the clamp kicks in.
    assert_eq!(line.end_point, Point::new(10.0, 0.0));
}
