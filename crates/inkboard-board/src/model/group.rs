//! Groups of shapes moved and erased as one unit.

use inkboard_geom::{BoundingBox, Extent, Point, Segment};
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::{BoardShape, Shape, Style};
use crate::surface::DrawSurface;

/// A flat collection of member shapes.
///
/// Grouping a group does not nest: construction (and deserialization)
/// flattens members recursively, so the member list never contains another
/// group and a group can never end up containing itself. The bounds are the
/// union of the members' bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub origin: Point,
    #[serde(default, deserialize_with = "deserialize_members")]
    pub members: Vec<Shape>,
    #[serde(default)]
    pub style: Style,
    #[serde(skip)]
    bounding_box: BoundingBox,
}

impl Group {
    pub fn new(origin: Point, members: Vec<Shape>) -> Self {
        let mut group = Self {
            origin,
            members: flatten(members),
            style: Style::default(),
            bounding_box: BoundingBox::default(),
        };
        group.update();
        group
    }

    fn update_bounding_box(&mut self) {
        let mut extent = Extent::new();
        for member in &self.members {
            extent.include_box(member.bounding_box());
        }
        if extent.is_empty() {
            // Empty group collapses to its origin.
            self.bounding_box
                .update(self.origin.x, self.origin.y, self.origin.x, self.origin.y);
        } else {
            self.bounding_box
                .update(extent.min_x, extent.min_y, extent.max_x, extent.max_y);
        }
    }
}

/// Recursively splice nested groups into a single flat member list.
fn flatten(members: Vec<Shape>) -> Vec<Shape> {
    let mut flat = Vec::with_capacity(members.len());
    flatten_into(members, &mut flat);
    flat
}

fn flatten_into(members: Vec<Shape>, out: &mut Vec<Shape>) {
    for member in members {
        match member {
            Shape::Group(group) => flatten_into(group.members, out),
            other => out.push(other),
        }
    }
}

/// Member records deserialize individually so one unknown shape type drops
/// that member, not the whole group.
fn deserialize_members<'de, D>(deserializer: D) -> Result<Vec<Shape>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(flatten(values.into_iter().filter_map(Shape::from_value).collect()))
}

impl BoardShape for Group {
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
        for member in &mut self.members {
            member.update();
        }
        self.update_bounding_box();
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.origin.update(self.origin.x + dx, self.origin.y + dy);
        for member in &mut self.members {
            member.translate(dx, dy);
        }
        // Members refreshed their own bounds during translate.
        self.update_bounding_box();
    }

    fn contains_point(&self, _point: Point) -> bool {
        // Containment is not defined for a group as a whole.
        false
    }

    fn segment_intersects(&self, segment: &Segment) -> bool {
        // Broad phase against each member's bounds before its exact test.
        self.members.iter().any(|member| {
            member.bounding_box().segment_intersects(segment) && member.segment_intersects(segment)
        })
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        for member in &self.members {
            member.draw(surface);
        }
    }
}
