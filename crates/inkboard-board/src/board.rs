//! The board: an id-keyed, insertion-ordered scene of shapes.

use std::collections::{HashMap, HashSet};

use inkboard_geom::{BoundingBox, Point, Segment};
use tracing::debug;

use crate::constants::DUPLICATE_OFFSET;
use crate::error::BoardError;
use crate::model::{BoardShape, Shape};
use crate::surface::DrawSurface;

/// Scene container for every shape on the whiteboard.
///
/// Shapes are keyed by a `u64` identifier handed out by the board's own
/// monotonic counter; iteration and drawing follow insertion order
/// (back-to-front). Identifiers are never reused while the shape is present.
///
/// Queries are linear scans in two phases: the cached bounding box first,
/// then the shape's exact test. There is no persistent spatial index.
#[derive(Debug)]
pub struct Board {
    shapes: HashMap<u64, Shape>,
    draw_order: Vec<u64>,
    selection: HashSet<u64>,
    next_id: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            shapes: HashMap::new(),
            draw_order: Vec::new(),
            selection: HashSet::new(),
            next_id: 1,
        }
    }

    /// Hand out the next free identifier.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Bump the counter so future ids start at `next` or later. Used after
    /// loading a document that already carries ids.
    pub fn set_next_id(&mut self, next: u64) {
        self.next_id = self.next_id.max(next);
    }

    /// Add a shape under a freshly generated identifier.
    pub fn add(&mut self, shape: Shape) -> u64 {
        let id = self.generate_id();
        self.shapes.insert(id, shape);
        self.draw_order.push(id);
        id
    }

    /// Insert a shape under a caller-chosen identifier.
    pub fn insert(&mut self, id: u64, shape: Shape) -> Result<(), BoardError> {
        if self.shapes.contains_key(&id) {
            return Err(BoardError::DuplicateId { id });
        }
        self.shapes.insert(id, shape);
        self.draw_order.push(id);
        self.set_next_id(id + 1);
        Ok(())
    }

    pub fn get(&self, id: u64) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Mutable access to a shape. Callers changing geometry through the
    /// public fields must call `update` on the shape before the next query.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Shape> {
        self.shapes.get_mut(&id)
    }

    /// Remove a shape, dropping it from the draw order and the selection.
    pub fn remove(&mut self, id: u64) -> Option<Shape> {
        let shape = self.shapes.remove(&id)?;
        self.draw_order.retain(|&entry| entry != id);
        self.selection.remove(&id);
        debug!(id, "removed shape from board");
        Some(shape)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Remove everything, selection included. The id counter keeps going so
    /// ids from before the clear are never reissued within this board.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.draw_order.clear();
        self.selection.clear();
        debug!("cleared board");
    }

    /// Shapes in insertion (draw) order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &Shape)> {
        self.draw_order
            .iter()
            .filter_map(|id| self.shapes.get(id).map(|shape| (*id, shape)))
    }

    /// Ids of shapes containing the point, in draw order. Two-phase: cached
    /// bounds first, then the exact per-shape test. Shapes without an
    /// interior (lines, paths, groups) never match.
    pub fn query_point(&self, point: Point) -> Vec<u64> {
        self.iter()
            .filter(|(_, shape)| {
                shape.bounding_box().contains_point(point) && shape.contains_point(point)
            })
            .map(|(id, _)| id)
            .collect()
    }

    /// Ids of shapes the segment touches, in draw order.
    pub fn query_segment(&self, segment: &Segment) -> Vec<u64> {
        self.iter()
            .filter(|(_, shape)| {
                shape.bounding_box().segment_intersects(segment)
                    && shape.segment_intersects(segment)
            })
            .map(|(id, _)| id)
            .collect()
    }

    /// Ids of shapes whose bounds overlap the box, in draw order. Touching
    /// edges count. Marquee selection semantics: the bounds are the whole
    /// test, no exact phase.
    pub fn query_box(&self, bounds: &BoundingBox) -> Vec<u64> {
        self.iter()
            .filter(|(_, shape)| shape.bounding_box().intersects(bounds))
            .map(|(id, _)| id)
            .collect()
    }

    /// One eraser stroke: remove every shape the segment touches and return
    /// their ids.
    pub fn erase(&mut self, stroke: &Segment) -> Vec<u64> {
        let hits = self.query_segment(stroke);
        for &id in &hits {
            self.remove(id);
        }
        if !hits.is_empty() {
            debug!(count = hits.len(), "eraser stroke removed shapes");
        }
        hits
    }

    pub fn selected_ids(&self) -> &HashSet<u64> {
        &self.selection
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selection.contains(&id)
    }

    /// Select the topmost shape containing the point. Replaces the current
    /// selection unless `extend` is set. Returns the selected id, if any.
    pub fn select_at_point(&mut self, point: Point, extend: bool) -> Option<u64> {
        if !extend {
            self.selection.clear();
        }
        let top = self.query_point(point).last().copied();
        if let Some(id) = top {
            self.selection.insert(id);
        }
        top
    }

    /// Marquee select: every shape whose bounds overlap the box. Replaces
    /// the current selection unless `extend` is set.
    pub fn select_in_box(&mut self, bounds: &BoundingBox, extend: bool) {
        if !extend {
            self.selection.clear();
        }
        self.selection.extend(self.query_box(bounds));
    }

    pub fn deselect_all(&mut self) {
        self.selection.clear();
    }

    /// Delete every selected shape, returning the removed ids in draw order.
    pub fn delete_selected(&mut self) -> Vec<u64> {
        let ids: Vec<u64> = self
            .draw_order
            .iter()
            .copied()
            .filter(|id| self.selection.contains(id))
            .collect();
        for &id in &ids {
            self.remove(id);
        }
        ids
    }

    /// Clone a shape under a fresh id, offset slightly so the copy is
    /// visible next to the original.
    pub fn duplicate(&mut self, id: u64) -> Result<u64, BoardError> {
        let mut copy = self
            .shapes
            .get(&id)
            .cloned()
            .ok_or(BoardError::UnknownId { id })?;
        copy.translate(DUPLICATE_OFFSET, DUPLICATE_OFFSET);
        Ok(self.add(copy))
    }

    /// Draw every shape back-to-front.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        for (_, shape) in self.iter() {
            shape.draw(surface);
        }
    }
}
