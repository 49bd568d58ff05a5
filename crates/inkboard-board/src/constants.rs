//! Shared model constants.

/// Minimum drawable extent, in canvas units. Width, height and line length
/// are clamped to this; radii to half of it.
pub const MIN_SHAPE_SIZE: f64 = 10.0;

/// Default width and height for rectangle-like shapes created without
/// explicit dimensions.
pub const DEFAULT_RECT_SIZE: f64 = 100.0;

/// Default radius for circles, rings and polygons.
pub const DEFAULT_RADIUS: f64 = 50.0;

/// Default side count for polygons.
pub const DEFAULT_POLYGON_SIDES: u32 = 5;

/// Offset applied to duplicated shapes so the copy is visible next to the
/// original.
pub const DUPLICATE_OFFSET: f64 = 10.0;
