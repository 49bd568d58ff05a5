//! Shape model and scene for inkboard.
//!
//! Layered on top of the `inkboard-geom` kernel:
//! - `model` — the closed [`Shape`] enum and its variants (line, path,
//!   rectangle, box, circle, ring, polygon, group), each owning its geometry,
//!   a [`Style`] and a cached bounding box
//! - `board` — the [`Board`]: an insertion-ordered id→shape scene with
//!   point/segment/box queries, the eraser pass and a selection set
//! - `surface` — the [`DrawSurface`] rendering boundary plus a recording
//!   test double
//! - `serialization` — versioned JSON save/load of a whole board
//!
//! The library installs no tracing subscriber; embedders own that.

pub mod board;
pub mod constants;
pub mod error;
pub mod model;
pub mod serialization;
pub mod surface;

pub use board::Board;
pub use error::BoardError;
pub use model::{
    BoardShape, BoxShape, Circle, Group, Line, Path, Polygon, Rectangle, Ring, Shape, Style,
};
pub use serialization::{load_board, save_board, BoardFile};
pub use surface::{DrawSurface, RecordingSurface, SurfaceOp};
