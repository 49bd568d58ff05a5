//! Error types for the board layer.
//!
//! Geometry predicates are total and never fail; errors only arise at the
//! board's id-keyed mutation surface. File I/O uses `anyhow` at the
//! serialization boundary instead.

use thiserror::Error;

/// Board mutation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A shape with this identifier is already present
    #[error("Shape id {id} already present on the board")]
    DuplicateId {
        /// The identifier that collided.
        id: u64,
    },

    /// Lookup of an identifier that is not on the board
    #[error("No shape with id {id} on the board")]
    UnknownId {
        /// The identifier that was not found.
        id: u64,
    },
}
