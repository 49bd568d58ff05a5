//! Save and load of whole boards.
//!
//! Boards persist as a versioned JSON document holding the id/shape records
//! in draw order. Derived state (bounding boxes, polygon edges) is never
//! written; loading rebuilds it. Records with an unknown shape type are
//! dropped with a warning instead of failing the load.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::board::Board;
use crate::model::Shape;

/// Board file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// On-disk board document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardFile {
    pub version: String,
    pub shapes: Vec<ShapeRecord>,
}

/// One persisted shape with its board identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub id: u64,
    pub shape: serde_json::Value,
}

impl BoardFile {
    /// Snapshot a board into a document, preserving draw order.
    pub fn from_board(board: &Board) -> Result<Self> {
        let mut shapes = Vec::with_capacity(board.len());
        for (id, shape) in board.iter() {
            let value =
                serde_json::to_value(shape).context("Failed to serialize shape record")?;
            shapes.push(ShapeRecord { id, shape: value });
        }
        Ok(Self {
            version: FILE_FORMAT_VERSION.to_string(),
            shapes,
        })
    }

    /// Rebuild a board from a document.
    ///
    /// Every record goes through the permissive shape decoder: unknown
    /// types are skipped with a warning, recognized shapes get their
    /// derived state rebuilt. The board's id counter ends up past every
    /// loaded id. Duplicate ids within one document are an error.
    pub fn into_board(self) -> Result<Board> {
        let mut board = Board::new();
        for record in self.shapes {
            let Some(shape) = Shape::from_value(record.shape) else {
                warn!(id = record.id, "dropped unrecognized shape while loading board");
                continue;
            };
            board
                .insert(record.id, shape)
                .context("Board document contains a duplicate shape id")?;
        }
        Ok(board)
    }

    /// Save the document to a file as pretty-printed JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize board")?;
        std::fs::write(path.as_ref(), json).context("Failed to write board file")?;
        Ok(())
    }

    /// Load a document from a file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read board file")?;
        let file: BoardFile =
            serde_json::from_str(&content).context("Failed to parse board file")?;
        Ok(file)
    }
}

/// Save a board straight to a file.
pub fn save_board(board: &Board, path: impl AsRef<Path>) -> Result<()> {
    BoardFile::from_board(board)?.save_to_file(path)
}

/// Load a board straight from a file.
pub fn load_board(path: impl AsRef<Path>) -> Result<Board> {
    BoardFile::load_from_file(path)?.into_board()
}
