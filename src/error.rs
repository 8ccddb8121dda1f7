//! Error types for the grid, the search engine and the direction list.

use crate::grid::Position;
use thiserror::Error;

/// Errors raised while building or addressing a grid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("invalid grid dimensions {rows}x{columns}: rows and columns must be between 1 and {max}")]
    InvalidDimensions {
        rows: usize,
        columns: usize,
        max: usize,
    },

    #[error("position {position} is outside the {rows}x{columns} grid")]
    OutOfBounds {
        position: Position,
        rows: usize,
        columns: usize,
    },

    #[error("start and goal cannot share position {0}")]
    StartIsGoal(Position),

    #[error("obstacle ratio {0} must be between 0.0 and 1.0")]
    InvalidObstacleRatio(f64),

    #[error("unknown grid glyph '{0}'")]
    UnknownGlyph(char),

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("expected exactly one {glyph} cell, found {found}")]
    EndpointCount { glyph: char, found: usize },
}

/// Errors raised by the search engine itself.
///
/// A search that cannot reach the goal is not an error; see
/// [`SearchOutcome`](crate::algorithms::SearchOutcome).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("grid has no start cell")]
    MissingStart,

    #[error("grid has no goal cell")]
    MissingGoal,

    #[error("extract_min called on an empty frontier")]
    EmptyFrontier,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    #[error("move index {index} out of range for {len} moves")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Failures of a complete run: building the grid or searching it.
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("grid setup failed: {0}")]
    Grid(#[from] GridError),

    #[error("search failed: {0}")]
    Search(#[from] SearchError),
}
