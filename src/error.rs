//! Error types for the simulation core.

use thiserror::Error;

use crate::Pos;

/// Precondition violations raised by [`crate::World`].
///
/// All of these are synchronous and local to the offending call; the engine
/// has no transient failure modes and nothing here is worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorldError {
    /// Grid dimensions must both be positive (and fit a coordinate).
    #[error("invalid dimension: {rows}x{cols}")]
    InvalidDimension {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// Liveness probability must lie within [0, 1].
    #[error("invalid probability: {0}")]
    InvalidProbability(f64),

    /// Coordinate lies outside the grid.
    #[error("position ({}, {}) is out of bounds", .0.row, .0.col)]
    OutOfBounds(Pos),

    /// Generation counts must be non-negative.
    #[error("invalid generation count: {0}")]
    InvalidGenerationCount(i64),
}
