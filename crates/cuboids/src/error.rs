//! Error types for net construction and search.

use thiserror::Error;

use crate::surface::CellId;

/// Result type alias for fallible net operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or searching nets.
///
/// `PlacementCollision`, `MissingLayoutAnchor` and `NotAdjacent` all mean the
/// caller picked a placement the surface graph does not allow; a search that
/// hits one aborts instead of skipping the branch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The layout slot computed for a new cell is already occupied.
    #[error("placement collision: cell {cell} lands on occupied slot ({row}, {col})")]
    PlacementCollision { cell: CellId, row: usize, col: usize },

    /// The attach target is not part of the basis net.
    #[error("could not find cell {cell} in layout")]
    MissingLayoutAnchor { cell: CellId },

    /// The new cell shares no surface edge with its attach target.
    #[error("cell {cell} is not a surface neighbour of cell {anchor}")]
    NotAdjacent { cell: CellId, anchor: CellId },

    /// Box dimensions could not be parsed or are not positive.
    #[error("invalid dimensions: {0}")]
    InvalidDims(String),

    /// A dedicated worker pool could not be created.
    #[error("thread pool: {0}")]
    ThreadPool(String),
}
