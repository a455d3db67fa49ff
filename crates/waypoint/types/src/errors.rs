//! Error types for tracker operations

use crate::Block;

/// Errors surfaced by tracker operations.
///
/// `BlockNotFound` and `BackwardJump` never escape the engine's public
/// transitions: they are converted into deterministic termination.
/// `MissingOutcomeTag` is a caller contract violation rejected at the
/// outcome boundary, before the engine is reached.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    #[error("block [{0}] was not found")]
    BlockNotFound(Block),

    #[error("attempt to move backwards (from {from} to idx {to})")]
    BackwardJump { from: usize, to: usize },

    #[error("outcome carries neither success nor failure")]
    MissingOutcomeTag,

    #[error("index {index} out of bounds for length {len}")]
    StepOutOfRange { index: usize, len: usize },
}

/// Result type alias for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
