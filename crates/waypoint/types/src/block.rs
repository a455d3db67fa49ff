//! Block vocabulary: ordered execution blocks and boundary markers
//!
//! Execution order is fixed and significant: MAIN precedes
//! GENERAL_ERROR precedes FINALLY. Two sentinel values sit outside the
//! ordered set: UNRECOGNIZED tags malformed input, and NOT_APPLICABLE
//! marks a finished workflow.

use serde::{Deserialize, Serialize};

/// An execution block of a workflow
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Block {
    /// The main sequence
    Main,
    /// The error-handling sequence, entered when a main step fails
    GeneralError,
    /// The cleanup sequence, entered after MAIN or GENERAL_ERROR completes
    Finally,
    /// Malformed or unknown input
    Unrecognized,
    /// Terminal marker: the workflow has finished
    NotApplicable,
}

impl Block {
    /// The executable blocks in their fixed execution order.
    ///
    /// The sentinels are excluded: they never own steps.
    pub const fn sequence() -> [Block; 3] {
        [Block::Main, Block::GeneralError, Block::Finally]
    }

    /// Whether this is one of the two sentinel values
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Block::Unrecognized | Block::NotApplicable)
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Block::Main => "MAIN",
            Block::GeneralError => "GENERAL_ERROR",
            Block::Finally => "FINALLY",
            Block::Unrecognized => "UNRECOGNIZED",
            Block::NotApplicable => "NOT_APPLICABLE",
        };
        write!(f, "{}", name)
    }
}

/// Marks a step as the first or last step of its block
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockEdge {
    /// First step of the block
    Start,
    /// Last step of the block
    End,
}

/// One boundary decoration attached to a step.
///
/// Interior steps carry none; an edge step of a multi-step block
/// carries one; the only step of a single-step block carries both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockMarker {
    /// The block this marker belongs to
    pub block: Block,
    /// Which boundary of the block the step sits on
    pub edge: BlockEdge,
}

impl BlockMarker {
    pub fn new(block: Block, edge: BlockEdge) -> Self {
        Self { block, edge }
    }
}
