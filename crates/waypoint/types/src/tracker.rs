//! The tracker: the position record advanced once per step outcome
//!
//! The tracker is the only mutable piece of workflow state, and even
//! that mutability is modeled functionally: every transition consumes a
//! tracker and yields the next immutable snapshot. Callers must always
//! operate on the latest snapshot and apply outcomes strictly in the
//! order they are observed for a given workflow instance.

use crate::{Block, BlockRange};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The position record attached to an in-flight workflow message
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tracker {
    /// Block the cursor currently points into
    pub current_block: Block,
    /// Index into the flattened step sequence; equals `termination`
    /// once the workflow has finished
    pub current_step: usize,
    /// Earliest step index at which a failure occurred. `Some` iff an
    /// error has been raised; monotonic: once set it is never cleared,
    /// and the index only ever decreases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_error_step: Option<usize>,
    /// One past the last valid step index; the value `current_step`
    /// takes when the workflow is done
    pub termination: usize,
    /// Absolute index bounds of every block that has steps
    pub ranges: BTreeMap<Block, BlockRange>,
}

impl Tracker {
    /// Create a tracker positioned at the first step of MAIN.
    ///
    /// A workflow without a MAIN range has nothing to run: the tracker
    /// starts already terminal.
    pub fn new(ranges: BTreeMap<Block, BlockRange>, termination: usize) -> Self {
        let (current_block, current_step) = match ranges.get(&Block::Main) {
            Some(range) => (Block::Main, range.start_idx),
            None => (Block::NotApplicable, termination),
        };
        Self {
            current_block,
            current_step,
            first_error_step: None,
            termination,
            ranges,
        }
    }

    /// Range of the block the cursor is in, when that block has one
    pub fn current_range(&self) -> Option<&BlockRange> {
        self.ranges.get(&self.current_block)
    }

    /// Whether a failure has occurred at any point in this workflow
    pub fn error_raised(&self) -> bool {
        self.first_error_step.is_some()
    }

    /// Terminal state: no further transitions are defined
    pub fn is_finished(&self) -> bool {
        self.current_block == Block::NotApplicable
    }
}
