//! Tracker transitions: the position-advance state machine
//!
//! Block as state, outcome as trigger:
//!
//! ```text
//! MAIN          --success, not last--> MAIN (step + 1)
//! MAIN          --success, last-----> FINALLY, else terminal
//! MAIN          --failure-----------> GENERAL_ERROR, else terminal
//! GENERAL_ERROR --success, not last--> GENERAL_ERROR (step + 1)
//! GENERAL_ERROR --success, last-----> FINALLY, else terminal
//! GENERAL_ERROR --failure-----------> terminal
//! FINALLY       --success, not last--> FINALLY (step + 1)
//! FINALLY       --success, last-----> terminal
//! FINALLY       --failure-----------> terminal
//! NOT_APPLICABLE --any--------------> NOT_APPLICABLE (stays terminal)
//! ```
//!
//! "Terminal" parks the cursor at the termination index under the
//! NOT_APPLICABLE block. A jump that fails (block missing, or start
//! behind the cursor) terminates the same way: termination is a valid,
//! non-error result, and the rejection reason is only logged.

use crate::position::{jump_to_block, last_step_in_block, JumpTarget};
use waypoint_types::{Block, Outcome, Tracker};

/// Advance the tracker after a successful step.
///
/// Inside a block the cursor moves one step forward. On the block's
/// last step the fixed policy picks the next block: MAIN and
/// GENERAL_ERROR hand over to FINALLY; FINALLY and the sentinels have
/// nowhere to go and finish the workflow. Error bookkeeping and ranges
/// carry over untouched.
pub fn advance_on_success(tracker: &Tracker) -> Tracker {
    if !last_step_in_block(tracker) {
        return Tracker {
            current_step: tracker.current_step + 1,
            ..tracker.clone()
        };
    }

    let target = match tracker.current_block {
        Block::Main | Block::GeneralError => {
            jump_to_block(tracker, Block::Finally).map_err(|err| err.to_string())
        }
        Block::Finally | Block::Unrecognized | Block::NotApplicable => {
            Err("terminating workflow, nowhere to advance".to_string())
        }
    };

    match target {
        Ok(JumpTarget { step, block }) => Tracker {
            current_block: block,
            current_step: step,
            ..tracker.clone()
        },
        Err(reason) => terminate(tracker, &reason),
    }
}

/// Advance the tracker after a failed step.
///
/// A failure in MAIN escalates to GENERAL_ERROR; a failure anywhere
/// else (including inside the error path) finishes the workflow. The
/// earliest failing index is preserved: repeated failures only ever
/// keep or lower `first_error_step`.
pub fn advance_on_failure(tracker: &Tracker) -> Tracker {
    let target = match tracker.current_block {
        Block::Main => jump_to_block(tracker, Block::GeneralError).map_err(|err| err.to_string()),
        Block::GeneralError | Block::Finally | Block::Unrecognized | Block::NotApplicable => Err(
            format!("failed on {} block, terminating", tracker.current_block),
        ),
    };

    let first_error_step = Some(match tracker.first_error_step {
        Some(earliest) => earliest.min(tracker.current_step),
        None => tracker.current_step,
    });

    let next = match target {
        Ok(JumpTarget { step, block }) => Tracker {
            current_block: block,
            current_step: step,
            ..tracker.clone()
        },
        Err(reason) => terminate(tracker, &reason),
    };

    Tracker {
        first_error_step,
        ..next
    }
}

/// Advance the tracker for one observed outcome
pub fn apply_outcome(tracker: &Tracker, outcome: &Outcome) -> Tracker {
    match outcome {
        Outcome::Success { .. } => advance_on_success(tracker),
        Outcome::Failure { .. } => advance_on_failure(tracker),
    }
}

fn terminate(tracker: &Tracker, reason: &str) -> Tracker {
    tracing::warn!(
        current_block = %tracker.current_block,
        current_step = tracker.current_step,
        reason = %reason,
        "Tracker reached terminal state"
    );
    Tracker {
        current_block: Block::NotApplicable,
        current_step: tracker.termination,
        ..tracker.clone()
    }
}
