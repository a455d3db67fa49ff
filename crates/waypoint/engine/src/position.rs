//! Position queries over a tracker

use waypoint_types::{Block, Tracker, TrackerError, TrackerResult};

/// A resolved cross-block jump destination
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JumpTarget {
    /// First step of the target block
    pub step: usize,
    /// The target block itself
    pub block: Block,
}

/// Whether the cursor sits on the last step of its block.
///
/// A tracker whose current block has no range (a terminal or stale
/// cursor) has nothing left to run there and counts as at the end.
pub fn last_step_in_block(tracker: &Tracker) -> bool {
    match tracker.current_range() {
        Some(range) => tracker.current_step == range.end_idx,
        None => true,
    }
}

/// Resolve a jump to the first step of `target`.
///
/// Blocks are visited in a single forward pass, so a target whose
/// start lies behind the cursor indicates a malformed or stale tracker
/// and is rejected rather than rewound.
pub fn jump_to_block(tracker: &Tracker, target: Block) -> TrackerResult<JumpTarget> {
    let range = tracker
        .ranges
        .get(&target)
        .ok_or(TrackerError::BlockNotFound(target))?;

    if range.start_idx < tracker.current_step {
        return Err(TrackerError::BackwardJump {
            from: tracker.current_step,
            to: range.start_idx,
        });
    }

    Ok(JumpTarget {
        step: range.start_idx,
        block: target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use waypoint_types::BlockRange;

    fn tracker_at(block: Block, step: usize) -> Tracker {
        let ranges: BTreeMap<Block, BlockRange> = [
            BlockRange::new(Block::Main, 0, 3),
            BlockRange::new(Block::GeneralError, 4, 5),
        ]
        .into_iter()
        .map(|r| (r.block, r))
        .collect();

        Tracker {
            current_block: block,
            current_step: step,
            first_error_step: None,
            termination: 6,
            ranges,
        }
    }

    #[test]
    fn test_last_step_in_block() {
        assert!(last_step_in_block(&tracker_at(Block::Main, 3)));
        assert!(!last_step_in_block(&tracker_at(Block::Main, 2)));
    }

    #[test]
    fn test_terminal_cursor_counts_as_last() {
        assert!(last_step_in_block(&tracker_at(Block::NotApplicable, 6)));
    }

    #[test]
    fn test_jump_resolves_target_start() {
        let target = jump_to_block(&tracker_at(Block::Main, 2), Block::GeneralError).unwrap();
        assert_eq!(
            target,
            JumpTarget {
                step: 4,
                block: Block::GeneralError
            }
        );
    }

    #[test]
    fn test_jump_to_missing_block() {
        assert_eq!(
            jump_to_block(&tracker_at(Block::Main, 2), Block::Finally),
            Err(TrackerError::BlockNotFound(Block::Finally))
        );
    }

    #[test]
    fn test_jump_backwards_is_rejected() {
        assert_eq!(
            jump_to_block(&tracker_at(Block::Main, 2), Block::Main),
            Err(TrackerError::BackwardJump { from: 2, to: 0 })
        );
    }

    #[test]
    fn test_jump_to_current_position_is_allowed() {
        // Jumping to a block whose start equals the cursor is forward enough.
        let target = jump_to_block(&tracker_at(Block::Main, 0), Block::Main).unwrap();
        assert_eq!(target.step, 0);
    }
}
