//! Range extraction: recovering block bounds from a decorated sequence

use std::collections::BTreeMap;
use waypoint_types::{Block, BlockEdge, BlockRange, Step};

/// Recover the absolute index bounds of every block present in `steps`.
///
/// One scan over the sequence: each marker records `base_index +
/// position` as its block's start or end, merging with whatever the
/// scan has already seen for that block. A step carrying both edges
/// yields a single-step range, unmarked steps are skipped, and blocks
/// with no steps are absent from the result.
///
/// `base_index` positions the recovered ranges inside a larger,
/// previously existing step sequence, the supported mechanism for
/// composing workflows incrementally over time.
pub fn block_ranges(base_index: usize, steps: &[Step]) -> BTreeMap<Block, BlockRange> {
    let mut bounds: BTreeMap<Block, (Option<usize>, Option<usize>)> = BTreeMap::new();

    for (position, step) in steps.iter().enumerate() {
        for marker in &step.markers {
            let slot = bounds.entry(marker.block).or_default();
            match marker.edge {
                BlockEdge::Start => slot.0 = Some(base_index + position),
                BlockEdge::End => slot.1 = Some(base_index + position),
            }
        }
    }

    bounds
        .into_iter()
        .filter_map(|(block, bound)| {
            // A range that lost one edge collapses to the recorded position.
            let (start_idx, end_idx) = match bound {
                (Some(start), Some(end)) => (start, end),
                (Some(only), None) | (None, Some(only)) => (only, only),
                (None, None) => return None,
            };
            Some((block, BlockRange::new(block, start_idx, end_idx)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(name: &str, block: Block, edges: &[BlockEdge]) -> Step {
        Step::new(name).with_markers(block, edges)
    }

    #[test]
    fn test_empty_sequence() {
        assert!(block_ranges(0, &[]).is_empty());
    }

    #[test]
    fn test_main_block_only() {
        let steps = vec![
            marked("m1", Block::Main, &[BlockEdge::Start]),
            Step::new("m2"),
            marked("m3", Block::Main, &[BlockEdge::End]),
        ];

        let ranges = block_ranges(0, &steps);
        assert_eq!(ranges.len(), 1);
        assert_eq!(
            ranges[&Block::Main],
            BlockRange::new(Block::Main, 0, 2)
        );
    }

    #[test]
    fn test_full_sequence() {
        let steps = vec![
            marked("m1", Block::Main, &[BlockEdge::Start]),
            Step::new("m2"),
            marked("m3", Block::Main, &[BlockEdge::End]),
            marked("e1", Block::GeneralError, &[BlockEdge::Start]),
            marked("e2", Block::GeneralError, &[BlockEdge::End]),
            marked("f1", Block::Finally, &[BlockEdge::Start]),
            marked("f2", Block::Finally, &[BlockEdge::End]),
        ];

        let ranges = block_ranges(0, &steps);
        assert_eq!(ranges[&Block::Main], BlockRange::new(Block::Main, 0, 2));
        assert_eq!(
            ranges[&Block::GeneralError],
            BlockRange::new(Block::GeneralError, 3, 4)
        );
        assert_eq!(
            ranges[&Block::Finally],
            BlockRange::new(Block::Finally, 5, 6)
        );
    }

    #[test]
    fn test_doubly_marked_step() {
        let steps = vec![
            marked("m1", Block::Main, &[BlockEdge::Start]),
            marked("m2", Block::Main, &[BlockEdge::End]),
            marked("e1", Block::GeneralError, &[BlockEdge::Start, BlockEdge::End]),
            marked("f1", Block::Finally, &[BlockEdge::Start]),
            marked("f2", Block::Finally, &[BlockEdge::End]),
        ];

        let ranges = block_ranges(0, &steps);
        assert_eq!(
            ranges[&Block::GeneralError],
            BlockRange::new(Block::GeneralError, 2, 2)
        );
        assert_eq!(
            ranges[&Block::Finally],
            BlockRange::new(Block::Finally, 3, 4)
        );
    }

    #[test]
    fn test_base_index_offsets_every_bound() {
        let steps = vec![
            marked("m1", Block::Main, &[BlockEdge::Start]),
            Step::new("m2"),
            marked("m3", Block::Main, &[BlockEdge::End]),
            marked("e1", Block::GeneralError, &[BlockEdge::Start]),
            marked("e2", Block::GeneralError, &[BlockEdge::End]),
        ];

        let ranges = block_ranges(6, &steps);
        assert_eq!(ranges[&Block::Main], BlockRange::new(Block::Main, 6, 8));
        assert_eq!(
            ranges[&Block::GeneralError],
            BlockRange::new(Block::GeneralError, 9, 10)
        );
    }

    #[test]
    fn test_unmarked_steps_are_skipped() {
        let steps = vec![Step::new("a"), Step::new("b")];
        assert!(block_ranges(0, &steps).is_empty());
    }
}
