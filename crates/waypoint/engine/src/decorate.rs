//! Step decoration: flattening per-block step lists into one sequence

use std::collections::HashMap;
use waypoint_types::{Block, BlockEdge, Step};

/// Mark the boundary steps of one block.
///
/// The first step receives a START marker and the last an END marker
/// for `block`; a single step receives both. Interior steps pass
/// through unchanged, and markers a step already carries are preserved
/// verbatim. Decoration is additive, never an overwrite.
pub fn mark_edges(block: Block, steps: &[Step]) -> Vec<Step> {
    match steps {
        [] => Vec::new(),
        [only] => vec![only
            .clone()
            .with_markers(block, &[BlockEdge::Start, BlockEdge::End])],
        [first, interior @ .., last] => {
            let mut marked = Vec::with_capacity(steps.len());
            marked.push(first.clone().with_marker(block, BlockEdge::Start));
            marked.extend(interior.iter().cloned());
            marked.push(last.clone().with_marker(block, BlockEdge::End));
            marked
        }
    }
}

/// Flatten per-block step lists into one block-ordered sequence.
///
/// Blocks are visited in their declared order regardless of the map's
/// own iteration order; absent or empty entries contribute nothing.
/// Steps are never reordered within a block and never dropped.
pub fn ordered_steps(steps_by_block: &HashMap<Block, Vec<Step>>) -> Vec<Step> {
    Block::sequence()
        .iter()
        .flat_map(|block| {
            let steps = steps_by_block
                .get(block)
                .map(Vec::as_slice)
                .unwrap_or_default();
            mark_edges(*block, steps)
        })
        .collect()
}
