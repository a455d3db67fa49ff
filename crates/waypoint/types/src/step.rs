//! Steps: units of remotely-executed work
//!
//! Steps are produced once when a workflow is authored and never
//! mutated afterwards; only the tracker changes as execution proceeds.
//! Marker decoration therefore builds a new record with the
//! concatenated marker list; markers a step already carries (for
//! example from an earlier, nested decoration pass) are preserved
//! verbatim.

use crate::{Block, BlockEdge, BlockMarker};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A unit of work in the flattened step sequence
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Step name
    pub name: String,
    /// Remote address where the step executes
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    /// Input attributes propagated into the step's process input
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,
    /// Block boundary markers; empty for interior steps
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<BlockMarker>,
}

impl Step {
    /// Create a new step with no address, attributes, or markers
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: String::new(),
            attributes: HashMap::new(),
            markers: Vec::new(),
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Return a copy with one more marker appended
    pub fn with_marker(mut self, block: Block, edge: BlockEdge) -> Self {
        self.markers.push(BlockMarker::new(block, edge));
        self
    }

    /// Return a copy with a marker for each of `edges` appended
    pub fn with_markers(mut self, block: Block, edges: &[BlockEdge]) -> Self {
        self.markers
            .extend(edges.iter().map(|edge| BlockMarker::new(block, *edge)));
        self
    }

    /// Whether this step carries `edge` for `block`
    pub fn has_marker(&self, block: Block, edge: BlockEdge) -> bool {
        self.markers.contains(&BlockMarker::new(block, edge))
    }
}
