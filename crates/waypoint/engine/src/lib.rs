//! Waypoint tracker engine
//!
//! The engine owns the pipeline's only control-flow guarantees
//! (monotonic progress, at-most-once error escalation, deterministic
//! termination), encoded entirely through index arithmetic and ordering
//! rules over a flattened step list.
//!
//! A caller flattens per-block step lists once ([`ordered_steps`]),
//! derives block ranges from the result ([`block_ranges`]) and stores
//! them in a [`Tracker`](waypoint_types::Tracker), then repeatedly
//! feeds step outcomes into [`apply_outcome`] and dispatches the step
//! at the new position, until the tracker reaches its terminal state.
//!
//! Every operation here is a pure function over immutable inputs: no
//! shared state, no blocking, no I/O. The `tracing` calls on the
//! forced-termination paths are a diagnostic side channel and never
//! change the computed result.

#![deny(unsafe_code)]

pub mod advance;
pub mod decorate;
pub mod position;
pub mod ranges;

pub use advance::{advance_on_failure, advance_on_success, apply_outcome};
pub use decorate::{mark_edges, ordered_steps};
pub use position::{jump_to_block, last_step_in_block, JumpTarget};
pub use ranges::block_ranges;
