//! Waypoint workflow messages
//!
//! The message layer wraps the tracker core in the record the pipeline
//! actually routes: payload history, accumulated headers, and the
//! workflow log (decorated step sequence plus tracker). Between
//! dispatches the pipeline uses this crate to assemble the process
//! input for the current step, fold the step's outcome back into the
//! message, and resolve where to send the message next.
//!
//! Dispatchers stop when the tracker reports
//! [`is_finished`](waypoint_types::Tracker::is_finished); the message
//! layer never dispatches anything itself.

#![deny(unsafe_code)]

mod io;
mod message;

pub use io::*;
pub use message::*;
