//! Message operations between dispatches: process input assembly and
//! outcome folding
//!
//! `append_outcome` is the message-level counterpart of the tracker
//! transition: it advances the tracker and merges the outcome's
//! payload and headers into the message. Header merging keeps existing
//! values on key collision: a step may propose headers but never
//! overwrite what an earlier step established.

use crate::WorkflowMessage;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use waypoint_types::{Outcome, OutcomeRecord, Payload, Step, TrackerError, TrackerResult};

/// The input handed to a step's remote processor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessInput {
    /// The most recent payload, when the message carries any
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payloads: Vec<Payload>,
    /// Attributes of the step being dispatched
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,
}

impl WorkflowMessage {
    /// The step the tracker currently points at
    pub fn current_step(&self) -> TrackerResult<&Step> {
        let index = self.workflow.tracker.current_step;
        self.workflow
            .steps
            .get(index)
            .ok_or(TrackerError::StepOutOfRange {
                index,
                len: self.workflow.steps.len(),
            })
    }

    /// The dispatch address of the current step, when the cursor is
    /// still inside the sequence
    pub fn current_address(&self) -> Option<&str> {
        match self.current_step() {
            Ok(step) => Some(step.address.as_str()),
            Err(err) => {
                tracing::error!(
                    steps = self.workflow.steps.len(),
                    error = %err,
                    "Could not resolve current step"
                );
                None
            }
        }
    }

    /// Assemble the process input for the step at the tracker's
    /// position: the most recent payload plus that step's attributes
    pub fn process_input(&self) -> TrackerResult<ProcessInput> {
        let step = self.current_step()?;
        Ok(ProcessInput {
            payloads: self.payloads.last().cloned().into_iter().collect(),
            attributes: step.attributes.clone(),
        })
    }

    /// Fold a step outcome into the message.
    ///
    /// Advances the tracker, then on success appends the output
    /// payload (when present) and merges the outcome's headers,
    /// keeping existing values on key collision. A failure outcome
    /// changes position state only; the error message is logged.
    pub fn append_outcome(&self, outcome: Outcome) -> WorkflowMessage {
        let tracker = waypoint_engine::apply_outcome(&self.workflow.tracker, &outcome);

        let mut next = self.clone();
        next.workflow.tracker = tracker;
        next.updated_at = Utc::now();

        match outcome {
            Outcome::Success { payload, headers } => {
                next.payloads.extend(payload);
                for (key, value) in headers {
                    next.headers.entry(key).or_insert(value);
                }
            }
            Outcome::Failure { error_message } => {
                tracing::error!(
                    message_id = %next.id,
                    error = %error_message,
                    "Step outcome returned with error"
                );
            }
        }

        next
    }

    /// Validate a wire outcome record and fold it into the message.
    ///
    /// Rejects a record carrying neither success nor failure before it
    /// can reach the tracker engine.
    pub fn append_outcome_record(&self, record: OutcomeRecord) -> TrackerResult<WorkflowMessage> {
        Ok(self.append_outcome(record.into_outcome()?))
    }
}
