//! Step outcomes and their wire boundary
//!
//! The tracker engine only ever sees a well-formed [`Outcome`]: the
//! wire shape ([`OutcomeRecord`]) with its two independent optional
//! slots is validated at the boundary, where a record carrying neither
//! slot is rejected as a caller contract violation.

use crate::{TrackerError, TrackerResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An opaque artifact produced or consumed by a step
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payload {
    /// UTF-8 text body
    Text(String),
    /// Raw bytes body
    Binary(Vec<u8>),
}

impl Payload {
    pub fn text(body: impl Into<String>) -> Self {
        Payload::Text(body.into())
    }

    pub fn binary(body: impl Into<Vec<u8>>) -> Self {
        Payload::Binary(body.into())
    }
}

/// The result of executing one step
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// The step completed, optionally carrying an output artifact and
    /// header key/value pairs
    Success {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<Payload>,
        #[serde(default, skip_serializing_if = "HashMap::is_empty")]
        headers: HashMap<String, String>,
    },
    /// The step failed
    Failure { error_message: String },
}

impl Outcome {
    /// A bare success with no output artifact or headers
    pub fn success() -> Self {
        Outcome::Success {
            payload: None,
            headers: HashMap::new(),
        }
    }

    pub fn success_with(payload: Option<Payload>, headers: HashMap<String, String>) -> Self {
        Outcome::Success { payload, headers }
    }

    pub fn failure(error_message: impl Into<String>) -> Self {
        Outcome::Failure {
            error_message: error_message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }
}

// ── Wire Boundary ────────────────────────────────────────────────────

/// Wire shape of an outcome as received from the dispatch collaborator.
///
/// Success and failure arrive as independent optional slots; exactly
/// one must be present. Converting into [`Outcome`] enforces that
/// contract before the record can reach the tracker engine. When both
/// slots are present the success slot wins, matching the decode order
/// of the surrounding message format.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<SuccessRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureRecord>,
}

impl OutcomeRecord {
    /// Validate the record into an [`Outcome`]
    pub fn into_outcome(self) -> TrackerResult<Outcome> {
        Outcome::try_from(self)
    }
}

/// Success slot of an [`OutcomeRecord`]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SuccessRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_payload: Option<Payload>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
}

/// Failure slot of an [`OutcomeRecord`]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FailureRecord {
    pub error_message: String,
}

impl TryFrom<OutcomeRecord> for Outcome {
    type Error = TrackerError;

    fn try_from(record: OutcomeRecord) -> Result<Self, Self::Error> {
        if let Some(success) = record.success {
            Ok(Outcome::Success {
                payload: success.output_payload,
                headers: success.headers,
            })
        } else if let Some(failure) = record.failure {
            Ok(Outcome::Failure {
                error_message: failure.error_message,
            })
        } else {
            Err(TrackerError::MissingOutcomeTag)
        }
    }
}
