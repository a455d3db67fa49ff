//! The in-flight workflow message record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use waypoint_types::{Payload, Step, Tracker};

// ── Message Identifier ───────────────────────────────────────────────

/// Unique identifier for a workflow message
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

impl MessageId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn short(&self) -> &str {
        &self.0[..8.min(self.0.len())]
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Workflow Log ─────────────────────────────────────────────────────

/// The workflow portion of a message: the decorated flat step sequence
/// plus the tracker positioned inside it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkflowLog {
    /// The flattened, marker-decorated step sequence
    pub steps: Vec<Step>,
    /// Position record advanced once per step outcome
    pub tracker: Tracker,
}

impl WorkflowLog {
    pub fn new(steps: Vec<Step>, tracker: Tracker) -> Self {
        Self { steps, tracker }
    }
}

// ── Workflow Message ─────────────────────────────────────────────────

/// An in-flight workflow message
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowMessage {
    /// Unique message identifier
    pub id: MessageId,
    /// Payload history; the last entry is the most recent artifact
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payloads: Vec<Payload>,
    /// Headers accumulated across steps
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
    /// The workflow log
    pub workflow: WorkflowLog,
    /// When the message entered the pipeline
    pub created_at: DateTime<Utc>,
    /// When the message last changed
    pub updated_at: DateTime<Utc>,
}

impl WorkflowMessage {
    pub fn new(workflow: WorkflowLog) -> Self {
        let now = Utc::now();
        Self {
            id: MessageId::generate(),
            payloads: Vec::new(),
            headers: HashMap::new(),
            workflow,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payloads.push(payload);
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use waypoint_types::{Block, BlockRange};

    fn log() -> WorkflowLog {
        let ranges: BTreeMap<Block, BlockRange> =
            [(Block::Main, BlockRange::new(Block::Main, 0, 0))]
                .into_iter()
                .collect();
        WorkflowLog::new(vec![Step::new("only")], Tracker::new(ranges, 1))
    }

    #[test]
    fn test_builder() {
        let message = WorkflowMessage::new(log())
            .with_payload(Payload::text("input"))
            .with_header("trace-id", "abc123");

        assert_eq!(message.payloads.len(), 1);
        assert_eq!(
            message.headers.get("trace-id").map(String::as_str),
            Some("abc123")
        );
    }

    #[test]
    fn test_message_ids_are_unique() {
        assert_ne!(MessageId::generate(), MessageId::generate());
    }

    #[test]
    fn test_short_id() {
        let id = MessageId::new("abcdef0123456789");
        assert_eq!(id.short(), "abcdef01");
    }

    #[test]
    fn test_serde_roundtrip() {
        let message = WorkflowMessage::new(log()).with_payload(Payload::text("input"));
        let json = serde_json::to_string(&message).unwrap();
        let back: WorkflowMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, message.id);
        assert_eq!(back.payloads, message.payloads);
        assert_eq!(back.workflow, message.workflow);
    }
}
