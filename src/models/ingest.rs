use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token authorizing a WhatsApp number to push content into the newsroom
/// inbox. Revocation is soft; revoked tokens stay listed for audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestToken {
    pub id: Uuid,
    pub label: String,
    /// Shown once on creation, masked afterwards.
    pub token: Option<String>,
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl IngestToken {
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestOutcome {
    Accepted,
    Rejected,
    DraftCreated,
}

/// One processed inbound WhatsApp message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestLogEntry {
    pub id: Uuid,
    pub token_label: String,
    pub sender: String,
    pub outcome: IngestOutcome,
    pub summary: Option<String>,
    pub article_id: Option<Uuid>,
    pub received_at: DateTime<Utc>,
}
