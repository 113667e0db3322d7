use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnouncementSeverity {
    Info,
    Warning,
    Critical,
}

/// Editorial announcement shown as a dismissible banner above the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub severity: AnnouncementSeverity,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

impl Announcement {
    /// Storage key recording that the banner was rendered at least once.
    pub fn viewed_key(&self) -> String {
        format!("announcement_viewed_{}", self.id)
    }

    /// Storage key recording an explicit dismissal.
    pub fn dismissed_key(&self) -> String {
        format!("announcement_dismissed_{}", self.id)
    }
}
