use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Notification types with dedicated client handling. Everything else rides
/// through `Other` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotificationKind {
    ArticlePublished,
    BreakingNews,
    Other(String),
}

impl From<String> for NotificationKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "article_published" => NotificationKind::ArticlePublished,
            "BreakingNews" => NotificationKind::BreakingNews,
            _ => NotificationKind::Other(raw),
        }
    }
}

impl From<NotificationKind> for String {
    fn from(kind: NotificationKind) -> String {
        match kind {
            NotificationKind::ArticlePublished => "article_published".to_string(),
            NotificationKind::BreakingNews => "BreakingNews".to_string(),
            NotificationKind::Other(raw) => raw,
        }
    }
}

/// Payload of `/api/notifications/stream` events and of the notification
/// center listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub deeplink: Option<String>,
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub read: bool,
    pub created_at: Option<DateTime<Utc>>,
}
