use leptos::prelude::*;
use uuid::Uuid;

use crate::models::{Announcement, Notification};

/// Endpoint the browser subscribes to directly with `EventSource`; the
/// notification stream never goes through a server function.
pub const NOTIFICATIONS_STREAM_PATH: &str = "/api/notifications/stream";

#[server(NotificationsList, "/api")]
pub async fn notifications_list() -> Result<Vec<Notification>, ServerFnError> {
    use super::upstream;

    upstream::get_json("/api/notifications")
        .await
        .map_err(upstream::to_server_error)
}

#[server(NotificationMarkRead, "/api")]
pub async fn notification_mark_read(id: Uuid) -> Result<(), ServerFnError> {
    use super::upstream;

    upstream::post_empty(&format!("/api/notifications/{id}/read"))
        .await
        .map_err(upstream::to_server_error)
}

/// Currently running announcement, if any. Dismissal is purely client-side
/// (per-announcement storage keys), so there is no write counterpart.
#[server(AnnouncementActive, "/api")]
pub async fn announcement_active() -> Result<Option<Announcement>, ServerFnError> {
    use super::upstream;

    upstream::get_json("/api/announcements/active")
        .await
        .map_err(upstream::to_server_error)
}
