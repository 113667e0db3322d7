use leptos::prelude::*;
use uuid::Uuid;

use crate::models::{IngestLogEntry, IngestToken};

#[server(IngestTokensList, "/api")]
pub async fn ingest_tokens_list() -> Result<Vec<IngestToken>, ServerFnError> {
    use super::upstream;

    upstream::get_json("/api/whatsapp/tokens")
        .await
        .map_err(upstream::to_server_error)
}

#[server(IngestTokenCreate, "/api")]
pub async fn ingest_token_create(
    label: String,
    phone_number: Option<String>,
) -> Result<IngestToken, ServerFnError> {
    use super::upstream;

    if label.trim().is_empty() {
        return Err(ServerFnError::new("Token label is required"));
    }
    let payload = serde_json::json!({ "label": label.trim(), "phone_number": phone_number });
    upstream::post_json("/api/whatsapp/tokens", &payload)
        .await
        .map_err(upstream::to_server_error)
}

#[server(IngestTokenRevoke, "/api")]
pub async fn ingest_token_revoke(id: Uuid) -> Result<(), ServerFnError> {
    use super::upstream;

    upstream::delete(&format!("/api/whatsapp/tokens/{id}"))
        .await
        .map_err(upstream::to_server_error)
}

#[server(IngestLogsList, "/api")]
pub async fn ingest_logs_list() -> Result<Vec<IngestLogEntry>, ServerFnError> {
    use super::upstream;

    upstream::get_json("/api/whatsapp/logs")
        .await
        .map_err(upstream::to_server_error)
}
