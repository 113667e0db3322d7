use leptos::prelude::*;

use crate::models::SessionResponse;

/// Authenticates against the upstream session endpoint. The upstream session
/// cookie is forwarded to the browser.
#[server(Login, "/api")]
pub async fn login(email: String, password: String) -> Result<SessionResponse, ServerFnError> {
    use super::upstream;
    use crate::models::LoginRequest;

    let payload = LoginRequest { email, password };
    upstream::post_json_session("/api/auth/login", &payload)
        .await
        .map_err(upstream::to_server_error)
}

/// Terminates the upstream session. Always succeeds from the caller's point
/// of view once the upstream acknowledged.
#[server(Logout, "/api")]
pub async fn logout() -> Result<(), ServerFnError> {
    use super::upstream;

    upstream::post_empty("/api/auth/logout")
        .await
        .map_err(upstream::to_server_error)
}

/// Current session, or `None` when unauthenticated. A 401 is a normal
/// answer here, not an error.
#[server(CurrentSession, "/api")]
pub async fn current_session() -> Result<Option<SessionResponse>, ServerFnError> {
    use super::upstream;
    use crate::common::UpstreamError;

    match upstream::get_json::<SessionResponse>("/api/auth/session").await {
        Ok(session) => Ok(Some(session)),
        Err(UpstreamError::Unauthenticated) => Ok(None),
        Err(err) => Err(upstream::to_server_error(err)),
    }
}
