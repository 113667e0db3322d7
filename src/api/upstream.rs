//! Shared reqwest plumbing for the upstream REST API.

use leptos::prelude::ServerFnError;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use std::sync::OnceLock;

use crate::common::UpstreamError;

static CLIENT: OnceLock<Client> = OnceLock::new();

fn client() -> &'static Client {
    CLIENT.get_or_init(Client::new)
}

pub fn base_url() -> String {
    std::env::var("SABQ_API_BASE").unwrap_or_else(|_| "http://127.0.0.1:4000".to_string())
}

pub fn to_server_error(err: UpstreamError) -> ServerFnError {
    ServerFnError::new(err.to_string())
}

/// Cookie header of the request currently being served, if any.
async fn session_cookie() -> Option<String> {
    let req = leptos_actix::extract::<actix_web::HttpRequest>().await.ok()?;
    req.headers()
        .get(actix_web::http::header::COOKIE)?
        .to_str()
        .ok()
        .map(str::to_string)
}

async fn dispatch(builder: RequestBuilder) -> Result<Response, UpstreamError> {
    let builder = match session_cookie().await {
        Some(cookie) => builder.header("Cookie", cookie),
        None => builder,
    };
    let response = builder.send().await?;
    let status = response.status();
    if status.as_u16() == 401 {
        return Err(UpstreamError::Unauthenticated);
    }
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "upstream request failed");
        return Err(UpstreamError::Status(status.as_u16()));
    }
    Ok(response)
}

/// Copies upstream `Set-Cookie` headers onto the response going back to the
/// browser. Used by the session endpoints.
fn forward_cookies(response: &Response) {
    let Some(options) = leptos::context::use_context::<leptos_actix::ResponseOptions>() else {
        return;
    };
    for value in response.headers().get_all(reqwest::header::SET_COOKIE) {
        if let Ok(value) = actix_web::http::header::HeaderValue::from_bytes(value.as_bytes()) {
            options.append_header(actix_web::http::header::SET_COOKIE, value);
        }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, UpstreamError> {
    response
        .json::<T>()
        .await
        .map_err(|err| UpstreamError::Decode(err.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, UpstreamError> {
    let response = dispatch(client().get(format!("{}{path}", base_url()))).await?;
    decode(response).await
}

pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, UpstreamError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let response = dispatch(client().post(format!("{}{path}", base_url())).json(body)).await?;
    decode(response).await
}

/// POST whose interesting output is the session cookie, not the body.
pub async fn post_json_session<B, T>(path: &str, body: &B) -> Result<T, UpstreamError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let response = dispatch(client().post(format!("{}{path}", base_url())).json(body)).await?;
    forward_cookies(&response);
    decode(response).await
}

pub async fn post_empty(path: &str) -> Result<(), UpstreamError> {
    let response = dispatch(client().post(format!("{}{path}", base_url()))).await?;
    forward_cookies(&response);
    Ok(())
}

pub async fn put_json<B, T>(path: &str, body: &B) -> Result<T, UpstreamError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let response = dispatch(client().put(format!("{}{path}", base_url())).json(body)).await?;
    decode(response).await
}

pub async fn delete(path: &str) -> Result<(), UpstreamError> {
    dispatch(client().delete(format!("{}{path}", base_url()))).await?;
    Ok(())
}
