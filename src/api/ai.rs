use leptos::prelude::*;

use crate::models::{
    AiTextRequest, AiTextResponse, AiTranslateRequest, FactCheckResponse, ImageResult,
    Locale, SeoSuggestion, TrendTopic,
};

#[server(AiSummarize, "/api")]
pub async fn ai_summarize(request: AiTextRequest) -> Result<AiTextResponse, ServerFnError> {
    use super::upstream;

    upstream::post_json("/api/ai/summarize", &request)
        .await
        .map_err(upstream::to_server_error)
}

#[server(AiTranslate, "/api")]
pub async fn ai_translate(request: AiTranslateRequest) -> Result<AiTextResponse, ServerFnError> {
    use super::upstream;

    if request.source == request.target {
        return Err(ServerFnError::new("Source and target locales are the same"));
    }
    upstream::post_json("/api/ai/translate", &request)
        .await
        .map_err(upstream::to_server_error)
}

#[server(AiSocialPost, "/api")]
pub async fn ai_social_post(request: AiTextRequest) -> Result<AiTextResponse, ServerFnError> {
    use super::upstream;

    upstream::post_json("/api/ai/social-post", &request)
        .await
        .map_err(upstream::to_server_error)
}

#[server(AiImageSearch, "/api")]
pub async fn ai_image_search(query: String) -> Result<Vec<ImageResult>, ServerFnError> {
    use super::upstream;

    let payload = serde_json::json!({ "query": query });
    upstream::post_json("/api/ai/image-search", &payload)
        .await
        .map_err(upstream::to_server_error)
}

#[server(AiFactCheck, "/api")]
pub async fn ai_fact_check(request: AiTextRequest) -> Result<FactCheckResponse, ServerFnError> {
    use super::upstream;

    upstream::post_json("/api/ai/fact-check", &request)
        .await
        .map_err(upstream::to_server_error)
}

#[server(AiTrendAnalysis, "/api")]
pub async fn ai_trend_analysis(locale: Option<Locale>) -> Result<Vec<TrendTopic>, ServerFnError> {
    use super::upstream;

    let path = match locale {
        Some(locale) => format!("/api/ai/trends?locale={}", locale.code()),
        None => "/api/ai/trends".to_string(),
    };
    upstream::get_json(&path)
        .await
        .map_err(upstream::to_server_error)
}

#[server(AiSeoGenerate, "/api")]
pub async fn ai_seo_generate(request: AiTextRequest) -> Result<SeoSuggestion, ServerFnError> {
    use super::upstream;

    upstream::post_json("/api/ai/seo", &request)
        .await
        .map_err(upstream::to_server_error)
}
