use leptos::prelude::*;
use uuid::Uuid;

use crate::models::{
    Article, ArticleDraft, ArticleStatus, ArticleSummary, ArticleUpdate, Category, Locale,
};

#[server(CategoriesList, "/api")]
pub async fn categories_list() -> Result<Vec<Category>, ServerFnError> {
    use super::upstream;

    upstream::get_json("/api/categories")
        .await
        .map_err(upstream::to_server_error)
}

#[server(ArticlesList, "/api")]
pub async fn articles_list(
    locale: Option<Locale>,
    status: Option<ArticleStatus>,
    category: Option<String>,
) -> Result<Vec<ArticleSummary>, ServerFnError> {
    use super::upstream;

    let mut query = Vec::new();
    if let Some(locale) = locale {
        query.push(format!("locale={}", locale.code()));
    }
    if let Some(status) = status {
        if let Ok(s) = serde_json::to_value(status) {
            if let Some(s) = s.as_str() {
                query.push(format!("status={s}"));
            }
        }
    }
    if let Some(category) = category {
        query.push(format!("category={category}"));
    }
    let path = if query.is_empty() {
        "/api/articles".to_string()
    } else {
        format!("/api/articles?{}", query.join("&"))
    };

    upstream::get_json(&path)
        .await
        .map_err(upstream::to_server_error)
}

#[server(ArticleGet, "/api")]
pub async fn article_get(id: Uuid) -> Result<Article, ServerFnError> {
    use super::upstream;

    upstream::get_json(&format!("/api/articles/{id}"))
        .await
        .map_err(upstream::to_server_error)
}

/// Reader-facing lookup by locale and slug.
#[server(ArticleBySlug, "/api")]
pub async fn article_by_slug(locale: Locale, slug: String) -> Result<Article, ServerFnError> {
    use super::upstream;

    upstream::get_json(&format!("/api/articles/{}/{slug}", locale.code()))
        .await
        .map_err(upstream::to_server_error)
}

#[server(ArticleCreate, "/api")]
pub async fn article_create(draft: ArticleDraft) -> Result<Article, ServerFnError> {
    use super::upstream;

    upstream::post_json("/api/articles", &draft)
        .await
        .map_err(upstream::to_server_error)
}

#[server(ArticleUpdateFn, "/api")]
pub async fn article_update(id: Uuid, update: ArticleUpdate) -> Result<Article, ServerFnError> {
    use super::upstream;

    if update.is_empty() {
        return Err(ServerFnError::new("Nothing to update"));
    }
    upstream::put_json(&format!("/api/articles/{id}"), &update)
        .await
        .map_err(upstream::to_server_error)
}

#[server(ArticleDelete, "/api")]
pub async fn article_delete(id: Uuid) -> Result<(), ServerFnError> {
    use super::upstream;

    upstream::delete(&format!("/api/articles/{id}"))
        .await
        .map_err(upstream::to_server_error)
}
