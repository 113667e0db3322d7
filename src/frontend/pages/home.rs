//! Reader-facing pages, shared by the three locale prefixes.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_params_map};

use crate::api;
use crate::models::{ArticleStatus, Locale};

/// Localized home page: category rail plus the latest published articles of
/// the active locale.
#[component]
pub fn HomePage() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;
    let locale = Memo::new(move |_| Locale::from_path(&pathname.get()));

    let categories = Resource::new(
        || (),
        |_| async { api::categories_list().await.unwrap_or_default() },
    );
    let articles = Resource::new(
        move || locale.get(),
        |locale| async move {
            api::articles_list(Some(locale), Some(ArticleStatus::Published), None)
                .await
                .unwrap_or_default()
        },
    );

    view! {
        <div class="reader-page" dir=move || locale.get().dir()>
            <header class="reader-header">
                <a href=move || locale.get().home_path() class="reader-brand">"سبق"</a>
                <nav class="locale-switch">
                    <a href="/">"العربية"</a>
                    <a href="/en">"English"</a>
                    <a href="/ur">"اردو"</a>
                </nav>
            </header>
            <Suspense fallback=move || view! { <p class="loading">"…"</p> }>
                <nav class="category-rail">
                    <For
                        each=move || categories.get().unwrap_or_default()
                        key=|category| category.id
                        let:category
                    >
                        <a
                            href=locale.get_untracked().category_path(&category.slug)
                            class="category-chip"
                        >
                            {
                                let category = category.clone();
                                move || category.name_for(locale.get()).to_string()
                            }
                        </a>
                    </For>
                </nav>
                <section class="article-feed">
                    <For
                        each=move || articles.get().unwrap_or_default()
                        key=|article| article.id
                        let:article
                    >
                        <article class="article-card">
                            {article.image_url.clone().map(|url| {
                                view! { <img src=url alt="" class="article-card-image"/> }
                            })}
                            <h2>
                                <a href=locale.get_untracked().article_path(&article.slug)>
                                    {article.title.clone()}
                                </a>
                            </h2>
                            {article.excerpt.clone().map(|excerpt| view! { <p>{excerpt}</p> })}
                        </article>
                    </For>
                </section>
            </Suspense>
        </div>
    }
}

/// Published articles of one category, under the active locale prefix.
#[component]
pub fn CategoryPage() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;
    let locale = Memo::new(move |_| Locale::from_path(&pathname.get()));
    let params = use_params_map();
    let slug = Memo::new(move |_| params.with(|p| p.get("slug").unwrap_or_default()));

    let categories = Resource::new(
        || (),
        |_| async { api::categories_list().await.unwrap_or_default() },
    );
    let articles = Resource::new(
        move || (locale.get(), slug.get()),
        |(locale, slug)| async move {
            api::articles_list(Some(locale), Some(ArticleStatus::Published), Some(slug))
                .await
                .unwrap_or_default()
        },
    );

    let heading = move || {
        categories
            .get()
            .unwrap_or_default()
            .iter()
            .find(|category| category.slug == slug.get())
            .map(|category| category.name_for(locale.get()).to_string())
            .unwrap_or_else(|| slug.get())
    };

    view! {
        <div class="reader-page" dir=move || locale.get().dir()>
            <header class="reader-header">
                <a href=move || locale.get().home_path() class="reader-brand">"سبق"</a>
            </header>
            <Suspense fallback=move || view! { <p class="loading">"…"</p> }>
                <h1 class="category-title">{heading}</h1>
                <section class="article-feed">
                    <For
                        each=move || articles.get().unwrap_or_default()
                        key=|article| article.id
                        let:article
                    >
                        <article class="article-card">
                            <h2>
                                <a href=locale.get_untracked().article_path(&article.slug)>
                                    {article.title.clone()}
                                </a>
                            </h2>
                            {article.excerpt.clone().map(|excerpt| view! { <p>{excerpt}</p> })}
                        </article>
                    </For>
                    <Show when=move || {
                        articles.get().map(|list| list.is_empty()).unwrap_or(false)
                    }>
                        <p class="empty-state">
                            {move || match locale.get() {
                                Locale::Ar => "لا توجد أخبار في هذا التصنيف",
                                Locale::En => "No articles in this category yet",
                                Locale::Ur => "اس زمرے میں کوئی خبر نہیں",
                            }}
                        </p>
                    </Show>
                </section>
            </Suspense>
        </div>
    }
}

/// Single-article reader page, looked up by locale prefix and slug.
#[component]
pub fn ArticlePage() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;
    let locale = Memo::new(move |_| Locale::from_path(&pathname.get()));
    let params = use_params_map();

    let article = Resource::new(
        move || (locale.get(), params.with(|p| p.get("slug").unwrap_or_default())),
        |(locale, slug)| async move { api::article_by_slug(locale, slug).await.ok() },
    );

    view! {
        <div class="reader-page" dir=move || locale.get().dir()>
            <header class="reader-header">
                <a href=move || locale.get().home_path() class="reader-brand">"سبق"</a>
            </header>
            <Suspense fallback=move || view! { <p class="loading">"…"</p> }>
                {move || {
                    article.get().map(|article| match article {
                        Some(article) => {
                            view! {
                                <article class="article-full">
                                    <h1>{article.title.clone()}</h1>
                                    {article.author_name.clone().map(|name| {
                                        view! { <p class="article-byline">{name}</p> }
                                    })}
                                    {article.image_url.clone().map(|url| {
                                        view! { <img src=url alt="" class="article-hero"/> }
                                    })}
                                    <div class="article-body">{article.body.clone()}</div>
                                </article>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <p class="empty-state">
                                    {move || match locale.get() {
                                        Locale::Ar => "تعذر تحميل الخبر",
                                        Locale::En => "Article could not be loaded",
                                        Locale::Ur => "خبر لوڈ نہیں ہو سکی",
                                    }}
                                </p>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
