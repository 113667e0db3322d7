//! Dashboard article management: listing, review queue and the editor.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use uuid::Uuid;

use crate::api;
use crate::frontend::components::Toasts;
use crate::models::{AiTextRequest, ArticleDraft, ArticleStatus, ArticleUpdate, Locale};

#[component]
pub fn ArticlesPage() -> impl IntoView {
    view! { <ArticleTable title="الأخبار" status=None/> }
}

#[component]
pub fn ReviewQueuePage() -> impl IntoView {
    view! { <ArticleTable title="قائمة المراجعة" status=Some(ArticleStatus::InReview)/> }
}

#[component]
fn ArticleTable(title: &'static str, status: Option<ArticleStatus>) -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let articles = Resource::new(
        move || status,
        |status| async move {
            api::articles_list(None, status, None)
                .await
                .unwrap_or_default()
        },
    );

    let delete = move |id: Uuid| {
        leptos::task::spawn_local(async move {
            match api::article_delete(id).await {
                Ok(()) => {
                    toasts.success("تم حذف الخبر");
                    articles.refetch();
                }
                Err(_) => toasts.error("تعذر حذف الخبر"),
            }
        });
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>{title}</h1>
                <a href="/dashboard/articles/new" class="btn-primary">"خبر جديد"</a>
            </div>
            <Suspense fallback=move || view! { <p class="loading">"…"</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"العنوان"</th>
                            <th>"الحالة"</th>
                            <th>"اللغة"</th>
                            <th>"الكاتب"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || articles.get().unwrap_or_default()
                            key=|article| article.id
                            let:article
                        >
                            {
                                let id = article.id;
                                view! {
                                    <tr>
                                        <td>{article.title.clone()}</td>
                                        <td>{article.status.label(Locale::Ar)}</td>
                                        <td>{article.locale.code()}</td>
                                        <td>{article.author_name.clone().unwrap_or_default()}</td>
                                        <td class="row-actions">
                                            <a href=format!("/dashboard/articles/edit/{id}")>"تحرير"</a>
                                            <button class="btn-danger" on:click=move |_| delete(id)>
                                                "حذف"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        </For>
                    </tbody>
                </table>
            </Suspense>
        </div>
    }
}

/// Create/edit form. On failure the form state stays put for resubmission;
/// the error only surfaces as a toast.
#[component]
pub fn ArticleEditorPage() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let navigate = use_navigate();
    let params = use_params_map();
    let editing_id = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|raw| Uuid::parse_str(&raw).ok()))
    });

    let title = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let excerpt = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    // Prefill when editing an existing article.
    let existing = Resource::new(
        move || editing_id.get(),
        |id| async move {
            match id {
                Some(id) => api::article_get(id).await.ok(),
                None => None,
            }
        },
    );
    Effect::new(move |_| {
        if let Some(Some(article)) = existing.get() {
            title.set(article.title);
            body.set(article.body);
            excerpt.set(article.excerpt.unwrap_or_default());
            category.set(article.category_slug.unwrap_or_default());
        }
    });

    let save = {
        let navigate = navigate.clone();
        move |_| {
            if saving.get_untracked() {
                return;
            }
            saving.set(true);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = match editing_id.get_untracked() {
                    Some(id) => {
                        let update = ArticleUpdate {
                            title: Some(title.get_untracked()),
                            body: Some(body.get_untracked()),
                            excerpt: Some(excerpt.get_untracked()),
                            category_slug: Some(category.get_untracked()),
                            ..Default::default()
                        };
                        api::article_update(id, update).await.map(|_| ())
                    }
                    None => {
                        let draft = ArticleDraft {
                            title: title.get_untracked(),
                            body: body.get_untracked(),
                            excerpt: Some(excerpt.get_untracked()),
                            category_slug: Some(category.get_untracked()),
                            ..Default::default()
                        };
                        api::article_create(draft).await.map(|_| ())
                    }
                };
                saving.set(false);
                match result {
                    Ok(()) => {
                        toasts.success("تم حفظ الخبر");
                        navigate("/dashboard/articles", Default::default());
                    }
                    Err(_) => toasts.error("تعذر حفظ الخبر، حاول مرة أخرى"),
                }
            });
        }
    };

    // AI assist: summarize the body into the excerpt field.
    let summarizing = RwSignal::new(false);
    let summarize = move |_| {
        if summarizing.get_untracked() || body.get_untracked().is_empty() {
            return;
        }
        summarizing.set(true);
        leptos::task::spawn_local(async move {
            let request = AiTextRequest {
                text: body.get_untracked(),
                locale: Some(Locale::Ar),
            };
            match api::ai_summarize(request).await {
                Ok(response) => excerpt.set(response.output),
                Err(_) => toasts.error("تعذر توليد الموجز"),
            }
            summarizing.set(false);
        });
    };

    view! {
        <div class="page">
            <h1>
                {move || if editing_id.get().is_some() { "تحرير الخبر" } else { "خبر جديد" }}
            </h1>
            <div class="editor-form">
                <div class="form-group">
                    <label for="title">"العنوان"</label>
                    <input
                        type="text"
                        id="title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="body">"النص"</label>
                    <textarea
                        id="body"
                        rows="14"
                        prop:value=move || body.get()
                        on:input=move |ev| body.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-group">
                    <label for="excerpt">"الموجز"</label>
                    <textarea
                        id="excerpt"
                        rows="3"
                        prop:value=move || excerpt.get()
                        on:input=move |ev| excerpt.set(event_target_value(&ev))
                    ></textarea>
                    <button
                        class="btn-ghost"
                        on:click=summarize
                        disabled=move || summarizing.get()
                    >
                        {move || if summarizing.get() { "جارٍ التلخيص…" } else { "تلخيص آلي" }}
                    </button>
                </div>
                <div class="form-group">
                    <label for="category">"التصنيف"</label>
                    <input
                        type="text"
                        id="category"
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
                </div>
                <button class="btn-primary" on:click=save disabled=move || saving.get()>
                    {move || if saving.get() { "جارٍ الحفظ…" } else { "حفظ" }}
                </button>
            </div>
        </div>
    }
}
