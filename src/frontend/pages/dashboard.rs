//! General dashboard pages: overview, categories, notifications, analytics,
//! comments and settings.

use leptos::prelude::*;

use crate::api;
use crate::frontend::components::Toasts;
use crate::frontend::AuthContext;
use crate::models::ArticleStatus;

#[component]
pub fn OverviewPage() -> impl IntoView {
    let articles = Resource::new(
        || (),
        |_| async { api::articles_list(None, None, None).await.unwrap_or_default() },
    );
    let notifications = Resource::new(
        || (),
        |_| async { api::notifications_list().await.unwrap_or_default() },
    );

    let count_by = move |status: ArticleStatus| {
        articles
            .get()
            .unwrap_or_default()
            .iter()
            .filter(|a| a.status == status)
            .count()
    };

    view! {
        <div class="page">
            <h1>"نظرة عامة"</h1>
            <Suspense fallback=move || view! { <p class="loading">"…"</p> }>
                <div class="stat-grid">
                    <div class="stat-card">
                        <span class="stat-value">{move || count_by(ArticleStatus::Published)}</span>
                        <span class="stat-label">"أخبار منشورة"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{move || count_by(ArticleStatus::InReview)}</span>
                        <span class="stat-label">"قيد المراجعة"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{move || count_by(ArticleStatus::Draft)}</span>
                        <span class="stat-label">"مسودات"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">
                            {move || {
                                notifications
                                    .get()
                                    .unwrap_or_default()
                                    .iter()
                                    .filter(|n| !n.read)
                                    .count()
                            }}
                        </span>
                        <span class="stat-label">"إشعارات غير مقروءة"</span>
                    </div>
                </div>
            </Suspense>
        </div>
    }
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let categories = Resource::new(
        || (),
        |_| async { api::categories_list().await.unwrap_or_default() },
    );

    view! {
        <div class="page">
            <h1>"التصنيفات"</h1>
            <Suspense fallback=move || view! { <p class="loading">"…"</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"الاسم"</th>
                            <th>"المعرّف"</th>
                            <th>"عدد الأخبار"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || categories.get().unwrap_or_default()
                            key=|category| category.id
                            let:category
                        >
                            <tr>
                                <td>{category.name_ar.clone()}</td>
                                <td>{category.slug.clone()}</td>
                                <td>{category.article_count}</td>
                            </tr>
                        </For>
                    </tbody>
                </table>
            </Suspense>
        </div>
    }
}

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let notifications = Resource::new(
        || (),
        |_| async { api::notifications_list().await.unwrap_or_default() },
    );

    let mark_read = move |id: uuid::Uuid| {
        leptos::task::spawn_local(async move {
            match api::notification_mark_read(id).await {
                Ok(()) => notifications.refetch(),
                Err(_) => toasts.error("تعذر تحديث الإشعار"),
            }
        });
    };

    view! {
        <div class="page">
            <h1>"الإشعارات"</h1>
            <Suspense fallback=move || view! { <p class="loading">"…"</p> }>
                <ul class="notification-list">
                    <For
                        each=move || notifications.get().unwrap_or_default()
                        key=|notification| notification.id
                        let:notification
                    >
                        {
                            let id = notification.id;
                            view! {
                                <li class="notification-row" class:unread=!notification.read>
                                    <div>
                                        <strong>{notification.title.clone()}</strong>
                                        <p>{notification.body.clone()}</p>
                                        {notification.deeplink.clone().map(|link| {
                                            view! { <a href=link>"فتح"</a> }
                                        })}
                                    </div>
                                    {(!notification.read).then(|| {
                                        view! {
                                            <button on:click=move |_| mark_read(id)>
                                                "تحديد كمقروء"
                                            </button>
                                        }
                                    })}
                                </li>
                            }
                        }
                    </For>
                </ul>
            </Suspense>
        </div>
    }
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let trends = Resource::new(
        || (),
        |_| async { api::ai_trend_analysis(None).await.unwrap_or_default() },
    );

    view! {
        <div class="page">
            <h1>"التحليلات"</h1>
            <h2>"المواضيع الرائجة"</h2>
            <Suspense fallback=move || view! { <p class="loading">"…"</p> }>
                <ul class="trend-list">
                    <For
                        each=move || trends.get().unwrap_or_default()
                        key=|trend| trend.topic.clone()
                        let:trend
                    >
                        <li>
                            <span class="trend-topic">{trend.topic.clone()}</span>
                            <span class="trend-score">{format!("{:.1}", trend.score)}</span>
                        </li>
                    </For>
                </ul>
            </Suspense>
        </div>
    }
}

#[component]
pub fn CommentsPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"التعليقات"</h1>
            <p>"إدارة التعليقات قادمة قريباً."</p>
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let flags = move || {
        auth.session
            .get()
            .flatten()
            .map(|session| {
                let mut flags: Vec<_> = session.flags.into_iter().collect();
                flags.sort();
                flags
            })
            .unwrap_or_default()
    };

    view! {
        <div class="page">
            <h1>"الإعدادات"</h1>
            <h2>"خصائص مفعّلة"</h2>
            <ul class="flag-list">
                <For each=flags key=|(name, _)| name.clone() let:flag>
                    <li>
                        <code>{flag.0.clone()}</code>
                        <span>{if flag.1 { "مفعّل" } else { "معطّل" }}</span>
                    </li>
                </For>
            </ul>
        </div>
    }
}
