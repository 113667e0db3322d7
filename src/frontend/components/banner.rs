use leptos::prelude::*;

use crate::api;
use crate::models::{Announcement, Notification};
use crate::services::{announcement_dismissed, default_store, mark_announcement};

/// Subscribes to the notification stream and surfaces the two specially
/// handled event types: `article_published` drives the auto-publish banner,
/// `BreakingNews` becomes a toast. The subscription opens on mount, closes on
/// unmount, and reconnects on its own; a failing stream never surfaces as an
/// error to the user.
#[component]
pub fn NotificationsBridge() -> impl IntoView {
    let banner = RwSignal::new(None::<Notification>);

    #[cfg(feature = "hydrate")]
    {
        use crate::api::NOTIFICATIONS_STREAM_PATH;
        use crate::frontend::components::toast::Toasts;
        use crate::models::NotificationKind;
        use crate::services::sse::browser::NotificationStream;

        let toasts = expect_context::<Toasts>();
        let stream = NotificationStream::connect(NOTIFICATIONS_STREAM_PATH, move |notification| {
            match &notification.kind {
                NotificationKind::ArticlePublished => banner.set(Some(notification)),
                NotificationKind::BreakingNews => {
                    toasts.success(format!("{}: {}", notification.title, notification.body));
                }
                NotificationKind::Other(_) => {}
            }
        });
        on_cleanup(move || stream.close());
    }

    view! {
        <Show when=move || banner.with(|b| b.is_some())>
            <div class="autopublish-banner">
                <span class="autopublish-title">
                    {move || banner.with(|b| b.as_ref().map(|n| n.title.clone()))}
                </span>
                <span>{move || banner.with(|b| b.as_ref().map(|n| n.body.clone()))}</span>
                {move || {
                    banner.with(|b| {
                        b.as_ref().and_then(|n| n.deeplink.clone()).map(|link| {
                            view! { <a href=link class="autopublish-link">"عرض"</a> }
                        })
                    })
                }}
                <button class="banner-dismiss" on:click=move |_| banner.set(None)>
                    "×"
                </button>
            </div>
        </Show>
    }
}

/// Active editorial announcement with per-announcement dismissal tracked in
/// client storage. Fetch or storage failures degrade to "no banner"; this
/// component can never block the page around it.
#[component]
pub fn AnnouncementBanner() -> impl IntoView {
    let announcement = Resource::new(
        || (),
        |_| async { api::announcement_active().await.ok().flatten() },
    );
    let dismissed_now = RwSignal::new(false);

    // Record the view once per announcement, not once per render.
    Effect::new(move |_| {
        if let Some(Some(a)) = announcement.get() {
            mark_announcement(&*default_store(), &a.viewed_key());
        }
    });

    let visible = move |a: &Announcement| {
        !dismissed_now.get() && !announcement_dismissed(&*default_store(), &a.dismissed_key())
    };

    view! {
        <Suspense fallback=|| ()>
            {move || {
                announcement.get().flatten().map(|a| {
                    let title = a.title.clone();
                    let body = a.body.clone();
                    let gate = a.clone();
                    let dismiss = move |_| {
                        mark_announcement(&*default_store(), &a.dismissed_key());
                        dismissed_now.set(true);
                    };
                    view! {
                        <Show when=move || visible(&gate)>
                            <div class="announcement-banner">
                                <strong>{title.clone()}</strong>
                                <span>{body.clone()}</span>
                                <button class="banner-dismiss" on:click=dismiss.clone()>"×"</button>
                            </div>
                        </Show>
                    }
                })
            }}
        </Suspense>
    }
}
