use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};
use leptos_router::hooks::{use_location, use_navigate};

use crate::api;
use crate::frontend::components::{AnnouncementBanner, Breadcrumbs, NotificationsBridge, Sidebar};
use crate::frontend::AuthContext;
use crate::models::{Locale, NavItem, ResolveInput, ResolvedNavState};
use crate::nav::resolve;

/// Common chassis of the three dashboard shells. Rendering is gated until
/// the session resource settles; an unauthenticated session redirects to the
/// login route. Everything below the gate derives from one nav resolution
/// per render: sidebar, active highlight and breadcrumb trail.
#[component]
pub fn LayoutShell(
    tree: &'static [NavItem],
    storage_key: &'static str,
    #[prop(into)] brand: String,
    login_path: &'static str,
    logout_label: &'static str,
) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let location = use_location();
    let pathname = location.pathname;

    let locale = Memo::new(move |_| Locale::from_path(&pathname.get()));
    let resolved = Memo::new(move |_| {
        let path = pathname.get();
        match auth.session.get().flatten() {
            Some(session) => {
                let input = ResolveInput {
                    role: session.user.canonical_role(),
                    flags: &session.flags,
                    pathname: &path,
                    permissions: Some(&session.user.permissions),
                };
                resolve(tree, &input)
            }
            // Session still loading or absent: guest-level visibility.
            None => ResolvedNavState::default(),
        }
    });

    let navigate = use_navigate();
    let logout = move |_| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if let Err(err) = api::logout().await {
                tracing::warn!(%err, "logout call failed, redirecting anyway");
            }
            navigate(login_path, Default::default());
        });
    };

    view! {
        <Suspense fallback=move || {
            view! { <div class="auth-gate">"جارٍ التحميل…"</div> }
        }>
            {move || {
                auth.session.get().map(|session| match session {
                    None => view! { <Redirect path=login_path/> }.into_any(),
                    Some(_) => {
                        view! {
                            <div class="layout" dir=move || locale.get().dir()>
                                <Sidebar
                                    resolved=resolved
                                    locale=locale
                                    storage_key=storage_key
                                    brand=brand.clone()
                                />
                                <div class="layout-main">
                                    <header class="layout-header">
                                        <Breadcrumbs resolved=resolved locale=locale/>
                                        <button class="logout-btn" on:click=logout.clone()>
                                            {logout_label}
                                        </button>
                                    </header>
                                    <AnnouncementBanner/>
                                    <NotificationsBridge/>
                                    <main class="layout-content">
                                        <Outlet/>
                                    </main>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                })
            }}
        </Suspense>
    }
}
