pub mod components;
pub mod layouts;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::api;
use crate::models::SessionResponse;
use components::{provide_toasts, ToastHost};
use layouts::{DashboardLayout, PublisherLayout, UrduLayout};
use pages::*;

/// Session state shared by every layout and page. The resource settles once
/// per load; login refetches it.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: Resource<Option<SessionResponse>>,
}

/// HTML shell for SSR - provides the full document structure
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ar" dir="rtl">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_toasts();

    let session = Resource::new(
        || (),
        |_| async { api::current_session().await.ok().flatten() },
    );
    provide_context(AuthContext { session });

    view! {
        <Stylesheet id="leptos" href="/pkg/sabq.css"/>
        <Title text="سبق - صحيفة إلكترونية"/>
        <Meta name="description" content="منصة نشر إخبارية متعددة اللغات"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    // Reader site, one branch per locale prefix.
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/en") view=HomePage/>
                    <Route path=path!("/ur") view=HomePage/>
                    <Route path=path!("/article/:slug") view=ArticlePage/>
                    <Route path=path!("/en/article/:slug") view=ArticlePage/>
                    <Route path=path!("/ur/article/:slug") view=ArticlePage/>
                    <Route path=path!("/category/:slug") view=CategoryPage/>
                    <Route path=path!("/en/category/:slug") view=CategoryPage/>
                    <Route path=path!("/ur/category/:slug") view=CategoryPage/>
                    <Route path=path!("/login") view=LoginPage/>

                    // Main editorial dashboard.
                    <ParentRoute path=path!("/dashboard") view=DashboardLayout>
                        <Route path=path!("") view=OverviewPage/>
                        <Route path=path!("articles") view=ArticlesPage/>
                        <Route path=path!("articles/new") view=ArticleEditorPage/>
                        <Route path=path!("articles/edit/:id") view=ArticleEditorPage/>
                        <Route path=path!("articles/review") view=ReviewQueuePage/>
                        <Route path=path!("categories") view=CategoriesPage/>
                        <Route path=path!("comments") view=CommentsPage/>
                        <Route path=path!("ai") view=AiToolsPage/>
                        <Route path=path!("analytics") view=AnalyticsPage/>
                        <Route path=path!("ads") view=CampaignsPage/>
                        <Route path=path!("ads/campaigns") view=CampaignsPage/>
                        <Route path=path!("ads/placements") view=PlacementsPage/>
                        <Route path=path!("whatsapp") view=IngestPage/>
                        <Route path=path!("notifications") view=NotificationsPage/>
                        <Route path=path!("settings") view=SettingsPage/>
                    </ParentRoute>

                    // Urdu dashboard variant.
                    <ParentRoute path=path!("/ur/dashboard") view=UrduLayout>
                        <Route path=path!("") view=OverviewPage/>
                        <Route path=path!("articles") view=ArticlesPage/>
                        <Route path=path!("articles/new") view=ArticleEditorPage/>
                        <Route path=path!("categories") view=CategoriesPage/>
                        <Route path=path!("notifications") view=NotificationsPage/>
                        <Route path=path!("settings") view=SettingsPage/>
                    </ParentRoute>

                    // Advertiser portal.
                    <ParentRoute path=path!("/publisher") view=PublisherLayout>
                        <Route path=path!("") view=CampaignsPage/>
                        <Route path=path!("campaigns") view=CampaignsPage/>
                        <Route path=path!("campaigns/new") view=CampaignNewPage/>
                        <Route path=path!("creatives") view=CreativesPage/>
                        <Route path=path!("reports") view=ReportsPage/>
                    </ParentRoute>
                </Routes>
            </main>
        </Router>
        <ToastHost/>
    }
}
