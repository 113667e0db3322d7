//! Static navigation trees, one per layout variant.
//!
//! Trees are defined once at first use and never mutated; the resolver clones
//! the surviving subset per render. Item ids are unique across each tree,
//! nested children included.

use std::sync::LazyLock;

use crate::models::{NavItem, Role};

const STAFF: &[Role] = &[
    Role::Author,
    Role::Reporter,
    Role::OpinionAuthor,
    Role::Reviewer,
    Role::CommentsModerator,
    Role::Analyst,
    Role::Editor,
    Role::Admin,
];

const NEWSROOM: &[Role] = &[
    Role::Author,
    Role::Reporter,
    Role::OpinionAuthor,
    Role::Reviewer,
    Role::Editor,
    Role::Admin,
];

const REVIEWERS: &[Role] = &[Role::Reviewer, Role::Editor, Role::Admin];
const EDITORS: &[Role] = &[Role::Editor, Role::Admin];
const MODERATION: &[Role] = &[Role::CommentsModerator, Role::Editor, Role::Admin];
const ANALYTICS: &[Role] = &[Role::Analyst, Role::Editor, Role::Admin];
const ADS: &[Role] = &[Role::Advertiser, Role::Admin];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

static DASHBOARD: LazyLock<Vec<NavItem>> = LazyLock::new(|| {
    vec![
        NavItem::leaf("dashboard-home", "overview")
            .labels("نظرة عامة", "Overview", "جائزہ")
            .path("/dashboard")
            .icon("home")
            .roles(STAFF),
        NavItem::divider("divider-content", "content").labels("المحتوى", "Content", "مواد"),
        NavItem::leaf("dashboard-articles", "articles")
            .labels("الأخبار", "Articles", "خبریں")
            .path("/dashboard/articles")
            .icon("newspaper")
            .roles(NEWSROOM)
            .children(vec![
                NavItem::leaf("dashboard-articles-new", "new-article")
                    .labels("خبر جديد", "New article", "نئی خبر")
                    .path("/dashboard/articles/new")
                    .icon("pencil")
                    .roles(NEWSROOM),
                NavItem::leaf("dashboard-articles-review", "review-queue")
                    .labels("قائمة المراجعة", "Review queue", "جائزہ قطار")
                    .path("/dashboard/articles/review")
                    .icon("check")
                    .roles(REVIEWERS),
            ]),
        NavItem::leaf("dashboard-categories", "categories")
            .labels("التصنيفات", "Categories", "زمرے")
            .path("/dashboard/categories")
            .icon("folder")
            .roles(EDITORS),
        NavItem::leaf("dashboard-comments", "comments")
            .labels("التعليقات", "Comments", "تبصرے")
            .path("/dashboard/comments")
            .icon("chat")
            .roles(MODERATION),
        NavItem::divider("divider-intelligence", "intelligence")
            .labels("الأدوات الذكية", "Intelligence", "ذہین اوزار"),
        NavItem::leaf("dashboard-ai", "ai-tools")
            .labels("أدوات الذكاء الاصطناعي", "AI tools", "اے آئی اوزار")
            .path("/dashboard/ai")
            .icon("sparkles")
            .roles(EDITORS)
            .flag("ai_tools"),
        NavItem::leaf("dashboard-analytics", "analytics")
            .labels("التحليلات", "Analytics", "تجزیات")
            .path("/dashboard/analytics")
            .icon("chart")
            .roles(ANALYTICS),
        NavItem::divider("divider-ads", "advertising")
            .labels("الإعلانات", "Advertising", "اشتہارات"),
        NavItem::leaf("dashboard-ads", "ads")
            .labels("الحملات الإعلانية", "Ad campaigns", "اشتہاری مہمات")
            .path("/dashboard/ads")
            .icon("megaphone")
            .roles(ADS)
            .children(vec![
                NavItem::leaf("dashboard-ads-campaigns", "campaigns")
                    .labels("الحملات", "Campaigns", "مہمات")
                    .path("/dashboard/ads/campaigns")
                    .roles(ADS),
                NavItem::leaf("dashboard-ads-placements", "placements")
                    .labels("المواضع", "Placements", "جگہیں")
                    .path("/dashboard/ads/placements")
                    .roles(ADS),
            ]),
        NavItem::divider("divider-system", "system").labels("النظام", "System", "نظام"),
        NavItem::leaf("dashboard-whatsapp", "whatsapp")
            .labels("استقبال واتساب", "WhatsApp ingestion", "واٹس ایپ وصولی")
            .path("/dashboard/whatsapp")
            .icon("phone")
            .roles(EDITORS)
            .flag("whatsapp_ingest"),
        NavItem::leaf("dashboard-notifications", "notifications")
            .labels("الإشعارات", "Notifications", "اطلاعات")
            .path("/dashboard/notifications")
            .icon("bell")
            .roles(STAFF),
        NavItem::leaf("dashboard-settings", "settings")
            .labels("الإعدادات", "Settings", "ترتیبات")
            .path("/dashboard/settings")
            .icon("cog")
            .roles(ADMIN_ONLY),
    ]
});

static URDU: LazyLock<Vec<NavItem>> = LazyLock::new(|| {
    vec![
        NavItem::leaf("urdu-home", "overview")
            .labels("نظرة عامة", "Overview", "جائزہ")
            .path("/ur/dashboard")
            .icon("home")
            .roles(STAFF),
        NavItem::divider("urdu-divider-content", "content").labels("المحتوى", "Content", "مواد"),
        NavItem::leaf("urdu-articles", "articles")
            .labels("الأخبار", "Articles", "خبریں")
            .path("/ur/dashboard/articles")
            .icon("newspaper")
            .roles(NEWSROOM)
            .children(vec![NavItem::leaf("urdu-articles-new", "new-article")
                .labels("خبر جديد", "New article", "نئی خبر")
                .path("/ur/dashboard/articles/new")
                .icon("pencil")
                .roles(NEWSROOM)]),
        NavItem::leaf("urdu-categories", "categories")
            .labels("التصنيفات", "Categories", "زمرے")
            .path("/ur/dashboard/categories")
            .icon("folder")
            .roles(EDITORS),
        NavItem::divider("urdu-divider-system", "system").labels("النظام", "System", "نظام"),
        NavItem::leaf("urdu-notifications", "notifications")
            .labels("الإشعارات", "Notifications", "اطلاعات")
            .path("/ur/dashboard/notifications")
            .icon("bell")
            .roles(STAFF),
        NavItem::leaf("urdu-settings", "settings")
            .labels("الإعدادات", "Settings", "ترتیبات")
            .path("/ur/dashboard/settings")
            .icon("cog")
            .roles(ADMIN_ONLY),
    ]
});

static PUBLISHER: LazyLock<Vec<NavItem>> = LazyLock::new(|| {
    vec![
        NavItem::leaf("publisher-home", "overview")
            .labels("نظرة عامة", "Overview", "جائزہ")
            .path("/publisher")
            .icon("home")
            .roles(ADS),
        NavItem::divider("publisher-divider-campaigns", "campaigns")
            .labels("الحملات", "Campaigns", "مہمات"),
        NavItem::leaf("publisher-campaigns", "campaigns")
            .labels("حملاتي", "My campaigns", "میری مہمات")
            .path("/publisher/campaigns")
            .icon("megaphone")
            .roles(ADS)
            .children(vec![NavItem::leaf("publisher-campaigns-new", "new-campaign")
                .labels("حملة جديدة", "New campaign", "نئی مہم")
                .path("/publisher/campaigns/new")
                .roles(ADS)]),
        NavItem::leaf("publisher-creatives", "creatives")
            .labels("التصاميم", "Creatives", "تخلیقات")
            .path("/publisher/creatives")
            .icon("image")
            .roles(ADS),
        NavItem::leaf("publisher-reports", "reports")
            .labels("التقارير", "Reports", "رپورٹیں")
            .path("/publisher/reports")
            .icon("chart")
            .roles(ADS),
    ]
});

/// Main (Arabic) dashboard tree.
pub fn dashboard_tree() -> &'static [NavItem] {
    &DASHBOARD
}

/// Urdu dashboard tree, rooted under `/ur/dashboard`.
pub fn urdu_tree() -> &'static [NavItem] {
    &URDU
}

/// Advertiser-facing publisher tree.
pub fn publisher_tree() -> &'static [NavItem] {
    &PUBLISHER
}
