pub mod ads;
pub mod ai_tools;
pub mod articles;
pub mod dashboard;
pub mod home;
pub mod ingest;
pub mod login;
pub mod not_found;

pub use ads::{CampaignNewPage, CampaignsPage, CreativesPage, PlacementsPage, ReportsPage};
pub use ai_tools::AiToolsPage;
pub use articles::{ArticleEditorPage, ArticlesPage, ReviewQueuePage};
pub use dashboard::{
    AnalyticsPage, CategoriesPage, CommentsPage, NotificationsPage, OverviewPage, SettingsPage,
};
pub use home::{ArticlePage, CategoryPage, HomePage};
pub use ingest::IngestPage;
pub use login::LoginPage;
pub use not_found::NotFound;
