use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleStatus {
    Draft,
    InReview,
    Scheduled,
    Published,
    Archived,
}

impl ArticleStatus {
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ArticleStatus::Draft, Locale::Ar) => "مسودة",
            (ArticleStatus::Draft, Locale::En) => "Draft",
            (ArticleStatus::Draft, Locale::Ur) => "مسودہ",
            (ArticleStatus::InReview, Locale::Ar) => "قيد المراجعة",
            (ArticleStatus::InReview, Locale::En) => "In review",
            (ArticleStatus::InReview, Locale::Ur) => "زیر جائزہ",
            (ArticleStatus::Scheduled, Locale::Ar) => "مجدول",
            (ArticleStatus::Scheduled, Locale::En) => "Scheduled",
            (ArticleStatus::Scheduled, Locale::Ur) => "شیڈول شدہ",
            (ArticleStatus::Published, Locale::Ar) => "منشور",
            (ArticleStatus::Published, Locale::En) => "Published",
            (ArticleStatus::Published, Locale::Ur) => "شائع شدہ",
            (ArticleStatus::Archived, Locale::Ar) => "مؤرشف",
            (ArticleStatus::Archived, Locale::En) => "Archived",
            (ArticleStatus::Archived, Locale::Ur) => "محفوظ شدہ",
        }
    }
}

/// Listing shape returned by `/api/articles`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub locale: Locale,
    pub status: ArticleStatus,
    pub category_slug: Option<String>,
    pub author_name: Option<String>,
    pub image_url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

/// Full article as served to the editor and the reader page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub body: String,
    pub excerpt: Option<String>,
    pub locale: Locale,
    pub status: ArticleStatus,
    pub category_slug: Option<String>,
    pub author_name: Option<String>,
    pub image_url: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    pub body: String,
    pub excerpt: Option<String>,
    pub locale: Option<Locale>,
    pub category_slug: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleUpdate {
    pub title: Option<String>,
    pub body: Option<String>,
    pub excerpt: Option<String>,
    pub status: Option<ArticleStatus>,
    pub category_slug: Option<String>,
    pub image_url: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

impl ArticleUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.body.is_none()
            && self.excerpt.is_none()
            && self.status.is_none()
            && self.category_slug.is_none()
            && self.image_url.is_none()
            && self.seo_title.is_none()
            && self.seo_description.is_none()
    }
}
