use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    Active,
    Paused,
    Completed,
}

/// Advertising campaign, the root of the ads hierarchy:
/// campaign -> ad group -> creative, placed through placements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: Uuid,
    pub name: String,
    pub advertiser_name: String,
    pub status: CampaignStatus,
    pub budget_halalas: i64,
    pub spent_halalas: i64,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampaignDraft {
    pub name: String,
    pub advertiser_name: String,
    pub budget_halalas: i64,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdGroup {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub name: String,
    /// Targeting expressed as category slugs; empty means run-of-site.
    #[serde(default)]
    pub target_categories: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creative {
    pub id: Uuid,
    pub ad_group_id: Uuid,
    pub headline: String,
    pub image_url: Option<String>,
    pub click_url: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub id: Uuid,
    pub slot: String,
    pub locale: Option<crate::models::Locale>,
    pub creative_id: Option<Uuid>,
    pub active: bool,
}
