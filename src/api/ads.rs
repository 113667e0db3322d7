use leptos::prelude::*;
use uuid::Uuid;

use crate::models::{AdGroup, Campaign, CampaignDraft, CampaignStatus, Creative, Placement};

#[server(CampaignsList, "/api")]
pub async fn campaigns_list() -> Result<Vec<Campaign>, ServerFnError> {
    use super::upstream;

    upstream::get_json("/api/ads/campaigns")
        .await
        .map_err(upstream::to_server_error)
}

#[server(CampaignCreate, "/api")]
pub async fn campaign_create(draft: CampaignDraft) -> Result<Campaign, ServerFnError> {
    use super::upstream;

    upstream::post_json("/api/ads/campaigns", &draft)
        .await
        .map_err(upstream::to_server_error)
}

#[server(CampaignSetStatus, "/api")]
pub async fn campaign_set_status(
    id: Uuid,
    status: CampaignStatus,
) -> Result<Campaign, ServerFnError> {
    use super::upstream;

    upstream::put_json(&format!("/api/ads/campaigns/{id}/status"), &status)
        .await
        .map_err(upstream::to_server_error)
}

#[server(AdGroupsList, "/api")]
pub async fn ad_groups_list(campaign_id: Uuid) -> Result<Vec<AdGroup>, ServerFnError> {
    use super::upstream;

    upstream::get_json(&format!("/api/ads/campaigns/{campaign_id}/groups"))
        .await
        .map_err(upstream::to_server_error)
}

#[server(CreativesList, "/api")]
pub async fn creatives_list(ad_group_id: Uuid) -> Result<Vec<Creative>, ServerFnError> {
    use super::upstream;

    upstream::get_json(&format!("/api/ads/groups/{ad_group_id}/creatives"))
        .await
        .map_err(upstream::to_server_error)
}

#[server(PlacementsList, "/api")]
pub async fn placements_list() -> Result<Vec<Placement>, ServerFnError> {
    use super::upstream;

    upstream::get_json("/api/ads/placements")
        .await
        .map_err(upstream::to_server_error)
}
