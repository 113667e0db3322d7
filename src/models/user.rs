use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Role;

/// Public user information as the session endpoint reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPublic {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    /// Raw backend role strings; fold through [`Role::from_raw_many`] before
    /// any permission check.
    #[serde(default)]
    pub roles: Vec<String>,
    /// Fine-grained permission grants, when the backend issues them.
    #[serde(default)]
    pub permissions: Vec<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UserPublic {
    pub fn canonical_role(&self) -> Role {
        Role::from_raw_many(&self.roles)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub user: UserPublic,
    /// Feature flags enabled for this session.
    #[serde(default)]
    pub flags: std::collections::HashMap<String, bool>,
}
