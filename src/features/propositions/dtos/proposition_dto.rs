use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::propositions::models::PropositionStatus;

/// The ad a proposition targets, when it still exists
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropositionAdRef {
    pub id: Uuid,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropositionUserRef {
    pub id: Uuid,
    pub name: String,
}

/// A proposition as seen by either party
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropositionDto {
    pub id: Uuid,
    pub message: Option<String>,
    pub status: PropositionStatus,
    pub created_at: DateTime<Utc>,
    pub proposer: PropositionUserRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad: Option<PropositionAdRef>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePropositionDto {
    pub ad_id: Uuid,
    #[validate(length(max = 2000, message = "Message must be at most 2000 characters"))]
    pub message: Option<String>,
}
