use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Whether a message belongs to a proposition thread or is free-standing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Proposition,
    Direct,
}

/// The conversation counterpart, never the requesting user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageUserRef {
    pub id: Uuid,
    pub name: String,
}

/// The ad behind a proposition-linked message, when it still exists
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageAdRef {
    pub id: Uuid,
    pub title: String,
}

/// A message summarized from one user's point of view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageSummaryDto {
    pub id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
    pub other_user: MessageUserRef,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub ad: Option<MessageAdRef>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SendMessageDto {
    pub receiver_id: Uuid,
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,
    pub proposition_id: Option<Uuid>,
}
