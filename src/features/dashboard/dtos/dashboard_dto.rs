use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::messaging::dtos::MessageSummaryDto;

/// Proposition counts for a user, as proposer or ad owner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PropositionStatsDto {
    pub total: i64,
    pub pending: i64,
    pub accepted: i64,
    pub completed: i64,
    pub rejected: i64,
    pub cancelled: i64,
}

/// Everything the dashboard page renders in one payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    pub proposition_stats: PropositionStatsDto,
    pub recent_messages: Vec<MessageSummaryDto>,
    pub unread_count: i64,
}
