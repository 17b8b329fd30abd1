use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle of a barter proposition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "proposition_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PropositionStatus {
    Pending,
    Accepted,
    Completed,
    Rejected,
    Cancelled,
}
