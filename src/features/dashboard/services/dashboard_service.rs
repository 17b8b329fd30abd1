use std::sync::Arc;

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::dashboard::dtos::{DashboardDto, PropositionStatsDto};
use crate::features::messaging::services::MessageService;
use crate::features::propositions::models::PropositionStatus;
use crate::shared::constants::DASHBOARD_RECENT_MESSAGES_LIMIT;

#[derive(Debug, FromRow)]
struct StatusCount {
    status: PropositionStatus,
    count: i64,
}

fn fold_stats(rows: Vec<StatusCount>) -> PropositionStatsDto {
    let mut stats = PropositionStatsDto::default();
    for row in rows {
        stats.total += row.count;
        match row.status {
            PropositionStatus::Pending => stats.pending = row.count,
            PropositionStatus::Accepted => stats.accepted = row.count,
            PropositionStatus::Completed => stats.completed = row.count,
            PropositionStatus::Rejected => stats.rejected = row.count,
            PropositionStatus::Cancelled => stats.cancelled = row.count,
        }
    }
    stats
}

/// Aggregates the authenticated user's dashboard in three queries: one
/// grouped proposition count, the recent messages, the unread total.
pub struct DashboardService {
    pool: PgPool,
    messages: Arc<MessageService>,
}

impl DashboardService {
    pub fn new(pool: PgPool, messages: Arc<MessageService>) -> Self {
        Self { pool, messages }
    }

    pub async fn overview(&self, user_id: Uuid) -> Result<DashboardDto> {
        let (proposition_stats, recent_messages, unread_count) = tokio::try_join!(
            self.proposition_stats(user_id),
            self.messages
                .recent_for_user(user_id, DASHBOARD_RECENT_MESSAGES_LIMIT),
            self.messages.unread_count(user_id),
        )?;

        Ok(DashboardDto {
            proposition_stats,
            recent_messages,
            unread_count,
        })
    }

    /// Counts propositions where the user is the proposer or owns the ad,
    /// grouped by status in a single pass
    async fn proposition_stats(&self, user_id: Uuid) -> Result<PropositionStatsDto> {
        let rows = sqlx::query_as::<_, StatusCount>(
            r#"
            SELECT p.status, COUNT(*) AS count
            FROM propositions p
            LEFT JOIN ads a ON a.id = p.ad_id
            WHERE p.user_id = $1 OR a.user_id = $1
            GROUP BY p.status
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to aggregate proposition stats for {}: {:?}", user_id, e);
            AppError::Database(e)
        })?;

        Ok(fold_stats(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_stats_empty() {
        let stats = fold_stats(vec![]);
        assert_eq!(stats, PropositionStatsDto::default());
    }

    #[test]
    fn test_fold_stats_totals_all_buckets() {
        let stats = fold_stats(vec![
            StatusCount {
                status: PropositionStatus::Pending,
                count: 3,
            },
            StatusCount {
                status: PropositionStatus::Accepted,
                count: 2,
            },
            StatusCount {
                status: PropositionStatus::Cancelled,
                count: 1,
            },
        ]);

        assert_eq!(stats.total, 6);
        assert_eq!(stats.pending, 3);
        assert_eq!(stats.accepted, 2);
        assert_eq!(stats.cancelled, 1);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.rejected, 0);
    }
}
