use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::propositions::dtos::{
    CreatePropositionDto, PropositionAdRef, PropositionDto, PropositionUserRef,
};
use crate::features::propositions::models::PropositionStatus;
use crate::shared::types::PaginationQuery;

#[derive(Debug, FromRow)]
struct PropositionRow {
    id: Uuid,
    message: Option<String>,
    status: PropositionStatus,
    created_at: chrono::DateTime<chrono::Utc>,
    proposer_id: Uuid,
    proposer_name: String,
    ad_id: Option<Uuid>,
    ad_title: Option<String>,
}

const PROPOSITION_SELECT: &str = r#"
    SELECT
        p.id, p.message, p.status, p.created_at,
        u.id AS proposer_id, u.name AS proposer_name,
        a.id AS ad_id, a.title AS ad_title
    FROM propositions p
    JOIN users u ON u.id = p.user_id
    LEFT JOIN ads a ON a.id = p.ad_id
"#;

/// Service for barter propositions
pub struct PropositionService {
    pool: PgPool,
}

impl PropositionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List propositions involving a user, as proposer or as owner of the
    /// targeted ad, newest first
    pub async fn list_involving(
        &self,
        user_id: Uuid,
        params: &PaginationQuery,
    ) -> Result<(Vec<PropositionDto>, i64)> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM propositions p
            LEFT JOIN ads a ON a.id = p.ad_id
            WHERE p.user_id = $1 OR a.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count propositions for {}: {:?}", user_id, e);
            AppError::Database(e)
        })?;

        let rows = sqlx::query_as::<_, PropositionRow>(&format!(
            "{} WHERE p.user_id = $1 OR a.user_id = $1 ORDER BY p.created_at DESC OFFSET $2 LIMIT $3",
            PROPOSITION_SELECT
        ))
        .bind(user_id)
        .bind(params.offset())
        .bind(params.limit())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list propositions for {}: {:?}", user_id, e);
            AppError::Database(e)
        })?;

        Ok((rows.into_iter().map(dto_from_row).collect(), total))
    }

    /// Create a proposition against someone else's ad
    pub async fn create(&self, user_id: Uuid, dto: &CreatePropositionDto) -> Result<PropositionDto> {
        let ad_owner = sqlx::query_scalar::<_, Uuid>(
            "SELECT user_id FROM ads WHERE id = $1 AND is_active",
        )
        .bind(dto.ad_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound("Ad not found".to_string()))?;

        if ad_owner == user_id {
            return Err(AppError::BadRequest(
                "You cannot make a proposition on your own ad".to_string(),
            ));
        }

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO propositions (user_id, ad_id, message)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(dto.ad_id)
        .bind(&dto.message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create proposition: {:?}", e);
            AppError::Database(e)
        })?;

        info!("Proposition created: id={} ad={}", id, dto.ad_id);

        let row = sqlx::query_as::<_, PropositionRow>(&format!(
            "{} WHERE p.id = $1",
            PROPOSITION_SELECT
        ))
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(dto_from_row(row))
    }
}

fn dto_from_row(row: PropositionRow) -> PropositionDto {
    let ad = match (row.ad_id, row.ad_title) {
        (Some(id), Some(title)) => Some(PropositionAdRef { id, title }),
        _ => None,
    };

    PropositionDto {
        id: row.id,
        message: row.message,
        status: row.status,
        created_at: row.created_at,
        proposer: PropositionUserRef {
            id: row.proposer_id,
            name: row.proposer_name,
        },
        ad,
    }
}
