use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::messaging::dtos::{
    MessageAdRef, MessageKind, MessageSummaryDto, MessageUserRef, SendMessageDto,
};
use crate::shared::types::PaginationQuery;

/// One message row joined with both participants and, when linked through a
/// proposition, the targeted ad.
#[derive(Debug, FromRow)]
pub struct MessageSummaryRow {
    pub id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub sender_id: Uuid,
    pub sender_name: String,
    pub receiver_id: Uuid,
    pub receiver_name: String,
    pub proposition_id: Option<Uuid>,
    pub ad_id: Option<Uuid>,
    pub ad_title: Option<String>,
}

const MESSAGE_SELECT: &str = r#"
    SELECT
        m.id, m.content, m.created_at, m.read_at,
        s.id AS sender_id, s.name AS sender_name,
        r.id AS receiver_id, r.name AS receiver_name,
        m.proposition_id,
        a.id AS ad_id, a.title AS ad_title
    FROM messages m
    JOIN users s ON s.id = m.sender_id
    JOIN users r ON r.id = m.receiver_id
    LEFT JOIN propositions p ON p.id = m.proposition_id
    LEFT JOIN ads a ON a.id = p.ad_id
"#;

/// Summarize a message from `user_id`'s point of view.
///
/// The counterpart is whichever participant is not `user_id`. A message linked
/// to a proposition whose ad has since been deleted keeps its kind but loses
/// the ad reference.
pub fn summarize(user_id: Uuid, row: MessageSummaryRow) -> MessageSummaryDto {
    let other_user = if row.sender_id == user_id {
        MessageUserRef {
            id: row.receiver_id,
            name: row.receiver_name,
        }
    } else {
        MessageUserRef {
            id: row.sender_id,
            name: row.sender_name,
        }
    };

    let kind = if row.proposition_id.is_some() {
        MessageKind::Proposition
    } else {
        MessageKind::Direct
    };

    let ad = match (row.ad_id, row.ad_title) {
        (Some(id), Some(title)) => Some(MessageAdRef { id, title }),
        _ => None,
    };

    MessageSummaryDto {
        id: row.id,
        content: row.content,
        created_at: row.created_at,
        is_read: row.read_at.is_some(),
        other_user,
        kind,
        ad,
    }
}

/// Service for user-to-user messages
pub struct MessageService {
    pool: PgPool,
}

impl MessageService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List a user's messages, sent and received, newest first
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        params: &PaginationQuery,
    ) -> Result<(Vec<MessageSummaryDto>, i64)> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM messages WHERE sender_id = $1 OR receiver_id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count messages for {}: {:?}", user_id, e);
            AppError::Database(e)
        })?;

        let rows = sqlx::query_as::<_, MessageSummaryRow>(&format!(
            "{} WHERE m.sender_id = $1 OR m.receiver_id = $1 \
             ORDER BY m.created_at DESC OFFSET $2 LIMIT $3",
            MESSAGE_SELECT
        ))
        .bind(user_id)
        .bind(params.offset())
        .bind(params.limit())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch messages for {}: {:?}", user_id, e);
            AppError::Database(e)
        })?;

        Ok((
            rows.into_iter().map(|r| summarize(user_id, r)).collect(),
            total,
        ))
    }

    /// Most recent messages involving a user, for the dashboard
    pub async fn recent_for_user(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<MessageSummaryDto>> {
        let rows = sqlx::query_as::<_, MessageSummaryRow>(&format!(
            "{} WHERE m.sender_id = $1 OR m.receiver_id = $1 \
             ORDER BY m.created_at DESC LIMIT $2",
            MESSAGE_SELECT
        ))
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch recent messages for {}: {:?}", user_id, e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(|r| summarize(user_id, r)).collect())
    }

    /// Number of unread messages a user has received
    pub async fn unread_count(&self, user_id: Uuid) -> Result<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM messages WHERE receiver_id = $1 AND read_at IS NULL",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count unread messages for {}: {:?}", user_id, e);
            AppError::Database(e)
        })
    }

    /// Send a message to another user, optionally within a proposition thread
    pub async fn send(&self, sender_id: Uuid, dto: &SendMessageDto) -> Result<MessageSummaryDto> {
        if dto.receiver_id == sender_id {
            return Err(AppError::BadRequest(
                "You cannot send a message to yourself".to_string(),
            ));
        }

        let receiver_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)",
        )
        .bind(dto.receiver_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if !receiver_exists {
            return Err(AppError::NotFound("Recipient not found".to_string()));
        }

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO messages (sender_id, receiver_id, proposition_id, content)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(sender_id)
        .bind(dto.receiver_id)
        .bind(dto.proposition_id)
        .bind(&dto.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to send message: {:?}", e);
            AppError::Database(e)
        })?;

        info!("Message sent: id={} receiver={}", id, dto.receiver_id);

        let row = sqlx::query_as::<_, MessageSummaryRow>(&format!(
            "{} WHERE m.id = $1",
            MESSAGE_SELECT
        ))
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(summarize(sender_id, row))
    }

    /// Mark a received message as read. Only the receiver may do this.
    pub async fn mark_read(&self, user_id: Uuid, message_id: Uuid) -> Result<()> {
        let receiver_id = sqlx::query_scalar::<_, Uuid>(
            "SELECT receiver_id FROM messages WHERE id = $1",
        )
        .bind(message_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound("Message not found".to_string()))?;

        if receiver_id != user_id {
            return Err(AppError::Forbidden(
                "Only the recipient can mark a message as read".to_string(),
            ));
        }

        sqlx::query("UPDATE messages SET read_at = NOW() WHERE id = $1 AND read_at IS NULL")
            .bind(message_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn row(sender_id: Uuid, receiver_id: Uuid) -> MessageSummaryRow {
        MessageSummaryRow {
            id: Uuid::new_v4(),
            content: "On troque ?".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            read_at: None,
            sender_id,
            sender_name: Name().fake(),
            receiver_id,
            receiver_name: Name().fake(),
            proposition_id: None,
            ad_id: None,
            ad_title: None,
        }
    }

    #[test]
    fn test_summarize_other_user_is_receiver_when_user_sent() {
        let me = Uuid::new_v4();
        let them = Uuid::new_v4();
        let summary = summarize(me, row(me, them));
        assert_eq!(summary.other_user.id, them);
    }

    #[test]
    fn test_summarize_other_user_is_sender_when_user_received() {
        let me = Uuid::new_v4();
        let them = Uuid::new_v4();
        let summary = summarize(me, row(them, me));
        assert_eq!(summary.other_user.id, them);
        assert_ne!(summary.other_user.id, me);
    }

    #[test]
    fn test_summarize_is_read_tracks_read_at() {
        let me = Uuid::new_v4();
        let them = Uuid::new_v4();

        let unread = summarize(me, row(them, me));
        assert!(!unread.is_read);

        let mut read_row = row(them, me);
        read_row.read_at = Some(Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap());
        let read = summarize(me, read_row);
        assert!(read.is_read);
    }

    #[test]
    fn test_summarize_kind_and_deleted_ad_degrade() {
        let me = Uuid::new_v4();
        let them = Uuid::new_v4();

        let direct = summarize(me, row(me, them));
        assert_eq!(direct.kind, MessageKind::Direct);
        assert!(direct.ad.is_none());

        // Proposition-linked but the ad is gone: kind survives, ad is null.
        let mut orphaned = row(me, them);
        orphaned.proposition_id = Some(Uuid::new_v4());
        let orphaned = summarize(me, orphaned);
        assert_eq!(orphaned.kind, MessageKind::Proposition);
        assert!(orphaned.ad.is_none());

        let mut linked = row(me, them);
        linked.proposition_id = Some(Uuid::new_v4());
        linked.ad_id = Some(Uuid::new_v4());
        linked.ad_title = Some("Vélo contre guitare".to_string());
        let linked = summarize(me, linked);
        assert_eq!(linked.kind, MessageKind::Proposition);
        assert!(linked.ad.is_some());
    }
}
