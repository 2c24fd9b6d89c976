//! PostgreSQL implementation of SlotInviteRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use escala_core::entities::SlotInvite;
use escala_core::traits::{RepoResult, SlotInviteRepository};
use escala_core::value_objects::Snowflake;

use crate::models::SlotInviteModel;

use super::error::{invite_not_found, map_db_error};

/// PostgreSQL implementation of SlotInviteRepository
#[derive(Clone)]
pub struct PgSlotInviteRepository {
    pool: PgPool,
}

impl PgSlotInviteRepository {
    /// Create a new PgSlotInviteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlotInviteRepository for PgSlotInviteRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<SlotInvite>> {
        let result = sqlx::query_as::<_, SlotInviteModel>(
            r#"
            SELECT id, slot_id, email, status, accepted_by, accepted_at, created_at
            FROM slot_invites
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(SlotInvite::from))
    }

    #[instrument(skip(self))]
    async fn find_by_slot(&self, slot_id: Snowflake) -> RepoResult<Vec<SlotInvite>> {
        let results = sqlx::query_as::<_, SlotInviteModel>(
            r#"
            SELECT id, slot_id, email, status, accepted_by, accepted_at, created_at
            FROM slot_invites
            WHERE slot_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(slot_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(SlotInvite::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Vec<SlotInvite>> {
        let results = sqlx::query_as::<_, SlotInviteModel>(
            r#"
            SELECT id, slot_id, email, status, accepted_by, accepted_at, created_at
            FROM slot_invites
            WHERE email = LOWER(TRIM($1))
            ORDER BY created_at DESC
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(SlotInvite::from).collect())
    }

    /// Re-invitation semantics: a fresh invite always supersedes a stale one,
    /// regardless of its prior status. Delete and insert commit together or
    /// not at all.
    #[instrument(skip(self, invite))]
    async fn replace(&self, invite: &SlotInvite) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM slot_invites WHERE slot_id = $1 AND email = $2")
            .bind(invite.slot_id.into_inner())
            .bind(&invite.email)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO slot_invites (id, slot_id, email, status, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(invite.id.into_inner())
        .bind(invite.slot_id.into_inner())
        .bind(&invite.email)
        .bind(invite.status.as_str())
        .bind(invite.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn mark_accepted(
        &self,
        id: Snowflake,
        user_id: Snowflake,
        at: DateTime<Utc>,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE slot_invites
            SET status = 'accepted', accepted_by = $2, accepted_at = $3
            WHERE id = $1 AND status = 'pending'
            "#,
        )
        .bind(id.into_inner())
        .bind(user_id.into_inner())
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(invite_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn mark_declined(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE slot_invites
            SET status = 'declined'
            WHERE id = $1 AND status = 'pending'
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(invite_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM slot_invites WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(invite_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgSlotInviteRepository>();
    }
}
