//! PostgreSQL implementation of SlotRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use escala_core::entities::Slot;
use escala_core::traits::{RepoResult, SlotRepository};
use escala_core::value_objects::Snowflake;

use crate::models::SlotModel;

use super::error::{map_db_error, slot_not_found};

/// PostgreSQL implementation of SlotRepository
#[derive(Clone)]
pub struct PgSlotRepository {
    pool: PgPool,
}

impl PgSlotRepository {
    /// Create a new PgSlotRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlotRepository for PgSlotRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Slot>> {
        let result = sqlx::query_as::<_, SlotModel>(
            r#"
            SELECT id, ministry_id, title, description, date, start_time, end_time,
                   mode, capacity, created_at, updated_at
            FROM slots
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Slot::from))
    }

    #[instrument(skip(self))]
    async fn find_by_ministry(&self, ministry_id: Snowflake) -> RepoResult<Vec<Slot>> {
        let results = sqlx::query_as::<_, SlotModel>(
            r#"
            SELECT id, ministry_id, title, description, date, start_time, end_time,
                   mode, capacity, created_at, updated_at
            FROM slots
            WHERE ministry_id = $1
            ORDER BY date, start_time
            "#,
        )
        .bind(ministry_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Slot::from).collect())
    }

    #[instrument(skip(self, slot))]
    async fn create(&self, slot: &Slot) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO slots (id, ministry_id, title, description, date, start_time,
                               end_time, mode, capacity, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(slot.id.into_inner())
        .bind(slot.ministry_id.into_inner())
        .bind(&slot.title)
        .bind(&slot.description)
        .bind(slot.date)
        .bind(slot.start_time)
        .bind(slot.end_time)
        .bind(slot.mode.as_str())
        .bind(slot.capacity)
        .bind(slot.created_at)
        .bind(slot.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, slot))]
    async fn update(&self, slot: &Slot) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE slots
            SET title = $2, description = $3, date = $4, start_time = $5,
                end_time = $6, mode = $7, capacity = $8, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(slot.id.into_inner())
        .bind(&slot.title)
        .bind(&slot.description)
        .bind(slot.date)
        .bind(slot.start_time)
        .bind(slot.end_time)
        .bind(slot.mode.as_str())
        .bind(slot.capacity)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(slot_not_found(slot.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM slots WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(slot_not_found(id));
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
        assert_send_sync::<PgSlotRepository>();
    }
}
