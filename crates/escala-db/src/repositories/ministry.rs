//! PostgreSQL implementation of MinistryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use escala_core::entities::Ministry;
use escala_core::traits::{MinistryRepository, RepoResult};
use escala_core::value_objects::Snowflake;

use crate::models::MinistryModel;

use super::error::{map_db_error, ministry_not_found};

/// PostgreSQL implementation of MinistryRepository
#[derive(Clone)]
pub struct PgMinistryRepository {
    pool: PgPool,
}

impl PgMinistryRepository {
    /// Create a new PgMinistryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MinistryRepository for PgMinistryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Ministry>> {
        let result = sqlx::query_as::<_, MinistryModel>(
            r#"
            SELECT id, title, description, date, created_by, created_at, updated_at
            FROM ministries
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Ministry::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Ministry>> {
        let results = sqlx::query_as::<_, MinistryModel>(
            r#"
            SELECT id, title, description, date, created_by, created_at, updated_at
            FROM ministries
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Ministry::from).collect())
    }

    #[instrument(skip(self, ministry))]
    async fn create(&self, ministry: &Ministry) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO ministries (id, title, description, date, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(ministry.id.into_inner())
        .bind(&ministry.title)
        .bind(&ministry.description)
        .bind(ministry.date)
        .bind(ministry.created_by.into_inner())
        .bind(ministry.created_at)
        .bind(ministry.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, ministry))]
    async fn update(&self, ministry: &Ministry) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE ministries
            SET title = $2, description = $3, date = $4, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(ministry.id.into_inner())
        .bind(&ministry.title)
        .bind(&ministry.description)
        .bind(ministry.date)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(ministry_not_found(ministry.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        // Slots (and through them invites/assignments) go with the ministry
        // via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM ministries WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(ministry_not_found(id));
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
        assert_send_sync::<PgMinistryRepository>();
    }
}
