//! PostgreSQL implementation of AssignmentRepository
//!
//! The assignments table is the single source of truth for confirmed
//! bookings. Two named unique constraints back the engine's guarantees:
//! `assignments_slot_user_key` (no duplicate enrollment) and
//! `assignments_user_day_key` (at most one confirmed assignment per member
//! per calendar date, over the denormalized `slot_date` column).

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use escala_core::entities::Assignment;
use escala_core::error::DomainError;
use escala_core::scheduling::{find_same_day_conflict, AssignedSlot};
use escala_core::traits::{AssignmentRepository, RepoResult};
use escala_core::value_objects::Snowflake;

use crate::models::{AssignedSlotRow, AssignmentModel};

use super::error::{assignment_not_found, map_db_error, unique_constraint};

const ASSIGNED_SLOTS_QUERY: &str = r#"
    SELECT a.id AS assignment_id, s.id AS slot_id, s.title AS slot_title,
           s.date AS slot_date, s.start_time, s.end_time,
           m.title AS ministry_title
    FROM assignments a
    JOIN slots s ON s.id = a.slot_id
    JOIN ministries m ON m.id = s.ministry_id
    WHERE a.user_id = $1
    ORDER BY s.date, s.start_time
"#;

/// PostgreSQL implementation of AssignmentRepository
#[derive(Clone)]
pub struct PgAssignmentRepository {
    pool: PgPool,
}

impl PgAssignmentRepository {
    /// Create a new PgAssignmentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build the structured conflict payload after the per-day backstop
    /// fired: the row that won the race is reloaded so the caller can name
    /// the blocking slot.
    async fn day_conflict_for(
        &self,
        user_id: Snowflake,
        slot_date: NaiveDate,
    ) -> RepoResult<DomainError> {
        let assigned = self.load_assigned_slots(user_id).await?;
        match find_same_day_conflict(&assigned, slot_date, None) {
            Some(conflict) => Ok(DomainError::ScheduleConflict(conflict)),
            // The winning row was removed between the violation and this
            // read; report the violation as-is.
            None => Ok(DomainError::DatabaseError(
                "same-day uniqueness violated".to_string(),
            )),
        }
    }

    async fn load_assigned_slots(&self, user_id: Snowflake) -> RepoResult<Vec<AssignedSlot>> {
        let rows = sqlx::query_as::<_, AssignedSlotRow>(ASSIGNED_SLOTS_QUERY)
            .bind(user_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(AssignedSlot::from).collect())
    }
}

#[async_trait]
impl AssignmentRepository for PgAssignmentRepository {
    #[instrument(skip(self))]
    async fn find(&self, slot_id: Snowflake, user_id: Snowflake) -> RepoResult<Option<Assignment>> {
        let result = sqlx::query_as::<_, AssignmentModel>(
            r#"
            SELECT id, slot_id, user_id, assigned_by, slot_date, assigned_at
            FROM assignments
            WHERE slot_id = $1 AND user_id = $2
            "#,
        )
        .bind(slot_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Assignment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_slot(&self, slot_id: Snowflake) -> RepoResult<Vec<Assignment>> {
        let results = sqlx::query_as::<_, AssignmentModel>(
            r#"
            SELECT id, slot_id, user_id, assigned_by, slot_date, assigned_at
            FROM assignments
            WHERE slot_id = $1
            ORDER BY assigned_at
            "#,
        )
        .bind(slot_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Assignment::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_assigned_slots(&self, user_id: Snowflake) -> RepoResult<Vec<AssignedSlot>> {
        self.load_assigned_slots(user_id).await
    }

    #[instrument(skip(self))]
    async fn count_for_slot(&self, slot_id: Snowflake) -> RepoResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM assignments WHERE slot_id = $1")
                .bind(slot_id.into_inner())
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self, assignment))]
    async fn create(&self, assignment: &Assignment, slot_date: NaiveDate) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO assignments (id, slot_id, user_id, assigned_by, slot_date, assigned_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(assignment.id.into_inner())
        .bind(assignment.slot_id.into_inner())
        .bind(assignment.user_id.into_inner())
        .bind(assignment.assigned_by.into_inner())
        .bind(slot_date)
        .bind(assignment.assigned_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) => match unique_constraint(&e) {
                Some("assignments_slot_user_key") => Err(DomainError::AlreadyAssigned),
                Some("assignments_user_day_key") => {
                    Err(self.day_conflict_for(assignment.user_id, slot_date).await?)
                }
                _ => Err(map_db_error(e)),
            },
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, slot_id: Snowflake, user_id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM assignments WHERE slot_id = $1 AND user_id = $2")
            .bind(slot_id.into_inner())
            .bind(user_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(assignment_not_found());
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
        assert_send_sync::<PgAssignmentRepository>();
    }
}
