//! Assignment database models

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;

/// Database model for the assignments table
///
/// `slot_date` is a denormalized copy of the slot's calendar day, kept so the
/// `(user_id, slot_date)` unique index can back the one-per-day invariant.
#[derive(Debug, Clone, FromRow)]
pub struct AssignmentModel {
    pub id: i64,
    pub slot_id: i64,
    pub user_id: i64,
    pub assigned_by: i64,
    pub slot_date: NaiveDate,
    pub assigned_at: DateTime<Utc>,
}

/// Join row feeding the conflict checker: a confirmed assignment together
/// with its slot's date, times, and ministry title.
#[derive(Debug, Clone, FromRow)]
pub struct AssignedSlotRow {
    pub assignment_id: i64,
    pub slot_id: i64,
    pub slot_title: String,
    pub slot_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub ministry_title: String,
}
