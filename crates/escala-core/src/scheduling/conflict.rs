//! Same-day conflict detection
//!
//! Pure decision logic: given the slots a member is already confirmed on,
//! decide whether a target calendar date would double-book them. No I/O and
//! no mutation happen here; callers are responsible for loading the member's
//! confirmed assignments and for making the check-then-write sequence atomic.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::value_objects::Snowflake;

/// A confirmed assignment joined with its slot and ministry, as read from the
/// store for conflict evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedSlot {
    pub assignment_id: Snowflake,
    pub slot_id: Snowflake,
    pub slot_title: String,
    pub slot_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub ministry_title: String,
}

/// The slot blocking a requested booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictingSlot {
    pub id: Snowflake,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub ministry_title: String,
}

/// Outcome of a failed conflict check, with a caller-presentable message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SameDayConflict {
    pub conflicting_slot: ConflictingSlot,
    pub message: String,
}

impl SameDayConflict {
    fn new(slot: ConflictingSlot) -> Self {
        let message = format!(
            "Already scheduled for '{}' ({}) on {} from {} to {}",
            slot.title,
            slot.ministry_title,
            slot.date.format("%d/%m/%Y"),
            slot.start_time.format("%H:%M"),
            slot.end_time.format("%H:%M"),
        );
        Self {
            conflicting_slot: slot,
            message,
        }
    }
}

impl std::fmt::Display for SameDayConflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Find the first confirmed assignment that collides with `target_date`.
///
/// `exclude_slot` removes one slot from consideration, used when re-checking
/// a slot the member may already be tied to (e.g. re-invitation to the same
/// slot). Returns `None` when the date is clear.
pub fn find_same_day_conflict(
    assigned: &[AssignedSlot],
    target_date: NaiveDate,
    exclude_slot: Option<Snowflake>,
) -> Option<SameDayConflict> {
    assigned
        .iter()
        .filter(|a| Some(a.slot_id) != exclude_slot)
        .find(|a| a.slot_date == target_date)
        .map(|a| {
            SameDayConflict::new(ConflictingSlot {
                id: a.slot_id,
                title: a.slot_title.clone(),
                date: a.slot_date,
                start_time: a.start_time,
                end_time: a.end_time,
                ministry_title: a.ministry_title.clone(),
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assigned(slot_id: i64, date: (i32, u32, u32)) -> AssignedSlot {
        AssignedSlot {
            assignment_id: Snowflake::new(slot_id * 100),
            slot_id: Snowflake::new(slot_id),
            slot_title: format!("Shift {slot_id}"),
            slot_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            ministry_title: "Reception".to_string(),
        }
    }

    #[test]
    fn test_no_assignments_means_no_conflict() {
        let result = find_same_day_conflict(&[], NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(), None);
        assert!(result.is_none());
    }

    #[test]
    fn test_different_date_is_clear() {
        let existing = vec![assigned(1, (2026, 1, 14))];
        let result =
            find_same_day_conflict(&existing, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(), None);
        assert!(result.is_none());
    }

    #[test]
    fn test_same_date_conflicts() {
        let existing = vec![assigned(1, (2026, 1, 14)), assigned(2, (2026, 1, 15))];
        let conflict =
            find_same_day_conflict(&existing, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(), None)
                .expect("should conflict");

        assert_eq!(conflict.conflicting_slot.id, Snowflake::new(2));
        assert_eq!(conflict.conflicting_slot.ministry_title, "Reception");
    }

    #[test]
    fn test_excluded_slot_is_skipped() {
        let existing = vec![assigned(2, (2026, 1, 15))];
        let target = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();

        // Re-checking the slot the member already holds does not self-conflict
        let result = find_same_day_conflict(&existing, target, Some(Snowflake::new(2)));
        assert!(result.is_none());

        // Excluding an unrelated slot changes nothing
        let result = find_same_day_conflict(&existing, target, Some(Snowflake::new(9)));
        assert!(result.is_some());
    }

    #[test]
    fn test_message_uses_day_month_year_format() {
        let existing = vec![assigned(3, (2026, 1, 5))];
        let conflict =
            find_same_day_conflict(&existing, NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(), None)
                .unwrap();

        assert_eq!(
            conflict.message,
            "Already scheduled for 'Shift 3' (Reception) on 05/01/2026 from 08:00 to 12:00"
        );
    }

    #[test]
    fn test_first_match_is_reported() {
        let mut second = assigned(5, (2026, 2, 1));
        second.slot_title = "Late shift".to_string();
        let existing = vec![assigned(4, (2026, 2, 1)), second];

        let conflict =
            find_same_day_conflict(&existing, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(), None)
                .unwrap();
        assert_eq!(conflict.conflicting_slot.id, Snowflake::new(4));
    }
}
