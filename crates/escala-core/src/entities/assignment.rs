//! Assignment entity - a confirmed booking of one member to one slot

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Assignment entity (junction between User and Slot)
///
/// Invariant enforced by the engine and backed by the store: a member holds
/// at most one confirmed assignment per calendar date, across all ministries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub id: Snowflake,
    pub slot_id: Snowflake,
    pub user_id: Snowflake,
    pub assigned_by: Snowflake,
    pub assigned_at: DateTime<Utc>,
}

impl Assignment {
    /// Create a new Assignment
    pub fn new(id: Snowflake, slot_id: Snowflake, user_id: Snowflake, assigned_by: Snowflake) -> Self {
        Self {
            id,
            slot_id,
            user_id,
            assigned_by,
            assigned_at: Utc::now(),
        }
    }

    /// Check if the member enrolled themselves
    #[inline]
    pub fn is_self_assigned(&self) -> bool {
        self.user_id == self.assigned_by
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_assignment_detection() {
        let own = Assignment::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Snowflake::new(20),
            Snowflake::new(20),
        );
        assert!(own.is_self_assigned());

        let invited = Assignment::new(
            Snowflake::new(2),
            Snowflake::new(10),
            Snowflake::new(20),
            Snowflake::new(99),
        );
        assert!(!invited.is_self_assigned());
    }
}
