//! Assignment entity <-> model mappers

use escala_core::entities::Assignment;
use escala_core::scheduling::AssignedSlot;
use escala_core::value_objects::Snowflake;

use crate::models::{AssignedSlotRow, AssignmentModel};

impl From<AssignmentModel> for Assignment {
    fn from(model: AssignmentModel) -> Self {
        Assignment {
            id: Snowflake::new(model.id),
            slot_id: Snowflake::new(model.slot_id),
            user_id: Snowflake::new(model.user_id),
            assigned_by: Snowflake::new(model.assigned_by),
            assigned_at: model.assigned_at,
        }
    }
}

impl From<AssignedSlotRow> for AssignedSlot {
    fn from(row: AssignedSlotRow) -> Self {
        AssignedSlot {
            assignment_id: Snowflake::new(row.assignment_id),
            slot_id: Snowflake::new(row.slot_id),
            slot_title: row.slot_title,
            slot_date: row.slot_date,
            start_time: row.start_time,
            end_time: row.end_time,
            ministry_title: row.ministry_title,
        }
    }
}
