//! Slot entity <-> model mapper

use escala_core::entities::Slot;
use escala_core::value_objects::Snowflake;

use crate::models::SlotModel;

impl From<SlotModel> for Slot {
    fn from(model: SlotModel) -> Self {
        Slot {
            id: Snowflake::new(model.id),
            ministry_id: Snowflake::new(model.ministry_id),
            title: model.title,
            description: model.description,
            date: model.date,
            start_time: model.start_time,
            end_time: model.end_time,
            // Accepts the legacy "livre" spelling still present in old rows
            mode: model.mode.parse().unwrap_or_default(),
            capacity: model.capacity,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
