//! SlotInvite entity <-> model mapper

use escala_core::entities::SlotInvite;
use escala_core::value_objects::Snowflake;

use crate::models::SlotInviteModel;

impl From<SlotInviteModel> for SlotInvite {
    fn from(model: SlotInviteModel) -> Self {
        SlotInvite {
            id: Snowflake::new(model.id),
            slot_id: Snowflake::new(model.slot_id),
            email: model.email,
            status: model.status.parse().unwrap_or_default(),
            accepted_by: model.accepted_by.map(Snowflake::new),
            accepted_at: model.accepted_at,
            created_at: model.created_at,
        }
    }
}
